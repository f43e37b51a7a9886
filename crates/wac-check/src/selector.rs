// selector.rs — Candidate authorization selection.
//
// Direct and inherited lookups are mutually exclusive per call:
//
//   no directory  → rules with `acl:accessTo <resource>`
//   directory     → rules with `acl:default <directory>` or the deprecated
//                   `acl:defaultForNew <directory>`
//
// When inheritance is requested the resource's own accessTo rules are not
// consulted, and a container's accessTo rules never reach its members.

use wac_graph::{vocab::acl, GraphStore, Term};

use crate::authorization::Authorization;

/// Select and materialize the authorizations relevant to one request.
///
/// Candidates come back in document order, each node at most once.
pub fn select_candidates<G: GraphStore + ?Sized>(
    store: &G,
    resource: &Term,
    directory: Option<&Term>,
    acl_doc: &Term,
) -> Vec<Authorization> {
    let nodes = match directory {
        None => store.subjects(&Term::named(acl::ACCESS_TO), resource, acl_doc),
        Some(dir) => {
            let mut nodes = store.subjects(&Term::named(acl::DEFAULT), dir, acl_doc);
            nodes.extend(store.subjects(&Term::named(acl::DEFAULT_FOR_NEW), dir, acl_doc));
            nodes
        }
    };

    let mut seen: Vec<&Term> = Vec::with_capacity(nodes.len());
    let mut candidates = Vec::with_capacity(nodes.len());
    for node in &nodes {
        if seen.contains(&node) {
            continue;
        }
        seen.push(node);
        candidates.push(Authorization::from_graph(store, node, acl_doc));
    }
    candidates
}
