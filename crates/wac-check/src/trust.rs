// trust.rs — Trust delegation to client applications.
//
// A resource owner can trust an application origin with some modes in their
// own profile, outside any ACL document:
//
//   <owner> acl:trustedApp _:t .
//   _:t acl:origin <https://apps.example.com> ; acl:mode acl:Read, acl:Write .
//
// Owners are the agents listed on the Control authorizations for a resource.
// Their profiles usually live elsewhere, so fetching them is delegated to a
// `ProfileFetcher` supplied by the caller. That fetch is the only suspension
// point here; timeouts, retries and caching belong to the fetcher.
//
// Nothing in this module runs inside `decide`. Callers resolve trusted modes
// first and hand them in through `AccessRequest::with_trusted_modes`.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use wac_graph::{vocab::acl, GraphStore, Term};

use crate::log::log;
use crate::mode::Mode;
use crate::selector::select_candidates;

/// Loads an owner's personal graph (their profile document and whatever
/// else the implementation chooses to merge in).
#[async_trait]
pub trait ProfileFetcher: Send + Sync {
    type Graph: GraphStore + Send + Sync;
    type Error: std::error::Error + Send + Sync + 'static;

    async fn fetch_owner_graph(&self, owner: &Term) -> Result<Self::Graph, Self::Error>;
}

/// One `acl:trustedApp` entry from an owner's profile.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TrustedAppDeclaration {
    pub owner: Term,
    pub origin: Term,
    /// Modes in statement order; unknown mode terms are dropped.
    pub modes: Vec<Mode>,
}

/// Every trust declaration `owner` makes in their own document.
///
/// A declaration naming several origins yields one entry per origin.
/// Owners that are not named nodes have no document and declare nothing.
pub fn trusted_apps<G: GraphStore + ?Sized>(owner_graph: &G, owner: &Term) -> Vec<TrustedAppDeclaration> {
    let Some(doc) = owner.doc() else {
        return Vec::new();
    };

    let mut declarations = Vec::new();
    for app in owner_graph.objects(owner, &Term::named(acl::TRUSTED_APP), &doc) {
        let modes: Vec<Mode> = owner_graph
            .objects(&app, &acl::mode(), &doc)
            .iter()
            .filter_map(Mode::from_term)
            .collect();
        for origin in owner_graph.objects(&app, &acl::origin(), &doc) {
            declarations.push(TrustedAppDeclaration {
                owner: owner.clone(),
                origin,
                modes: modes.clone(),
            });
        }
    }
    declarations
}

/// The owners of `doc`: distinct agents on its Control authorizations.
///
/// Both the direct (`acl:accessTo doc`) and, when `directory` is given, the
/// inherited (`acl:default directory`) rules count.
pub fn owners<G: GraphStore + ?Sized>(store: &G, doc: &Term, directory: Option<&Term>, acl_doc: &Term) -> Vec<Term> {
    let mut rules = select_candidates(store, doc, None, acl_doc);
    if let Some(dir) = directory {
        for auth in select_candidates(store, doc, Some(dir), acl_doc) {
            if !rules.iter().any(|r| r.node == auth.node) {
                rules.push(auth);
            }
        }
    }

    let mut owners: Vec<Term> = Vec::new();
    for auth in rules.iter().filter(|a| a.modes.contains(&Mode::Control)) {
        for agent in &auth.agents {
            if !owners.contains(agent) {
                owners.push(agent.clone());
            }
        }
    }
    owners
}

/// Modes the owners of `doc` trust `origin` with.
///
/// Modes are concatenated in discovery order (owner by owner, declaration by
/// declaration) and may repeat. The list is empty when there is no Control
/// authorization or no matching declaration. The first fetch failure aborts
/// the whole resolution and is returned as-is.
pub async fn trusted_modes_for_origin<G, F>(
    store: &G,
    doc: &Term,
    directory: Option<&Term>,
    acl_doc: &Term,
    origin: &Term,
    fetcher: &F,
) -> Result<Vec<Mode>, F::Error>
where
    G: GraphStore + ?Sized,
    F: ProfileFetcher + ?Sized,
{
    let owners = owners(store, doc, directory, acl_doc);
    if owners.is_empty() {
        log(&format!("trust: no Control authorization for {}", doc));
        return Ok(Vec::new());
    }

    let mut modes = Vec::new();
    for owner in &owners {
        let graph = fetcher.fetch_owner_graph(owner).await?;
        for declaration in trusted_apps(&graph, owner) {
            if &declaration.origin == origin {
                log(&format!(
                    "trust: {} trusts {} with {} mode(s)",
                    owner,
                    origin,
                    declaration.modes.len()
                ));
                modes.extend(declaration.modes);
            }
        }
    }
    Ok(modes)
}
