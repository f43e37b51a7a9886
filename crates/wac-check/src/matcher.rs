// matcher.rs — Audience matching.
//
// Checks run in a fixed order and the first that decides wins:
//
// 1. Public rule                → match (anonymous included)
// 2. Anonymous agent            → no match
// 3. AuthenticatedAgent rule    → match
// 4. Agent listed explicitly    → match
// 5. Agent in a listed group    → match (membership read from the group's
//                                 own document through the store)
// 6. Otherwise                  → no match

use wac_graph::{vocab::vcard, GraphStore, Term};

use crate::agent::Agent;
use crate::authorization::Authorization;
use crate::log::DecisionLog;

/// Whether `agent` is in the audience of `auth`.
pub fn agent_matches<G: GraphStore + ?Sized>(
    store: &G,
    auth: &Authorization,
    agent: &Agent,
    log: &dyn DecisionLog,
) -> bool {
    if auth.is_public() {
        log.log("    audience: public rule, matches everyone");
        return true;
    }
    let id = match agent.id() {
        Some(id) => id,
        None => {
            log.log("    audience: not public and not logged on");
            return false;
        }
    };
    if auth.admits_authenticated() {
        log.log("    audience: AuthenticatedAgent, logged in");
        return true;
    }
    if auth.agents.contains(id) {
        log.log("    audience: agent listed explicitly");
        return true;
    }
    if let Some(group) = auth.groups.iter().find(|g| is_member(store, g, id)) {
        log.log(&format!("    audience: agent is a member of {}", group));
        return true;
    }
    log.log("    audience: agent and group checks fail");
    false
}

/// Group membership, asked of the group's own document only.
fn is_member<G: GraphStore + ?Sized>(store: &G, group: &Term, agent: &Term) -> bool {
    match group.doc() {
        Some(group_doc) => store.holds(group, &Term::named(vcard::HAS_MEMBER), agent, &group_doc),
        None => false,
    }
}
