// authorization.rs — Authorization statements as immutable values.
//
// An authorization node in an ACL document is read once per request into
// an `Authorization`, so the matchers below never go back to the store for
// anything but group membership. Everything is read in the ACL document's
// own context; statements about the same node elsewhere are invisible.
//
// Unknown agent classes and unknown mode terms are dropped silently: a
// malformed rule matches less, never more.

use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};
use wac_graph::{vocab::acl, GraphStore, Term};

use crate::agent::AgentClass;
use crate::mode::Mode;

/// One `acl:Authorization`, materialized from an ACL document.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Authorization {
    /// The authorization's node in the ACL document.
    pub node: Term,
    /// Resources this rule applies to directly (`acl:accessTo`).
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub access_to: Vec<Term>,
    /// Containers whose members inherit this rule (`acl:default`, `acl:defaultForNew`).
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub default_for: Vec<Term>,
    /// Explicitly listed agents.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub agents: Vec<Term>,
    /// Groups whose members are granted access.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub groups: Vec<Term>,
    /// Audience classes.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub classes: Vec<AgentClass>,
    /// Allowed origins; empty means any origin.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub origins: Vec<Term>,
    /// Modes this rule grants.
    pub modes: BTreeSet<Mode>,
}

impl Authorization {
    /// Read the authorization rooted at `node` from `acl_doc`.
    pub fn from_graph<G: GraphStore + ?Sized>(store: &G, node: &Term, acl_doc: &Term) -> Self {
        let objects = |predicate: &str| store.objects(node, &Term::named(predicate), acl_doc);

        let mut default_for = objects(acl::DEFAULT);
        for container in objects(acl::DEFAULT_FOR_NEW) {
            if !default_for.contains(&container) {
                default_for.push(container);
            }
        }

        Self {
            node: node.clone(),
            access_to: objects(acl::ACCESS_TO),
            default_for,
            agents: objects(acl::AGENT),
            groups: objects(acl::AGENT_GROUP),
            classes: objects(acl::AGENT_CLASS)
                .iter()
                .filter_map(AgentClass::from_term)
                .collect(),
            origins: objects(acl::ORIGIN),
            modes: objects(acl::MODE)
                .iter()
                .filter_map(Mode::from_term)
                .collect(),
        }
    }

    /// Whether the rule is open to everyone (`acl:agentClass foaf:Agent`).
    pub fn is_public(&self) -> bool {
        self.classes.contains(&AgentClass::Public)
    }

    /// Whether the rule admits any authenticated agent.
    pub fn admits_authenticated(&self) -> bool {
        self.classes.contains(&AgentClass::AuthenticatedAgent)
    }

    /// Whether the rule lists any origin at all.
    pub fn is_origin_restricted(&self) -> bool {
        !self.origins.is_empty()
    }

    /// Whether the rule grants `mode`, counting Write as Append.
    pub fn covers(&self, mode: Mode) -> bool {
        mode.is_covered_by(&self.modes)
    }

    /// Short human-readable description for traces.
    pub fn describe(&self) -> String {
        let modes: Vec<String> = self.modes.iter().map(Mode::to_string).collect();
        let mut audience: Vec<String> = Vec::new();
        audience.extend(self.classes.iter().map(|c| format!("{:?}", c)));
        audience.extend(self.agents.iter().map(|a| a.to_string()));
        audience.extend(self.groups.iter().map(|g| format!("group {}", g)));
        format!(
            "{} grants [{}] to [{}]{}",
            self.node,
            modes.join(", "),
            audience.join(", "),
            if self.is_origin_restricted() {
                format!(" from {} origin(s)", self.origins.len())
            } else {
                String::new()
            }
        )
    }
}
