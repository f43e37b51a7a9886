// request.rs — One access request, built per call and thrown away.

use serde::{Deserialize, Serialize};
use wac_graph::Term;

use crate::agent::Agent;
use crate::error::AclError;
use crate::mode::Mode;

/// Everything the engine needs to decide one access.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AccessRequest {
    /// The resource being accessed.
    pub resource: Term,
    /// Set when the ACL is inherited: the container whose `acl:default`
    /// rules apply. Direct `acl:accessTo` rules are then not consulted.
    #[serde(default)]
    pub directory: Option<Term>,
    /// The document holding the authorizations.
    pub acl_doc: Term,
    /// Who is asking.
    #[serde(default)]
    pub agent: Agent,
    /// Every mode the operation needs.
    pub modes: Vec<Mode>,
    /// The client application's origin, when the request carried one.
    #[serde(default)]
    pub origin: Option<Term>,
    /// Origins exempt from origin checks for this request.
    #[serde(default)]
    pub trusted_origins: Vec<Term>,
    /// Modes the resource owners trust `origin` with, resolved beforehand
    /// (see [`crate::trust::trusted_modes_for_origin`]).
    #[serde(default)]
    pub trusted_modes: Vec<Mode>,
}

impl AccessRequest {
    /// A direct, anonymous request without origin.
    pub fn new(resource: Term, acl_doc: Term, modes: impl IntoIterator<Item = Mode>) -> Self {
        Self {
            resource,
            directory: None,
            acl_doc,
            agent: Agent::Anonymous,
            modes: modes.into_iter().collect(),
            origin: None,
            trusted_origins: Vec::new(),
            trusted_modes: Vec::new(),
        }
    }

    /// Evaluate against the inherited (`acl:default`) rules of `directory`.
    pub fn with_directory(mut self, directory: Term) -> Self {
        self.directory = Some(directory);
        self
    }

    pub fn with_agent(mut self, agent: impl Into<Agent>) -> Self {
        self.agent = agent.into();
        self
    }

    pub fn with_origin(mut self, origin: Term) -> Self {
        self.origin = Some(origin);
        self
    }

    pub fn with_trusted_origins(mut self, origins: impl IntoIterator<Item = Term>) -> Self {
        self.trusted_origins = origins.into_iter().collect();
        self
    }

    pub fn with_trusted_modes(mut self, modes: impl IntoIterator<Item = Mode>) -> Self {
        self.trusted_modes = modes.into_iter().collect();
        self
    }

    /// Reject requests that ask for nothing.
    pub fn validate(&self) -> Result<(), AclError> {
        if self.modes.is_empty() {
            return Err(AclError::NoModesRequired {
                resource: self.resource.to_string(),
            });
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn resource() -> Term {
        Term::named("https://alice.example.com/docs/file1")
    }

    fn acl_doc() -> Term {
        Term::named("https://alice.example.com/docs/.acl")
    }

    #[test]
    fn new_request_is_direct_and_anonymous() {
        let request = AccessRequest::new(resource(), acl_doc(), [Mode::Read]);
        assert_eq!(request.directory, None);
        assert!(request.agent.is_anonymous());
        assert_eq!(request.origin, None);
        assert!(request.validate().is_ok());
    }

    #[test]
    fn builders_fill_optional_fields() {
        let request = AccessRequest::new(resource(), acl_doc(), [Mode::Append])
            .with_directory(Term::named("https://alice.example.com/docs/"))
            .with_agent(Term::named("https://alice.example.com/#me"))
            .with_origin(Term::named("https://apps.example.com"))
            .with_trusted_origins([Term::named("https://apps.example.com")])
            .with_trusted_modes([Mode::Write]);

        assert!(request.directory.is_some());
        assert!(!request.agent.is_anonymous());
        assert_eq!(request.trusted_origins.len(), 1);
        assert_eq!(request.trusted_modes, vec![Mode::Write]);
    }

    #[test]
    fn empty_modes_fail_validation() {
        let request = AccessRequest::new(resource(), acl_doc(), Vec::<Mode>::new());
        match request.validate() {
            Err(AclError::NoModesRequired { resource }) => assert!(resource.contains("file1")),
            other => panic!("expected NoModesRequired, got {:?}", other),
        }
    }

    #[test]
    fn request_deserializes_with_defaults() {
        let json = r##"{
            "resource": {"type": "named_node", "value": "https://alice.example.com/docs/file1"},
            "acl_doc": {"type": "named_node", "value": "https://alice.example.com/docs/.acl"},
            "modes": ["read"]
        }"##;
        let request: AccessRequest = serde_json::from_str(json).unwrap();
        assert_eq!(request, AccessRequest::new(resource(), acl_doc(), [Mode::Read]));
    }
}
