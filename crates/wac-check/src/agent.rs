// agent.rs — Who is asking, and the audience classes that are not identities.

use std::fmt;

use serde::{Deserialize, Serialize};
use wac_graph::{
    vocab::{acl, foaf},
    Term,
};

/// The requesting agent: an identity, or nobody.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(tag = "kind", content = "id", rename_all = "snake_case")]
pub enum Agent {
    /// No identity was presented.
    #[default]
    Anonymous,
    /// An authenticated identity (usually a WebID).
    Identified(Term),
}

impl Agent {
    pub fn identified(id: impl Into<String>) -> Self {
        Agent::Identified(Term::named(id))
    }

    pub fn is_anonymous(&self) -> bool {
        matches!(self, Agent::Anonymous)
    }

    /// The identity term, if any.
    pub fn id(&self) -> Option<&Term> {
        match self {
            Agent::Anonymous => None,
            Agent::Identified(term) => Some(term),
        }
    }
}

impl From<Term> for Agent {
    fn from(term: Term) -> Self {
        Agent::Identified(term)
    }
}

impl From<Option<Term>> for Agent {
    fn from(term: Option<Term>) -> Self {
        term.map(Agent::Identified).unwrap_or(Agent::Anonymous)
    }
}

impl fmt::Display for Agent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Agent::Anonymous => f.write_str("anonymous"),
            Agent::Identified(term) => write!(f, "{}", term),
        }
    }
}

/// Audience predicates that match sets of agents rather than one identity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AgentClass {
    /// Everyone, including anonymous requests (`foaf:Agent`).
    Public,
    /// Every agent that presented an identity.
    AuthenticatedAgent,
}

impl AgentClass {
    pub fn iri(self) -> &'static str {
        match self {
            AgentClass::Public => foaf::AGENT,
            AgentClass::AuthenticatedAgent => acl::AUTHENTICATED_AGENT,
        }
    }

    /// Map an `acl:agentClass` object to a known class.
    pub fn from_term(term: &Term) -> Option<AgentClass> {
        match term {
            Term::NamedNode(iri) if iri == foaf::AGENT => Some(AgentClass::Public),
            Term::NamedNode(iri) if iri == acl::AUTHENTICATED_AGENT => {
                Some(AgentClass::AuthenticatedAgent)
            }
            _ => None,
        }
    }
}
