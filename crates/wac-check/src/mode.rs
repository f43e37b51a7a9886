// mode.rs — Access modes and the one implication between them.
//
// Write grants Append. Nothing else implies anything: Read and Control
// stand alone, and Append never grants Write.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use wac_graph::{vocab::acl, Term};

use crate::error::AclError;

/// A capability that can be requested or granted on a resource.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Mode {
    Read,
    Write,
    Append,
    Control,
}

impl Mode {
    pub const ALL: [Mode; 4] = [Mode::Read, Mode::Write, Mode::Append, Mode::Control];

    /// The vocabulary IRI for this mode.
    pub fn iri(self) -> &'static str {
        match self {
            Mode::Read => acl::READ,
            Mode::Write => acl::WRITE,
            Mode::Append => acl::APPEND,
            Mode::Control => acl::CONTROL,
        }
    }

    pub fn term(self) -> Term {
        Term::named(self.iri())
    }

    /// Map a graph node back to a mode. Anything else is not a mode.
    pub fn from_term(term: &Term) -> Option<Mode> {
        match term {
            Term::NamedNode(iri) => Mode::ALL.into_iter().find(|m| m.iri() == iri.as_str()),
            _ => None,
        }
    }

    /// Whether holding `self` is enough to exercise `required`.
    pub fn grants(self, required: Mode) -> bool {
        self == required || (self == Mode::Write && required == Mode::Append)
    }

    /// Whether any mode in `held` grants `required`.
    pub fn is_covered_by<'a>(self, held: impl IntoIterator<Item = &'a Mode>) -> bool {
        held.into_iter().any(|m| m.grants(self))
    }
}

impl fmt::Display for Mode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Mode::Read => "Read",
            Mode::Write => "Write",
            Mode::Append => "Append",
            Mode::Control => "Control",
        };
        f.write_str(name)
    }
}

/// Accepts `read`, `Read`, `acl:Read` or the full IRI.
impl FromStr for Mode {
    type Err = AclError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let name = s
            .strip_prefix(acl::NS)
            .or_else(|| s.strip_prefix("acl:"))
            .unwrap_or(s);
        match name.to_ascii_lowercase().as_str() {
            "read" => Ok(Mode::Read),
            "write" => Ok(Mode::Write),
            "append" => Ok(Mode::Append),
            "control" => Ok(Mode::Control),
            _ => Err(AclError::UnknownMode(s.to_string())),
        }
    }
}
