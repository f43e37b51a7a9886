// term.rs — RDF terms and quads.
//
// Only the three term kinds the engine can meet are modelled. Equality is
// exact term equality: same kind, same lexical value. No IRI normalization
// happens anywhere, so `https://a.example` and `https://a.example/` differ.

use std::fmt;

use serde::{Deserialize, Serialize};

/// A node in the graph.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(tag = "type", content = "value", rename_all = "snake_case")]
pub enum Term {
    /// An IRI, e.g. `https://alice.example.com/profile/card#me`.
    NamedNode(String),
    /// A document-local anonymous node.
    BlankNode(String),
    /// A plain literal.
    Literal(String),
}

impl Term {
    pub fn named(iri: impl Into<String>) -> Self {
        Term::NamedNode(iri.into())
    }

    pub fn blank(id: impl Into<String>) -> Self {
        Term::BlankNode(id.into())
    }

    pub fn literal(value: impl Into<String>) -> Self {
        Term::Literal(value.into())
    }

    /// The lexical value (IRI, blank node label or literal text).
    pub fn value(&self) -> &str {
        match self {
            Term::NamedNode(v) | Term::BlankNode(v) | Term::Literal(v) => v,
        }
    }

    pub fn is_named(&self) -> bool {
        matches!(self, Term::NamedNode(_))
    }

    /// The document this node is defined in: the IRI without its fragment.
    ///
    /// Returns `None` for blank nodes and literals, which have no document
    /// of their own.
    pub fn doc(&self) -> Option<Term> {
        match self {
            Term::NamedNode(iri) => {
                let base = iri.split_once('#').map(|(base, _)| base).unwrap_or(iri);
                Some(Term::NamedNode(base.to_string()))
            }
            _ => None,
        }
    }
}

impl fmt::Display for Term {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Term::NamedNode(iri) => write!(f, "<{}>", iri),
            Term::BlankNode(id) => write!(f, "_:{}", id),
            Term::Literal(value) => write!(f, "{:?}", value),
        }
    }
}

/// One statement, attributed to the document it was loaded from.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Quad {
    pub subject: Term,
    pub predicate: Term,
    pub object: Term,
    /// The document (context) the statement belongs to.
    pub graph: Term,
}

impl Quad {
    pub fn new(subject: Term, predicate: Term, object: Term, graph: Term) -> Self {
        Self {
            subject,
            predicate,
            object,
            graph,
        }
    }
}

impl fmt::Display for Quad {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} {} {} {} .",
            self.subject, self.predicate, self.object, self.graph
        )
    }
}
