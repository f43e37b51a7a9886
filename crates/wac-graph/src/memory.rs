// memory.rs — In-memory quad store.
//
// A flat, insertion-ordered list of quads with duplicate suppression.
// Lookups are linear scans; ACL and profile documents are small, and the
// engine materializes each authorization once per request.

use std::collections::HashSet;

use crate::store::GraphStore;
use crate::term::{Quad, Term};

/// An insertion-ordered in-memory [`GraphStore`].
#[derive(Debug, Clone, Default)]
pub struct MemoryGraph {
    quads: Vec<Quad>,
    seen: HashSet<Quad>,
}

impl MemoryGraph {
    /// Create an empty graph.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a statement to `graph`. Returns `false` if it was already present.
    pub fn add(&mut self, subject: Term, predicate: Term, object: Term, graph: Term) -> bool {
        self.add_quad(Quad::new(subject, predicate, object, graph))
    }

    /// Add a quad. Returns `false` if it was already present.
    pub fn add_quad(&mut self, quad: Quad) -> bool {
        if self.seen.contains(&quad) {
            return false;
        }
        self.seen.insert(quad.clone());
        self.quads.push(quad);
        true
    }

    /// Copy every statement of `other` into this graph.
    pub fn merge(&mut self, other: &MemoryGraph) {
        self.extend(other.quads.iter().cloned());
    }

    /// Number of distinct statements.
    pub fn len(&self) -> usize {
        self.quads.len()
    }

    pub fn is_empty(&self) -> bool {
        self.quads.is_empty()
    }

    /// All statements, in insertion order.
    pub fn quads(&self) -> &[Quad] {
        &self.quads
    }

    /// Distinct document contexts, in first-seen order.
    pub fn documents(&self) -> Vec<Term> {
        let mut docs: Vec<Term> = Vec::new();
        for quad in &self.quads {
            if !docs.contains(&quad.graph) {
                docs.push(quad.graph.clone());
            }
        }
        docs
    }

    /// A new graph holding only the statements of one document.
    pub fn document(&self, context: &Term) -> MemoryGraph {
        self.quads
            .iter()
            .filter(|q| &q.graph == context)
            .cloned()
            .collect()
    }
}

impl Extend<Quad> for MemoryGraph {
    fn extend<I: IntoIterator<Item = Quad>>(&mut self, iter: I) {
        for quad in iter {
            self.add_quad(quad);
        }
    }
}

impl FromIterator<Quad> for MemoryGraph {
    fn from_iter<I: IntoIterator<Item = Quad>>(iter: I) -> Self {
        let mut graph = MemoryGraph::new();
        graph.extend(iter);
        graph
    }
}

impl GraphStore for MemoryGraph {
    fn each(
        &self,
        subject: Option<&Term>,
        predicate: &Term,
        object: Option<&Term>,
        context: Option<&Term>,
    ) -> Vec<Term> {
        self.quads
            .iter()
            .filter(|q| &q.predicate == predicate)
            .filter(|q| subject.map_or(true, |s| &q.subject == s))
            .filter(|q| object.map_or(true, |o| &q.object == o))
            .filter(|q| context.map_or(true, |c| &q.graph == c))
            .map(|q| {
                if subject.is_none() {
                    q.subject.clone()
                } else {
                    q.object.clone()
                }
            })
            .collect()
    }

    fn holds(&self, subject: &Term, predicate: &Term, object: &Term, context: &Term) -> bool {
        self.seen.contains(&Quad::new(
            subject.clone(),
            predicate.clone(),
            object.clone(),
            context.clone(),
        ))
    }
}
