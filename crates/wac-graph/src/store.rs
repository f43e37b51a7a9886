// store.rs — The graph store capability consumed by the decision engine.
//
// Two primitives are all the engine needs: pattern matching with one
// wildcard position, and an existence test. Both must respect the context
// they are given, so statements about the same subject in unrelated
// documents never leak into a decision.

use std::sync::Arc;

use crate::term::Term;

/// Read-only access to a set of quads.
///
/// Implementations must be free of observable side effects; the engine may
/// call them any number of times during one decision.
pub trait GraphStore {
    /// Match `(subject, predicate, object, context)` and return the nodes in
    /// the wildcard position.
    ///
    /// When `subject` is `None` the matching subjects are returned; otherwise
    /// the matching objects are. A `None` context matches every document.
    /// Results follow the store's statement order.
    fn each(
        &self,
        subject: Option<&Term>,
        predicate: &Term,
        object: Option<&Term>,
        context: Option<&Term>,
    ) -> Vec<Term>;

    /// Whether the exact statement exists in the given document.
    fn holds(&self, subject: &Term, predicate: &Term, object: &Term, context: &Term) -> bool;

    /// Objects of `subject predicate ?` within one document.
    fn objects(&self, subject: &Term, predicate: &Term, context: &Term) -> Vec<Term> {
        self.each(Some(subject), predicate, None, Some(context))
    }

    /// Subjects of `? predicate object` within one document.
    fn subjects(&self, predicate: &Term, object: &Term, context: &Term) -> Vec<Term> {
        self.each(None, predicate, Some(object), Some(context))
    }
}

impl<G: GraphStore + ?Sized> GraphStore for &G {
    fn each(
        &self,
        subject: Option<&Term>,
        predicate: &Term,
        object: Option<&Term>,
        context: Option<&Term>,
    ) -> Vec<Term> {
        (**self).each(subject, predicate, object, context)
    }

    fn holds(&self, subject: &Term, predicate: &Term, object: &Term, context: &Term) -> bool {
        (**self).holds(subject, predicate, object, context)
    }
}

impl<G: GraphStore + ?Sized> GraphStore for Box<G> {
    fn each(
        &self,
        subject: Option<&Term>,
        predicate: &Term,
        object: Option<&Term>,
        context: Option<&Term>,
    ) -> Vec<Term> {
        (**self).each(subject, predicate, object, context)
    }

    fn holds(&self, subject: &Term, predicate: &Term, object: &Term, context: &Term) -> bool {
        (**self).holds(subject, predicate, object, context)
    }
}

impl<G: GraphStore + ?Sized> GraphStore for Arc<G> {
    fn each(
        &self,
        subject: Option<&Term>,
        predicate: &Term,
        object: Option<&Term>,
        context: Option<&Term>,
    ) -> Vec<Term> {
        (**self).each(subject, predicate, object, context)
    }

    fn holds(&self, subject: &Term, predicate: &Term, object: &Term, context: &Term) -> bool {
        (**self).holds(subject, predicate, object, context)
    }
}
