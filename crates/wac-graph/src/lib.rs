//! # wac-graph
//!
//! The graph side of the wac access-control engine.
//!
//! The decision engine never owns storage: it reads authorizations, group
//! memberships and trust declarations through the [`GraphStore`] capability,
//! always scoped to the document (context) a statement was loaded from.
//! This crate provides that capability, a small in-memory implementation
//! ([`MemoryGraph`]) and a YAML/JSON file format ([`GraphDocument`]) for
//! loading graphs in tests and from the CLI.
//!
//! ## Quick Example
//!
//! ```rust
//! use wac_graph::{vocab, GraphStore, MemoryGraph, Term};
//!
//! let acl = Term::named("https://alice.example.com/docs/.acl");
//! let auth = Term::named("https://alice.example.com/docs/.acl#owner");
//! let mut graph = MemoryGraph::new();
//! graph.add(auth.clone(), vocab::acl::mode(), vocab::acl::term(vocab::acl::READ), acl.clone());
//!
//! assert!(graph.holds(&auth, &vocab::acl::mode(), &vocab::acl::term(vocab::acl::READ), &acl));
//! ```

pub mod document;
pub mod error;
pub mod memory;
pub mod store;
pub mod term;
pub mod vocab;

pub use document::{GraphDocument, NamedDocument};
pub use error::GraphError;
pub use memory::MemoryGraph;
pub use store::GraphStore;
pub use term::{Quad, Term};
