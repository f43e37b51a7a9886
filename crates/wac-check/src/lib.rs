//! # wac-check
//!
//! Access-control decisions for linked-data resources protected by WebACL
//! authorization documents.
//!
//! An [`AccessRequest`] names a resource, the ACL document that protects it,
//! the requesting agent and origin, and the modes the operation needs. The
//! [`AccessEngine`] selects the relevant [`Authorization`]s from a
//! [`GraphStore`](wac_graph::GraphStore), checks each one's audience and
//! origin constraint, pools the granted modes and renders an
//! [`AccessDecision`].
//!
//! ## Key invariants
//!
//! - **Default deny**: no matching authorization → denied.
//! - **Write grants Append**, and nothing else implies anything.
//! - **Denial reasons are deterministic**: the first failure recorded across
//!   candidates wins, then "All Required Access Modes Not Granted", then
//!   "Forbidden".
//! - **Trusted origins are global**: a trusted request origin disables
//!   origin checks for every candidate in that request.
//! - **No I/O while deciding**: only [`trust::trusted_modes_for_origin`]
//!   suspends, through a caller-supplied [`ProfileFetcher`].
//!
//! ## Quick Example
//!
//! ```rust
//! use wac_check::{AccessEngine, AccessRequest, DenyReason, Mode};
//! use wac_graph::{vocab::acl, MemoryGraph, Term};
//!
//! let acl_doc = Term::named("https://alice.example.com/docs/.acl");
//! let file = Term::named("https://alice.example.com/docs/file1");
//! let alice = Term::named("https://alice.example.com/#me");
//! let rule = Term::named("https://alice.example.com/docs/.acl#owner");
//!
//! let mut graph = MemoryGraph::new();
//! graph.add(rule.clone(), Term::named(acl::ACCESS_TO), file.clone(), acl_doc.clone());
//! graph.add(rule.clone(), Term::named(acl::AGENT), alice.clone(), acl_doc.clone());
//! graph.add(rule.clone(), acl::mode(), Mode::Write.term(), acl_doc.clone());
//!
//! let engine = AccessEngine::new(&graph);
//! let append = AccessRequest::new(file.clone(), acl_doc.clone(), [Mode::Append]).with_agent(alice);
//! assert!(engine.check_access(&append));
//!
//! let anonymous = AccessRequest::new(file, acl_doc, [Mode::Read]);
//! assert_eq!(engine.access_denied(&anonymous), Some(DenyReason::UserUnauthorized));
//! ```

pub mod agent;
pub mod authorization;
pub mod decision;
pub mod engine;
pub mod error;
pub mod log;
pub mod matcher;
pub mod mode;
pub mod origin;
pub mod request;
pub mod selector;
pub mod trust;

pub use agent::{Agent, AgentClass};
pub use authorization::Authorization;
pub use decision::{AccessDecision, AuthorizationOutcome, DenyReason, ModesAllowed};
pub use engine::{check_access, decide, AccessEngine, EvaluationStep, EvaluationTrace};
pub use error::AclError;
pub use log::{configure_logger, DecisionLog, MemoryLog, TracingLog};
pub use mode::Mode;
pub use request::AccessRequest;
pub use trust::{trusted_apps, trusted_modes_for_origin, ProfileFetcher, TrustedAppDeclaration};
