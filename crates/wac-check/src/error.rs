// error.rs — Error types for the access-control engine.
//
// The decision path itself never errors; these cover input the caller
// hands in before a decision is made.

use thiserror::Error;

/// Errors that can occur while preparing an access check.
#[derive(Debug, Error)]
pub enum AclError {
    /// A mode name that is not Read, Write, Append or Control.
    #[error("unknown access mode '{0}'")]
    UnknownMode(String),

    /// An access request must ask for at least one mode.
    #[error("access request for {resource} names no required modes")]
    NoModesRequired { resource: String },

    /// A graph document could not be loaded.
    #[error("graph error: {0}")]
    Graph(#[from] wac_graph::GraphError),
}
