// error.rs — Error types for graph loading.
//
// Querying a graph never fails: a pattern with no match is an empty result.
// Errors only come from turning files into graphs.

use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur while loading a graph document.
#[derive(Debug, Error)]
pub enum GraphError {
    /// Failed to read the graph file.
    #[error("failed to read graph document at {path}: {source}")]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },

    /// The YAML document is malformed.
    #[error("invalid YAML graph document: {0}")]
    Yaml(#[from] serde_yaml::Error),

    /// The JSON document is malformed.
    #[error("invalid JSON graph document: {0}")]
    Json(#[from] serde_json::Error),

    /// A term in a statement could not be resolved.
    #[error("invalid term '{term}': {reason}")]
    InvalidTerm { term: String, reason: String },

    /// The file extension is neither YAML nor JSON.
    #[error("unsupported graph document format: {path}")]
    UnsupportedFormat { path: PathBuf },
}
