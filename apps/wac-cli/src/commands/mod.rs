pub mod check;
pub mod trust;

use std::path::PathBuf;

use wac_graph::{GraphDocument, MemoryGraph};

/// Load and merge every graph file named on the command line.
pub fn load_graphs(paths: &[PathBuf]) -> anyhow::Result<MemoryGraph> {
    let mut graph = MemoryGraph::new();
    for path in paths {
        graph.merge(&GraphDocument::load(path)?);
    }
    tracing::info!(
        "loaded {} statement(s) from {} file(s)",
        graph.len(),
        paths.len()
    );
    Ok(graph)
}
