//! Error types for loading graphs and running searches.

use std::path::PathBuf;

use thiserror::Error;

use crate::graphs::VertexId;

/// Outcome of a search that did not produce a path.
///
/// `NoPathFound` is a regular answer: the target is not reachable from the
/// source. `InvalidInput` is raised before any search state is built, and
/// `MalformedPredecessors` means the bookkeeping of a search is corrupt.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SearchError {
    #[error("vertex {vertex} is not part of the graph")]
    InvalidInput { vertex: VertexId },

    #[error("no path from {start} to {goal}")]
    NoPathFound { start: VertexId, goal: VertexId },

    #[error("malformed predecessor chain at vertex {vertex}")]
    MalformedPredecessors { vertex: VertexId },
}

/// Errors raised while building, reading or writing a graph.
#[derive(Error, Debug)]
pub enum GraphError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("bincode error: {0}")]
    Bincode(#[from] bincode::Error),

    #[error("unknown file extension of {0:?}, expected .json or .bincode")]
    UnknownFileExtension(PathBuf),

    #[error("vertex ids must be dense, vertex {0} has no coordinate")]
    MissingVertex(VertexId),

    #[error("edge references unknown vertex {0}")]
    UnknownVertex(VertexId),

    #[error("coordinate ({x}, {y}) is not finite")]
    NonFiniteCoordinate { x: f64, y: f64 },
}
