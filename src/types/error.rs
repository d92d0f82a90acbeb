//! Error types for the hopgraph library.

use thiserror::Error;

/// All errors that can occur in the hopgraph library.
#[derive(Error, Debug)]
pub enum GraphError {
    /// Vertex does not belong to the graph.
    #[error("Vertex {0} does not belong to the graph")]
    VertexNotFound(String),

    /// Self-loop requested on a graph that does not allow loops.
    #[error("Loop creation is not allowed: {0} - {0}")]
    LoopNotAllowed(String),

    /// Edge removal requested for an edge that does not exist.
    #[error("Edge {start} - {end} does not exist")]
    EdgeNotFound { start: String, end: String },

    /// IO error.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Graph file could not be parsed or serialized.
    #[error("Malformed graph file: {0}")]
    Format(String),
}

impl GraphError {
    /// True for errors caused by a bad argument to a graph operation
    /// (as opposed to file or IO failures).
    pub fn is_invalid_argument(&self) -> bool {
        matches!(
            self,
            Self::VertexNotFound(_) | Self::LoopNotAllowed(_) | Self::EdgeNotFound { .. }
        )
    }

    pub(crate) fn vertex_not_found<V: std::fmt::Debug>(vertex: &V) -> Self {
        Self::VertexNotFound(format!("{:?}", vertex))
    }

    pub(crate) fn loop_not_allowed<V: std::fmt::Debug>(vertex: &V) -> Self {
        Self::LoopNotAllowed(format!("{:?}", vertex))
    }

    pub(crate) fn edge_not_found<V: std::fmt::Debug>(source: &V, destination: &V) -> Self {
        Self::EdgeNotFound {
            start: format!("{:?}", source),
            end: format!("{:?}", destination),
        }
    }
}

/// Convenience result type for hopgraph operations.
pub type GraphResult<T> = Result<T, GraphError>;
