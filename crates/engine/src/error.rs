//! Graph-specific error types

use thiserror::Error;

/// Errors raised by graph construction and by queries naming a vertex.
///
/// Algorithmic negative answers (a cyclic graph asked for a topological
/// ranking, a non-Eulerian graph asked for a circuit) are not errors; they
/// come back as `None`.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GraphError {
    #[error("Vertex already exists: {0}")]
    DuplicateVertex(String),

    #[error("Vertex not found: {0}")]
    MissingVertex(String),
}

impl GraphError {
    pub fn duplicate_vertex(payload: impl ToString) -> Self {
        Self::DuplicateVertex(payload.to_string())
    }

    pub fn missing_vertex(payload: impl ToString) -> Self {
        Self::MissingVertex(payload.to_string())
    }
}

/// Result type for graph operations
pub type GraphResult<T> = std::result::Result<T, GraphError>;
