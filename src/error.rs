//! Error types for loading graphs, reading configuration and rendering
//! reports.
//!
//! All errors are explicit, typed, and recoverable - no panics allowed.

use std::path::PathBuf;

use hopgraph_engine::GraphError;
use thiserror::Error;

use crate::json::ErrorCode;

/// Driver-level error type.
#[derive(Debug, Error)]
pub enum Error {
    // I/O errors
    #[error("failed to read file '{path}': {reason}")]
    FileReadFailed { path: PathBuf, reason: String },

    // Parsing errors
    #[error("TOML parse error: {reason}")]
    TomlParseFailed { reason: String },

    #[error("JSON parse error: {reason}")]
    JsonParseFailed { reason: String },

    #[error("JSON serialization failed: {reason}")]
    JsonSerializeFailed { reason: String },

    #[error("failed to render report: {reason}")]
    RenderFailed { reason: String },

    #[error("invalid record on line {line}: {reason}")]
    InvalidRecord { line: usize, reason: String },

    #[error("invalid configuration: {reason}")]
    InvalidConfig { reason: String },

    // Engine errors
    #[error(transparent)]
    Graph(#[from] GraphError),

    // Generic I/O error wrapper
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl Error {
    /// Create a file read error.
    pub fn file_read_failed(path: impl Into<PathBuf>, reason: impl Into<String>) -> Self {
        Self::FileReadFailed {
            path: path.into(),
            reason: reason.into(),
        }
    }

    /// Create a TOML parse error.
    pub fn toml_parse_failed(reason: impl Into<String>) -> Self {
        Self::TomlParseFailed {
            reason: reason.into(),
        }
    }

    /// Create a JSON parse error.
    pub fn json_parse_failed(reason: impl Into<String>) -> Self {
        Self::JsonParseFailed {
            reason: reason.into(),
        }
    }

    /// Create a JSON serialization error.
    pub fn json_serialize_failed(reason: impl Into<String>) -> Self {
        Self::JsonSerializeFailed {
            reason: reason.into(),
        }
    }

    /// Create a report rendering error.
    pub fn render_failed(reason: impl Into<String>) -> Self {
        Self::RenderFailed {
            reason: reason.into(),
        }
    }

    /// Create an invalid record error for a 1-based line number.
    pub fn invalid_record(line: usize, reason: impl Into<String>) -> Self {
        Self::InvalidRecord {
            line,
            reason: reason.into(),
        }
    }

    /// Create an invalid configuration error.
    pub fn invalid_config(reason: impl Into<String>) -> Self {
        Self::InvalidConfig {
            reason: reason.into(),
        }
    }

    /// Machine-readable classification of this error.
    #[must_use]
    pub const fn code(&self) -> ErrorCode {
        match self {
            Self::FileReadFailed { .. } | Self::Io(_) => ErrorCode::FileUnreadable,
            Self::TomlParseFailed { .. } | Self::JsonParseFailed { .. } | Self::InvalidConfig { .. } => {
                ErrorCode::ConfigParseError
            }
            Self::JsonSerializeFailed { .. } | Self::RenderFailed { .. } => ErrorCode::OutputFailed,
            Self::InvalidRecord { .. } => ErrorCode::InvalidRecord,
            Self::Graph(GraphError::DuplicateVertex(_)) => ErrorCode::DuplicateVertex,
            Self::Graph(GraphError::MissingVertex(_)) => ErrorCode::MissingVertex,
        }
    }

    /// Semantic exit code.
    ///
    /// - 1: Validation errors (malformed graph or configuration)
    /// - 2: Not found errors (vertex named on the command line is absent)
    /// - 3: System errors (I/O, output)
    #[must_use]
    pub const fn exit_code(&self) -> u8 {
        match self {
            Self::TomlParseFailed { .. }
            | Self::JsonParseFailed { .. }
            | Self::InvalidConfig { .. }
            | Self::InvalidRecord { .. }
            | Self::Graph(GraphError::DuplicateVertex(_)) => 1,
            Self::Graph(GraphError::MissingVertex(_)) => 2,
            Self::FileReadFailed { .. }
            | Self::JsonSerializeFailed { .. }
            | Self::RenderFailed { .. }
            | Self::Io(_) => 3,
        }
    }
}
