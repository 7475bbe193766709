//! JSON output structures
//!
//! This module provides consistent JSON output formats across all commands.

use serde::{Deserialize, Serialize};

use crate::error::Error;
use crate::result::Result;

/// Standard JSON success response wrapper
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct JsonSuccess<T> {
    pub success: bool,
    #[serde(flatten)]
    pub data: T,
}

impl<T> JsonSuccess<T> {
    /// Create a new success response
    pub const fn new(data: T) -> Self {
        Self {
            success: true,
            data,
        }
    }
}

/// Standard JSON error response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct JsonError {
    pub success: bool,
    pub error: ErrorDetail,
}

/// Detailed error information
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorDetail {
    /// Machine-readable error code (`SCREAMING_SNAKE_CASE`)
    pub code: String,
    /// Human-readable error message
    pub message: String,
    /// Semantic exit code (1-3)
    pub exit_code: u8,
    /// Optional suggestion for resolution
    #[serde(skip_serializing_if = "Option::is_none")]
    pub suggestion: Option<String>,
}

impl JsonError {
    /// Create a new JSON error with just a code and message
    pub fn new(code: impl Into<String>, message: impl Into<String>, exit_code: u8) -> Self {
        Self {
            success: false,
            error: ErrorDetail {
                code: code.into(),
                message: message.into(),
                exit_code,
                suggestion: None,
            },
        }
    }

    /// Add a suggestion to the error
    #[must_use]
    pub fn with_suggestion(mut self, suggestion: impl Into<String>) -> Self {
        self.error.suggestion = Some(suggestion.into());
        self
    }
}

/// Error codes for machine-readable errors
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCode {
    FileUnreadable,
    ConfigParseError,
    InvalidRecord,
    DuplicateVertex,
    MissingVertex,
    OutputFailed,
}

impl ErrorCode {
    /// Get the string representation of the error code
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::FileUnreadable => "FILE_UNREADABLE",
            Self::ConfigParseError => "CONFIG_PARSE_ERROR",
            Self::InvalidRecord => "INVALID_RECORD",
            Self::DuplicateVertex => "DUPLICATE_VERTEX",
            Self::MissingVertex => "MISSING_VERTEX",
            Self::OutputFailed => "OUTPUT_FAILED",
        }
    }

    const fn suggestion(self) -> Option<&'static str> {
        match self {
            Self::InvalidRecord => Some("Each line must look like 'NAME [: fields] > NEIGHBOUR ...'"),
            Self::DuplicateVertex => Some("Declare each vertex on exactly one line"),
            Self::MissingVertex => Some("Run the 'show' command to list the vertices in the graph"),
            Self::FileUnreadable | Self::ConfigParseError | Self::OutputFailed => None,
        }
    }
}

impl From<ErrorCode> for String {
    fn from(code: ErrorCode) -> Self {
        code.as_str().to_string()
    }
}

impl From<&Error> for JsonError {
    fn from(err: &Error) -> Self {
        let code = err.code();
        let json_error = Self::new(code, err.to_string(), err.exit_code());
        match code.suggestion() {
            Some(suggestion) => json_error.with_suggestion(suggestion),
            None => json_error,
        }
    }
}

/// Trait for types that can be serialized to JSON
pub trait JsonSerializable: Serialize {
    /// Convert to pretty-printed JSON string
    fn to_json(&self) -> Result<String> {
        serde_json::to_string_pretty(self)
            .map_err(|e| Error::json_serialize_failed(format!("Failed to serialize to JSON: {e}")))
    }
}

// Implement for all Serialize types
impl<T: Serialize> JsonSerializable for T {}
