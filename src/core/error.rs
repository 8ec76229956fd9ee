//! Error types and handling for the MCP server.
//!
//! This module defines a unified error type for startup and serving, so the
//! binaries can propagate anything with `?`.

use thiserror::Error;

use super::transport::TransportError;

/// A specialized Result type for MCP server operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Unified error type for the MCP server.
///
/// Per-call tool failures never show up here: they are returned to the
/// caller as failure-tagged tool outputs.
#[derive(Debug, Error)]
pub enum Error {
    /// Error originating from the tools domain (e.g. a duplicate registration).
    #[error("Tool error: {0}")]
    Tool(#[from] crate::domains::tools::ToolError),

    /// Error originating from the transport layer.
    #[error("Transport error: {0}")]
    Transport(#[from] TransportError),

    /// Configuration-related errors.
    #[error("Configuration error: {0}")]
    Config(String),

    /// I/O errors from file operations or network communication.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON serialization/deserialization errors.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl Error {
    /// Create a new configuration error.
    pub fn config(msg: impl Into<String>) -> Self {
        Self::Config(msg.into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domains::tools::ToolError;

    #[test]
    fn test_tool_error_converts() {
        let err: Error = ToolError::duplicate_name("echo").into();
        assert!(matches!(err, Error::Tool(ToolError::DuplicateName(_))));
        assert_eq!(err.to_string(), "Tool error: tool \"echo\" is already registered");
    }
}
