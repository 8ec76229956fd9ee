//! Transport error types.

use thiserror::Error;

/// Result type for transport operations.
pub type TransportResult<T> = Result<T, TransportError>;

/// Reasons a transport stops serving.
///
/// A single bad tool call never ends up here; only failures that take the
/// whole listener or session down do.
#[derive(Debug, Error)]
pub enum TransportError {
    /// The listen address could not be bound.
    #[error("cannot listen on {address}: {source}")]
    Bind {
        address: String,
        #[source]
        source: std::io::Error,
    },

    /// The listener or the HTTP server failed after binding.
    #[error("transport i/o failed: {0}")]
    Io(#[from] std::io::Error),

    /// The MCP peer never completed the initialize handshake.
    #[error("MCP handshake failed: {0}")]
    Handshake(String),

    /// An established MCP session ended with an error.
    #[error("MCP session aborted: {0}")]
    Session(String),
}

impl TransportError {
    pub fn bind(address: impl Into<String>, source: std::io::Error) -> Self {
        Self::Bind {
            address: address.into(),
            source,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::{Error as IoError, ErrorKind};

    #[test]
    fn test_bind_error_names_the_address() {
        let err = TransportError::bind("127.0.0.1:8080", IoError::from(ErrorKind::AddrInUse));
        assert!(err.to_string().starts_with("cannot listen on 127.0.0.1:8080: "));
        assert!(std::error::Error::source(&err).is_some());
    }

    #[test]
    fn test_io_error_converts() {
        let err: TransportError = IoError::other("socket closed").into();
        assert!(matches!(err, TransportError::Io(_)));
        assert_eq!(err.to_string(), "transport i/o failed: socket closed");
    }
}
