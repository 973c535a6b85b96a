//! Transport error types.

use thiserror::Error;

/// Result type for transport operations.
pub type TransportResult<T> = Result<T, TransportError>;

/// Errors that can occur in transport operations.
#[derive(Debug, Error)]
pub enum TransportError {
    /// Failed to bind to address.
    #[error("Failed to bind to {address}: {source}")]
    BindError {
        address: String,
        #[source]
        source: std::io::Error,
    },

    /// IO error while serving.
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),
}

impl TransportError {
    /// Create a bind error.
    pub fn bind(address: impl Into<String>, source: std::io::Error) -> Self {
        Self::BindError {
            address: address.into(),
            source,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::error::Error as _;
    use std::io;

    #[test]
    fn test_bind_error_names_the_address() {
        let err = TransportError::bind(
            "127.0.0.1:3000",
            io::Error::new(io::ErrorKind::AddrInUse, "address in use"),
        );
        assert!(matches!(&err, TransportError::BindError { address, .. } if address == "127.0.0.1:3000"));
        assert_eq!(err.to_string(), "Failed to bind to 127.0.0.1:3000: address in use");
        assert!(err.source().is_some());
    }

    #[test]
    fn test_io_error_converts() {
        let err: TransportError = io::Error::other("reset").into();
        assert!(matches!(err, TransportError::IoError(_)));
    }
}
