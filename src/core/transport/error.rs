//! Transport error types.

use thiserror::Error;

/// Result type for transport operations.
pub type TransportResult<T> = Result<T, TransportError>;

/// Errors raised while starting or running a transport.
#[derive(Debug, Error)]
pub enum TransportError {
    /// The listener could not bind its address.
    #[error("Failed to bind to {address}: {source}")]
    BindError {
        address: String,
        #[source]
        source: std::io::Error,
    },

    /// The MCP session could not be established.
    #[error("Server initialization error: {0}")]
    InitError(String),

    /// The HTTP server stopped with an error.
    #[error("HTTP error: {0}")]
    HttpError(String),

    /// The running rmcp service failed.
    #[error("Service error: {0}")]
    ServiceError(String),
}

impl TransportError {
    pub fn bind(address: impl Into<String>, source: std::io::Error) -> Self {
        Self::BindError {
            address: address.into(),
            source,
        }
    }

    pub fn init(msg: impl Into<String>) -> Self {
        Self::InitError(msg.into())
    }

    pub fn service(msg: impl Into<String>) -> Self {
        Self::ServiceError(msg.into())
    }

    #[cfg_attr(not(feature = "http"), allow(dead_code))]
    pub fn http(msg: impl Into<String>) -> Self {
        Self::HttpError(msg.into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bind_error_names_address() {
        let source = std::io::Error::new(std::io::ErrorKind::AddrInUse, "in use");
        let err = TransportError::bind("127.0.0.1:8080", source);
        assert_eq!(err.to_string(), "Failed to bind to 127.0.0.1:8080: in use");
    }
}
