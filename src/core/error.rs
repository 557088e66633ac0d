//! Error types and handling for the MCP server.
//!
//! This module defines a unified error type that can represent errors from
//! all domains and external dependencies.

use thiserror::Error;

/// A specialized Result type for MCP server operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Unified error type for the MCP server.
#[derive(Debug, Error)]
pub enum Error {
    /// Error originating from the documents domain.
    #[error("Document error: {0}")]
    Document(#[from] crate::domains::documents::DocumentError),

    /// Error originating from the tools domain.
    #[error("Tool error: {0}")]
    Tool(#[from] crate::domains::tools::ToolError),

    /// Error originating from the resources domain.
    #[error("Resource error: {0}")]
    Resource(#[from] crate::domains::resources::ResourceError),

    /// Error originating from the transport layer.
    #[error("Transport error: {0}")]
    Transport(#[from] super::transport::TransportError),

    /// Configuration-related errors.
    #[error("Configuration error: {0}")]
    Config(String),
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
    use crate::domains::documents::DocumentError;

    #[test]
    fn test_document_error_conversion() {
        let err: Error = DocumentError::template_not_found("memo").into();
        assert_eq!(err.to_string(), "Document error: Template 'memo' not found.");
    }

    #[test]
    fn test_config_error() {
        let err = Error::config("bad port");
        assert_eq!(err.to_string(), "Configuration error: bad port");
    }
}
