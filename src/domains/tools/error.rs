//! Tool-specific error types.
//!
//! These are protocol-level failures. Problems a tool reports about its own
//! input (an unknown template, a malformed payload) travel as
//! `CallToolResult` content instead.

use rmcp::ErrorData as McpError;
use thiserror::Error;

/// Errors that can occur during tool operations.
#[derive(Debug, Error)]
pub enum ToolError {
    /// The requested tool was not found.
    #[error("Tool not found: {0}")]
    NotFound(String),

    /// Invalid arguments were provided to the tool.
    #[error("Invalid arguments: {0}")]
    InvalidArguments(String),

    /// An internal error occurred.
    #[error("Internal error: {0}")]
    Internal(String),
}

impl ToolError {
    /// Create a new "not found" error.
    pub fn not_found(name: impl Into<String>) -> Self {
        Self::NotFound(name.into())
    }

    /// Create a new "invalid arguments" error.
    pub fn invalid_arguments(msg: impl Into<String>) -> Self {
        Self::InvalidArguments(msg.into())
    }

    /// Create a new "internal" error.
    pub fn internal(msg: impl Into<String>) -> Self {
        Self::Internal(msg.into())
    }
}

impl From<ToolError> for McpError {
    fn from(err: ToolError) -> Self {
        match err {
            ToolError::NotFound(_) | ToolError::InvalidArguments(_) => {
                McpError::invalid_params(err.to_string(), None)
            }
            ToolError::Internal(_) => McpError::internal_error(err.to_string(), None),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mcp_error_codes() {
        let err: McpError = ToolError::not_found("divide").into();
        assert_eq!(err.code.0, -32602);
        assert_eq!(err.message, "Tool not found: divide");

        let err: McpError = ToolError::internal("boom").into();
        assert_eq!(err.code.0, -32603);
    }
}
