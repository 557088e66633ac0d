//! Errors raised while listing or reading resources.

use thiserror::Error;

/// Errors that can occur during resource operations.
///
/// Reading an unknown URI, including an unknown
/// `documents://templates/{template}` entry, yields [`ResourceError::NotFound`].
#[derive(Debug, Error)]
pub enum ResourceError {
    /// The requested resource was not found.
    #[error("Resource not found: {0}")]
    NotFound(String),

    /// A resource body could not be produced.
    #[error("Internal error: {0}")]
    Internal(String),
}

impl ResourceError {
    /// Create a new "not found" error.
    pub fn not_found(uri: impl Into<String>) -> Self {
        Self::NotFound(uri.into())
    }

    /// Create a new "internal" error.
    pub fn internal(msg: impl Into<String>) -> Self {
        Self::Internal(msg.into())
    }
}

impl From<serde_json::Error> for ResourceError {
    fn from(err: serde_json::Error) -> Self {
        Self::internal(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_not_found_message() {
        let err = ResourceError::not_found("documents://templates/memo");
        assert_eq!(
            err.to_string(),
            "Resource not found: documents://templates/memo"
        );
    }

    #[test]
    fn test_json_error_is_internal() {
        let json_err = serde_json::from_str::<serde_json::Value>("{").unwrap_err();
        assert!(matches!(
            ResourceError::from(json_err),
            ResourceError::Internal(_)
        ));
    }
}
