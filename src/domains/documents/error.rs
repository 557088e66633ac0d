//! Document-specific error types.

use thiserror::Error;

/// Errors that can occur while generating a document.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DocumentError {
    /// The requested template identifier is not registered.
    #[error("Template '{0}' not found.")]
    TemplateNotFound(String),

    /// The payload could not be read into the template's fields.
    #[error("Invalid data for template '{template}': {reason}")]
    InvalidPayload {
        template: &'static str,
        reason: String,
    },
}

impl DocumentError {
    /// Create a new "template not found" error.
    pub fn template_not_found(id: impl Into<String>) -> Self {
        Self::TemplateNotFound(id.into())
    }

    /// Create a new "invalid payload" error.
    pub fn invalid_payload(template: &'static str, reason: impl Into<String>) -> Self {
        Self::InvalidPayload {
            template,
            reason: reason.into(),
        }
    }
}
