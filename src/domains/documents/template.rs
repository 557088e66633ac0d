//! Template identifiers and definitions.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use super::error::DocumentError;
use super::DocumentPayload;

/// The closed set of document shapes the generator knows how to render.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "lowercase")]
pub enum TemplateId {
    /// A billing statement with line items and a total.
    Invoice,
    /// A titled report made of sections.
    Report,
    /// A business proposal with deliverables and a budget.
    Proposal,
    /// A formal letter.
    Letter,
}

impl TemplateId {
    /// Every template identifier, in registry order.
    pub const ALL: [TemplateId; 4] = [Self::Invoice, Self::Report, Self::Proposal, Self::Letter];

    /// The wire name of this template.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Invoice => "invoice",
            Self::Report => "report",
            Self::Proposal => "proposal",
            Self::Letter => "letter",
        }
    }
}

impl fmt::Display for TemplateId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for TemplateId {
    type Err = DocumentError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|id| id.as_str() == s)
            .ok_or_else(|| DocumentError::template_not_found(s))
    }
}

/// Renders a raw payload into document text.
pub type RenderFn = fn(&DocumentPayload) -> Result<String, DocumentError>;

/// A registered template: display metadata plus its renderer.
#[derive(Debug, Clone)]
pub struct TemplateDefinition {
    /// Which template this is.
    pub id: TemplateId,

    /// Display name of the document.
    pub title: &'static str,

    /// Expected payload fields, in order. Informational only.
    pub fields: &'static [&'static str],

    /// The renderer for this template.
    pub render: RenderFn,
}

impl TemplateDefinition {
    /// Render the payload with this template.
    pub fn render(&self, payload: &DocumentPayload) -> Result<String, DocumentError> {
        (self.render)(payload)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_known_ids() {
        for id in TemplateId::ALL {
            assert_eq!(id.as_str().parse::<TemplateId>().unwrap(), id);
        }
    }

    #[test]
    fn test_parse_is_case_sensitive() {
        let err = "Invoice".parse::<TemplateId>().unwrap_err();
        assert_eq!(err, DocumentError::TemplateNotFound("Invoice".to_string()));
    }

    #[test]
    fn test_serde_uses_lowercase_names() {
        let json = serde_json::to_string(&TemplateId::Proposal).unwrap();
        assert_eq!(json, "\"proposal\"");

        let id: TemplateId = serde_json::from_str("\"letter\"").unwrap();
        assert_eq!(id, TemplateId::Letter);
    }
}
