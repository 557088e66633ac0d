//! Document template catalogue resource.
//!
//! Lets clients discover which templates exist and which fields each reads.

use serde::Serialize;

use super::ResourceDefinition;
use crate::domains::documents::{TemplateDefinition, TemplateId, TemplateRegistry};
use crate::domains::resources::service::ResourceContent;

/// Catalogue of all document templates.
pub struct TemplateCatalogResource;

/// Public description of one template.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TemplateSummary {
    pub id: TemplateId,
    pub title: &'static str,
    pub fields: &'static [&'static str],
}

impl From<&TemplateDefinition> for TemplateSummary {
    fn from(definition: &TemplateDefinition) -> Self {
        Self {
            id: definition.id,
            title: definition.title,
            fields: definition.fields,
        }
    }
}

impl TemplateCatalogResource {
    /// URI prefix for a single template entry.
    pub const ENTRY_PREFIX: &'static str = "documents://templates/";

    /// Summaries of every registered template.
    pub fn resolve(registry: &TemplateRegistry) -> Vec<TemplateSummary> {
        registry
            .definitions()
            .into_iter()
            .map(TemplateSummary::from)
            .collect()
    }

    /// Summary of the template addressed by `documents://templates/{id}`.
    pub fn resolve_entry(uri: &str, registry: &TemplateRegistry) -> Option<TemplateSummary> {
        let name = uri.strip_prefix(Self::ENTRY_PREFIX)?;
        registry.get(name).map(TemplateSummary::from)
    }
}

impl ResourceDefinition for TemplateCatalogResource {
    const URI: &'static str = "documents://templates";
    const NAME: &'static str = "Document Templates";
    const DESCRIPTION: &'static str =
        "Templates accepted by generateDocument, with the fields each one reads";
    const MIME_TYPE: &'static str = "application/json";

    fn content() -> ResourceContent {
        ResourceContent::TemplateCatalog
    }
}
