//! Template Registry - central registration of all document templates.
//!
//! The registry is built once at startup and never mutated; it is shared
//! behind an `Arc` by the document generator and the resource catalogue.
//! When adding a new template:
//! 1. Add its variant to `TemplateId`
//! 2. Create the template file in `definitions/` and export it
//! 3. Map the variant in `definition_for()`; the match will not compile
//!    until every variant is covered

use std::collections::HashMap;
use tracing::debug;

use super::definitions::{
    DocumentTemplate, InvoiceTemplate, LetterTemplate, ProposalTemplate, ReportTemplate,
    render_payload,
};
use super::template::{TemplateDefinition, TemplateId};

/// Build a TemplateDefinition from a DocumentTemplate.
fn build_definition<T: DocumentTemplate>() -> TemplateDefinition {
    TemplateDefinition {
        id: T::ID,
        title: T::TITLE,
        fields: T::FIELDS,
        render: render_payload::<T>,
    }
}

/// The definition registered for `id`.
pub fn definition_for(id: TemplateId) -> TemplateDefinition {
    match id {
        TemplateId::Invoice => build_definition::<InvoiceTemplate>(),
        TemplateId::Report => build_definition::<ReportTemplate>(),
        TemplateId::Proposal => build_definition::<ProposalTemplate>(),
        TemplateId::Letter => build_definition::<LetterTemplate>(),
    }
}

/// Get all registered templates as TemplateDefinitions.
pub fn get_all_templates() -> Vec<TemplateDefinition> {
    TemplateId::ALL.into_iter().map(definition_for).collect()
}

/// Immutable lookup table from template identifier to definition.
#[derive(Debug)]
pub struct TemplateRegistry {
    templates: HashMap<TemplateId, TemplateDefinition>,
}

impl TemplateRegistry {
    /// Build the registry from every registered template.
    pub fn new() -> Self {
        let templates = get_all_templates()
            .into_iter()
            .map(|definition| {
                debug!("Registering template: {}", definition.id);
                (definition.id, definition)
            })
            .collect();

        Self { templates }
    }

    /// Look up a template by identifier.
    pub fn lookup(&self, id: TemplateId) -> Option<&TemplateDefinition> {
        self.templates.get(&id)
    }

    /// Look up a template by its wire name.
    pub fn get(&self, name: &str) -> Option<&TemplateDefinition> {
        name.parse().ok().and_then(|id| self.lookup(id))
    }

    /// All definitions, in `TemplateId::ALL` order.
    pub fn definitions(&self) -> Vec<&TemplateDefinition> {
        TemplateId::ALL
            .iter()
            .filter_map(|id| self.templates.get(id))
            .collect()
    }

    /// Number of registered templates.
    pub fn len(&self) -> usize {
        self.templates.len()
    }

    /// Whether the registry is empty.
    pub fn is_empty(&self) -> bool {
        self.templates.is_empty()
    }
}

impl Default for TemplateRegistry {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_id_has_a_definition() {
        let registry = TemplateRegistry::new();
        assert_eq!(registry.len(), TemplateId::ALL.len());

        for id in TemplateId::ALL {
            let definition = registry.lookup(id).unwrap();
            assert_eq!(definition.id, id);
            assert!(!definition.fields.is_empty());
        }
    }

    #[test]
    fn test_definition_for_matches_its_id() {
        for id in TemplateId::ALL {
            assert_eq!(definition_for(id).id, id);
        }
    }

    #[test]
    fn test_get_by_name() {
        let registry = TemplateRegistry::new();
        assert_eq!(registry.get("proposal").unwrap().title, "BUSINESS PROPOSAL");
        assert!(registry.get("memo").is_none());
        assert!(registry.get("").is_none());
    }

    #[test]
    fn test_definitions_are_ordered() {
        let registry = TemplateRegistry::new();
        let ids: Vec<_> = registry.definitions().iter().map(|d| d.id).collect();
        assert_eq!(ids, TemplateId::ALL.to_vec());
    }

    #[test]
    fn test_invoice_fields() {
        let registry = TemplateRegistry::new();
        let invoice = registry.lookup(TemplateId::Invoice).unwrap();
        assert_eq!(invoice.title, "INVOICE");
        assert_eq!(
            invoice.fields,
            &["invoiceNumber", "date", "clientName", "items", "total"]
        );
    }
}
