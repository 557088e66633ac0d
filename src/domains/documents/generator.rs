//! Document generator - dispatches a template name and payload to a renderer.

use std::sync::Arc;
use tracing::{debug, instrument, warn};

use super::DocumentPayload;
use super::error::DocumentError;
use super::registry::TemplateRegistry;

/// Generates documents from the templates in a [`TemplateRegistry`].
///
/// Each call is independent: the registry is read-only and a render only
/// reads its own payload.
#[derive(Debug, Clone)]
pub struct DocumentGenerator {
    registry: Arc<TemplateRegistry>,
}

impl DocumentGenerator {
    /// Create a generator over the given registry.
    pub fn new(registry: Arc<TemplateRegistry>) -> Self {
        Self { registry }
    }

    /// The registry this generator renders from.
    pub fn registry(&self) -> &Arc<TemplateRegistry> {
        &self.registry
    }

    /// Render `payload` with the template named `template`.
    ///
    /// Unknown names yield [`DocumentError::TemplateNotFound`] carrying the
    /// name as given; the rendered text is returned unmodified otherwise.
    #[instrument(skip(self, payload), fields(fields = payload.len()))]
    pub fn generate(
        &self,
        template: &str,
        payload: &DocumentPayload,
    ) -> Result<String, DocumentError> {
        let Some(definition) = self.registry.get(template) else {
            warn!("Unknown template requested: {}", template);
            return Err(DocumentError::template_not_found(template));
        };

        debug!("Rendering {} ({})", definition.id, definition.title);
        definition.render(payload)
    }
}

impl Default for DocumentGenerator {
    fn default() -> Self {
        Self::new(Arc::new(TemplateRegistry::new()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn payload(value: serde_json::Value) -> DocumentPayload {
        value.as_object().cloned().unwrap()
    }

    #[test]
    fn test_generate_invoice_defaults() {
        let generator = DocumentGenerator::default();
        let doc = generator.generate("invoice", &payload(json!({}))).unwrap();

        assert!(doc.contains("INVOICE #000000"));
        assert!(doc.contains("Date: 2023-01-01"));
        assert!(doc.contains("Client: Client Name"));
        assert!(doc.contains("Items:\n\n"));
        assert!(doc.contains("Total: $0.00"));
    }

    #[test]
    fn test_generate_invoice_amounts() {
        let generator = DocumentGenerator::default();
        let doc = generator
            .generate(
                "invoice",
                &payload(json!({
                    "items": [{ "description": "Widget", "amount": 9.5 }],
                    "total": 9.5
                })),
            )
            .unwrap();

        assert!(doc.contains("- Widget: $9.50"));
        assert!(doc.contains("Total: $9.50"));
    }

    #[test]
    fn test_generate_report_sections() {
        let generator = DocumentGenerator::default();
        let doc = generator
            .generate(
                "report",
                &payload(json!({ "sections": [{ "title": "Intro", "content": "Hello" }] })),
            )
            .unwrap();

        assert!(doc.contains("## Intro\n\nHello"));
    }

    #[test]
    fn test_generate_letter_salutation() {
        let generator = DocumentGenerator::default();
        let doc = generator
            .generate("letter", &payload(json!({ "recipient": "Jane Doe" })))
            .unwrap();

        assert!(doc.contains("Dear Jane,"));
    }

    #[test]
    fn test_generate_unknown_template() {
        let generator = DocumentGenerator::default();
        let err = generator.generate("memo", &payload(json!({}))).unwrap_err();

        assert_eq!(err, DocumentError::TemplateNotFound("memo".to_string()));
        assert_eq!(format!("Error: {}", err), "Error: Template 'memo' not found.");
    }

    #[test]
    fn test_generate_is_idempotent() {
        let generator = DocumentGenerator::default();
        let data = payload(json!({ "projectName": "Apollo", "budget": 1.005 }));

        let first = generator.generate("proposal", &data).unwrap();
        let second = generator.generate("proposal", &data).unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn test_generators_share_registry() {
        let registry = Arc::new(TemplateRegistry::new());
        let a = DocumentGenerator::new(registry.clone());
        let b = a.clone();
        assert!(Arc::ptr_eq(a.registry(), b.registry()));
        assert_eq!(Arc::strong_count(&registry), 3);
    }
}
