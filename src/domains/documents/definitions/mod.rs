//! Document template definitions.
//!
//! Each template is defined in its own file with:
//! - Metadata (id, title, expected fields)
//! - A typed view of the payload with named optional fields
//! - A pure render function
//!
//! ## Adding a New Template
//!
//! 1. Add a variant to `TemplateId`
//! 2. Create a new file implementing `DocumentTemplate`
//! 3. Export it here
//! 4. Register it in `registry.rs`

pub mod invoice;
pub mod letter;
pub mod proposal;
pub mod report;

pub use invoice::{InvoiceData, InvoiceTemplate, LineItem};
pub use letter::{LetterData, LetterTemplate};
pub use proposal::{ProposalData, ProposalTemplate};
pub use report::{ReportData, ReportSection, ReportTemplate};

use serde::de::DeserializeOwned;
use serde_json::Value;

use super::DocumentPayload;
use super::error::DocumentError;
use super::template::TemplateId;

/// Date printed when a document has none.
pub const DEFAULT_DATE: &str = "2023-01-01";

/// Trait for document template definitions.
///
/// Each template must implement this trait to provide its metadata and renderer.
pub trait DocumentTemplate {
    /// The identifier this template is registered under.
    const ID: TemplateId;

    /// Display name of the document.
    const TITLE: &'static str;

    /// Payload fields the template reads, in order.
    const FIELDS: &'static [&'static str];

    /// Typed view of the payload.
    type Data: DeserializeOwned;

    /// Render the document text.
    fn render(data: &Self::Data) -> String;
}

/// Read a raw payload into the template's fields and render it.
pub fn render_payload<T: DocumentTemplate>(
    payload: &DocumentPayload,
) -> Result<String, DocumentError> {
    let data: T::Data = serde_json::from_value(Value::Object(payload.clone()))
        .map_err(|e| DocumentError::invalid_payload(T::ID.as_str(), e.to_string()))?;
    Ok(T::render(&data))
}
