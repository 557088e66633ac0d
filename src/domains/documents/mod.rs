//! Documents domain module.
//!
//! Renders plain-text business documents from a fixed set of templates.
//!
//! ## Architecture
//!
//! - `template.rs` - `TemplateId` and `TemplateDefinition`
//! - `definitions/` - Individual templates (one file per template)
//! - `fields.rs` - Field defaulting and number formatting
//! - `registry.rs` - Immutable template registry
//! - `generator.rs` - Dispatch from template name to renderer
//! - `error.rs` - Document-specific error types

pub mod definitions;
mod error;
pub mod fields;
mod generator;
mod registry;
mod template;

pub use error::DocumentError;
pub use generator::DocumentGenerator;
pub use registry::{TemplateRegistry, get_all_templates};
pub use template::{RenderFn, TemplateDefinition, TemplateId};

/// Caller-supplied data used to fill a template's fields.
pub type DocumentPayload = serde_json::Map<String, serde_json::Value>;
