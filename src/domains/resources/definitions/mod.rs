//! Resource definitions module.
//!
//! A definition only carries static metadata; the body is resolved by
//! [`ResourceService`](super::ResourceService) against the live template
//! registry, so it always matches what `generateDocument` accepts.
//!
//! ## Adding a New Resource
//!
//! 1. Create a new file (e.g., `my_resource.rs`)
//! 2. Implement the `ResourceDefinition` trait
//! 3. Export it here
//! 4. Register in `registry.rs`

pub mod server_info;
pub mod template_catalog;

pub use server_info::ServerInfoResource;
pub use template_catalog::{TemplateCatalogResource, TemplateSummary};

use super::service::ResourceContent;

/// Trait for resource definitions.
///
/// Static description of a fixed-URI resource.
pub trait ResourceDefinition {
    /// The unique URI of the resource.
    const URI: &'static str;

    /// The display name of the resource.
    const NAME: &'static str;

    /// A description of the resource.
    const DESCRIPTION: &'static str;

    /// The MIME type of the resource content.
    const MIME_TYPE: &'static str;

    /// Which body the service resolves for this resource.
    fn content() -> ResourceContent;
}
