//! Resource Registry - central registration of all resources.
//!
//! When adding a new resource:
//! 1. Create the resource file in `definitions/`
//! 2. Export it in `definitions/mod.rs`
//! 3. Register it here in `get_all_resources()`

use rmcp::model::{AnnotateAble, RawResource, RawResourceTemplate, ResourceTemplate};

use super::definitions::{ResourceDefinition, ServerInfoResource, TemplateCatalogResource};
use super::service::ResourceEntry;

/// Helper function to create an annotated resource from a definition.
fn build_resource<R: ResourceDefinition>() -> ResourceEntry {
    let mut raw = RawResource::new(R::URI, R::NAME);
    raw.description = Some(R::DESCRIPTION.to_string());
    raw.mime_type = Some(R::MIME_TYPE.to_string());

    ResourceEntry {
        resource: raw.no_annotation(),
        content: R::content(),
    }
}

/// Get all registered resources as ResourceEntries.
pub fn get_all_resources() -> Vec<ResourceEntry> {
    vec![
        build_resource::<ServerInfoResource>(),
        build_resource::<TemplateCatalogResource>(),
    ]
}

/// Get all registered resource templates.
///
/// Resource templates use URI templates (RFC 6570) to describe
/// parameterized resources that clients can fill in.
pub fn get_all_resource_templates() -> Vec<ResourceTemplate> {
    vec![
        RawResourceTemplate {
            uri_template: "documents://templates/{template}".to_string(),
            name: "Document Template".to_string(),
            title: Some("Document Template Fields".to_string()),
            description: Some(
                "Title and fields of one document template (invoice, report, proposal, letter)"
                    .to_string(),
            ),
            mime_type: Some("application/json".to_string()),
        }
        .no_annotation(),
    ]
}

/// Get the list of all resource URIs.
pub fn resource_uris() -> Vec<&'static str> {
    vec![ServerInfoResource::URI, TemplateCatalogResource::URI]
}
