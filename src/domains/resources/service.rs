//! Resource service implementation.
//!
//! The ResourceService manages resource discovery and access.
//! It maintains a registry of available resources and handles read requests.
//!
//! Resources are defined in `definitions/` and registered via `registry.rs`.

use rmcp::model::{ReadResourceResult, Resource, ResourceContents, ResourceTemplate};
use std::collections::HashMap;
use std::sync::Arc;
use tracing::{debug, info};

use super::definitions::{ServerInfoResource, TemplateCatalogResource};
use super::error::ResourceError;
use super::registry::{get_all_resource_templates, get_all_resources};
use crate::core::config::ServerConfig;
use crate::domains::documents::TemplateRegistry;

/// Service for managing and accessing resources.
pub struct ResourceService {
    /// Server identity, reported by the server info resource.
    server: ServerConfig,

    /// Templates described by the catalogue resources.
    templates: Arc<TemplateRegistry>,

    /// Registry of available resources.
    /// Key: resource URI, Value: resource metadata
    resources: HashMap<String, ResourceEntry>,

    /// Resource templates for parameterized resources.
    resource_templates: Vec<ResourceTemplate>,
}

/// An entry in the resource registry.
#[derive(Debug, Clone)]
pub struct ResourceEntry {
    /// The resource metadata.
    pub resource: Resource,

    /// The content provider for this resource.
    pub content: ResourceContent,
}

/// Content kinds, all computed on read.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResourceContent {
    /// Server name, version and template ids.
    ServerInfo,

    /// Summaries of every document template.
    TemplateCatalog,
}

impl ResourceService {
    /// Create a new ResourceService.
    pub fn new(server: ServerConfig, templates: Arc<TemplateRegistry>) -> Self {
        info!("Initializing ResourceService");

        let mut service = Self {
            server,
            templates,
            resources: HashMap::new(),
            resource_templates: get_all_resource_templates(),
        };

        for entry in get_all_resources() {
            service.register_resource(entry);
        }

        service
    }

    /// Register a resource.
    pub fn register_resource(&mut self, entry: ResourceEntry) {
        debug!("Registering resource: {}", entry.resource.raw.uri);
        self.resources
            .insert(entry.resource.raw.uri.to_string(), entry);
    }

    /// List all available resources.
    pub async fn list_resources(&self) -> Vec<Resource> {
        self.resources
            .values()
            .map(|entry| entry.resource.clone())
            .collect()
    }

    /// List all available resource templates.
    pub async fn list_resource_templates(&self) -> Vec<ResourceTemplate> {
        self.resource_templates.clone()
    }

    /// Read a resource by URI.
    pub async fn read_resource(&self, uri: &str) -> Result<ReadResourceResult, ResourceError> {
        let body = match self.resources.get(uri) {
            Some(entry) => self.resolve_content(entry.content)?,
            None => {
                let summary = TemplateCatalogResource::resolve_entry(uri, &self.templates)
                    .ok_or_else(|| ResourceError::not_found(uri))?;
                serde_json::to_string_pretty(&summary)?
            }
        };

        Ok(ReadResourceResult {
            contents: vec![ResourceContents::text(body, uri)],
        })
    }

    /// Compute the JSON body of a registered resource.
    fn resolve_content(&self, content: ResourceContent) -> Result<String, ResourceError> {
        let body = match content {
            ResourceContent::ServerInfo => serde_json::to_string_pretty(
                &ServerInfoResource::resolve(&self.server, &self.templates),
            )?,
            ResourceContent::TemplateCatalog => {
                serde_json::to_string_pretty(&TemplateCatalogResource::resolve(&self.templates))?
            }
        };
        Ok(body)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Config;

    fn test_service() -> ResourceService {
        ResourceService::new(Config::default().server, Arc::new(TemplateRegistry::new()))
    }

    fn text_of(result: &ReadResourceResult) -> &str {
        match &result.contents[0] {
            ResourceContents::TextResourceContents { text, .. } => text,
            _ => panic!("Expected text contents"),
        }
    }

    #[tokio::test]
    async fn test_resource_service_creation() {
        let service = test_service();
        assert_eq!(service.list_resources().await.len(), 2);
        assert_eq!(service.list_resource_templates().await.len(), 1);
    }

    #[tokio::test]
    async fn test_read_template_catalog() {
        let service = test_service();
        let result = service.read_resource("documents://templates").await.unwrap();

        let catalog: serde_json::Value = serde_json::from_str(text_of(&result)).unwrap();
        assert_eq!(catalog.as_array().unwrap().len(), 4);
        assert_eq!(catalog[2]["title"], "BUSINESS PROPOSAL");
    }

    #[tokio::test]
    async fn test_read_single_template() {
        let service = test_service();
        let result = service
            .read_resource("documents://templates/invoice")
            .await
            .unwrap();

        let entry: serde_json::Value = serde_json::from_str(text_of(&result)).unwrap();
        assert_eq!(entry["id"], "invoice");
        assert_eq!(entry["fields"][0], "invoiceNumber");
    }

    #[tokio::test]
    async fn test_read_server_info() {
        let service = test_service();
        let result = service.read_resource("mcp://server/info").await.unwrap();
        assert!(text_of(&result).contains("\"server\": \"Demo\""));
    }

    #[tokio::test]
    async fn test_read_nonexistent_resource() {
        let service = test_service();

        let result = service.read_resource("mcp://server/nonexistent").await;
        assert!(matches!(result, Err(ResourceError::NotFound(_))));

        let result = service.read_resource("documents://templates/memo").await;
        assert!(result.is_err());
    }
}
