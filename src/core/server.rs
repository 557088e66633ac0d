//! MCP Server implementation and lifecycle management.
//!
//! This module contains the main server handler that implements the MCP
//! protocol by delegating to domain-specific services.
//!
//! ## Tool Architecture
//!
//! Tools are defined in `domains/tools/definitions/` with one file per tool.
//! Each tool defines:
//! - Parameters struct (for rmcp)
//! - `execute()` method (core logic)
//! - `http_handler()` method (called via ToolRegistry for HTTP transport)
//!
//! The ToolRouter is built in `domains/tools/router.rs`.

use rmcp::{
    ErrorData as McpError, RoleServer, ServerHandler, handler::server::tool::ToolRouter, model::*,
    service::RequestContext, tool_handler,
};
use std::sync::Arc;
use tracing::{info, instrument};

use super::config::Config;
use crate::domains::{
    documents::{DocumentGenerator, TemplateRegistry},
    resources::ResourceService,
    tools::build_tool_router,
};

#[cfg(feature = "http")]
use crate::domains::tools::ToolRegistry;

/// The main MCP server handler.
///
/// This struct implements the `ServerHandler` trait from rmcp and coordinates
/// between the domain services. Cloning is cheap; every clone shares the same
/// template registry.
#[derive(Clone)]
pub struct McpServer {
    /// Server configuration.
    config: Arc<Config>,

    /// Document generator shared by the document tool.
    #[cfg_attr(not(feature = "http"), allow(dead_code))]
    generator: Arc<DocumentGenerator>,

    /// Service for handling resource-related requests.
    resource_service: Arc<ResourceService>,

    /// Tool router for handling tool calls.
    tool_router: ToolRouter<Self>,
}

impl McpServer {
    /// Create a new MCP server with the given configuration.
    ///
    /// Builds the template registry; use [`McpServer::with_templates`] to
    /// supply one.
    pub fn new(config: Config) -> Self {
        Self::with_templates(config, Arc::new(TemplateRegistry::new()))
    }

    /// Create a new MCP server rendering documents from `templates`.
    pub fn with_templates(config: Config, templates: Arc<TemplateRegistry>) -> Self {
        let config = Arc::new(config);

        let generator = Arc::new(DocumentGenerator::new(templates.clone()));
        let resource_service = Arc::new(ResourceService::new(config.server.clone(), templates));

        Self {
            tool_router: build_tool_router::<Self>(generator.clone()),
            config,
            generator,
            resource_service,
        }
    }

    /// Get the server name.
    pub fn name(&self) -> &str {
        &self.config.server.name
    }

    /// Get the server version.
    pub fn version(&self) -> &str {
        &self.config.server.version
    }

    /// Get the instructions sent to clients.
    pub fn instructions(&self) -> &str {
        &self.config.server.instructions
    }

    /// Get the server configuration.
    pub fn config(&self) -> &Arc<Config> {
        &self.config
    }

    // ========================================================================
    // HTTP Transport Support Methods
    // ========================================================================

    /// List all available tools (for HTTP transport).
    pub fn list_tools(&self) -> Vec<serde_json::Value> {
        self.tool_router
            .list_all()
            .into_iter()
            .map(|t| {
                serde_json::json!({
                    "name": t.name,
                    "description": t.description,
                    "inputSchema": t.input_schema
                })
            })
            .collect()
    }

    /// Call a tool by name (for HTTP transport).
    #[cfg(feature = "http")]
    pub async fn call_tool(
        &self,
        name: &str,
        arguments: serde_json::Value,
    ) -> Result<serde_json::Value, String> {
        let registry = ToolRegistry::new(self.generator.clone());
        registry
            .call_tool(name, arguments)
            .map_err(|e| e.to_string())
    }

    /// List all available resources (for HTTP transport).
    pub async fn list_resources(&self) -> Vec<serde_json::Value> {
        let resources = self.resource_service.list_resources().await;

        resources
            .into_iter()
            .map(|r| {
                serde_json::json!({
                    "uri": r.uri,
                    "name": r.name,
                    "description": r.description,
                    "mimeType": r.mime_type
                })
            })
            .collect()
    }

    /// Read a resource by URI (for HTTP transport).
    pub async fn read_resource(&self, uri: &str) -> Result<serde_json::Value, String> {
        match self.resource_service.read_resource(uri).await {
            Ok(result) => Ok(serde_json::json!({
                "contents": result.contents
            })),
            Err(e) => Err(e.to_string()),
        }
    }

    /// List all available resource templates (for HTTP transport).
    pub async fn list_resource_templates(&self) -> Vec<serde_json::Value> {
        let templates = self.resource_service.list_resource_templates().await;

        templates
            .into_iter()
            .map(|t| {
                serde_json::json!({
                    "uriTemplate": t.raw.uri_template,
                    "name": t.raw.name,
                    "title": t.raw.title,
                    "description": t.raw.description,
                    "mimeType": t.raw.mime_type
                })
            })
            .collect()
    }
}

/// ServerHandler implementation with tool_handler macro for automatic tool routing.
#[tool_handler]
impl ServerHandler for McpServer {
    fn get_info(&self) -> ServerInfo {
        ServerInfo {
            instructions: Some(self.config.server.instructions.clone()),
            capabilities: ServerCapabilities::builder()
                .enable_tools()
                .enable_resources()
                .build(),
            ..Default::default()
        }
    }

    #[instrument(skip(self, _context))]
    async fn list_resources(
        &self,
        _request: Option<PaginatedRequestParam>,
        _context: RequestContext<RoleServer>,
    ) -> Result<ListResourcesResult, McpError> {
        info!("Listing resources");
        let resources = self.resource_service.list_resources().await;
        Ok(ListResourcesResult {
            resources,
            next_cursor: None,
            meta: None,
        })
    }

    #[instrument(skip(self, _context))]
    async fn list_resource_templates(
        &self,
        _request: Option<PaginatedRequestParam>,
        _context: RequestContext<RoleServer>,
    ) -> Result<ListResourceTemplatesResult, McpError> {
        info!("Listing resource templates");
        let templates = self.resource_service.list_resource_templates().await;
        Ok(ListResourceTemplatesResult {
            resource_templates: templates,
            next_cursor: None,
            meta: None,
        })
    }

    #[instrument(skip(self, _context))]
    async fn read_resource(
        &self,
        request: ReadResourceRequestParam,
        _context: RequestContext<RoleServer>,
    ) -> Result<ReadResourceResult, McpError> {
        info!("Reading resource: {}", request.uri);
        self.resource_service
            .read_resource(&request.uri)
            .await
            .map_err(|e| McpError::resource_not_found(e.to_string(), None))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_server_identity() {
        let server = McpServer::new(Config::default());
        assert_eq!(server.name(), "Demo");
        assert_eq!(server.version(), env!("CARGO_PKG_VERSION"));
        assert!(server.instructions().contains("generateDocument"));
    }

    #[test]
    fn test_get_info_capabilities() {
        let server = McpServer::new(Config::default());
        let info = server.get_info();
        assert!(info.capabilities.tools.is_some());
        assert!(info.capabilities.resources.is_some());
        assert!(info.capabilities.prompts.is_none());
    }

    #[test]
    fn test_list_tools() {
        let server = McpServer::new(Config::default());
        let tools = server.list_tools();
        assert_eq!(tools.len(), 8);
        assert!(tools.iter().any(|t| t["name"] == "generateDocument"));
    }

    #[test]
    fn test_list_resources_blocking() {
        let server = McpServer::new(Config::default());
        let resources = tokio_test::block_on(server.list_resources());
        assert_eq!(resources.len(), 2);
    }

    #[tokio::test]
    async fn test_read_resource() {
        let server = McpServer::new(Config::default());
        let result = server.read_resource("documents://templates/letter").await;
        assert!(result.is_ok());

        let result = server.read_resource("documents://nowhere").await;
        assert!(result.is_err());
    }

    #[tokio::test]
    async fn test_clones_share_templates() {
        let templates = Arc::new(TemplateRegistry::new());
        let server = McpServer::with_templates(Config::default(), templates.clone());
        let _clone = server.clone();
        // registry, generator, resource service
        assert_eq!(Arc::strong_count(&templates), 3);
    }

    #[cfg(feature = "http")]
    #[tokio::test]
    async fn test_call_tool_over_http_path() {
        let server = McpServer::new(Config::default());
        let result = server
            .call_tool(
                "generateDocument",
                serde_json::json!({ "template": "invoice", "data": {} }),
            )
            .await
            .unwrap();
        let text = result["content"][0]["text"].as_str().unwrap();
        assert!(text.contains("INVOICE #000000"));

        let err = server.call_tool("nope", serde_json::json!({})).await.unwrap_err();
        assert_eq!(err, "Tool not found: nope");
    }
}
