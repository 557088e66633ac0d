//! Server info resource definition.

use serde::Serialize;

use super::ResourceDefinition;
use crate::core::config::ServerConfig;
use crate::domains::documents::{TemplateId, TemplateRegistry};
use crate::domains::resources::service::ResourceContent;
use crate::domains::tools::TOOL_NAMES;

/// Server information resource (dynamic).
pub struct ServerInfoResource;

/// Body of the server info resource.
#[derive(Debug, Serialize)]
pub struct ServerInfo<'a> {
    pub server: &'a str,
    pub version: &'a str,
    pub tools: usize,
    pub templates: Vec<TemplateId>,
}

impl ServerInfoResource {
    /// Describe the running server.
    pub fn resolve<'a>(server: &'a ServerConfig, registry: &TemplateRegistry) -> ServerInfo<'a> {
        ServerInfo {
            server: &server.name,
            version: &server.version,
            tools: TOOL_NAMES.len(),
            templates: registry.definitions().iter().map(|d| d.id).collect(),
        }
    }
}

impl ResourceDefinition for ServerInfoResource {
    const URI: &'static str = "mcp://server/info";
    const NAME: &'static str = "Server Information";
    const DESCRIPTION: &'static str = "Information about this MCP server";
    const MIME_TYPE: &'static str = "application/json";

    fn content() -> ResourceContent {
        ResourceContent::ServerInfo
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Config;

    #[test]
    fn test_server_info_metadata() {
        assert_eq!(ServerInfoResource::URI, "mcp://server/info");
        assert_eq!(ServerInfoResource::MIME_TYPE, "application/json");
    }

    #[test]
    fn test_server_info_resolve() {
        let config = Config::default();
        let info = ServerInfoResource::resolve(&config.server, &TemplateRegistry::new());
        assert_eq!(info.server, "Demo");
        assert_eq!(info.tools, 8);
        assert_eq!(info.templates.len(), 4);

        let json = serde_json::to_value(&info).unwrap();
        assert_eq!(json["templates"][0], "invoice");
    }
}
