//! STDIO transport implementation.
//!
//! The default MCP mode: one client speaking over stdin/stdout. Logs must go
//! to stderr while this transport runs.

use rmcp::ServiceExt;
use tracing::info;

use super::{TransportError, TransportResult};
use crate::core::McpServer;

/// STDIO transport handler.
pub struct StdioTransport;

impl StdioTransport {
    /// Serve `server` over stdin/stdout until the client disconnects.
    pub async fn run(server: McpServer) -> TransportResult<()> {
        info!(server = server.name(), "Ready - communicating via stdin/stdout");

        let service = server
            .serve(rmcp::transport::stdio())
            .await
            .map_err(|e| TransportError::init(e.to_string()))?;

        let reason = service
            .waiting()
            .await
            .map_err(|e| TransportError::service(e.to_string()))?;

        info!(?reason, "STDIO transport finished");
        Ok(())
    }
}
