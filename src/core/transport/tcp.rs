//! TCP transport implementation.
//!
//! Line-delimited JSON-RPC over raw TCP sockets. Every accepted connection
//! gets its own MCP session backed by a clone of the server, so all
//! sessions share one template registry.

use rmcp::ServiceExt;
use tokio::net::TcpListener;
use tracing::{debug, info, warn};

use super::{TransportError, TransportResult, config::TcpConfig};
use crate::core::McpServer;

/// TCP transport handler.
pub struct TcpTransport {
    config: TcpConfig,
}

impl TcpTransport {
    /// Create a new TCP transport with the given config.
    pub fn new(config: TcpConfig) -> Self {
        Self { config }
    }

    /// Get the bind address.
    pub fn address(&self) -> String {
        format!("{}:{}", self.config.host, self.config.port)
    }

    /// Run the TCP transport.
    pub async fn run(self, server: McpServer) -> TransportResult<()> {
        let addr = self.address();

        let listener = TcpListener::bind(&addr)
            .await
            .map_err(|e| TransportError::bind(&addr, e))?;

        info!(address = %addr, "Ready - listening (JSON-RPC over TCP)");

        loop {
            match listener.accept().await {
                Ok((stream, peer_addr)) => {
                    info!(%peer_addr, "Accepted connection");

                    if let Err(e) = stream.set_nodelay(true) {
                        warn!("Failed to set TCP_NODELAY for {}: {}", peer_addr, e);
                    }

                    tokio::spawn(Self::handle_connection(server.clone(), stream, peer_addr));
                }
                Err(e) => {
                    warn!("Failed to accept connection: {}", e);
                    // back off so a persistent accept error does not spin
                    tokio::time::sleep(tokio::time::Duration::from_millis(100)).await;
                }
            }
        }
    }

    /// Serve one client until it disconnects.
    async fn handle_connection(
        server: McpServer,
        stream: tokio::net::TcpStream,
        peer_addr: std::net::SocketAddr,
    ) {
        let service = match server.serve(stream).await {
            Ok(s) => {
                debug!(%peer_addr, "Client connected, serving");
                s
            }
            Err(e) => {
                warn!("Failed to initialize service for {}: {}", peer_addr, e);
                return;
            }
        };

        match service.waiting().await {
            Ok(reason) => info!(%peer_addr, ?reason, "Client disconnected"),
            Err(e) => warn!(%peer_addr, error = ?e, "Error while serving client"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_address() {
        let transport = TcpTransport::new(TcpConfig {
            port: 4000,
            host: "0.0.0.0".to_string(),
        });
        assert_eq!(transport.address(), "0.0.0.0:4000");
    }
}
