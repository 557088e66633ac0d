//! Demo MCP server entry point.
//!
//! Loads configuration, initializes logging, builds the template registry
//! once and serves it over the configured transport.

use anyhow::Result;
use tracing::{Level, info};
use tracing_subscriber::{EnvFilter, fmt};

use demo_mcp_server::core::{Config, McpServer, TransportService};

#[tokio::main]
async fn main() -> Result<()> {
    let config = Config::from_env();
    config.validate()?;

    init_logging(&config.logging.level);

    info!(
        name = %config.server.name,
        version = %config.server.version,
        "Starting server"
    );

    let server = McpServer::new(config.clone());
    info!(tools = server.list_tools().len(), "Server initialized");

    let transport = TransportService::new(config.transport);
    transport.run(server).await?;

    info!("Server shutting down");

    Ok(())
}

/// Initialize the logging subsystem.
///
/// Logs go to stderr; stdout belongs to the STDIO transport. `RUST_LOG`
/// directives are honoured on top of the configured level.
fn init_logging(level: &str) {
    let level: Level = level.parse().unwrap_or(Level::INFO);

    let filter = EnvFilter::from_default_env().add_directive(level.into());

    fmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_thread_ids(false)
        .with_file(false)
        .with_line_number(false)
        .with_writer(std::io::stderr)
        .init();
}
