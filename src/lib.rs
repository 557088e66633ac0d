//! Demo MCP Server Library
//!
//! A Model Context Protocol server exposing a handful of demo tools: simple
//! arithmetic, canned weather/profile/todo lookups, currency conversion,
//! keyword sentiment analysis, and a plain-text document generator driven by
//! a registry of named templates (invoice, report, proposal, letter).
//!
//! # Architecture
//!
//! - **core**: configuration, error handling, the MCP server handler and transports
//! - **domains**: business logic organized by bounded contexts
//!   - **documents**: template registry, payload rendering and the generator
//!   - **tools**: MCP tools that can be executed by clients
//!   - **resources**: read-only views of the server and its template catalogue
//!
//! # Example
//!
//! ```rust,no_run
//! use demo_mcp_server::{core::Config, core::McpServer};
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     let config = Config::from_env();
//!     config.validate()?;
//!     let server = McpServer::new(config);
//!     // Hand the server to a transport...
//!     Ok(())
//! }
//! ```

pub mod core;
pub mod domains;

pub use core::{Config, Error, McpServer, Result};
pub use domains::documents::{DocumentGenerator, TemplateRegistry};
