//! Domains module containing business logic organized by bounded contexts.
//!
//! - **documents**: template registry and document rendering
//! - **tools**: MCP tools that can be executed by clients
//! - **resources**: read-only catalogue of document templates

pub mod documents;
pub mod resources;
pub mod tools;
