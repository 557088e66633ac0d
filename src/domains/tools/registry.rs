//! Tool Registry - central registration and dispatch for all tools.
//!
//! This module provides:
//! - A registry of all available tools
//! - HTTP dispatch for tool calls (when http feature is enabled)

use std::sync::Arc;
#[cfg(feature = "http")]
use tracing::warn;

use crate::domains::documents::DocumentGenerator;

#[cfg(feature = "http")]
use super::ToolError;
use super::definitions::{
    AddTool, AnalyzeSentimentTool, ConvertCurrencyTool, GenerateDocumentTool, GetTodosTool,
    GetUserProfileTool, GetWeatherTool, MultiplyTool,
};

/// Wire names of every tool, in registration order.
pub const TOOL_NAMES: [&str; 8] = [
    AddTool::NAME,
    MultiplyTool::NAME,
    GetWeatherTool::NAME,
    GetUserProfileTool::NAME,
    GetTodosTool::NAME,
    ConvertCurrencyTool::NAME,
    AnalyzeSentimentTool::NAME,
    GenerateDocumentTool::NAME,
];

// ============================================================================
// Tool Registry
// ============================================================================

/// Tool registry - manages all available tools.
pub struct ToolRegistry {
    #[cfg_attr(not(feature = "http"), allow(dead_code))]
    generator: Arc<DocumentGenerator>,
}

impl ToolRegistry {
    /// Create a new tool registry.
    pub fn new(generator: Arc<DocumentGenerator>) -> Self {
        Self { generator }
    }

    /// Get all tool names.
    pub fn tool_names(&self) -> Vec<&'static str> {
        TOOL_NAMES.to_vec()
    }

    /// Dispatch an HTTP tool call to the appropriate handler.
    #[cfg(feature = "http")]
    pub fn call_tool(
        &self,
        name: &str,
        arguments: serde_json::Value,
    ) -> Result<serde_json::Value, ToolError> {
        match name {
            AddTool::NAME => AddTool::http_handler(arguments),
            MultiplyTool::NAME => MultiplyTool::http_handler(arguments),
            GetWeatherTool::NAME => GetWeatherTool::http_handler(arguments),
            GetUserProfileTool::NAME => GetUserProfileTool::http_handler(arguments),
            GetTodosTool::NAME => GetTodosTool::http_handler(arguments),
            ConvertCurrencyTool::NAME => ConvertCurrencyTool::http_handler(arguments),
            AnalyzeSentimentTool::NAME => AnalyzeSentimentTool::http_handler(arguments),
            GenerateDocumentTool::NAME => {
                GenerateDocumentTool::http_handler(arguments, &self.generator)
            }
            _ => {
                warn!("Unknown tool requested: {}", name);
                Err(ToolError::not_found(name))
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn test_registry() -> ToolRegistry {
        ToolRegistry::new(Arc::new(DocumentGenerator::default()))
    }

    #[test]
    fn test_registry_tool_names() {
        let names = test_registry().tool_names();
        assert_eq!(names.len(), 8);
        assert!(names.contains(&"add"));
        assert!(names.contains(&"multiply"));
        assert!(names.contains(&"getWeather"));
        assert!(names.contains(&"getUserProfile"));
        assert!(names.contains(&"getTodos"));
        assert!(names.contains(&"convertCurrency"));
        assert!(names.contains(&"analyzeSentiment"));
        assert!(names.contains(&"generateDocument"));
    }

    #[cfg(feature = "http")]
    #[test]
    fn test_registry_call_add() {
        let result = test_registry()
            .call_tool("add", serde_json::json!({ "a": 1, "b": 2 }))
            .unwrap();
        assert_eq!(result["content"][0]["text"], "3");
    }

    #[cfg(feature = "http")]
    #[test]
    fn test_registry_call_without_arguments() {
        let result = test_registry().call_tool("getTodos", serde_json::Value::Null);
        assert!(result.is_ok());
    }

    #[cfg(feature = "http")]
    #[test]
    fn test_registry_call_unknown() {
        let result = test_registry().call_tool("unknown", serde_json::json!({}));
        assert!(matches!(result, Err(ToolError::NotFound(_))));
    }

    #[cfg(feature = "http")]
    #[test]
    fn test_registry_call_bad_arguments() {
        let result = test_registry().call_tool("add", serde_json::json!({ "a": "x" }));
        assert!(matches!(result, Err(ToolError::InvalidArguments(_))));
    }
}
