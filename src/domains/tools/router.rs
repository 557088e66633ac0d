//! Tool Router - builds the rmcp ToolRouter from the tool definitions.
//!
//! Each tool knows how to create its own route; tools that need shared
//! state receive it here.

use std::sync::Arc;

use rmcp::handler::server::tool::ToolRouter;

use crate::domains::documents::DocumentGenerator;

use super::definitions::{
    AddTool, AnalyzeSentimentTool, ConvertCurrencyTool, GenerateDocumentTool, GetTodosTool,
    GetUserProfileTool, GetWeatherTool, MultiplyTool,
};

/// Build the tool router with all registered tools.
pub fn build_tool_router<S>(generator: Arc<DocumentGenerator>) -> ToolRouter<S>
where
    S: Send + Sync + 'static,
{
    ToolRouter::new()
        .with_route(AddTool::create_route())
        .with_route(MultiplyTool::create_route())
        .with_route(GetWeatherTool::create_route())
        .with_route(GetUserProfileTool::create_route())
        .with_route(GetTodosTool::create_route())
        .with_route(ConvertCurrencyTool::create_route())
        .with_route(AnalyzeSentimentTool::create_route())
        .with_route(GenerateDocumentTool::create_route(generator))
}

#[cfg(test)]
mod tests {
    use super::super::registry::ToolRegistry;
    use super::*;

    struct TestServer {}

    fn test_generator() -> Arc<DocumentGenerator> {
        Arc::new(DocumentGenerator::default())
    }

    #[test]
    fn test_build_router() {
        let router: ToolRouter<TestServer> = build_tool_router(test_generator());
        let tools = router.list_all();
        assert_eq!(tools.len(), 8);

        let names: Vec<_> = tools.iter().map(|t| t.name.as_ref()).collect();
        assert!(names.contains(&"add"));
        assert!(names.contains(&"generateDocument"));
        assert!(names.contains(&"convertCurrency"));
    }

    #[test]
    fn test_registry_matches_router() {
        let generator = test_generator();
        let registry = ToolRegistry::new(generator.clone());
        let registry_names = registry.tool_names();

        let router: ToolRouter<TestServer> = build_tool_router(generator);
        let router_tools = router.list_all();
        let router_names: Vec<_> = router_tools.iter().map(|t| t.name.as_ref()).collect();

        assert_eq!(registry_names.len(), router_names.len());
        for name in registry_names {
            assert!(router_names.contains(&name));
        }
    }
}
