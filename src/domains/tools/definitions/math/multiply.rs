//! Multiplication tool definition.

use futures::FutureExt;
use rmcp::{
    handler::server::tool::{ToolCallContext, ToolRoute, schema_for_type},
    model::{CallToolResult, Tool},
};
use tracing::{info, instrument};

use super::OperandsParams;
use crate::domains::documents::fields::format_number;
use crate::domains::tools::definitions::common::{parse_arguments, success_result};

/// Multiply tool - returns the product of two numbers as text.
pub struct MultiplyTool;

impl MultiplyTool {
    /// Tool name as registered in MCP.
    pub const NAME: &'static str = "multiply";

    /// Tool description shown to clients.
    pub const DESCRIPTION: &'static str = "Multiply two numbers and return the product.";

    /// Multiply the two operands.
    #[instrument(skip_all, fields(a = params.a, b = params.b))]
    pub fn execute(params: &OperandsParams) -> CallToolResult {
        info!("Multiply tool called");
        success_result(format_number(params.a * params.b))
    }

    /// HTTP handler for this tool (for HTTP transport).
    #[cfg(feature = "http")]
    pub fn http_handler(
        arguments: serde_json::Value,
    ) -> Result<serde_json::Value, crate::domains::tools::ToolError> {
        super::super::common::http_call(arguments, Self::execute)
    }

    /// Create a Tool model for this tool (metadata).
    pub fn to_tool() -> Tool {
        Tool {
            name: Self::NAME.into(),
            description: Some(Self::DESCRIPTION.into()),
            input_schema: schema_for_type::<OperandsParams>().into(),
            annotations: None,
            output_schema: None,
            icons: None,
            meta: None,
            title: None,
        }
    }

    /// Create a ToolRoute for STDIO/TCP transport.
    pub fn create_route<S>() -> ToolRoute<S>
    where
        S: Send + Sync + 'static,
    {
        ToolRoute::new_dyn(Self::to_tool(), |ctx: ToolCallContext<'_, S>| {
            let args = ctx.arguments.clone().unwrap_or_default();
            async move {
                let params: OperandsParams = parse_arguments(args)?;
                Ok(Self::execute(&params))
            }
            .boxed()
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domains::tools::definitions::common::first_text;

    #[test]
    fn test_multiply() {
        let result = MultiplyTool::execute(&OperandsParams { a: 6.0, b: 7.0 });
        assert_eq!(first_text(&result), "42");

        let result = MultiplyTool::execute(&OperandsParams { a: 2.5, b: -2.0 });
        assert_eq!(first_text(&result), "-5");
    }

    #[test]
    fn test_multiply_by_zero() {
        let result = MultiplyTool::execute(&OperandsParams { a: -3.0, b: 0.0 });
        assert_eq!(first_text(&result), "0");
    }
}
