//! Addition tool definition.

use futures::FutureExt;
use rmcp::{
    handler::server::tool::{ToolCallContext, ToolRoute, schema_for_type},
    model::{CallToolResult, Tool},
};
use tracing::{info, instrument};

use super::OperandsParams;
use crate::domains::documents::fields::format_number;
use crate::domains::tools::definitions::common::{parse_arguments, success_result};

/// Add tool - returns the sum of two numbers as text.
pub struct AddTool;

impl AddTool {
    /// Tool name as registered in MCP.
    pub const NAME: &'static str = "add";

    /// Tool description shown to clients.
    pub const DESCRIPTION: &'static str = "Add two numbers and return the sum.";

    /// Execute the tool logic.
    #[instrument(skip_all, fields(a = params.a, b = params.b))]
    pub fn execute(params: &OperandsParams) -> CallToolResult {
        info!("Add tool called");
        success_result(format_number(params.a + params.b))
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
