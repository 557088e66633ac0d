//! Todo list tool.

use futures::FutureExt;
use rmcp::{
    handler::server::tool::{ToolCallContext, ToolRoute, schema_for_type},
    model::{CallToolResult, Tool},
};
use serde::Serialize;
use tracing::info;

use crate::domains::tools::definitions::common::{NoParams, structured_result};

/// A single todo entry.
#[derive(Debug, Clone, Serialize)]
pub struct Todo {
    pub id: u32,
    pub title: &'static str,
    pub completed: bool,
}

const TODOS: [Todo; 4] = [
    Todo {
        id: 1,
        title: "Finish project",
        completed: false,
    },
    Todo {
        id: 2,
        title: "Buy groceries",
        completed: true,
    },
    Todo {
        id: 3,
        title: "Call dentist",
        completed: false,
    },
    Todo {
        id: 4,
        title: "Prepare presentation",
        completed: false,
    },
];

/// Todo list tool - returns the sample todo list.
pub struct GetTodosTool;

impl GetTodosTool {
    pub const NAME: &'static str = "getTodos";

    pub const DESCRIPTION: &'static str = "Get the current user's todo list.";

    /// Return the canned todo list.
    pub fn execute(_params: &NoParams) -> CallToolResult {
        info!("Todo list requested");
        structured_result(&TODOS)
    }

    /// HTTP handler for this tool (for HTTP transport).
    #[cfg(feature = "http")]
    pub fn http_handler(
        arguments: serde_json::Value,
    ) -> Result<serde_json::Value, crate::domains::tools::ToolError> {
        crate::domains::tools::definitions::common::http_call(arguments, Self::execute)
    }

    /// Create a Tool model for this tool (metadata).
    pub fn to_tool() -> Tool {
        Tool {
            name: Self::NAME.into(),
            description: Some(Self::DESCRIPTION.into()),
            input_schema: schema_for_type::<NoParams>().into(),
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
        ToolRoute::new_dyn(Self::to_tool(), |_ctx: ToolCallContext<'_, S>| {
            async move { Ok::<_, rmcp::ErrorData>(Self::execute(&NoParams::default())) }.boxed()
        })
    }
}
