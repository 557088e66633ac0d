//! User profile tool.

use futures::FutureExt;
use rmcp::{
    handler::server::tool::{ToolCallContext, ToolRoute, schema_for_type},
    model::{CallToolResult, Tool},
};
use schemars::JsonSchema;
use serde::Serialize;
use tracing::info;

use crate::domains::tools::definitions::common::{NoParams, structured_result};

/// Profile of the signed-in user.
#[derive(Debug, Clone, Serialize, JsonSchema)]
pub struct UserProfile {
    pub name: String,
    pub email: String,
    pub preferences: Preferences,
}

/// User interface preferences.
#[derive(Debug, Clone, Serialize, JsonSchema)]
pub struct Preferences {
    pub theme: String,
    pub notifications: bool,
}

impl UserProfile {
    fn sample() -> Self {
        Self {
            name: "Sample User".to_string(),
            email: "user@example.com".to_string(),
            preferences: Preferences {
                theme: "dark".to_string(),
                notifications: true,
            },
        }
    }
}

/// User profile tool - returns the sample user's profile.
pub struct GetUserProfileTool;

impl GetUserProfileTool {
    pub const NAME: &'static str = "getUserProfile";

    pub const DESCRIPTION: &'static str = "Get the current user's profile and preferences.";

    /// Return the canned user profile.
    pub fn execute(_params: &NoParams) -> CallToolResult {
        info!("User profile requested");
        structured_result(&UserProfile::sample())
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
            output_schema: Some(schema_for_type::<UserProfile>().into()),
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
