//! Weather lookup tool.
//!
//! Answers from a small hardcoded table of cities.

use futures::FutureExt;
use rmcp::{
    handler::server::tool::{ToolCallContext, ToolRoute, schema_for_type},
    model::{CallToolResult, Tool},
};
use schemars::JsonSchema;
use serde::Deserialize;
use tracing::{debug, instrument};

use crate::domains::tools::definitions::common::{parse_arguments, success_result};

/// Known cities: (location, temperature, condition).
const WEATHER: &[(&str, &str, &str)] = &[
    ("New York", "72°F", "Sunny"),
    ("London", "62°F", "Rainy"),
    ("Tokyo", "78°F", "Cloudy"),
    ("Sydney", "82°F", "Clear"),
];

const FALLBACK: (&str, &str) = ("70°F", "Unknown");

/// Parameters for the weather tool.
#[derive(Debug, Clone, Deserialize, JsonSchema)]
pub struct GetWeatherParams {
    /// City name, e.g. "London".
    pub location: String,
}

/// Weather tool - reports canned weather for a location.
pub struct GetWeatherTool;

impl GetWeatherTool {
    /// Tool name as registered in MCP.
    pub const NAME: &'static str = "getWeather";

    /// Tool description shown to clients.
    pub const DESCRIPTION: &'static str =
        "Get the current weather for a location. Known cities: New York, London, Tokyo, Sydney.";

    /// Temperature and condition for a location, exact match only.
    pub fn lookup(location: &str) -> (&'static str, &'static str) {
        WEATHER
            .iter()
            .find(|(city, _, _)| *city == location)
            .map(|(_, temperature, condition)| (*temperature, *condition))
            .unwrap_or(FALLBACK)
    }

    /// Report the canned weather for a location.
    #[instrument(skip_all, fields(location = %params.location))]
    pub fn execute(params: &GetWeatherParams) -> CallToolResult {
        let (temperature, condition) = Self::lookup(&params.location);
        debug!("Weather lookup: {} {}", temperature, condition);

        success_result(format!(
            "Weather in {}: {}, {}",
            params.location, temperature, condition
        ))
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
            input_schema: schema_for_type::<GetWeatherParams>().into(),
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
                let params: GetWeatherParams = parse_arguments(args)?;
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

    fn weather(location: &str) -> String {
        let params = GetWeatherParams {
            location: location.to_string(),
        };
        first_text(&GetWeatherTool::execute(&params)).to_string()
    }

    #[test]
    fn test_known_city() {
        assert_eq!(weather("London"), "Weather in London: 62°F, Rainy");
        assert_eq!(weather("New York"), "Weather in New York: 72°F, Sunny");
    }

    #[test]
    fn test_unknown_city_falls_back() {
        assert_eq!(weather("Paris"), "Weather in Paris: 70°F, Unknown");
    }

    #[test]
    fn test_lookup_is_case_sensitive() {
        assert_eq!(GetWeatherTool::lookup("tokyo"), FALLBACK);
        assert_eq!(GetWeatherTool::lookup("Tokyo"), ("78°F", "Cloudy"));
    }
}
