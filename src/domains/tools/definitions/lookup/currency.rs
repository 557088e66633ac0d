//! Currency conversion tool.
//!
//! Converts between USD, EUR, GBP, JPY and CAD using fixed rates.

use futures::FutureExt;
use rmcp::{
    handler::server::tool::{ToolCallContext, ToolRoute, schema_for_type},
    model::{CallToolResult, Tool},
};
use schemars::JsonSchema;
use serde::Deserialize;
use tracing::{info, instrument, warn};

use crate::domains::documents::fields::{format_amount, format_number};
use crate::domains::tools::definitions::common::{parse_arguments, success_result};

/// Conversion rates: (from, to, rate).
const RATES: &[(&str, &str, f64)] = &[
    ("USD", "EUR", 0.93),
    ("USD", "GBP", 0.79),
    ("USD", "JPY", 153.72),
    ("USD", "CAD", 1.38),
    ("EUR", "USD", 1.07),
    ("EUR", "GBP", 0.85),
    ("EUR", "JPY", 164.78),
    ("EUR", "CAD", 1.48),
    ("GBP", "USD", 1.26),
    ("GBP", "EUR", 1.18),
    ("GBP", "JPY", 194.21),
    ("GBP", "CAD", 1.74),
    ("JPY", "USD", 0.0065),
    ("JPY", "EUR", 0.0061),
    ("JPY", "GBP", 0.0052),
    ("JPY", "CAD", 0.0090),
    ("CAD", "USD", 0.73),
    ("CAD", "EUR", 0.68),
    ("CAD", "GBP", 0.57),
    ("CAD", "JPY", 111.50),
];

/// Parameters for the currency conversion tool.
#[derive(Debug, Clone, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct ConvertCurrencyParams {
    /// Amount to convert.
    pub amount: f64,

    /// Source currency code (USD, EUR, GBP, JPY, CAD).
    pub from_currency: String,

    /// Target currency code (USD, EUR, GBP, JPY, CAD).
    pub to_currency: String,
}

/// Currency conversion tool.
pub struct ConvertCurrencyTool;

impl ConvertCurrencyTool {
    /// Tool name as registered in MCP.
    pub const NAME: &'static str = "convertCurrency";

    /// Tool description shown to clients.
    pub const DESCRIPTION: &'static str = "Convert an amount between currencies (USD, EUR, GBP, JPY, CAD) using predefined exchange rates.";

    /// Rate for an upper-case currency pair, if known.
    pub fn rate(from: &str, to: &str) -> Option<f64> {
        RATES
            .iter()
            .find(|(f, t, _)| *f == from && *t == to)
            .map(|(_, _, rate)| *rate)
    }

    /// Convert an amount using the fixed rate table.
    #[instrument(skip_all, fields(from = %params.from_currency, to = %params.to_currency))]
    pub fn execute(params: &ConvertCurrencyParams) -> CallToolResult {
        let from = params.from_currency.to_uppercase();
        let to = params.to_currency.to_uppercase();

        let Some(rate) = Self::rate(&from, &to) else {
            warn!("No conversion rate for {} -> {}", from, to);
            return success_result(format!(
                "Sorry, I don't have conversion data for {} to {}.",
                params.from_currency, params.to_currency
            ));
        };

        let converted = format_amount(params.amount * rate);
        info!("Converted {} {} at rate {}", params.amount, from, rate);

        success_result(format!(
            "{} {} = {} {}",
            format_number(params.amount),
            from,
            converted,
            to
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
            input_schema: schema_for_type::<ConvertCurrencyParams>().into(),
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
                let params: ConvertCurrencyParams = parse_arguments(args)?;
                Ok(Self::execute(&params))
            }
            .boxed()
        })
    }
}
