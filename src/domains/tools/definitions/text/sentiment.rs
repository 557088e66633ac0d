//! Keyword-based sentiment analysis tool.

use futures::FutureExt;
use rmcp::{
    handler::server::tool::{ToolCallContext, ToolRoute, schema_for_type},
    model::{CallToolResult, Tool},
};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument};

use crate::domains::tools::definitions::common::{parse_arguments, structured_result};

/// Confidence reported with every classification.
const CONFIDENCE: f64 = 0.85;

/// Keyword groups, checked in order; the first group with a hit wins.
const KEYWORDS: &[(Sentiment, &[&str])] = &[
    (Sentiment::VeryPositive, &["great", "happy", "excellent", "amazing"]),
    (Sentiment::Positive, &["good", "nice", "like"]),
    (Sentiment::Negative, &["bad", "poor", "dislike"]),
    (Sentiment::VeryNegative, &["terrible", "awful", "hate"]),
];

/// Sentiment classes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, JsonSchema)]
pub enum Sentiment {
    #[serde(rename = "very positive")]
    VeryPositive,
    #[serde(rename = "positive")]
    Positive,
    #[serde(rename = "negative")]
    Negative,
    #[serde(rename = "very negative")]
    VeryNegative,
    #[serde(rename = "neutral")]
    Neutral,
}

impl Sentiment {
    /// Classify text by substring match on lowercase keywords.
    ///
    /// Matching is substring-based, so "dislike" hits the positive "like"
    /// group before the negative one.
    pub fn classify(text: &str) -> Self {
        let text = text.to_lowercase();
        KEYWORDS
            .iter()
            .find(|(_, words)| words.iter().any(|w| text.contains(w)))
            .map(|(sentiment, _)| *sentiment)
            .unwrap_or(Self::Neutral)
    }
}

/// Parameters for the sentiment tool.
#[derive(Debug, Clone, Deserialize, JsonSchema)]
pub struct AnalyzeSentimentParams {
    /// Text to analyze.
    pub text: String,
}

/// Structured output of the sentiment tool.
#[derive(Debug, Clone, Serialize, JsonSchema)]
pub struct SentimentResult {
    pub text: String,
    pub sentiment: Sentiment,
    pub confidence: f64,
}

/// Sentiment analysis tool.
pub struct AnalyzeSentimentTool;

impl AnalyzeSentimentTool {
    /// Tool name as registered in MCP.
    pub const NAME: &'static str = "analyzeSentiment";

    /// Tool description shown to clients.
    pub const DESCRIPTION: &'static str =
        "Analyze the sentiment of a text: very positive, positive, neutral, negative or very negative.";

    /// Classify the text by keyword.
    #[instrument(skip_all, fields(len = params.text.len()))]
    pub fn execute(params: &AnalyzeSentimentParams) -> CallToolResult {
        let sentiment = Sentiment::classify(&params.text);
        debug!("Classified as {:?}", sentiment);

        structured_result(&SentimentResult {
            text: params.text.clone(),
            sentiment,
            confidence: CONFIDENCE,
        })
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
            input_schema: schema_for_type::<AnalyzeSentimentParams>().into(),
            annotations: None,
            output_schema: Some(schema_for_type::<SentimentResult>().into()),
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
                let params: AnalyzeSentimentParams = parse_arguments(args)?;
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
    fn test_classify() {
        assert_eq!(Sentiment::classify("This is GREAT"), Sentiment::VeryPositive);
        assert_eq!(Sentiment::classify("pretty nice"), Sentiment::Positive);
        assert_eq!(Sentiment::classify("a poor showing"), Sentiment::Negative);
        assert_eq!(Sentiment::classify("awful service"), Sentiment::VeryNegative);
        assert_eq!(Sentiment::classify("the sky is blue"), Sentiment::Neutral);
    }

    #[test]
    fn test_first_group_wins() {
        assert_eq!(Sentiment::classify("I dislike this"), Sentiment::Positive);
        assert_eq!(Sentiment::classify("good but terrible"), Sentiment::Positive);
    }

    #[test]
    fn test_result_text() {
        let params = AnalyzeSentimentParams {
            text: "I hate Mondays".to_string(),
        };
        let result = AnalyzeSentimentTool::execute(&params);
        assert_eq!(
            first_text(&result),
            "{\n  \"text\": \"I hate Mondays\",\n  \"sentiment\": \"very negative\",\n  \"confidence\": 0.85\n}"
        );
    }
}
