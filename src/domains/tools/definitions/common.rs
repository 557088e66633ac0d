//! Common utilities shared across tools.
//!
//! Argument parsing and result builders used by every tool definition.

use rmcp::model::{CallToolResult, Content, JsonObject};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize, de::DeserializeOwned};
use tracing::warn;

use crate::domains::tools::ToolError;

/// Parameters for tools that take no arguments.
#[derive(Debug, Clone, Default, Deserialize, JsonSchema)]
pub struct NoParams {}

/// Deserialize tool arguments into a params struct.
pub fn parse_arguments<P: DeserializeOwned>(arguments: JsonObject) -> Result<P, ToolError> {
    serde_json::from_value(serde_json::Value::Object(arguments))
        .map_err(|e| ToolError::invalid_arguments(e.to_string()))
}

/// Create an error result with a formatted message.
pub fn error_result(message: &str) -> CallToolResult {
    warn!("{}", message);
    CallToolResult::error(vec![Content::text(message.to_string())])
}

/// Create a success result with text content.
pub fn success_result(content: impl Into<String>) -> CallToolResult {
    CallToolResult::success(vec![Content::text(content.into())])
}

/// Create a success result carrying pretty-printed JSON as text and the same
/// value as structured content.
///
/// The text is printed from `data` directly so fields keep declaration order.
pub fn structured_result<T: Serialize>(data: &T) -> CallToolResult {
    let value = match serde_json::to_value(data) {
        Ok(v) => v,
        Err(e) => return error_result(&format!("Failed to serialize result: {}", e)),
    };
    let text = match serde_json::to_string_pretty(data) {
        Ok(t) => t,
        Err(e) => return error_result(&format!("Failed to serialize result: {}", e)),
    };

    CallToolResult {
        content: vec![Content::text(text)],
        structured_content: Some(value),
        is_error: Some(false),
        meta: None,
    }
}

/// Parse HTTP arguments, run the tool and serialize the full CallToolResult.
#[cfg(feature = "http")]
pub fn http_call<P: DeserializeOwned>(
    arguments: serde_json::Value,
    execute: impl FnOnce(&P) -> CallToolResult,
) -> Result<serde_json::Value, ToolError> {
    let arguments = match arguments {
        serde_json::Value::Object(map) => map,
        serde_json::Value::Null => JsonObject::new(),
        other => {
            return Err(ToolError::invalid_arguments(format!(
                "expected an object, got {}",
                other
            )));
        }
    };
    let params: P = parse_arguments(arguments)?;
    serde_json::to_value(execute(&params)).map_err(|e| ToolError::internal(e.to_string()))
}

/// Extract the first text block of a result (test helper).
#[cfg(test)]
pub fn first_text(result: &CallToolResult) -> &str {
    match &result.content[0].raw {
        rmcp::model::RawContent::Text(text) => &text.text,
        _ => panic!("Expected text content"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[derive(Debug, Deserialize)]
    struct Sample {
        a: f64,
    }

    #[test]
    fn test_parse_arguments() {
        let args = json!({ "a": 2 }).as_object().cloned().unwrap();
        let params: Sample = parse_arguments(args).unwrap();
        assert_eq!(params.a, 2.0);
    }

    #[test]
    fn test_parse_arguments_rejects_wrong_type() {
        let args = json!({ "a": "two" }).as_object().cloned().unwrap();
        let err = parse_arguments::<Sample>(args).unwrap_err();
        assert!(matches!(err, ToolError::InvalidArguments(_)));
    }

    #[test]
    fn test_structured_result() {
        let result = structured_result(&json!({ "ok": true }));
        assert_eq!(result.is_error, Some(false));
        assert_eq!(first_text(&result), "{\n  \"ok\": true\n}");
        assert_eq!(result.structured_content, Some(json!({ "ok": true })));
    }

    #[test]
    fn test_error_result() {
        let result = error_result("nope");
        assert_eq!(result.is_error, Some(true));
        assert_eq!(first_text(&result), "nope");
    }
}
