//! Document generation tool.
//!
//! Wraps the [`DocumentGenerator`] at the tool-call boundary. An unknown
//! template is answered with a normal text message, not a protocol error.

use futures::FutureExt;
use rmcp::{
    handler::server::tool::{ToolCallContext, ToolRoute, schema_for_type},
    model::{CallToolResult, Tool},
};
use schemars::JsonSchema;
use serde::Deserialize;
use std::sync::Arc;
use tracing::{info, instrument};

use crate::domains::documents::{DocumentError, DocumentGenerator, DocumentPayload, TemplateId};
use crate::domains::tools::definitions::common::{error_result, parse_arguments, success_result};

// ============================================================================
// Tool Parameters
// ============================================================================

/// Parameters for the document generation tool.
#[derive(Debug, Clone, Deserialize, JsonSchema)]
pub struct GenerateDocumentParams {
    /// Template to render: invoice, report, proposal or letter.
    #[schemars(with = "TemplateId")]
    pub template: String,

    /// Field values for the template. Missing fields use defaults.
    pub data: DocumentPayload,
}

// ============================================================================
// Tool Definition
// ============================================================================

/// Document generation tool.
pub struct GenerateDocumentTool;

impl GenerateDocumentTool {
    /// Tool name as registered in MCP.
    pub const NAME: &'static str = "generateDocument";

    /// Tool description shown to clients.
    pub const DESCRIPTION: &'static str = "Generate a plain-text document (invoice, report, proposal or letter) from a template and a data object. Missing fields are filled with defaults.";

    /// Execute the tool logic.
    #[instrument(skip_all, fields(template = %params.template))]
    pub fn execute(params: &GenerateDocumentParams, generator: &DocumentGenerator) -> CallToolResult {
        info!("Generate document tool called");

        match generator.generate(&params.template, &params.data) {
            Ok(document) => success_result(document),
            Err(e @ DocumentError::TemplateNotFound(_)) => success_result(format!("Error: {}", e)),
            Err(e) => error_result(&format!("Error: {}", e)),
        }
    }

    /// HTTP handler for this tool (for HTTP transport).
    #[cfg(feature = "http")]
    pub fn http_handler(
        arguments: serde_json::Value,
        generator: &DocumentGenerator,
    ) -> Result<serde_json::Value, crate::domains::tools::ToolError> {
        crate::domains::tools::definitions::common::http_call(
            arguments,
            |params: &GenerateDocumentParams| Self::execute(params, generator),
        )
    }

    /// Create a Tool model for this tool (metadata).
    pub fn to_tool() -> Tool {
        Tool {
            name: Self::NAME.into(),
            description: Some(Self::DESCRIPTION.into()),
            input_schema: schema_for_type::<GenerateDocumentParams>().into(),
            annotations: None,
            output_schema: None,
            icons: None,
            meta: None,
            title: None,
        }
    }

    /// Create a ToolRoute for STDIO/TCP transport.
    pub fn create_route<S>(generator: Arc<DocumentGenerator>) -> ToolRoute<S>
    where
        S: Send + Sync + 'static,
    {
        ToolRoute::new_dyn(Self::to_tool(), move |ctx: ToolCallContext<'_, S>| {
            let args = ctx.arguments.clone().unwrap_or_default();
            let generator = generator.clone();
            async move {
                let params: GenerateDocumentParams = parse_arguments(args)?;
                Ok(Self::execute(&params, &generator))
            }
            .boxed()
        })
    }
}

// ============================================================================
// Tests
// ============================================================================
