//! HTTP transport implementation.
//!
//! JSON-RPC over POST requests, so plain HTTP clients (curl, browsers)
//! can call the demo tools without an MCP session.

use axum::{
    Json, Router,
    extract::State,
    http::StatusCode,
    response::IntoResponse,
    routing::{get, post},
};
use serde::{Deserialize, Serialize};
use serde_json::{Value, json};
use tower_http::cors::{Any, CorsLayer};
use tracing::{debug, info, instrument, warn};

use super::{TransportError, TransportResult, config::HttpConfig};
use crate::core::McpServer;

/// Protocol version announced on initialize.
const PROTOCOL_VERSION: &str = "2024-11-05";

/// HTTP transport handler.
pub struct HttpTransport {
    config: HttpConfig,
}

/// JSON-RPC request structure.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct JsonRpcRequest {
    pub jsonrpc: String,
    #[serde(default)]
    pub id: Option<Value>,
    pub method: String,
    #[serde(default)]
    pub params: Option<Value>,
}

/// JSON-RPC response structure.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct JsonRpcResponse {
    pub jsonrpc: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub result: Option<Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<JsonRpcError>,
}

/// JSON-RPC error structure.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct JsonRpcError {
    pub code: i32,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<Value>,
}

impl JsonRpcResponse {
    /// Create a success response.
    pub fn success(id: Option<Value>, result: Value) -> Self {
        Self {
            jsonrpc: "2.0".to_string(),
            id,
            result: Some(result),
            error: None,
        }
    }

    /// Create an error response.
    pub fn error(id: Option<Value>, code: i32, message: impl Into<String>) -> Self {
        Self {
            jsonrpc: "2.0".to_string(),
            id,
            result: None,
            error: Some(JsonRpcError {
                code,
                message: message.into(),
                data: None,
            }),
        }
    }

    pub fn method_not_found(id: Option<Value>) -> Self {
        Self::error(id, -32601, "Method not found")
    }

    pub fn invalid_request(id: Option<Value>) -> Self {
        Self::error(id, -32600, "Invalid Request")
    }

    pub fn invalid_params(id: Option<Value>, msg: impl Into<String>) -> Self {
        Self::error(id, -32602, msg)
    }
}

/// Application state shared across HTTP handlers.
#[derive(Clone)]
pub struct AppState {
    server: McpServer,
    rpc_path: String,
}

impl AppState {
    fn new(server: McpServer, rpc_path: impl Into<String>) -> Self {
        Self {
            server,
            rpc_path: rpc_path.into(),
        }
    }
}

impl HttpTransport {
    /// Create a new HTTP transport with the given config.
    pub fn new(config: HttpConfig) -> Self {
        Self { config }
    }

    /// Get the bind address.
    pub fn address(&self) -> String {
        format!("{}:{}", self.config.host, self.config.port)
    }

    fn router(&self, server: McpServer) -> Router {
        let mut app = Router::new()
            .route(&self.config.rpc_path, post(handle_rpc))
            .route("/health", get(health_check))
            .route("/", get(root_handler))
            .with_state(AppState::new(server, &self.config.rpc_path));

        if self.config.enable_cors {
            let cors = CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any);
            app = app.layer(cors);
        }

        app
    }

    /// Run the HTTP transport.
    pub async fn run(self, server: McpServer) -> TransportResult<()> {
        let addr = self.address();
        let app = self.router(server);

        let listener = tokio::net::TcpListener::bind(&addr)
            .await
            .map_err(|e| TransportError::bind(&addr, e))?;

        info!(
            address = %addr,
            cors = self.config.enable_cors,
            "Ready - listening (JSON-RPC over HTTP)"
        );
        info!("  → JSON-RPC: POST {}", self.config.rpc_path);
        info!("  → Health:   GET /health");

        axum::serve(listener, app)
            .await
            .map_err(|e| TransportError::http(e.to_string()))?;

        Ok(())
    }
}

/// Root handler - describes the endpoints.
async fn root_handler(State(state): State<AppState>) -> impl IntoResponse {
    Json(json!({
        "name": state.server.name(),
        "version": state.server.version(),
        "transport": "HTTP",
        "endpoints": {
            "rpc": state.rpc_path,
            "health": "/health"
        },
        "protocol": "JSON-RPC 2.0"
    }))
}

async fn health_check() -> impl IntoResponse {
    Json(health_status())
}

fn health_status() -> Value {
    json!({
        "status": "healthy",
        "timestamp": chrono::Utc::now().to_rfc3339()
    })
}

#[instrument(skip_all, fields(method))]
async fn handle_rpc(
    State(state): State<AppState>,
    Json(request): Json<JsonRpcRequest>,
) -> impl IntoResponse {
    tracing::Span::current().record("method", &request.method);
    info!("Received JSON-RPC request: {}", request.method);

    let response = process_request(&state, request).await;

    (StatusCode::OK, Json(response))
}

/// Process a JSON-RPC request and return the response.
async fn process_request(state: &AppState, request: JsonRpcRequest) -> JsonRpcResponse {
    if request.jsonrpc != "2.0" {
        return JsonRpcResponse::invalid_request(request.id);
    }

    match request.method.as_str() {
        "initialize" => handle_initialize(state, request),
        "ping" => JsonRpcResponse::success(request.id, json!({})),
        "tools/list" => {
            JsonRpcResponse::success(request.id, json!({ "tools": state.server.list_tools() }))
        }
        "tools/call" => handle_tools_call(state, request).await,
        "resources/list" => {
            let resources = state.server.list_resources().await;
            JsonRpcResponse::success(request.id, json!({ "resources": resources }))
        }
        "resources/templates/list" => {
            let templates = state.server.list_resource_templates().await;
            JsonRpcResponse::success(request.id, json!({ "resourceTemplates": templates }))
        }
        "resources/read" => handle_resources_read(state, request).await,

        // Notifications get an empty success on stateless HTTP
        method if method.starts_with("notifications/") => {
            handle_notification(&request);
            JsonRpcResponse::success(request.id, Value::Null)
        }

        _ => {
            warn!("Unknown method: {}", request.method);
            JsonRpcResponse::method_not_found(request.id)
        }
    }
}

fn handle_initialize(state: &AppState, request: JsonRpcRequest) -> JsonRpcResponse {
    info!("Processing initialize request");

    let result = json!({
        "protocolVersion": PROTOCOL_VERSION,
        "capabilities": {
            "tools": {},
            "resources": {}
        },
        "serverInfo": {
            "name": state.server.name(),
            "version": state.server.version()
        },
        "instructions": state.server.instructions()
    });

    JsonRpcResponse::success(request.id, result)
}

async fn handle_tools_call(state: &AppState, request: JsonRpcRequest) -> JsonRpcResponse {
    let Some(params) = request.params else {
        return JsonRpcResponse::invalid_params(request.id, "Missing params");
    };

    let Some(name) = params.get("name").and_then(Value::as_str) else {
        return JsonRpcResponse::invalid_params(request.id, "Missing tool name");
    };
    info!(tool = name, "Processing tools/call request");

    let arguments = params.get("arguments").cloned().unwrap_or_else(|| json!({}));

    match state.server.call_tool(name, arguments).await {
        Ok(result) => JsonRpcResponse::success(request.id, result),
        Err(e) => JsonRpcResponse::invalid_params(request.id, e),
    }
}

async fn handle_resources_read(state: &AppState, request: JsonRpcRequest) -> JsonRpcResponse {
    let Some(params) = request.params else {
        return JsonRpcResponse::invalid_params(request.id, "Missing params");
    };

    let Some(uri) = params.get("uri").and_then(Value::as_str) else {
        return JsonRpcResponse::invalid_params(request.id, "Missing resource URI");
    };
    info!(uri, "Processing resources/read request");

    match state.server.read_resource(uri).await {
        Ok(result) => JsonRpcResponse::success(request.id, result),
        Err(e) => JsonRpcResponse::invalid_params(request.id, e),
    }
}

fn handle_notification(request: &JsonRpcRequest) {
    match request.method.as_str() {
        "notifications/initialized" => debug!("Client sent initialized notification"),
        _ => info!("Received notification: {}", request.method),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Config;

    fn state() -> AppState {
        AppState::new(McpServer::new(Config::default()), "/mcp")
    }

    fn request(method: &str, params: Option<Value>) -> JsonRpcRequest {
        JsonRpcRequest {
            jsonrpc: "2.0".to_string(),
            id: Some(json!(1)),
            method: method.to_string(),
            params,
        }
    }

    #[test]
    fn test_health_status_has_rfc3339_timestamp() {
        let status = health_status();
        assert_eq!(status["status"], "healthy");

        let timestamp = status["timestamp"].as_str().unwrap();
        assert!(chrono::DateTime::parse_from_rfc3339(timestamp).is_ok());
    }

    #[tokio::test]
    async fn test_initialize_advertises_tools_and_resources() {
        let response = process_request(&state(), request("initialize", None)).await;
        let result = response.result.unwrap();

        assert_eq!(result["protocolVersion"], PROTOCOL_VERSION);
        assert_eq!(result["serverInfo"]["name"], "Demo");
        assert!(result["capabilities"].get("prompts").is_none());
    }

    #[tokio::test]
    async fn test_tools_call_without_initialize() {
        let params = json!({ "name": "add", "arguments": { "a": 2, "b": 3 } });
        let response = process_request(&state(), request("tools/call", Some(params))).await;
        assert_eq!(response.result.unwrap()["content"][0]["text"], "5");
    }

    #[tokio::test]
    async fn test_notification_gets_empty_success() {
        let response =
            process_request(&state(), request("notifications/initialized", None)).await;
        assert!(response.error.is_none());
        assert_eq!(response.result, Some(Value::Null));
    }

    #[tokio::test]
    async fn test_tools_call_generates_document() {
        let params = json!({
            "name": "generateDocument",
            "arguments": {
                "template": "letter",
                "data": { "recipient": "Jane Doe" }
            }
        });
        let response = process_request(&state(), request("tools/call", Some(params))).await;
        let result = response.result.unwrap();
        let text = result["content"][0]["text"].as_str().unwrap();

        assert!(text.contains("Dear Jane,"));
    }

    #[tokio::test]
    async fn test_tools_call_requires_name() {
        let response =
            process_request(&state(), request("tools/call", Some(json!({})))).await;
        let error = response.error.unwrap();

        assert_eq!(error.code, -32602);
        assert_eq!(error.message, "Missing tool name");
    }

    #[tokio::test]
    async fn test_resources_read_unknown_uri() {
        let params = json!({ "uri": "documents://templates/memo" });
        let response = process_request(&state(), request("resources/read", Some(params))).await;

        assert_eq!(response.error.unwrap().code, -32602);
    }

    #[tokio::test]
    async fn test_rejects_wrong_version_and_unknown_method() {
        let mut bad = request("tools/list", None);
        bad.jsonrpc = "1.0".to_string();
        let response = process_request(&state(), bad).await;
        assert_eq!(response.error.unwrap().code, -32600);

        let response = process_request(&state(), request("prompts/list", None)).await;
        assert_eq!(response.error.unwrap().code, -32601);
    }
}
