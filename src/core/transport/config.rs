//! Transport configuration types.

use serde::{Deserialize, Serialize};

/// Transport configuration options.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum TransportConfig {
    /// Standard input/output transport (default for MCP).
    #[cfg(feature = "stdio")]
    Stdio,

    /// TCP socket transport with JSON-RPC messages.
    #[cfg(feature = "tcp")]
    Tcp(TcpConfig),

    /// HTTP transport with JSON-RPC over POST.
    #[cfg(feature = "http")]
    Http(HttpConfig),
}

/// TCP transport configuration.
#[cfg(feature = "tcp")]
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TcpConfig {
    /// Port number to listen on.
    pub port: u16,

    /// Host address to bind to.
    #[serde(default = "default_host")]
    pub host: String,
}

/// HTTP transport configuration.
#[cfg(feature = "http")]
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HttpConfig {
    /// Port number to listen on.
    pub port: u16,

    /// Host address to bind to.
    #[serde(default = "default_host")]
    pub host: String,

    /// Path for JSON-RPC endpoint.
    #[serde(default = "default_rpc_path")]
    pub rpc_path: String,

    /// Enable CORS for browser clients.
    #[serde(default = "default_cors")]
    pub enable_cors: bool,
}

#[cfg(any(feature = "tcp", feature = "http"))]
fn default_host() -> String {
    "127.0.0.1".to_string()
}

#[cfg(feature = "http")]
fn default_rpc_path() -> String {
    "/mcp".to_string()
}

#[cfg(feature = "http")]
fn default_cors() -> bool {
    true
}

impl Default for TransportConfig {
    fn default() -> Self {
        #[cfg(feature = "stdio")]
        {
            return Self::Stdio;
        }

        #[cfg(all(not(feature = "stdio"), feature = "tcp"))]
        {
            return Self::Tcp(TcpConfig::default());
        }

        #[cfg(all(not(feature = "stdio"), not(feature = "tcp"), feature = "http"))]
        {
            return Self::Http(HttpConfig::default());
        }

        #[cfg(not(any(feature = "stdio", feature = "tcp", feature = "http")))]
        {
            compile_error!("At least one transport feature must be enabled: stdio, tcp, or http");
        }
    }
}

#[cfg(feature = "tcp")]
impl Default for TcpConfig {
    fn default() -> Self {
        Self {
            port: 3000,
            host: default_host(),
        }
    }
}

#[cfg(feature = "http")]
impl Default for HttpConfig {
    fn default() -> Self {
        Self {
            port: 8080,
            host: default_host(),
            rpc_path: default_rpc_path(),
            enable_cors: default_cors(),
        }
    }
}

/// Port from `var`, or `default` when unset or not a valid port.
#[cfg(any(feature = "tcp", feature = "http"))]
fn env_port(var: &str, default: u16) -> u16 {
    std::env::var(var)
        .ok()
        .and_then(|p| p.parse().ok())
        .unwrap_or(default)
}

#[cfg(any(feature = "tcp", feature = "http"))]
fn env_host(var: &str) -> String {
    std::env::var(var).unwrap_or_else(|_| default_host())
}

impl TransportConfig {
    /// Select the transport named by `MCP_TRANSPORT`.
    ///
    /// Unknown or disabled transports fall back to the default one.
    pub fn from_env() -> Self {
        let transport = std::env::var("MCP_TRANSPORT")
            .unwrap_or_default()
            .to_lowercase();

        match transport.as_str() {
            #[cfg(feature = "tcp")]
            "tcp" => Self::Tcp(TcpConfig {
                port: env_port("MCP_TCP_PORT", 3000),
                host: env_host("MCP_TCP_HOST"),
            }),
            #[cfg(feature = "http")]
            "http" => Self::Http(HttpConfig {
                port: env_port("MCP_HTTP_PORT", 8080),
                host: env_host("MCP_HTTP_HOST"),
                rpc_path: std::env::var("MCP_HTTP_PATH").unwrap_or_else(|_| default_rpc_path()),
                enable_cors: std::env::var("MCP_HTTP_CORS")
                    .map(|v| !v.eq_ignore_ascii_case("false") && v != "0")
                    .unwrap_or_else(|_| default_cors()),
            }),
            _ => Self::default(),
        }
    }

    /// Get a description of this transport for logging.
    pub fn description(&self) -> String {
        match self {
            #[cfg(feature = "stdio")]
            Self::Stdio => "STDIO (standard MCP mode)".to_string(),
            #[cfg(feature = "tcp")]
            Self::Tcp(cfg) => format!("TCP on {}:{}", cfg.host, cfg.port),
            #[cfg(feature = "http")]
            Self::Http(cfg) => format!("HTTP on {}:{}{}", cfg.host, cfg.port, cfg.rpc_path),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::config::ENV_TEST_LOCK;

    #[cfg(feature = "stdio")]
    #[test]
    fn test_unknown_transport_falls_back_to_stdio() {
        let _guard = ENV_TEST_LOCK.lock().unwrap_or_else(|e| e.into_inner());
        unsafe { std::env::set_var("MCP_TRANSPORT", "carrier-pigeon") };
        let config = TransportConfig::from_env();
        unsafe { std::env::remove_var("MCP_TRANSPORT") };

        assert!(matches!(config, TransportConfig::Stdio));
        assert_eq!(config.description(), "STDIO (standard MCP mode)");
    }

    #[cfg(feature = "tcp")]
    #[test]
    fn test_tcp_from_env() {
        let _guard = ENV_TEST_LOCK.lock().unwrap_or_else(|e| e.into_inner());
        unsafe {
            std::env::set_var("MCP_TRANSPORT", "TCP");
            std::env::set_var("MCP_TCP_PORT", "not-a-port");
        }
        let config = TransportConfig::from_env();
        unsafe {
            std::env::remove_var("MCP_TRANSPORT");
            std::env::remove_var("MCP_TCP_PORT");
        }

        assert_eq!(config.description(), "TCP on 127.0.0.1:3000");
    }

    #[cfg(feature = "http")]
    #[test]
    fn test_http_from_env() {
        let _guard = ENV_TEST_LOCK.lock().unwrap_or_else(|e| e.into_inner());
        unsafe {
            std::env::set_var("MCP_TRANSPORT", "http");
            std::env::set_var("MCP_HTTP_PORT", "9090");
            std::env::set_var("MCP_HTTP_CORS", "FALSE");
        }
        let config = TransportConfig::from_env();
        unsafe {
            std::env::remove_var("MCP_TRANSPORT");
            std::env::remove_var("MCP_HTTP_PORT");
            std::env::remove_var("MCP_HTTP_CORS");
        }

        match config {
            TransportConfig::Http(cfg) => {
                assert_eq!(cfg.port, 9090);
                assert_eq!(cfg.rpc_path, "/mcp");
                assert!(!cfg.enable_cors);
            }
            other => panic!("expected HTTP transport, got {other:?}"),
        }
    }
}
