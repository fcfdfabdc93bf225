//! HTTP Server Configuration
//!
//! Host, port and the CORS origin allow-list.

use serde::{Deserialize, Serialize};

/// Environment variable overriding the default port
pub const PORT_ENV: &str = "PORT";

/// HTTP server configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HttpServerConfig {
    /// Host to bind to (default: "0.0.0.0")
    #[serde(default = "default_host")]
    pub host: String,

    /// Port to bind to (default: 1234)
    #[serde(default = "default_port")]
    pub port: u16,

    /// Origins allowed to call the API from a browser
    #[serde(default = "default_cors_origins")]
    pub cors_origins: Vec<String>,
}

fn default_host() -> String {
    "0.0.0.0".to_string()
}

fn default_port() -> u16 {
    1234
}

fn default_cors_origins() -> Vec<String> {
    vec![
        "http://localhost:5500".to_string(), // Live Server
        "http://localhost:1234".to_string(), // Same-origin dev pages
    ]
}

impl Default for HttpServerConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
            cors_origins: default_cors_origins(),
        }
    }
}

impl HttpServerConfig {
    /// Create a new config with specified port
    pub fn with_port(port: u16) -> Self {
        Self {
            port,
            ..Default::default()
        }
    }

    /// Applies a raw `PORT` value; blank or absent leaves the port alone
    pub fn with_port_var(mut self, value: Option<String>) -> Result<Self, String> {
        if let Some(raw) = value.as_deref().map(str::trim).filter(|v| !v.is_empty()) {
            self.port = raw
                .parse()
                .map_err(|_| format!("Invalid {} value: {}", PORT_ENV, raw))?;
        }
        Ok(self)
    }

    /// Get the socket address string
    pub fn socket_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}
