//! HTTP Server Configuration
//!
//! Host, port, CORS origins and pagination bounds.

use serde::{Deserialize, Serialize};

use crate::normalizer::PageLimits;

/// REST server configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    /// Host to bind to (default: "0.0.0.0")
    #[serde(default = "default_host")]
    pub host: String,

    /// Port to bind to (default: 8080)
    #[serde(default = "default_port")]
    pub port: u16,

    /// CORS allowed origins; `*` allows any origin
    #[serde(default = "default_cors_origins")]
    pub cors_origins: Vec<String>,

    /// Records per page when the caller does not ask for a size
    #[serde(default = "default_page_size")]
    pub default_page_size: u32,

    /// Hard cap on caller-requested page sizes
    #[serde(default = "default_max_page_size")]
    pub max_page_size: u32,
}

fn default_host() -> String {
    "0.0.0.0".to_string()
}

fn default_port() -> u16 {
    8080
}

fn default_cors_origins() -> Vec<String> {
    vec!["http://localhost:3000".to_string()]
}

fn default_page_size() -> u32 {
    10
}

fn default_max_page_size() -> u32 {
    50
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
            cors_origins: default_cors_origins(),
            default_page_size: default_page_size(),
            max_page_size: default_max_page_size(),
        }
    }
}

impl ServerConfig {
    /// Create a new config with specified port
    pub fn with_port(port: u16) -> Self {
        Self {
            port,
            ..Default::default()
        }
    }

    /// Get the socket address string
    pub fn socket_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }

    /// Pagination bounds for the normalizer
    pub fn page_limits(&self) -> PageLimits {
        PageLimits {
            default_size: self.default_page_size.max(1),
            max_size: self.max_page_size.max(1),
        }
    }
}
