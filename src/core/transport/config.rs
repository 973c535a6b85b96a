//! HTTP transport configuration.

use serde::{Deserialize, Serialize};

use crate::core::config::parse_env;

/// HTTP listener configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HttpConfig {
    /// Port number to listen on.
    pub port: u16,

    /// Host address to bind to.
    #[serde(default = "default_host")]
    pub host: String,

    /// Mount point for every route, e.g. `/api`. Empty mounts at the root.
    #[serde(default)]
    pub api_prefix: String,

    /// Enable CORS for browser clients.
    #[serde(default = "default_cors")]
    pub enable_cors: bool,
}

fn default_host() -> String {
    "127.0.0.1".to_string()
}

fn default_port() -> u16 {
    3000
}

fn default_cors() -> bool {
    true
}

impl Default for HttpConfig {
    fn default() -> Self {
        Self {
            port: default_port(),
            host: default_host(),
            api_prefix: String::new(),
            enable_cors: default_cors(),
        }
    }
}

impl HttpConfig {
    /// Create an HTTP config for the given address.
    pub fn new(port: u16, host: impl Into<String>) -> Self {
        Self {
            port,
            host: host.into(),
            ..Default::default()
        }
    }

    /// Set the mount point.
    pub fn with_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.api_prefix = prefix.into();
        self
    }

    /// Load HTTP config from environment variables.
    ///
    /// `PORT` is honored when `PROMPTCART_HTTP_PORT` is unset, as most
    /// hosting platforms inject it.
    pub fn from_env() -> Self {
        let port = parse_env("PROMPTCART_HTTP_PORT")
            .or_else(|| parse_env("PORT"))
            .unwrap_or_else(default_port);
        let host = std::env::var("PROMPTCART_HTTP_HOST").unwrap_or_else(|_| default_host());
        let api_prefix = std::env::var("PROMPTCART_API_PREFIX").unwrap_or_default();
        let enable_cors = std::env::var("PROMPTCART_HTTP_CORS")
            .map(|v| v.to_lowercase() != "false" && v != "0")
            .unwrap_or(true);

        Self {
            port,
            host,
            api_prefix,
            enable_cors,
        }
    }

    /// Get the bind address.
    pub fn address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }

    /// The mount point normalized to `/segment` form, or `None` for the root.
    pub fn mount_point(&self) -> Option<String> {
        let trimmed = self.api_prefix.trim().trim_matches('/');
        if trimmed.is_empty() {
            None
        } else {
            Some(format!("/{trimmed}"))
        }
    }

    /// Full path of a route under the mount point.
    pub fn route_path(&self, path: &str) -> String {
        format!("{}{}", self.mount_point().unwrap_or_default(), path)
    }

    /// Get a description of this transport for logging.
    pub fn description(&self) -> String {
        format!("HTTP on {}{}", self.address(), self.mount_point().unwrap_or_default())
    }
}
