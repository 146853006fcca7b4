//! HTTP Server Configuration
//!
//! Host, port, and CORS settings. The port can come from the environment
//! (`STRINGDB_PORT`) and defaults to 5000.

use std::env;

use serde::{Deserialize, Serialize};

/// Environment variable overriding the bind host
const ENV_HOST: &str = "STRINGDB_HOST";

/// Environment variable overriding the bind port
const ENV_PORT: &str = "STRINGDB_PORT";

/// HTTP server configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HttpServerConfig {
    /// Host to bind to (default: "0.0.0.0")
    #[serde(default = "default_host")]
    pub host: String,

    /// Port to bind to (default: 5000)
    #[serde(default = "default_port")]
    pub port: u16,

    /// CORS allowed origins; empty means permissive (development mode)
    #[serde(default)]
    pub cors_origins: Vec<String>,
}

fn default_host() -> String {
    "0.0.0.0".to_string()
}

fn default_port() -> u16 {
    5000
}

impl Default for HttpServerConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
            cors_origins: Vec::new(),
        }
    }
}

impl HttpServerConfig {
    /// Create a new config with the specified port
    pub fn with_port(port: u16) -> Self {
        Self {
            port,
            ..Default::default()
        }
    }

    /// Build a config from the environment, falling back to defaults.
    ///
    /// An unparseable `STRINGDB_PORT` is ignored in favor of the default.
    pub fn from_env() -> Self {
        let mut config = Self::default();
        if let Ok(host) = env::var(ENV_HOST) {
            if !host.is_empty() {
                config.host = host;
            }
        }
        if let Some(port) = env::var(ENV_PORT).ok().and_then(|p| p.parse().ok()) {
            config.port = port;
        }
        config
    }

    /// Get the socket address string
    pub fn socket_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = HttpServerConfig::default();
        assert_eq!(config.host, "0.0.0.0");
        assert_eq!(config.port, 5000);
        assert!(config.cors_origins.is_empty());
    }

    #[test]
    fn test_socket_addr() {
        let config = HttpServerConfig::with_port(8080);
        assert_eq!(config.socket_addr(), "0.0.0.0:8080");
    }

    #[test]
    fn test_deserialize_fills_defaults() {
        let config: HttpServerConfig = serde_json::from_str("{}").unwrap();
        assert_eq!(config.port, 5000);
        assert_eq!(config.host, "0.0.0.0");
    }
}
