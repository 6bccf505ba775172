//! Application configuration loaded from environment variables.

use std::net::{IpAddr, Ipv4Addr, SocketAddr};

use serde::Deserialize;

use crate::error::Result;

/// Prefix shared by every configuration variable.
pub const ENV_PREFIX: &str = "SNIPPETS_";

/// Application configuration loaded from `SNIPPETS_*` environment variables.
#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    // === Server Configuration ===
    /// Listen address.
    #[serde(default = "default_host")]
    pub host: IpAddr,

    /// Listen port.
    #[serde(default = "default_port")]
    pub port: u16,

    /// Allow cross-origin requests from any origin.
    #[serde(default)]
    pub cors_permissive: bool,

    /// Largest accepted request body, in bytes.
    #[serde(default = "default_max_body_bytes")]
    pub max_body_bytes: usize,

    // === Observability ===
    /// Install the Prometheus recorder and serve `/metrics`.
    #[serde(default = "default_true")]
    pub metrics_enabled: bool,

    /// Serve the OpenAPI document and Swagger UI.
    #[serde(default = "default_true")]
    pub swagger_ui: bool,

    /// Emit JSON log lines.
    #[serde(default)]
    pub log_json: bool,
}

fn default_host() -> IpAddr {
    IpAddr::V4(Ipv4Addr::UNSPECIFIED)
}

fn default_port() -> u16 {
    8080
}

fn default_max_body_bytes() -> usize {
    2 * 1024 * 1024 // 2 MiB
}

fn default_true() -> bool {
    true
}

impl Default for Config {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
            cors_permissive: false,
            max_body_bytes: default_max_body_bytes(),
            metrics_enabled: true,
            swagger_ui: true,
            log_json: false,
        }
    }
}

impl Config {
    /// Load configuration from environment, reading .env file first.
    pub fn load() -> Result<Self> {
        dotenvy::dotenv().ok();
        Ok(envy::prefixed(ENV_PREFIX).from_env()?)
    }

    /// Load configuration from explicit key/value pairs (unprefixed keys).
    pub fn from_pairs<I>(pairs: I) -> Result<Self>
    where
        I: IntoIterator<Item = (String, String)>,
    {
        Ok(envy::from_iter(pairs)?)
    }

    /// Check if the configuration is valid.
    pub fn validate(&self) -> std::result::Result<(), String> {
        if self.port == 0 {
            return Err("SNIPPETS_PORT must be non-zero".to_string());
        }

        if self.max_body_bytes == 0 {
            return Err("SNIPPETS_MAX_BODY_BYTES must be non-zero".to_string());
        }

        Ok(())
    }

    /// Socket address to bind.
    pub fn socket_addr(&self) -> SocketAddr {
        SocketAddr::new(self.host, self.port)
    }
}
