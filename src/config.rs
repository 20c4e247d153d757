//! Service configuration from environment variables.

use std::net::SocketAddr;

use anyhow::{Context, Result};
use tracing::warn;

/// HTTP listener settings
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub host: String,
    pub port: u16,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            host: "127.0.0.1".to_string(),
            port: 9000,
        }
    }
}

impl Config {
    /// Load from the process environment.
    ///
    /// Call `dotenvy::dotenv()` first if a `.env` file should be honoured.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Load using an arbitrary variable lookup.
    ///
    /// `PORT` overrides the default port and `PRICING_PORT` overrides both.
    /// Unparsable ports are logged and ignored.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let mut cfg = Self::default();

        if let Some(host) = lookup("PRICING_HOST") {
            cfg.host = host;
        }

        for key in ["PORT", "PRICING_PORT"] {
            if let Some(value) = lookup(key) {
                match value.parse::<u16>() {
                    Ok(port) => cfg.port = port,
                    Err(e) => warn!("Ignoring invalid {}={:?}: {}", key, value, e),
                }
            }
        }

        cfg
    }

    pub fn socket_addr(&self) -> Result<SocketAddr> {
        format!("{}:{}", self.host, self.port)
            .parse()
            .with_context(|| format!("invalid listen address {}:{}", self.host, self.port))
    }
}
