//! Environment-derived runtime configuration.

use anyhow::Context;

/// Runtime configuration, read once at startup.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Port the HTTP server binds.
    pub port: u16,
    /// Base URL the readonly share proxy forwards to. Defaults to this
    /// process's own API on `port`.
    pub internal_origin: String,
}

impl Config {
    pub fn from_env() -> anyhow::Result<Self> {
        Self::from_vars(
            std::env::var("PORT").ok(),
            std::env::var("INTERNAL_ORIGIN").ok(),
        )
    }

    fn from_vars(port: Option<String>, internal_origin: Option<String>) -> anyhow::Result<Self> {
        let port = match port {
            Some(raw) => raw
                .parse::<u16>()
                .with_context(|| format!("PORT must be a port number, got {raw:?}"))?,
            None => 3000,
        };
        let internal_origin =
            internal_origin.unwrap_or_else(|| format!("http://127.0.0.1:{port}"));
        Ok(Self {
            port,
            internal_origin,
        })
    }
}
