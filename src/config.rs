//! Environment-driven configuration.
//!
//! Every field has a default so the service starts with zero configuration;
//! `LOG_LEVEL`, `PORT`, `TVMAZE_BASE_URL` and `SHUTDOWN_TIMEOUT` override.

use figment::{Figment, providers::Env};
use serde::Deserialize;

fn default_port() -> u16 {
    8080
}

fn default_log_level() -> String {
    "info".to_string()
}

fn default_tvmaze_base_url() -> String {
    "https://api.tvmaze.com".to_string()
}

fn default_shutdown_timeout() -> u64 {
    10
}

#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    #[serde(default = "default_port")]
    pub port: u16,
    /// Base level for the `starrr` target when `RUST_LOG` is unset.
    #[serde(default = "default_log_level")]
    pub log_level: String,
    /// Upstream TVMaze root. Overridden in tests to point at a local stub.
    #[serde(default = "default_tvmaze_base_url")]
    pub tvmaze_base_url: String,
    /// Seconds to wait for in-flight requests on shutdown.
    #[serde(default = "default_shutdown_timeout")]
    pub shutdown_timeout: u64,
}

impl Config {
    /// Extract configuration from the process environment.
    pub fn load() -> Result<Self, figment::Error> {
        Figment::new().merge(Env::raw()).extract()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_apply_without_env() {
        let config: Config = Figment::new().extract().unwrap();
        assert_eq!(config.port, 8080);
        assert_eq!(config.log_level, "info");
        assert_eq!(config.tvmaze_base_url, "https://api.tvmaze.com");
        assert_eq!(config.shutdown_timeout, 10);
    }
}
