//! Configuration management for the Contact Directory service.
//!
//! Settings come from environment variables, optionally loaded from a
//! `.env` file first.

use crate::error::{ConfigError, ConfigResult};
use std::env;

/// Configuration for the Contact Directory service.
#[derive(Debug, Clone)]
pub struct Config {
    /// Address the HTTP listener binds to (default: "127.0.0.1")
    pub host: String,

    /// TCP port for the HTTP listener (default: 4000)
    pub port: u16,

    /// Seed the directory with the sample contacts (default: true)
    pub seed_data: bool,

    /// Serve the GraphiQL IDE on `GET /` (default: true)
    pub graphiql: bool,

    /// Log level used when `RUST_LOG` is not set (default: "info")
    pub log_level: String,
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// Optional environment variables:
    /// - `DIRECTORY_HOST`: Bind address (default: 127.0.0.1)
    /// - `DIRECTORY_PORT`: Listen port (default: 4000)
    /// - `DIRECTORY_SEED_DATA`: Seed sample contacts (default: true)
    /// - `DIRECTORY_GRAPHIQL`: Serve GraphiQL (default: true)
    /// - `LOG_LEVEL`: Logging level (default: "info")
    pub fn from_env() -> ConfigResult<Self> {
        // A missing .env file is fine
        let _ = dotenvy::dotenv();

        let host = env::var("DIRECTORY_HOST").unwrap_or_else(|_| "127.0.0.1".to_string());
        if host.trim().is_empty() {
            return Err(ConfigError::InvalidValue {
                var: "DIRECTORY_HOST".to_string(),
                reason: "Cannot be empty".to_string(),
            });
        }

        let port = Self::parse_env_u16("DIRECTORY_PORT", 4000)?;
        let seed_data = Self::parse_env_bool("DIRECTORY_SEED_DATA", true)?;
        let graphiql = Self::parse_env_bool("DIRECTORY_GRAPHIQL", true)?;
        let log_level = env::var("LOG_LEVEL").unwrap_or_else(|_| "info".to_string());

        Ok(Config {
            host,
            port,
            seed_data,
            graphiql,
            log_level,
        })
    }

    /// The `host:port` pair the listener binds to.
    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }

    /// Parse an environment variable as u16 with a default value.
    fn parse_env_u16(var_name: &str, default: u16) -> ConfigResult<u16> {
        match env::var(var_name) {
            Ok(val) => val.parse::<u16>().map_err(|_| ConfigError::InvalidValue {
                var: var_name.to_string(),
                reason: format!("Must be a port number between 0-65535, got: {}", val),
            }),
            Err(_) => Ok(default),
        }
    }

    /// Parse an environment variable as a boolean with a default value.
    fn parse_env_bool(var_name: &str, default: bool) -> ConfigResult<bool> {
        match env::var(var_name) {
            Ok(val) => match val.trim().to_ascii_lowercase().as_str() {
                "1" | "true" | "yes" | "on" => Ok(true),
                "0" | "false" | "no" | "off" => Ok(false),
                _ => Err(ConfigError::InvalidValue {
                    var: var_name.to_string(),
                    reason: format!("Must be true or false, got: {}", val),
                }),
            },
            Err(_) => Ok(default),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Config {
            host: "127.0.0.1".to_string(),
            port: 4000,
            seed_data: true,
            graphiql: true,
            log_level: "info".to_string(),
        }
    }
}
