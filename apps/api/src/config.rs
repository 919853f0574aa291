//! Tally API configuration module.
//!
//! Configuration is loaded from environment variables with fallback to defaults.

use std::env;
use std::net::{IpAddr, SocketAddr};

/// Tally API configuration.
#[derive(Debug, Clone)]
pub struct ApiConfig {
    /// Address the HTTP server binds to
    pub bind_addr: IpAddr,

    /// HTTP server port
    pub http_port: u16,
}

impl ApiConfig {
    /// Load configuration from environment variables.
    ///
    /// | Variable    | Default     |
    /// |-------------|-------------|
    /// | `BIND_ADDR` | `127.0.0.1` |
    /// | `HTTP_PORT` | `8080`      |
    ///
    /// A variable that is set but does not parse is a startup error, not
    /// a silent fallback.
    pub fn load() -> Result<Self, ConfigError> {
        let config = ApiConfig {
            bind_addr: env::var("BIND_ADDR")
                .unwrap_or_else(|_| "127.0.0.1".to_string())
                .parse()
                .map_err(|_| ConfigError::InvalidValue("BIND_ADDR".to_string()))?,

            http_port: env::var("HTTP_PORT")
                .unwrap_or_else(|_| "8080".to_string())
                .parse()
                .map_err(|_| ConfigError::InvalidValue("HTTP_PORT".to_string()))?,
        };

        Ok(config)
    }

    /// The socket address to listen on.
    pub fn socket_addr(&self) -> SocketAddr {
        SocketAddr::new(self.bind_addr, self.http_port)
    }
}

/// Configuration error types.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Invalid value for {0}")]
    InvalidValue(String),
}
