//! # Configuration Management
//!
//! This module handles loading the service configuration from multiple sources:
//! - TOML configuration file (config.toml, optional)
//! - Environment variables (with APP_ prefix)
//! - Default values (built into the code)
//!
//! ## Configuration Priority (highest to lowest):
//! 1. Platform variables `HOST` and `PORT`
//! 2. Environment variables (APP_SERVER__HOST, APP_SERVER__PORT, etc.)
//! 3. Configuration file (config.toml)
//! 4. Default values (defined in the Default impl)

use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::env;

/// Main application configuration.
///
/// The service is stateless, so the only thing worth configuring is how the
/// HTTP listener is bound and how long a graceful stop may take.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppConfig {
    pub server: ServerConfig,
}

/// Server-specific configuration settings.
///
/// ## Fields:
/// - `host`: address to bind to; `0.0.0.0` accepts connections on every interface
/// - `port`: TCP port to listen on (1-65535)
/// - `shutdown_timeout_secs`: how long in-flight requests get to finish after a stop signal
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
    pub shutdown_timeout_secs: u64,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            server: ServerConfig {
                host: "0.0.0.0".to_string(),
                port: 8000,
                shutdown_timeout_secs: 30,
            },
        }
    }
}

impl AppConfig {
    /// Load configuration from every source in priority order.
    ///
    /// ## Environment Variable Examples:
    /// - `APP_SERVER__PORT=9000`: Override server port
    /// - `APP_SERVER__SHUTDOWN_TIMEOUT_SECS=5`: Override the graceful stop window
    /// - `HOST=127.0.0.1`: Special case for deployment platforms
    /// - `PORT=3000`: Special case for deployment platforms
    pub fn load() -> Result<Self> {
        Self::load_with(env::var("HOST").ok(), env::var("PORT").ok())
    }

    /// Same as [`AppConfig::load`], with the platform `HOST`/`PORT` values passed in.
    pub fn load_with(host: Option<String>, port: Option<String>) -> Result<Self> {
        let mut settings = config::Config::builder()
            .add_source(config::Config::try_from(&AppConfig::default())?)
            .add_source(config::File::with_name("config").required(false))
            .add_source(
                config::Environment::with_prefix("APP")
                    .prefix_separator("_")
                    .separator("__"),
            );

        if let Some(host) = host {
            settings = settings.set_override("server.host", host)?;
        }

        if let Some(port) = port {
            let port: u16 = port
                .trim()
                .parse()
                .map_err(|e| anyhow::anyhow!("Invalid PORT value {:?}: {}", port, e))?;
            settings = settings.set_override("server.port", i64::from(port))?;
        }

        let config = settings.build()?.try_deserialize()?;
        Ok(config)
    }

    /// Validate that the configuration values make sense.
    ///
    /// Port 0 would let the OS pick a random port, which nothing upstream could find.
    pub fn validate(&self) -> Result<()> {
        if self.server.port == 0 {
            return Err(anyhow::anyhow!("Server port cannot be 0"));
        }

        if self.server.host.trim().is_empty() {
            return Err(anyhow::anyhow!("Server host cannot be empty"));
        }

        Ok(())
    }

    /// `host:port` string handed to `HttpServer::bind`.
    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.server.host, self.server.port)
    }
}
