//! Configuration management for the SkyHarvest backend
//!
//! Supports hierarchical configuration loading:
//! 1. Default values in code
//! 2. Configuration files (development.toml, production.toml)
//! 3. Environment variable overrides with SKY_ prefix

use config::{ConfigError, Environment, File};
use serde::Deserialize;

/// Main application configuration
#[derive(Debug, Deserialize, Clone)]
pub struct Config {
    /// Current environment (development, production)
    pub environment: String,

    /// Server configuration
    pub server: ServerConfig,

    /// Action gateway configuration
    pub gateway: GatewayConfig,
}

#[derive(Debug, Deserialize, Clone)]
pub struct ServerConfig {
    /// Server port
    pub port: u16,

    /// Server host
    pub host: String,
}

#[derive(Debug, Deserialize, Clone)]
pub struct GatewayConfig {
    /// Artificial processing latency for action endpoints, in milliseconds
    pub action_delay_ms: u64,

    /// Artificial processing latency for the forecast endpoint, in milliseconds
    pub forecast_delay_ms: u64,
}

impl Config {
    /// Load configuration from files and environment variables
    pub fn load() -> Result<Self, ConfigError> {
        let environment = std::env::var("SKY_ENVIRONMENT").unwrap_or_else(|_| "development".into());

        let config = config::Config::builder()
            // Start with default values
            .set_default("environment", environment.clone())?
            .set_default("server.port", 3000)?
            .set_default("server.host", "0.0.0.0")?
            .set_default("gateway.action_delay_ms", 1000)?
            .set_default("gateway.forecast_delay_ms", 800)?
            // Load environment-specific config file
            .add_source(File::with_name(&format!("config/{}", environment)).required(false))
            // Override with environment variables (SKY_ prefix)
            .add_source(
                Environment::with_prefix("SKY")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()?;

        config.try_deserialize()
    }
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            port: 3000,
            host: "0.0.0.0".to_string(),
        }
    }
}

impl Default for GatewayConfig {
    fn default() -> Self {
        Self {
            action_delay_ms: 1000,
            forecast_delay_ms: 800,
        }
    }
}
