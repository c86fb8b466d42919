//! Configuration management for the Weather Outfit Recommender
//!
//! Supports hierarchical configuration loading:
//! 1. Default values in code
//! 2. Configuration files (development.toml, production.toml)
//! 3. Environment variable overrides with OUTFIT_ prefix

use config::{ConfigError, Environment, File};
use serde::Deserialize;

/// Main application configuration
#[derive(Debug, Deserialize, Clone)]
pub struct Config {
    /// Current environment (development, production)
    pub environment: String,

    /// Server configuration
    pub server: ServerConfig,

    /// Weather API configuration
    pub weather: WeatherConfig,

    /// Model artifact configuration
    pub models: ModelConfig,
}

#[derive(Debug, Deserialize, Clone)]
pub struct ServerConfig {
    /// Server port
    pub port: u16,

    /// Server host
    pub host: String,
}

#[derive(Debug, Deserialize, Clone)]
pub struct WeatherConfig {
    /// Weather API current-conditions endpoint
    pub api_endpoint: String,

    /// Weather API key; empty means the provider is unavailable and mock
    /// data is served
    pub api_key: String,
}

#[derive(Debug, Deserialize, Clone)]
pub struct ModelConfig {
    /// Directory holding per-target scaler/model JSON pairs
    pub dir: String,

    /// Path to the ordered feature-name schema file
    pub features_file: String,
}

impl Config {
    /// Load configuration from files and environment variables
    pub fn load() -> Result<Self, ConfigError> {
        let environment =
            std::env::var("OUTFIT_ENVIRONMENT").unwrap_or_else(|_| "development".into());

        let config = config::Config::builder()
            // Start with default values
            .set_default("environment", environment.clone())?
            .set_default("server.port", 8000)?
            .set_default("server.host", "0.0.0.0")?
            .set_default(
                "weather.api_endpoint",
                "https://api.weatherapi.com/v1/current.json",
            )?
            .set_default("weather.api_key", "")?
            .set_default("models.dir", "models")?
            .set_default("models.features_file", "models/features.txt")?
            // Load environment-specific config file
            .add_source(File::with_name(&format!("config/{}", environment)).required(false))
            // Override with environment variables (OUTFIT_ prefix)
            .add_source(
                Environment::with_prefix("OUTFIT")
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
            port: 8000,
            host: "0.0.0.0".to_string(),
        }
    }
}
