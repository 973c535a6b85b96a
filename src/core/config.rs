//! Configuration management for the catalog server.
//!
//! This module provides a centralized configuration structure that can be
//! populated from environment variables or defaults.

use super::transport::HttpConfig;
use crate::domains::generator::TemplateVariant;
use crate::domains::prompts::ValidationRules;
use serde::{Deserialize, Serialize};
use std::str::FromStr;
use tracing::{info, warn};

/// Main configuration structure for the catalog server.
///
/// This struct contains all configurable aspects of the server, organized
/// by domain for clarity and maintainability.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    /// Server identification and metadata.
    pub server: ServerConfig,

    /// Logging configuration.
    pub logging: LoggingConfig,

    /// HTTP listener configuration.
    pub transport: HttpConfig,

    /// Prompt catalog configuration.
    pub catalog: CatalogConfig,

    /// Prompt generator configuration.
    pub generator: GeneratorConfig,
}

/// Server identification configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    /// The name of the server as reported to clients.
    pub name: String,

    /// The version of the server.
    pub version: String,
}

/// Logging configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Log level filter (e.g., "info", "debug", "trace").
    pub level: String,

    /// Whether to include timestamps in log output.
    pub with_timestamps: bool,
}

/// Configuration for the prompt catalog.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CatalogConfig {
    /// Load the starter prompts when the store is created.
    pub seed_on_start: bool,

    /// Rules applied to new prompts. Nothing beyond required fields by default.
    pub validation: ValidationRules,
}

/// Configuration for the prompt generator.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
pub struct GeneratorConfig {
    /// Template variant used by `/generate`.
    pub variant: TemplateVariant,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            name: "promptcart-api".to_string(),
            version: env!("CARGO_PKG_VERSION").to_string(),
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            with_timestamps: true,
        }
    }
}

impl Default for CatalogConfig {
    fn default() -> Self {
        Self {
            seed_on_start: true,
            validation: ValidationRules::default(),
        }
    }
}

impl Config {
    /// Create a new configuration with default values.
    pub fn new() -> Self {
        Self::default()
    }

    /// Load configuration from environment variables.
    ///
    /// Environment variables are expected to be prefixed with `PROMPTCART_`.
    /// For example: `PROMPTCART_HTTP_PORT`, `PROMPTCART_LOG_LEVEL`.
    pub fn from_env() -> Self {
        dotenvy::dotenv().ok();

        let mut config = Self::default();

        if let Ok(name) = std::env::var("PROMPTCART_SERVER_NAME") {
            config.server.name = name;
        }

        if let Ok(level) = std::env::var("PROMPTCART_LOG_LEVEL") {
            config.logging.level = level;
        }

        if let Some(with_timestamps) = parse_env("PROMPTCART_LOG_TIMESTAMPS") {
            config.logging.with_timestamps = with_timestamps;
        }

        config.transport = HttpConfig::from_env();

        if let Some(seed) = parse_env("PROMPTCART_SEED") {
            config.catalog.seed_on_start = seed;
        }

        if let Some(true) = parse_env::<bool>("PROMPTCART_ENFORCE_SCHEMA_LIMITS") {
            config.catalog.validation = ValidationRules::schema();
            info!("Schema limits enforced on new prompts");
        }

        if let Some(variant) = parse_env("PROMPTCART_TEMPLATE_VARIANT") {
            config.generator.variant = variant;
        }

        config
    }
}

/// Read and parse an environment variable, warning on unparseable values.
pub(crate) fn parse_env<T>(key: &str) -> Option<T>
where
    T: FromStr,
    T::Err: std::fmt::Display,
{
    let raw = std::env::var(key).ok()?;
    match raw.trim().parse() {
        Ok(value) => Some(value),
        Err(e) => {
            warn!("Ignoring {}={:?}: {}", key, raw, e);
            None
        }
    }
}
