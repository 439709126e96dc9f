//! Configuration loading for the Tradier client.
//!
//! Reads a YAML file, interpolates environment variables and validates the
//! result.
//!
//! # Usage
//!
//! ```rust,ignore
//! use tradier_client::config::load_config;
//!
//! let config = load_config(Some("tradier.yaml"))?;
//! let adapter = TradierTradingAdapter::new(&config.tradier_config()?)?;
//! ```

mod observability;
mod tradier;

use serde::{Deserialize, Serialize};
use thiserror::Error;

pub use observability::{LOG_FORMATS, LoggingConfig};
pub use tradier::TradierSettings;

use crate::infrastructure::broker::tradier::TradierConfig;

/// Default configuration file path.
pub const DEFAULT_CONFIG_PATH: &str = "tradier.yaml";

/// Configuration errors.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Failed to read configuration file.
    #[error("Failed to read config file '{path}': {source}")]
    ReadError {
        /// Path to the config file.
        path: String,
        /// The underlying IO error.
        source: std::io::Error,
    },

    /// Failed to parse YAML configuration.
    #[error("Failed to parse config YAML: {0}")]
    ParseError(#[from] serde_yaml_bw::Error),

    /// Configuration validation failed.
    #[error("Config validation failed: {0}")]
    ValidationError(String),
}

/// Root configuration structure.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ClientConfig {
    /// Tradier connection settings.
    #[serde(default)]
    pub tradier: TradierSettings,
    /// Logging configuration.
    #[serde(default)]
    pub logging: LoggingConfig,
}

impl ClientConfig {
    /// Build the adapter configuration.
    ///
    /// # Errors
    ///
    /// Returns a `ValidationError` if the environment is unknown.
    pub fn tradier_config(&self) -> Result<TradierConfig, ConfigError> {
        self.tradier
            .to_tradier_config()
            .map_err(ConfigError::ValidationError)
    }
}

// ============================================
// Configuration Loading
// ============================================

/// Load configuration from a YAML file with environment variable interpolation.
///
/// # Arguments
///
/// * `path` - Optional path to the config file. Defaults to `tradier.yaml`.
///
/// # Errors
///
/// Returns a `ConfigError` if the file cannot be read, parsed, or validated.
pub fn load_config(path: Option<&str>) -> Result<ClientConfig, ConfigError> {
    let path = path.unwrap_or(DEFAULT_CONFIG_PATH);

    let contents = std::fs::read_to_string(path).map_err(|e| ConfigError::ReadError {
        path: path.to_string(),
        source: e,
    })?;

    load_config_from_string(&contents)
}

/// Load configuration from a YAML string.
///
/// # Errors
///
/// Returns a `ConfigError` if the YAML cannot be parsed or validated.
pub fn load_config_from_string(yaml: &str) -> Result<ClientConfig, ConfigError> {
    let interpolated = interpolate_env_vars(yaml);
    let config: ClientConfig = serde_yaml_bw::from_str(&interpolated)?;
    validate_config(&config)?;
    Ok(config)
}

/// Interpolate environment variables in a string.
///
/// Supports both `${VAR}` and `${VAR:-default}` syntax.
#[allow(clippy::expect_used)] // Regex is compile-time constant
fn interpolate_env_vars(input: &str) -> String {
    use std::sync::OnceLock;

    static ENV_VAR_REGEX: OnceLock<regex::Regex> = OnceLock::new();

    let re = ENV_VAR_REGEX.get_or_init(|| {
        regex::Regex::new(r"\$\{([A-Za-z_][A-Za-z0-9_]*)(?::-([^}]*))?\}")
            .expect("env var regex is valid")
    });

    re.replace_all(input, |cap: &regex::Captures<'_>| {
        let default_value = cap.get(2).map_or("", |m| m.as_str());
        match std::env::var(&cap[1]) {
            Ok(v) if !v.is_empty() => v,
            _ => default_value.to_string(),
        }
    })
    .into_owned()
}

/// Validate configuration values.
fn validate_config(config: &ClientConfig) -> Result<(), ConfigError> {
    let tradier = &config.tradier;

    if tradier.access_token.trim().is_empty() {
        return Err(ConfigError::ValidationError(
            "tradier.access_token must not be empty".to_string(),
        ));
    }

    tradier
        .environment()
        .map_err(|e| ConfigError::ValidationError(format!("tradier.environment: {e}")))?;

    if tradier.timeout_secs == 0 {
        return Err(ConfigError::ValidationError(
            "tradier.timeout_secs must be positive".to_string(),
        ));
    }

    if !LOG_FORMATS.contains(&config.logging.format.as_str()) {
        return Err(ConfigError::ValidationError(format!(
            "logging.format must be one of: {LOG_FORMATS:?}"
        )));
    }

    Ok(())
}
