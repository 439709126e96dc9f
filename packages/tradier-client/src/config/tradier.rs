//! Tradier connection configuration.

use std::time::Duration;

use serde::{Deserialize, Deserializer, Serialize};

use crate::infrastructure::broker::tradier::{TradierConfig, TradierEnvironment};

/// Tradier section of the configuration file.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TradierSettings {
    /// OAuth access token.
    #[serde(default, deserialize_with = "null_as_empty")]
    pub access_token: String,
    /// Default account ID for order placement.
    #[serde(default, deserialize_with = "null_as_empty")]
    pub account_id: String,
    /// `sandbox` or `live`.
    #[serde(default = "default_environment")]
    pub environment: String,
    /// Optional base URL override.
    #[serde(default)]
    pub base_url: Option<String>,
    /// HTTP request timeout in seconds.
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
}

impl Default for TradierSettings {
    fn default() -> Self {
        Self {
            access_token: String::new(),
            account_id: String::new(),
            environment: default_environment(),
            base_url: None,
            timeout_secs: default_timeout_secs(),
        }
    }
}

/// An interpolated `${VAR:-}` leaves a YAML null behind.
fn null_as_empty<'de, D: Deserializer<'de>>(deserializer: D) -> Result<String, D::Error> {
    Ok(Option::<String>::deserialize(deserializer)?.unwrap_or_default())
}

fn default_environment() -> String {
    "sandbox".to_string()
}

const fn default_timeout_secs() -> u64 {
    30
}

impl TradierSettings {
    /// Parsed environment.
    ///
    /// # Errors
    ///
    /// Returns a message naming the unknown environment.
    pub fn environment(&self) -> Result<TradierEnvironment, String> {
        self.environment.parse()
    }

    /// Build the adapter configuration.
    ///
    /// # Errors
    ///
    /// Returns a message if the environment is unknown.
    pub fn to_tradier_config(&self) -> Result<TradierConfig, String> {
        let mut config = TradierConfig::new(self.access_token.clone(), self.environment()?)
            .with_timeout(Duration::from_secs(self.timeout_secs));
        if let Some(url) = self.base_url.as_deref().filter(|u| !u.trim().is_empty()) {
            config = config.with_base_url(url);
        }
        Ok(config)
    }
}
