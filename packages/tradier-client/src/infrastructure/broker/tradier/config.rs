//! Tradier adapter configuration.

use std::str::FromStr;
use std::time::Duration;

/// Default HTTP request timeout.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

/// Environment for the Tradier API.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum TradierEnvironment {
    /// Sandbox (simulated fills, delayed data).
    #[default]
    Sandbox,
    /// Live brokerage (real money).
    Live,
}

impl TradierEnvironment {
    /// Get the base URL for the API.
    #[must_use]
    pub const fn base_url(&self) -> &'static str {
        match self {
            Self::Sandbox => "https://sandbox.tradier.com/v1",
            Self::Live => "https://api.tradier.com/v1",
        }
    }

    /// Check if this is live trading.
    #[must_use]
    pub const fn is_live(&self) -> bool {
        matches!(self, Self::Live)
    }
}

impl std::fmt::Display for TradierEnvironment {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Sandbox => write!(f, "SANDBOX"),
            Self::Live => write!(f, "LIVE"),
        }
    }
}

impl FromStr for TradierEnvironment {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "sandbox" => Ok(Self::Sandbox),
            "live" => Ok(Self::Live),
            other => Err(format!(
                "unknown environment '{other}', expected 'sandbox' or 'live'"
            )),
        }
    }
}

/// Configuration for the Tradier broker adapter.
#[derive(Debug, Clone)]
pub struct TradierConfig {
    /// OAuth access token.
    pub access_token: String,
    /// Trading environment.
    pub environment: TradierEnvironment,
    /// Overrides the environment's base URL (tests, proxies).
    pub base_url: Option<String>,
    /// HTTP request timeout.
    pub timeout: Duration,
}

impl TradierConfig {
    /// Create a new configuration.
    #[must_use]
    pub fn new(access_token: impl Into<String>, environment: TradierEnvironment) -> Self {
        Self {
            access_token: access_token.into(),
            environment,
            base_url: None,
            timeout: DEFAULT_TIMEOUT,
        }
    }

    /// Set the HTTP timeout.
    #[must_use]
    pub const fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Override the base URL.
    #[must_use]
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = Some(base_url.into());
        self
    }

    /// Effective API base URL, without a trailing slash.
    #[must_use]
    pub fn base_url(&self) -> &str {
        self.base_url
            .as_deref()
            .map_or(self.environment.base_url(), |url| url.trim_end_matches('/'))
    }
}
