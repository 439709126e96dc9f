//! Tradier-specific error types.

use thiserror::Error;

use crate::application::ports::TradingError;
use crate::domain::trading::ValidationError;
use crate::encoding::EncodingError;

/// Errors from the Tradier adapter.
#[derive(Debug, Error)]
pub enum TradierError {
    /// HTTP client could not be built or the request could not be formed.
    #[error("HTTP error: {0}")]
    Http(String),

    /// API returned a non-success status.
    #[error("API error: {status} - {message}")]
    Api {
        /// HTTP status code.
        status: u16,
        /// Error message from the API.
        message: String,
    },

    /// Authentication failed.
    #[error("Authentication failed")]
    AuthenticationFailed,

    /// Rate limited.
    #[error("Rate limited, retry after {retry_after_secs}s")]
    RateLimited {
        /// Suggested retry delay in seconds.
        retry_after_secs: u64,
    },

    /// Network error.
    #[error("Network error: {0}")]
    Network(String),

    /// JSON parsing error.
    #[error("JSON parsing error: {0}")]
    JsonParse(String),

    /// Request rejected before sending.
    #[error("Invalid request: {0}")]
    InvalidRequest(String),

    /// Order failed construction checks.
    #[error(transparent)]
    Validation(#[from] ValidationError),

    /// Order could not be encoded.
    #[error(transparent)]
    Encoding(#[from] EncodingError),
}

impl From<TradierError> for TradingError {
    fn from(err: TradierError) -> Self {
        match err {
            TradierError::Http(message)
            | TradierError::Network(message)
            | TradierError::JsonParse(message) => Self::ConnectionError { message },
            TradierError::Api { status, message } => Self::OrderRejected { status, message },
            TradierError::AuthenticationFailed => Self::AuthenticationFailed,
            TradierError::RateLimited { retry_after_secs } => {
                Self::RateLimited { retry_after_secs }
            }
            TradierError::InvalidRequest(reason) => Self::InvalidOrder { reason },
            TradierError::Validation(e) => Self::InvalidOrder {
                reason: e.to_string(),
            },
            TradierError::Encoding(e) => Self::InvalidOrder {
                reason: e.to_string(),
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::trading::OrderClass;

    #[test]
    fn tradier_error_to_trading_error_network() {
        let err = TradierError::Network("connection refused".to_string());
        let trading_err: TradingError = err.into();
        assert!(matches!(trading_err, TradingError::ConnectionError { .. }));
    }

    #[test]
    fn tradier_error_to_trading_error_api() {
        let err = TradierError::Api {
            status: 400,
            message: "Invalid Parameter".to_string(),
        };
        let trading_err: TradingError = err.into();
        assert_eq!(
            trading_err,
            TradingError::OrderRejected {
                status: 400,
                message: "Invalid Parameter".to_string(),
            }
        );
    }

    #[test]
    fn tradier_error_to_trading_error_rate_limited() {
        let err = TradierError::RateLimited {
            retry_after_secs: 60,
        };
        let trading_err: TradingError = err.into();
        assert_eq!(
            trading_err,
            TradingError::RateLimited {
                retry_after_secs: 60
            }
        );
    }

    #[test]
    fn validation_error_converts() {
        let err: TradierError = ValidationError::MissingField { field: "symbol" }.into();
        assert_eq!(err.to_string(), "missing required field: symbol");

        let trading_err: TradingError = err.into();
        assert!(matches!(trading_err, TradingError::InvalidOrder { .. }));
    }

    #[test]
    fn encoding_error_converts() {
        let err: TradierError = EncodingError::UnsupportedMember {
            class: OrderClass::Combo,
        }
        .into();
        let trading_err: TradingError = err.into();
        assert!(matches!(trading_err, TradingError::InvalidOrder { .. }));
    }
}
