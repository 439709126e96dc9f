//! Trading Port (Driven Port)
//!
//! Interface for placing orders with a brokerage.

use async_trait::async_trait;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::domain::trading::Order;

/// Acknowledgement returned after an order is accepted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OrderAck {
    /// Brokerage-assigned order ID.
    pub order_id: u64,
    /// Status reported by the brokerage (`ok` on acceptance).
    pub status: String,
    /// Partner ID, when the account belongs to a partner.
    pub partner_id: Option<String>,
}

impl OrderAck {
    /// Returns true if the brokerage reported `ok`.
    #[must_use]
    pub fn is_ok(&self) -> bool {
        self.status.eq_ignore_ascii_case("ok")
    }
}

/// Cost estimate returned by an order preview.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OrderPreview {
    /// Status reported by the brokerage.
    pub status: String,
    /// Whether the order would be accepted.
    pub result: bool,
    /// Estimated commission.
    pub commission: Option<Decimal>,
    /// Estimated cost.
    pub cost: Option<Decimal>,
    /// Estimated fees.
    pub fees: Option<Decimal>,
    /// Estimated total order cost.
    pub order_cost: Option<Decimal>,
    /// Estimated change in margin.
    pub margin_change: Option<Decimal>,
}

/// Trading port error.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum TradingError {
    /// Order failed local validation or encoding.
    #[error("Invalid order: {reason}")]
    InvalidOrder {
        /// Why the order was rejected.
        reason: String,
    },

    /// Brokerage rejected the order.
    #[error("Order rejected ({status}): {message}")]
    OrderRejected {
        /// HTTP status.
        status: u16,
        /// Brokerage message.
        message: String,
    },

    /// Credentials rejected.
    #[error("Authentication failed")]
    AuthenticationFailed,

    /// Rate limited.
    #[error("Rate limited by broker, retry after {retry_after_secs}s")]
    RateLimited {
        /// Suggested retry delay in seconds.
        retry_after_secs: u64,
    },

    /// Connection or decoding error.
    #[error("Broker connection error: {message}")]
    ConnectionError {
        /// Error details.
        message: String,
    },
}

/// Port for order placement.
#[async_trait]
pub trait TradingPort: Send + Sync {
    /// Place an order on an account.
    async fn place_order(&self, account_id: &str, order: &Order) -> Result<OrderAck, TradingError>;

    /// Ask the brokerage to price an order without placing it.
    async fn preview_order(
        &self,
        account_id: &str,
        order: &Order,
    ) -> Result<OrderPreview, TradingError>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn order_ack_status_check() {
        let ack = OrderAck {
            order_id: 257_459,
            status: "ok".to_string(),
            partner_id: None,
        };
        assert!(ack.is_ok());

        let rejected = OrderAck {
            status: "rejected".to_string(),
            ..ack
        };
        assert!(!rejected.is_ok());
    }

    #[test]
    fn trading_error_display() {
        let err = TradingError::OrderRejected {
            status: 400,
            message: "Backoffice rejected".to_string(),
        };
        assert_eq!(err.to_string(), "Order rejected (400): Backoffice rejected");
    }
}
