//! Tradier API response types.
//!
//! These types map directly to Tradier's JSON responses.

use rust_decimal::Decimal;
use serde::Deserialize;

use crate::application::ports::{OrderAck, OrderPreview};

// ============================================================================
// Order Response Types
// ============================================================================

/// Envelope returned by the order endpoint.
#[derive(Debug, Clone, Deserialize)]
pub struct TradierOrderResponse {
    /// Order acknowledgement.
    pub order: TradierOrderBody,
}

/// Order acknowledgement body.
#[derive(Debug, Clone, Deserialize)]
pub struct TradierOrderBody {
    /// Brokerage order ID.
    pub id: u64,
    /// Submission status.
    pub status: String,
    /// Partner ID.
    #[serde(default)]
    pub partner_id: Option<String>,
}

impl TradierOrderResponse {
    /// Convert to the port acknowledgement.
    #[must_use]
    pub fn to_order_ack(&self) -> OrderAck {
        OrderAck {
            order_id: self.order.id,
            status: self.order.status.clone(),
            partner_id: self.order.partner_id.clone(),
        }
    }
}

/// Envelope returned by the order endpoint when `preview=true`.
#[derive(Debug, Clone, Deserialize)]
pub struct TradierPreviewResponse {
    /// Preview body.
    pub order: TradierPreviewBody,
}

/// Preview body. Only the cost fields are kept.
#[derive(Debug, Clone, Deserialize)]
pub struct TradierPreviewBody {
    /// Preview status.
    pub status: String,
    /// Whether the order would be accepted.
    #[serde(default)]
    pub result: bool,
    /// Commission.
    #[serde(default)]
    pub commission: Option<Decimal>,
    /// Cost.
    #[serde(default)]
    pub cost: Option<Decimal>,
    /// Fees.
    #[serde(default)]
    pub fees: Option<Decimal>,
    /// Total order cost.
    #[serde(default)]
    pub order_cost: Option<Decimal>,
    /// Margin change.
    #[serde(default)]
    pub margin_change: Option<Decimal>,
}

impl TradierPreviewResponse {
    /// Convert to the port preview.
    #[must_use]
    pub fn to_order_preview(&self) -> OrderPreview {
        let body = &self.order;
        OrderPreview {
            status: body.status.clone(),
            result: body.result,
            commission: body.commission,
            cost: body.cost,
            fees: body.fees,
            order_cost: body.order_cost,
            margin_change: body.margin_change,
        }
    }
}

// ============================================================================
// Error Response Types
// ============================================================================

/// Error body: `{"errors":{"error":[...]}}`.
#[derive(Debug, Clone, Deserialize)]
pub struct TradierErrorResponse {
    /// Error container.
    pub errors: TradierErrors,
}

/// Error container. Tradier sends either one message or a list.
#[derive(Debug, Clone, Deserialize)]
pub struct TradierErrors {
    /// Messages.
    pub error: OneOrMany,
}

/// A single string or a list of strings.
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum OneOrMany {
    /// Single message.
    One(String),
    /// Several messages.
    Many(Vec<String>),
}

impl TradierErrorResponse {
    /// Messages joined with `"; "`.
    #[must_use]
    pub fn message(&self) -> String {
        match &self.errors.error {
            OneOrMany::One(message) => message.clone(),
            OneOrMany::Many(messages) => messages.join("; "),
        }
    }
}
