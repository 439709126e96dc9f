//! Order type for equity and option orders.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::domain::trading::errors::ValidationError;

/// Order type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OrderType {
    /// Execute at the best available price.
    Market,
    /// Execute at the limit price or better.
    Limit,
    /// Becomes a market order once the stop price trades.
    Stop,
    /// Becomes a limit order once the stop price trades.
    StopLimit,
}

impl OrderType {
    /// Wire token.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Market => "market",
            Self::Limit => "limit",
            Self::Stop => "stop",
            Self::StopLimit => "stop_limit",
        }
    }

    /// Returns true if a limit price must be supplied.
    #[must_use]
    pub const fn requires_price(&self) -> bool {
        matches!(self, Self::Limit | Self::StopLimit)
    }

    /// Returns true if a stop price must be supplied.
    #[must_use]
    pub const fn requires_stop(&self) -> bool {
        matches!(self, Self::Stop | Self::StopLimit)
    }
}

impl fmt::Display for OrderType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for OrderType {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "market" => Ok(Self::Market),
            "limit" => Ok(Self::Limit),
            "stop" => Ok(Self::Stop),
            "stop_limit" => Ok(Self::StopLimit),
            other => Err(ValidationError::UnknownToken {
                kind: "order type",
                token: other.to_string(),
            }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use test_case::test_case;

    #[test_case(OrderType::Market, "market", false, false)]
    #[test_case(OrderType::Limit, "limit", true, false)]
    #[test_case(OrderType::Stop, "stop", false, true)]
    #[test_case(OrderType::StopLimit, "stop_limit", true, true)]
    fn order_type_table(order_type: OrderType, token: &str, price: bool, stop: bool) {
        assert_eq!(order_type.as_str(), token);
        assert_eq!(token.parse::<OrderType>().unwrap(), order_type);
        assert_eq!(order_type.requires_price(), price);
        assert_eq!(order_type.requires_stop(), stop);
    }

    #[test]
    fn order_type_serde() {
        let json = serde_json::to_string(&OrderType::StopLimit).unwrap();
        assert_eq!(json, "\"stop_limit\"");

        let parsed: OrderType = serde_json::from_str("\"limit\"").unwrap();
        assert_eq!(parsed, OrderType::Limit);
    }
}
