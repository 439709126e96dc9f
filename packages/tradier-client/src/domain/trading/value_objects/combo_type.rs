//! Combo order pricing type.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::domain::trading::errors::ValidationError;

/// Net pricing type of a combo order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ComboType {
    /// Execute at market.
    Market,
    /// Net debit limit.
    Debit,
    /// Net credit limit.
    Credit,
    /// Even money.
    Even,
}

impl ComboType {
    /// Wire token.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Market => "market",
            Self::Debit => "debit",
            Self::Credit => "credit",
            Self::Even => "even",
        }
    }

    /// Debit and credit combos carry a net price.
    #[must_use]
    pub const fn requires_price(&self) -> bool {
        matches!(self, Self::Debit | Self::Credit)
    }
}

impl fmt::Display for ComboType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ComboType {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "market" => Ok(Self::Market),
            "debit" => Ok(Self::Debit),
            "credit" => Ok(Self::Credit),
            "even" => Ok(Self::Even),
            other => Err(ValidationError::UnknownToken {
                kind: "combo type",
                token: other.to_string(),
            }),
        }
    }
}
