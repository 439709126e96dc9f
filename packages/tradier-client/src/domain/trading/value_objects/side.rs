//! Order sides for equity orders and option legs.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::domain::trading::errors::ValidationError;

/// Side of an equity order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EquitySide {
    /// Open or add to a long position.
    Buy,
    /// Close a short position.
    BuyToCover,
    /// Close a long position.
    Sell,
    /// Open a short position.
    SellShort,
}

impl EquitySide {
    /// Wire token.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Buy => "buy",
            Self::BuyToCover => "buy_to_cover",
            Self::Sell => "sell",
            Self::SellShort => "sell_short",
        }
    }
}

impl fmt::Display for EquitySide {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for EquitySide {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "buy" => Ok(Self::Buy),
            "buy_to_cover" => Ok(Self::BuyToCover),
            "sell" => Ok(Self::Sell),
            "sell_short" => Ok(Self::SellShort),
            other => Err(ValidationError::UnknownToken {
                kind: "equity side",
                token: other.to_string(),
            }),
        }
    }
}

/// Side of an option leg.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OptionSide {
    /// Open a long option position.
    BuyToOpen,
    /// Close a short option position.
    BuyToClose,
    /// Open a short option position.
    SellToOpen,
    /// Close a long option position.
    SellToClose,
}

impl OptionSide {
    /// Wire token.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::BuyToOpen => "buy_to_open",
            Self::BuyToClose => "buy_to_close",
            Self::SellToOpen => "sell_to_open",
            Self::SellToClose => "sell_to_close",
        }
    }
}

impl fmt::Display for OptionSide {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for OptionSide {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "buy_to_open" => Ok(Self::BuyToOpen),
            "buy_to_close" => Ok(Self::BuyToClose),
            "sell_to_open" => Ok(Self::SellToOpen),
            "sell_to_close" => Ok(Self::SellToClose),
            other => Err(ValidationError::UnknownToken {
                kind: "option side",
                token: other.to_string(),
            }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use test_case::test_case;

    #[test_case(EquitySide::Buy, "buy")]
    #[test_case(EquitySide::BuyToCover, "buy_to_cover")]
    #[test_case(EquitySide::Sell, "sell")]
    #[test_case(EquitySide::SellShort, "sell_short")]
    fn equity_side_wire_token(side: EquitySide, token: &str) {
        assert_eq!(side.to_string(), token);
        assert_eq!(token.parse::<EquitySide>().unwrap(), side);
    }

    #[test_case(OptionSide::BuyToOpen, "buy_to_open")]
    #[test_case(OptionSide::BuyToClose, "buy_to_close")]
    #[test_case(OptionSide::SellToOpen, "sell_to_open")]
    #[test_case(OptionSide::SellToClose, "sell_to_close")]
    fn option_side_wire_token(side: OptionSide, token: &str) {
        assert_eq!(side.to_string(), token);
        assert_eq!(token.parse::<OptionSide>().unwrap(), side);
    }

    #[test]
    fn option_side_rejects_equity_token() {
        assert!("buy".parse::<OptionSide>().is_err());
    }
}
