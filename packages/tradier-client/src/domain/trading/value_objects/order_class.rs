//! Order class (the `class` form field).

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::domain::trading::errors::ValidationError;

/// The kind of order placed with the brokerage.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OrderClass {
    /// Single equity order.
    Equity,
    /// Single-leg option order.
    Option,
    /// Option order with two or more legs.
    Multileg,
    /// Equity leg plus one to three option legs.
    Combo,
    /// One-triggers-other.
    Oto,
    /// One-cancels-other.
    Oco,
    /// One-triggers-one-cancels-other.
    Otoco,
}

impl OrderClass {
    /// Wire token sent as the `class` form field.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Equity => "equity",
            Self::Option => "option",
            Self::Multileg => "multileg",
            Self::Combo => "combo",
            Self::Oto => "oto",
            Self::Oco => "oco",
            Self::Otoco => "otoco",
        }
    }

    /// Returns true for classes made of other orders (OTO, OCO, OTOCO).
    #[must_use]
    pub const fn is_composite(&self) -> bool {
        matches!(self, Self::Oto | Self::Oco | Self::Otoco)
    }
}

impl fmt::Display for OrderClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for OrderClass {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "equity" => Ok(Self::Equity),
            "option" => Ok(Self::Option),
            "multileg" => Ok(Self::Multileg),
            "combo" => Ok(Self::Combo),
            "oto" => Ok(Self::Oto),
            "oco" => Ok(Self::Oco),
            "otoco" => Ok(Self::Otoco),
            other => Err(ValidationError::UnknownToken {
                kind: "order class",
                token: other.to_string(),
            }),
        }
    }
}
