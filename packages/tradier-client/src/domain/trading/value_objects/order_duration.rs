//! Order duration (time in force).

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::domain::trading::errors::ValidationError;

/// Time the order will remain active.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OrderDuration {
    /// Valid for the current trading day only.
    #[default]
    Day,
    /// Good-til-canceled.
    Gtc,
    /// Pre-market session only.
    Pre,
    /// Post-market session only.
    Post,
}

impl OrderDuration {
    /// Wire token.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Day => "day",
            Self::Gtc => "gtc",
            Self::Pre => "pre",
            Self::Post => "post",
        }
    }
}

impl fmt::Display for OrderDuration {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for OrderDuration {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "day" => Ok(Self::Day),
            "gtc" => Ok(Self::Gtc),
            "pre" => Ok(Self::Pre),
            "post" => Ok(Self::Post),
            other => Err(ValidationError::UnknownToken {
                kind: "duration",
                token: other.to_string(),
            }),
        }
    }
}
