//! Order tag value object.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::domain::trading::errors::ValidationError;

/// Maximum tag length accepted by the brokerage.
pub const MAX_TAG_LEN: usize = 255;

/// Caller-supplied order tag.
///
/// 1 to 255 characters drawn from `[A-Za-z0-9-]`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct OrderTag(String);

impl OrderTag {
    /// Validate and wrap a tag.
    pub fn new(value: impl Into<String>) -> Result<Self, ValidationError> {
        let value = value.into();
        if value.is_empty() || value.len() > MAX_TAG_LEN {
            return Err(ValidationError::InvalidTag {
                tag: value,
                reason: format!("length must be 1-{MAX_TAG_LEN} characters"),
            });
        }
        if let Some(bad) = value
            .chars()
            .find(|c| !(c.is_ascii_alphanumeric() || *c == '-'))
        {
            return Err(ValidationError::InvalidTag {
                reason: format!("character {bad:?} is not a letter, digit or '-'"),
                tag: value,
            });
        }
        Ok(Self(value))
    }

    /// Get the tag string.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for OrderTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl TryFrom<String> for OrderTag {
    type Error = ValidationError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<OrderTag> for String {
    fn from(tag: OrderTag) -> Self {
        tag.0
    }
}
