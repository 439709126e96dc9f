//! Encoding errors.

use thiserror::Error;

use crate::domain::trading::OrderClass;

/// Errors raised while flattening an order into form fields.
///
/// These indicate an order shape the wire format cannot express, not bad
/// user input; builders reject bad input earlier.
#[derive(Debug, Error)]
pub enum EncodingError {
    /// Option member of a composite order has more than one leg.
    #[error("composite member must be a single-leg option order, got {legs} legs")]
    MultilegMember {
        /// Legs on the rejected member.
        legs: usize,
    },

    /// Composite member of a class that has no indexed encoding.
    #[error("{class} order cannot be encoded as a composite member")]
    UnsupportedMember {
        /// Class of the rejected member.
        class: OrderClass,
    },

    /// Form body serialization failed.
    #[error("form serialization failed: {0}")]
    Form(#[from] serde_urlencoded::ser::Error),
}
