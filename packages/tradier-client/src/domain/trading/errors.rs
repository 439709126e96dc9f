//! Order construction and validation errors.

use thiserror::Error;

use super::value_objects::{OrderClass, OrderDuration};

/// Errors raised while building or validating an order.
///
/// Builders stop at the first problem they find, so each error names a
/// single field or rule.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ValidationError {
    /// Required field was never set.
    #[error("missing required field: {field}")]
    MissingField {
        /// Field name as it appears on the wire.
        field: &'static str,
    },

    /// String field was set to an empty value.
    #[error("field must not be empty: {field}")]
    EmptyField {
        /// Field name.
        field: &'static str,
    },

    /// Numeric field was zero or negative.
    #[error("field must be positive: {field} = {value}")]
    NonPositive {
        /// Field name.
        field: &'static str,
        /// Offending value.
        value: String,
    },

    /// Tag failed the length or charset rule.
    #[error("invalid tag {tag:?}: {reason}")]
    InvalidTag {
        /// Offending tag.
        tag: String,
        /// Why it was rejected.
        reason: String,
    },

    /// Leg count outside the range allowed for the order class.
    #[error("{class} order requires {min}-{max} legs, got {actual}")]
    LegCount {
        /// Order class being built.
        class: OrderClass,
        /// Minimum legs.
        min: usize,
        /// Maximum legs.
        max: usize,
        /// Legs supplied.
        actual: usize,
    },

    /// Composite order member of a class that cannot be nested.
    #[error("{role} of a composite order cannot be a {class} order")]
    UnsupportedMember {
        /// Position of the member (primary, trigger, oco member).
        role: &'static str,
        /// Class of the rejected member.
        class: OrderClass,
    },

    /// Composite member carries a tag; only the composite order is tagged.
    #[error("{role} of a composite order cannot carry its own tag")]
    TaggedMember {
        /// Position of the member (primary, trigger, oco member, oco).
        role: &'static str,
    },

    /// Composite order with the wrong number of members.
    #[error("{class} order requires exactly {expected} orders, got {actual}")]
    MemberCount {
        /// Composite order class.
        class: OrderClass,
        /// Members required.
        expected: usize,
        /// Members supplied.
        actual: usize,
    },

    /// Equity members reference different symbols.
    #[error("equity orders must share a symbol: {first} != {second}")]
    SymbolMismatch {
        /// Symbol of the first compared order.
        first: String,
        /// Symbol of the mismatching order.
        second: String,
    },

    /// Option members reference different contracts on their first leg.
    #[error("option orders must share an option symbol: {first} != {second}")]
    OptionSymbolMismatch {
        /// Option symbol of the first compared order.
        first: String,
        /// Option symbol of the mismatching order.
        second: String,
    },

    /// Members carry different durations, or a member's duration differs
    /// from the composite order's own.
    #[error("orders must share a duration: {first} != {second}")]
    DurationMismatch {
        /// Duration of the first compared order.
        first: OrderDuration,
        /// Duration of the mismatching order.
        second: OrderDuration,
    },

    /// Unrecognised wire token.
    #[error("unknown {kind}: {token:?}")]
    UnknownToken {
        /// Token family (side, duration, ...).
        kind: &'static str,
        /// Token that failed to parse.
        token: String,
    },
}
