//! Composite order validation.
//!
//! Cross-order rules for OCO and OTOCO orders:
//!
//! - when every compared order is an equity order, symbols must match;
//! - when every compared order is an option order, the option symbol of each
//!   order's first leg must match (later legs are not compared);
//! - durations must match, both between members and against the composite
//!   order's own duration.
//!
//! Members never carry a tag of their own: the composite's tag is the only
//! one sent.

use super::errors::ValidationError;
use super::order::{OcoOrder, Order, OtocoOrder};
use super::value_objects::{OrderClass, OrderDuration};

/// Reject members that cannot sit inside a composite order.
///
/// Only untagged equity and option orders (single or multileg) are accepted.
pub(crate) fn ensure_simple_member(role: &'static str, order: &Order) -> Result<(), ValidationError> {
    match order {
        Order::Equity(_) | Order::Option(_) if order.tag().is_some() => {
            Err(ValidationError::TaggedMember { role })
        }
        Order::Equity(_) | Order::Option(_) => Ok(()),
        other => Err(ValidationError::UnsupportedMember {
            role,
            class: other.class(),
        }),
    }
}

/// Every member must run for the composite order's own duration.
pub(crate) fn ensure_member_durations<'a>(
    duration: OrderDuration,
    members: impl IntoIterator<Item = &'a Order>,
) -> Result<(), ValidationError> {
    for member in members {
        if member.duration() != duration {
            return Err(ValidationError::DurationMismatch {
                first: duration,
                second: member.duration(),
            });
        }
    }
    Ok(())
}

/// Apply the symbol, option-symbol and duration rules across `orders`.
///
/// # Errors
///
/// Returns the first rule broken, comparing every order against the first.
pub fn validate_cross_order(orders: &[&Order]) -> Result<(), ValidationError> {
    let Some((first, rest)) = orders.split_first() else {
        return Ok(());
    };

    if orders.iter().all(|o| matches!(o, Order::Equity(_))) {
        for other in rest {
            if other.symbol() != first.symbol() {
                return Err(ValidationError::SymbolMismatch {
                    first: first.symbol().to_string(),
                    second: other.symbol().to_string(),
                });
            }
        }
    }

    if orders.iter().all(|o| matches!(o, Order::Option(_))) {
        let first_symbol = first_leg_symbol(first);
        for other in rest {
            let other_symbol = first_leg_symbol(other);
            if other_symbol != first_symbol {
                return Err(ValidationError::OptionSymbolMismatch {
                    first: first_symbol.unwrap_or_default().to_string(),
                    second: other_symbol.unwrap_or_default().to_string(),
                });
            }
        }
    }

    for other in rest {
        if other.duration() != first.duration() {
            return Err(ValidationError::DurationMismatch {
                first: first.duration(),
                second: other.duration(),
            });
        }
    }

    Ok(())
}

fn first_leg_symbol(order: &Order) -> Option<&str> {
    match order {
        Order::Option(option) => option.first_leg().map(|leg| leg.option_symbol()),
        _ => None,
    }
}

impl OcoOrder {
    /// Check the member count, member kinds and cross-order rules.
    ///
    /// # Errors
    ///
    /// Returns the first broken rule.
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.orders.len() != Self::MEMBERS {
            return Err(ValidationError::MemberCount {
                class: OrderClass::Oco,
                expected: Self::MEMBERS,
                actual: self.orders.len(),
            });
        }
        for order in &self.orders {
            ensure_simple_member("oco member", order)?;
        }
        let members: Vec<&Order> = self.orders.iter().collect();
        validate_cross_order(&members)?;
        ensure_member_durations(self.duration, members)
    }
}

impl OtocoOrder {
    /// Check the primary, the OCO pair and the cross-order rules between the
    /// primary and both pair members.
    ///
    /// # Errors
    ///
    /// Returns the first broken rule.
    pub fn validate(&self) -> Result<(), ValidationError> {
        ensure_simple_member("primary", &self.primary)?;
        if self.oco.tag().is_some() {
            return Err(ValidationError::TaggedMember { role: "oco" });
        }
        self.oco.validate()?;

        let mut compared: Vec<&Order> = Vec::with_capacity(1 + OcoOrder::MEMBERS);
        compared.push(&self.primary);
        compared.extend(self.oco.orders());
        validate_cross_order(&compared)?;
        // The primary and the bare `duration` field share one wire name.
        ensure_member_durations(self.duration, compared)
    }
}
