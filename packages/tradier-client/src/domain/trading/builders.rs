//! Fluent builders for every order kind.
//!
//! `build()` checks required fields in a fixed order and returns the first
//! problem found.

use rust_decimal::Decimal;

use super::errors::ValidationError;
use super::order::{
    ComboOrder, EquityOrder, OcoOrder, OptionLeg, OptionOrder, Order, OtoOrder, OtocoOrder,
};
use super::validation::{ensure_member_durations, ensure_simple_member};
use super::value_objects::{
    ComboType, EquitySide, OptionSide, OrderClass, OrderDuration, OrderTag, OrderType,
};

fn required<T>(value: Option<T>, field: &'static str) -> Result<T, ValidationError> {
    value.ok_or(ValidationError::MissingField { field })
}

fn required_text(value: Option<String>, field: &'static str) -> Result<String, ValidationError> {
    let value = required(value, field)?;
    if value.trim().is_empty() {
        return Err(ValidationError::EmptyField { field });
    }
    Ok(value)
}

fn positive_quantity(value: Option<u64>, field: &'static str) -> Result<u64, ValidationError> {
    let value = required(value, field)?;
    if value == 0 {
        return Err(ValidationError::NonPositive {
            field,
            value: value.to_string(),
        });
    }
    Ok(value)
}

fn positive_price(
    value: Option<Decimal>,
    field: &'static str,
) -> Result<Option<Decimal>, ValidationError> {
    match value {
        Some(v) if v <= Decimal::ZERO => Err(ValidationError::NonPositive {
            field,
            value: v.to_string(),
        }),
        other => Ok(other),
    }
}

/// Apply the limit/stop price rules for an order type.
fn priced(
    order_type: OrderType,
    price: Option<Decimal>,
    stop: Option<Decimal>,
) -> Result<(Option<Decimal>, Option<Decimal>), ValidationError> {
    if order_type.requires_price() && price.is_none() {
        return Err(ValidationError::MissingField { field: "price" });
    }
    if order_type.requires_stop() && stop.is_none() {
        return Err(ValidationError::MissingField { field: "stop" });
    }
    Ok((positive_price(price, "price")?, positive_price(stop, "stop")?))
}

fn tag(value: Option<String>) -> Result<Option<OrderTag>, ValidationError> {
    value.map(OrderTag::new).transpose()
}

// ============================================================================
// Equity
// ============================================================================

/// Builder for [`EquityOrder`].
#[derive(Debug, Clone, Default)]
#[must_use]
pub struct EquityOrderBuilder {
    symbol: Option<String>,
    side: Option<EquitySide>,
    quantity: Option<u64>,
    order_type: Option<OrderType>,
    duration: Option<OrderDuration>,
    price: Option<Decimal>,
    stop: Option<Decimal>,
    tag: Option<String>,
}

impl EquityOrder {
    /// Start building an equity order.
    pub fn builder() -> EquityOrderBuilder {
        EquityOrderBuilder::default()
    }
}

impl EquityOrderBuilder {
    /// Set the symbol.
    pub fn symbol(mut self, symbol: impl Into<String>) -> Self {
        self.symbol = Some(symbol.into());
        self
    }

    /// Set the side.
    pub fn side(mut self, side: EquitySide) -> Self {
        self.side = Some(side);
        self
    }

    /// Set the share quantity.
    pub fn quantity(mut self, quantity: u64) -> Self {
        self.quantity = Some(quantity);
        self
    }

    /// Set the order type.
    pub fn order_type(mut self, order_type: OrderType) -> Self {
        self.order_type = Some(order_type);
        self
    }

    /// Set the duration.
    pub fn duration(mut self, duration: OrderDuration) -> Self {
        self.duration = Some(duration);
        self
    }

    /// Set the limit price.
    pub fn price(mut self, price: Decimal) -> Self {
        self.price = Some(price);
        self
    }

    /// Set the stop price.
    pub fn stop(mut self, stop: Decimal) -> Self {
        self.stop = Some(stop);
        self
    }

    /// Set the order tag.
    pub fn tag(mut self, tag: impl Into<String>) -> Self {
        self.tag = Some(tag.into());
        self
    }

    /// Build the order.
    ///
    /// # Errors
    ///
    /// Returns the first missing or invalid field.
    pub fn build(self) -> Result<EquityOrder, ValidationError> {
        let symbol = required_text(self.symbol, "symbol")?;
        let side = required(self.side, "side")?;
        let quantity = positive_quantity(self.quantity, "quantity")?;
        let order_type = required(self.order_type, "type")?;
        let duration = required(self.duration, "duration")?;
        let (price, stop) = priced(order_type, self.price, self.stop)?;

        Ok(EquityOrder {
            symbol,
            side,
            quantity,
            order_type,
            duration,
            price,
            stop,
            tag: tag(self.tag)?,
        })
    }
}

// ============================================================================
// Option legs and option orders
// ============================================================================

/// Builder for [`OptionLeg`].
#[derive(Debug, Clone, Default)]
#[must_use]
pub struct OptionLegBuilder {
    side: Option<OptionSide>,
    quantity: Option<u64>,
    option_symbol: Option<String>,
}

impl OptionLeg {
    /// Start building a leg.
    pub fn builder() -> OptionLegBuilder {
        OptionLegBuilder::default()
    }

    /// Build a leg from all of its fields.
    ///
    /// # Errors
    ///
    /// Returns an error if the quantity is zero or the symbol is blank.
    pub fn new(
        side: OptionSide,
        quantity: u64,
        option_symbol: impl Into<String>,
    ) -> Result<Self, ValidationError> {
        Self::builder()
            .side(side)
            .quantity(quantity)
            .option_symbol(option_symbol)
            .build()
    }
}

impl OptionLegBuilder {
    /// Set the side.
    pub fn side(mut self, side: OptionSide) -> Self {
        self.side = Some(side);
        self
    }

    /// Set the contract quantity.
    pub fn quantity(mut self, quantity: u64) -> Self {
        self.quantity = Some(quantity);
        self
    }

    /// Set the OCC option symbol.
    pub fn option_symbol(mut self, option_symbol: impl Into<String>) -> Self {
        self.option_symbol = Some(option_symbol.into());
        self
    }

    /// Build the leg.
    ///
    /// # Errors
    ///
    /// Returns the first missing or invalid field.
    pub fn build(self) -> Result<OptionLeg, ValidationError> {
        let side = required(self.side, "side")?;
        let quantity = positive_quantity(self.quantity, "quantity")?;
        let option_symbol = required_text(self.option_symbol, "option_symbol")?;
        Ok(OptionLeg {
            side,
            quantity,
            option_symbol,
        })
    }
}

/// Builder for [`OptionOrder`].
///
/// One leg yields a single-leg `option` order, more yield a `multileg` order.
#[derive(Debug, Clone, Default)]
#[must_use]
pub struct OptionOrderBuilder {
    symbol: Option<String>,
    order_type: Option<OrderType>,
    duration: Option<OrderDuration>,
    price: Option<Decimal>,
    stop: Option<Decimal>,
    legs: Vec<OptionLeg>,
    tag: Option<String>,
}

impl OptionOrder {
    /// Start building an option order.
    pub fn builder() -> OptionOrderBuilder {
        OptionOrderBuilder::default()
    }
}

impl OptionOrderBuilder {
    /// Set the underlying symbol.
    pub fn symbol(mut self, symbol: impl Into<String>) -> Self {
        self.symbol = Some(symbol.into());
        self
    }

    /// Set the order type.
    pub fn order_type(mut self, order_type: OrderType) -> Self {
        self.order_type = Some(order_type);
        self
    }

    /// Set the duration.
    pub fn duration(mut self, duration: OrderDuration) -> Self {
        self.duration = Some(duration);
        self
    }

    /// Set the limit (or net) price.
    pub fn price(mut self, price: Decimal) -> Self {
        self.price = Some(price);
        self
    }

    /// Set the stop price.
    pub fn stop(mut self, stop: Decimal) -> Self {
        self.stop = Some(stop);
        self
    }

    /// Append a leg. Legs keep the order they are added in.
    pub fn leg(mut self, leg: OptionLeg) -> Self {
        self.legs.push(leg);
        self
    }

    /// Append several legs.
    pub fn legs(mut self, legs: impl IntoIterator<Item = OptionLeg>) -> Self {
        self.legs.extend(legs);
        self
    }

    /// Set the order tag.
    pub fn tag(mut self, tag: impl Into<String>) -> Self {
        self.tag = Some(tag.into());
        self
    }

    /// Build the order.
    ///
    /// # Errors
    ///
    /// Returns the first missing or invalid field.
    pub fn build(self) -> Result<OptionOrder, ValidationError> {
        let symbol = required_text(self.symbol, "symbol")?;
        let duration = required(self.duration, "duration")?;
        let order_type = required(self.order_type, "type")?;
        if self.legs.is_empty() {
            return Err(ValidationError::MissingField { field: "legs" });
        }
        let (price, stop) = priced(order_type, self.price, self.stop)?;

        Ok(OptionOrder {
            symbol,
            order_type,
            duration,
            price,
            stop,
            legs: self.legs,
            tag: tag(self.tag)?,
        })
    }
}

// ============================================================================
// Combo
// ============================================================================

/// Builder for [`ComboOrder`].
#[derive(Debug, Clone, Default)]
#[must_use]
pub struct ComboOrderBuilder {
    symbol: Option<String>,
    combo_type: Option<ComboType>,
    duration: Option<OrderDuration>,
    price: Option<Decimal>,
    legs: Vec<OptionLeg>,
    tag: Option<String>,
}

impl ComboOrder {
    /// Start building a combo order.
    pub fn builder() -> ComboOrderBuilder {
        ComboOrderBuilder::default()
    }
}

impl ComboOrderBuilder {
    /// Set the underlying symbol.
    pub fn symbol(mut self, symbol: impl Into<String>) -> Self {
        self.symbol = Some(symbol.into());
        self
    }

    /// Set the net pricing type.
    pub fn combo_type(mut self, combo_type: ComboType) -> Self {
        self.combo_type = Some(combo_type);
        self
    }

    /// Set the duration.
    pub fn duration(mut self, duration: OrderDuration) -> Self {
        self.duration = Some(duration);
        self
    }

    /// Set the net price.
    pub fn price(mut self, price: Decimal) -> Self {
        self.price = Some(price);
        self
    }

    /// Append an option leg.
    pub fn leg(mut self, leg: OptionLeg) -> Self {
        self.legs.push(leg);
        self
    }

    /// Append several option legs.
    pub fn legs(mut self, legs: impl IntoIterator<Item = OptionLeg>) -> Self {
        self.legs.extend(legs);
        self
    }

    /// Set the order tag.
    pub fn tag(mut self, tag: impl Into<String>) -> Self {
        self.tag = Some(tag.into());
        self
    }

    /// Build the order.
    ///
    /// # Errors
    ///
    /// Returns an error when the leg count is outside 1-3 or a field is
    /// missing.
    pub fn build(self) -> Result<ComboOrder, ValidationError> {
        let count = self.legs.len();
        if !(1..=ComboOrder::MAX_LEGS).contains(&count) {
            return Err(ValidationError::LegCount {
                class: OrderClass::Combo,
                min: 1,
                max: ComboOrder::MAX_LEGS,
                actual: count,
            });
        }
        let symbol = required_text(self.symbol, "symbol")?;
        let duration = required(self.duration, "duration")?;
        let combo_type = required(self.combo_type, "type")?;
        if combo_type.requires_price() && self.price.is_none() {
            return Err(ValidationError::MissingField { field: "price" });
        }
        let price = positive_price(self.price, "price")?;

        Ok(ComboOrder {
            symbol,
            combo_type,
            duration,
            price,
            legs: self.legs,
            tag: tag(self.tag)?,
        })
    }
}

// ============================================================================
// Composite orders
// ============================================================================

/// Builder for [`OtoOrder`].
#[derive(Debug, Clone, Default)]
#[must_use]
pub struct OtoOrderBuilder {
    symbol: Option<String>,
    duration: Option<OrderDuration>,
    primary: Option<Order>,
    trigger: Option<Order>,
    tag: Option<String>,
}

impl OtoOrder {
    /// Start building an OTO order.
    pub fn builder() -> OtoOrderBuilder {
        OtoOrderBuilder::default()
    }
}

impl OtoOrderBuilder {
    /// Set the symbol.
    pub fn symbol(mut self, symbol: impl Into<String>) -> Self {
        self.symbol = Some(symbol.into());
        self
    }

    /// Set the duration.
    pub fn duration(mut self, duration: OrderDuration) -> Self {
        self.duration = Some(duration);
        self
    }

    /// Set the order that must fill first.
    pub fn primary(mut self, order: impl Into<Order>) -> Self {
        self.primary = Some(order.into());
        self
    }

    /// Set the order released once the primary fills.
    pub fn trigger(mut self, order: impl Into<Order>) -> Self {
        self.trigger = Some(order.into());
        self
    }

    /// Set the order tag.
    pub fn tag(mut self, tag: impl Into<String>) -> Self {
        self.tag = Some(tag.into());
        self
    }

    /// Build the order.
    ///
    /// # Errors
    ///
    /// Returns an error for a missing field, a member that is not an untagged
    /// equity or option order, or a member whose duration differs from the
    /// order's own.
    pub fn build(self) -> Result<OtoOrder, ValidationError> {
        let symbol = required_text(self.symbol, "symbol")?;
        let duration = required(self.duration, "duration")?;
        let primary = required(self.primary, "primary")?;
        ensure_simple_member("primary", &primary)?;
        let trigger = required(self.trigger, "trigger")?;
        ensure_simple_member("trigger", &trigger)?;
        ensure_member_durations(duration, [&primary, &trigger])?;

        Ok(OtoOrder {
            symbol,
            duration,
            primary: Box::new(primary),
            trigger: Box::new(trigger),
            tag: tag(self.tag)?,
        })
    }
}

/// Builder for [`OcoOrder`].
#[derive(Debug, Clone, Default)]
#[must_use]
pub struct OcoOrderBuilder {
    symbol: Option<String>,
    duration: Option<OrderDuration>,
    orders: Vec<Order>,
    tag: Option<String>,
}

impl OcoOrder {
    /// Start building an OCO order.
    pub fn builder() -> OcoOrderBuilder {
        OcoOrderBuilder::default()
    }
}

impl OcoOrderBuilder {
    /// Set the symbol.
    pub fn symbol(mut self, symbol: impl Into<String>) -> Self {
        self.symbol = Some(symbol.into());
        self
    }

    /// Set the duration.
    pub fn duration(mut self, duration: OrderDuration) -> Self {
        self.duration = Some(duration);
        self
    }

    /// Append a member order.
    pub fn order(mut self, order: impl Into<Order>) -> Self {
        self.orders.push(order.into());
        self
    }

    /// Set the order tag.
    pub fn tag(mut self, tag: impl Into<String>) -> Self {
        self.tag = Some(tag.into());
        self
    }

    /// Build and validate the order.
    ///
    /// # Errors
    ///
    /// Returns an error for a missing field or any broken OCO rule.
    pub fn build(self) -> Result<OcoOrder, ValidationError> {
        let symbol = required_text(self.symbol, "symbol")?;
        let duration = required(self.duration, "duration")?;

        let order = OcoOrder {
            symbol,
            duration,
            orders: self.orders,
            tag: tag(self.tag)?,
        };
        order.validate()?;
        Ok(order)
    }
}

/// Builder for [`OtocoOrder`].
#[derive(Debug, Clone, Default)]
#[must_use]
pub struct OtocoOrderBuilder {
    symbol: Option<String>,
    duration: Option<OrderDuration>,
    primary: Option<Order>,
    oco: Option<OcoOrder>,
    tag: Option<String>,
}

impl OtocoOrder {
    /// Start building an OTOCO order.
    pub fn builder() -> OtocoOrderBuilder {
        OtocoOrderBuilder::default()
    }
}

impl OtocoOrderBuilder {
    /// Set the symbol.
    pub fn symbol(mut self, symbol: impl Into<String>) -> Self {
        self.symbol = Some(symbol.into());
        self
    }

    /// Set the duration.
    pub fn duration(mut self, duration: OrderDuration) -> Self {
        self.duration = Some(duration);
        self
    }

    /// Set the order that must fill first.
    pub fn primary(mut self, order: impl Into<Order>) -> Self {
        self.primary = Some(order.into());
        self
    }

    /// Set the OCO pair released once the primary fills.
    pub fn oco(mut self, oco: OcoOrder) -> Self {
        self.oco = Some(oco);
        self
    }

    /// Set the order tag.
    pub fn tag(mut self, tag: impl Into<String>) -> Self {
        self.tag = Some(tag.into());
        self
    }

    /// Build and validate the order.
    ///
    /// # Errors
    ///
    /// Returns an error for a missing field or any broken OTOCO rule.
    pub fn build(self) -> Result<OtocoOrder, ValidationError> {
        let symbol = required_text(self.symbol, "symbol")?;
        let duration = required(self.duration, "duration")?;
        let primary = required(self.primary, "primary")?;
        let oco = required(self.oco, "oco")?;

        let order = OtocoOrder {
            symbol,
            duration,
            primary: Box::new(primary),
            oco,
            tag: tag(self.tag)?,
        };
        order.validate()?;
        Ok(order)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;
    use test_case::test_case;

    const CALL: &str = "SPY140118C00195000";
    const PUT: &str = "SPY140118P00195000";

    fn leg(side: OptionSide, symbol: &str) -> OptionLeg {
        OptionLeg::new(side, 1, symbol).unwrap()
    }

    fn equity() -> EquityOrderBuilder {
        EquityOrder::builder()
            .symbol("SPY")
            .side(EquitySide::Buy)
            .quantity(10)
            .order_type(OrderType::Market)
            .duration(OrderDuration::Day)
    }

    fn single_leg_option(duration: OrderDuration) -> OptionOrder {
        OptionOrder::builder()
            .symbol("SPY")
            .order_type(OrderType::Market)
            .duration(duration)
            .leg(leg(OptionSide::BuyToOpen, CALL))
            .build()
            .unwrap()
    }

    // ========================================================================
    // Equity
    // ========================================================================

    #[test]
    fn equity_builds_market_order() {
        let order = equity().build().unwrap();
        assert_eq!(order.symbol(), "SPY");
        assert_eq!(order.quantity(), 10);
        assert!(order.price().is_none());
        assert!(order.tag().is_none());
    }

    #[test]
    fn equity_reports_first_missing_field() {
        let err = EquityOrder::builder().quantity(1).build().unwrap_err();
        assert_eq!(err, ValidationError::MissingField { field: "symbol" });

        let err = EquityOrder::builder().symbol("SPY").build().unwrap_err();
        assert_eq!(err, ValidationError::MissingField { field: "side" });
    }

    #[test]
    fn equity_rejects_blank_symbol() {
        let err = equity().symbol("  ").build().unwrap_err();
        assert_eq!(err, ValidationError::EmptyField { field: "symbol" });
    }

    #[test]
    fn equity_rejects_zero_quantity() {
        let err = equity().quantity(0).build().unwrap_err();
        assert!(matches!(
            err,
            ValidationError::NonPositive {
                field: "quantity",
                ..
            }
        ));
    }

    #[test_case(OrderType::Limit, Some("price"))]
    #[test_case(OrderType::Stop, Some("stop"))]
    #[test_case(OrderType::StopLimit, Some("price"))]
    #[test_case(OrderType::Market, None)]
    fn equity_price_requirements(order_type: OrderType, missing: Option<&'static str>) {
        let result = equity().order_type(order_type).build();
        match missing {
            Some(field) => assert_eq!(
                result.unwrap_err(),
                ValidationError::MissingField { field }
            ),
            None => assert!(result.is_ok()),
        }
    }

    #[test]
    fn equity_stop_limit_with_both_prices() {
        let order = equity()
            .order_type(OrderType::StopLimit)
            .price(dec!(101.50))
            .stop(dec!(100.00))
            .build()
            .unwrap();
        assert_eq!(order.price(), Some(dec!(101.50)));
        assert_eq!(order.stop(), Some(dec!(100.00)));
    }

    #[test]
    fn equity_rejects_zero_stop() {
        let err = equity()
            .order_type(OrderType::Stop)
            .stop(dec!(0))
            .build()
            .unwrap_err();
        assert_eq!(
            err,
            ValidationError::NonPositive {
                field: "stop",
                value: "0".to_string(),
            }
        );
    }

    #[test]
    fn equity_rejects_negative_price() {
        let err = equity()
            .order_type(OrderType::Limit)
            .price(dec!(-1))
            .build()
            .unwrap_err();
        assert!(matches!(
            err,
            ValidationError::NonPositive { field: "price", .. }
        ));
    }

    #[test]
    fn equity_validates_tag() {
        assert!(equity().tag("my-tag").build().is_ok());
        let err = equity().tag("my tag").build().unwrap_err();
        assert!(matches!(err, ValidationError::InvalidTag { .. }));
    }

    // ========================================================================
    // Options
    // ========================================================================

    #[test]
    fn leg_reports_missing_option_symbol() {
        let err = OptionLeg::builder()
            .side(OptionSide::SellToClose)
            .quantity(2)
            .build()
            .unwrap_err();
        assert_eq!(
            err,
            ValidationError::MissingField {
                field: "option_symbol"
            }
        );
    }

    #[test]
    fn option_class_follows_leg_count() {
        let single = single_leg_option(OrderDuration::Day);
        assert_eq!(single.class(), OrderClass::Option);

        let multi = OptionOrder::builder()
            .symbol("SPY")
            .order_type(OrderType::Market)
            .duration(OrderDuration::Day)
            .legs([
                leg(OptionSide::BuyToOpen, CALL),
                leg(OptionSide::SellToOpen, PUT),
            ])
            .build()
            .unwrap();
        assert_eq!(multi.class(), OrderClass::Multileg);
        assert_eq!(multi.legs()[1].option_symbol(), PUT);
    }

    #[test]
    fn option_requires_a_leg() {
        let err = OptionOrder::builder()
            .symbol("SPY")
            .order_type(OrderType::Market)
            .duration(OrderDuration::Day)
            .build()
            .unwrap_err();
        assert_eq!(err, ValidationError::MissingField { field: "legs" });
    }

    #[test]
    fn option_checks_duration_before_type() {
        let err = OptionOrder::builder().symbol("SPY").build().unwrap_err();
        assert_eq!(err, ValidationError::MissingField { field: "duration" });
    }

    // ========================================================================
    // Combo
    // ========================================================================

    fn combo_with_legs(count: usize) -> Result<ComboOrder, ValidationError> {
        ComboOrder::builder()
            .symbol("SPY")
            .combo_type(ComboType::Market)
            .duration(OrderDuration::Day)
            .legs((0..count).map(|_| leg(OptionSide::BuyToOpen, CALL)))
            .build()
    }

    #[test_case(0, false)]
    #[test_case(1, true)]
    #[test_case(2, true)]
    #[test_case(3, true)]
    #[test_case(4, false)]
    fn combo_leg_count(count: usize, ok: bool) {
        let result = combo_with_legs(count);
        if ok {
            assert_eq!(result.unwrap().legs().len(), count);
        } else {
            assert!(matches!(
                result.unwrap_err(),
                ValidationError::LegCount { actual, .. } if actual == count
            ));
        }
    }

    #[test]
    fn combo_debit_requires_price() {
        let err = ComboOrder::builder()
            .symbol("SPY")
            .combo_type(ComboType::Debit)
            .duration(OrderDuration::Day)
            .leg(leg(OptionSide::BuyToOpen, CALL))
            .build()
            .unwrap_err();
        assert_eq!(err, ValidationError::MissingField { field: "price" });
    }

    // ========================================================================
    // Composites
    // ========================================================================

    #[test]
    fn oto_requires_trigger() {
        let err = OtoOrder::builder()
            .symbol("SPY")
            .duration(OrderDuration::Day)
            .primary(equity().build().unwrap())
            .build()
            .unwrap_err();
        assert_eq!(err, ValidationError::MissingField { field: "trigger" });
    }

    #[test]
    fn oto_rejects_combo_member() {
        let err = OtoOrder::builder()
            .symbol("SPY")
            .duration(OrderDuration::Day)
            .primary(combo_with_legs(1).unwrap())
            .trigger(equity().build().unwrap())
            .build()
            .unwrap_err();
        assert_eq!(
            err,
            ValidationError::UnsupportedMember {
                role: "primary",
                class: OrderClass::Combo,
            }
        );
    }

    #[test]
    fn oco_builds_and_validates() {
        let oco = OcoOrder::builder()
            .symbol("SPY")
            .duration(OrderDuration::Gtc)
            .order(single_leg_option(OrderDuration::Gtc))
            .order(single_leg_option(OrderDuration::Gtc))
            .build()
            .unwrap();
        assert_eq!(oco.orders().len(), 2);
        assert!(oco.validate().is_ok());
    }

    #[test]
    fn otoco_requires_oco() {
        let err = OtocoOrder::builder()
            .symbol("SPY")
            .duration(OrderDuration::Gtc)
            .primary(single_leg_option(OrderDuration::Gtc))
            .build()
            .unwrap_err();
        assert_eq!(err, ValidationError::MissingField { field: "oco" });
    }

    #[test]
    fn oto_member_duration_must_match_order() {
        let err = OtoOrder::builder()
            .symbol("SPY")
            .duration(OrderDuration::Day)
            .primary(single_leg_option(OrderDuration::Gtc))
            .trigger(equity().duration(OrderDuration::Gtc).build().unwrap())
            .build()
            .unwrap_err();
        assert_eq!(
            err,
            ValidationError::DurationMismatch {
                first: OrderDuration::Day,
                second: OrderDuration::Gtc,
            }
        );
    }

    #[test]
    fn oco_member_duration_must_match_order() {
        let err = OcoOrder::builder()
            .symbol("SPY")
            .duration(OrderDuration::Day)
            .order(single_leg_option(OrderDuration::Gtc))
            .order(single_leg_option(OrderDuration::Gtc))
            .build()
            .unwrap_err();
        assert_eq!(
            err,
            ValidationError::DurationMismatch {
                first: OrderDuration::Day,
                second: OrderDuration::Gtc,
            }
        );
    }

    #[test]
    fn otoco_duration_must_match_primary_and_pair() {
        let pair = OcoOrder::builder()
            .symbol("SPY")
            .duration(OrderDuration::Gtc)
            .order(single_leg_option(OrderDuration::Gtc))
            .order(single_leg_option(OrderDuration::Gtc))
            .build()
            .unwrap();

        let err = OtocoOrder::builder()
            .symbol("SPY")
            .duration(OrderDuration::Day)
            .primary(single_leg_option(OrderDuration::Gtc))
            .oco(pair)
            .build()
            .unwrap_err();
        assert_eq!(
            err,
            ValidationError::DurationMismatch {
                first: OrderDuration::Day,
                second: OrderDuration::Gtc,
            }
        );
    }

    #[test]
    fn oco_rejects_tagged_member() {
        let take_profit = equity()
            .order_type(OrderType::Limit)
            .price(dec!(210))
            .tag("exit-a")
            .build()
            .unwrap();
        let stop_loss = equity()
            .order_type(OrderType::Stop)
            .stop(dec!(190))
            .tag("exit-b")
            .build()
            .unwrap();

        let err = OcoOrder::builder()
            .symbol("SPY")
            .duration(OrderDuration::Day)
            .order(take_profit)
            .order(stop_loss)
            .build()
            .unwrap_err();
        assert_eq!(err, ValidationError::TaggedMember { role: "oco member" });
    }

    #[test]
    fn oto_rejects_tagged_trigger() {
        let err = OtoOrder::builder()
            .symbol("SPY")
            .duration(OrderDuration::Day)
            .primary(equity().build().unwrap())
            .trigger(equity().tag("child").build().unwrap())
            .build()
            .unwrap_err();
        assert_eq!(err, ValidationError::TaggedMember { role: "trigger" });
    }

    #[test]
    fn otoco_rejects_tagged_pair() {
        let pair = OcoOrder::builder()
            .symbol("SPY")
            .duration(OrderDuration::Gtc)
            .order(single_leg_option(OrderDuration::Gtc))
            .order(single_leg_option(OrderDuration::Gtc))
            .tag("pair-tag")
            .build()
            .unwrap();

        let err = OtocoOrder::builder()
            .symbol("SPY")
            .duration(OrderDuration::Gtc)
            .primary(single_leg_option(OrderDuration::Gtc))
            .oco(pair)
            .tag("bracket")
            .build()
            .unwrap_err();
        assert_eq!(err, ValidationError::TaggedMember { role: "oco" });
    }
}
