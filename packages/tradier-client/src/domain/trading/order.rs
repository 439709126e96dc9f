//! Order model.
//!
//! Orders are immutable once built. Fields are private and only the builders
//! in this module tree can assemble them, so every value reaching the encoder
//! has passed the construction checks.

use rust_decimal::Decimal;
use serde::Serialize;

use super::value_objects::{
    ComboType, EquitySide, OptionSide, OrderClass, OrderDuration, OrderTag, OrderType,
};

/// A single equity order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct EquityOrder {
    pub(super) symbol: String,
    pub(super) side: EquitySide,
    pub(super) quantity: u64,
    pub(super) order_type: OrderType,
    pub(super) duration: OrderDuration,
    pub(super) price: Option<Decimal>,
    pub(super) stop: Option<Decimal>,
    pub(super) tag: Option<OrderTag>,
}

impl EquityOrder {
    /// Underlying symbol.
    #[must_use]
    pub fn symbol(&self) -> &str {
        &self.symbol
    }

    /// Order side.
    #[must_use]
    pub const fn side(&self) -> EquitySide {
        self.side
    }

    /// Share quantity.
    #[must_use]
    pub const fn quantity(&self) -> u64 {
        self.quantity
    }

    /// Order type.
    #[must_use]
    pub const fn order_type(&self) -> OrderType {
        self.order_type
    }

    /// Time in force.
    #[must_use]
    pub const fn duration(&self) -> OrderDuration {
        self.duration
    }

    /// Limit price.
    #[must_use]
    pub const fn price(&self) -> Option<Decimal> {
        self.price
    }

    /// Stop price.
    #[must_use]
    pub const fn stop(&self) -> Option<Decimal> {
        self.stop
    }

    /// Order tag.
    #[must_use]
    pub const fn tag(&self) -> Option<&OrderTag> {
        self.tag.as_ref()
    }
}

/// One option contract within an option or combo order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct OptionLeg {
    pub(super) side: OptionSide,
    pub(super) quantity: u64,
    pub(super) option_symbol: String,
}

impl OptionLeg {
    /// Leg side.
    #[must_use]
    pub const fn side(&self) -> OptionSide {
        self.side
    }

    /// Contract quantity.
    #[must_use]
    pub const fn quantity(&self) -> u64 {
        self.quantity
    }

    /// OCC option symbol.
    #[must_use]
    pub fn option_symbol(&self) -> &str {
        &self.option_symbol
    }
}

/// Option order with one leg (single-leg) or several (multileg).
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct OptionOrder {
    pub(super) symbol: String,
    pub(super) order_type: OrderType,
    pub(super) duration: OrderDuration,
    pub(super) price: Option<Decimal>,
    pub(super) stop: Option<Decimal>,
    pub(super) legs: Vec<OptionLeg>,
    pub(super) tag: Option<OrderTag>,
}

impl OptionOrder {
    /// Underlying symbol.
    #[must_use]
    pub fn symbol(&self) -> &str {
        &self.symbol
    }

    /// Order type.
    #[must_use]
    pub const fn order_type(&self) -> OrderType {
        self.order_type
    }

    /// Time in force.
    #[must_use]
    pub const fn duration(&self) -> OrderDuration {
        self.duration
    }

    /// Limit price (net price for multileg).
    #[must_use]
    pub const fn price(&self) -> Option<Decimal> {
        self.price
    }

    /// Stop price.
    #[must_use]
    pub const fn stop(&self) -> Option<Decimal> {
        self.stop
    }

    /// Legs in declaration order.
    #[must_use]
    pub fn legs(&self) -> &[OptionLeg] {
        &self.legs
    }

    /// First leg. Always present on a built order.
    #[must_use]
    pub fn first_leg(&self) -> Option<&OptionLeg> {
        self.legs.first()
    }

    /// Returns true for a single-leg order.
    #[must_use]
    pub fn is_single_leg(&self) -> bool {
        self.legs.len() == 1
    }

    /// `option` for a single leg, `multileg` otherwise.
    #[must_use]
    pub fn class(&self) -> OrderClass {
        if self.is_single_leg() {
            OrderClass::Option
        } else {
            OrderClass::Multileg
        }
    }

    /// Order tag.
    #[must_use]
    pub const fn tag(&self) -> Option<&OrderTag> {
        self.tag.as_ref()
    }
}

/// Equity position combined with one to three option legs.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ComboOrder {
    pub(super) symbol: String,
    pub(super) combo_type: ComboType,
    pub(super) duration: OrderDuration,
    pub(super) price: Option<Decimal>,
    pub(super) legs: Vec<OptionLeg>,
    pub(super) tag: Option<OrderTag>,
}

impl ComboOrder {
    /// Maximum option legs on a combo order.
    pub const MAX_LEGS: usize = 3;

    /// Underlying symbol.
    #[must_use]
    pub fn symbol(&self) -> &str {
        &self.symbol
    }

    /// Net pricing type.
    #[must_use]
    pub const fn combo_type(&self) -> ComboType {
        self.combo_type
    }

    /// Time in force.
    #[must_use]
    pub const fn duration(&self) -> OrderDuration {
        self.duration
    }

    /// Net price.
    #[must_use]
    pub const fn price(&self) -> Option<Decimal> {
        self.price
    }

    /// Option legs in declaration order.
    #[must_use]
    pub fn legs(&self) -> &[OptionLeg] {
        &self.legs
    }

    /// Order tag.
    #[must_use]
    pub const fn tag(&self) -> Option<&OrderTag> {
        self.tag.as_ref()
    }
}

/// One-triggers-other: `trigger` is released once `primary` fills.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct OtoOrder {
    pub(super) symbol: String,
    pub(super) duration: OrderDuration,
    pub(super) primary: Box<Order>,
    pub(super) trigger: Box<Order>,
    pub(super) tag: Option<OrderTag>,
}

impl OtoOrder {
    /// Symbol.
    #[must_use]
    pub fn symbol(&self) -> &str {
        &self.symbol
    }

    /// Time in force.
    #[must_use]
    pub const fn duration(&self) -> OrderDuration {
        self.duration
    }

    /// Order that must fill first.
    #[must_use]
    pub fn primary(&self) -> &Order {
        &self.primary
    }

    /// Order released after the primary fills.
    #[must_use]
    pub fn trigger(&self) -> &Order {
        &self.trigger
    }

    /// Order tag.
    #[must_use]
    pub const fn tag(&self) -> Option<&OrderTag> {
        self.tag.as_ref()
    }
}

/// One-cancels-other: a fill on either member cancels the other.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct OcoOrder {
    pub(super) symbol: String,
    pub(super) duration: OrderDuration,
    pub(super) orders: Vec<Order>,
    pub(super) tag: Option<OrderTag>,
}

impl OcoOrder {
    /// Number of member orders.
    pub const MEMBERS: usize = 2;

    /// Symbol.
    #[must_use]
    pub fn symbol(&self) -> &str {
        &self.symbol
    }

    /// Time in force.
    #[must_use]
    pub const fn duration(&self) -> OrderDuration {
        self.duration
    }

    /// Member orders in declaration order.
    #[must_use]
    pub fn orders(&self) -> &[Order] {
        &self.orders
    }

    /// Order tag.
    #[must_use]
    pub const fn tag(&self) -> Option<&OrderTag> {
        self.tag.as_ref()
    }
}

/// One-triggers-one-cancels-other: `primary` releases the OCO pair.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct OtocoOrder {
    pub(super) symbol: String,
    pub(super) duration: OrderDuration,
    pub(super) primary: Box<Order>,
    pub(super) oco: OcoOrder,
    pub(super) tag: Option<OrderTag>,
}

impl OtocoOrder {
    /// Symbol.
    #[must_use]
    pub fn symbol(&self) -> &str {
        &self.symbol
    }

    /// Time in force.
    #[must_use]
    pub const fn duration(&self) -> OrderDuration {
        self.duration
    }

    /// Order that must fill first.
    #[must_use]
    pub fn primary(&self) -> &Order {
        &self.primary
    }

    /// Pair released after the primary fills.
    #[must_use]
    pub const fn oco(&self) -> &OcoOrder {
        &self.oco
    }

    /// Order tag.
    #[must_use]
    pub const fn tag(&self) -> Option<&OrderTag> {
        self.tag.as_ref()
    }
}

/// Any order accepted by the brokerage.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Order {
    /// Equity order.
    Equity(EquityOrder),
    /// Single-leg or multileg option order.
    Option(OptionOrder),
    /// Combo order.
    Combo(ComboOrder),
    /// One-triggers-other.
    Oto(OtoOrder),
    /// One-cancels-other.
    Oco(OcoOrder),
    /// One-triggers-one-cancels-other.
    Otoco(OtocoOrder),
}

impl Order {
    /// Wire class of the order.
    #[must_use]
    pub fn class(&self) -> OrderClass {
        match self {
            Self::Equity(_) => OrderClass::Equity,
            Self::Option(order) => order.class(),
            Self::Combo(_) => OrderClass::Combo,
            Self::Oto(_) => OrderClass::Oto,
            Self::Oco(_) => OrderClass::Oco,
            Self::Otoco(_) => OrderClass::Otoco,
        }
    }

    /// Symbol.
    #[must_use]
    pub fn symbol(&self) -> &str {
        match self {
            Self::Equity(order) => order.symbol(),
            Self::Option(order) => order.symbol(),
            Self::Combo(order) => order.symbol(),
            Self::Oto(order) => order.symbol(),
            Self::Oco(order) => order.symbol(),
            Self::Otoco(order) => order.symbol(),
        }
    }

    /// Time in force.
    #[must_use]
    pub const fn duration(&self) -> OrderDuration {
        match self {
            Self::Equity(order) => order.duration(),
            Self::Option(order) => order.duration(),
            Self::Combo(order) => order.duration(),
            Self::Oto(order) => order.duration(),
            Self::Oco(order) => order.duration(),
            Self::Otoco(order) => order.duration(),
        }
    }

    /// Order tag.
    #[must_use]
    pub const fn tag(&self) -> Option<&OrderTag> {
        match self {
            Self::Equity(order) => order.tag(),
            Self::Option(order) => order.tag(),
            Self::Combo(order) => order.tag(),
            Self::Oto(order) => order.tag(),
            Self::Oco(order) => order.tag(),
            Self::Otoco(order) => order.tag(),
        }
    }

    /// Returns true for orders made of other orders.
    #[must_use]
    pub fn is_composite(&self) -> bool {
        self.class().is_composite()
    }
}

impl From<EquityOrder> for Order {
    fn from(order: EquityOrder) -> Self {
        Self::Equity(order)
    }
}

impl From<OptionOrder> for Order {
    fn from(order: OptionOrder) -> Self {
        Self::Option(order)
    }
}

impl From<ComboOrder> for Order {
    fn from(order: ComboOrder) -> Self {
        Self::Combo(order)
    }
}

impl From<OtoOrder> for Order {
    fn from(order: OtoOrder) -> Self {
        Self::Oto(order)
    }
}

impl From<OcoOrder> for Order {
    fn from(order: OcoOrder) -> Self {
        Self::Oco(order)
    }
}

impl From<OtocoOrder> for Order {
    fn from(order: OtocoOrder) -> Self {
        Self::Otoco(order)
    }
}
