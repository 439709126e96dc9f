//! Form encoder.
//!
//! Flattens an [`Order`] into the ordered, possibly duplicated field list
//! the brokerage expects. Legs and composite members are written with
//! positional suffixes (`side[0]`, `quantity[1]`, ...).

use rust_decimal::Decimal;

use super::error::EncodingError;
use crate::domain::trading::{
    ComboOrder, EquityOrder, OcoOrder, OptionLeg, OptionOrder, Order, OrderClass, OrderTag,
    OtoOrder, OtocoOrder,
};

/// Ordered form fields. Duplicate names are kept.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FormFields {
    fields: Vec<(String, String)>,
}

impl FormFields {
    /// Create an empty field list.
    #[must_use]
    pub const fn new() -> Self {
        Self { fields: Vec::new() }
    }

    /// Append a field.
    pub fn push(&mut self, name: impl Into<String>, value: impl Into<String>) {
        self.fields.push((name.into(), value.into()));
    }

    /// First value written under `name`.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&str> {
        self.fields
            .iter()
            .find(|(n, _)| n == name)
            .map(|(_, v)| v.as_str())
    }

    /// Every value written under `name`, in write order.
    #[must_use]
    pub fn get_all(&self, name: &str) -> Vec<&str> {
        self.fields
            .iter()
            .filter(|(n, _)| n == name)
            .map(|(_, v)| v.as_str())
            .collect()
    }

    /// Returns true if a field named `name` was written.
    #[must_use]
    pub fn contains(&self, name: &str) -> bool {
        self.fields.iter().any(|(n, _)| n == name)
    }

    /// Iterate over `(name, value)` pairs.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.fields.iter().map(|(n, v)| (n.as_str(), v.as_str()))
    }

    /// Number of fields.
    #[must_use]
    pub fn len(&self) -> usize {
        self.fields.len()
    }

    /// Returns true if no field was written.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    /// Raw pairs, suitable for `reqwest::RequestBuilder::form`.
    #[must_use]
    pub fn as_pairs(&self) -> &[(String, String)] {
        &self.fields
    }

    /// Render as an `application/x-www-form-urlencoded` body.
    ///
    /// # Errors
    ///
    /// Returns an error if serialization fails.
    pub fn to_urlencoded(&self) -> Result<String, EncodingError> {
        Ok(serde_urlencoded::to_string(&self.fields)?)
    }
}

impl<'a> IntoIterator for &'a FormFields {
    type Item = &'a (String, String);
    type IntoIter = std::slice::Iter<'a, (String, String)>;

    fn into_iter(self) -> Self::IntoIter {
        self.fields.iter()
    }
}

/// Encode an order into form fields.
///
/// # Errors
///
/// Returns an error when a composite member has no indexed encoding.
pub fn encode(order: &Order) -> Result<FormFields, EncodingError> {
    let mut writer = FieldWriter::default();
    match order {
        Order::Equity(equity) => writer.top_level_equity(equity),
        Order::Option(option) => writer.top_level_option(option),
        Order::Combo(combo) => writer.combo(combo),
        Order::Oto(oto) => writer.oto(oto)?,
        Order::Oco(oco) => writer.oco(oco)?,
        Order::Otoco(otoco) => writer.otoco(otoco)?,
    }

    tracing::debug!(
        class = %order.class(),
        composite = order.is_composite(),
        symbol = order.symbol(),
        fields = writer.fields.len(),
        "Encoded order"
    );

    Ok(writer.fields)
}

fn key(name: &str, idx: Option<usize>) -> String {
    match idx {
        Some(i) => format!("{name}[{i}]"),
        None => name.to_string(),
    }
}

#[derive(Default)]
struct FieldWriter {
    fields: FormFields,
}

impl FieldWriter {
    fn put(&mut self, name: &str, idx: Option<usize>, value: impl ToString) {
        self.fields.push(key(name, idx), value.to_string());
    }

    fn put_decimal(&mut self, name: &str, idx: Option<usize>, value: Option<Decimal>) {
        if let Some(v) = value {
            self.put(name, idx, v);
        }
    }

    fn put_tag(&mut self, tag: Option<&OrderTag>) {
        if let Some(tag) = tag {
            self.put("tag", None, tag);
        }
    }

    fn put_legs(&mut self, legs: &[OptionLeg]) {
        for (i, leg) in legs.iter().enumerate() {
            self.put("side", Some(i), leg.side());
            self.put("quantity", Some(i), leg.quantity());
            self.put("option_symbol", Some(i), leg.option_symbol());
        }
    }

    fn equity_fields(&mut self, order: &EquityOrder, idx: Option<usize>) {
        self.put("symbol", idx, order.symbol());
        self.put("side", idx, order.side());
        self.put("quantity", idx, order.quantity());
        self.put("type", idx, order.order_type());
        self.put("duration", idx, order.duration());
        self.put_decimal("price", idx, order.price());
        self.put_decimal("stop", idx, order.stop());
    }

    fn single_leg_fields(&mut self, order: &OptionOrder, leg: &OptionLeg, idx: Option<usize>) {
        self.put("symbol", idx, order.symbol());
        self.put("type", idx, order.order_type());
        self.put("duration", idx, order.duration());
        self.put("option_symbol", idx, leg.option_symbol());
        self.put("side", idx, leg.side());
        self.put("quantity", idx, leg.quantity());
        self.put_decimal("price", idx, order.price());
        self.put_decimal("stop", idx, order.stop());
    }

    fn top_level_equity(&mut self, order: &EquityOrder) {
        self.put("class", None, OrderClass::Equity);
        self.equity_fields(order, None);
        self.put_tag(order.tag());
    }

    fn top_level_option(&mut self, order: &OptionOrder) {
        self.put("class", None, order.class());
        match order.legs() {
            [leg] => self.single_leg_fields(order, leg, None),
            legs => {
                self.put("symbol", None, order.symbol());
                self.put("type", None, order.order_type());
                self.put("duration", None, order.duration());
                self.put_decimal("price", None, order.price());
                self.put_decimal("stop", None, order.stop());
                self.put_legs(legs);
            }
        }
        self.put_tag(order.tag());
    }

    fn combo(&mut self, order: &ComboOrder) {
        self.put("class", None, OrderClass::Combo);
        self.put("symbol", None, order.symbol());
        self.put("type", None, order.combo_type());
        self.put("duration", None, order.duration());
        self.put_decimal("price", None, order.price());
        self.put_legs(order.legs());
        self.put_tag(order.tag());
    }

    /// Member of a composite order: no class, no tag.
    fn member(&mut self, order: &Order, idx: Option<usize>) -> Result<(), EncodingError> {
        match order {
            Order::Equity(equity) => {
                self.equity_fields(equity, idx);
                Ok(())
            }
            Order::Option(option) => match option.legs() {
                [leg] => {
                    self.single_leg_fields(option, leg, idx);
                    Ok(())
                }
                legs => Err(EncodingError::MultilegMember { legs: legs.len() }),
            },
            other => Err(EncodingError::UnsupportedMember {
                class: other.class(),
            }),
        }
    }

    fn oto(&mut self, order: &OtoOrder) -> Result<(), EncodingError> {
        self.put("class", None, OrderClass::Oto);
        self.put("duration", None, order.duration());
        self.member(order.primary(), Some(0))?;
        self.member(order.trigger(), Some(1))?;
        self.put_tag(order.tag());
        Ok(())
    }

    fn oco(&mut self, order: &OcoOrder) -> Result<(), EncodingError> {
        self.put("class", None, OrderClass::Oco);
        self.put("duration", None, order.duration());
        for (i, member) in order.orders().iter().enumerate() {
            self.member(member, Some(i))?;
        }
        self.put_tag(order.tag());
        Ok(())
    }

    fn otoco(&mut self, order: &OtocoOrder) -> Result<(), EncodingError> {
        self.put("class", None, OrderClass::Otoco);
        self.put("duration", None, order.duration());
        self.member(order.primary(), None)?;
        for (i, member) in order.oco().orders().iter().enumerate() {
            self.member(member, Some(i))?;
        }
        self.put_tag(order.tag());
        Ok(())
    }
}
