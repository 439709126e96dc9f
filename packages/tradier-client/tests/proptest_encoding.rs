//! Property-based tests for order encoding
//!
//! Every field set on a simple order must come back out of the form with an
//! exact string match.

#![allow(clippy::unwrap_used)]

use proptest::prelude::*;
use rust_decimal::Decimal;

use tradier_client::{
    EquityOrder, EquitySide, OptionLeg, OptionOrder, OptionSide, OrderDuration, OrderType, encode,
};

fn equity_side() -> impl Strategy<Value = EquitySide> {
    prop_oneof![
        Just(EquitySide::Buy),
        Just(EquitySide::BuyToCover),
        Just(EquitySide::Sell),
        Just(EquitySide::SellShort),
    ]
}

fn option_side() -> impl Strategy<Value = OptionSide> {
    prop_oneof![
        Just(OptionSide::BuyToOpen),
        Just(OptionSide::BuyToClose),
        Just(OptionSide::SellToOpen),
        Just(OptionSide::SellToClose),
    ]
}

fn order_type() -> impl Strategy<Value = OrderType> {
    prop_oneof![
        Just(OrderType::Market),
        Just(OrderType::Limit),
        Just(OrderType::Stop),
        Just(OrderType::StopLimit),
    ]
}

fn duration() -> impl Strategy<Value = OrderDuration> {
    prop_oneof![
        Just(OrderDuration::Day),
        Just(OrderDuration::Gtc),
        Just(OrderDuration::Pre),
        Just(OrderDuration::Post),
    ]
}

/// Positive price with 0-4 decimal places.
fn price() -> impl Strategy<Value = Decimal> {
    (1i64..10_000_000, 0u32..=4).prop_map(|(units, scale)| Decimal::new(units, scale))
}

proptest! {
    /// Equity orders round-trip through the form field by field.
    #[test]
    fn equity_fields_round_trip(
        symbol in "[A-Z]{1,5}",
        side in equity_side(),
        quantity in 1u64..100_000,
        order_type in order_type(),
        duration in duration(),
        limit in price(),
        stop in price(),
        tag in proptest::option::of("[A-Za-z0-9-]{1,40}"),
    ) {
        let mut builder = EquityOrder::builder()
            .symbol(symbol.clone())
            .side(side)
            .quantity(quantity)
            .order_type(order_type)
            .duration(duration);
        if order_type.requires_price() {
            builder = builder.price(limit);
        }
        if order_type.requires_stop() {
            builder = builder.stop(stop);
        }
        if let Some(tag) = &tag {
            builder = builder.tag(tag.clone());
        }
        let order = builder.build().unwrap();

        let fields = encode(&order.into()).unwrap();

        prop_assert_eq!(fields.get("class"), Some("equity"));
        prop_assert_eq!(fields.get("symbol"), Some(symbol.as_str()));
        prop_assert_eq!(fields.get("side").unwrap().parse::<EquitySide>().unwrap(), side);
        prop_assert_eq!(fields.get("quantity").unwrap().parse::<u64>().unwrap(), quantity);
        prop_assert_eq!(fields.get("type").unwrap().parse::<OrderType>().unwrap(), order_type);
        prop_assert_eq!(fields.get("duration").unwrap().parse::<OrderDuration>().unwrap(), duration);

        let limit_text = limit.to_string();
        let stop_text = stop.to_string();
        let expected_price = order_type.requires_price().then_some(limit_text.as_str());
        let expected_stop = order_type.requires_stop().then_some(stop_text.as_str());
        prop_assert_eq!(fields.get("price"), expected_price);
        prop_assert_eq!(fields.get("stop"), expected_stop);
        prop_assert_eq!(fields.get("tag"), tag.as_deref());
    }

    /// Single-leg option orders round-trip through the form field by field.
    #[test]
    fn single_leg_option_fields_round_trip(
        underlying in "[A-Z]{1,5}",
        expiry in "[0-9]{6}",
        right in prop_oneof![Just('C'), Just('P')],
        strike in 1u32..99_999_999,
        side in option_side(),
        quantity in 1u64..1_000,
        duration in duration(),
        limit in price(),
    ) {
        let option_symbol = format!("{underlying}{expiry}{right}{strike:08}");
        let order = OptionOrder::builder()
            .symbol(underlying.clone())
            .order_type(OrderType::Limit)
            .duration(duration)
            .price(limit)
            .leg(OptionLeg::new(side, quantity, option_symbol.clone()).unwrap())
            .build()
            .unwrap();

        let fields = encode(&order.into()).unwrap();

        prop_assert_eq!(fields.get("class"), Some("option"));
        prop_assert_eq!(fields.get("symbol"), Some(underlying.as_str()));
        prop_assert_eq!(fields.get("option_symbol"), Some(option_symbol.as_str()));
        prop_assert_eq!(fields.get("side").unwrap().parse::<OptionSide>().unwrap(), side);
        prop_assert_eq!(fields.get("quantity").unwrap().parse::<u64>().unwrap(), quantity);
        prop_assert_eq!(fields.get("duration").unwrap().parse::<OrderDuration>().unwrap(), duration);
        let limit_text = limit.to_string();
        prop_assert_eq!(fields.get("price"), Some(limit_text.as_str()));
        prop_assert_eq!(fields.len(), 8);
    }

    /// Multileg legs keep their declaration index.
    #[test]
    fn multileg_leg_indices_follow_declaration(
        sides in prop::collection::vec(option_side(), 2..6),
    ) {
        let legs: Vec<OptionLeg> = sides
            .iter()
            .enumerate()
            .map(|(i, side)| OptionLeg::new(*side, 1, format!("SPY140118C{:08}", (i + 1) * 1000)).unwrap())
            .collect();
        let order = OptionOrder::builder()
            .symbol("SPY")
            .order_type(OrderType::Market)
            .duration(OrderDuration::Day)
            .legs(legs)
            .build()
            .unwrap();

        let fields = encode(&order.into()).unwrap();

        for (i, side) in sides.iter().enumerate() {
            prop_assert_eq!(fields.get(&format!("side[{i}]")), Some(side.as_str()));
            let symbol = format!("SPY140118C{:08}", (i + 1) * 1000);
            prop_assert_eq!(fields.get(&format!("option_symbol[{i}]")), Some(symbol.as_str()));
        }
        let past_end = format!("side[{}]", sides.len());
        prop_assert!(!fields.contains(&past_end));
    }
}
