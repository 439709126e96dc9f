// Allow unwrap/expect in tests - tests should panic on unexpected errors
#![cfg_attr(
    test,
    allow(
        clippy::unwrap_used,
        clippy::expect_used,
        clippy::too_many_lines,
        clippy::needless_pass_by_value,
        clippy::items_after_statements
    )
)]

//! Tradier Client - typed order placement for the Tradier brokerage API
//!
//! Builds equity, option, multileg, combo, OTO, OCO and OTOCO orders,
//! validates them, flattens them into Tradier's indexed form fields
//! (`side[0]`, `quantity[0]`, `option_symbol[0]`, ...) and submits them.
//!
//! # Architecture (Hexagonal)
//!
//! - **Domain**: order model and rules
//!   - `trading`: value objects, orders, builders, composite validation
//!
//! - **Encoding**: order → ordered form fields
//!
//! - **Application**: ports
//!   - `ports`: `TradingPort`, `OrderAck`, `OrderPreview`
//!
//! - **Infrastructure**: adapters
//!   - `broker::tradier`: HTTP transport and `TradierTradingAdapter`
//!
//! - **Config** / **Telemetry**: YAML configuration and logging setup
//!
//! # Example
//!
//! ```ignore
//! use rust_decimal_macros::dec;
//! use tradier_client::{encode, OptionLeg, OptionOrder, OptionSide, OrderDuration, OrderType};
//!
//! let order = OptionOrder::builder()
//!     .symbol("SPY")
//!     .order_type(OrderType::Limit)
//!     .duration(OrderDuration::Day)
//!     .price(dec!(1.00))
//!     .leg(OptionLeg::new(OptionSide::BuyToOpen, 1, "SPY140118C00195000")?)
//!     .leg(OptionLeg::new(OptionSide::SellToOpen, 1, "SPY140118C00200000")?)
//!     .build()?;
//!
//! let fields = encode(&order.into())?;
//! assert_eq!(fields.get("class"), Some("multileg"));
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::pedantic)]

/// Domain layer - order model with no transport dependencies.
pub mod domain;

/// Form encoding of orders.
pub mod encoding;

/// Application layer - port definitions.
pub mod application;

/// Infrastructure layer - brokerage adapters.
pub mod infrastructure;

/// Configuration loading.
pub mod config;

/// Logging setup.
pub mod telemetry;

pub use application::ports::{OrderAck, OrderPreview, TradingError, TradingPort};
pub use domain::trading::{
    ComboOrder, ComboType, EquityOrder, EquitySide, OcoOrder, OptionLeg, OptionOrder, OptionSide,
    Order, OrderClass, OrderDuration, OrderTag, OrderType, OtoOrder, OtocoOrder, ValidationError,
};
pub use encoding::{EncodingError, FormFields, encode};
pub use infrastructure::broker::tradier::{
    TradierConfig, TradierEnvironment, TradierError, TradierTradingAdapter,
};
