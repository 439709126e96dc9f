//! Broker Adapters
//!
//! Implementations of `TradingPort` for brokerages.

pub mod tradier;

pub use tradier::{TradierConfig, TradierEnvironment, TradierError, TradierTradingAdapter};
