//! Application Ports
//!
//! Driven ports implemented by infrastructure adapters.

mod trading_port;

pub use trading_port::{OrderAck, OrderPreview, TradingError, TradingPort};
