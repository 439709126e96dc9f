//! Tradier Broker Adapter
//!
//! Implementation of `TradingPort` for the Tradier brokerage REST API:
//! - Form-encoded order placement and preview
//! - Bearer token authentication
//! - Environment-aware safety logging (SANDBOX vs LIVE)

mod adapter;
mod api_types;
mod config;
mod error;
mod http_client;

pub use adapter::TradierTradingAdapter;
pub use config::{TradierConfig, TradierEnvironment};
pub use error::TradierError;
pub use http_client::TradierHttpClient;
