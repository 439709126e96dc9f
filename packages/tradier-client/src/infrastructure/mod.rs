//! Infrastructure Layer
//!
//! Adapters implementing the ports defined in the application layer.
//!
//! - `broker/`: Brokerage API adapters (Tradier)

pub mod broker;
