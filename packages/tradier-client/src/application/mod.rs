//! Application Layer
//!
//! Ports through which callers submit orders without depending on a
//! specific brokerage transport.

pub mod ports;

pub use ports::*;
