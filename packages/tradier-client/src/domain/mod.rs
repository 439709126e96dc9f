//! Domain layer.

pub mod trading;
