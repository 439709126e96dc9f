//! Trading domain: order model, builders and composite validation.

mod builders;
pub mod errors;
mod order;
mod validation;
pub mod value_objects;

pub use builders::{
    ComboOrderBuilder, EquityOrderBuilder, OcoOrderBuilder, OptionLegBuilder, OptionOrderBuilder,
    OtoOrderBuilder, OtocoOrderBuilder,
};
pub use errors::ValidationError;
pub use order::{
    ComboOrder, EquityOrder, OcoOrder, OptionLeg, OptionOrder, Order, OtoOrder, OtocoOrder,
};
pub use validation::validate_cross_order;
pub use value_objects::*;
