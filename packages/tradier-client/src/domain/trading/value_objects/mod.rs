//! Trading value objects.
//!
//! Every enum here renders to the exact lowercase token the brokerage expects
//! on the wire and parses back from it.

mod combo_type;
mod order_class;
mod order_duration;
mod order_type;
mod side;
mod tag;

pub use combo_type::ComboType;
pub use order_class::OrderClass;
pub use order_duration::OrderDuration;
pub use order_type::OrderType;
pub use side::{EquitySide, OptionSide};
pub use tag::{MAX_TAG_LEN, OrderTag};
