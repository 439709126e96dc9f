//! Order form encoding.

mod error;
mod form;

pub use error::EncodingError;
pub use form::{FormFields, encode};
