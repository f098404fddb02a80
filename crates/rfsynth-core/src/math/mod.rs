//! Mathematical building blocks
//!
//! - `abcd` - complex 2x2 chain matrix
//! - `conversions` - scalar magnitude/dB/angle conversions

pub mod abcd;
pub mod conversions;

pub use abcd::Abcd;
