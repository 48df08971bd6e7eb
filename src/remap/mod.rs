//! Offset tables that remap values and whole interval sets.

mod error;
mod range_map;

pub use error::RangeMapError;
pub use range_map::{RangeMap, Rule};
