//! Closed numeric intervals and the disjoint set built from them.
//!
//! [`Interval`] is a plain `Copy` value; every operation returns a new one.
//! [`IntervalSet`] keeps its members pairwise disjoint and non-adjacent by
//! coalescing on insert.

mod error;
#[allow(clippy::module_inception)]
mod interval;
mod interval_set;


pub use error::IntervalError;
pub use interval::{Interval, SplitSide};
pub use interval_set::IntervalSet;
