//! rangekit - closed numeric intervals, coalescing interval sets and range
//! remapping tables.
//!
//! Everything is generic over a [`Scalar`] bound, so the same types work for
//! signed or unsigned integers and for floats.

pub mod interval;
pub mod remap;
pub mod scalar;

// Re-export the core types for ergonomic use
pub use interval::{Interval, IntervalError, IntervalSet, SplitSide};
pub use remap::{RangeMap, RangeMapError, Rule};
pub use scalar::Scalar;
