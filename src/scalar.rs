//! Numeric bound shared by every interval type in the crate.
//!
//! Intervals work over any primitive integer or float. The bound only asks
//! for what the merge logic actually uses: copying, ordering, `+`/`-`, the
//! `0`/`1` constants and the type's own bounds.

use std::cmp::Ordering;
use std::fmt::Debug;

use num_traits::{Bounded, Num};

/// Ordered arithmetic type usable as an interval bound.
///
/// Blanket-implemented, so `i64`, `u32`, `f64` and friends all qualify.
///
/// ```
/// use rangekit::Scalar;
///
/// fn accepts<K: Scalar>(_: K) {}
/// accepts(3_i64);
/// accepts(3_u8);
/// accepts(3.5_f64);
/// ```
pub trait Scalar: Copy + PartialOrd + Num + Bounded + Debug {}

impl<T> Scalar for T where T: Copy + PartialOrd + Num + Bounded + Debug {}

/// Smaller of two partially ordered values, preferring `a` on ties or NaN.
#[inline]
pub(crate) fn min_of<K: Scalar>(a: K, b: K) -> K {
    if b < a {
        b
    } else {
        a
    }
}

/// Larger of two partially ordered values, preferring `a` on ties or NaN.
#[inline]
pub(crate) fn max_of<K: Scalar>(a: K, b: K) -> K {
    if b > a {
        b
    } else {
        a
    }
}

/// `value + delta`, or `None` when the sum leaves the range of `K`.
///
/// The overflow direction is the sign of `delta`.
#[inline]
pub(crate) fn offset_within<K: Scalar>(value: K, delta: K) -> Option<K> {
    if delta >= K::zero() {
        if value > K::max_value() - delta {
            return None;
        }
    } else if value < K::min_value() - delta {
        return None;
    }
    Some(value + delta)
}

/// `a <= b + delta`, where a sum past the top of `K` always holds and a sum
/// past the bottom never does.
#[inline]
pub(crate) fn le_offset<K: Scalar>(a: K, b: K, delta: K) -> bool {
    match offset_within(b, delta) {
        Some(bound) => a <= bound,
        None => delta >= K::zero(),
    }
}

/// Total-ish comparison used for sorting; incomparable values sort as equal.
#[inline]
pub(crate) fn cmp_scalar<K: Scalar>(a: &K, b: &K) -> Ordering {
    a.partial_cmp(b).unwrap_or(Ordering::Equal)
}
