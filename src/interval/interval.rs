//! Closed numeric range `[min, max]`.

use std::fmt::Display;
use std::str::FromStr;

use super::error::IntervalError;
use crate::scalar::{le_offset, max_of, min_of, offset_within, Scalar};

/// Closed range `[min, max]` over an ordered numeric type.
///
/// An interval with `min > max` is *empty*. Such values show up transiently
/// (e.g. from [`Interval::new`] with inverted bounds) but operations that
/// can produce nothing return `Option` instead.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Interval<K: Scalar> {
    min: K,
    max: K,
}

/// Which piece of a [`split`](Interval::split) receives the split value.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SplitSide {
    /// `[min, value]` and `[value + 1, max]`.
    Left,
    /// `[min, value - 1]` and `[value, max]`.
    Right,
}

impl<K: Scalar> Interval<K> {
    /// Creates interval `[min, max]` without validating the bounds.
    pub const fn new(min: K, max: K) -> Self {
        Self { min, max }
    }

    /// Creates interval `[min, max]`, rejecting inverted bounds.
    pub fn try_new(min: K, max: K) -> Result<Self, IntervalError> {
        if min > max {
            return Err(IntervalError::Inverted {
                min: format!("{:?}", min),
                max: format!("{:?}", max),
            });
        }
        Ok(Self { min, max })
    }

    /// Single-value interval `[value, value]`.
    pub const fn point(value: K) -> Self {
        Self {
            min: value,
            max: value,
        }
    }

    pub const fn min(&self) -> K {
        self.min
    }

    pub const fn max(&self) -> K {
        self.max
    }

    pub fn is_empty(&self) -> bool {
        self.min > self.max
    }

    /// Number of values covered, `max - min + 1`. Zero when empty.
    pub fn length(&self) -> K {
        if self.is_empty() {
            K::zero()
        } else {
            self.max - self.min + K::one()
        }
    }

    /// Bounding union of both intervals. Does not check that they touch.
    pub fn merge(&self, other: &Interval<K>) -> Interval<K> {
        Interval::new(min_of(self.min, other.min), max_of(self.max, other.max))
    }

    /// Bounding union with a single value.
    pub fn merge_point(&self, value: K) -> Interval<K> {
        self.merge(&Interval::point(value))
    }

    pub fn shift(&self, delta: K) -> Interval<K> {
        Interval::new(self.min + delta, self.max + delta)
    }

    /// Returns true if `other` lies within `tolerance` of this interval.
    ///
    /// The test is `max(self.min - tolerance, other.min) <= min(self.max +
    /// tolerance, other.max)`: only `self` is widened. It is evaluated as the
    /// four pairwise bound comparisons, and a bound pushed past the range of
    /// `K` by the tolerance counts as reaching, so nothing overflows.
    ///
    /// ```
    /// use rangekit::Interval;
    ///
    /// let a = Interval::new(1, 3);
    /// assert!(a.touches(&Interval::new(6, 8), 3));
    /// assert!(!a.touches(&Interval::new(6, 8), 2));
    /// // adjacency needs a tolerance of one
    /// assert!(!a.touches(&Interval::new(4, 8), 0));
    /// ```
    pub fn touches(&self, other: &Interval<K>, tolerance: K) -> bool {
        let self_reaches = match offset_within(self.max, tolerance) {
            Some(widened) => le_offset(self.min, widened, tolerance),
            None => tolerance >= K::zero(),
        };
        self_reaches
            && le_offset(self.min, other.max, tolerance)
            && le_offset(other.min, self.max, tolerance)
            && other.min <= other.max
    }

    /// Checks if this interval shares at least one value with `other`.
    pub fn overlaps(&self, other: &Interval<K>) -> bool {
        self.touches(other, K::zero())
    }

    pub fn intersection(&self, other: &Interval<K>) -> Option<Interval<K>> {
        let common = Interval::new(max_of(self.min, other.min), min_of(self.max, other.max));
        if common.is_empty() {
            None
        } else {
            Some(common)
        }
    }

    /// Cuts the interval in two around `value`.
    ///
    /// Empty pieces come back as `None`. When `value` is outside the
    /// interval nothing is cut and the whole interval is returned on the left.
    ///
    /// ```
    /// use rangekit::{Interval, SplitSide};
    ///
    /// let (left, right) = Interval::new(3, 7).split(5, SplitSide::Left);
    /// assert_eq!(left, Some(Interval::new(3, 5)));
    /// assert_eq!(right, Some(Interval::new(6, 7)));
    /// ```
    pub fn split(&self, value: K, side: SplitSide) -> (Option<Interval<K>>, Option<Interval<K>>) {
        if !self.contains(value) {
            return (Some(*self), None);
        }
        match side {
            SplitSide::Left => {
                let right = if value < self.max {
                    Some(Interval::new(value + K::one(), self.max))
                } else {
                    None
                };
                (Some(Interval::new(self.min, value)), right)
            }
            SplitSide::Right => {
                let left = if value > self.min {
                    Some(Interval::new(self.min, value - K::one()))
                } else {
                    None
                };
                (left, Some(Interval::new(value, self.max)))
            }
        }
    }

    /// Returns true if `value` ∈ `[min, max]`.
    pub fn contains(&self, value: K) -> bool {
        self.min <= value && value <= self.max
    }

    /// Returns true if `other` lies entirely inside this interval.
    pub fn contains_interval(&self, other: &Interval<K>) -> bool {
        self.min <= other.min && other.max <= self.max
    }
}

impl<K: Scalar + Display> Display for Interval<K> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "[{}, {}]", self.min, self.max)
    }
}

/// Parses `"a-b"`. Either bound may carry a leading minus sign, so
/// `"-3--1"` is `[-3, -1]`.
impl<K: Scalar + FromStr> FromStr for Interval<K> {
    type Err = IntervalError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let text = s.trim();
        let separator = text
            .char_indices()
            .skip(1)
            .find(|&(_, c)| c == '-')
            .map(|(i, _)| i)
            .ok_or_else(|| IntervalError::MissingSeparator(text.to_string()))?;

        let parse_bound = |raw: &str| {
            let raw = raw.trim();
            raw.parse::<K>()
                .map_err(|_| IntervalError::Bound(raw.to_string()))
        };
        let min = parse_bound(&text[..separator])?;
        let max = parse_bound(&text[separator + 1..])?;
        Interval::try_new(min, max)
    }
}
