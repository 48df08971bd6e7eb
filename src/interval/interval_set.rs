//! An unordered container of disjoint, non-adjacent intervals.
//!
//! [`IntervalSet`] wraps a `Vec<Interval<K>>` and keeps the **disjoint
//! invariant**: no two members overlap or sit next to each other. Touching
//! intervals are coalesced at insertion time, so the only way in is
//! [`insert`](IntervalSet::insert) and its variants.
//!
//! Member order is not part of the contract. Merging removes members with a
//! swap-remove, so enumeration order changes as the set grows; use
//! [`sorted`](IntervalSet::sorted) when order matters.

use std::fmt::Display;
use std::ops::Deref;

use super::interval::Interval;
use crate::scalar::{cmp_scalar, max_of, Scalar};

/// A set of pairwise disjoint, non-adjacent closed intervals.
///
/// # Performance
///
/// Insertion scans every member and may cascade through a chain of touching
/// intervals: O(n) per insert, O(n²) for n inserts. Workloads are expected to
/// stay in the hundreds of members.
///
/// # Example
///
/// ```
/// use rangekit::{Interval, IntervalSet};
///
/// let mut covered = IntervalSet::new();
/// covered.insert(Interval::new(1, 3));
/// covered.insert(Interval::new(4, 7));
/// covered.insert(Interval::new(10, 12));
///
/// assert_eq!(covered.len(), 2);
/// assert_eq!(covered.total_length(), 10);
/// assert_eq!(covered.gaps(Interval::new(0, 12)), vec![Interval::new(0, 0), Interval::new(8, 9)]);
/// ```
#[derive(Debug, Clone)]
pub struct IntervalSet<K: Scalar>(Vec<Interval<K>>);

// ─────────────────────────────────────────────────────────────────────
// Constructors
// ─────────────────────────────────────────────────────────────────────

impl<K: Scalar> IntervalSet<K> {
    /// Creates an empty interval set.
    pub fn new() -> Self {
        Self(Vec::new())
    }

    /// Creates an empty interval set with pre-allocated capacity.
    pub fn with_capacity(capacity: usize) -> Self {
        Self(Vec::with_capacity(capacity))
    }
}

// ─────────────────────────────────────────────────────────────────────
// Mutation methods
// ─────────────────────────────────────────────────────────────────────

impl<K: Scalar> IntervalSet<K> {
    /// Inserts an interval, coalescing it with every member it overlaps or
    /// sits next to.
    pub fn insert(&mut self, interval: Interval<K>) {
        self.insert_with_tolerance(interval, K::zero());
    }

    /// Inserts an interval, also coalescing members separated from it by at
    /// most `tolerance` missing values.
    ///
    /// The tolerance only applies to this call. Members merged with a
    /// tolerance may leave gaps that a later plain `insert` will not close.
    /// A negative tolerance is treated as zero.
    ///
    /// Empty intervals are ignored.
    pub fn insert_with_tolerance(&mut self, interval: Interval<K>, tolerance: K) {
        if interval.is_empty() {
            log::debug!("ignoring empty interval {:?}", interval);
            return;
        }

        // Adjacent members are one unit apart, hence the extra unit.
        let reach = max_of(tolerance, K::zero()) + K::one();
        let mut pending = interval;
        while let Some(index) = self.0.iter().position(|e| e.touches(&pending, reach)) {
            let existing = self.0.swap_remove(index);
            log::trace!("merging {:?} into {:?}", existing, pending);
            pending = pending.merge(&existing);
        }
        self.0.push(pending);
    }

    /// Inserts the single value `[value, value]`.
    pub fn insert_point(&mut self, value: K) {
        self.insert(Interval::point(value));
    }

    pub fn insert_point_with_tolerance(&mut self, value: K, tolerance: K) {
        self.insert_with_tolerance(Interval::point(value), tolerance);
    }

    /// Removes all intervals.
    pub fn clear(&mut self) {
        self.0.clear();
    }

    /// Consumes the set and returns the underlying `Vec`.
    pub fn into_inner(self) -> Vec<Interval<K>> {
        self.0
    }
}

// ─────────────────────────────────────────────────────────────────────
// Queries
// ─────────────────────────────────────────────────────────────────────

impl<K: Scalar> IntervalSet<K> {
    /// Current members, in no particular order.
    pub fn values(&self) -> &[Interval<K>] {
        &self.0
    }

    /// Members sorted by their lower bound.
    pub fn sorted(&self) -> Vec<Interval<K>> {
        let mut sorted = self.0.clone();
        sorted.sort_by(|a, b| cmp_scalar(&a.min(), &b.min()));
        sorted
    }

    /// Sum of the member lengths.
    pub fn total_length(&self) -> K {
        self.0
            .iter()
            .fold(K::zero(), |total, interval| total + interval.length())
    }

    /// Returns true if any member holds `value`.
    pub fn contains(&self, value: K) -> bool {
        self.0.iter().any(|interval| interval.contains(value))
    }

    /// Returns true if a single member covers all of `interval`.
    pub fn contains_interval(&self, interval: &Interval<K>) -> bool {
        self.0.iter().any(|member| member.contains_interval(interval))
    }

    /// Smallest interval covering every member.
    pub fn bounds(&self) -> Option<Interval<K>> {
        self.0.iter().copied().reduce(|acc, interval| acc.merge(&interval))
    }

    /// Parts of `within` not covered by any member, in ascending order.
    ///
    /// Gaps are measured in whole units: each gap starts one unit after a
    /// member and ends one unit before the next, so on float sets a gap
    /// narrower than `1` between two members is not reported.
    pub fn gaps(&self, within: Interval<K>) -> Vec<Interval<K>> {
        let mut result = Vec::new();
        if within.is_empty() {
            return result;
        }

        let mut cursor = within.min();
        for member in self.sorted() {
            if member.max() < cursor {
                continue;
            }
            if member.min() > within.max() {
                break;
            }
            if member.min() > cursor {
                result.push(Interval::new(cursor, member.min() - K::one()));
            }
            if member.max() >= within.max() {
                return result;
            }
            cursor = member.max() + K::one();
        }

        result.push(Interval::new(cursor, within.max()));
        result
    }

    /// Members restricted to `bounds`; members outside it are dropped.
    pub fn clipped(&self, bounds: Interval<K>) -> IntervalSet<K> {
        Self(
            self.0
                .iter()
                .filter_map(|member| member.intersection(&bounds))
                .collect(),
        )
    }
}

// ─────────────────────────────────────────────────────────────────────
// Transparent read access
// ─────────────────────────────────────────────────────────────────────

impl<K: Scalar> Deref for IntervalSet<K> {
    type Target = [Interval<K>];

    fn deref(&self) -> &[Interval<K>] {
        &self.0
    }
}

impl<K: Scalar> AsRef<[Interval<K>]> for IntervalSet<K> {
    fn as_ref(&self) -> &[Interval<K>] {
        &self.0
    }
}

// ─────────────────────────────────────────────────────────────────────
// Conversions
// ─────────────────────────────────────────────────────────────────────

impl<K: Scalar> From<Interval<K>> for IntervalSet<K> {
    fn from(interval: Interval<K>) -> Self {
        let mut set = Self::new();
        set.insert(interval);
        set
    }
}

impl<K: Scalar> FromIterator<Interval<K>> for IntervalSet<K> {
    fn from_iter<I: IntoIterator<Item = Interval<K>>>(iter: I) -> Self {
        let mut set = Self::new();
        set.extend(iter);
        set
    }
}

impl<K: Scalar> Extend<Interval<K>> for IntervalSet<K> {
    fn extend<I: IntoIterator<Item = Interval<K>>>(&mut self, iter: I) {
        for interval in iter {
            self.insert(interval);
        }
    }
}

// ─────────────────────────────────────────────────────────────────────
// Iterators
// ─────────────────────────────────────────────────────────────────────

impl<K: Scalar> IntoIterator for IntervalSet<K> {
    type Item = Interval<K>;
    type IntoIter = std::vec::IntoIter<Interval<K>>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

impl<'a, K: Scalar> IntoIterator for &'a IntervalSet<K> {
    type Item = &'a Interval<K>;
    type IntoIter = std::slice::Iter<'a, Interval<K>>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

// ─────────────────────────────────────────────────────────────────────
// Trait impls
// ─────────────────────────────────────────────────────────────────────

impl<K: Scalar> Default for IntervalSet<K> {
    fn default() -> Self {
        Self::new()
    }
}

/// Two sets are equal when they hold the same members, whatever the order.
impl<K: Scalar> PartialEq for IntervalSet<K> {
    fn eq(&self, other: &Self) -> bool {
        self.0.len() == other.0.len() && self.sorted() == other.sorted()
    }
}

impl<K: Scalar + Eq> Eq for IntervalSet<K> {}

impl<K: Scalar + Display> Display for IntervalSet<K> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{{")?;
        for (i, interval) in self.sorted().iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{}", interval)?;
        }
        write!(f, "}}")
    }
}

// ─────────────────────────────────────────────────────────────────────
// Serde support
// ─────────────────────────────────────────────────────────────────────

#[cfg(feature = "serde")]
impl<K> serde::Serialize for IntervalSet<K>
where
    K: Scalar + serde::Serialize,
{
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serde::Serialize::serialize(&self.0, serializer)
    }
}

/// Deserialized members are re-inserted one by one, so malformed input
/// (overlapping or empty intervals) still yields a valid set.
#[cfg(feature = "serde")]
impl<'de, K> serde::Deserialize<'de> for IntervalSet<K>
where
    K: Scalar + serde::Deserialize<'de>,
{
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let vec = <Vec<Interval<K>> as serde::Deserialize>::deserialize(deserializer)?;
        Ok(vec.into_iter().collect())
    }
}
