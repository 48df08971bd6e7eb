//! Piecewise translation of intervals.
//!
//! A [`RangeMap`] is a list of rules, each moving the values of a source
//! interval by a fixed offset. Values outside every rule map to themselves.
//! Mapping an interval splits it along rule boundaries, so one input
//! interval can come out as several.

use num_traits::Signed;

use super::error::RangeMapError;
use crate::interval::{Interval, IntervalSet};
use crate::scalar::Scalar;

/// Values of `source` are moved by `offset`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rule<K: Scalar> {
    source: Interval<K>,
    offset: K,
}

impl<K: Scalar> Rule<K> {
    pub const fn source(&self) -> Interval<K> {
        self.source
    }

    pub const fn offset(&self) -> K {
        self.offset
    }

    /// Where the source interval lands.
    pub fn destination(&self) -> Interval<K> {
        self.source.shift(self.offset)
    }
}

/// Table of non-overlapping translation rules.
///
/// # Example
///
/// ```
/// use rangekit::{Interval, IntervalSet, RangeMap};
///
/// let mut map = RangeMap::new();
/// map.add_translation(52, 50, 48).unwrap();
/// map.add_translation(50, 98, 2).unwrap();
///
/// assert_eq!(map.map_value(79), 81);
/// assert_eq!(map.map_value(10), 10);
///
/// let seeds = IntervalSet::from(Interval::new(95, 100));
/// let soil = map.map_set(&seeds);
/// assert_eq!(
///     soil.sorted(),
///     vec![Interval::new(50, 51), Interval::new(97, 100)]
/// );
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct RangeMap<K: Scalar> {
    rules: Vec<Rule<K>>,
}

impl<K: Scalar> Default for RangeMap<K> {
    fn default() -> Self {
        Self { rules: Vec::new() }
    }
}

fn describe<K: Scalar>(interval: &Interval<K>) -> String {
    format!("[{:?}, {:?}]", interval.min(), interval.max())
}

impl<K: Scalar> RangeMap<K> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.rules.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }

    pub fn rules(&self) -> &[Rule<K>] {
        &self.rules
    }

    /// Adds a rule moving every value of `source` by `offset`.
    ///
    /// # Errors
    ///
    /// Returns an error if `source` is empty or overlaps the source of an
    /// existing rule.
    pub fn add_rule(&mut self, source: Interval<K>, offset: K) -> Result<(), RangeMapError> {
        if source.is_empty() {
            return Err(RangeMapError::EmptySource(describe(&source)));
        }
        if let Some(existing) = self.rules.iter().find(|r| r.source.overlaps(&source)) {
            return Err(RangeMapError::OverlappingRule {
                new: describe(&source),
                existing: describe(&existing.source),
            });
        }

        log::debug!("adding rule {} by {:?}", describe(&source), offset);
        self.rules.push(Rule { source, offset });
        Ok(())
    }

    /// Maps a single value through the rule containing it, if any.
    pub fn map_value(&self, value: K) -> K {
        self.rules
            .iter()
            .find(|rule| rule.source.contains(value))
            .map_or(value, |rule| value + rule.offset)
    }

    /// Maps every value of `interval`. Covered parts are moved by their
    /// rule's offset, the rest passes through unchanged.
    pub fn map_interval(&self, interval: Interval<K>) -> IntervalSet<K> {
        let mut mapped = IntervalSet::new();
        let mut covered = IntervalSet::new();

        for rule in &self.rules {
            if let Some(part) = interval.intersection(&rule.source) {
                covered.insert(part);
                mapped.insert(part.shift(rule.offset));
            }
        }
        for uncovered in covered.gaps(interval) {
            mapped.insert(uncovered);
        }

        log::trace!("mapped {} to {} pieces", describe(&interval), mapped.len());
        mapped
    }

    /// Maps every member of `set`, merging the results into one set.
    pub fn map_set(&self, set: &IntervalSet<K>) -> IntervalSet<K> {
        set.iter()
            .flat_map(|interval| self.map_interval(*interval))
            .collect()
    }
}

impl<K: Scalar + Signed> RangeMap<K> {
    /// Adds a rule in "destination source length" form: the `length` values
    /// starting at `source_start` move to start at `destination_start`.
    pub fn add_translation(
        &mut self,
        destination_start: K,
        source_start: K,
        length: K,
    ) -> Result<(), RangeMapError> {
        let source = Interval::new(source_start, source_start + length - K::one());
        self.add_rule(source, destination_start - source_start)
    }
}
