//! # Sequence Module
//!
//! Labels for a contiguous, inclusive run of integers.
//!
//! Sequences are computationally bounded: a single sequence never yields more
//! than [`MAX_SEQUENCE_LEN`] items, and iteration stops cleanly at `i64::MAX`.

use crate::{CoreError, Label, LabelKind, Result};
use serde::Serialize;
use std::collections::BTreeMap;
use std::iter::FusedIterator;

/// Maximum number of items a single [`Sequence`] may yield.
pub const MAX_SEQUENCE_LEN: u64 = 1_000_000;

// =============================================================================
// SEQUENCE
// =============================================================================

/// Iterator over `(n, Label::of(n))` for every `n` in `[start, end]`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Sequence {
    start: i64,
    end: i64,
    next: Option<i64>,
    remaining: usize,
}

impl Sequence {
    /// Build the inclusive sequence `[start, end]`.
    ///
    /// Fails if `start > end` or the range exceeds [`MAX_SEQUENCE_LEN`].
    pub fn new(start: i64, end: i64) -> Result<Self> {
        if start > end {
            return Err(CoreError::InvalidRange { start, end });
        }

        // i128 holds the full span of i64 without overflow.
        let len = (end as i128 - start as i128 + 1) as u128;
        if len > MAX_SEQUENCE_LEN as u128 {
            return Err(CoreError::SequenceTooLong {
                len,
                max: MAX_SEQUENCE_LEN,
            });
        }

        Ok(Self {
            start,
            end,
            next: Some(start),
            remaining: len as usize,
        })
    }

    /// First integer of the range.
    #[must_use]
    pub fn start(&self) -> i64 {
        self.start
    }

    /// Last integer of the range (inclusive).
    #[must_use]
    pub fn end(&self) -> i64 {
        self.end
    }

    /// Items not yet yielded.
    #[must_use]
    pub fn len(&self) -> usize {
        self.remaining
    }

    /// True once every item has been yielded.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.remaining == 0
    }
}

impl Iterator for Sequence {
    type Item = (i64, Label);

    fn next(&mut self) -> Option<Self::Item> {
        let n = self.next?;
        // checked_add guards the i64::MAX endpoint.
        self.next = if n < self.end { n.checked_add(1) } else { None };
        self.remaining = self.remaining.saturating_sub(1);
        Some((n, Label::of(n)))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl ExactSizeIterator for Sequence {}

impl FusedIterator for Sequence {}

// =============================================================================
// TALLY
// =============================================================================

/// Per-kind label counts over a sequence.
///
/// Uses BTreeMap so serialized output has a stable key order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Tally {
    counts: BTreeMap<LabelKind, u64>,
}

impl Tally {
    /// Create an empty tally.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Count every label a sequence yields.
    #[must_use]
    pub fn from_sequence(sequence: Sequence) -> Self {
        sequence.map(|(_, label)| label).collect()
    }

    /// Record one label.
    pub fn record(&mut self, label: Label) {
        let count = self.counts.entry(label.kind()).or_insert(0);
        *count = count.saturating_add(1);
    }

    /// Count for a single kind (zero if never seen).
    #[must_use]
    pub fn count(&self, kind: LabelKind) -> u64 {
        self.counts.get(&kind).copied().unwrap_or(0)
    }

    /// Total labels recorded.
    #[must_use]
    pub fn total(&self) -> u64 {
        self.counts.values().copied().fold(0u64, u64::saturating_add)
    }

    /// Iterate `(kind, count)` in key order, including zero counts.
    pub fn iter(&self) -> impl Iterator<Item = (LabelKind, u64)> + '_ {
        LabelKind::ALL.into_iter().map(|kind| (kind, self.count(kind)))
    }
}

impl FromIterator<Label> for Tally {
    fn from_iter<I: IntoIterator<Item = Label>>(iter: I) -> Self {
        let mut tally = Self::new();
        for label in iter {
            tally.record(label);
        }
        tally
    }
}

// =============================================================================
// TESTS
// =============================================================================

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::{MAX_SEQUENCE_LEN, Sequence, Tally};
    use crate::{CoreError, Label, LabelKind};
    use proptest::prelude::*;

    #[test]
    fn first_fifteen() {
        let labels: Vec<String> = Sequence::new(1, 15)
            .unwrap()
            .map(|(_, label)| label.to_string())
            .collect();
        assert_eq!(
            labels,
            vec![
                "1", "2", "fizz", "4", "buzz", "fizz", "7", "8", "fizz", "buzz", "11", "fizz",
                "13", "14", "fizzbuzz",
            ]
        );
    }

    #[test]
    fn single_item_range() {
        let items: Vec<_> = Sequence::new(0, 0).unwrap().collect();
        assert_eq!(items, vec![(0, Label::FizzBuzz)]);
    }

    #[test]
    fn negative_range_ascends() {
        let numbers: Vec<i64> = Sequence::new(-3, 1).unwrap().map(|(n, _)| n).collect();
        assert_eq!(numbers, vec![-3, -2, -1, 0, 1]);
    }

    #[test]
    fn reversed_range_is_rejected() {
        let err = Sequence::new(10, 1).unwrap_err();
        assert_eq!(err, CoreError::InvalidRange { start: 10, end: 1 });
    }

    #[test]
    fn oversized_range_is_rejected() {
        let err = Sequence::new(1, MAX_SEQUENCE_LEN as i64 + 1).unwrap_err();
        assert!(matches!(err, CoreError::SequenceTooLong { .. }));
    }

    #[test]
    fn full_i64_span_does_not_overflow() {
        let err = Sequence::new(i64::MIN, i64::MAX).unwrap_err();
        assert_eq!(
            err,
            CoreError::SequenceTooLong {
                len: u64::MAX as u128 + 1,
                max: MAX_SEQUENCE_LEN,
            }
        );
    }

    #[test]
    fn max_len_is_accepted() {
        let seq = Sequence::new(1, MAX_SEQUENCE_LEN as i64).unwrap();
        assert_eq!(seq.len(), MAX_SEQUENCE_LEN as usize);
    }

    #[test]
    fn stops_at_i64_max() {
        let items: Vec<_> = Sequence::new(i64::MAX - 1, i64::MAX).unwrap().collect();
        assert_eq!(items.len(), 2);
        assert_eq!(items[1].0, i64::MAX);
    }

    #[test]
    fn starts_at_i64_min() {
        let items: Vec<_> = Sequence::new(i64::MIN, i64::MIN + 1).unwrap().collect();
        assert_eq!(items[0].0, i64::MIN);
        assert_eq!(items.len(), 2);
    }

    #[test]
    fn exact_size_tracks_progress() {
        let mut seq = Sequence::new(1, 3).unwrap();
        assert!(!seq.is_empty());
        assert_eq!(seq.len(), 3);
        seq.next();
        assert_eq!(seq.len(), 2);
        seq.next();
        seq.next();
        assert!(seq.is_empty());
        assert_eq!(seq.next(), None);
        assert_eq!(seq.next(), None);
    }

    #[test]
    fn tally_first_fifteen() {
        let tally = Tally::from_sequence(Sequence::new(1, 15).unwrap());
        assert_eq!(tally.count(LabelKind::FizzBuzz), 1);
        assert_eq!(tally.count(LabelKind::Fizz), 4);
        assert_eq!(tally.count(LabelKind::Buzz), 2);
        assert_eq!(tally.count(LabelKind::Number), 8);
        assert_eq!(tally.total(), 15);
    }

    #[test]
    fn tally_iter_includes_zero_counts() {
        let tally: Tally = [Label::Fizz].into_iter().collect();
        let counts: Vec<_> = tally.iter().collect();
        assert_eq!(
            counts,
            vec![
                (LabelKind::FizzBuzz, 0),
                (LabelKind::Fizz, 1),
                (LabelKind::Buzz, 0),
                (LabelKind::Number, 0),
            ]
        );
    }

    #[test]
    fn tally_serializes_in_key_order() {
        let tally = Tally::from_sequence(Sequence::new(1, 5).unwrap());
        let json = serde_json::to_string(&tally).unwrap();
        assert_eq!(json, r#"{"counts":{"fizz":1,"buzz":1,"number":3}}"#);
    }

    proptest! {
        #[test]
        fn yields_exactly_len_items(start in -10_000i64..10_000, span in 0i64..500) {
            let seq = Sequence::new(start, start + span).unwrap();
            let expected = seq.len();
            prop_assert_eq!(seq.count(), expected);
            prop_assert_eq!(expected as i64, span + 1);
        }

        #[test]
        fn tally_total_matches_len(start in -10_000i64..10_000, span in 0i64..500) {
            let seq = Sequence::new(start, start + span).unwrap();
            let len = seq.len() as u64;
            prop_assert_eq!(Tally::from_sequence(seq).total(), len);
        }
    }
}
