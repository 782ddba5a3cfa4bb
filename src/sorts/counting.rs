// Counting sort, one snapshot per placement that changes the array

use crate::snapshot::{Snapshot, Value};
use std::collections::BTreeMap;
use std::iter::FusedIterator;

/// Counting sort generator
///
/// Occurrences are counted up front (sparse, so wide value ranges cost no
/// extra memory). Output slots are then filled left to right in ascending
/// value order; each placement swaps the next occurrence of the value into
/// its slot. If no placement changes the array, the run ends with one
/// snapshot of it.
#[derive(Debug, Clone)]
pub struct CountingSort {
    array: Vec<Value>,
    /// `(value, occurrences still to place)`, ascending by value
    counts: Vec<(Value, usize)>,
    bucket: usize,
    /// Next output slot
    slot: usize,
    unpublished: bool,
}

impl CountingSort {
    pub fn new(array: Vec<Value>) -> Self {
        let mut counts: BTreeMap<Value, usize> = BTreeMap::new();
        for &v in &array {
            *counts.entry(v).or_insert(0) += 1;
        }

        CountingSort {
            unpublished: array.len() >= 2,
            array,
            counts: counts.into_iter().collect(),
            bucket: 0,
            slot: 0,
        }
    }
}

impl Iterator for CountingSort {
    type Item = Snapshot;

    fn next(&mut self) -> Option<Snapshot> {
        loop {
            let Some((value, remaining)) = self.counts.get_mut(self.bucket) else {
                if self.unpublished {
                    self.unpublished = false;
                    return Some(self.array.clone());
                }
                return None;
            };
            if *remaining == 0 {
                self.bucket += 1;
                continue;
            }
            *remaining -= 1;
            let value = *value;

            let slot = self.slot;
            self.slot += 1;

            if self.array[slot] != value {
                let offset = self.array[slot..].iter().position(|&v| v == value)?;
                self.array.swap(slot, slot + offset);
                self.unpublished = false;
                return Some(self.array.clone());
            }
        }
    }
}

impl FusedIterator for CountingSort {}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sorts::test_utils::{assert_sorts, drain};

    #[test]
    fn test_placements() {
        let input = vec![3, 1, 2, 1];
        let snapshots = drain(&input, CountingSort::new(input.clone()));

        assert_eq!(
            snapshots,
            vec![vec![1, 3, 2, 1], vec![1, 1, 2, 3]]
        );
    }

    #[test]
    fn test_wide_value_range() {
        let input = vec![u32::MAX, 0, 1_000_000, 7];
        let snapshots = drain(&input, CountingSort::new(input.clone()));
        assert_sorts(&input, &snapshots);
        assert!(snapshots.len() <= input.len());
    }

    #[test]
    fn test_sorted_input_reports_once() {
        let snapshots: Vec<_> = CountingSort::new(vec![1, 3, 3, 7]).collect();
        assert_eq!(snapshots, vec![vec![1, 3, 3, 7]]);
    }

    #[test]
    fn test_trivial_inputs() {
        assert_eq!(CountingSort::new(vec![]).count(), 0);
        assert_eq!(CountingSort::new(vec![5]).count(), 0);
    }
}
