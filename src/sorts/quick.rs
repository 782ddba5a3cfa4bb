// Quick sort over an explicit index range, recursion kept on a range stack

use crate::snapshot::{Snapshot, Value};
use std::iter::FusedIterator;
use std::ops::Range;

/// An in-progress Lomuto partition of `lo..hi` around `array[hi - 1]`
///
/// Elements in `lo..store` are smaller than the pivot; `scan` is the next
/// element to compare.
#[derive(Debug, Clone, Copy)]
struct Partition {
    lo: usize,
    hi: usize,
    store: usize,
    scan: usize,
}

/// Quick sort generator
///
/// Only the elements inside the given range are sorted; everything outside
/// it is carried through every snapshot untouched. A range of two or more
/// elements that needs no swap still ends with one snapshot.
#[derive(Debug, Clone)]
pub struct QuickSort {
    array: Vec<Value>,
    ranges: Vec<Range<usize>>,
    active: Option<Partition>,
    unpublished: bool,
}

impl QuickSort {
    /// Sort the whole array
    pub fn new(array: Vec<Value>) -> Self {
        let len = array.len();
        Self::with_range(array, 0..len)
    }

    /// Sort `range` of the array (half-open, clamped to the array length)
    pub fn with_range(array: Vec<Value>, range: Range<usize>) -> Self {
        let end = range.end.min(array.len());
        let start = range.start.min(end);
        QuickSort {
            array,
            ranges: vec![start..end],
            active: None,
            unpublished: end - start >= 2,
        }
    }

    fn publish(&mut self) -> Option<Snapshot> {
        self.unpublished = false;
        Some(self.array.clone())
    }
}

impl Iterator for QuickSort {
    type Item = Snapshot;

    fn next(&mut self) -> Option<Snapshot> {
        loop {
            if let Some(part) = &mut self.active {
                let pivot = part.hi - 1;

                while part.scan < pivot {
                    let j = part.scan;
                    part.scan += 1;

                    if self.array[j] < self.array[pivot] {
                        let i = part.store;
                        part.store += 1;
                        if i != j {
                            self.array.swap(i, j);
                            return self.publish();
                        }
                    }
                }

                let Partition { lo, hi, store, .. } = *part;
                self.active = None;

                // Pushed right first so the left side is partitioned next
                self.ranges.push(store + 1..hi);
                self.ranges.push(lo..store);

                if store != pivot {
                    self.array.swap(store, pivot);
                    return self.publish();
                }
                continue;
            }

            let Some(range) = self.ranges.pop() else {
                return if self.unpublished { self.publish() } else { None };
            };
            if range.len() >= 2 {
                self.active = Some(Partition {
                    lo: range.start,
                    hi: range.end,
                    store: range.start,
                    scan: range.start,
                });
            }
        }
    }
}

impl FusedIterator for QuickSort {}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sorts::test_utils::{assert_sorts, drain};

    #[test]
    fn test_partition_swaps() {
        let input = vec![3, 1, 2];
        let snapshots = drain(&input, QuickSort::new(input.clone()));

        // pivot 2: 1 moves to the front, then the pivot lands in the middle
        assert_eq!(snapshots, vec![vec![1, 3, 2], vec![1, 2, 3]]);
    }

    #[test]
    fn test_range_leaves_outside_untouched() {
        let input = vec![9, 5, 4, 3, 0];
        let snapshots = drain(&input, QuickSort::with_range(input.clone(), 1..4));

        let last = snapshots.last().cloned().unwrap();
        assert_eq!(last, vec![9, 3, 4, 5, 0]);
        for snapshot in &snapshots {
            assert_eq!(snapshot[0], 9);
            assert_eq!(snapshot[4], 0);
        }
    }

    #[test]
    fn test_out_of_bounds_range_is_clamped() {
        let input = vec![2, 1];
        let snapshots = drain(&input, QuickSort::with_range(input.clone(), 0..10));
        assert_eq!(snapshots, vec![vec![1, 2]]);
        assert_eq!(QuickSort::with_range(vec![2, 1], 5..3).count(), 0);
    }

    #[test]
    fn test_sorted_range_reports_once() {
        let snapshots: Vec<_> = QuickSort::with_range(vec![5, 1, 2, 3, 0], 1..4).collect();
        assert_eq!(snapshots, vec![vec![5, 1, 2, 3, 0]]);
        assert_eq!(QuickSort::with_range(vec![5, 1, 2], 1..2).count(), 0);
    }

    #[test]
    fn test_many_duplicates() {
        let input = vec![3, 3, 1, 3, 1, 3, 3];
        let snapshots = drain(&input, QuickSort::new(input.clone()));
        assert_sorts(&input, &snapshots);
    }

    #[test]
    fn test_trivial_inputs() {
        assert_eq!(QuickSort::new(vec![]).count(), 0);
        assert_eq!(QuickSort::new(vec![1]).count(), 0);
    }
}
