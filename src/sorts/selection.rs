// Selection sort, one snapshot per swap

use crate::snapshot::{Snapshot, Value};
use std::iter::FusedIterator;

/// Selection sort generator
///
/// Each pass finds the first minimum of the unsorted suffix and swaps it to
/// the front of that suffix. Passes where the minimum is already in place
/// do not change the array and produce no snapshot, except that a run which
/// never swaps ends with one snapshot of the sorted array.
#[derive(Debug, Clone)]
pub struct SelectionSort {
    array: Vec<Value>,
    /// Start of the unsorted suffix
    front: usize,
    unpublished: bool,
}

impl SelectionSort {
    pub fn new(array: Vec<Value>) -> Self {
        SelectionSort {
            unpublished: array.len() >= 2,
            array,
            front: 0,
        }
    }
}

impl Iterator for SelectionSort {
    type Item = Snapshot;

    fn next(&mut self) -> Option<Snapshot> {
        let n = self.array.len();

        while self.front + 1 < n {
            let i = self.front;
            self.front += 1;

            let mut min = i;
            for j in (i + 1)..n {
                if self.array[j] < self.array[min] {
                    min = j;
                }
            }

            if min != i {
                self.array.swap(i, min);
                self.unpublished = false;
                return Some(self.array.clone());
            }
        }

        if self.unpublished {
            self.unpublished = false;
            return Some(self.array.clone());
        }
        None
    }
}

impl FusedIterator for SelectionSort {}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sorts::test_utils::{assert_sorts, drain};

    #[test]
    fn test_swaps_minimum_forward() {
        let input = vec![3, 1, 2];
        let snapshots = drain(&input, SelectionSort::new(input.clone()));
        assert_eq!(snapshots, vec![vec![1, 3, 2], vec![1, 2, 3]]);
    }

    #[test]
    fn test_at_most_one_snapshot_per_pass() {
        let input = vec![9, 4, 7, 4, 1, 8, 2];
        let snapshots = drain(&input, SelectionSort::new(input.clone()));
        assert_sorts(&input, &snapshots);
        assert!(snapshots.len() < input.len());
    }

    #[test]
    fn test_sorted_input_reports_once() {
        let snapshots: Vec<_> = SelectionSort::new(vec![1, 1, 2, 5]).collect();
        assert_eq!(snapshots, vec![vec![1, 1, 2, 5]]);
    }

    #[test]
    fn test_trivial_inputs() {
        assert_eq!(SelectionSort::new(vec![]).count(), 0);
        assert_eq!(SelectionSort::new(vec![1]).count(), 0);
    }
}
