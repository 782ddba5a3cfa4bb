// Shell sort with the n/2, n/4, ..., 1 gap sequence

use crate::snapshot::{Snapshot, Value};
use std::iter::FusedIterator;

/// Shell sort generator
///
/// Gapped insertion is performed by swapping an element with its neighbour
/// one gap to the left while that neighbour is larger, yielding after each
/// swap. A run that never swaps ends with one snapshot of the sorted array.
#[derive(Debug, Clone)]
pub struct ShellSort {
    array: Vec<Value>,
    gap: usize,
    /// Next element to insert for the current gap
    outer: usize,
    /// Position of the element currently moving left
    cursor: Option<usize>,
    unpublished: bool,
}

impl ShellSort {
    pub fn new(array: Vec<Value>) -> Self {
        let gap = array.len() / 2;
        ShellSort {
            unpublished: array.len() >= 2,
            array,
            gap,
            outer: gap,
            cursor: None,
        }
    }
}

impl Iterator for ShellSort {
    type Item = Snapshot;

    fn next(&mut self) -> Option<Snapshot> {
        let n = self.array.len();

        while self.gap > 0 {
            if let Some(j) = self.cursor.take() {
                let gap = self.gap;
                if j >= gap && self.array[j - gap] > self.array[j] {
                    self.array.swap(j - gap, j);
                    self.cursor = Some(j - gap);
                    self.unpublished = false;
                    return Some(self.array.clone());
                }
            }

            if self.outer < n {
                self.cursor = Some(self.outer);
                self.outer += 1;
            } else {
                self.gap /= 2;
                self.outer = self.gap;
            }
        }

        if self.unpublished {
            self.unpublished = false;
            return Some(self.array.clone());
        }
        None
    }
}

impl FusedIterator for ShellSort {}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sorts::test_utils::{assert_sorts, drain};

    #[test]
    fn test_gapped_swaps_first() {
        let input = vec![4, 3, 2, 1];
        let snapshots = drain(&input, ShellSort::new(input.clone()));

        // gap 2 fixes (4,2) and (3,1), gap 1 finishes
        assert_eq!(snapshots[0], vec![2, 3, 4, 1]);
        assert_eq!(snapshots[1], vec![2, 1, 4, 3]);
        assert_sorts(&input, &snapshots);
    }

    #[test]
    fn test_swap_count_bounded_by_inversions() {
        let input: Vec<Value> = (1..=20).rev().collect();
        let snapshots = drain(&input, ShellSort::new(input.clone()));
        assert_sorts(&input, &snapshots);
        assert!(snapshots.len() <= 20 * 19 / 2);
    }

    #[test]
    fn test_sorted_input_reports_once() {
        let snapshots: Vec<_> = ShellSort::new(vec![2, 4, 6, 8, 10]).collect();
        assert_eq!(snapshots, vec![vec![2, 4, 6, 8, 10]]);
    }

    #[test]
    fn test_trivial_inputs() {
        assert_eq!(ShellSort::new(vec![]).count(), 0);
        assert_eq!(ShellSort::new(vec![1]).count(), 0);
    }
}
