// Bubble sort, one snapshot per adjacent swap

use crate::snapshot::{Snapshot, Value};
use std::iter::FusedIterator;

/// Bubble sort generator
///
/// Each pass walks the unsorted prefix comparing neighbours. A pass that
/// performs no swap ends the run. Input that is already sorted produces a
/// single snapshot of the unchanged array.
#[derive(Debug, Clone)]
pub struct BubbleSort {
    array: Vec<Value>,
    /// Completed passes; the last `pass` elements are in final position
    pass: usize,
    /// Left index of the next comparison within the current pass
    index: usize,
    swapped: bool,
    done: bool,
    /// Set until the first snapshot; only runs over two or more elements report
    unpublished: bool,
}

impl BubbleSort {
    pub fn new(array: Vec<Value>) -> Self {
        BubbleSort {
            unpublished: array.len() >= 2,
            array,
            pass: 0,
            index: 0,
            swapped: false,
            done: false,
        }
    }
}

impl Iterator for BubbleSort {
    type Item = Snapshot;

    fn next(&mut self) -> Option<Snapshot> {
        let n = self.array.len();

        while !self.done {
            let limit = n.saturating_sub(self.pass + 1);

            if self.index >= limit {
                if limit == 0 || !self.swapped {
                    self.done = true;
                    break;
                }
                self.pass += 1;
                self.index = 0;
                self.swapped = false;
                continue;
            }

            let j = self.index;
            self.index += 1;

            if self.array[j] > self.array[j + 1] {
                self.array.swap(j, j + 1);
                self.swapped = true;
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

impl FusedIterator for BubbleSort {}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sorts::test_utils::{assert_sorts, drain};

    #[test]
    fn test_one_snapshot_per_swap() {
        let input = vec![3, 2, 1];
        let snapshots = drain(&input, BubbleSort::new(input.clone()));

        assert_eq!(
            snapshots,
            vec![vec![2, 3, 1], vec![2, 1, 3], vec![1, 2, 3]]
        );
    }

    #[test]
    fn test_sorted_input_reports_once() {
        let mut sort = BubbleSort::new(vec![1, 2, 3, 4]);
        assert_eq!(sort.next(), Some(vec![1, 2, 3, 4]));
        assert_eq!(sort.next(), None);
        assert_eq!(sort.next(), None);
    }

    #[test]
    fn test_duplicates() {
        let input = vec![4, 1, 4, 2, 1];
        let snapshots = drain(&input, BubbleSort::new(input.clone()));
        assert_sorts(&input, &snapshots);
        assert!(snapshots.len() <= input.len() * (input.len() - 1) / 2);
    }

    #[test]
    fn test_trivial_inputs() {
        assert_eq!(BubbleSort::new(vec![]).count(), 0);
        assert_eq!(BubbleSort::new(vec![9]).count(), 0);
    }
}
