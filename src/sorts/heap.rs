// Heap sort, one snapshot per sift swap or root exchange

use crate::snapshot::{Snapshot, Value};
use std::iter::FusedIterator;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Phase {
    /// Heapify; `remaining` roots (counting down from `n / 2`) still to sift
    Build { remaining: usize },
    /// Move the max to `end`, then restore the heap on `0..end`
    Extract { end: usize },
}

/// Sift-down of `node` within the heap `0..limit`
#[derive(Debug, Clone, Copy)]
struct Sift {
    node: usize,
    limit: usize,
}

/// Heap sort generator (max-heap)
#[derive(Debug, Clone)]
pub struct HeapSort {
    array: Vec<Value>,
    phase: Phase,
    sift: Option<Sift>,
}

impl HeapSort {
    pub fn new(array: Vec<Value>) -> Self {
        let remaining = array.len() / 2;
        HeapSort {
            array,
            phase: Phase::Build { remaining },
            sift: None,
        }
    }
}

impl Iterator for HeapSort {
    type Item = Snapshot;

    fn next(&mut self) -> Option<Snapshot> {
        let n = self.array.len();

        loop {
            if let Some(sift) = &mut self.sift {
                let left = 2 * sift.node + 1;
                let right = left + 1;
                let mut largest = sift.node;

                if left < sift.limit && self.array[left] > self.array[largest] {
                    largest = left;
                }
                if right < sift.limit && self.array[right] > self.array[largest] {
                    largest = right;
                }

                if largest != sift.node {
                    self.array.swap(sift.node, largest);
                    sift.node = largest;
                    return Some(self.array.clone());
                }
                self.sift = None;
            }

            match self.phase {
                Phase::Build { remaining } if remaining > 0 => {
                    self.phase = Phase::Build {
                        remaining: remaining - 1,
                    };
                    self.sift = Some(Sift {
                        node: remaining - 1,
                        limit: n,
                    });
                }
                Phase::Build { .. } => {
                    self.phase = Phase::Extract {
                        end: n.saturating_sub(1),
                    };
                }
                Phase::Extract { end } if end > 0 => {
                    self.array.swap(0, end);
                    self.phase = Phase::Extract { end: end - 1 };
                    self.sift = Some(Sift {
                        node: 0,
                        limit: end,
                    });
                    return Some(self.array.clone());
                }
                Phase::Extract { .. } => return None,
            }
        }
    }
}

impl FusedIterator for HeapSort {}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sorts::test_utils::{assert_sorts, drain};

    #[test]
    fn test_small_heap() {
        let input = vec![1, 3, 2];
        let snapshots = drain(&input, HeapSort::new(input.clone()));

        assert_eq!(
            snapshots,
            vec![
                vec![3, 1, 2], // heapify root
                vec![2, 1, 3], // move max to the end
                vec![1, 2, 3], // move next max
            ]
        );
    }

    #[test]
    fn test_bounded_snapshot_count() {
        let input: Vec<Value> = (1..=32).collect();
        let snapshots = drain(&input, HeapSort::new(input.clone()));
        assert_sorts(&input, &snapshots);
        // n * (2 * floor(log2 n) + 2)
        assert!(snapshots.len() <= 32 * 12);
    }

    #[test]
    fn test_trivial_inputs() {
        assert_eq!(HeapSort::new(vec![]).count(), 0);
        assert_eq!(HeapSort::new(vec![1]).count(), 0);
    }
}
