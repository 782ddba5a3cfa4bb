// Insertion sort, one snapshot per insertion pass

use crate::snapshot::{Snapshot, Value};
use std::iter::FusedIterator;

/// Insertion sort generator
///
/// Every element after the first is inserted into the sorted prefix in one
/// step. The shift and the placement happen together as a rotation, so the
/// array never shows a half-shifted state with a duplicated element.
#[derive(Debug, Clone)]
pub struct InsertionSort {
    array: Vec<Value>,
    /// Index of the next element to insert
    next_index: usize,
}

impl InsertionSort {
    pub fn new(array: Vec<Value>) -> Self {
        InsertionSort {
            array,
            next_index: 1,
        }
    }
}

impl Iterator for InsertionSort {
    type Item = Snapshot;

    fn next(&mut self) -> Option<Snapshot> {
        let i = self.next_index;
        if i >= self.array.len() {
            return None;
        }
        self.next_index += 1;

        let key = self.array[i];
        let mut j = i;
        while j > 0 && self.array[j - 1] > key {
            j -= 1;
        }
        self.array[j..=i].rotate_right(1);

        Some(self.array.clone())
    }
}

impl FusedIterator for InsertionSort {}
