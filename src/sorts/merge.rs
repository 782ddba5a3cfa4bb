// Merge sort with the recursion flattened into an explicit work-list

use crate::snapshot::{Snapshot, Value};
use std::iter::FusedIterator;

/// Pending work for the merge sort
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Task {
    /// Sort `lo..hi` (splits into two halves and a merge)
    Sort { lo: usize, hi: usize },
    /// Merge the sorted runs `lo..mid` and `mid..hi`
    Merge { lo: usize, mid: usize, hi: usize },
}

/// An in-progress merge
///
/// `lo..write` holds merged output, `write..mid` the rest of the left run and
/// `mid..hi` the rest of the right run.
#[derive(Debug, Clone, Copy)]
struct MergeCursor {
    write: usize,
    mid: usize,
    hi: usize,
}

/// Merge sort generator
///
/// Top-down merge sort. Each merge-write fills the next output slot: when
/// the head of the right run is smaller it is rotated in front of the left
/// run, otherwise the left head is already in place. A snapshot is produced
/// for every slot written.
#[derive(Debug, Clone)]
pub struct MergeSort {
    array: Vec<Value>,
    tasks: Vec<Task>,
    active: Option<MergeCursor>,
}

impl MergeSort {
    pub fn new(array: Vec<Value>) -> Self {
        let tasks = vec![Task::Sort {
            lo: 0,
            hi: array.len(),
        }];
        MergeSort {
            array,
            tasks,
            active: None,
        }
    }
}

impl Iterator for MergeSort {
    type Item = Snapshot;

    fn next(&mut self) -> Option<Snapshot> {
        loop {
            if let Some(cursor) = &mut self.active {
                if cursor.write < cursor.hi {
                    let (w, m) = (cursor.write, cursor.mid);
                    if w < m && m < cursor.hi && self.array[m] < self.array[w] {
                        self.array[w..=m].rotate_right(1);
                        cursor.mid += 1;
                    }
                    cursor.write += 1;
                    return Some(self.array.clone());
                }
                self.active = None;
            }

            // Stack order: left half, then right half, then their merge
            match self.tasks.pop()? {
                Task::Sort { lo, hi } => {
                    if hi - lo >= 2 {
                        let mid = lo + (hi - lo) / 2;
                        self.tasks.push(Task::Merge { lo, mid, hi });
                        self.tasks.push(Task::Sort { lo: mid, hi });
                        self.tasks.push(Task::Sort { lo, hi: mid });
                    }
                }
                Task::Merge { lo, mid, hi } => {
                    self.active = Some(MergeCursor { write: lo, mid, hi });
                }
            }
        }
    }
}

impl FusedIterator for MergeSort {}
