//! Algorithm registry
//!
//! Maps an algorithm identifier to the factory that creates its snapshot
//! generator and to the [`Descriptor`] shown by the info and code panes.
//!
//! The registry is built once and never mutated afterwards, so it can be
//! shared freely. Lookups of unknown identifiers return `None`; they are
//! never an error.
//!
//! # Identifiers
//!
//! | id | generator |
//! |----|-----------|
//! | `bubble-sort` | [`BubbleSort`] |
//! | `insertion-sort` | [`InsertionSort`] |
//! | `selection-sort` | [`SelectionSort`] |
//! | `merge-sort` | [`MergeSort`] |
//! | `quick-sort` | [`QuickSort`] (ranged) |
//! | `heap-sort` | [`HeapSort`] |
//! | `shell-sort` | [`ShellSort`] |
//! | `counting-sort` | [`CountingSort`] |

pub mod descriptors;

use crate::snapshot::{SnapshotStream, Value};
use crate::sorts::{
    BubbleSort, CountingSort, HeapSort, InsertionSort, MergeSort, QuickSort, SelectionSort,
    ShellSort,
};
use rustc_hash::FxHashMap;
use std::ops::Range;

/// Time and space complexity, as display strings
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Complexity {
    pub time: &'static str,
    pub space: &'static str,
}

/// Read-only metadata for one algorithm
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Descriptor {
    pub id: &'static str,
    pub title: &'static str,
    pub description: &'static str,
    pub complexity: Complexity,
    /// Source text shown in the code pane
    pub source: &'static str,
    /// Syntax highlighting hint for `source`
    pub language: &'static str,
}

/// How a generator is created from the current array
#[derive(Debug, Clone, Copy)]
pub enum Factory {
    /// Sorts the whole array
    Whole(fn(Vec<Value>) -> SnapshotStream),
    /// Sorts an explicit index range of the array
    Ranged(fn(Vec<Value>, Range<usize>) -> SnapshotStream),
}

impl Factory {
    /// Create a generator over the full array; ranged factories get `0..len`
    pub fn create(&self, array: Vec<Value>) -> SnapshotStream {
        match self {
            Factory::Whole(make) => make(array),
            Factory::Ranged(make) => {
                let len = array.len();
                make(array, 0..len)
            }
        }
    }
}

/// A registered algorithm
#[derive(Debug, Clone, Copy)]
pub struct Algorithm {
    pub descriptor: Descriptor,
    pub factory: Factory,
}

impl Algorithm {
    pub fn id(&self) -> &'static str {
        self.descriptor.id
    }
}

fn bubble(array: Vec<Value>) -> SnapshotStream {
    Box::new(BubbleSort::new(array))
}

fn insertion(array: Vec<Value>) -> SnapshotStream {
    Box::new(InsertionSort::new(array))
}

fn selection(array: Vec<Value>) -> SnapshotStream {
    Box::new(SelectionSort::new(array))
}

fn merge(array: Vec<Value>) -> SnapshotStream {
    Box::new(MergeSort::new(array))
}

fn quick(array: Vec<Value>, range: Range<usize>) -> SnapshotStream {
    Box::new(QuickSort::with_range(array, range))
}

fn heap(array: Vec<Value>) -> SnapshotStream {
    Box::new(HeapSort::new(array))
}

fn shell(array: Vec<Value>) -> SnapshotStream {
    Box::new(ShellSort::new(array))
}

fn counting(array: Vec<Value>) -> SnapshotStream {
    Box::new(CountingSort::new(array))
}

/// Lookup table from identifier to [`Algorithm`], in menu order
#[derive(Debug, Clone)]
pub struct Registry {
    algorithms: Vec<Algorithm>,
    by_id: FxHashMap<&'static str, usize>,
}

impl Registry {
    /// Build the registry with every built-in algorithm
    pub fn new() -> Self {
        let algorithms = vec![
            Algorithm {
                descriptor: descriptors::BUBBLE_SORT,
                factory: Factory::Whole(bubble),
            },
            Algorithm {
                descriptor: descriptors::INSERTION_SORT,
                factory: Factory::Whole(insertion),
            },
            Algorithm {
                descriptor: descriptors::SELECTION_SORT,
                factory: Factory::Whole(selection),
            },
            Algorithm {
                descriptor: descriptors::MERGE_SORT,
                factory: Factory::Whole(merge),
            },
            Algorithm {
                descriptor: descriptors::QUICK_SORT,
                factory: Factory::Ranged(quick),
            },
            Algorithm {
                descriptor: descriptors::HEAP_SORT,
                factory: Factory::Whole(heap),
            },
            Algorithm {
                descriptor: descriptors::SHELL_SORT,
                factory: Factory::Whole(shell),
            },
            Algorithm {
                descriptor: descriptors::COUNTING_SORT,
                factory: Factory::Whole(counting),
            },
        ];

        let by_id = algorithms
            .iter()
            .enumerate()
            .map(|(index, algorithm)| (algorithm.id(), index))
            .collect();

        Registry { algorithms, by_id }
    }

    /// Look up an algorithm by identifier
    pub fn get(&self, id: &str) -> Option<&Algorithm> {
        self.position(id).map(|index| &self.algorithms[index])
    }

    /// Menu position of an identifier
    pub fn position(&self, id: &str) -> Option<usize> {
        self.by_id.get(id).copied()
    }

    /// Algorithm at a menu position
    pub fn by_position(&self, index: usize) -> Option<&Algorithm> {
        self.algorithms.get(index)
    }

    pub fn iter(&self) -> impl Iterator<Item = &Algorithm> {
        self.algorithms.iter()
    }

    pub fn ids(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.algorithms.iter().map(Algorithm::id)
    }

    pub fn len(&self) -> usize {
        self.algorithms.len()
    }

    pub fn is_empty(&self) -> bool {
        self.algorithms.is_empty()
    }
}

impl Default for Registry {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_menu_order() {
        let registry = Registry::new();
        let ids: Vec<_> = registry.ids().collect();
        assert_eq!(
            ids,
            vec![
                "bubble-sort",
                "insertion-sort",
                "selection-sort",
                "merge-sort",
                "quick-sort",
                "heap-sort",
                "shell-sort",
                "counting-sort",
            ]
        );
    }

    #[test]
    fn test_unknown_id() {
        let registry = Registry::new();
        assert!(registry.get("bogo-sort").is_none());
        assert!(registry.get("").is_none());
        assert!(registry.position("Bubble-Sort").is_none());
    }

    #[test]
    fn test_only_quick_sort_is_ranged() {
        let registry = Registry::new();
        for algorithm in registry.iter() {
            let ranged = matches!(algorithm.factory, Factory::Ranged(_));
            assert_eq!(ranged, algorithm.id() == "quick-sort", "{}", algorithm.id());
        }
    }

    #[test]
    fn test_descriptor_carries_source() {
        let registry = Registry::new();
        let merge = registry.get("merge-sort").unwrap();
        assert_eq!(merge.descriptor.title, "Merge Sort");
        assert_eq!(merge.descriptor.complexity.time, "O(n log n)");
        assert_eq!(merge.descriptor.language, "rust");
        assert!(merge.descriptor.source.contains("pub struct MergeSort"));
    }

    #[test]
    fn test_factory_sorts() {
        let registry = Registry::new();
        for algorithm in registry.iter() {
            let last = algorithm.factory.create(vec![4, 2, 3, 1]).last();
            assert_eq!(last, Some(vec![1, 2, 3, 4]), "{}", algorithm.id());
        }
    }
}
