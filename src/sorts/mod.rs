//! Stepwise sorting generators
//!
//! Each algorithm is written as an explicit state machine that implements
//! [`Iterator`] over [`Snapshot`]s. Calling `next()` performs work until the
//! next externally visible mutation of the array and returns a copy of the
//! array at that point; `None` means the run is complete.
//!
//! - [`bubble`]: one snapshot per adjacent swap, early exit on a clean pass
//! - [`insertion`]: one snapshot per insertion pass
//! - [`selection`]: one snapshot per minimum swapped into place
//! - [`merge`]: one snapshot per merge-write, merging in place by rotation
//! - [`quick`]: one snapshot per partition swap, over an explicit range
//! - [`heap`]: one snapshot per sift swap and root exchange
//! - [`shell`]: one snapshot per gapped swap
//! - [`counting`]: one snapshot per placement that changes the array
//!
//! # Flattening
//!
//! Divide-and-conquer algorithms keep a work-list of pending sub-ranges
//! instead of recursing. The list is processed depth-first, left before
//! right, so the snapshot order is fully deterministic.
//!
//! # Invariants
//!
//! Every snapshot has the input's length and holds the same multiset of
//! values; writes that would transiently duplicate an element (insertion
//! shifts, merge copies, counting placement) are expressed as rotations or
//! swaps. Inputs of length 0 or 1 produce no snapshots; any longer input
//! produces at least one, and the last one is sorted. A swap-driven run that
//! finds nothing to move reports the unchanged array once before finishing.

pub mod bubble;
pub mod counting;
pub mod heap;
pub mod insertion;
pub mod merge;
pub mod quick;
pub mod selection;
pub mod shell;

pub use bubble::BubbleSort;
pub use counting::CountingSort;
pub use heap::HeapSort;
pub use insertion::InsertionSort;
pub use merge::MergeSort;
pub use quick::QuickSort;
pub use selection::SelectionSort;
pub use shell::ShellSort;
