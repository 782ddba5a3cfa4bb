// Snapshot types shared by the sorting generators and the playback controller

use rustc_hash::FxHashMap;

/// A single array element
pub type Value = u32;

/// Full copy of the array contents at one observable point of a sort
pub type Snapshot = Vec<Value>;

/// A lazy, finite sequence of snapshots produced by one sorting run
///
/// `None` from [`Iterator::next`] means the run is done; every generator in
/// [`crate::sorts`] is fused, so it keeps returning `None` afterwards.
pub type SnapshotStream = Box<dyn Iterator<Item = Snapshot> + Send>;

/// Check if a snapshot is sorted ascending
pub fn is_sorted(values: &[Value]) -> bool {
    values.windows(2).all(|w| w[0] <= w[1])
}

/// Check if two snapshots hold the same multiset of values
pub fn is_permutation(a: &[Value], b: &[Value]) -> bool {
    if a.len() != b.len() {
        return false;
    }

    let mut counts: FxHashMap<Value, isize> = FxHashMap::default();
    for &v in a {
        *counts.entry(v).or_insert(0) += 1;
    }
    for &v in b {
        *counts.entry(v).or_insert(0) -= 1;
    }
    counts.values().all(|&c| c == 0)
}
