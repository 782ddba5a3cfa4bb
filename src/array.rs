// Random input arrays for the visualizer

use crate::snapshot::Value;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Produces fixed-size arrays of positive integers
///
/// Values are drawn uniformly from `1..=max_value` and may repeat. A seeded
/// source yields the same sequence of arrays on every run.
#[derive(Debug, Clone)]
pub struct RandomArray {
    size: usize,
    max_value: Value,
    rng: StdRng,
}

impl RandomArray {
    pub fn new(size: usize, max_value: Value) -> Self {
        Self::with_rng(size, max_value, StdRng::from_entropy())
    }

    pub fn seeded(size: usize, max_value: Value, seed: u64) -> Self {
        Self::with_rng(size, max_value, StdRng::seed_from_u64(seed))
    }

    fn with_rng(size: usize, max_value: Value, rng: StdRng) -> Self {
        RandomArray {
            size,
            max_value: max_value.max(1),
            rng,
        }
    }

    pub fn size(&self) -> usize {
        self.size
    }

    pub fn max_value(&self) -> Value {
        self.max_value
    }

    /// Generate the next array
    pub fn generate(&mut self) -> Vec<Value> {
        let max = self.max_value;
        (0..self.size).map(|_| self.rng.gen_range(1..=max)).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_size_and_bounds() {
        let mut source = RandomArray::new(25, 7);
        let array = source.generate();
        assert_eq!(array.len(), 25);
        assert!(array.iter().all(|&v| (1..=7).contains(&v)));
    }

    #[test]
    fn test_seeded_is_reproducible() {
        let mut a = RandomArray::seeded(10, 100, 42);
        let mut b = RandomArray::seeded(10, 100, 42);
        assert_eq!(a.generate(), b.generate());
        assert_eq!(a.generate(), b.generate());
    }

    #[test]
    fn test_zero_max_is_clamped() {
        let mut source = RandomArray::seeded(3, 0, 1);
        assert_eq!(source.generate(), vec![1, 1, 1]);
    }
}
