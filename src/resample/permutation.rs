use rand::Rng;

use crate::Sample;

/// Pooled permutation resampler for two-sample null-hypothesis simulation.
///
/// Each draw concatenates the two samples, applies a uniform Fisher-Yates
/// shuffle to the pooled data, and splits it back into two parts with the
/// original lengths. The shuffle destroys any real association between the
/// two labelings while preserving the pooled marginal distribution.
///
/// The samples need not have equal length; the split point is `x.len()`.
#[derive(Clone, Copy, Default)]
pub struct PooledShuffle<R: Rng> {
    /// Random source, cloned per stream.
    pub rng: R,
}

impl<R: Rng> PooledShuffle<R> {
    /// Create a pooled-shuffle resampler driven by `rng`.
    pub fn new(rng: R) -> Self {
        Self { rng }
    }

    /// Start a stream of permutation samples of `x` and `y`.
    pub fn re<'a, T: Copy>(
        &self,
        x: &'a Sample<T>,
        y: &'a Sample<T>,
    ) -> impl Iterator<Item = (Sample<T>, Sample<T>)> + 'a
    where
        R: Clone + 'a,
    {
        PooledShuffleIter {
            x: &x.data,
            y: &y.data,
            rng: self.rng.clone(),
        }
    }
}

struct PooledShuffleIter<'a, T, R: Rng> {
    x: &'a [T],
    y: &'a [T],
    rng: R,
}

impl<T: Copy, R: Rng> Iterator for PooledShuffleIter<'_, T, R> {
    type Item = (Sample<T>, Sample<T>);

    fn next(&mut self) -> Option<Self::Item> {
        let split = self.x.len();
        let mut pooled: Vec<T> = Vec::with_capacity(self.x.len() + self.y.len());
        pooled.extend_from_slice(self.x);
        pooled.extend_from_slice(self.y);

        // Fisher-Yates; the inclusive upper bound keeps the permutation uniform.
        for i in (1..pooled.len()).rev() {
            let j = self.rng.gen_range(0..=i);
            pooled.swap(i, j);
        }

        let perm_y = pooled.split_off(split);
        Some((Sample::new(pooled), Sample::new(perm_y)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand_xoshiro::Xoshiro256PlusPlus;

    #[test]
    fn split_preserves_lengths_and_pool() {
        let x: Sample<f64> = (0..30).map(f64::from).collect();
        let y: Sample<f64> = (100..120).map(f64::from).collect();

        let resampler = PooledShuffle::new(Xoshiro256PlusPlus::seed_from_u64(9));
        for (perm_x, perm_y) in resampler.re(&x, &y).take(10) {
            assert_eq!(perm_x.len(), 30);
            assert_eq!(perm_y.len(), 20);

            // The pooled multiset is exactly preserved.
            let mut pooled: Vec<f64> = perm_x.into_iter().chain(perm_y).collect();
            pooled.sort_by(f64::total_cmp);
            let expected: Vec<f64> = (0..30).chain(100..120).map(f64::from).collect();
            assert_eq!(pooled, expected);
        }
    }

    #[test]
    fn shuffle_actually_moves_observations() {
        let x: Sample<f64> = (0..50).map(f64::from).collect();
        let y: Sample<f64> = (50..100).map(f64::from).collect();

        let resampler = PooledShuffle::new(Xoshiro256PlusPlus::seed_from_u64(3));
        let (perm_x, _) = resampler.re(&x, &y).next().unwrap();
        assert_ne!(perm_x.data, x.data);
    }
}
