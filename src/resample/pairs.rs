use rand::Rng;

use crate::Sample;

/// Paired bootstrap over two index-aligned samples.
///
/// Each draw generates one index vector of length `n` (with replacement) and
/// applies it to *both* samples, preserving the pairing between observations.
/// This is what distinguishes the paired bootstrap from two independent
/// single-sample bootstraps: `(x[i], y[i])` stay together in every resample.
#[derive(Clone, Copy, Default)]
pub struct PairedBootstrap<R: Rng> {
    /// Random source, cloned per stream like [`crate::Bootstrap`].
    pub rng: R,
}

impl<R: Rng> PairedBootstrap<R> {
    /// Create a paired bootstrap resampler driven by `rng`.
    pub fn new(rng: R) -> Self {
        Self { rng }
    }

    /// Start a stream of paired resamples of `x` and `y`.
    ///
    /// Callers must ensure `x.len() == y.len()`; the engines in
    /// [`crate::bootstrap_pairs`] validate this before any iteration.
    pub fn re<'a, T: Copy>(
        &self,
        x: &'a Sample<T>,
        y: &'a Sample<T>,
    ) -> impl Iterator<Item = (Sample<T>, Sample<T>)> + 'a
    where
        R: Clone + 'a,
    {
        PairedBootstrapIter {
            x: &x.data,
            y: &y.data,
            rng: self.rng.clone(),
        }
    }
}

struct PairedBootstrapIter<'a, T, R: Rng> {
    x: &'a [T],
    y: &'a [T],
    rng: R,
}

impl<T: Copy, R: Rng> Iterator for PairedBootstrapIter<'_, T, R> {
    type Item = (Sample<T>, Sample<T>);

    fn next(&mut self) -> Option<Self::Item> {
        let n = self.x.len();
        if n == 0 {
            return Some((Sample::new(Vec::new()), Sample::new(Vec::new())));
        }

        let mut bs_x = Vec::with_capacity(n);
        let mut bs_y = Vec::with_capacity(n);
        for _ in 0..n {
            // One index per slot, shared by both samples.
            let idx = self.rng.gen_range(0..n);
            bs_x.push(self.x[idx]);
            bs_y.push(self.y[idx]);
        }

        Some((Sample::new(bs_x), Sample::new(bs_y)))
    }
}
