use rand::Rng;

use super::super::Re;
use crate::Sample;

/// Single-sample bootstrap: each draw selects `n` observations uniformly at
/// random *with replacement* from the source sample.
#[derive(Clone, Copy, Default)]
pub struct Bootstrap<R: Rng> {
    /// Random source. Cloned when a stream starts, so a seeded generator
    /// replays the same stream on every [`Re::re`] call.
    pub rng: R,
}

impl<R: Rng> Bootstrap<R> {
    /// Create a bootstrap resampler driven by `rng`.
    pub fn new(rng: R) -> Self {
        Self { rng }
    }
}

impl<T: Copy, R: Rng + Clone> Re<Sample<T>> for Bootstrap<R> {
    type Item = Sample<T>;

    fn re(&self, sample: &Sample<T>) -> impl Iterator<Item = Self::Item> {
        BootstrapIter {
            data: &sample.data,
            rng: self.rng.clone(),
        }
    }
}

struct BootstrapIter<'a, T, R: Rng> {
    data: &'a [T],
    rng: R,
}

impl<T: Copy, R: Rng> Iterator for BootstrapIter<'_, T, R> {
    type Item = Sample<T>;

    fn next(&mut self) -> Option<Self::Item> {
        let n = self.data.len();
        if n == 0 {
            return Some(Sample::new(Vec::new()));
        }
        let resample = (0..n)
            .map(|_| self.data[self.rng.gen_range(0..n)])
            .collect();
        Some(resample)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand_xoshiro::Xoshiro256PlusPlus;

    fn rng() -> Xoshiro256PlusPlus {
        Xoshiro256PlusPlus::seed_from_u64(42)
    }

    #[test]
    fn resamples_have_source_length() {
        let sample: Sample<f64> = (0..17).map(f64::from).collect();
        for resample in Bootstrap::new(rng()).re(&sample).take(10) {
            assert_eq!(resample.len(), 17);
        }
    }

    #[test]
    fn resamples_draw_only_source_values() {
        let sample: Sample<f64> = [1.0, 2.0, 3.0].into_iter().collect();
        for resample in Bootstrap::new(rng()).re(&sample).take(50) {
            assert!(resample
                .as_ref()
                .iter()
                .all(|v| sample.data.contains(v)));
        }
    }

    #[test]
    fn seeded_streams_replay() {
        let sample: Sample<f64> = (0..100).map(f64::from).collect();
        let resampler = Bootstrap::new(rng());
        let a: Vec<Sample<f64>> = resampler.re(&sample).take(5).collect();
        let b: Vec<Sample<f64>> = resampler.re(&sample).take(5).collect();
        assert_eq!(a, b);
    }
}
