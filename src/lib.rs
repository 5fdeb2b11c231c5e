//! Resampling-based statistical inference for behavioral research data.
//!
//! `resamp` implements the percentile bootstrap (single-sample, paired and
//! paired linear-regression variants) and pooled permutation testing, with
//! caller-supplied statistics and an explicitly injected random source.
//!
//! ```no_run
//! use rand::SeedableRng;
//! use resamp::{bootstrap, Confidence, Mean, Sample};
//!
//! let rt: Sample<f64> = [412.0, 388.5, 401.2, 395.7, 420.3].into_iter().collect();
//! let rng = rand::rngs::StdRng::seed_from_u64(7);
//! let run = bootstrap(&rt, &Mean, 10_000, Confidence::P95, rng).unwrap();
//! println!("mean RT in [{}, {}]", run.interval.lower, run.interval.upper);
//! ```

mod display;
mod error;
mod infer;
mod resample;
mod sample;
mod statistics;

pub use crate::error::Error;
pub use crate::infer::{
    bootstrap, bootstrap_pairs, bootstrap_pairs_lin_reg, permutation_test, BootstrapRun,
    PermutationRun, RegressionRun,
};
pub use crate::resample::*;
pub use crate::sample::Sample;
pub use crate::statistics::*;
pub use rand;
pub use rand::Rng;

/// A resampling scheme: maps a source collection to an unbounded stream of
/// resampled collections. Consumers bound the stream with [`Iterator::take`].
pub trait Re<T> {
    /// The resample produced on each draw.
    type Item;
    /// Start a resampling stream over `t`.
    fn re(&self, t: &T) -> impl Iterator<Item = Self::Item>;
}
