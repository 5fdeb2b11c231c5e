mod ci;
mod ecdf;
mod least_squares;
mod mean;
mod percentile;
mod spearman;
mod variance;

pub use ci::{Confidence, Interval};
pub use ecdf::{Cdf, EmpiricalCdf};
pub use least_squares::LeastSquares;
pub use mean::Mean;
pub use percentile::{Percentile, PercentileInterval};
pub use spearman::SpearmanR;
pub use variance::Variance;

/// A one-sample statistic: a pure function from data to a summary value.
///
/// The resampling engines treat implementors as opaque capabilities; they
/// never inspect the computation, only consume its output.
pub trait Statistic<D, T> {
    /// Compute the statistic over `data`.
    fn compute(&self, data: &D) -> T;
}

/// A two-sample statistic.
///
/// Defined over raw slices rather than a paired container because the
/// permutation engine feeds it halves of *unequal* length, which an
/// index-aligned pair type could not represent.
pub trait PairStatistic<F, T> {
    /// Compute the statistic over paired (or pooled-and-split) data.
    fn compute(&self, x: &[F], y: &[F]) -> T;
}
