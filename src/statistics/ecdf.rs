use num_traits::Float;

use super::Statistic;

/// Empirical cumulative distribution function over a replicate collection.
///
/// Holds the observations sorted ascending. NaN values carry no ordering
/// information and are filtered during construction; the resampling engines
/// rely on this to exclude undefined replicates from percentile extraction.
#[derive(Debug, Clone)]
pub struct EmpiricalCdf<T> {
    sorted: Vec<T>,
}

impl<T: Float> EmpiricalCdf<T> {
    /// Build an ECDF from unordered values, dropping NaNs.
    pub fn from_values(data: &[T]) -> Self {
        let mut sorted: Vec<T> = data.iter().copied().filter(|x| !x.is_nan()).collect();
        sorted.sort_by(|a, b| a.partial_cmp(b).expect("NaNs already filtered"));
        Self { sorted }
    }

    /// Number of observations backing the ECDF.
    #[inline]
    pub fn n(&self) -> usize {
        self.sorted.len()
    }

    /// Whether the ECDF holds no observations.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.sorted.is_empty()
    }

    /// The sorted observations (the jump points of the step function).
    #[inline]
    pub fn points(&self) -> &[T] {
        &self.sorted
    }

    /// Evaluate `F(x)`: the proportion of observations `<= x`.
    ///
    /// Returns NaN for a NaN input or an empty distribution.
    pub fn eval(&self, x: T) -> f64 {
        if x.is_nan() || self.sorted.is_empty() {
            return f64::NAN;
        }
        let count = self.sorted.partition_point(|v| *v <= x);
        count as f64 / self.sorted.len() as f64
    }
}

/// Statistic constructor for [`EmpiricalCdf`].
#[derive(Debug, Clone, Copy, Default)]
pub struct Cdf;

impl<D, T> Statistic<D, EmpiricalCdf<T>> for Cdf
where
    D: AsRef<[T]>,
    T: Float,
{
    #[inline]
    fn compute(&self, data: &D) -> EmpiricalCdf<T> {
        EmpiricalCdf::from_values(data.as_ref())
    }
}
