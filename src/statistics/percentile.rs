use num_traits::{Float, FromPrimitive};

use super::{Confidence, EmpiricalCdf, Interval, Statistic};

/// Percentile estimator with linear interpolation between order statistics.
///
/// Matches the default of numpy's `percentile`: for percent `p`, the value at
/// fractional position `p/100 * (n - 1)` of the sorted data, interpolating
/// between neighbors. The 0th and 100th percentiles are the min and max, so
/// every percentile lies inside the observed range.
#[derive(Debug, Clone, Copy)]
pub struct Percentile {
    percent: f64,
}

impl Percentile {
    /// Create an estimator for `percent` in `[0, 100]`.
    #[inline]
    pub fn new(percent: f64) -> Self {
        debug_assert!((0.0..=100.0).contains(&percent));
        Self { percent }
    }

    /// Convenience constructor for the median.
    #[inline]
    pub fn median() -> Self {
        Self { percent: 50.0 }
    }
}

/// Interpolated value at `percent` over sorted points. NaN when empty.
fn interpolate<T>(sorted: &[T], percent: f64) -> T
where
    T: Float + FromPrimitive,
{
    let n = sorted.len();
    if n == 0 {
        return T::nan();
    }
    if n == 1 {
        return sorted[0];
    }

    let pos = percent.clamp(0.0, 100.0) / 100.0 * (n - 1) as f64;
    let lo = pos.floor() as usize;
    let hi = pos.ceil() as usize;
    if lo == hi {
        return sorted[lo];
    }

    let frac = T::from_f64(pos - lo as f64).expect("fraction fits in float");
    sorted[lo] + (sorted[hi] - sorted[lo]) * frac
}

impl<T> Statistic<EmpiricalCdf<T>, T> for Percentile
where
    T: Float + FromPrimitive,
{
    #[inline]
    fn compute(&self, ecdf: &EmpiricalCdf<T>) -> T {
        interpolate(ecdf.points(), self.percent)
    }
}

/// Two-sided percentile interval extractor for a replicate distribution.
#[derive(Debug, Clone, Copy)]
pub struct PercentileInterval {
    lower: f64,
    upper: f64,
    level: Option<f64>,
}

impl PercentileInterval {
    /// Interval between the `lower` and `upper` percentiles (in percent).
    #[inline]
    pub fn new(lower: f64, upper: f64) -> Self {
        debug_assert!((0.0..=100.0).contains(&lower));
        debug_assert!((0.0..=100.0).contains(&upper));
        debug_assert!(lower <= upper);
        Self {
            lower,
            upper,
            level: None,
        }
    }

    /// The interval matching a supported [`Confidence`] level.
    #[inline]
    pub fn for_confidence(confidence: Confidence) -> Self {
        let (lower, upper) = confidence.cut_points();
        Self {
            lower,
            upper,
            level: Some(confidence.level()),
        }
    }
}

impl<T> Statistic<EmpiricalCdf<T>, Interval<T>> for PercentileInterval
where
    T: Float + FromPrimitive,
{
    fn compute(&self, ecdf: &EmpiricalCdf<T>) -> Interval<T> {
        let points = ecdf.points();
        let interval = Interval::new(
            interpolate(points, self.lower),
            interpolate(points, self.upper),
        );
        match self.level {
            Some(level) => interval.confidence(level),
            None => interval,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    fn ecdf(values: &[f64]) -> EmpiricalCdf<f64> {
        EmpiricalCdf::from_values(values)
    }

    #[test]
    fn median_of_odd_sample_is_middle_value() {
        let median: f64 = Percentile::median().compute(&ecdf(&[5.0, 1.0, 3.0]));
        assert_abs_diff_eq!(median, 3.0);
    }

    #[test]
    fn interpolates_between_order_statistics() {
        // numpy.percentile([1, 2, 3, 4], 25) == 1.75
        let q1: f64 = Percentile::new(25.0).compute(&ecdf(&[1.0, 2.0, 3.0, 4.0]));
        assert_abs_diff_eq!(q1, 1.75);
    }

    #[test]
    fn extremes_are_min_and_max() {
        let cdf = ecdf(&[2.0, 9.0, 4.0]);
        let low: f64 = Percentile::new(0.0).compute(&cdf);
        let high: f64 = Percentile::new(100.0).compute(&cdf);
        assert_abs_diff_eq!(low, 2.0);
        assert_abs_diff_eq!(high, 9.0);
    }

    #[test]
    fn interval_bounds_stay_inside_observed_range() {
        let values: Vec<f64> = (0..1000).map(f64::from).collect();
        let cdf = ecdf(&values);
        let interval = PercentileInterval::for_confidence(Confidence::P95).compute(&cdf);
        assert!(interval.lower <= interval.upper);
        assert!(interval.lower >= 0.0 && interval.upper <= 999.0);
        assert_eq!(interval.confidence, Some(0.95));
    }

    #[test]
    fn wider_confidence_gives_wider_interval() {
        let values: Vec<f64> = (0..1000).map(f64::from).collect();
        let cdf = ecdf(&values);
        let i95 = PercentileInterval::for_confidence(Confidence::P95).compute(&cdf);
        let i99 = PercentileInterval::for_confidence(Confidence::P99).compute(&cdf);
        assert!(i95.width() <= i99.width());
    }
}
