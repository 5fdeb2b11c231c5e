//! The four resampling operations: single-sample bootstrap, paired
//! bootstrap, paired regression bootstrap, and the pooled permutation test.
//!
//! Each operation validates its inputs up front (fail fast, before any
//! resampling work), runs its `B` iterations sequentially, and either
//! completes with a full replicate collection or fails with no partial
//! results. The random source is supplied by the caller; a seeded generator
//! makes a run bit-for-bit reproducible.

use num_traits::{Float, FromPrimitive};
use rand::Rng;

use crate::error::Error;
use crate::resample::{Bootstrap, PairedBootstrap, PooledShuffle};
use crate::sample::Sample;
use crate::statistics::{
    Cdf, Confidence, Interval, PairStatistic, PercentileInterval, Statistic,
};
use crate::Re;

/// Outcome of a bootstrap run: the replicate collection and its two-sided
/// percentile interval.
#[derive(Debug, Clone)]
pub struct BootstrapRun<F> {
    /// One statistic value per resampling iteration, in iteration order.
    pub replicates: Sample<F>,
    /// Percentile interval of the replicate distribution.
    pub interval: Interval<F>,
}

/// Outcome of a paired regression bootstrap.
///
/// Slope and intercept replicates from the same iteration are correlated and
/// stay index-aligned; downstream joint uses (like drawing fitted lines per
/// replicate) must never shuffle them independently.
#[derive(Debug, Clone)]
pub struct RegressionRun<F> {
    /// Slope replicate per iteration.
    pub slope_replicates: Sample<F>,
    /// Intercept replicate per iteration, aligned with the slopes.
    pub intercept_replicates: Sample<F>,
    /// Percentile interval of the slope replicates only.
    pub slope_interval: Interval<F>,
}

/// Outcome of a permutation test.
#[derive(Debug, Clone)]
pub struct PermutationRun<F> {
    /// Statistic value per permutation, in iteration order.
    pub replicates: Sample<F>,
    /// The statistic on the original, unpermuted data.
    pub observed: F,
    /// One-sided empirical p-value: the fraction of replicates at least as
    /// large as `observed`. Right-tailed by design; the test does not
    /// support two-tailed or negative-direction alternatives.
    pub p_value: F,
    /// Percentile interval of the *null* distribution's spread. This is not
    /// a confidence interval on the empirical effect.
    pub null_interval: Interval<F>,
}

/// Percentile bootstrap of a one-sample statistic.
///
/// Draws `iterations` resamples with replacement from `data`, applies
/// `statistic` to each, and extracts the two-sided percentile interval of
/// the replicates for the given confidence level.
///
/// # Errors
/// - [`Error::EmptySample`] when `data` is empty.
/// - [`Error::NoIterations`] when `iterations == 0`.
/// - [`Error::DegenerateReplicates`] when every replicate is NaN.
pub fn bootstrap<F, S, R>(
    data: &Sample<F>,
    statistic: &S,
    iterations: usize,
    confidence: Confidence,
    rng: R,
) -> Result<BootstrapRun<F>, Error>
where
    F: Float + FromPrimitive,
    S: Statistic<Sample<F>, F>,
    R: Rng + Clone,
{
    if data.is_empty() {
        return Err(Error::EmptySample("data"));
    }
    if iterations == 0 {
        return Err(Error::NoIterations);
    }

    let replicates: Vec<F> = Bootstrap::new(rng)
        .re(data)
        .take(iterations)
        .map(|resample| statistic.compute(&resample))
        .collect();

    let interval = percentile_interval(&replicates, confidence)?;
    Ok(BootstrapRun {
        replicates: Sample::new(replicates),
        interval,
    })
}

/// Paired bootstrap of a two-sample statistic returning `(statistic, p)`.
///
/// One index vector per iteration is applied to both samples, preserving the
/// pairing between observations. Only the first component of the statistic's
/// output is retained; the per-resample p-value is discarded, exactly as in
/// the underlying procedure.
///
/// # Errors
/// - [`Error::EmptySample`] when either sample is empty.
/// - [`Error::LengthMismatch`] when the samples are not index-aligned.
/// - [`Error::NoIterations`] when `iterations == 0`.
/// - [`Error::DegenerateReplicates`] when every replicate is NaN.
pub fn bootstrap_pairs<F, S, R>(
    data_1: &Sample<F>,
    data_2: &Sample<F>,
    statistic: &S,
    iterations: usize,
    confidence: Confidence,
    rng: R,
) -> Result<BootstrapRun<F>, Error>
where
    F: Float + FromPrimitive,
    S: PairStatistic<F, (F, F)>,
    R: Rng + Clone,
{
    validate_paired(data_1, data_2, iterations)?;

    let replicates: Vec<F> = PairedBootstrap::new(rng)
        .re(data_1, data_2)
        .take(iterations)
        .map(|(bs_x, bs_y)| statistic.compute(bs_x.as_ref(), bs_y.as_ref()).0)
        .collect();

    let interval = percentile_interval(&replicates, confidence)?;
    Ok(BootstrapRun {
        replicates: Sample::new(replicates),
        interval,
    })
}

/// Paired bootstrap for linear regression.
///
/// Identical resampling to [`bootstrap_pairs`], but the statistic returns
/// `(slope, intercept)` and *both* components are retained, index-aligned
/// across iterations. The percentile interval covers the slopes only.
///
/// # Errors
/// Same conditions as [`bootstrap_pairs`]; degeneracy is judged on the slope
/// replicates.
pub fn bootstrap_pairs_lin_reg<F, S, R>(
    data_1: &Sample<F>,
    data_2: &Sample<F>,
    statistic: &S,
    iterations: usize,
    confidence: Confidence,
    rng: R,
) -> Result<RegressionRun<F>, Error>
where
    F: Float + FromPrimitive,
    S: PairStatistic<F, (F, F)>,
    R: Rng + Clone,
{
    validate_paired(data_1, data_2, iterations)?;

    let mut slopes = Vec::with_capacity(iterations);
    let mut intercepts = Vec::with_capacity(iterations);
    for (bs_x, bs_y) in PairedBootstrap::new(rng)
        .re(data_1, data_2)
        .take(iterations)
    {
        let (slope, intercept) = statistic.compute(bs_x.as_ref(), bs_y.as_ref());
        slopes.push(slope);
        intercepts.push(intercept);
    }

    let slope_interval = percentile_interval(&slopes, confidence)?;
    Ok(RegressionRun {
        slope_replicates: Sample::new(slopes),
        intercept_replicates: Sample::new(intercepts),
        slope_interval,
    })
}

/// Pooled permutation test of association between two samples.
///
/// Applies `statistic` to the original data for the empirical reference,
/// then `iterations` times to a pooled-shuffled-split version of the data
/// (the null-hypothesis simulation). The one-sided p-value is the fraction
/// of null replicates `>=` the empirical statistic.
///
/// The samples may differ in length; the statistic decides whether that is
/// meaningful for it.
///
/// # Errors
/// - [`Error::EmptySample`] when either sample is empty.
/// - [`Error::NoIterations`] when `iterations == 0`.
/// - [`Error::NonFiniteEmpirical`] when the statistic is non-finite on the
///   original data (no reference to compare against).
/// - [`Error::DegenerateReplicates`] when every replicate is NaN.
pub fn permutation_test<F, S, R>(
    data_1: &Sample<F>,
    data_2: &Sample<F>,
    statistic: &S,
    iterations: usize,
    confidence: Confidence,
    rng: R,
) -> Result<PermutationRun<F>, Error>
where
    F: Float + FromPrimitive,
    S: PairStatistic<F, (F, F)>,
    R: Rng + Clone,
{
    if data_1.is_empty() {
        return Err(Error::EmptySample("data_1"));
    }
    if data_2.is_empty() {
        return Err(Error::EmptySample("data_2"));
    }
    if iterations == 0 {
        return Err(Error::NoIterations);
    }

    let (observed, _observed_p) = statistic.compute(data_1.as_ref(), data_2.as_ref());
    if !observed.is_finite() {
        return Err(Error::NonFiniteEmpirical);
    }

    let replicates: Vec<F> = PooledShuffle::new(rng)
        .re(data_1, data_2)
        .take(iterations)
        .map(|(perm_x, perm_y)| statistic.compute(perm_x.as_ref(), perm_y.as_ref()).0)
        .collect();

    // NaN compares false against the observed value, so degenerate
    // permutations never count as extreme. No +1 correction: the p-value
    // is exactly count(replicates >= observed) / B.
    let extreme = replicates.iter().filter(|&&v| v >= observed).count();
    let p_value =
        F::from_usize(extreme).expect("count fits in float") / F::from_usize(iterations).expect("B fits in float");

    let null_interval = percentile_interval(&replicates, confidence)?;
    Ok(PermutationRun {
        replicates: Sample::new(replicates),
        observed,
        p_value,
        null_interval,
    })
}

fn validate_paired<F>(data_1: &Sample<F>, data_2: &Sample<F>, iterations: usize) -> Result<(), Error> {
    if data_1.is_empty() {
        return Err(Error::EmptySample("data_1"));
    }
    if data_2.is_empty() {
        return Err(Error::EmptySample("data_2"));
    }
    if data_1.len() != data_2.len() {
        return Err(Error::LengthMismatch {
            left: data_1.len(),
            right: data_2.len(),
        });
    }
    if iterations == 0 {
        return Err(Error::NoIterations);
    }
    Ok(())
}

/// Percentile interval over the finite replicates. NaN replicates carry no
/// ordering information and are excluded from the percentile computation;
/// if nothing finite remains, the run is degenerate.
fn percentile_interval<F>(replicates: &[F], confidence: Confidence) -> Result<Interval<F>, Error>
where
    F: Float + FromPrimitive,
{
    let ecdf = Cdf.compute(&replicates);
    if ecdf.is_empty() {
        return Err(Error::DegenerateReplicates);
    }
    Ok(PercentileInterval::for_confidence(confidence).compute(&ecdf))
}
