use num_traits::{Float, FromPrimitive};

use super::PairStatistic;

/// Ordinary least squares fit of `y = slope * x + intercept`.
///
/// Incomplete pairs (either value NaN) are removed listwise before fitting.
/// Returns `(slope, intercept)`; both are NaN when fewer than two complete
/// pairs remain, the predictor is constant, or the slices differ in length.
#[derive(Debug, Clone, Copy, Default)]
pub struct LeastSquares;

impl<F> PairStatistic<F, (F, F)> for LeastSquares
where
    F: Float + FromPrimitive,
{
    fn compute(&self, x: &[F], y: &[F]) -> (F, F) {
        if x.len() != y.len() {
            return (F::nan(), F::nan());
        }

        let (xs, ys): (Vec<F>, Vec<F>) = x
            .iter()
            .zip(y)
            .filter(|(a, b)| !a.is_nan() && !b.is_nan())
            .map(|(&a, &b)| (a, b))
            .unzip();

        let n = xs.len();
        if n < 2 {
            return (F::nan(), F::nan());
        }

        let n_f = F::from_usize(n).expect("length fits in float");
        let mean_x = xs.iter().fold(F::zero(), |acc, &v| acc + v) / n_f;
        let mean_y = ys.iter().fold(F::zero(), |acc, &v| acc + v) / n_f;

        let mut cov = F::zero();
        let mut var_x = F::zero();
        for (&a, &b) in xs.iter().zip(&ys) {
            let dx = a - mean_x;
            cov = cov + dx * (b - mean_y);
            var_x = var_x + dx * dx;
        }

        if var_x.is_zero() {
            return (F::nan(), F::nan());
        }

        let slope = cov / var_x;
        let intercept = mean_y - slope * mean_x;
        (slope, intercept)
    }
}
