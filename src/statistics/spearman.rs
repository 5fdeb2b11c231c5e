use num_traits::{Float, FromPrimitive};
use statrs::distribution::{ContinuousCDF, StudentsT};

use super::PairStatistic;

/// Spearman rank correlation coefficient with a two-sided p-value.
///
/// Pairs where either observation is NaN are omitted before ranking, the
/// behavioral-data convention for missing trials. Ranks use midranks for
/// ties; the p-value comes from the t approximation
/// `t = r * sqrt((n - 2) / (1 - r^2))` with `n - 2` degrees of freedom.
///
/// Returns `(NaN, NaN)` when fewer than two complete pairs remain or when
/// the input slices have unequal lengths.
#[derive(Debug, Clone, Copy, Default)]
pub struct SpearmanR;

impl<F> PairStatistic<F, (F, F)> for SpearmanR
where
    F: Float + FromPrimitive,
{
    fn compute(&self, x: &[F], y: &[F]) -> (F, F) {
        if x.len() != y.len() {
            return (F::nan(), F::nan());
        }

        // Pairwise omission of incomplete observations.
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

        let r = pearson(&midranks(&xs), &midranks(&ys));
        if r.is_nan() {
            return (F::nan(), F::nan());
        }

        (r, t_approx_p_value(r, n))
    }
}

/// Midranks (1-based, ties averaged), as `scipy.stats.rankdata` computes them.
fn midranks<F: Float + FromPrimitive>(values: &[F]) -> Vec<F> {
    let n = values.len();
    let mut order: Vec<usize> = (0..n).collect();
    order.sort_by(|&a, &b| values[a].partial_cmp(&values[b]).expect("NaNs already omitted"));

    let mut ranks = vec![F::zero(); n];
    let mut i = 0;
    while i < n {
        let mut j = i;
        while j + 1 < n && values[order[j + 1]] == values[order[i]] {
            j += 1;
        }
        // Tied block [i, j] shares the average of its 1-based positions.
        let midrank = F::from_f64((i + j) as f64 / 2.0 + 1.0).expect("rank fits in float");
        for k in i..=j {
            ranks[order[k]] = midrank;
        }
        i = j + 1;
    }
    ranks
}

/// Pearson correlation of two equal-length slices.
fn pearson<F: Float + FromPrimitive>(x: &[F], y: &[F]) -> F {
    let n = F::from_usize(x.len()).expect("length fits in float");
    let mean_x = x.iter().fold(F::zero(), |acc, &v| acc + v) / n;
    let mean_y = y.iter().fold(F::zero(), |acc, &v| acc + v) / n;

    let mut cov = F::zero();
    let mut var_x = F::zero();
    let mut var_y = F::zero();
    for (&a, &b) in x.iter().zip(y) {
        let dx = a - mean_x;
        let dy = b - mean_y;
        cov = cov + dx * dy;
        var_x = var_x + dx * dx;
        var_y = var_y + dy * dy;
    }

    let denom = (var_x * var_y).sqrt();
    if denom.is_zero() {
        // A constant margin (all ranks tied) has no defined correlation.
        F::nan()
    } else {
        cov / denom
    }
}

/// Two-sided p-value for the t approximation of Spearman's statistic.
fn t_approx_p_value<F: Float + FromPrimitive>(r: F, n: usize) -> F {
    if n < 3 {
        return F::nan();
    }
    let r_f64 = r.to_f64().expect("coefficient is a plain float");
    if r_f64.abs() >= 1.0 {
        return F::zero();
    }

    let df = (n - 2) as f64;
    let t = r_f64 * (df / (1.0 - r_f64 * r_f64)).sqrt();
    let dist = StudentsT::new(0.0, 1.0, df).expect("df >= 1 by construction");
    let p = 2.0 * (1.0 - dist.cdf(t.abs()));
    F::from_f64(p).expect("p-value is a plain float")
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    #[test]
    fn perfect_monotonic_association() {
        // Monotone but nonlinear: Spearman sees rank agreement 1.0.
        let x = [1.0_f64, 2.0, 3.0, 4.0, 5.0];
        let y = [1.0_f64, 4.0, 9.0, 16.0, 25.0];
        let (r, p) = SpearmanR.compute(&x, &y);
        assert_abs_diff_eq!(r, 1.0, epsilon = 1e-12);
        assert_abs_diff_eq!(p, 0.0, epsilon = 1e-12);
    }

    #[test]
    fn perfect_inverse_association() {
        let x = [1.0_f64, 2.0, 3.0, 4.0];
        let y = [8.0_f64, 6.0, 4.0, 2.0];
        let (r, _) = SpearmanR.compute(&x, &y);
        assert_abs_diff_eq!(r, -1.0, epsilon = 1e-12);
    }

    #[test]
    fn ties_get_midranks() {
        let ranks = midranks(&[10.0_f64, 20.0, 20.0, 30.0]);
        assert_eq!(ranks, vec![1.0, 2.5, 2.5, 4.0]);
    }

    #[test]
    fn nan_pairs_are_omitted() {
        let x = [1.0_f64, f64::NAN, 3.0, 4.0, 5.0];
        let y = [2.0_f64, 4.0, f64::NAN, 8.0, 10.0];
        let (r, _) = SpearmanR.compute(&x, &y);
        // Three complete pairs remain, all perfectly concordant.
        assert_abs_diff_eq!(r, 1.0, epsilon = 1e-12);
    }

    #[test]
    fn degenerate_inputs_return_nan() {
        let (r, p) = SpearmanR.compute(&[1.0_f64], &[2.0_f64]);
        assert!(r.is_nan() && p.is_nan());

        // Constant margin: every rank tied.
        let (r, _) = SpearmanR.compute(&[5.0_f64, 5.0, 5.0], &[1.0, 2.0, 3.0]);
        assert!(r.is_nan());

        // Length mismatch.
        let (r, _) = SpearmanR.compute(&[1.0_f64, 2.0], &[1.0_f64, 2.0, 3.0]);
        assert!(r.is_nan());
    }

    #[test]
    fn moderate_association_has_interior_p_value() {
        let x = [1.0_f64, 2.0, 3.0, 4.0, 5.0, 6.0, 7.0, 8.0];
        let y = [2.0_f64, 1.0, 4.0, 3.0, 6.0, 5.0, 8.0, 7.0];
        let (r, p) = SpearmanR.compute(&x, &y);
        assert!(r > 0.5 && r < 1.0);
        assert!(p > 0.0 && p < 1.0);
    }
}
