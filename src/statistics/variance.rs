use num_traits::{Float, FromPrimitive};

use super::{Mean, Statistic};

/// Variance estimator with configurable degrees-of-freedom adjustment.
#[derive(Debug, Clone, Copy)]
pub struct Variance {
    /// Delta degrees of freedom: 0 for the population variance, 1 for the
    /// unbiased sample variance (Bessel's correction).
    pub ddof: usize,
}

impl Variance {
    /// Creates a `Variance` estimator with the given `ddof`.
    pub fn new(ddof: usize) -> Self {
        Variance { ddof }
    }
}

impl Default for Variance {
    /// Unbiased sample variance (`ddof = 1`).
    fn default() -> Self {
        Variance { ddof: 1 }
    }
}

impl<D, T> Statistic<D, T> for Variance
where
    D: AsRef<[T]>,
    T: Float + FromPrimitive,
{
    fn compute(&self, data: &D) -> T {
        let slice = data.as_ref();

        // Variance undefined for n <= ddof
        if slice.len() <= self.ddof || slice.len() < 2 {
            return T::nan();
        }

        let mean = Mean.compute(data);

        // Kahan summation for squared deviations
        let mut sq_sum = T::zero();
        let mut c = T::zero();
        for &x in slice {
            let dev = x - mean;
            let y = dev * dev - c;
            let t = sq_sum + y;
            c = (t - sq_sum) - y;
            sq_sum = t;
        }

        let dof = T::from_usize(slice.len() - self.ddof).expect("dof fits in float");
        sq_sum / dof
    }
}
