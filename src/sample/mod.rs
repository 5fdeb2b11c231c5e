mod read;

use crate::statistics::Statistic;

/// An ordered, finite collection of observations.
///
/// The resampling engines treat a `Sample` as read-only source data; every
/// resample is a fresh `Sample` owned by its consumer.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Sample<T> {
    /// Raw observations, in insertion order.
    pub data: Vec<T>,
}

impl<T> Sample<T> {
    /// Create a new sample from raw data.
    pub fn new(data: Vec<T>) -> Self {
        Self { data }
    }

    /// Number of observations in the sample.
    pub fn len(&self) -> usize {
        self.data.len()
    }

    /// Whether the sample contains no observations.
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Apply a statistic to the sample data.
    pub fn estimate<Output>(&self, statistic: &impl Statistic<Self, Output>) -> Output {
        statistic.compute(self)
    }
}

impl<T> FromIterator<T> for Sample<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Sample::new(iter.into_iter().collect())
    }
}

impl<T> IntoIterator for Sample<T> {
    type Item = T;
    type IntoIter = std::vec::IntoIter<T>;

    fn into_iter(self) -> Self::IntoIter {
        self.data.into_iter()
    }
}

impl<T> AsRef<[T]> for Sample<T> {
    fn as_ref(&self) -> &[T] {
        &self.data
    }
}

impl<T> From<Vec<T>> for Sample<T> {
    fn from(data: Vec<T>) -> Self {
        Sample::new(data)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::statistics::Mean;
    use approx::assert_abs_diff_eq;

    #[test]
    fn estimate_applies_a_statistic() {
        let sample: Sample<f64> = [2.0, 4.0, 6.0].into_iter().collect();
        assert_abs_diff_eq!(sample.estimate(&Mean), 4.0, epsilon = 1e-12);
    }

    #[test]
    fn collecting_preserves_order() {
        let sample: Sample<i32> = (0..5).collect();
        assert_eq!(sample.data, vec![0, 1, 2, 3, 4]);
        assert_eq!(sample.len(), 5);
        assert!(!sample.is_empty());
    }
}
