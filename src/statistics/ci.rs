use std::fmt;
use std::ops::Sub;

use crate::error::Error;

/// Supported confidence levels for percentile intervals.
///
/// The set is deliberately closed: anything other than 95% or 99% is an
/// invalid configuration, rejected by [`Confidence::from_percent`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Confidence {
    /// 95% interval, cut at the 2.5th and 97.5th percentiles.
    #[default]
    P95,
    /// 99% interval, cut at the 0.5th and 99.5th percentiles.
    P99,
}

impl Confidence {
    /// Parse a whole-percent confidence level.
    ///
    /// # Errors
    /// [`Error::UnsupportedConfidence`] for anything outside {95, 99}.
    pub fn from_percent(percent: u32) -> Result<Self, Error> {
        match percent {
            95 => Ok(Confidence::P95),
            99 => Ok(Confidence::P99),
            other => Err(Error::UnsupportedConfidence(other)),
        }
    }

    /// Confidence level as a fraction in (0, 1).
    pub fn level(self) -> f64 {
        match self {
            Confidence::P95 => 0.95,
            Confidence::P99 => 0.99,
        }
    }

    /// Two-sided percentile cut points, in percent.
    pub fn cut_points(self) -> (f64, f64) {
        match self {
            Confidence::P95 => (2.5, 97.5),
            Confidence::P99 => (0.5, 99.5),
        }
    }
}

impl fmt::Display for Confidence {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Confidence::P95 => write!(f, "95%"),
            Confidence::P99 => write!(f, "99%"),
        }
    }
}

/// Statistical interval with optional point estimate and confidence level.
#[derive(Clone, Copy, PartialEq, Debug)]
pub struct Interval<T> {
    /// Lower bound.
    pub lower: T,
    /// Upper bound.
    pub upper: T,
    /// Point estimate the interval brackets, if one is attached.
    pub estimate: Option<T>,
    /// Confidence level in (0, 1), if one is attached.
    pub confidence: Option<f64>,
}

impl<T: PartialOrd + Copy> Interval<T> {
    /// Create an interval from its bounds.
    #[inline]
    pub const fn new(lower: T, upper: T) -> Self {
        Self {
            lower,
            upper,
            estimate: None,
            confidence: None,
        }
    }

    /// Fluent builder: attach a point estimate.
    #[must_use]
    pub const fn estimate(mut self, estimate: T) -> Self {
        self.estimate = Some(estimate);
        self
    }

    /// Fluent builder: attach a confidence level (0.0 < level < 1.0).
    #[must_use]
    pub const fn confidence(mut self, confidence: f64) -> Self {
        self.confidence = Some(confidence);
        self
    }

    /// Check if `value` lies within `[lower, upper]` (inclusive).
    #[inline]
    pub fn contains(&self, value: &T) -> bool {
        self.lower <= *value && *value <= self.upper
    }

    /// Interval width: `upper - lower`.
    #[inline]
    pub fn width(&self) -> T
    where
        T: Sub<Output = T>,
    {
        self.upper - self.lower
    }

    /// Basic validity check: ordered bounds, contained estimate, sane level.
    #[inline]
    pub fn is_valid(&self) -> bool {
        if self.lower > self.upper {
            return false;
        }
        if let Some(est) = self.estimate {
            if est < self.lower || est > self.upper {
                return false;
            }
        }
        self.confidence.map_or(true, |c| c > 0.0 && c < 1.0)
    }
}

impl<T: fmt::Display> fmt::Display for Interval<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}, {}]", self.lower, self.upper)?;
        if let Some(conf) = self.confidence {
            write!(f, " with {conf:.2}")?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn from_percent_accepts_only_supported_levels() {
        assert_eq!(Confidence::from_percent(95).unwrap(), Confidence::P95);
        assert_eq!(Confidence::from_percent(99).unwrap(), Confidence::P99);
        assert!(matches!(
            Confidence::from_percent(90),
            Err(Error::UnsupportedConfidence(90))
        ));
    }

    #[test]
    fn cut_points_nest() {
        let (lo95, hi95) = Confidence::P95.cut_points();
        let (lo99, hi99) = Confidence::P99.cut_points();
        assert!(lo99 < lo95 && hi95 < hi99);
    }

    #[test]
    fn interval_contains_and_width() {
        let interval = Interval::new(1.0, 3.0).estimate(2.0).confidence(0.95);
        assert!(interval.contains(&1.0));
        assert!(interval.contains(&3.0));
        assert!(!interval.contains(&3.1));
        assert_eq!(interval.width(), 2.0);
        assert!(interval.is_valid());
    }

    #[test]
    fn inverted_bounds_are_invalid() {
        assert!(!Interval::new(3.0, 1.0).is_valid());
    }
}
