use std::error::Error as StdError;
use std::fmt;

/// Everything that can go wrong inside this crate.
///
/// Resampling runs fail atomically: any error discards all replicates
/// accumulated for that call. Nothing is retried or recovered internally.
#[derive(Debug)]
pub enum Error {
    /// A resampling source contained no observations. The field names the
    /// offending argument (`"data"`, `"data_1"`, `"data_2"`).
    EmptySample(&'static str),
    /// Paired samples must be index-aligned, so their lengths must match.
    LengthMismatch {
        /// Length of the first sample.
        left: usize,
        /// Length of the second sample.
        right: usize,
    },
    /// The iteration count was zero; an empty replicate collection has no
    /// percentiles, so the call is rejected up front.
    NoIterations,
    /// Confidence level outside the supported set {95, 99}.
    UnsupportedConfidence(u32),
    /// The statistic produced a non-finite value on the *empirical* (not
    /// resampled) data, so no reference value exists to compare replicates
    /// against.
    NonFiniteEmpirical,
    /// Every replicate came out NaN, leaving no distribution to take
    /// percentiles of.
    DegenerateReplicates,
    /// I/O failure while reading sample data.
    Io(std::io::Error),
    /// Malformed CSV input.
    Csv(csv::Error),
    /// The CSV file parsed but yielded no usable observations.
    EmptyFile,
    /// The requested column does not exist in the CSV header.
    MissingColumn(String),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::EmptySample(name) => {
                write!(f, "sample `{name}` is empty; need at least one observation")
            }
            Error::LengthMismatch { left, right } => write!(
                f,
                "paired samples must have equal length, got {left} and {right}"
            ),
            Error::NoIterations => {
                write!(f, "iteration count must be at least 1")
            }
            Error::UnsupportedConfidence(pct) => {
                write!(f, "unsupported confidence level {pct}%; expected 95 or 99")
            }
            Error::NonFiniteEmpirical => {
                write!(f, "statistic returned a non-finite value on the empirical data")
            }
            Error::DegenerateReplicates => {
                write!(f, "all replicates were NaN; no percentile interval exists")
            }
            Error::Io(e) => write!(f, "I/O error: {e}"),
            Error::Csv(e) => write!(f, "CSV parsing error: {e}"),
            Error::EmptyFile => write!(f, "CSV file contains no data records"),
            Error::MissingColumn(name) => write!(f, "CSV header has no column `{name}`"),
        }
    }
}

impl StdError for Error {
    fn source(&self) -> Option<&(dyn StdError + 'static)> {
        match self {
            Error::Io(e) => Some(e),
            Error::Csv(e) => Some(e),
            _ => None,
        }
    }
}

impl From<std::io::Error> for Error {
    fn from(e: std::io::Error) -> Self {
        Error::Io(e)
    }
}

impl From<csv::Error> for Error {
    fn from(e: csv::Error) -> Self {
        Error::Csv(e)
    }
}
