use std::path::Path;

use csv::ReaderBuilder;
use serde::de::DeserializeOwned;

use super::Sample;
use crate::error::Error;

impl<T> Sample<T> {
    /// Read sample data from a CSV file with headers matching struct fields.
    pub fn read<P: AsRef<Path>>(path: P) -> Result<Self, Error>
    where
        T: DeserializeOwned,
    {
        let mut rdr = ReaderBuilder::new().has_headers(true).from_path(path)?;

        let mut records = Vec::new();
        for result in rdr.deserialize() {
            records.push(result?);
        }

        if records.is_empty() {
            return Err(Error::EmptyFile);
        }

        Ok(Self { data: records })
    }
}

impl Sample<f64> {
    /// Read a single named column of a CSV file as numeric observations.
    ///
    /// Behavioral datasets are wide tables with one column per measure; this
    /// pulls one measure out for resampling. Cells that fail to parse as a
    /// number (empty cells, `NA` markers) become NaN so that the statistic
    /// adapters can apply their own missing-data policy.
    pub fn read_column<P: AsRef<Path>>(path: P, column: &str) -> Result<Self, Error> {
        let mut rdr = ReaderBuilder::new().has_headers(true).from_path(path)?;

        let idx = rdr
            .headers()?
            .iter()
            .position(|h| h == column)
            .ok_or_else(|| Error::MissingColumn(column.to_string()))?;

        let mut data = Vec::new();
        for result in rdr.records() {
            let record = result?;
            let cell = record.get(idx).unwrap_or("");
            data.push(cell.trim().parse::<f64>().unwrap_or(f64::NAN));
        }

        if data.is_empty() {
            return Err(Error::EmptyFile);
        }

        Ok(Self { data })
    }
}
