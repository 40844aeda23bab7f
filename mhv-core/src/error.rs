//! Error type shared by the loader and sampler.

use crate::column::Column;
use std::fmt;
use std::path::PathBuf;

#[derive(Debug)]
pub enum HousingError {
    /// The data file could not be opened.
    Io { path: PathBuf, source: std::io::Error },
    /// Malformed CSV (bad quoting, invalid UTF-8, ...).
    Csv(csv::Error),
    /// A requested column is not in the CSV header.
    MissingColumn(String),
    /// A column name that the dataset does not define.
    UnknownColumn(String),
    /// The price/landsize filter needs this column but it was not requested.
    FilterColumnNotSelected(Column),
    /// More rows were requested than survived the filter.
    SampleTooLarge { requested: usize, available: usize },
}

impl fmt::Display for HousingError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            HousingError::Io { path, source } => {
                write!(f, "failed to open {}: {}", path.display(), source)
            }
            HousingError::Csv(e) => write!(f, "CSV error: {}", e),
            HousingError::MissingColumn(name) => {
                write!(f, "column '{}' not found in CSV header", name)
            }
            HousingError::UnknownColumn(name) => write!(f, "unknown column '{}'", name),
            HousingError::FilterColumnNotSelected(col) => {
                write!(f, "column '{}' is required by the row filter", col)
            }
            HousingError::SampleTooLarge {
                requested,
                available,
            } => write!(
                f,
                "cannot take a sample of {} rows: only {} rows pass the filter",
                requested, available
            ),
        }
    }
}

impl std::error::Error for HousingError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            HousingError::Io { source, .. } => Some(source),
            HousingError::Csv(e) => Some(e),
            _ => None,
        }
    }
}

impl From<csv::Error> for HousingError {
    fn from(e: csv::Error) -> Self {
        HousingError::Csv(e)
    }
}
