use mhv_core::reader::{read_listings_path, read_listings_str};
use mhv_core::{Column, HousingError, Listing};
use std::fmt;
use std::path::PathBuf;

/// Where listings come from.
///
/// Native binaries read from disk; the WASM dashboard compiles the CSV into
/// the binary with `include_str!` and hands it over as `Embedded`.
#[derive(Debug, Clone)]
pub enum DataSource {
    File(PathBuf),
    Embedded { name: String, csv: &'static str },
}

impl DataSource {
    pub fn file(path: impl Into<PathBuf>) -> Self {
        DataSource::File(path.into())
    }

    pub fn embedded(name: &str, csv: &'static str) -> Self {
        DataSource::Embedded {
            name: name.to_string(),
            csv,
        }
    }

    /// Identity used by the loader cache. Embedded data is keyed by name only.
    pub fn cache_key(&self) -> String {
        match self {
            DataSource::File(path) => format!("file:{}", path.display()),
            DataSource::Embedded { name, .. } => format!("embedded:{}", name),
        }
    }

    pub fn read(&self, columns: &[Column]) -> Result<Vec<Listing>, HousingError> {
        match self {
            DataSource::File(path) => read_listings_path(path, columns),
            DataSource::Embedded { csv, .. } => read_listings_str(csv, columns),
        }
    }
}

impl fmt::Display for DataSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DataSource::File(path) => write!(f, "{}", path.display()),
            DataSource::Embedded { name, .. } => write!(f, "{} (embedded)", name),
        }
    }
}
