//! Data preparation for the housing dashboard.
//!
//! Raw listings are read through `mhv-core`, filtered to the price and land
//! size range the charts are designed for, and reduced to a random sample.
//! The whole pipeline is memoized per request arguments in [`cache`].

pub mod cache;
pub mod dataset;
pub mod filter;
pub mod sample;
pub mod source;

pub use cache::{available_rows, get_data, load, LoadRequest, LoaderCache};
pub use dataset::Dataset;
pub use filter::ListingFilter;
pub use source::DataSource;

/// Relative path of the Kaggle export, as shipped next to the binaries.
pub const DEFAULT_DATA_PATH: &str = "Data/melb_data.csv";

/// Rows kept after sampling unless the caller asks for something else.
pub const DEFAULT_N_SAMPLE: usize = 1000;

/// Listings priced at or above this (AUD) are dropped.
pub const MAX_PRICE: f64 = 3_000_000.0;

/// Listings with land at or above this (m²) are dropped.
pub const MAX_LANDSIZE: f64 = 1200.0;
