pub mod column;
pub mod error;
pub mod listing;
pub mod reader;

pub use column::{Column, DEFAULT_COLUMNS};
pub use error::HousingError;
pub use listing::Listing;
