use crate::{MAX_LANDSIZE, MAX_PRICE};
use mhv_core::Listing;

/// Upper bounds (exclusive) applied before sampling.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ListingFilter {
    pub max_price: f64,
    pub max_landsize: f64,
}

impl Default for ListingFilter {
    fn default() -> Self {
        Self {
            max_price: MAX_PRICE,
            max_landsize: MAX_LANDSIZE,
        }
    }
}

impl ListingFilter {
    /// NaN never passes, so rows with blank price or land size are dropped.
    pub fn accepts(&self, listing: &Listing) -> bool {
        listing.price < self.max_price && listing.landsize < self.max_landsize
    }

    pub fn apply(&self, listings: Vec<Listing>) -> Vec<Listing> {
        listings.into_iter().filter(|l| self.accepts(l)).collect()
    }
}
