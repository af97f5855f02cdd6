//! Price ceiling filter.

use crate::traits::ListingFilter;
use listing_store::Listing;

/// Keeps listings whose price is at or below the ceiling.
pub struct PriceFilter {
    max_price: f64,
}

impl PriceFilter {
    pub fn new(max_price: f64) -> Self {
        Self { max_price }
    }
}

impl ListingFilter for PriceFilter {
    fn name(&self) -> &str {
        "PriceFilter"
    }

    fn matches(&self, listing: &Listing) -> bool {
        listing.price <= self.max_price
    }
}
