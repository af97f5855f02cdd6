//! Free-text location filter.

use crate::traits::ListingFilter;
use listing_store::Listing;

/// Keeps listings whose location contains the query, ignoring case.
pub struct LocationFilter {
    query: String,
}

impl LocationFilter {
    pub fn new(query: &str) -> Self {
        Self {
            query: query.trim().to_lowercase(),
        }
    }
}

impl ListingFilter for LocationFilter {
    fn name(&self) -> &str {
        "LocationFilter"
    }

    fn matches(&self, listing: &Listing) -> bool {
        listing.location.to_lowercase().contains(&self.query)
    }
}
