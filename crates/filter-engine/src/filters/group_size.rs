//! Group size ceiling filter.

use crate::traits::ListingFilter;
use listing_store::Listing;

/// Keeps listings whose maximum group size is at or below the ceiling.
pub struct GroupSizeFilter {
    max_group_size: u32,
}

impl GroupSizeFilter {
    pub fn new(max_group_size: u32) -> Self {
        Self { max_group_size }
    }
}

impl ListingFilter for GroupSizeFilter {
    fn name(&self) -> &str {
        "GroupSizeFilter"
    }

    fn matches(&self, listing: &Listing) -> bool {
        listing.group_size <= self.max_group_size
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_group_size_filter() {
        let small = Listing::new(1, "Private boat", 100.0, 6);
        let large = Listing::new(2, "Ferry tour", 100.0, 45);

        let filter = GroupSizeFilter::new(40);
        assert!(filter.matches(&small));
        assert!(!filter.matches(&large));

        let filter = GroupSizeFilter::new(6);
        assert!(filter.matches(&small));
    }
}
