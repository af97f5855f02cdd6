//! Latest start time filter.
//!
//! Compares hours only: "09:45" counts as hour 9. Listings whose start time
//! has no `:` (for example a rental available "full day") skip this check.

use crate::traits::ListingFilter;
use listing_store::{Listing, hour_component};

/// Keeps listings that start no later than the given hour.
///
/// ## Algorithm
/// 1. Listing start time without `:` => keep
/// 2. Either hour fails to parse => keep (the comparison cannot exclude)
/// 3. Otherwise keep iff listing hour <= ceiling hour
pub struct StartTimeFilter {
    max_hour: Option<i64>,
}

impl StartTimeFilter {
    /// Create a filter from an "HH:MM" ceiling
    pub fn new(max_start_time: &str) -> Self {
        Self {
            max_hour: hour_component(max_start_time),
        }
    }
}

impl ListingFilter for StartTimeFilter {
    fn name(&self) -> &str {
        "StartTimeFilter"
    }

    fn matches(&self, listing: &Listing) -> bool {
        if !listing.has_clock_start() {
            return true;
        }
        match (listing.start_hour(), self.max_hour) {
            (Some(hour), Some(max_hour)) => hour <= max_hour,
            _ => true,
        }
    }
}
