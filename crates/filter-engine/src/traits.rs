//! Core trait for the filtering pipeline.
//!
//! Each filter criterion is a `ListingFilter`. The pipeline chains them, and
//! a listing survives only if every filter keeps it.

use listing_store::Listing;

/// A single inclusion predicate over listings.
///
/// ## Design Note
/// - `Send + Sync` allows a compiled pipeline to be shared across threads
/// - Filters only borrow listings; the caller's collection is never touched
/// - `apply` keeps the relative order of the listings it is given
pub trait ListingFilter: Send + Sync {
    /// Returns the name of this filter (for logging/debugging)
    fn name(&self) -> &str;

    /// Whether a single listing passes this criterion
    fn matches(&self, listing: &Listing) -> bool;

    /// Keep the listings that pass this criterion, in their original order.
    fn apply<'a>(&self, listings: Vec<&'a Listing>) -> Vec<&'a Listing> {
        listings
            .into_iter()
            .filter(|listing| self.matches(listing))
            .collect()
    }
}
