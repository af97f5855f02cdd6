//! # Listing Store Crate
//!
//! Loads the static tours/rentals dataset and holds it in memory.
//!
//! ## Main Components
//!
//! - **types**: `Listing`, `CollectionKind`, `ListingStore`
//! - **parser**: Parse the JSON dataset document
//! - **index**: Build and validate a `ListingStore`
//! - **error**: Error types for dataset loading
//!
//! ## Example Usage
//!
//! ```ignore
//! use listing_store::{CollectionKind, ListingStore};
//! use std::path::Path;
//!
//! let store = ListingStore::load_from_file(Path::new("data/listings.json"))?;
//! let tours = store.collection(CollectionKind::Tours);
//! println!("{} tours loaded", tours.len());
//! ```

// Public modules
pub mod error;
pub mod types;
pub mod parser;
pub mod index;

// Re-export commonly used types for convenience
pub use error::{ListingLoadError, Result};
pub use parser::Dataset;
pub use types::{hour_component, CollectionKind, Listing, ListingId, ListingStore};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_store_creation() {
        let store = ListingStore::new();
        assert_eq!(store.counts(), (0, 0));
        assert!(store.tours().is_empty());
        assert!(store.rents().is_empty());
    }

    #[test]
    fn test_insert_keeps_order() {
        let mut store = ListingStore::new();
        store.insert(CollectionKind::Tours, Listing::new(3, "Third", 10.0, 2));
        store.insert(CollectionKind::Tours, Listing::new(1, "First", 10.0, 2));
        store.insert(CollectionKind::Rents, Listing::new(9, "Boat", 10.0, 2));

        let ids: Vec<ListingId> = store.tours().iter().map(|l| l.id).collect();
        assert_eq!(ids, vec![3, 1]);
        assert_eq!(store.counts(), (2, 1));
    }

    #[test]
    fn test_get_by_kind() {
        let mut store = ListingStore::new();
        store.insert(CollectionKind::Tours, Listing::new(1, "Tour one", 10.0, 2));
        store.insert(CollectionKind::Rents, Listing::new(1, "Rent one", 10.0, 2));

        assert_eq!(store.get(CollectionKind::Tours, 1).unwrap().title, "Tour one");
        assert_eq!(store.get(CollectionKind::Rents, 1).unwrap().title, "Rent one");
        assert!(store.get(CollectionKind::Rents, 2).is_none());
    }
}
