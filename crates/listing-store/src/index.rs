//! Building and validating a `ListingStore` from a dataset document.

use crate::error::{ListingLoadError, Result};
use crate::parser::{self, Dataset};
use crate::types::*;
use std::collections::HashSet;
use std::path::Path;
use tracing::{info, instrument};

impl ListingStore {
    /// Load the dataset from a JSON file.
    ///
    /// Steps:
    /// 1. Parse the document
    /// 2. Insert every record, keeping document order
    /// 3. Validate ids and numeric fields
    #[instrument(skip_all, fields(path = %path.display()))]
    pub fn load_from_file(path: &Path) -> Result<Self> {
        let dataset = parser::read_dataset(path)?;
        Self::from_dataset(dataset)
    }

    /// Load the dataset from a JSON string
    pub fn from_json_str(content: &str) -> Result<Self> {
        let dataset = parser::parse_dataset(content)?;
        Self::from_dataset(dataset)
    }

    /// Build a store from an already-parsed dataset
    pub fn from_dataset(dataset: Dataset) -> Result<Self> {
        let mut store = ListingStore::new();
        for listing in dataset.tours {
            store.insert(CollectionKind::Tours, listing);
        }
        for listing in dataset.rents {
            store.insert(CollectionKind::Rents, listing);
        }

        store.validate()?;

        let (tours, rents) = store.counts();
        info!("Loaded {} tours and {} rentals", tours, rents);
        Ok(store)
    }

    /// Validate data integrity
    ///
    /// Check that, per collection:
    /// - ids are unique
    /// - price and original price are finite and non-negative
    /// - group size is at least 1
    pub fn validate(&self) -> Result<()> {
        for kind in CollectionKind::ALL {
            let mut seen = HashSet::new();
            for listing in self.collection(kind) {
                if !seen.insert(listing.id) {
                    return Err(ListingLoadError::DuplicateId {
                        collection: kind,
                        id: listing.id,
                    });
                }
                check_amount(kind, listing, "price", listing.price)?;
                check_amount(kind, listing, "originalPrice", listing.original_price)?;
                if listing.group_size == 0 {
                    return Err(ListingLoadError::InvalidValue {
                        collection: kind,
                        id: listing.id,
                        field: "groupSize".to_string(),
                        value: listing.group_size.to_string(),
                    });
                }
            }
        }
        Ok(())
    }
}

fn check_amount(kind: CollectionKind, listing: &Listing, field: &str, value: f64) -> Result<()> {
    if value.is_finite() && value >= 0.0 {
        Ok(())
    } else {
        Err(ListingLoadError::InvalidValue {
            collection: kind,
            id: listing.id,
            field: field.to_string(),
            value: value.to_string(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_duplicate_ids_rejected_per_collection() {
        let mut store = ListingStore::new();
        store.insert(CollectionKind::Tours, Listing::new(1, "A", 10.0, 2));
        store.insert(CollectionKind::Tours, Listing::new(1, "B", 10.0, 2));

        let result = store.validate();
        assert!(matches!(
            result,
            Err(ListingLoadError::DuplicateId { collection: CollectionKind::Tours, id: 1 })
        ));
    }

    #[test]
    fn test_same_id_in_both_collections_is_fine() {
        let mut store = ListingStore::new();
        store.insert(CollectionKind::Tours, Listing::new(1, "Tour", 10.0, 2));
        store.insert(CollectionKind::Rents, Listing::new(1, "Rent", 10.0, 2));

        assert!(store.validate().is_ok());
    }

    #[test]
    fn test_negative_price_rejected() {
        let mut store = ListingStore::new();
        store.insert(CollectionKind::Rents, Listing::new(4, "Broken", -1.0, 2));

        match store.validate() {
            Err(ListingLoadError::InvalidValue { field, id, .. }) => {
                assert_eq!(field, "price");
                assert_eq!(id, 4);
            }
            other => panic!("expected InvalidValue, got {:?}", other),
        }
    }

    #[test]
    fn test_zero_group_size_rejected() {
        let json = r#"{ "rents": [ { "id": 1, "title": "Nobody", "price": 5, "groupSize": 0 } ] }"#;
        assert!(ListingStore::from_json_str(json).is_err());
    }

    #[test]
    fn test_load_sample_dataset() {
        // Sample dataset shipped with the repository
        let path = Path::new("../../data/listings.json");

        if path.exists() {
            let store = ListingStore::load_from_file(path).unwrap();
            let (tours, rents) = store.counts();
            assert!(tours > 0);
            assert!(rents > 0);
        }
    }
}
