//! Loads the sample dataset shipped in `data/`.

use listing_store::{CollectionKind, ListingLoadError, ListingStore};
use std::path::PathBuf;

fn sample_path() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("../../data/listings.json")
}

#[test]
fn test_sample_dataset_loads() {
    let store = ListingStore::load_from_file(&sample_path()).unwrap();
    let (tours, rents) = store.counts();

    assert_eq!(tours, 6);
    assert_eq!(rents, 4);
}

#[test]
fn test_sample_rentals_include_all_day_records() {
    let store = ListingStore::load_from_file(&sample_path()).unwrap();

    let all_day: Vec<u32> = store
        .collection(CollectionKind::Rents)
        .iter()
        .filter(|listing| !listing.has_clock_start())
        .map(|listing| listing.id)
        .collect();
    assert_eq!(all_day, vec![1, 4]);
}

#[test]
fn test_sample_keeps_document_order() {
    let store = ListingStore::load_from_file(&sample_path()).unwrap();
    let ids: Vec<u32> = store.tours().iter().map(|l| l.id).collect();
    assert_eq!(ids, vec![1, 2, 3, 4, 5, 6]);
}

#[test]
fn test_malformed_document() {
    let result = ListingStore::from_json_str(r#"{ "tours": { "id": 1 } }"#);
    assert!(matches!(result, Err(ListingLoadError::JsonError(_))));
}
