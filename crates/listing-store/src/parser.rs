//! Parser for the listing dataset document.
//!
//! The dataset is a single JSON object with two arrays:
//!
//! ```text
//! { "tours": [ { "id": 1, "title": "...", ... } ], "rents": [ ... ] }
//! ```
//!
//! Either key may be missing, which yields an empty collection.

use crate::error::{ListingLoadError, Result};
use crate::types::Listing;
use serde::Deserialize;
use std::fs;
use std::path::Path;

/// Raw shape of the dataset document before it is loaded into a store
#[derive(Debug, Default, Deserialize)]
pub struct Dataset {
    #[serde(default)]
    pub tours: Vec<Listing>,
    #[serde(default)]
    pub rents: Vec<Listing>,
}

/// Parse a dataset document held in memory
pub fn parse_dataset(content: &str) -> Result<Dataset> {
    let dataset = serde_json::from_str(content)?;
    Ok(dataset)
}

/// Read and parse a dataset document from disk
pub fn read_dataset(path: &Path) -> Result<Dataset> {
    if !path.exists() {
        return Err(ListingLoadError::FileNotFound {
            path: path.display().to_string(),
        });
    }
    let content = fs::read_to_string(path)?;
    parse_dataset(&content)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_both_collections() {
        let json = r#"{
            "tours": [
                { "id": 1, "title": "Phi Phi Island", "price": 1500, "groupSize": 20 },
                { "id": 2, "title": "Elephant Camp", "price": 1200, "groupSize": 10 }
            ],
            "rents": [
                { "id": 1, "title": "Longtail boat", "price": 3000, "groupSize": 8 }
            ]
        }"#;

        let dataset = parse_dataset(json).unwrap();
        assert_eq!(dataset.tours.len(), 2);
        assert_eq!(dataset.rents.len(), 1);
        assert_eq!(dataset.tours[1].title, "Elephant Camp");
    }

    #[test]
    fn test_missing_collection_is_empty() {
        let json = r#"{ "tours": [ { "id": 1, "title": "Solo", "price": 10, "groupSize": 1 } ] }"#;

        let dataset = parse_dataset(json).unwrap();
        assert_eq!(dataset.tours.len(), 1);
        assert!(dataset.rents.is_empty());
    }

    #[test]
    fn test_missing_required_field() {
        let json = r#"{ "tours": [ { "id": 1, "title": "No price", "groupSize": 4 } ] }"#;

        let result = parse_dataset(json);
        assert!(matches!(result, Err(ListingLoadError::JsonError(_))));
    }

    #[test]
    fn test_missing_file() {
        let result = read_dataset(Path::new("does/not/exist.json"));
        assert!(matches!(result, Err(ListingLoadError::FileNotFound { .. })));
    }
}
