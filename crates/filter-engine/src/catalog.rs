//! Filter catalog generation.
//!
//! Builds the selectable chips of the filter dialog from the data itself:
//! every distinct value of a field, lowercased, with how often it occurs.

use crate::error::{FilterError, Result};
use listing_store::Listing;
use serde::Serialize;
use std::collections::HashMap;
use std::fmt;
use std::str::FromStr;

/// Listing fields a catalog can be built for
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum CatalogField {
    Theme,
    Activity,
    Vehicle,
    Features,
}

impl CatalogField {
    /// All catalog fields, in dialog order
    pub const ALL: [CatalogField; 4] = [
        CatalogField::Theme,
        CatalogField::Activity,
        CatalogField::Vehicle,
        CatalogField::Features,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            CatalogField::Theme => "theme",
            CatalogField::Activity => "activity",
            CatalogField::Vehicle => "vehicle",
            CatalogField::Features => "features",
        }
    }

    /// Section title shown above the chips
    pub fn title(&self) -> &'static str {
        match self {
            CatalogField::Theme => "Theme",
            CatalogField::Activity => "Activity",
            CatalogField::Vehicle => "Vehicle",
            CatalogField::Features => "Features",
        }
    }
}

impl fmt::Display for CatalogField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for CatalogField {
    type Err = FilterError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_lowercase().as_str() {
            "theme" | "themes" => Ok(CatalogField::Theme),
            "activity" | "activities" => Ok(CatalogField::Activity),
            "vehicle" | "vehicles" => Ok(CatalogField::Vehicle),
            "features" | "feature" => Ok(CatalogField::Features),
            _ => Err(FilterError::UnknownCatalogField(s.to_string())),
        }
    }
}

/// Anything that exposes the label fields a catalog is built from.
///
/// Singular fields return a one-element list; missing values may be returned
/// as empty strings and are skipped by the catalog builder.
pub trait Faceted {
    fn facet_values(&self, field: CatalogField) -> Vec<&str>;
}

impl Faceted for Listing {
    fn facet_values(&self, field: CatalogField) -> Vec<&str> {
        match field {
            CatalogField::Theme => vec![self.theme.as_str()],
            CatalogField::Activity => self.activity.iter().map(String::as_str).collect(),
            CatalogField::Vehicle => vec![self.vehicle.as_str()],
            CatalogField::Features => self.features.iter().map(String::as_str).collect(),
        }
    }
}

/// One selectable chip
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FilterItem {
    /// Lowercased value, used as the filter token
    pub id: String,
    /// First spelling seen in the data
    pub label: String,
    pub count: usize,
}

/// Aggregate the distinct values of one field.
///
/// ## Algorithm
/// 1. Walk every value of the field, listing by listing
/// 2. Skip empty/whitespace-only values
/// 3. Merge values by their trimmed lowercase form, counting each occurrence
/// 4. Keep entries in order of first appearance
pub fn build_filter_catalog<T: Faceted>(listings: &[T], field: CatalogField) -> Vec<FilterItem> {
    let mut items: Vec<FilterItem> = Vec::new();
    let mut positions: HashMap<String, usize> = HashMap::new();

    for listing in listings {
        for value in listing.facet_values(field) {
            let label = value.trim();
            if label.is_empty() {
                continue;
            }
            let id = label.to_lowercase();
            match positions.get(&id) {
                Some(&pos) => items[pos].count += 1,
                None => {
                    positions.insert(id.clone(), items.len());
                    items.push(FilterItem {
                        id,
                        label: label.to_string(),
                        count: 1,
                    });
                }
            }
        }
    }
    items
}

/// Catalogs for every field of one collection
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct FilterCatalogs {
    pub theme: Vec<FilterItem>,
    pub activity: Vec<FilterItem>,
    pub vehicle: Vec<FilterItem>,
    pub features: Vec<FilterItem>,
}

impl FilterCatalogs {
    pub fn get(&self, field: CatalogField) -> &[FilterItem] {
        match field {
            CatalogField::Theme => &self.theme,
            CatalogField::Activity => &self.activity,
            CatalogField::Vehicle => &self.vehicle,
            CatalogField::Features => &self.features,
        }
    }
}

/// Build the catalog of every field at once
pub fn build_catalogs<T: Faceted>(listings: &[T]) -> FilterCatalogs {
    FilterCatalogs {
        theme: build_filter_catalog(listings, CatalogField::Theme),
        activity: build_filter_catalog(listings, CatalogField::Activity),
        vehicle: build_filter_catalog(listings, CatalogField::Vehicle),
        features: build_filter_catalog(listings, CatalogField::Features),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_case_variants_merge() {
        let listings = vec![
            Listing::new(1, "A", 10.0, 2).with_features(["Transfer"]),
            Listing::new(2, "B", 10.0, 2).with_features(["transfer"]),
        ];

        let catalog = build_filter_catalog(&listings, CatalogField::Features);
        assert_eq!(
            catalog,
            vec![FilterItem {
                id: "transfer".to_string(),
                label: "Transfer".to_string(),
                count: 2,
            }]
        );
    }

    #[test]
    fn test_singular_field_and_empty_values() {
        let listings = vec![
            Listing::new(1, "A", 10.0, 2).with_vehicle("Speedboat"),
            Listing::new(2, "B", 10.0, 2),
            Listing::new(3, "C", 10.0, 2).with_vehicle("  "),
            Listing::new(4, "D", 10.0, 2).with_vehicle("Catamaran"),
            Listing::new(5, "E", 10.0, 2).with_vehicle("speedboat "),
        ];

        let catalog = build_filter_catalog(&listings, CatalogField::Vehicle);
        let summary: Vec<(&str, usize)> = catalog.iter().map(|i| (i.id.as_str(), i.count)).collect();
        assert_eq!(summary, vec![("speedboat", 2), ("catamaran", 1)]);
    }

    #[test]
    fn test_counts_each_array_element() {
        let listings = vec![
            Listing::new(1, "A", 10.0, 2).with_activity(["Swimming", "swimming", "Snorkelling"]),
        ];

        let catalog = build_filter_catalog(&listings, CatalogField::Activity);
        assert_eq!(catalog[0].id, "swimming");
        assert_eq!(catalog[0].count, 2);
        assert_eq!(catalog[1].id, "snorkelling");
        assert_eq!(catalog[1].count, 1);
    }

    #[test]
    fn test_field_parsing() {
        assert_eq!("Features".parse::<CatalogField>().unwrap(), CatalogField::Features);
        assert_eq!("feature".parse::<CatalogField>().unwrap(), CatalogField::Features);
        assert!("price".parse::<CatalogField>().is_err());
    }

    struct Chip(&'static str);

    impl Faceted for Chip {
        fn facet_values(&self, _field: CatalogField) -> Vec<&str> {
            vec![self.0]
        }
    }

    #[test]
    fn test_any_faceted_type() {
        let chips = [Chip("Yacht"), Chip("YACHT"), Chip("")];
        let catalog = build_filter_catalog(&chips, CatalogField::Vehicle);
        assert_eq!(catalog.len(), 1);
        assert_eq!(catalog[0].count, 2);
    }

    #[test]
    fn test_build_catalogs() {
        let listings = vec![
            Listing::new(1, "A", 10.0, 2)
                .with_theme("Safari")
                .with_vehicle("Safari Jeep")
                .with_features(["Halal Food"]),
        ];

        let catalogs = build_catalogs(&listings);
        assert_eq!(catalogs.get(CatalogField::Theme)[0].id, "safari");
        assert_eq!(catalogs.get(CatalogField::Vehicle)[0].id, "safari jeep");
        assert!(catalogs.get(CatalogField::Activity).is_empty());
        assert_eq!(catalogs.features.len(), 1);
    }
}
