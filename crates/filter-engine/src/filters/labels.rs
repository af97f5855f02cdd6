//! Substring filters over free-text labels: activity, vehicle, features.
//!
//! Listings phrase multi-word labels inconsistently ("Speedcatamaran" vs.
//! "Catamaran"), so these criteria match a token anywhere inside a label,
//! ignoring case.

use crate::traits::ListingFilter;
use listing_store::Listing;

/// Which label field of a listing a `LabelFilter` inspects
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LabelField {
    Activity,
    Vehicle,
    Features,
}

impl LabelField {
    fn labels<'a>(&self, listing: &'a Listing) -> Vec<&'a str> {
        match self {
            LabelField::Activity => listing.activity.iter().map(String::as_str).collect(),
            LabelField::Vehicle => vec![listing.vehicle.as_str()],
            LabelField::Features => listing.features.iter().map(String::as_str).collect(),
        }
    }
}

/// Keeps listings where at least one token is a case-insensitive substring
/// of at least one label in the chosen field.
pub struct LabelFilter {
    field: LabelField,
    tokens: Vec<String>,
}

impl LabelFilter {
    pub fn new(field: LabelField, tokens: &[String]) -> Self {
        Self {
            field,
            tokens: tokens.iter().map(|t| t.to_lowercase()).collect(),
        }
    }

    pub fn activity(tokens: &[String]) -> Self {
        Self::new(LabelField::Activity, tokens)
    }

    pub fn vehicle(tokens: &[String]) -> Self {
        Self::new(LabelField::Vehicle, tokens)
    }

    pub fn features(tokens: &[String]) -> Self {
        Self::new(LabelField::Features, tokens)
    }
}

impl ListingFilter for LabelFilter {
    fn name(&self) -> &str {
        match self.field {
            LabelField::Activity => "ActivityFilter",
            LabelField::Vehicle => "VehicleFilter",
            LabelField::Features => "FeaturesFilter",
        }
    }

    fn matches(&self, listing: &Listing) -> bool {
        let labels: Vec<String> = self
            .field
            .labels(listing)
            .into_iter()
            .map(str::to_lowercase)
            .collect();
        self.tokens
            .iter()
            .any(|token| labels.iter().any(|label| label.contains(token.as_str())))
    }
}
