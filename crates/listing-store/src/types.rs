//! Core domain types for the listing dataset.
//!
//! Tours and rentals share one record shape, `Listing`. Which collection a
//! record belongs to is tracked by `ListingStore`, not by the record itself.

use crate::error::ListingLoadError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

// =============================================================================
// Type Aliases
// =============================================================================

/// Identifier of a listing, unique within its collection
pub type ListingId = u32;

// =============================================================================
// Collections
// =============================================================================

/// The two collections a listing can belong to.
///
/// The dataset document uses the keys `tours` and `rents`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum CollectionKind {
    Tours,
    Rents,
}

impl CollectionKind {
    /// Both collections, in display order
    pub const ALL: [CollectionKind; 2] = [CollectionKind::Tours, CollectionKind::Rents];

    /// Key used for this collection in the dataset document
    pub fn as_str(&self) -> &'static str {
        match self {
            CollectionKind::Tours => "tours",
            CollectionKind::Rents => "rents",
        }
    }

    /// Human-readable plural noun ("tours", "rentals")
    pub fn noun(&self) -> &'static str {
        match self {
            CollectionKind::Tours => "tours",
            CollectionKind::Rents => "rentals",
        }
    }
}

impl fmt::Display for CollectionKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for CollectionKind {
    type Err = ListingLoadError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "tours" | "tour" => Ok(CollectionKind::Tours),
            "rents" | "rent" | "rentals" => Ok(CollectionKind::Rents),
            _ => Err(ListingLoadError::UnknownCollection(s.to_string())),
        }
    }
}

// =============================================================================
// Listing
// =============================================================================

/// A tour or rental record.
///
/// Field names follow the camelCase keys of the dataset document. Only
/// `id`, `title`, `price` and `groupSize` are required; everything else
/// falls back to an empty value when missing.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Listing {
    pub id: ListingId,
    pub title: String,
    #[serde(default)]
    pub location: String,
    #[serde(default)]
    pub rating: f32,
    #[serde(default)]
    pub reviews: u32,
    pub price: f64,
    #[serde(default)]
    pub original_price: f64,
    /// Discount percentage shown on the card
    #[serde(default)]
    pub discount: f64,
    #[serde(default)]
    pub image_url: String,
    #[serde(default)]
    pub duration: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub activity: Vec<String>,
    #[serde(default)]
    pub languages: Vec<String>,
    #[serde(default)]
    pub theme: String,
    /// "HH:MM", or free text such as "full day" for some rentals
    #[serde(default)]
    pub start_time: String,
    /// Maximum supported group size
    pub group_size: u32,
    #[serde(default)]
    pub vehicle: String,
    #[serde(default)]
    pub features: Vec<String>,
}

impl Listing {
    /// Create a listing with only the required fields set.
    pub fn new(id: ListingId, title: impl Into<String>, price: f64, group_size: u32) -> Self {
        Self {
            id,
            title: title.into(),
            location: String::new(),
            rating: 0.0,
            reviews: 0,
            price,
            original_price: price,
            discount: 0.0,
            image_url: String::new(),
            duration: String::new(),
            description: String::new(),
            activity: Vec::new(),
            languages: Vec::new(),
            theme: String::new(),
            start_time: String::new(),
            group_size,
            vehicle: String::new(),
            features: Vec::new(),
        }
    }

    pub fn with_location(mut self, location: impl Into<String>) -> Self {
        self.location = location.into();
        self
    }

    pub fn with_start_time(mut self, start_time: impl Into<String>) -> Self {
        self.start_time = start_time.into();
        self
    }

    pub fn with_theme(mut self, theme: impl Into<String>) -> Self {
        self.theme = theme.into();
        self
    }

    pub fn with_activity<S: Into<String>>(mut self, activity: impl IntoIterator<Item = S>) -> Self {
        self.activity = activity.into_iter().map(Into::into).collect();
        self
    }

    pub fn with_vehicle(mut self, vehicle: impl Into<String>) -> Self {
        self.vehicle = vehicle.into();
        self
    }

    pub fn with_features<S: Into<String>>(mut self, features: impl IntoIterator<Item = S>) -> Self {
        self.features = features.into_iter().map(Into::into).collect();
        self
    }

    /// Set the pre-discount price and discount percentage.
    pub fn with_pricing(mut self, original_price: f64, discount: f64) -> Self {
        self.original_price = original_price;
        self.discount = discount;
        self
    }

    /// Whether the start time has an hour component at all.
    ///
    /// Records without a `:` (e.g. "full day") are never excluded by the
    /// start-time criterion.
    pub fn has_clock_start(&self) -> bool {
        self.start_time.contains(':')
    }

    /// Hour component of the start time, if it has one.
    pub fn start_hour(&self) -> Option<i64> {
        if self.has_clock_start() {
            hour_component(&self.start_time)
        } else {
            None
        }
    }

    /// Amount saved against the original price, never negative.
    pub fn savings(&self) -> f64 {
        (self.original_price - self.price).max(0.0)
    }

    pub fn has_discount(&self) -> bool {
        self.discount > 0.0
    }
}

/// Parse the hour out of an "HH:MM" string.
///
/// Takes everything before the first `:` (the whole string when there is
/// none) and reads it as an integer prefix: leading whitespace is skipped,
/// an optional sign is accepted, and parsing stops at the first non-digit.
/// Returns `None` when no digits are found.
pub fn hour_component(time: &str) -> Option<i64> {
    let head = time.split(':').next().unwrap_or("").trim_start();

    let (negative, digits) = match head.as_bytes().first() {
        Some(b'-') => (true, &head[1..]),
        Some(b'+') => (false, &head[1..]),
        _ => (false, head),
    };

    let digits: Vec<i64> = digits
        .chars()
        .map_while(|c| c.to_digit(10))
        .map(i64::from)
        .collect();
    if digits.is_empty() {
        return None;
    }

    let value = digits
        .into_iter()
        .fold(0i64, |acc, d| acc.saturating_mul(10).saturating_add(d));
    Some(if negative { -value } else { value })
}

// =============================================================================
// ListingStore - the two immutable collections
// =============================================================================

/// Holds the tours and rentals collections.
///
/// Records keep the order they had in the dataset document; the filter
/// engine relies on that order being stable.
#[derive(Debug, Clone, Default)]
pub struct ListingStore {
    pub(crate) tours: Vec<Listing>,
    pub(crate) rents: Vec<Listing>,
}

impl ListingStore {
    /// Creates a new, empty store
    pub fn new() -> Self {
        Self {
            tours: Vec::new(),
            rents: Vec::new(),
        }
    }

    pub fn tours(&self) -> &[Listing] {
        &self.tours
    }

    pub fn rents(&self) -> &[Listing] {
        &self.rents
    }

    /// Get one collection by kind
    pub fn collection(&self, kind: CollectionKind) -> &[Listing] {
        match kind {
            CollectionKind::Tours => &self.tours,
            CollectionKind::Rents => &self.rents,
        }
    }

    /// Look up a listing by id within a collection
    pub fn get(&self, kind: CollectionKind, id: ListingId) -> Option<&Listing> {
        self.collection(kind).iter().find(|listing| listing.id == id)
    }

    /// Append a listing to a collection
    pub fn insert(&mut self, kind: CollectionKind, listing: Listing) {
        match kind {
            CollectionKind::Tours => self.tours.push(listing),
            CollectionKind::Rents => self.rents.push(listing),
        }
    }

    /// (tours, rents) counts
    pub fn counts(&self) -> (usize, usize) {
        (self.tours.len(), self.rents.len())
    }
}
