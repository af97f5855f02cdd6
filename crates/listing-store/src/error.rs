//! Error types for the listing-store crate.
//!
//! Every failure here happens while loading the static dataset. Once a
//! `ListingStore` exists, reading from it cannot fail.

use crate::types::{CollectionKind, ListingId};
use thiserror::Error;

/// Errors that can occur while loading and validating the listing dataset
#[derive(Error, Debug)]
pub enum ListingLoadError {
    /// Dataset file could not be found
    #[error("Failed to open file: {path}")]
    FileNotFound { path: String },

    /// I/O error occurred while reading the dataset
    #[error("I/O error: {0}")]
    IoError(#[from] std::io::Error),

    /// The dataset document is not valid JSON, or a record has the wrong shape
    #[error("Malformed dataset: {0}")]
    JsonError(#[from] serde_json::Error),

    /// Two records in the same collection share an id
    #[error("Duplicate id {id} in {collection}")]
    DuplicateId {
        collection: CollectionKind,
        id: ListingId,
    },

    /// A record field holds a value the engine cannot work with
    #[error("Invalid value for {field} on {collection} #{id}: {value}")]
    InvalidValue {
        collection: CollectionKind,
        id: ListingId,
        field: String,
        value: String,
    },

    /// Collection name is neither "tours" nor "rents"
    #[error("Unknown collection: {0}")]
    UnknownCollection(String),
}

/// Convenience type alias for Results in this crate
pub type Result<T> = std::result::Result<T, ListingLoadError>;
