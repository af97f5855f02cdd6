//! Error types for the filter-engine crate.

use thiserror::Error;

/// Errors raised while compiling a filter state or parsing engine options.
///
/// Filtering itself never fails: malformed start times and empty results are
/// ordinary outcomes, not errors.
#[derive(Error, Debug)]
pub enum FilterError {
    /// A theme token could not be turned into a whole-word matcher
    #[error("Invalid theme token '{token}': {source}")]
    InvalidThemeToken {
        token: String,
        #[source]
        source: regex::Error,
    },

    /// Catalog field name is not one of theme/activity/vehicle/features
    #[error("Unknown catalog field: {0}")]
    UnknownCatalogField(String),

    /// Collection target is not one of tours/rents/all
    #[error("Unknown collection target: {0}")]
    UnknownTarget(String),
}

pub type Result<T> = std::result::Result<T, FilterError>;
