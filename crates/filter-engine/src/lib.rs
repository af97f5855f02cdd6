//! Filter engine for tour and rental listings.
//!
//! This crate provides:
//! - `FilterState`, the constraints a user picks in the filter dialog
//! - The `ListingFilter` trait and one filter per criterion
//! - `FilterPipeline` for composing filters
//! - `filter_listings` / `apply_filters` entry points
//! - `build_filter_catalog` for the selectable filter chips
//!
//! ## Architecture
//! The engine holds no state. A caller owns the current `FilterState` and
//! the listing collections, and on every apply action:
//! 1. The filter state is compiled into a `FilterPipeline`
//! 2. The pipeline runs over each targeted collection
//! 3. Matching listings come back as borrowed, order-preserving subsets
//!
//! ## Example Usage
//! ```ignore
//! use filter_engine::{apply_filters, CollectionTarget, FilterState};
//!
//! let mut state = FilterState::new();
//! state.toggle_theme("island tour");
//! state.set_price(2000.0);
//!
//! let outcome = apply_filters(&store, &state, CollectionTarget::All)?;
//! println!("{} matches", outcome.total());
//! ```

pub mod error;
pub mod state;
pub mod traits;
pub mod filters;
pub mod filter_pipeline;
pub mod engine;
pub mod catalog;

// Re-export main types
pub use catalog::{
    build_catalogs, build_filter_catalog, CatalogField, Faceted, FilterCatalogs, FilterItem,
};
pub use engine::{apply_filters, filter_listings, CollectionTarget, FilterOutcome};
pub use error::{FilterError, Result};
pub use filter_pipeline::FilterPipeline;
pub use state::FilterState;
pub use traits::ListingFilter;
