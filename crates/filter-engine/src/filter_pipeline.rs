//! The FilterPipeline orchestrates multiple filters.
//!
//! This module provides the FilterPipeline struct that chains filters
//! together, either by hand with the builder pattern or compiled from a
//! `FilterState`.

use crate::error::Result;
use crate::filters::{
    GroupSizeFilter, LabelFilter, LocationFilter, PriceFilter, StartTimeFilter, ThemeFilter,
};
use crate::state::FilterState;
use crate::traits::ListingFilter;
use listing_store::Listing;
use tracing;

/// Chains multiple filters together into a processing pipeline.
///
/// ## Usage
/// ```ignore
/// let pipeline = FilterPipeline::new()
///     .add_filter(PriceFilter::new(2000.0))
///     .add_filter(GroupSizeFilter::new(12));
///
/// let matching = pipeline.apply(store.tours());
/// ```
pub struct FilterPipeline {
    filters: Vec<Box<dyn ListingFilter>>,
}

impl FilterPipeline {
    /// Create a new empty FilterPipeline.
    pub fn new() -> Self {
        Self {
            filters: Vec::new(),
        }
    }

    /// Compile a filter state into the fixed criterion sequence.
    ///
    /// Price, start time and group size are always checked. Theme, activity,
    /// vehicle, features and location are only added when the state selects
    /// something for them; an empty selection places no constraint.
    ///
    /// # Returns
    /// * `Err` - If a theme token cannot be compiled into a matcher
    pub fn from_state(state: &FilterState) -> Result<Self> {
        let mut pipeline = Self::new()
            .add_filter(PriceFilter::new(state.price))
            .add_filter(StartTimeFilter::new(&state.start_time))
            .add_filter(GroupSizeFilter::new(state.group_size));

        if !state.theme.is_empty() {
            pipeline = pipeline.add_filter(ThemeFilter::new(&state.theme)?);
        }
        if !state.activity.is_empty() {
            pipeline = pipeline.add_filter(LabelFilter::activity(&state.activity));
        }
        if !state.vehicle.is_empty() {
            pipeline = pipeline.add_filter(LabelFilter::vehicle(&state.vehicle));
        }
        if !state.features.is_empty() {
            pipeline = pipeline.add_filter(LabelFilter::features(&state.features));
        }
        if !state.location.trim().is_empty() {
            pipeline = pipeline.add_filter(LocationFilter::new(&state.location));
        }

        Ok(pipeline)
    }

    /// Add a filter to the pipeline (builder pattern).
    pub fn add_filter(mut self, filter: impl ListingFilter + 'static) -> Self {
        self.filters.push(Box::new(filter));
        self
    }

    /// Names of the filters in application order
    pub fn filter_names(&self) -> Vec<&str> {
        self.filters.iter().map(|filter| filter.name()).collect()
    }

    pub fn len(&self) -> usize {
        self.filters.len()
    }

    pub fn is_empty(&self) -> bool {
        self.filters.is_empty()
    }

    /// Whether a single listing passes every filter
    pub fn matches(&self, listing: &Listing) -> bool {
        self.filters.iter().all(|filter| filter.matches(listing))
    }

    /// Apply all filters in sequence to a collection.
    ///
    /// ## Algorithm
    /// 1. Start with every listing in the collection
    /// 2. For each filter in order:
    ///    a. Log filter name and input count
    ///    b. Apply the filter
    ///    c. Log output count
    /// 3. Return the surviving listings in their original order
    pub fn apply<'a>(&self, listings: &'a [Listing]) -> Vec<&'a Listing> {
        let mut current: Vec<&'a Listing> = listings.iter().collect();
        for filter in &self.filters {
            tracing::debug!(
                "Applying filter: {} (input count: {})",
                filter.name(),
                current.len()
            );
            current = filter.apply(current);
            tracing::debug!(
                "Filter applied: {} (output count: {})",
                filter.name(),
                current.len()
            );
        }
        current
    }
}

impl Default for FilterPipeline {
    fn default() -> Self {
        Self::new()
    }
}
