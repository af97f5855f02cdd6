//! Engine entry points.
//!
//! `filter_listings` filters one collection. `apply_filters` is the
//! dispatcher used on "apply": it re-filters the tours, the rentals, or both,
//! from the same filter state.

use crate::error::{FilterError, Result};
use crate::filter_pipeline::FilterPipeline;
use crate::state::FilterState;
use listing_store::{CollectionKind, Listing, ListingStore};
use std::fmt;
use std::str::FromStr;
use tracing::{debug, instrument};

/// Filter a collection against a filter state.
///
/// The result borrows from `listings` and is a subsequence of it in the
/// original order. Neither argument is modified.
pub fn filter_listings<'a>(listings: &'a [Listing], filters: &FilterState) -> Result<Vec<&'a Listing>> {
    let pipeline = FilterPipeline::from_state(filters)?;
    Ok(pipeline.apply(listings))
}

/// Which collections an apply action re-evaluates
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CollectionTarget {
    Tours,
    Rents,
    #[default]
    All,
}

impl CollectionTarget {
    /// Whether this target re-evaluates the given collection
    pub fn includes(&self, kind: CollectionKind) -> bool {
        match self {
            CollectionTarget::Tours => kind == CollectionKind::Tours,
            CollectionTarget::Rents => kind == CollectionKind::Rents,
            CollectionTarget::All => true,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            CollectionTarget::Tours => "tours",
            CollectionTarget::Rents => "rents",
            CollectionTarget::All => "all",
        }
    }
}

impl fmt::Display for CollectionTarget {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for CollectionTarget {
    type Err = FilterError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_lowercase().as_str() {
            "tours" => Ok(CollectionTarget::Tours),
            "rents" => Ok(CollectionTarget::Rents),
            "all" => Ok(CollectionTarget::All),
            _ => Err(FilterError::UnknownTarget(s.to_string())),
        }
    }
}

/// Result of one apply action.
///
/// A collection left out of the target is `None`: it was not recomputed and
/// the caller keeps whatever it showed before.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FilterOutcome<'a> {
    pub tours: Option<Vec<&'a Listing>>,
    pub rents: Option<Vec<&'a Listing>>,
}

impl<'a> FilterOutcome<'a> {
    /// Recomputed matches for one collection, if it was targeted
    pub fn get(&self, kind: CollectionKind) -> Option<&[&'a Listing]> {
        match kind {
            CollectionKind::Tours => self.tours.as_deref(),
            CollectionKind::Rents => self.rents.as_deref(),
        }
    }

    /// Total number of matches across the recomputed collections
    pub fn total(&self) -> usize {
        CollectionKind::ALL
            .iter()
            .filter_map(|kind| self.get(*kind))
            .map(|matches| matches.len())
            .sum()
    }
}

/// Re-filter the targeted collections of a store from one filter state.
///
/// The filter state is compiled once and the same rules run against each
/// targeted collection's own records.
#[instrument(skip_all, fields(target = %target))]
pub fn apply_filters<'a>(
    store: &'a ListingStore,
    filters: &FilterState,
    target: CollectionTarget,
) -> Result<FilterOutcome<'a>> {
    let pipeline = FilterPipeline::from_state(filters)?;

    let mut outcome = FilterOutcome::default();
    for kind in CollectionKind::ALL {
        if !target.includes(kind) {
            continue;
        }
        let matches = pipeline.apply(store.collection(kind));
        debug!(
            "{}: {} of {} listings match",
            kind,
            matches.len(),
            store.collection(kind).len()
        );
        match kind {
            CollectionKind::Tours => outcome.tours = Some(matches),
            CollectionKind::Rents => outcome.rents = Some(matches),
        }
    }
    Ok(outcome)
}
