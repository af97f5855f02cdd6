//! Whole-word theme filter.
//!
//! Theme tokens double as category labels, so "land" must not match the
//! theme "Island Tour". Each token is matched case-insensitively between
//! word boundaries.

use crate::error::{FilterError, Result};
use crate::traits::ListingFilter;
use listing_store::Listing;
use regex::Regex;

/// Keeps listings whose theme contains at least one selected token as a
/// whole word.
pub struct ThemeFilter {
    matchers: Vec<Regex>,
}

impl ThemeFilter {
    /// Compile one word-boundary matcher per token.
    ///
    /// Tokens are trimmed, lowercased and escaped, so they always match
    /// literally.
    pub fn new(tokens: &[String]) -> Result<Self> {
        let matchers = tokens
            .iter()
            .map(|token| {
                let needle = token.trim().to_lowercase();
                Regex::new(&format!(r"(?i)\b{}\b", regex::escape(&needle))).map_err(|source| {
                    FilterError::InvalidThemeToken {
                        token: token.clone(),
                        source,
                    }
                })
            })
            .collect::<Result<Vec<_>>>()?;
        Ok(Self { matchers })
    }
}

impl ListingFilter for ThemeFilter {
    fn name(&self) -> &str {
        "ThemeFilter"
    }

    fn matches(&self, listing: &Listing) -> bool {
        let theme = listing.theme.to_lowercase();
        self.matchers.iter().any(|matcher| matcher.is_match(&theme))
    }
}
