//! The filter state a user builds up in the filter dialog.
//!
//! A `FilterState` is a plain value: the presentation layer owns it, mutates
//! it through toggles and sliders, and hands it to the engine on apply.

use listing_store::hour_component;
use serde::{Deserialize, Serialize};

/// Upper end of the price slider, also the default price ceiling
pub const MAX_PRICE: f64 = 5000.0;
/// Last selectable hour on the start-time slider
pub const MAX_START_HOUR: u32 = 24;
/// Default latest start time
pub const DEFAULT_START_TIME: &str = "17:00";
/// Group size slider range
pub const MIN_GROUP_SIZE: u32 = 1;
pub const MAX_GROUP_SIZE: u32 = 40;

/// User-selected constraints applied against a listing collection.
///
/// Empty token sets and an empty location mean "no constraint".
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct FilterState {
    pub theme: Vec<String>,
    pub activity: Vec<String>,
    /// Inclusive price ceiling
    pub price: f64,
    /// Latest acceptable start, "HH:MM"
    pub start_time: String,
    /// Inclusive group size ceiling
    pub group_size: u32,
    pub vehicle: Vec<String>,
    pub features: Vec<String>,
    /// Case-insensitive substring of the listing location
    pub location: String,
}

impl Default for FilterState {
    fn default() -> Self {
        Self {
            theme: Vec::new(),
            activity: Vec::new(),
            price: MAX_PRICE,
            start_time: DEFAULT_START_TIME.to_string(),
            group_size: MAX_GROUP_SIZE,
            vehicle: Vec::new(),
            features: Vec::new(),
            location: String::new(),
        }
    }
}

impl FilterState {
    /// Create a filter state with the dialog defaults
    pub fn new() -> Self {
        Self::default()
    }

    /// Restore the dialog defaults
    pub fn reset(&mut self) {
        *self = Self::default();
    }

    // Builder helpers

    pub fn with_price(mut self, price: f64) -> Self {
        self.price = price;
        self
    }

    pub fn with_start_time(mut self, start_time: impl Into<String>) -> Self {
        self.start_time = start_time.into();
        self
    }

    pub fn with_group_size(mut self, group_size: u32) -> Self {
        self.group_size = group_size;
        self
    }

    pub fn with_theme(mut self, token: impl Into<String>) -> Self {
        push_unique(&mut self.theme, token.into());
        self
    }

    pub fn with_activity(mut self, token: impl Into<String>) -> Self {
        push_unique(&mut self.activity, token.into());
        self
    }

    pub fn with_vehicle(mut self, token: impl Into<String>) -> Self {
        push_unique(&mut self.vehicle, token.into());
        self
    }

    pub fn with_feature(mut self, token: impl Into<String>) -> Self {
        push_unique(&mut self.features, token.into());
        self
    }

    pub fn with_location(mut self, location: impl Into<String>) -> Self {
        self.location = location.into();
        self
    }

    // Chip toggles: select when absent, deselect when present

    pub fn toggle_theme(&mut self, token: &str) {
        toggle_token(&mut self.theme, token);
    }

    pub fn toggle_activity(&mut self, token: &str) {
        toggle_token(&mut self.activity, token);
    }

    pub fn toggle_vehicle(&mut self, token: &str) {
        toggle_token(&mut self.vehicle, token);
    }

    pub fn toggle_feature(&mut self, token: &str) {
        toggle_token(&mut self.features, token);
    }

    // Sliders: values are clamped to the slider range

    pub fn set_price(&mut self, price: f64) {
        self.price = price.clamp(0.0, MAX_PRICE);
    }

    /// Move the start-time slider; stored as "{hour}:00".
    pub fn set_start_hour(&mut self, hour: u32) {
        self.start_time = format!("{}:00", hour.min(MAX_START_HOUR));
    }

    pub fn set_group_size(&mut self, group_size: u32) {
        self.group_size = group_size.clamp(MIN_GROUP_SIZE, MAX_GROUP_SIZE);
    }

    /// Hour component of the start-time ceiling, if it parses
    pub fn start_hour(&self) -> Option<i64> {
        hour_component(&self.start_time)
    }

    /// Zero-padded "HH:00" label for the start-time slider
    pub fn start_hour_label(&self) -> String {
        match self.start_hour() {
            Some(hour) => format!("{:02}:00", hour),
            None => self.start_time.clone(),
        }
    }
}

fn push_unique(tokens: &mut Vec<String>, token: String) {
    if !tokens.contains(&token) {
        tokens.push(token);
    }
}

fn toggle_token(tokens: &mut Vec<String>, token: &str) {
    if let Some(pos) = tokens.iter().position(|t| t == token) {
        tokens.remove(pos);
    } else {
        tokens.push(token.to_string());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let state = FilterState::default();
        assert_eq!(state.price, 5000.0);
        assert_eq!(state.start_time, "17:00");
        assert_eq!(state.group_size, 40);
        assert!(state.theme.is_empty() && state.features.is_empty());
        assert!(state.location.is_empty());
    }

    #[test]
    fn test_toggle_adds_then_removes() {
        let mut state = FilterState::new();
        state.toggle_activity("swimming");
        state.toggle_activity("snorkelling");
        assert_eq!(state.activity, vec!["swimming", "snorkelling"]);

        state.toggle_activity("swimming");
        assert_eq!(state.activity, vec!["snorkelling"]);
    }

    #[test]
    fn test_sliders_clamp() {
        let mut state = FilterState::new();
        state.set_price(9000.0);
        assert_eq!(state.price, MAX_PRICE);
        state.set_price(-5.0);
        assert_eq!(state.price, 0.0);

        state.set_group_size(0);
        assert_eq!(state.group_size, MIN_GROUP_SIZE);
        state.set_group_size(100);
        assert_eq!(state.group_size, MAX_GROUP_SIZE);

        state.set_start_hour(30);
        assert_eq!(state.start_time, "24:00");
    }

    #[test]
    fn test_start_hour_is_not_padded() {
        let mut state = FilterState::new();
        state.set_start_hour(9);
        assert_eq!(state.start_time, "9:00");
        assert_eq!(state.start_hour(), Some(9));
        assert_eq!(state.start_hour_label(), "09:00");
    }

    #[test]
    fn test_reset_restores_defaults() {
        let mut state = FilterState::new()
            .with_theme("safari")
            .with_vehicle("yacht")
            .with_location("phuket")
            .with_price(100.0);
        state.reset();
        assert_eq!(state, FilterState::default());
    }

    #[test]
    fn test_builder_does_not_duplicate() {
        let state = FilterState::new().with_feature("halal").with_feature("halal");
        assert_eq!(state.features, vec!["halal"]);
    }

    #[test]
    fn test_partial_json_uses_defaults() {
        let state: FilterState =
            serde_json::from_str(r#"{ "theme": ["safari"], "groupSize": 12 }"#).unwrap();
        assert_eq!(state.theme, vec!["safari"]);
        assert_eq!(state.group_size, 12);
        assert_eq!(state.price, 5000.0);
        assert_eq!(state.start_time, "17:00");
    }
}
