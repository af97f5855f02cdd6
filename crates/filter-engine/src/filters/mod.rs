//! Filter implementations, one per criterion of the filter dialog.
//!
//! `FilterPipeline::from_state` composes them in a fixed order.

pub mod group_size;
pub mod labels;
pub mod location;
pub mod price;
pub mod start_time;
pub mod theme;

// Re-export for convenience
pub use group_size::GroupSizeFilter;
pub use labels::{LabelField, LabelFilter};
pub use location::LocationFilter;
pub use price::PriceFilter;
pub use start_time::StartTimeFilter;
pub use theme::ThemeFilter;
