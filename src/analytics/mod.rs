//! Aggregation and summary statistics
//!
//! Pure functions from the record slice to the tables behind each widget.
//! Everything here is deterministic in the input; the store memoizes the
//! results because the dataset never changes after startup.
//!
//! - **summary**: The three headline figures
//! - **pivot**: Group-by-count views (province, mode, daily, day/hour)

pub mod pivot;
pub mod summary;

// Re-export commonly used types
pub use pivot::{
    count_by_mode, count_by_province, daily_counts, day_hour_counts, distinct_modes,
    CategoryCount, DailyCount, DayHourMatrix,
};
pub use summary::ShippingSummary;
