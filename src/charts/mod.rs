//! Chart construction
//!
//! Builds the four dashboard charts as ECharts option objects via charming.
//! Each builder takes one aggregated view and returns a renderable `Chart`;
//! serialization to option JSON happens at the API layer.
//!
//! - **map**: Choropleth of orders per province
//! - **donut**: Shipping-mode share
//! - **line**: Daily orders for the selected mode
//! - **heatmap**: Day-of-week x hour-of-day orders for the selected mode

pub mod donut;
pub mod heatmap;
pub mod line;
pub mod map;

pub use donut::ship_mode_donut;
pub use heatmap::day_hour_heatmap;
pub use line::daily_line_chart;
pub use map::province_map_chart;

use charming::component::VisualMapPiece;

/// Five-step sequential scale shared by the map and the heatmap
pub const SEQUENTIAL_PALETTE: [&str; 5] =
    ["#ffc107", "#fd7e14", "#dc3545", "#e83e8c", "#6f42c1"];

/// Three-color palette for the shipping-mode donut
pub const DONUT_PALETTE: [&str; 3] = ["#ffc107", "#e83e8c", "#6f42c1"];

/// Series color for the daily line chart
pub const LINE_COLOR: &str = "#6f42c1";

/// Name the boundary GeoJSON is registered under on the client
pub const MAP_NAME: &str = "indonesia";

/// Split the count range 0..=max into five equal pieces, one per palette step
pub(crate) fn sequential_pieces(max: u64) -> Vec<VisualMapPiece> {
    let step = max.max(1) as f64 / SEQUENTIAL_PALETTE.len() as f64;

    SEQUENTIAL_PALETTE
        .iter()
        .enumerate()
        .map(|(i, color)| {
            VisualMapPiece::new()
                .min(i as f64 * step)
                .max((i + 1) as f64 * step)
                .color(*color)
        })
        .collect()
}
