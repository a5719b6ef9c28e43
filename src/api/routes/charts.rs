//! Chart Routes
//!
//! Each endpoint returns an ECharts option object ready for `setOption`.
//!
//! - GET /api/v1/charts/map - Province choropleth (full dataset)
//! - GET /api/v1/charts/modes - Shipping-mode donut (full dataset)
//! - GET /api/v1/charts/daily?mode=X - Daily line for a mode
//! - GET /api/v1/charts/heatmap?mode=X - Day/hour heatmap for a mode
//! - GET /api/v1/geo - Boundary GeoJSON for client-side map registration

use axum::{
    extract::{Query, State},
    Json,
};
use serde_json::Value;
use std::sync::Arc;

use crate::api::dto::ChartParams;
use crate::api::error::ApiResult;
use crate::api::state::AppState;
use crate::charts;

/// GET /api/v1/charts/map
///
/// The choropleth option. Invariant under the mode selection.
pub async fn map_chart(State(state): State<Arc<AppState>>) -> ApiResult<Json<Value>> {
    let chart = charts::province_map_chart(state.store.province_counts());
    Ok(Json(serde_json::to_value(&chart)?))
}

/// GET /api/v1/charts/modes
///
/// The shipping-mode donut option. Invariant under the mode selection.
pub async fn mode_chart(State(state): State<Arc<AppState>>) -> ApiResult<Json<Value>> {
    let chart = charts::ship_mode_donut(state.store.mode_counts());
    Ok(Json(serde_json::to_value(&chart)?))
}

/// GET /api/v1/charts/daily?mode=X
///
/// Daily order counts for a shipping mode. An unknown mode yields a chart
/// with no points rather than an error.
pub async fn daily_chart(
    State(state): State<Arc<AppState>>,
    Query(params): Query<ChartParams>,
) -> ApiResult<Json<Value>> {
    let mode = selected_mode(&state, params.mode);
    let chart = charts::daily_line_chart(state.store.daily_for(&mode));
    Ok(Json(serde_json::to_value(&chart)?))
}

/// GET /api/v1/charts/heatmap?mode=X
///
/// Day-of-week x hour-of-day counts for a shipping mode. An unknown mode
/// yields an all-empty 7x24 grid rather than an error.
pub async fn heatmap_chart(
    State(state): State<Arc<AppState>>,
    Query(params): Query<ChartParams>,
) -> ApiResult<Json<Value>> {
    let mode = selected_mode(&state, params.mode);
    let chart = charts::day_hour_heatmap(&state.store.day_hour_for(&mode));
    Ok(Json(serde_json::to_value(&chart)?))
}

/// GET /api/v1/geo
///
/// The boundary GeoJSON, served once per page load for
/// `echarts.registerMap`.
pub async fn boundaries(State(state): State<Arc<AppState>>) -> Json<Value> {
    Json(state.store.boundaries().clone())
}

/// Resolve the requested mode, falling back to the dropdown default
fn selected_mode(state: &AppState, mode: Option<String>) -> String {
    mode.or_else(|| state.store.default_mode().map(str::to_string))
        .unwrap_or_default()
}
