//! Summary Routes
//!
//! Headline figures and the dropdown's mode list.
//!
//! - GET /api/v1/summary - The three summary cards
//! - GET /api/v1/modes - Distinct shipping modes in dropdown order

use axum::{extract::State, Json};
use std::sync::Arc;

use crate::api::dto::{ModesResponse, SummaryDisplay, SummaryResponse};
use crate::api::state::AppState;

/// GET /api/v1/summary
///
/// The three headline figures with card-ready display strings. Invariant
/// under the mode selection.
pub async fn summary(State(state): State<Arc<AppState>>) -> Json<SummaryResponse> {
    let summary = state.store.summary();

    Json(SummaryResponse {
        total_orders: summary.total_orders,
        completed_rate: summary.completed_rate,
        mean_delivery_days: summary.mean_delivery_days,
        display: SummaryDisplay {
            total_orders: summary.display_total(),
            completed_rate: summary.display_completed_rate(),
            mean_delivery_days: summary.display_delivery_days(),
        },
    })
}

/// GET /api/v1/modes
///
/// Distinct shipping modes, first-seen order. The first entry is the
/// dropdown's default selection.
pub async fn modes(State(state): State<Arc<AppState>>) -> Json<ModesResponse> {
    let modes = state.store.modes().to_vec();

    Json(ModesResponse {
        total: modes.len(),
        default: state.store.default_mode().map(str::to_string),
        modes,
    })
}
