//! Data Transfer Objects
//!
//! Request and response types for the API endpoints.
//! These types are serialized/deserialized to/from JSON.

use serde::{Deserialize, Serialize};

// ============================================
// SUMMARY DTOs
// ============================================

/// Headline summary response
#[derive(Debug, Serialize)]
pub struct SummaryResponse {
    /// Total number of orders
    pub total_orders: u64,
    /// Completed share as a percentage in [0, 100]
    pub completed_rate: f64,
    /// Mean delivery duration in days; null when no duration is known
    pub mean_delivery_days: Option<f64>,
    /// Card-ready display strings
    pub display: SummaryDisplay,
}

/// Formatted card values
#[derive(Debug, Serialize)]
pub struct SummaryDisplay {
    /// e.g. "15,000"
    pub total_orders: String,
    /// e.g. "70.00%"
    pub completed_rate: String,
    /// e.g. "3 hari", or a dash when undefined
    pub mean_delivery_days: String,
}

// ============================================
// MODE DTOs
// ============================================

/// Distinct shipping modes, in dropdown order
#[derive(Debug, Serialize)]
pub struct ModesResponse {
    pub total: usize,
    /// First-seen order; the first entry is the default selection
    pub modes: Vec<String>,
    /// The dropdown default, when the dataset is non-empty
    pub default: Option<String>,
}

// ============================================
// CHART DTOs
// ============================================

/// Query parameters for the mode-filtered charts
#[derive(Debug, Deserialize)]
pub struct ChartParams {
    /// Selected shipping mode; defaults to the first distinct mode
    #[serde(default)]
    pub mode: Option<String>,
}

// ============================================
// HEALTH DTOs
// ============================================

/// Full health status response
#[derive(Debug, Serialize)]
pub struct HealthResponse {
    /// Overall status: "healthy" or "degraded"
    pub status: String,
    /// Dataset status: "ok" or "empty"
    pub dataset: String,
    /// Number of loaded shipment records
    pub records: usize,
    /// Distinct shipping modes in the dataset
    pub modes: usize,
    /// Server uptime
    pub uptime_seconds: u64,
    /// Crate version
    pub version: String,
}
