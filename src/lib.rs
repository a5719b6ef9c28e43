//! # Shipdash
//!
//! COD Shipping Dashboard - A full-stack Rust application for aggregating
//! and visualizing cash-on-delivery shipping orders across Indonesian
//! provinces.
//!
//! ## Features
//!
//! - **Static dataset, zero ceremony**: Two pre-cleaned files loaded once at
//!   startup, held read-only for the process lifetime
//! - **Memoized views**: Every aggregation precomputed per shipping mode
//! - **Chart objects**: ECharts options built server-side with charming
//! - **Single page**: Summary cards, choropleth, donut, daily line, and a
//!   day/hour heatmap behind one dropdown
//!
//! ## Modules
//!
//! - [`data`]: Dataset loading and the read-only store
//! - [`analytics`]: Summary statistics and group-by-count views
//! - [`charts`]: Chart option builders
//! - [`api`]: HTTP server and dashboard page with Axum
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use shipdash::api::{serve, AppState};
//! use shipdash::config::Config;
//! use shipdash::data::ShipmentStore;
//! use std::sync::Arc;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let config = Config::load_default();
//!
//!     // Load both source files; any failure is fatal
//!     let store = Arc::new(ShipmentStore::load(
//!         &config.data.shipments_path,
//!         &config.data.boundaries_path,
//!     )?);
//!
//!     println!("Serving {} orders", store.summary().total_orders);
//!
//!     let state = AppState::new(store, config.server.clone());
//!     serve(state, &config.server).await?;
//!
//!     Ok(())
//! }
//! ```

pub mod analytics;
pub mod api;
pub mod charts;
pub mod config;
pub mod data;

// Re-export top-level types for convenience
pub use analytics::{
    CategoryCount, DailyCount, DayHourMatrix, ShippingSummary,
};

pub use api::{build_router, serve, ApiError, ApiResult, AppState};

pub use config::{Config, ConfigError, DataConfig, LoggingConfig, ServerConfig};

pub use data::{
    BoundaryMap, DataError, DataResult, OrderDay, ShipmentRecord, ShipmentStore,
    COMPLETED_STATUS,
};
