//! Shipdash HTTP API
//!
//! HTTP layer for the dashboard, built with Axum.
//!
//! # Endpoints
//!
//! ## Page
//! - `GET /` - The dashboard page
//!
//! ## Summary
//! - `GET /api/v1/summary` - Headline figures
//! - `GET /api/v1/modes` - Distinct shipping modes
//!
//! ## Charts (ECharts option objects)
//! - `GET /api/v1/charts/map` - Province choropleth
//! - `GET /api/v1/charts/modes` - Shipping-mode donut
//! - `GET /api/v1/charts/daily?mode=X` - Daily line for a mode
//! - `GET /api/v1/charts/heatmap?mode=X` - Day/hour heatmap for a mode
//! - `GET /api/v1/geo` - Boundary GeoJSON
//!
//! ## Health
//! - `GET /health/live` - Liveness probe
//! - `GET /health/ready` - Readiness probe
//! - `GET /health` - Full health status
//!
//! # Example
//!
//! ```rust,ignore
//! use shipdash::api::{serve, AppState};
//! use shipdash::config::Config;
//! use shipdash::data::ShipmentStore;
//! use std::sync::Arc;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let config = Config::load_default();
//!     let store = Arc::new(ShipmentStore::load(
//!         &config.data.shipments_path,
//!         &config.data.boundaries_path,
//!     )?);
//!
//!     let state = AppState::new(store, config.server.clone());
//!     serve(state, &config.server).await?;
//!
//!     Ok(())
//! }
//! ```

pub mod dto;
pub mod error;
pub mod routes;
pub mod state;

pub use error::{ApiError, ApiResult};
pub use state::AppState;

use axum::{routing::get, Router};
use std::sync::Arc;
use tower_http::{cors::CorsLayer, trace::TraceLayer};

use crate::config::ServerConfig;

/// Build the router with all routes and middleware
pub fn build_router(state: AppState) -> Router {
    let api_routes = Router::new()
        // Summary routes
        .route("/summary", get(routes::summary::summary))
        .route("/modes", get(routes::summary::modes))
        // Chart routes
        .route("/charts/map", get(routes::charts::map_chart))
        .route("/charts/modes", get(routes::charts::mode_chart))
        .route("/charts/daily", get(routes::charts::daily_chart))
        .route("/charts/heatmap", get(routes::charts::heatmap_chart))
        // Boundary dataset
        .route("/geo", get(routes::charts::boundaries));

    let health_routes = Router::new()
        .route("/live", get(routes::health::liveness))
        .route("/ready", get(routes::health::readiness))
        .route("/", get(routes::health::full_health));

    // Create shared state
    let shared_state = Arc::new(state);

    Router::new()
        .route("/", get(routes::dashboard::dashboard))
        .nest("/api/v1", api_routes)
        .nest("/health", health_routes)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(shared_state)
}

/// Start the HTTP server
pub async fn serve(state: AppState, config: &ServerConfig) -> Result<(), ApiError> {
    let router = build_router(state);

    let addr = config.addr();
    let listener = tokio::net::TcpListener::bind(&addr).await?;

    tracing::info!("Shipdash listening on {}", addr);

    axum::serve(listener, router)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .map_err(|e| ApiError::Internal(format!("Server error: {}", e)))?;

    tracing::info!("Shipdash shut down gracefully");
    Ok(())
}

/// Wait for shutdown signal
async fn shutdown_signal() {
    let ctrl_c = async {
        tokio::signal::ctrl_c()
            .await
            .expect("Failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate())
            .expect("Failed to install signal handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }

    tracing::info!("Shutdown signal received, starting graceful shutdown");
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::{OrderDay, ShipmentRecord, ShipmentStore};
    use axum::{
        body::{to_bytes, Body},
        http::{Request, StatusCode},
    };
    use chrono::NaiveDate;
    use serde_json::json;
    use tower::util::ServiceExt;

    fn test_record(province: &str, mode: &str, day: u32, hour: u8) -> ShipmentRecord {
        ShipmentRecord {
            order_id: format!("{}-{}-{}-{}", province, mode, day, hour),
            province: province.to_string(),
            ship_mode: mode.to_string(),
            status: "Completed".to_string(),
            creation_date: NaiveDate::from_ymd_opt(2022, 7, day).unwrap(),
            day_to_arv: Some(2.0),
            order_day: OrderDay::Monday,
            order_hour: hour,
        }
    }

    fn create_test_app() -> Router {
        let records = vec![
            test_record("Bali", "Standard", 1, 8),
            test_record("Bali", "Standard", 2, 9),
            test_record("Aceh", "Same Day", 1, 20),
        ];
        let boundaries = json!({
            "type": "FeatureCollection",
            "features": [
                {"type": "Feature", "properties": {"NAME_1": "Bali", "name": "Bali"}, "geometry": null}
            ]
        });
        let store = ShipmentStore::new(records, boundaries, &["Bali".to_string()]);

        let state = AppState::new(Arc::new(store), ServerConfig::default());
        build_router(state)
    }

    async fn get(app: Router, uri: &str) -> (StatusCode, String) {
        let response = app
            .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
            .await
            .unwrap();

        let status = response.status();
        let body = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        (status, String::from_utf8(body.to_vec()).unwrap())
    }

    #[tokio::test]
    async fn test_health_live() {
        let (status, _) = get(create_test_app(), "/health/live").await;
        assert_eq!(status, StatusCode::OK);
    }

    #[tokio::test]
    async fn test_health_ready() {
        let (status, _) = get(create_test_app(), "/health/ready").await;
        assert_eq!(status, StatusCode::OK);
    }

    #[tokio::test]
    async fn test_health_full() {
        let (status, body) = get(create_test_app(), "/health").await;

        assert_eq!(status, StatusCode::OK);
        let health: serde_json::Value = serde_json::from_str(&body).unwrap();
        assert_eq!(health["status"], "healthy");
        assert_eq!(health["records"], 3);
    }

    #[tokio::test]
    async fn test_summary() {
        let (status, body) = get(create_test_app(), "/api/v1/summary").await;

        assert_eq!(status, StatusCode::OK);
        let summary: serde_json::Value = serde_json::from_str(&body).unwrap();
        assert_eq!(summary["total_orders"], 3);
        assert_eq!(summary["display"]["completed_rate"], "100.00%");
        assert_eq!(summary["display"]["mean_delivery_days"], "2 hari");
    }

    #[tokio::test]
    async fn test_modes() {
        let (status, body) = get(create_test_app(), "/api/v1/modes").await;

        assert_eq!(status, StatusCode::OK);
        let modes: serde_json::Value = serde_json::from_str(&body).unwrap();
        assert_eq!(modes["modes"], json!(["Standard", "Same Day"]));
        assert_eq!(modes["default"], "Standard");
    }

    #[tokio::test]
    async fn test_map_chart() {
        let (status, body) = get(create_test_app(), "/api/v1/charts/map").await;

        assert_eq!(status, StatusCode::OK);
        let option: serde_json::Value = serde_json::from_str(&body).unwrap();
        assert_eq!(option["series"][0]["type"], "map");
    }

    #[tokio::test]
    async fn test_daily_chart_defaults_to_first_mode() {
        let (status, body) = get(create_test_app(), "/api/v1/charts/daily").await;

        assert_eq!(status, StatusCode::OK);
        let option: serde_json::Value = serde_json::from_str(&body).unwrap();
        // Two Standard days
        assert_eq!(option["series"][0]["data"].as_array().unwrap().len(), 2);
    }

    #[tokio::test]
    async fn test_daily_chart_unknown_mode_is_empty_not_error() {
        let (status, body) =
            get(create_test_app(), "/api/v1/charts/daily?mode=Carrier%20Pigeon").await;

        assert_eq!(status, StatusCode::OK);
        let option: serde_json::Value = serde_json::from_str(&body).unwrap();
        assert_eq!(option["series"][0]["data"].as_array().unwrap().len(), 0);
    }

    #[tokio::test]
    async fn test_heatmap_chart_unknown_mode_is_empty_not_error() {
        let (status, body) =
            get(create_test_app(), "/api/v1/charts/heatmap?mode=Carrier%20Pigeon").await;

        assert_eq!(status, StatusCode::OK);
        let option: serde_json::Value = serde_json::from_str(&body).unwrap();
        assert_eq!(option["series"][0]["data"].as_array().unwrap().len(), 0);
    }

    #[tokio::test]
    async fn test_geo() {
        let (status, body) = get(create_test_app(), "/api/v1/geo").await;

        assert_eq!(status, StatusCode::OK);
        let geo: serde_json::Value = serde_json::from_str(&body).unwrap();
        assert_eq!(geo["type"], "FeatureCollection");
    }

    #[tokio::test]
    async fn test_dashboard_page() {
        let (status, body) = get(create_test_app(), "/").await;

        assert_eq!(status, StatusCode::OK);
        assert!(body.contains("Dashboard Pengiriman COD"));
        assert!(body.contains("mode-select"));
        assert!(body.contains("Pilih Mode Pengiriman"));
        // Card values render server-side
        assert!(body.contains("100.00%"));
        // All four chart islands are embedded
        for id in ["opt-map", "opt-donut", "opt-line", "opt-heatmap"] {
            assert!(body.contains(id), "missing chart island {}", id);
        }
    }

    #[tokio::test]
    async fn test_unknown_route() {
        let (status, _) = get(create_test_app(), "/api/v1/nope").await;
        assert_eq!(status, StatusCode::NOT_FOUND);
    }
}
