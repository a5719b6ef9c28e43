//! Shipment dataset layer
//!
//! This module owns the two static inputs and the process-wide read-only
//! state built from them:
//!
//! - **record**: Core data types (ShipmentRecord, OrderDay)
//! - **loader**: CSV and GeoJSON file loading
//! - **store**: The immutable session context with memoized views
//! - **error**: Error types
//!
//! # Lifecycle
//!
//! ```text
//! Startup:
//!   CSV ──┐
//!         ├─> validate ─> ShipmentStore (records + precomputed views)
//!   GeoJSON ┘
//!
//! Serving:
//!   handlers read the Arc'd store; nothing mutates after startup
//! ```

pub mod error;
pub mod loader;
pub mod record;
pub mod store;

// Re-export commonly used types
pub use error::{DataError, DataResult};
pub use loader::{load_boundaries, load_shipments, BoundaryMap};
pub use record::{OrderDay, ShipmentRecord, COMPLETED_STATUS};
pub use store::ShipmentStore;
