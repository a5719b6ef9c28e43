//! Application State
//!
//! Shared state accessible by all API handlers. The loaded dataset lives
//! here as an explicitly constructed read-only store, wrapped in Arc for
//! thread-safe sharing across async tasks; nothing mutates after startup.

use crate::config::ServerConfig;
use crate::data::ShipmentStore;
use std::sync::Arc;
use std::time::Instant;

/// Shared application state for all handlers
#[derive(Clone)]
pub struct AppState {
    /// The immutable dataset and its memoized views
    pub store: Arc<ShipmentStore>,
    /// Server configuration
    pub config: Arc<ServerConfig>,
    /// Server start time for uptime tracking
    pub start_time: Instant,
}

impl AppState {
    /// Create a new AppState around a loaded store
    pub fn new(store: Arc<ShipmentStore>, config: ServerConfig) -> Self {
        Self {
            store,
            config: Arc::new(config),
            start_time: Instant::now(),
        }
    }

    /// Get server uptime in seconds
    pub fn uptime_seconds(&self) -> u64 {
        self.start_time.elapsed().as_secs()
    }
}
