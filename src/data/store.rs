//! Read-only shipment store
//!
//! The process-wide session context: the loaded record set, the boundary
//! dataset, and every aggregated view the dashboard serves. Because both
//! sources are immutable for the process lifetime, all views are computed
//! once at construction and handlers only look results up.

use std::collections::{HashMap, HashSet};
use std::path::Path;

use serde_json::Value;

use crate::analytics::{
    count_by_mode, count_by_province, daily_counts, day_hour_counts, distinct_modes,
    CategoryCount, DailyCount, DayHourMatrix, ShippingSummary,
};
use crate::data::error::DataResult;
use crate::data::loader::{load_boundaries, load_shipments};
use crate::data::record::ShipmentRecord;

/// Immutable dataset plus memoized aggregated views
#[derive(Debug, Clone)]
pub struct ShipmentStore {
    records: Vec<ShipmentRecord>,
    boundaries: Value,
    modes: Vec<String>,
    summary: ShippingSummary,
    province_counts: Vec<CategoryCount>,
    mode_counts: Vec<CategoryCount>,
    daily: HashMap<String, Vec<DailyCount>>,
    day_hour: HashMap<String, DayHourMatrix>,
}

impl ShipmentStore {
    /// Build a store from already-loaded parts
    ///
    /// Computes every aggregated view up front and logs the provinces that
    /// appear in the data but not in the boundary dataset; those regions
    /// silently miss from the rendered map.
    pub fn new(
        records: Vec<ShipmentRecord>,
        boundaries: Value,
        boundary_provinces: &[String],
    ) -> Self {
        let summary = ShippingSummary::compute(&records);
        let province_counts = count_by_province(&records);
        let mode_counts = count_by_mode(&records);
        let modes = distinct_modes(&records);

        let known: HashSet<&str> = boundary_provinces.iter().map(String::as_str).collect();
        for count in &province_counts {
            if !known.contains(count.key.as_str()) {
                tracing::warn!(
                    province = %count.key,
                    orders = count.orders,
                    "Province missing from the boundary dataset; it will not render on the map"
                );
            }
        }

        let daily = modes
            .iter()
            .map(|mode| (mode.clone(), daily_counts(&records, mode)))
            .collect();
        let day_hour = modes
            .iter()
            .map(|mode| (mode.clone(), day_hour_counts(&records, mode)))
            .collect();

        Self {
            records,
            boundaries,
            modes,
            summary,
            province_counts,
            mode_counts,
            daily,
            day_hour,
        }
    }

    /// Load both source files and build the store
    ///
    /// Any failure here is fatal to the session; the dashboard has no
    /// function without its data.
    pub fn load(shipments_path: &Path, boundaries_path: &Path) -> DataResult<Self> {
        let records = load_shipments(shipments_path)?;
        let boundaries = load_boundaries(boundaries_path)?;
        Ok(Self::new(records, boundaries.geojson, &boundaries.provinces))
    }

    /// The full record set
    pub fn records(&self) -> &[ShipmentRecord] {
        &self.records
    }

    /// Number of loaded records
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// True when the dataset has no records
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// The boundary GeoJSON document
    pub fn boundaries(&self) -> &Value {
        &self.boundaries
    }

    /// Distinct shipping modes in first-seen order
    pub fn modes(&self) -> &[String] {
        &self.modes
    }

    /// The dropdown's default selection: the first distinct mode
    pub fn default_mode(&self) -> Option<&str> {
        self.modes.first().map(String::as_str)
    }

    /// Headline summary figures
    pub fn summary(&self) -> &ShippingSummary {
        &self.summary
    }

    /// Orders per province
    pub fn province_counts(&self) -> &[CategoryCount] {
        &self.province_counts
    }

    /// Orders per shipping mode
    pub fn mode_counts(&self) -> &[CategoryCount] {
        &self.mode_counts
    }

    /// Daily order series for a mode; empty for a mode absent from the data
    pub fn daily_for(&self, mode: &str) -> &[DailyCount] {
        self.daily.get(mode).map(Vec::as_slice).unwrap_or(&[])
    }

    /// Day/hour matrix for a mode; all-zero for a mode absent from the data
    pub fn day_hour_for(&self, mode: &str) -> DayHourMatrix {
        self.day_hour.get(mode).copied().unwrap_or_default()
    }
}
