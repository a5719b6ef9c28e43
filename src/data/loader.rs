//! Source file loading
//!
//! Reads the two static inputs the dashboard runs on: the shipment CSV and
//! the province boundary GeoJSON. Both are treated as pre-cleaned artifacts;
//! only enough validation happens here to fail fast on a corrupt file.

use std::path::Path;

use serde_json::Value;

use crate::data::error::{DataError, DataResult};
use crate::data::record::ShipmentRecord;

/// Name property carried by each boundary feature
const BOUNDARY_NAME_PROPERTY: &str = "NAME_1";

/// Boundary dataset: the raw GeoJSON plus the province names it contains
#[derive(Debug, Clone)]
pub struct BoundaryMap {
    /// The GeoJSON document, with the name property aliased for chart joins
    pub geojson: Value,
    /// Province names present in the boundary file, in file order
    pub provinces: Vec<String>,
}

/// Load shipment records from a CSV file
///
/// Fails on the first unreadable or out-of-range row; a partial dataset is
/// never returned.
pub fn load_shipments(path: &Path) -> DataResult<Vec<ShipmentRecord>> {
    let mut reader = csv::Reader::from_path(path).map_err(|e| DataError::Csv {
        path: path.to_path_buf(),
        message: e.to_string(),
    })?;

    let mut records = Vec::new();

    for (idx, row) in reader.deserialize::<ShipmentRecord>().enumerate() {
        let row_number = idx + 1;
        let record = row.map_err(|e| DataError::Csv {
            path: path.to_path_buf(),
            message: format!("row {}: {}", row_number, e),
        })?;

        validate_record(&record, row_number)?;
        records.push(record);
    }

    tracing::info!(path = ?path, rows = records.len(), "Loaded shipment records");
    Ok(records)
}

/// Check the schema invariants a record must satisfy
fn validate_record(record: &ShipmentRecord, row: usize) -> DataResult<()> {
    if record.order_id.is_empty() {
        return Err(DataError::InvalidRecord {
            row,
            message: "order_id is empty".to_string(),
        });
    }

    if record.order_hour > 23 {
        return Err(DataError::InvalidRecord {
            row,
            message: format!("order_hour {} out of range", record.order_hour),
        });
    }

    if let Some(days) = record.day_to_arv {
        if days < 0.0 || !days.is_finite() {
            return Err(DataError::InvalidRecord {
                row,
                message: format!("day_to_arv {} is not a non-negative number", days),
            });
        }
    }

    Ok(())
}

/// Load the province boundary GeoJSON
///
/// Each feature's `NAME_1` property is aliased into the standard `name`
/// property so the charting layer can join on it. Features without the name
/// property are kept in the document but can never match a data province;
/// they are logged and otherwise ignored, mirroring the silent-join contract.
pub fn load_boundaries(path: &Path) -> DataResult<BoundaryMap> {
    let content = std::fs::read_to_string(path).map_err(|e| DataError::Io {
        path: path.to_path_buf(),
        source: e,
    })?;

    let mut geojson: Value = serde_json::from_str(&content).map_err(|e| DataError::Geo {
        path: path.to_path_buf(),
        message: e.to_string(),
    })?;

    let features = geojson
        .get_mut("features")
        .and_then(Value::as_array_mut)
        .ok_or_else(|| DataError::Geo {
            path: path.to_path_buf(),
            message: "missing features array".to_string(),
        })?;

    let mut provinces = Vec::new();

    for feature in features.iter_mut() {
        let name = feature
            .get("properties")
            .and_then(|props| props.get(BOUNDARY_NAME_PROPERTY))
            .and_then(Value::as_str)
            .map(str::to_string);

        match name {
            Some(name) => {
                if let Some(props) = feature.get_mut("properties").and_then(Value::as_object_mut) {
                    props.insert("name".to_string(), Value::String(name.clone()));
                }
                provinces.push(name);
            }
            None => {
                tracing::warn!(
                    property = BOUNDARY_NAME_PROPERTY,
                    "Boundary feature without a name property; it cannot join any data"
                );
            }
        }
    }

    tracing::info!(path = ?path, provinces = provinces.len(), "Loaded boundary dataset");

    Ok(BoundaryMap { geojson, provinces })
}
