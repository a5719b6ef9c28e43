//! Grouping and counting
//!
//! The four aggregated views behind the dashboard charts, as pure functions
//! over the record slice:
//!
//! ```text
//! records ─┬─ count_by_province ──> choropleth map
//!          ├─ count_by_mode ──────> donut chart
//!          ├─ daily_counts ───────> line chart   (per selected mode)
//!          └─ day_hour_counts ────> heatmap      (per selected mode)
//! ```
//!
//! Each view reduces by counting order ids; every result is deterministic
//! for a given record slice and mode filter.

use std::collections::{BTreeMap, HashSet};

use chrono::NaiveDate;
use serde::Serialize;

use crate::data::{OrderDay, ShipmentRecord};

/// One row of a single-dimension count aggregation
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CategoryCount {
    /// The grouping key (province or shipping mode)
    pub key: String,
    /// Number of orders in the group
    pub orders: u64,
}

/// One point of the per-day series
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct DailyCount {
    pub date: NaiveDate,
    pub orders: u64,
}

/// Orders per province, one row per distinct province, in name order
pub fn count_by_province(records: &[ShipmentRecord]) -> Vec<CategoryCount> {
    count_by_key(records, |r| &r.province)
}

/// Orders per shipping mode, one row per distinct mode, in name order
pub fn count_by_mode(records: &[ShipmentRecord]) -> Vec<CategoryCount> {
    count_by_key(records, |r| &r.ship_mode)
}

fn count_by_key<F>(records: &[ShipmentRecord], key: F) -> Vec<CategoryCount>
where
    F: Fn(&ShipmentRecord) -> &str,
{
    let mut counts: BTreeMap<&str, u64> = BTreeMap::new();
    for record in records {
        *counts.entry(key(record)).or_default() += 1;
    }

    counts
        .into_iter()
        .map(|(key, orders)| CategoryCount {
            key: key.to_string(),
            orders,
        })
        .collect()
}

/// Distinct shipping modes in first-seen order
///
/// This is the order the dropdown presents, with the first entry as the
/// default selection.
pub fn distinct_modes(records: &[ShipmentRecord]) -> Vec<String> {
    let mut seen = HashSet::new();
    let mut modes = Vec::new();

    for record in records {
        if seen.insert(record.ship_mode.as_str()) {
            modes.push(record.ship_mode.clone());
        }
    }

    modes
}

/// Orders per creation date for one shipping mode, ascending by date
///
/// A mode with no matching records yields an empty series.
pub fn daily_counts(records: &[ShipmentRecord], mode: &str) -> Vec<DailyCount> {
    let mut counts: BTreeMap<NaiveDate, u64> = BTreeMap::new();
    for record in records.iter().filter(|r| r.has_mode(mode)) {
        *counts.entry(record.creation_date).or_default() += 1;
    }

    counts
        .into_iter()
        .map(|(date, orders)| DailyCount { date, orders })
        .collect()
}

/// Orders over the day-of-week x hour-of-day grid for one shipping mode
///
/// The matrix always carries all seven day rows in Monday..Sunday order and
/// all 24 hour columns; combinations with no orders are zero cells.
pub fn day_hour_counts(records: &[ShipmentRecord], mode: &str) -> DayHourMatrix {
    let mut matrix = DayHourMatrix::default();
    for record in records.iter().filter(|r| r.has_mode(mode)) {
        matrix.counts[record.order_day.index()][record.order_hour as usize] += 1;
    }
    matrix
}

/// 7x24 grid of order counts, rows Monday..Sunday, columns hour 0..23
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub struct DayHourMatrix {
    counts: [[u64; DayHourMatrix::HOURS]; DayHourMatrix::DAYS],
}

impl DayHourMatrix {
    /// Number of day rows
    pub const DAYS: usize = 7;
    /// Number of hour columns
    pub const HOURS: usize = 24;

    /// Count for one day/hour cell
    pub fn get(&self, day: OrderDay, hour: usize) -> u64 {
        self.counts[day.index()][hour]
    }

    /// Iterate rows in canonical Monday..Sunday order
    pub fn rows(&self) -> impl Iterator<Item = (OrderDay, &[u64; DayHourMatrix::HOURS])> + '_ {
        OrderDay::all()
            .iter()
            .map(move |day| (*day, &self.counts[day.index()]))
    }

    /// Cells with at least one order, as (day index, hour, count)
    pub fn occupied_cells(&self) -> impl Iterator<Item = (usize, usize, u64)> + '_ {
        self.counts.iter().enumerate().flat_map(|(day, row)| {
            row.iter()
                .enumerate()
                .filter(|(_, count)| **count > 0)
                .map(move |(hour, count)| (day, hour, *count))
        })
    }

    /// Largest cell count in the grid
    pub fn max_count(&self) -> u64 {
        self.counts
            .iter()
            .flat_map(|row| row.iter())
            .copied()
            .max()
            .unwrap_or(0)
    }

    /// Total orders across all cells
    pub fn total(&self) -> u64 {
        self.counts.iter().flat_map(|row| row.iter()).sum()
    }

    /// True when every cell is empty
    pub fn is_empty(&self) -> bool {
        self.total() == 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn record(province: &str, mode: &str, date: (i32, u32, u32), day: OrderDay, hour: u8) -> ShipmentRecord {
        ShipmentRecord {
            order_id: format!("{}-{}-{}", province, mode, hour),
            province: province.to_string(),
            ship_mode: mode.to_string(),
            status: "Completed".to_string(),
            creation_date: NaiveDate::from_ymd_opt(date.0, date.1, date.2).unwrap(),
            day_to_arv: Some(1.0),
            order_day: day,
            order_hour: hour,
        }
    }

    fn sample() -> Vec<ShipmentRecord> {
        vec![
            record("Jawa Barat", "Standard", (2022, 3, 1), OrderDay::Tuesday, 9),
            record("Jawa Barat", "Standard", (2022, 3, 1), OrderDay::Tuesday, 9),
            record("Jawa Barat", "Same Day", (2022, 3, 2), OrderDay::Wednesday, 21),
            record("Bali", "Standard", (2022, 3, 3), OrderDay::Thursday, 0),
            record("Aceh", "Economy", (2022, 3, 1), OrderDay::Tuesday, 12),
        ]
    }

    #[test]
    fn test_counts_partition_the_total() {
        let records = sample();

        let by_province: u64 = count_by_province(&records).iter().map(|c| c.orders).sum();
        let by_mode: u64 = count_by_mode(&records).iter().map(|c| c.orders).sum();

        assert_eq!(by_province, records.len() as u64);
        assert_eq!(by_mode, records.len() as u64);
    }

    #[test]
    fn test_count_by_province() {
        let counts = count_by_province(&sample());

        // BTreeMap gives deterministic name order
        assert_eq!(
            counts,
            vec![
                CategoryCount { key: "Aceh".to_string(), orders: 1 },
                CategoryCount { key: "Bali".to_string(), orders: 1 },
                CategoryCount { key: "Jawa Barat".to_string(), orders: 3 },
            ]
        );
    }

    #[test]
    fn test_distinct_modes_first_seen_order() {
        let modes = distinct_modes(&sample());
        assert_eq!(modes, vec!["Standard", "Same Day", "Economy"]);
    }

    #[test]
    fn test_daily_counts_ascending() {
        let series = daily_counts(&sample(), "Standard");

        assert_eq!(series.len(), 2);
        assert_eq!(series[0].date, NaiveDate::from_ymd_opt(2022, 3, 1).unwrap());
        assert_eq!(series[0].orders, 2);
        assert_eq!(series[1].date, NaiveDate::from_ymd_opt(2022, 3, 3).unwrap());
        assert_eq!(series[1].orders, 1);
        assert!(series.windows(2).all(|w| w[0].date < w[1].date));
    }

    #[test]
    fn test_daily_counts_unknown_mode_is_empty() {
        assert!(daily_counts(&sample(), "Carrier Pigeon").is_empty());
    }

    #[test]
    fn test_day_hour_matrix_shape() {
        let matrix = day_hour_counts(&sample(), "Standard");

        // All seven rows exist even though only two days have data
        assert_eq!(matrix.rows().count(), 7);
        let days: Vec<OrderDay> = matrix.rows().map(|(day, _)| day).collect();
        assert_eq!(days[0], OrderDay::Monday);
        assert_eq!(days[6], OrderDay::Sunday);

        assert_eq!(matrix.get(OrderDay::Tuesday, 9), 2);
        assert_eq!(matrix.get(OrderDay::Thursday, 0), 1);
        assert_eq!(matrix.get(OrderDay::Sunday, 23), 0);
        assert_eq!(matrix.total(), 3);
        assert_eq!(matrix.max_count(), 2);
    }

    #[test]
    fn test_day_hour_matrix_zero_record_mode() {
        let matrix = day_hour_counts(&sample(), "Carrier Pigeon");

        assert!(matrix.is_empty());
        assert_eq!(matrix.rows().count(), 7);
        assert_eq!(matrix.occupied_cells().count(), 0);
        for (_, row) in matrix.rows() {
            assert!(row.iter().all(|c| *c == 0));
        }
    }

    #[test]
    fn test_occupied_cells_skip_zeros() {
        let matrix = day_hour_counts(&sample(), "Same Day");
        let cells: Vec<(usize, usize, u64)> = matrix.occupied_cells().collect();

        assert_eq!(cells, vec![(OrderDay::Wednesday.index(), 21, 1)]);
    }
}
