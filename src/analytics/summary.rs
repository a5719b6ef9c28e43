//! Summary statistics
//!
//! The three headline figures shown as cards on the dashboard: total order
//! count, completed-rate percentage, and mean delivery duration.

use serde::Serialize;

use crate::data::ShipmentRecord;

/// Headline figures over the full record set
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ShippingSummary {
    /// Total number of orders
    pub total_orders: u64,
    /// Share of orders with the completed status, as a percentage in [0, 100]
    pub completed_rate: f64,
    /// Mean delivery duration in days, ignoring missing values.
    /// `None` when no order carries a duration.
    pub mean_delivery_days: Option<f64>,
}

impl ShippingSummary {
    /// Compute the summary over a record set
    ///
    /// An empty record set yields a completed rate of 0 rather than a
    /// division fault, and an undefined mean delivery duration.
    pub fn compute(records: &[ShipmentRecord]) -> Self {
        let total_orders = records.len() as u64;

        let completed = records.iter().filter(|r| r.is_completed()).count() as u64;
        let completed_rate = if total_orders == 0 {
            0.0
        } else {
            completed as f64 / total_orders as f64 * 100.0
        };

        let durations: Vec<f64> = records.iter().filter_map(|r| r.day_to_arv).collect();
        let mean_delivery_days = if durations.is_empty() {
            None
        } else {
            Some(durations.iter().sum::<f64>() / durations.len() as f64)
        };

        Self {
            total_orders,
            completed_rate,
            mean_delivery_days,
        }
    }

    /// Total order count with thousands separators, e.g. `15,000`
    pub fn display_total(&self) -> String {
        group_thousands(self.total_orders)
    }

    /// Completed rate formatted to two decimals, e.g. `70.00%`
    pub fn display_completed_rate(&self) -> String {
        format!("{:.2}%", self.completed_rate)
    }

    /// Mean delivery duration to zero decimals, e.g. `3 hari`; a dash when
    /// no duration is known
    pub fn display_delivery_days(&self) -> String {
        match self.mean_delivery_days {
            Some(days) => format!("{:.0} hari", days),
            None => "-".to_string(),
        }
    }
}

/// Insert thousands separators into an integer, e.g. 1234567 -> "1,234,567"
fn group_thousands(value: u64) -> String {
    let digits = value.to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);

    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }

    grouped
}
