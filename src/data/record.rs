//! Core data types for the shipping dataset
//!
//! This module defines the fundamental types used throughout the dataset layer:
//! - `ShipmentRecord`: A single cash-on-delivery order
//! - `OrderDay`: Day-of-week with a fixed Monday-first canonical order

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Status value marking an order as delivered
pub const COMPLETED_STATUS: &str = "Completed";

/// A single shipment record
///
/// Represents one order row from the pre-cleaned tabular artifact.
/// The order id is the count basis for every aggregation.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ShipmentRecord {
    /// Unique order identifier, never empty
    pub order_id: String,
    /// Destination province, matches the boundary dataset's name property
    pub province: String,
    /// Shipping mode (small cardinality)
    pub ship_mode: String,
    /// Order status; [`COMPLETED_STATUS`] marks a delivered order
    pub status: String,
    /// Calendar date the order was created
    pub creation_date: NaiveDate,
    /// Delivery duration in days; missing when the order is still in transit
    pub day_to_arv: Option<f64>,
    /// Day of week the order was placed
    pub order_day: OrderDay,
    /// Hour of day the order was placed (0-23)
    pub order_hour: u8,
}

impl ShipmentRecord {
    /// Check whether this order reached the completed status
    pub fn is_completed(&self) -> bool {
        self.status == COMPLETED_STATUS
    }

    /// Check whether this order used the given shipping mode
    pub fn has_mode(&self, mode: &str) -> bool {
        self.ship_mode == mode
    }
}

/// Day of week an order was placed
///
/// Carries the canonical Monday..Sunday ordering used by the day/hour
/// matrix, independent of the order days appear in the data.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub enum OrderDay {
    Monday,
    Tuesday,
    Wednesday,
    Thursday,
    Friday,
    Saturday,
    Sunday,
}

impl OrderDay {
    /// All days in canonical Monday-first order
    pub fn all() -> &'static [OrderDay] {
        &[
            OrderDay::Monday,
            OrderDay::Tuesday,
            OrderDay::Wednesday,
            OrderDay::Thursday,
            OrderDay::Friday,
            OrderDay::Saturday,
            OrderDay::Sunday,
        ]
    }

    /// Row index in the day/hour matrix (Monday = 0, Sunday = 6)
    pub fn index(self) -> usize {
        match self {
            OrderDay::Monday => 0,
            OrderDay::Tuesday => 1,
            OrderDay::Wednesday => 2,
            OrderDay::Thursday => 3,
            OrderDay::Friday => 4,
            OrderDay::Saturday => 5,
            OrderDay::Sunday => 6,
        }
    }

    /// Day name as it appears in the dataset
    pub fn label(self) -> &'static str {
        match self {
            OrderDay::Monday => "Monday",
            OrderDay::Tuesday => "Tuesday",
            OrderDay::Wednesday => "Wednesday",
            OrderDay::Thursday => "Thursday",
            OrderDay::Friday => "Friday",
            OrderDay::Saturday => "Saturday",
            OrderDay::Sunday => "Sunday",
        }
    }
}

impl std::fmt::Display for OrderDay {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.label())
    }
}
