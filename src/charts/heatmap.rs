//! Day-of-week x hour-of-day heatmap for the selected shipping mode

use charming::{
    component::{Axis, Grid, Title, VisualMap},
    element::{AxisLabel, AxisType, Tooltip, Trigger},
    series::Heatmap,
    Chart,
};

use crate::analytics::DayHourMatrix;
use crate::charts::sequential_pieces;
use crate::data::OrderDay;

/// Build the 7x24 order-count heatmap
///
/// All seven day rows and 24 hour columns are always present on the axes;
/// only cells with at least one order carry data, so empty combinations
/// render as blank cells.
pub fn day_hour_heatmap(matrix: &DayHourMatrix) -> Chart {
    let hours: Vec<String> = (0..DayHourMatrix::HOURS).map(|h| h.to_string()).collect();

    // Category axes run bottom-up; reverse so Monday reads at the top
    let days: Vec<String> = OrderDay::all()
        .iter()
        .rev()
        .map(|d| d.label().to_string())
        .collect();

    let data: Vec<Vec<f64>> = matrix
        .occupied_cells()
        .map(|(day, hour, count)| {
            vec![
                hour as f64,
                (DayHourMatrix::DAYS - 1 - day) as f64,
                count as f64,
            ]
        })
        .collect();

    Chart::new()
        .title(Title::new().text("Jumlah Pengiriman Harian"))
        .tooltip(Tooltip::new().trigger(Trigger::Item))
        .grid(
            Grid::new()
                .left("3%")
                .right("4%")
                .bottom("15%")
                .contain_label(true),
        )
        .x_axis(
            Axis::new()
                .type_(AxisType::Category)
                .data(hours)
                .name("Waktu Pesanan")
                .axis_label(AxisLabel::new().interval(0)),
        )
        .y_axis(
            Axis::new()
                .type_(AxisType::Category)
                .data(days)
                .name("Hari Pesanan"),
        )
        .visual_map(VisualMap::new().pieces(sequential_pieces(matrix.max_count())))
        .series(Heatmap::new().name("Jumlah Pengiriman").data(data))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analytics::day_hour_counts;
    use crate::data::ShipmentRecord;
    use chrono::NaiveDate;

    fn record(day: OrderDay, hour: u8) -> ShipmentRecord {
        ShipmentRecord {
            order_id: format!("{}-{}", day, hour),
            province: "Bali".to_string(),
            ship_mode: "Standard".to_string(),
            status: "Completed".to_string(),
            creation_date: NaiveDate::from_ymd_opt(2022, 6, 1).unwrap(),
            day_to_arv: Some(1.0),
            order_day: day,
            order_hour: hour,
        }
    }

    #[test]
    fn test_heatmap_cells() {
        let records = vec![
            record(OrderDay::Monday, 9),
            record(OrderDay::Monday, 9),
            record(OrderDay::Sunday, 23),
        ];
        let matrix = day_hour_counts(&records, "Standard");
        let chart = day_hour_heatmap(&matrix);
        let option = serde_json::to_value(&chart).unwrap();

        let data = option["series"][0]["data"].as_array().unwrap();
        assert_eq!(data.len(), 2);

        // Monday renders at the top row (y index 6), Sunday at the bottom
        assert!(data.contains(&serde_json::json!([9.0, 6.0, 2.0])));
        assert!(data.contains(&serde_json::json!([23.0, 0.0, 1.0])));
    }

    #[test]
    fn test_heatmap_axes_cover_week_and_day() {
        let chart = day_hour_heatmap(&DayHourMatrix::default());
        let option = serde_json::to_string(&chart).unwrap();

        for day in OrderDay::all() {
            assert!(option.contains(day.label()), "missing day {}", day);
        }
        assert!(option.contains("\"23\""));
        assert!(option.contains("Waktu Pesanan"));
        assert!(option.contains("Hari Pesanan"));
    }

    #[test]
    fn test_heatmap_empty_mode_has_no_cells() {
        let chart = day_hour_heatmap(&DayHourMatrix::default());
        let option = serde_json::to_value(&chart).unwrap();

        assert_eq!(option["series"][0]["data"].as_array().unwrap().len(), 0);
        assert_eq!(option["series"][0]["type"], "heatmap");
    }
}
