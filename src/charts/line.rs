//! Daily order line chart for the selected shipping mode

use charming::{
    component::{Axis, Grid, Title},
    element::{AxisType, Color, LineStyle, Tooltip, Trigger},
    series::Line,
    Chart,
};

use crate::analytics::DailyCount;
use crate::charts::LINE_COLOR;

/// Build the time-ordered daily line chart
///
/// The series arrives already sorted ascending by date; an empty series
/// yields a chart with no points.
pub fn daily_line_chart(series: &[DailyCount]) -> Chart {
    let dates: Vec<String> = series
        .iter()
        .map(|p| p.date.format("%Y-%m-%d").to_string())
        .collect();
    let values: Vec<f64> = series.iter().map(|p| p.orders as f64).collect();

    Chart::new()
        .title(Title::new().text("Pergerakan Pengiriman Paket Harian"))
        .tooltip(Tooltip::new().trigger(Trigger::Axis))
        .grid(
            Grid::new()
                .left("3%")
                .right("4%")
                .bottom("3%")
                .contain_label(true),
        )
        .color(vec![Color::from(LINE_COLOR)])
        .x_axis(Axis::new().type_(AxisType::Category).data(dates))
        .y_axis(Axis::new().type_(AxisType::Value).name("Jumlah Pengiriman"))
        .series(
            Line::new()
                .name("Jumlah Pengiriman")
                .data(values)
                .line_style(LineStyle::new().width(2)),
        )
}
