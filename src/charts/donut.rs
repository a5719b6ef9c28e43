//! Shipping-mode donut chart

use charming::{
    component::{Legend, Title},
    element::{Color, Tooltip, Trigger},
    series::Pie,
    Chart,
};

use crate::analytics::CategoryCount;
use crate::charts::DONUT_PALETTE;

/// Build the donut of shipping-mode share by order count
pub fn ship_mode_donut(counts: &[CategoryCount]) -> Chart {
    let data: Vec<(f64, String)> = counts
        .iter()
        .map(|c| (c.orders as f64, c.key.clone()))
        .collect();

    Chart::new()
        .title(Title::new().text("Jumlah Pengiriman Disetiap Status Pengiriman"))
        .tooltip(Tooltip::new().trigger(Trigger::Item))
        .legend(Legend::new().top("bottom"))
        .color(DONUT_PALETTE.iter().map(|c| Color::from(*c)).collect())
        .series(
            Pie::new()
                .name("Mode Pengiriman")
                .radius(vec!["40%", "70%"])
                .data(data),
        )
}
