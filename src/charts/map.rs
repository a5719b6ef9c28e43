//! Choropleth map of orders per province
//!
//! Joins the per-province counts against the registered boundary map by
//! province name. Provinces present in the boundary dataset but absent from
//! the data render unfilled; data provinces missing from the boundary
//! dataset are dropped by the join.

use charming::{
    component::{Title, VisualMap},
    element::{Tooltip, Trigger},
    series::Map,
    Chart,
};

use crate::analytics::CategoryCount;
use crate::charts::{sequential_pieces, MAP_NAME};

/// Build the province choropleth from the per-province counts
pub fn province_map_chart(counts: &[CategoryCount]) -> Chart {
    let data: Vec<(f64, String)> = counts
        .iter()
        .map(|c| (c.orders as f64, c.key.clone()))
        .collect();

    let max = counts.iter().map(|c| c.orders).max().unwrap_or(0);

    Chart::new()
        .title(
            Title::new()
                .text("Peta Pengiriman Paket Ke Seluruh Provinsi di Indonesia")
                .left("center"),
        )
        .tooltip(Tooltip::new().trigger(Trigger::Item))
        .visual_map(VisualMap::new().pieces(sequential_pieces(max)))
        .series(Map::new().name("Jumlah Pesanan").map(MAP_NAME).data(data))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn counts() -> Vec<CategoryCount> {
        vec![
            CategoryCount { key: "Bali".to_string(), orders: 12 },
            CategoryCount { key: "Jawa Barat".to_string(), orders: 40 },
        ]
    }

    #[test]
    fn test_map_chart_series() {
        let chart = province_map_chart(&counts());
        let option = serde_json::to_value(&chart).unwrap();

        let series = &option["series"][0];
        assert_eq!(series["type"], "map");
        assert_eq!(series["map"], MAP_NAME);

        let data = series["data"].as_array().unwrap();
        assert_eq!(data.len(), 2);
        assert_eq!(data[1]["name"], "Jawa Barat");
        assert_eq!(data[1]["value"], 40.0);
    }

    #[test]
    fn test_map_chart_five_step_scale() {
        let chart = province_map_chart(&counts());
        let option = serde_json::to_string(&chart).unwrap();

        // All five palette steps appear in the piecewise scale
        for color in crate::charts::SEQUENTIAL_PALETTE {
            assert!(option.contains(color), "missing palette step {}", color);
        }
    }

    #[test]
    fn test_map_chart_empty_dataset() {
        let chart = province_map_chart(&[]);
        let option = serde_json::to_value(&chart).unwrap();

        assert_eq!(option["series"][0]["data"].as_array().unwrap().len(), 0);
    }
}
