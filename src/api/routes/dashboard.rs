//! Dashboard Page
//!
//! Renders the single dashboard page: header, choropleth map, summary cards
//! beside the donut, and the mode dropdown driving the tabbed line/heatmap
//! section. Initial chart options are embedded as JSON islands; the page
//! script initializes ECharts from them and re-fetches only the two filtered
//! charts when the dropdown changes.

use axum::extract::State;
use maud::{html, Markup, PreEscaped, DOCTYPE};
use std::sync::Arc;

use crate::api::error::ApiResult;
use crate::api::state::AppState;
use crate::charts;

const ECHARTS_CDN: &str = "https://cdn.jsdelivr.net/npm/echarts@5/dist/echarts.min.js";

const PAGE_STYLE: &str = r#"
body { font-family: 'Segoe UI', system-ui, sans-serif; margin: 0 auto; max-width: 1080px; padding: 1rem 2rem; color: #212529; }
hr { border: none; border-top: 1px solid #dee2e6; margin: 1.5rem 0; }
.chart { width: 100%; height: 420px; }
.chart-map { height: 480px; }
.two-col { display: grid; grid-template-columns: 1fr 1fr; gap: 1.5rem; align-items: center; }
.info-card { padding: 10px; border-radius: 5px; background-color: #f1f3f4; margin-bottom: 1rem; }
.info-card p { margin: 0 0 0.25rem 0; }
.info-card h3 { margin: 0; }
.mode-picker { margin-bottom: 1rem; }
.mode-picker label { display: block; margin-bottom: 0.25rem; }
.mode-picker select { padding: 0.4rem; min-width: 16rem; }
.tabs { margin-bottom: 0.5rem; }
.tab-button { border: none; background: none; padding: 0.5rem 1rem; cursor: pointer; border-bottom: 2px solid transparent; }
.tab-button.active { border-bottom-color: #6f42c1; font-weight: 600; }
.tab-panel { display: none; }
.tab-panel.active { display: block; }
"#;

const DASHBOARD_JS: &str = r#"
document.addEventListener('DOMContentLoaded', function () {
    const readOption = (id) => JSON.parse(document.getElementById(id).textContent);
    const init = (id, option) => {
        const chart = echarts.init(document.getElementById(id));
        chart.setOption(option);
        return chart;
    };

    const charts = {};
    charts.donut = init('chart-donut', readOption('opt-donut'));
    charts.line = init('chart-line', readOption('opt-line'));
    charts.heatmap = init('chart-heatmap', readOption('opt-heatmap'));

    // The map needs the boundary dataset registered first
    fetch('/api/v1/geo')
        .then((resp) => resp.json())
        .then((geo) => {
            echarts.registerMap('indonesia', geo);
            charts.map = init('chart-map', readOption('opt-map'));
        });

    const select = document.getElementById('mode-select');
    select.addEventListener('change', function () {
        const mode = encodeURIComponent(select.value);
        fetch('/api/v1/charts/daily?mode=' + mode)
            .then((resp) => resp.json())
            .then((option) => charts.line.setOption(option, true));
        fetch('/api/v1/charts/heatmap?mode=' + mode)
            .then((resp) => resp.json())
            .then((option) => charts.heatmap.setOption(option, true));
    });

    document.querySelectorAll('.tab-button').forEach((button) => {
        button.addEventListener('click', function () {
            document.querySelectorAll('.tab-button').forEach((b) => b.classList.remove('active'));
            document.querySelectorAll('.tab-panel').forEach((p) => p.classList.remove('active'));
            button.classList.add('active');
            document.getElementById(button.dataset.target).classList.add('active');
            Object.values(charts).forEach((c) => c.resize());
        });
    });

    window.addEventListener('resize', () => Object.values(charts).forEach((c) => c.resize()));
});
"#;

/// GET /
///
/// The dashboard page.
pub async fn dashboard(State(state): State<Arc<AppState>>) -> ApiResult<Markup> {
    let store = &state.store;
    let summary = store.summary();
    let default_mode = store.default_mode();

    let map_json = serde_json::to_string(&charts::province_map_chart(store.province_counts()))?;
    let donut_json = serde_json::to_string(&charts::ship_mode_donut(store.mode_counts()))?;
    let line_json = serde_json::to_string(&charts::daily_line_chart(
        store.daily_for(default_mode.unwrap_or_default()),
    ))?;
    let heatmap_json = serde_json::to_string(&charts::day_hour_heatmap(
        &store.day_hour_for(default_mode.unwrap_or_default()),
    ))?;

    Ok(html! {
        (DOCTYPE)
        html lang="id" {
            head {
                meta charset="utf-8";
                meta name="viewport" content="width=device-width, initial-scale=1";
                title { "Dashboard Pengiriman COD" }
                script src=(ECHARTS_CDN) {}
                style { (PreEscaped(PAGE_STYLE)) }
            }
            body {
                h1 { "Dashboard Pengiriman COD \u{1F4E6}" }
                hr;
                section {
                    h2 { "Peta Pengiriman Paket \u{1F4CD}" }
                    div id="chart-map" class="chart chart-map" {}
                }
                hr;
                section class="two-col" {
                    div {
                        div class="info-card" {
                            p { "Total Pengiriman" }
                            h3 { (summary.display_total()) }
                        }
                        div class="info-card" {
                            p { "Persentase Pengiriman Selesai" }
                            h3 { (summary.display_completed_rate()) }
                        }
                        div class="info-card" {
                            p { "Rata-rata Waktu Pengiriman" }
                            h3 { (summary.display_delivery_days()) }
                        }
                    }
                    div id="chart-donut" class="chart" {}
                }
                hr;
                section {
                    h2 { "Pergerakan Harian dan Jumlah Pengiriman Harian" }
                    div class="mode-picker" {
                        label for="mode-select" { "Pilih Mode Pengiriman" }
                        select id="mode-select" {
                            @for mode in store.modes() {
                                option value=(mode) selected[Some(mode.as_str()) == default_mode] {
                                    (mode)
                                }
                            }
                        }
                    }
                    div class="tabs" {
                        button class="tab-button active" data-target="tab-line" {
                            "\u{1F4C8} Pergerakan Harian"
                        }
                        button class="tab-button" data-target="tab-heatmap" {
                            "\u{1F4CB} Jumlah Pengiriman Harian"
                        }
                    }
                    div id="tab-line" class="tab-panel active" {
                        div id="chart-line" class="chart" {}
                    }
                    div id="tab-heatmap" class="tab-panel" {
                        div id="chart-heatmap" class="chart" {}
                    }
                }
                script type="application/json" id="opt-map" { (PreEscaped(map_json)) }
                script type="application/json" id="opt-donut" { (PreEscaped(donut_json)) }
                script type="application/json" id="opt-line" { (PreEscaped(line_json)) }
                script type="application/json" id="opt-heatmap" { (PreEscaped(heatmap_json)) }
                script { (PreEscaped(DASHBOARD_JS)) }
            }
        }
    })
}
