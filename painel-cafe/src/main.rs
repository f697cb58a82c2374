//! Análise Climática para Cultivo de Café no Brasil
//!
//! Single-page dashboard: pick one of the 27 federative units, see its
//! trailing-30-day temperature and humidity aggregates and time series,
//! then a national choropleth of mean temperature on the coffee
//! suitability scale.
//!
//! Data flow:
//! 1. On mount, the state boundary GeoJSON is fetched once and memoized in
//!    a signal for the app lifetime.
//! 2. When the user selects an estado, its daily aggregates are fetched
//!    from Open-Meteo and shown as metric panels and two line charts.
//! 3. The same selection then triggers the national fan-out: one request
//!    per estado, strictly sequential, averaged and joined onto the
//!    boundary polygons for the choropleth. Nothing from the fan-out is
//!    cached; every selection change repeats all 27 requests.

use cafe_chart_ui::components::{
    ChartContainer, ChartHeader, ErrorDisplay, EstadoSelector, LoadingSpinner, MetricPanel,
};
use cafe_chart_ui::js_bridge;
use cafe_chart_ui::state::{AppState, PLACEHOLDER};
use cafe_meteo::client::MeteoClient;
use cafe_meteo::series::{humidity_series, temperature_series};
use cafe_meteo::stats::{format_celsius, format_percent, ClimateSummary};
use cafe_meteo::suitability::{CAPTION, SCALE_MAX, SCALE_MIN};
use cafe_meteo::window::{FetchWindow, WINDOW_DAYS};
use chrono::Local;
use dioxus::prelude::*;

/// Chart container DOM element IDs used by D3.js to render into.
const CHART_TEMP_ID: &str = "temperatura-chart";
const CHART_HUMIDITY_ID: &str = "umidade-chart";
const MAP_ID: &str = "mapa-temperatura";

fn main() {
    dioxus_logger::init(dioxus_logger::tracing::Level::INFO).expect("failed to init logger");
    dioxus::LaunchBuilder::new()
        .with_cfg(dioxus::web::Config::new().rootname("painel-cafe-root"))
        .launch(App);
}

#[component]
fn App() -> Element {
    let mut state = use_context_provider(AppState::new);

    // Fetch the boundary polygons once on mount; the signal is the
    // process-lifetime cache (a restart is the only invalidation).
    use_effect(move || {
        spawn(async move {
            let client = reqwest::Client::new();
            match cafe_geo::fetch_geo(&client).await {
                Ok(geo) => {
                    log::info!("Loaded {} boundary features", geo.len());
                    state.geo.set(Some(geo));
                }
                Err(e) => {
                    log::error!("Boundary fetch failed: {}", e);
                    state
                        .error_msg
                        .set(Some(format!("Falha ao carregar o mapa do Brasil: {}", e)));
                }
            }
        });
    });

    // Re-run the fetch pipeline whenever the selection changes.
    use_effect(move || {
        let selected = (state.selected_estado)();
        if selected == PLACEHOLDER {
            state.daily.set(None);
            state.summaries.set(None);
            state.error_msg.set(None);
            state.loading.set(false);
            js_bridge::destroy_chart(CHART_TEMP_ID);
            js_bridge::destroy_chart(CHART_HUMIDITY_ID);
            js_bridge::destroy_chart(MAP_ID);
            return;
        }

        let estados = state.estados.read().clone();
        let Some(estado) = estados.iter().find(|e| e.name == selected).cloned() else {
            state
                .error_msg
                .set(Some(format!("Estado desconhecido: {}", selected)));
            return;
        };

        spawn(async move {
            state.loading.set(true);
            state.error_msg.set(None);
            state.daily.set(None);
            state.summaries.set(None);

            let client = MeteoClient::new();
            let window = FetchWindow::trailing(Local::now().date_naive(), WINDOW_DAYS);

            // Selected estado first: metrics and the two time-series charts.
            match client.fetch_estado(&estado, window).await {
                Ok(daily) => state.daily.set(Some(daily)),
                Err(e) => {
                    log::error!("Daily fetch failed for {}: {}", estado.name, e);
                    state
                        .error_msg
                        .set(Some(format!("Falha ao obter dados climáticos: {}", e)));
                    state.loading.set(false);
                    return;
                }
            }

            // Then the national fan-out for the map.
            match client.fetch_all_summaries(&estados, window).await {
                Ok(summaries) => state.summaries.set(Some(summaries)),
                Err(e) => {
                    log::error!("National fan-out failed: {}", e);
                    state
                        .error_msg
                        .set(Some(format!("Falha ao obter dados do mapa: {}", e)));
                }
            }
            state.loading.set(false);
        });
    });

    // Render the two time-series charts whenever daily data lands.
    use_effect(move || {
        let Some(daily) = state.daily.read().clone() else {
            return;
        };
        if daily.is_empty() {
            return;
        }

        js_bridge::init_charts();

        let temp_json = serde_json::to_string(&temperature_series(&daily)).unwrap_or_default();
        let temp_config = serde_json::to_string(&serde_json::json!({
            "title": "Temperatura (°C)",
            "xAxisLabel": "Data",
            "yAxisLabel": "Temperatura",
            "seriesColors": {
                "Média": "#1565C0",
                "Máxima": "#C62828",
                "Mínima": "#2E7D32",
            },
        }))
        .unwrap_or_default();
        js_bridge::render_multi_line_chart(CHART_TEMP_ID, &temp_json, &temp_config);

        let humidity_json = serde_json::to_string(&humidity_series(&daily)).unwrap_or_default();
        let humidity_config = serde_json::to_string(&serde_json::json!({
            "title": "Umidade (%)",
            "xAxisLabel": "Data",
            "yAxisLabel": "Umidade",
            "seriesColors": {
                "Média": "#1565C0",
                "Máxima": "#C62828",
                "Mínima": "#2E7D32",
            },
        }))
        .unwrap_or_default();
        js_bridge::render_multi_line_chart(CHART_HUMIDITY_ID, &humidity_json, &humidity_config);
    });

    // Render the choropleth once both the fan-out and the boundaries exist.
    use_effect(move || {
        let Some(summaries) = state.summaries.read().clone() else {
            return;
        };
        let Some(geo) = state.geo.read().clone() else {
            return;
        };

        let mut joined = geo;
        joined.attach_mean_temperatures(&summaries);

        let markers: Vec<serde_json::Value> = state
            .estados
            .read()
            .iter()
            .map(|e| serde_json::json!({"lat": e.latitude, "lon": e.longitude}))
            .collect();
        let config = serde_json::to_string(&serde_json::json!({
            "valueProperty": cafe_geo::TEMP_PROPERTY,
            "nameProperty": cafe_geo::NAME_PROPERTY,
            "domain": [SCALE_MIN, SCALE_MAX],
            "legendTitle": "Temperatura (°C)",
            "caption": CAPTION,
            "markers": markers,
        }))
        .unwrap_or_default();

        js_bridge::init_charts();
        js_bridge::render_choropleth_map(MAP_ID, &joined.to_json(), &config);
    });

    let selected = (state.selected_estado)();
    let summary = state
        .daily
        .read()
        .as_deref()
        .map(ClimateSummary::from_daily);

    rsx! {
        div {
            style: "padding: 16px; max-width: 960px; margin: 0 auto; font-family: -apple-system, BlinkMacSystemFont, 'Segoe UI', Roboto, sans-serif;",

            h2 {
                style: "margin: 0 0 12px 0;",
                "Análise Climática para Cultivo de Café no Brasil"
            }

            EstadoSelector {}

            if let Some(err) = (state.error_msg)() {
                ErrorDisplay { message: err }
            } else if selected != PLACEHOLDER {
                if let Some(summary) = summary {
                    ChartHeader {
                        title: format!("Dados Climáticos de {} (Últimos 30 dias)", selected),
                    }
                    div {
                        style: "display: flex; gap: 24px;",
                        div {
                            style: "flex: 1;",
                            MetricPanel { label: "Temperatura Média".to_string(), value: format_celsius(summary.temp_mean) }
                            MetricPanel { label: "Temperatura Máxima".to_string(), value: format_celsius(summary.temp_max) }
                            MetricPanel { label: "Temperatura Mínima".to_string(), value: format_celsius(summary.temp_min) }
                        }
                        div {
                            style: "flex: 1;",
                            MetricPanel { label: "Umidade Média".to_string(), value: format_percent(summary.humidity_mean) }
                            MetricPanel { label: "Umidade Máxima".to_string(), value: format_percent(summary.humidity_max) }
                            MetricPanel { label: "Umidade Mínima".to_string(), value: format_percent(summary.humidity_min) }
                        }
                    }

                    ChartContainer {
                        id: CHART_TEMP_ID.to_string(),
                        min_height: 380,
                    }
                    ChartContainer {
                        id: CHART_HUMIDITY_ID.to_string(),
                        min_height: 380,
                    }

                    ChartHeader {
                        title: "Mapa Geográfico Com a Temperatura Média por Estado".to_string(),
                        subtitle: "Uma requisição por estado a cada seleção; a montagem do mapa aguarda as 27 respostas.".to_string(),
                    }
                    ChartContainer {
                        id: MAP_ID.to_string(),
                        loading: (state.loading)() && state.summaries.read().is_none(),
                        min_height: 540,
                    }
                } else {
                    LoadingSpinner {}
                }
            }
        }
    }
}
