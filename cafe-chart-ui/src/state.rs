//! Application state managed via Dioxus context.
//!
//! `AppState` bundles all reactive signals into a single struct provided via
//! `use_context_provider`. Child components retrieve it with `use_context::<AppState>()`.

use cafe_geo::GeoEstados;
use cafe_meteo::daily::DailyWeather;
use cafe_meteo::estado::Estado;
use cafe_meteo::stats::EstadoSummary;
use dioxus::prelude::*;

/// Placeholder dropdown option; selecting it returns the app to idle.
pub const PLACEHOLDER: &str = "Selecione um Estado";

/// Shared application state for the dashboard.
#[derive(Clone, Copy)]
pub struct AppState {
    /// Currently selected estado name, or [`PLACEHOLDER`]
    pub selected_estado: Signal<String>,
    /// Reference table backing the dropdown and the map markers
    pub estados: Signal<Vec<Estado>>,
    /// Daily records for the selected estado (None while idle or loading)
    pub daily: Signal<Option<Vec<DailyWeather>>>,
    /// National fan-out summaries for the map (None until the fan-out lands)
    pub summaries: Signal<Option<Vec<EstadoSummary>>>,
    /// Boundary polygons, fetched once and reused for the app lifetime
    pub geo: Signal<Option<GeoEstados>>,
    /// Whether a fetch is in flight
    pub loading: Signal<bool>,
    /// Error message if something went wrong
    pub error_msg: Signal<Option<String>>,
}

impl AppState {
    /// Create a new AppState with default signal values.
    pub fn new() -> Self {
        Self {
            selected_estado: Signal::new(PLACEHOLDER.to_string()),
            estados: Signal::new(Estado::get_estado_vector()),
            daily: Signal::new(None),
            summaries: Signal::new(None),
            geo: Signal::new(None),
            loading: Signal::new(false),
            error_msg: Signal::new(None),
        }
    }
}
