//! Reusable Dioxus RSX components for the coffee-climate dashboard.

mod chart_container;
mod chart_header;
mod error_display;
mod estado_selector;
mod loading_spinner;
mod metric_panel;

pub use chart_container::ChartContainer;
pub use chart_header::ChartHeader;
pub use error_display::ErrorDisplay;
pub use estado_selector::EstadoSelector;
pub use loading_spinner::LoadingSpinner;
pub use metric_panel::MetricPanel;
