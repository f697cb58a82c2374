//! Metric panel: one labeled aggregate value.

use dioxus::prelude::*;

#[derive(Props, Clone, PartialEq)]
pub struct MetricPanelProps {
    /// Metric label (e.g., "Temperatura Média")
    pub label: String,
    /// Pre-formatted value (e.g., "20.0°C")
    pub value: String,
}

/// A small card showing a single aggregate metric.
#[component]
pub fn MetricPanel(props: MetricPanelProps) -> Element {
    rsx! {
        div {
            style: "padding: 8px 12px; margin: 4px 0; background: #FAFAFA; border: 1px solid #E0E0E0; border-radius: 4px;",
            div {
                style: "font-size: 12px; color: #616161;",
                "{props.label}"
            }
            div {
                style: "font-size: 22px; font-weight: bold;",
                "{props.value}"
            }
        }
    }
}
