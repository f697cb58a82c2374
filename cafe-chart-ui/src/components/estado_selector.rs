//! Dropdown selector for choosing an estado.

use crate::state::{AppState, PLACEHOLDER};
use dioxus::prelude::*;

/// Estado dropdown selector: the placeholder plus all 27 federative units.
/// Writes the chosen name into `selected_estado`; choosing the placeholder
/// returns the dashboard to idle.
#[component]
pub fn EstadoSelector() -> Element {
    let mut state = use_context::<AppState>();
    let estados = state.estados.read().clone();
    let selected = (state.selected_estado)();

    let on_change = move |evt: Event<FormData>| {
        let value = evt.value();
        state.selected_estado.set(value);
    };

    rsx! {
        div {
            style: "margin: 8px 0;",
            label {
                r#for: "estado-select",
                style: "font-weight: bold; margin-right: 8px;",
                "Selecione um Estado: "
            }
            select {
                id: "estado-select",
                onchange: on_change,
                option {
                    value: "{PLACEHOLDER}",
                    selected: selected == PLACEHOLDER,
                    "{PLACEHOLDER}"
                }
                for estado in estados.iter() {
                    option {
                        value: "{estado.name}",
                        selected: estado.name == selected,
                        "{estado.name}"
                    }
                }
            }
        }
    }
}
