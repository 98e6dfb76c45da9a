//! Title of the line chart: the selected country, or a hint to pick one.

use crate::state::AppState;
use dioxus::prelude::*;

#[component]
pub fn CountryLabel() -> Element {
    let state = use_context::<AppState>();
    let indicator = state.view.read().line.label();

    match state.selected_country_name() {
        Some(country) => rsx! {
            h3 { style: "margin: 0 0 4px 0; font-size: 16px;", "{country}: {indicator}" }
        },
        None => rsx! {
            p { style: "margin: 0; font-size: 12px; color: #666;", "Click a country in the scatter plot to see its history." }
        },
    }
}
