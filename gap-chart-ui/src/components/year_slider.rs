//! Year slider bounded by the loaded data.

use crate::dispatch::dispatch;
use crate::state::AppState;
use dioxus::prelude::*;
use gap_data::ViewEvent;

#[component]
pub fn YearSlider() -> Element {
    let state = use_context::<AppState>();
    let Some((first, last)) = (state.year_span)() else {
        return rsx! {};
    };
    let year = state.view.read().year;

    let on_input = move |evt: Event<FormData>| {
        if let Ok(year) = evt.value().parse::<i32>() {
            dispatch(state, ViewEvent::SetYear(year));
        }
    };

    rsx! {
        div {
            style: "margin: 8px 0; display: flex; gap: 12px; align-items: center;",
            label {
                r#for: "year-slider",
                style: "font-weight: bold;",
                "Year: "
            }
            input {
                id: "year-slider",
                r#type: "range",
                min: "{first}",
                max: "{last}",
                step: "1",
                value: "{year}",
                style: "width: 400px;",
                oninput: on_input,
            }
            span { style: "font-size: 20px; font-weight: bold;", "{year}" }
        }
    }
}
