//! Clickable region legend; mirrors clicking a bar.

use crate::dispatch::dispatch;
use crate::state::AppState;
use dioxus::prelude::*;
use gap_data::projection::HighlightStyle;
use gap_data::scale::ColorScale;
use gap_data::ViewEvent;

#[component]
pub fn RegionLegend() -> Element {
    let state = use_context::<AppState>();
    let regions = state.regions.read().clone();
    let entries: Vec<(String, String, f64)> = match state.dashboard.read().as_ref() {
        Some(dashboard) => {
            let colors = ColorScale::new(regions.clone(), dashboard.layout().palette.clone());
            let style = HighlightStyle::new(dashboard.state(), dashboard.layout());
            regions
                .iter()
                .map(|region| {
                    let color = colors.color(region).to_string();
                    (region.clone(), color, style.opacity_for(region))
                })
                .collect()
        }
        None => Vec::new(),
    };

    rsx! {
        div {
            style: "margin: 8px 0; display: flex; gap: 12px;",
            for (region, color, opacity) in entries {
                button {
                    key: "{region}",
                    style: "border: none; background: {color}; color: white; padding: 4px 10px; border-radius: 4px; cursor: pointer; opacity: {opacity};",
                    onclick: {
                        let region = region.clone();
                        move |_| dispatch(state, ViewEvent::ToggleRegion(region.clone()))
                    },
                    "{region}"
                }
            }
        }
    }
}
