//! Dropdown selectors for the five indicator roles.

use crate::dispatch::dispatch;
use crate::state::AppState;
use dioxus::prelude::*;
use gap_data::{ViewEvent, ViewState};
use gap_indicators::Indicator;

/// Which view-state field a selector drives.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IndicatorControl {
    X,
    Y,
    Radius,
    Bar,
    Line,
}

impl IndicatorControl {
    pub fn label(&self) -> &'static str {
        match self {
            IndicatorControl::X => "X axis",
            IndicatorControl::Y => "Y axis",
            IndicatorControl::Radius => "Radius",
            IndicatorControl::Bar => "Bars",
            IndicatorControl::Line => "Line",
        }
    }

    fn id(&self) -> &'static str {
        match self {
            IndicatorControl::X => "x-select",
            IndicatorControl::Y => "y-select",
            IndicatorControl::Radius => "radius-select",
            IndicatorControl::Bar => "bar-select",
            IndicatorControl::Line => "line-select",
        }
    }

    pub fn current(&self, state: &ViewState) -> Indicator {
        match self {
            IndicatorControl::X => state.x,
            IndicatorControl::Y => state.y,
            IndicatorControl::Radius => state.radius,
            IndicatorControl::Bar => state.bar,
            IndicatorControl::Line => state.line,
        }
    }

    pub fn event(&self, indicator: Indicator) -> ViewEvent {
        match self {
            IndicatorControl::X => ViewEvent::SetX(indicator),
            IndicatorControl::Y => ViewEvent::SetY(indicator),
            IndicatorControl::Radius => ViewEvent::SetRadius(indicator),
            IndicatorControl::Bar => ViewEvent::SetBar(indicator),
            IndicatorControl::Line => ViewEvent::SetLine(indicator),
        }
    }
}

#[derive(Props, Clone, PartialEq)]
pub struct IndicatorSelectorProps {
    pub control: IndicatorControl,
}

/// Indicator dropdown. Emits one `ViewEvent` per change.
#[component]
pub fn IndicatorSelector(props: IndicatorSelectorProps) -> Element {
    let state = use_context::<AppState>();
    let control = props.control;
    let selected = control.current(&state.view.read());
    let id = control.id();
    let caption = control.label();

    let on_change = move |evt: Event<FormData>| match evt.value().parse::<Indicator>() {
        Ok(indicator) => dispatch(state, control.event(indicator)),
        Err(e) => log::warn!("{}", e),
    };

    rsx! {
        div {
            style: "margin: 8px 0;",
            label {
                r#for: "{id}",
                style: "font-weight: bold; margin-right: 8px;",
                "{caption}: "
            }
            select {
                id: "{id}",
                onchange: on_change,
                for indicator in Indicator::ALL {
                    option {
                        value: indicator.name(),
                        selected: indicator == selected,
                        {indicator.label()}
                    }
                }
            }
        }
    }
}
