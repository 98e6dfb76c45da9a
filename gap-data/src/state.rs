//! Shared view state and the events that change it.
//!
//! Every control produces exactly one [`ViewEvent`]. Applying it overwrites
//! one field of [`ViewState`] and reports, as a [`Redraw`], which charts
//! depend on that field:
//!
//! | event                          | redraw                  |
//! |--------------------------------|-------------------------|
//! | year, x, y, radius             | scatter + bar           |
//! | bar indicator                  | bar                     |
//! | line indicator, country select | line                    |
//! | region toggle                  | highlight (restyle only)|

use gap_indicators::Indicator;
use serde::{Deserialize, Serialize};
use std::ops::BitOr;

/// The current selection driving every chart.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ViewState {
    pub year: i32,
    pub x: Indicator,
    pub y: Indicator,
    pub radius: Indicator,
    pub bar: Indicator,
    pub line: Indicator,
    /// `geo` of the country shown in the line chart
    pub selected_country: Option<String>,
    pub highlighted_region: Option<String>,
}

impl Default for ViewState {
    fn default() -> Self {
        Self {
            year: 2000,
            x: Indicator::FertilityRate,
            y: Indicator::ChildMortality,
            radius: Indicator::Gdp,
            bar: Indicator::ChildMortality,
            line: Indicator::Gdp,
            selected_country: None,
            highlighted_region: None,
        }
    }
}

/// A single UI interaction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ViewEvent {
    SetYear(i32),
    SetX(Indicator),
    SetY(Indicator),
    SetRadius(Indicator),
    SetBar(Indicator),
    SetLine(Indicator),
    /// Select a country by `geo`
    SelectCountry(String),
    /// Highlight a region, or clear the highlight if it is already the highlighted one
    ToggleRegion(String),
}

/// Which charts must be recomputed after an event.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct Redraw {
    pub scatter: bool,
    pub bar: bool,
    pub line: bool,
    /// Restyle existing marks only; no data recompute
    pub highlight: bool,
}

impl Redraw {
    pub const NONE: Redraw = Redraw {
        scatter: false,
        bar: false,
        line: false,
        highlight: false,
    };
    pub const SCATTER: Redraw = Redraw {
        scatter: true,
        ..Redraw::NONE
    };
    pub const BAR: Redraw = Redraw {
        bar: true,
        ..Redraw::NONE
    };
    pub const LINE: Redraw = Redraw {
        line: true,
        ..Redraw::NONE
    };
    pub const HIGHLIGHT: Redraw = Redraw {
        highlight: true,
        ..Redraw::NONE
    };
    pub const ALL: Redraw = Redraw {
        scatter: true,
        bar: true,
        line: true,
        highlight: true,
    };

    pub fn is_empty(&self) -> bool {
        *self == Redraw::NONE
    }
}

impl BitOr for Redraw {
    type Output = Redraw;

    fn bitor(self, rhs: Redraw) -> Redraw {
        Redraw {
            scatter: self.scatter || rhs.scatter,
            bar: self.bar || rhs.bar,
            line: self.line || rhs.line,
            highlight: self.highlight || rhs.highlight,
        }
    }
}

/// Overwrite `field`, reporting `redraw` only if the value actually changed.
fn overwrite<T: PartialEq>(field: &mut T, value: T, redraw: Redraw) -> Redraw {
    if *field == value {
        Redraw::NONE
    } else {
        *field = value;
        redraw
    }
}

impl ViewState {
    /// Apply `event` and return the charts that depend on the changed field.
    pub fn apply(&mut self, event: ViewEvent) -> Redraw {
        match event {
            ViewEvent::SetYear(year) => overwrite(&mut self.year, year, Redraw::SCATTER | Redraw::BAR),
            ViewEvent::SetX(indicator) => {
                overwrite(&mut self.x, indicator, Redraw::SCATTER | Redraw::BAR)
            }
            ViewEvent::SetY(indicator) => {
                overwrite(&mut self.y, indicator, Redraw::SCATTER | Redraw::BAR)
            }
            ViewEvent::SetRadius(indicator) => {
                overwrite(&mut self.radius, indicator, Redraw::SCATTER | Redraw::BAR)
            }
            ViewEvent::SetBar(indicator) => overwrite(&mut self.bar, indicator, Redraw::BAR),
            ViewEvent::SetLine(indicator) => overwrite(&mut self.line, indicator, Redraw::LINE),
            ViewEvent::SelectCountry(geo) => {
                overwrite(&mut self.selected_country, Some(geo), Redraw::LINE)
            }
            ViewEvent::ToggleRegion(region) => {
                if self.highlighted_region.as_deref() == Some(region.as_str()) {
                    self.highlighted_region = None;
                } else {
                    self.highlighted_region = Some(region);
                }
                Redraw::HIGHLIGHT
            }
        }
    }
}
