//! Dashboard controller: the single owner of data, view state and frames.
//!
//! The UI forwards every interaction as a [`ViewEvent`] to
//! [`Dashboard::dispatch`] and redraws only the frames present in the
//! returned [`FrameUpdate`].

use crate::join::JoinedDataset;
use crate::layout::ChartLayout;
use crate::projection::{
    project_bar, project_line, project_scatter, BarFrame, HighlightStyle, LineFrame, ScatterFrame,
};
use crate::state::{Redraw, ViewEvent, ViewState};
use serde::Serialize;

/// Everything currently drawn.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DashboardFrame {
    pub state: ViewState,
    pub scatter: ScatterFrame,
    pub bar: BarFrame,
    pub line: Option<LineFrame>,
    pub highlight: HighlightStyle,
}

/// The frames that changed after one event. `None` means "leave as drawn".
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct FrameUpdate {
    pub redraw: Redraw,
    pub scatter: Option<ScatterFrame>,
    pub bar: Option<BarFrame>,
    pub line: Option<LineFrame>,
    pub highlight: Option<HighlightStyle>,
}

impl FrameUpdate {
    pub fn is_empty(&self) -> bool {
        self.redraw.is_empty()
    }
}

pub struct Dashboard {
    data: JoinedDataset,
    layout: ChartLayout,
    frame: DashboardFrame,
}

impl Dashboard {
    /// Build the dashboard and compute every frame once.
    ///
    /// `initial` is normalized first: the year is clamped to the data's year
    /// span, and an unknown selected country or highlighted region is cleared.
    pub fn new(data: JoinedDataset, layout: ChartLayout, initial: ViewState) -> Self {
        let mut state = initial;
        state.year = clamp_year(&data, state.year);
        if let Some(geo) = state.selected_country.as_deref() {
            if data.find(geo).is_none() {
                log::warn!("Ignoring unknown initial country '{}'", geo);
                state.selected_country = None;
            }
        }
        if let Some(region) = state.highlighted_region.as_deref() {
            if !data.has_region(region) {
                log::warn!("Ignoring unknown initial region '{}'", region);
                state.highlighted_region = None;
            }
        }

        let frame = DashboardFrame {
            scatter: project_scatter(&data, &state, &layout),
            bar: project_bar(&data, &state, &layout),
            line: project_line(&data, &state, &layout),
            highlight: HighlightStyle::new(&state, &layout),
            state,
        };
        Self {
            data,
            layout,
            frame,
        }
    }

    pub fn data(&self) -> &JoinedDataset {
        &self.data
    }

    pub fn layout(&self) -> &ChartLayout {
        &self.layout
    }

    pub fn state(&self) -> &ViewState {
        &self.frame.state
    }

    /// The frames as currently drawn.
    pub fn frame(&self) -> &DashboardFrame {
        &self.frame
    }

    /// Apply one interaction and recompute only the charts that depend on it.
    pub fn dispatch(&mut self, event: ViewEvent) -> FrameUpdate {
        let event = match self.validate(event) {
            Some(event) => event,
            None => return FrameUpdate::default(),
        };
        log::debug!("Dispatching {:?}", event);

        let redraw = self.frame.state.apply(event);
        let mut update = FrameUpdate {
            redraw,
            ..FrameUpdate::default()
        };
        let state = &self.frame.state;

        if redraw.scatter {
            self.frame.scatter = project_scatter(&self.data, state, &self.layout);
            update.scatter = Some(self.frame.scatter.clone());
        }
        if redraw.bar {
            self.frame.bar = project_bar(&self.data, state, &self.layout);
            update.bar = Some(self.frame.bar.clone());
        }
        if redraw.line {
            self.frame.line = project_line(&self.data, state, &self.layout);
            update.line = self.frame.line.clone();
        }
        if redraw.highlight {
            let style = HighlightStyle::new(state, &self.layout);
            self.frame.scatter.restyle(&style);
            self.frame.bar.restyle(&style);
            self.frame.highlight = style.clone();
            update.highlight = Some(style);
        }
        update
    }

    /// Reject events that reference unknown countries or regions, and clamp years.
    fn validate(&self, event: ViewEvent) -> Option<ViewEvent> {
        match event {
            ViewEvent::SetYear(year) => Some(ViewEvent::SetYear(clamp_year(&self.data, year))),
            ViewEvent::SelectCountry(geo) if self.data.find(&geo).is_none() => {
                log::warn!("Ignoring selection of unknown country '{}'", geo);
                None
            }
            ViewEvent::ToggleRegion(region) if !self.data.has_region(&region) => {
                log::warn!("Ignoring highlight of unknown region '{}'", region);
                None
            }
            other => Some(other),
        }
    }
}

fn clamp_year(data: &JoinedDataset, year: i32) -> i32 {
    match data.year_span() {
        Some((first, last)) => year.clamp(first, last),
        None => year,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::join::join;
    use gap_indicators::{Indicator, IndicatorTables};

    fn dashboard() -> Dashboard {
        let tables = IndicatorTables::parse_csv(gap_indicators::fixtures::ALL).unwrap();
        Dashboard::new(join(&tables), ChartLayout::default(), ViewState::default())
    }

    #[test]
    fn test_initial_frame() {
        let dashboard = dashboard();
        let frame = dashboard.frame();
        assert!(!frame.scatter.points.is_empty());
        assert_eq!(frame.bar.bars.len(), 4);
        assert!(frame.line.is_none());
        assert_eq!(frame.highlight.region, None);
    }

    #[test]
    fn test_year_change_updates_scatter_and_bar_only() {
        let mut dashboard = dashboard();
        let update = dashboard.dispatch(ViewEvent::SetYear(2005));
        assert!(update.scatter.is_some());
        assert!(update.bar.is_some());
        assert!(update.line.is_none());
        assert!(update.highlight.is_none());
        assert_eq!(update.scatter.unwrap().year, 2005);
    }

    #[test]
    fn test_bar_indicator_updates_bar_only() {
        let mut dashboard = dashboard();
        let scatter_before = dashboard.frame().scatter.clone();
        let update = dashboard.dispatch(ViewEvent::SetBar(Indicator::LifeExpectancy));
        assert!(update.scatter.is_none());
        assert_eq!(update.bar.unwrap().indicator, Indicator::LifeExpectancy);
        assert_eq!(dashboard.frame().scatter, scatter_before);
    }

    #[test]
    fn test_year_is_clamped_to_data() {
        let mut dashboard = dashboard();
        dashboard.dispatch(ViewEvent::SetYear(1800));
        assert_eq!(dashboard.state().year, 1995);
        dashboard.dispatch(ViewEvent::SetYear(2100));
        assert_eq!(dashboard.state().year, 2010);
    }

    #[test]
    fn test_select_country_then_change_line_indicator() {
        let mut dashboard = dashboard();
        let update = dashboard.dispatch(ViewEvent::SelectCountry("ago".to_string()));
        assert_eq!(update.redraw, Redraw::LINE);
        let line = update.line.unwrap();
        assert_eq!(line.country, "Angola");
        assert_eq!(line.indicator, Indicator::Gdp);
        // Angola's gdp is blank in 1998 and 1999.
        assert!(line.points.iter().all(|p| p.year != 1998 && p.year != 1999));
        assert_eq!(line.segments.len(), 2);

        let update = dashboard.dispatch(ViewEvent::SetLine(Indicator::LifeExpectancy));
        assert!(update.scatter.is_none() && update.bar.is_none());
        let line = update.line.unwrap();
        assert_eq!(line.geo, "ago");
        assert_eq!(line.indicator, Indicator::LifeExpectancy);
        assert_eq!(line.points.len(), 16);
    }

    #[test]
    fn test_select_country_by_geo_not_name() {
        let mut dashboard = dashboard();
        let update = dashboard.dispatch(ViewEvent::SelectCountry("Kenya".to_string()));
        assert!(update.is_empty());
        assert_eq!(dashboard.state().selected_country, None);

        let update = dashboard.dispatch(ViewEvent::SelectCountry("ken".to_string()));
        assert_eq!(update.line.unwrap().country, "Kenya");
    }

    #[test]
    fn test_region_toggle_restyles_without_recompute() {
        let mut dashboard = dashboard();
        let count = dashboard.frame().scatter.points.len();

        let update = dashboard.dispatch(ViewEvent::ToggleRegion("europe".to_string()));
        assert_eq!(update.redraw, Redraw::HIGHLIGHT);
        assert!(update.scatter.is_none() && update.bar.is_none() && update.line.is_none());
        assert_eq!(update.highlight.unwrap().region.as_deref(), Some("europe"));

        let frame = dashboard.frame();
        assert_eq!(frame.scatter.points.len(), count, "marks are dimmed, not removed");
        for point in &frame.scatter.points {
            let expected = if point.region == "europe" { 1.0 } else { 0.3 };
            assert_eq!(point.opacity, expected);
        }

        let update = dashboard.dispatch(ViewEvent::ToggleRegion("europe".to_string()));
        assert_eq!(update.highlight.unwrap().region, None);
        let frame = dashboard.frame();
        assert!(frame.scatter.points.iter().all(|p| p.opacity == 1.0));
        assert!(frame.bar.bars.iter().all(|b| b.opacity == 1.0));
    }

    #[test]
    fn test_recomputed_frames_keep_highlight() {
        let mut dashboard = dashboard();
        dashboard.dispatch(ViewEvent::ToggleRegion("asia".to_string()));
        let update = dashboard.dispatch(ViewEvent::SetYear(2003));
        let bars = update.bar.unwrap().bars;
        for bar in bars {
            let expected = if bar.region == "asia" { 1.0 } else { 0.3 };
            assert_eq!(bar.opacity, expected);
        }
    }

    #[test]
    fn test_unknown_region_is_ignored() {
        let mut dashboard = dashboard();
        assert!(dashboard
            .dispatch(ViewEvent::ToggleRegion("oceania".to_string()))
            .is_empty());
        assert_eq!(dashboard.state().highlighted_region, None);
    }

    #[test]
    fn test_initial_state_is_normalized() {
        let tables = IndicatorTables::parse_csv(gap_indicators::fixtures::ALL).unwrap();
        let initial = ViewState {
            year: 1900,
            selected_country: Some("xyz".to_string()),
            highlighted_region: Some("africa".to_string()),
            ..ViewState::default()
        };
        let dashboard = Dashboard::new(join(&tables), ChartLayout::default(), initial);
        assert_eq!(dashboard.state().year, 1995);
        assert_eq!(dashboard.state().selected_country, None);
        assert_eq!(dashboard.frame().highlight.region.as_deref(), Some("africa"));
    }
}
