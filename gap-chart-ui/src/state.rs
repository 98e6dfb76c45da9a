//! Application state managed via Dioxus context.
//!
//! `AppState` bundles all reactive signals into a single struct provided via
//! `use_context_provider`. Child components retrieve it with `use_context::<AppState>()`.
//!
//! The `Dashboard` itself is the source of truth for the view state; `view`
//! is a read-only mirror that lets controls re-render with the current
//! selection. Components never write `view` directly, they go through
//! [`crate::dispatch::dispatch`].

use dioxus::prelude::*;
use gap_data::{Dashboard, ViewState};

/// Shared application state for the dashboard app.
#[derive(Clone, Copy)]
pub struct AppState {
    /// Joined data, view state and current frames (None until loaded)
    pub dashboard: Signal<Option<Dashboard>>,
    /// Whether the indicator tables are still loading
    pub loading: Signal<bool>,
    /// Error message if something went wrong
    pub error_msg: Signal<Option<String>>,
    /// Mirror of the dashboard's view state, for rendering controls
    pub view: Signal<ViewState>,
    /// Regions in bar order
    pub regions: Signal<Vec<String>>,
    /// Earliest and latest year available for the year slider
    pub year_span: Signal<Option<(i32, i32)>>,
}

impl AppState {
    /// Create a new AppState with default signal values.
    pub fn new() -> Self {
        Self {
            dashboard: Signal::new(None),
            loading: Signal::new(true),
            error_msg: Signal::new(None),
            view: Signal::new(ViewState::default()),
            regions: Signal::new(Vec::new()),
            year_span: Signal::new(None),
        }
    }

    /// Install a freshly built dashboard and mirror its derived values.
    pub fn install(&mut self, dashboard: Dashboard) {
        self.view.set(dashboard.state().clone());
        self.regions.set(dashboard.data().regions().to_vec());
        self.year_span.set(dashboard.data().year_span());
        self.dashboard.set(Some(dashboard));
        self.error_msg.set(None);
        self.loading.set(false);
    }

    /// Record a fatal load failure. No partial dashboard is shown.
    pub fn fail(&mut self, message: String) {
        log::error!("{}", message);
        self.dashboard.set(None);
        self.error_msg.set(Some(message));
        self.loading.set(false);
    }

    /// Display name of the selected country, if any.
    pub fn selected_country_name(&self) -> Option<String> {
        let geo = self.view.read().selected_country.clone()?;
        self.dashboard
            .read()
            .as_ref()
            .and_then(|dashboard| dashboard.data().find(&geo).map(|e| e.country.clone()))
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}
