//! Routes a UI event through the dashboard and redraws what it changed.

use crate::js_bridge;
use crate::state::AppState;
use dioxus::prelude::*;
use gap_data::ViewEvent;

/// Apply `event` to the loaded dashboard, mirror the new view state into
/// `state.view` and hand the changed frames to D3.
///
/// Events that arrive before the data is loaded are dropped.
pub fn dispatch(mut state: AppState, event: ViewEvent) {
    let mut guard = state.dashboard.write();
    let Some(dashboard) = guard.as_mut() else {
        log::warn!("Ignoring {:?} before data is loaded", event);
        return;
    };

    let update = dashboard.dispatch(event);
    if update.is_empty() {
        return;
    }
    state.view.set(dashboard.state().clone());
    js_bridge::apply_update(&update, dashboard.layout());
}
