//! Typed wrappers around JS interop via `js_sys::eval()`.
//!
//! The D3 renderers live in `assets/js/dashboard-charts.js`, are evaluated as
//! globals once D3 is available and exposed via `window.*`. Frames arrive
//! fully projected (pixel positions, fills, opacities), so the scripts only
//! draw.

use crate::mark_click::{MarkClick, MARK_CLICK_EVENT};
use gap_data::projection::{BarFrame, HighlightStyle, LineFrame, ScatterFrame};
use gap_data::{ChartLayout, DashboardFrame, FrameUpdate};
use serde::Serialize;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;

static DASHBOARD_CHARTS_JS: &str = include_str!("../assets/js/dashboard-charts.js");

pub const SCATTER_CONTAINER: &str = "scatter-plot";
pub const BAR_CONTAINER: &str = "bar-chart";
pub const LINE_CONTAINER: &str = "line-chart";

/// Execute arbitrary JS, wrapping in try/catch to avoid panics.
pub fn call_js(code: &str) {
    let wrapped = format!(
        "try {{ {} }} catch(e) {{ console.warn('Dashboard JS call failed:', e); }}",
        code
    );
    let _ = js_sys::eval(&wrapped);
}

/// Initialize the chart scripts with a wait-for-D3 polling loop.
///
/// The scripts are evaluated at global scope through an indirect eval once
/// `d3` exists, and each renderer is then promoted to `window.*`.
pub fn init_charts() {
    let store_js = format!(
        "window.__gapChartScripts = {};",
        serde_json::to_string(DASHBOARD_CHARTS_JS).unwrap_or_default()
    );
    let _ = js_sys::eval(&store_js);

    let init_js = r#"
        (function() {
            var waitForD3 = setInterval(function() {
                if (typeof d3 !== 'undefined') {
                    clearInterval(waitForD3);
                    (0, eval)(window.__gapChartScripts);
                    delete window.__gapChartScripts;
                    if (typeof renderScatterFrame !== 'undefined') window.renderScatterFrame = renderScatterFrame;
                    if (typeof renderBarFrame !== 'undefined') window.renderBarFrame = renderBarFrame;
                    if (typeof renderLineFrame !== 'undefined') window.renderLineFrame = renderLineFrame;
                    if (typeof applyHighlight !== 'undefined') window.applyHighlight = applyHighlight;
                    window.__gapChartsReady = true;
                    console.log('Dashboard charts initialized');
                }
            }, 100);
        })();
    "#;
    let _ = js_sys::eval(init_js);
}

/// Quote a JSON document as a JS string literal.
fn js_string<T: Serialize + ?Sized>(value: &T) -> String {
    let json = match serde_json::to_string(value) {
        Ok(json) => json,
        Err(e) => {
            log::error!("Failed to serialize chart payload: {}", e);
            "null".to_string()
        }
    };
    serde_json::to_string(&json).unwrap_or_else(|_| "'null'".to_string())
}

/// Call `window.<function>(container, frame, layout)` once the scripts are
/// ready and the container exists in the DOM.
fn render_when_ready(function: &str, container_id: &str, frame_literal: &str, layout: &ChartLayout) {
    let layout_literal = js_string(layout);
    call_js(&format!(
        r#"
        (function() {{
            var poll = setInterval(function() {{
                if (window.__gapChartsReady &&
                    typeof window.{function} !== 'undefined' &&
                    document.getElementById('{container_id}')) {{
                    clearInterval(poll);
                    try {{
                        window.{function}('{container_id}', {frame_literal}, {layout_literal});
                    }} catch(e) {{ console.error('[gap] {function} error:', e); }}
                }}
            }}, 100);
        }})();
        "#,
    ));
}

pub fn render_scatter(frame: &ScatterFrame, layout: &ChartLayout) {
    render_when_ready("renderScatterFrame", SCATTER_CONTAINER, &js_string(frame), layout);
}

pub fn render_bar(frame: &BarFrame, layout: &ChartLayout) {
    render_when_ready("renderBarFrame", BAR_CONTAINER, &js_string(frame), layout);
}

/// Render the line chart, or clear it when no country is selected.
pub fn render_line(frame: Option<&LineFrame>, layout: &ChartLayout) {
    render_when_ready("renderLineFrame", LINE_CONTAINER, &js_string(&frame), layout);
}

/// Restyle the drawn scatter points and bars without redrawing them.
pub fn apply_highlight(style: &HighlightStyle) {
    let style_literal = js_string(style);
    call_js(&format!(
        r#"
        (function() {{
            var poll = setInterval(function() {{
                if (window.__gapChartsReady && typeof window.applyHighlight !== 'undefined') {{
                    clearInterval(poll);
                    window.applyHighlight(['{SCATTER_CONTAINER}', '{BAR_CONTAINER}'], {style_literal});
                }}
            }}, 100);
        }})();
        "#,
    ));
}

/// Draw every chart from scratch.
pub fn render_full(frame: &DashboardFrame, layout: &ChartLayout) {
    render_scatter(&frame.scatter, layout);
    render_bar(&frame.bar, layout);
    render_line(frame.line.as_ref(), layout);
}

/// Redraw only the charts named in `update`.
pub fn apply_update(update: &FrameUpdate, layout: &ChartLayout) {
    if let Some(scatter) = &update.scatter {
        render_scatter(scatter, layout);
    }
    if let Some(bar) = &update.bar {
        render_bar(bar, layout);
    }
    if update.redraw.line {
        render_line(update.line.as_ref(), layout);
    }
    if let Some(style) = &update.highlight {
        apply_highlight(style);
    }
}

/// Register `on_click` for every `gap:mark-click` event fired by the charts.
///
/// The listener lives for the rest of the page.
pub fn listen_for_mark_clicks(mut on_click: impl FnMut(MarkClick) + 'static) {
    let Some(window) = web_sys::window() else {
        log::warn!("No window; mark clicks are disabled");
        return;
    };

    let closure = Closure::<dyn FnMut(web_sys::CustomEvent)>::new(
        move |event: web_sys::CustomEvent| {
            let Some(detail) = event.detail().as_string() else {
                log::warn!("Mark click without a JSON detail");
                return;
            };
            match MarkClick::from_json(&detail) {
                Ok(click) => on_click(click),
                Err(e) => log::warn!("Ignoring malformed mark click {}: {}", detail, e),
            }
        },
    );
    if let Err(e) = window
        .add_event_listener_with_callback(MARK_CLICK_EVENT, closure.as_ref().unchecked_ref())
    {
        log::error!("Failed to register mark click listener: {:?}", e);
    }
    closure.forget();
}

#[cfg(test)]
mod tests {
    use super::*;

    fn function_body(name: &str) -> &'static str {
        let start = DASHBOARD_CHARTS_JS
            .find(&format!("function {}(", name))
            .unwrap_or_else(|| panic!("{} not found", name));
        let rest = &DASHBOARD_CHARTS_JS[start..];
        let end = rest.find("\n}\n").expect("function end");
        &rest[..end]
    }

    #[test]
    fn test_every_transition_is_named() {
        assert!(!DASHBOARD_CHARTS_JS.contains(".transition()"));
    }

    #[test]
    fn test_highlight_transition_does_not_interrupt_geometry() {
        let highlight = function_body("applyHighlight");
        assert!(highlight.contains(".transition(GAP_HIGHLIGHT)"));
        assert!(!highlight.contains("GAP_GEOMETRY"));

        for renderer in ["renderScatterFrame", "renderBarFrame"] {
            let body = function_body(renderer);
            assert!(body.contains(".transition(GAP_GEOMETRY)"), "{}", renderer);
            assert!(!body.contains("GAP_HIGHLIGHT"), "{}", renderer);

            // Opacity is set outright, so a slower geometry tween cannot undo
            // a highlight that lands while marks are still moving.
            let update = &body[body.rfind(".transition(GAP_GEOMETRY)").unwrap_or(0)..];
            assert!(!update.contains("'opacity'"), "{}", renderer);

            // Exiting marks drop their region so the highlight skips them.
            assert!(body.contains(".attr('data-region', null)"), "{}", renderer);
        }
        assert!(DASHBOARD_CHARTS_JS.contains("var GAP_GEOMETRY = 'geometry';"));
        assert!(DASHBOARD_CHARTS_JS.contains("var GAP_HIGHLIGHT = 'highlight';"));
    }

    #[test]
    fn test_line_draws_isolated_points() {
        let body = function_body("renderLineFrame");
        assert!(body.contains("selectAll('circle').data(frame.points"));
        assert!(body.contains(".attr('cx', function(d) { return d.x; })"));
        assert!(body.contains(".attr('cy', function(d) { return d.y; })"));
        // A cleared chart removes dots along with segments.
        assert!(body.contains("marks.selectAll('*').remove()"));
    }
}
