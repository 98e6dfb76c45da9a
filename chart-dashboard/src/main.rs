//! Country Indicators Dashboard
//!
//! A scatter plot of countries for one year (x, y and radius each bound to an
//! indicator), a bar chart of per-region means and a line chart of one
//! country's history. Clicking a point selects the country for the line
//! chart; clicking a bar or legend entry highlights its region.
//!
//! Data flow:
//! 1. `build.rs` copies the five indicator CSVs into `OUT_DIR`.
//! 2. `include_str!` embeds them into the WASM binary.
//! 3. On mount, all five are loaded and joined; nothing is drawn until every
//!    table is in, and any load error replaces the dashboard.
//! 4. Each control emits one `ViewEvent`; `dispatch` redraws only the charts
//!    that depend on it.

use dioxus::prelude::*;
use gap_chart_ui::components::{
    ChartContainer, ChartHeader, CountryLabel, ErrorDisplay, IndicatorControl, IndicatorSelector,
    LoadingSpinner, RegionLegend, YearSlider,
};
use gap_chart_ui::dispatch::dispatch;
use gap_chart_ui::js_bridge;
use gap_chart_ui::state::AppState;
use gap_data::{join, ChartLayout, Dashboard, ViewState};
use gap_indicators::{load, EmbeddedSource, Indicator, SourceLocations};

const POPULATION_CSV: &str = include_str!(concat!(env!("OUT_DIR"), "/population.csv"));
const GDP_CSV: &str = include_str!(concat!(env!("OUT_DIR"), "/gdp.csv"));
const CHILD_MORTALITY_CSV: &str = include_str!(concat!(env!("OUT_DIR"), "/cmu5.csv"));
const LIFE_EXPECTANCY_CSV: &str = include_str!(concat!(env!("OUT_DIR"), "/life_expectancy.csv"));
const FERTILITY_RATE_CSV: &str = include_str!(concat!(env!("OUT_DIR"), "/fertility-rate.csv"));

fn embedded_source() -> EmbeddedSource {
    [
        (Indicator::Population, POPULATION_CSV),
        (Indicator::Gdp, GDP_CSV),
        (Indicator::ChildMortality, CHILD_MORTALITY_CSV),
        (Indicator::LifeExpectancy, LIFE_EXPECTANCY_CSV),
        (Indicator::FertilityRate, FERTILITY_RATE_CSV),
    ]
    .into_iter()
    .fold(EmbeddedSource::new(), |source, (indicator, csv)| {
        source.with_file(indicator.default_file_name(), csv.as_bytes())
    })
}

fn main() {
    dioxus_logger::init(dioxus_logger::tracing::Level::INFO).expect("failed to init logger");
    dioxus::LaunchBuilder::new()
        .with_cfg(dioxus::web::Config::new().rootname("dashboard-root"))
        .launch(App);
}

#[component]
fn App() -> Element {
    let mut state = use_context_provider(AppState::new);

    use_future(move || async move {
        js_bridge::init_charts();

        let tables = match load(&embedded_source(), &SourceLocations::default()).await {
            Ok(tables) => tables,
            Err(e) => {
                state.fail(e.to_string());
                return;
            }
        };
        let data = join(&tables);
        if !data.report().is_clean() {
            log::warn!("Join warnings: {:?}", data.report());
        }
        if data.is_empty() {
            state.fail("The population table has no countries".to_string());
            return;
        }

        let dashboard = Dashboard::new(data, ChartLayout::default(), ViewState::default());
        js_bridge::render_full(dashboard.frame(), dashboard.layout());
        state.install(dashboard);
        js_bridge::listen_for_mark_clicks(move |click| dispatch(state, click.into()));
    });

    let view = state.view.read().clone();
    rsx! {
        div {
            style: "padding: 16px; font-family: -apple-system, BlinkMacSystemFont, 'Segoe UI', Roboto, sans-serif;",
            h2 { "Country indicators" }

            if let Some(err) = (state.error_msg)() {
                ErrorDisplay { message: err }
            } else if (state.loading)() {
                LoadingSpinner {}
            } else {
                YearSlider {}
                div {
                    style: "display: flex; gap: 16px; flex-wrap: wrap;",
                    IndicatorSelector { control: IndicatorControl::X }
                    IndicatorSelector { control: IndicatorControl::Y }
                    IndicatorSelector { control: IndicatorControl::Radius }
                    IndicatorSelector { control: IndicatorControl::Bar }
                    IndicatorSelector { control: IndicatorControl::Line }
                }
                RegionLegend {}
                div {
                    style: "display: flex; gap: 16px; flex-wrap: wrap;",
                    div {
                        ChartHeader {
                            title: format!("{} vs {}", view.y.label(), view.x.label()),
                            subtitle: format!("{}, radius: {}", view.year, view.radius.label()),
                        }
                        ChartContainer { id: js_bridge::SCATTER_CONTAINER.to_string() }
                    }
                    div {
                        ChartHeader {
                            title: format!("Regional mean: {}", view.bar.label()),
                            subtitle: view.year.to_string(),
                        }
                        ChartContainer { id: js_bridge::BAR_CONTAINER.to_string() }
                    }
                }
                CountryLabel {}
                ChartContainer { id: js_bridge::LINE_CONTAINER.to_string() }
            }
        }
    }
}
