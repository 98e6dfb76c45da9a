//! Reusable Dioxus RSX components for the dashboard app.

mod chart_container;
mod chart_header;
mod country_label;
mod error_display;
mod indicator_selector;
mod loading_spinner;
mod region_legend;
mod year_slider;

pub use chart_container::ChartContainer;
pub use chart_header::ChartHeader;
pub use country_label::CountryLabel;
pub use error_display::ErrorDisplay;
pub use indicator_selector::{IndicatorControl, IndicatorSelector};
pub use loading_spinner::LoadingSpinner;
pub use region_legend::RegionLegend;
pub use year_slider::YearSlider;
