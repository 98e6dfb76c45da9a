//! Chart geometry and styling configuration.

use serde::{Deserialize, Serialize};

/// Sizes, margins and colors shared by the three charts.
///
/// Every field has a default, so a partial JSON file only overrides what it
/// names.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ChartLayout {
    /// Width of the scatter plot and line chart in pixels
    pub width: f64,
    /// Width of the bar chart in pixels
    pub bar_width: f64,
    /// Height of every chart in pixels
    pub height: f64,
    pub margin: f64,
    /// Smallest drawn radius. Values whose square-root radius falls below it
    /// are drawn at this size, so area is proportional to the value only
    /// above the floor; set it to 0 for strictly area-linear circles.
    pub min_radius: f64,
    pub max_radius: f64,
    /// Inner and outer padding of the region bands, as a fraction of a step
    pub band_padding: f64,
    /// Region colors, assigned in region order and cycled
    pub palette: Vec<String>,
    /// Opacity of marks outside the highlighted region
    pub dimmed_opacity: f64,
    /// Fraction added below the minimum and above the maximum of the line y axis
    pub line_padding: f64,
    pub line_color: String,
    pub line_width: f64,
}

impl Default for ChartLayout {
    fn default() -> Self {
        Self {
            width: 1000.0,
            bar_width: 500.0,
            height: 500.0,
            margin: 30.0,
            min_radius: 10.0,
            max_radius: 30.0,
            band_padding: 0.1,
            palette: ["#DD4949", "#39CDA1", "#FD710C", "#A14BE5"]
                .iter()
                .map(|c| c.to_string())
                .collect(),
            dimmed_opacity: 0.3,
            line_padding: 0.1,
            line_color: "#FFA500".to_string(),
            line_width: 3.0,
        }
    }
}

impl ChartLayout {
    /// Horizontal pixel range of the scatter plot and line chart.
    /// The left margin is doubled to leave room for y-axis labels.
    pub fn plot_x_range(&self) -> (f64, f64) {
        (self.margin * 2.0, self.width - self.margin)
    }

    /// Vertical pixel range shared by every chart, bottom to top.
    pub fn plot_y_range(&self) -> (f64, f64) {
        (self.height - self.margin, self.margin)
    }

    pub fn bar_x_range(&self) -> (f64, f64) {
        (self.margin * 2.0, self.bar_width - self.margin)
    }

    pub fn radius_range(&self) -> (f64, f64) {
        (self.min_radius, self.max_radius)
    }
}
