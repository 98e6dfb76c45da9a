//! `frame`: print what the dashboard would draw for a given view.

use crate::source::SourceArgs;
use crate::write_output;
use anyhow::Context;
use clap::Args;
use gap_data::{ChartLayout, Dashboard, ViewState};
use gap_indicators::Indicator;
use std::path::Path;

/// View state flags. Anything omitted keeps the dashboard's initial value.
#[derive(Args, Debug, Clone, Default)]
pub struct ViewArgs {
    #[arg(long)]
    pub year: Option<i32>,

    /// Scatter x-axis indicator
    #[arg(long)]
    pub x: Option<Indicator>,

    /// Scatter y-axis indicator
    #[arg(long)]
    pub y: Option<Indicator>,

    /// Scatter radius indicator
    #[arg(long)]
    pub radius: Option<Indicator>,

    /// Bar chart indicator
    #[arg(long)]
    pub bar: Option<Indicator>,

    /// Line chart indicator
    #[arg(long)]
    pub line: Option<Indicator>,

    /// Selected country (geo code) for the line chart
    #[arg(long)]
    pub country: Option<String>,

    /// Highlighted region
    #[arg(long)]
    pub region: Option<String>,
}

impl ViewArgs {
    pub fn to_view_state(&self) -> ViewState {
        let initial = ViewState::default();
        ViewState {
            year: self.year.unwrap_or(initial.year),
            x: self.x.unwrap_or(initial.x),
            y: self.y.unwrap_or(initial.y),
            radius: self.radius.unwrap_or(initial.radius),
            bar: self.bar.unwrap_or(initial.bar),
            line: self.line.unwrap_or(initial.line),
            selected_country: self.country.clone(),
            highlighted_region: self.region.clone(),
        }
    }
}

pub fn read_layout(path: Option<&Path>) -> anyhow::Result<ChartLayout> {
    let Some(path) = path else {
        return Ok(ChartLayout::default());
    };
    let contents = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read layout {}", path.display()))?;
    serde_json::from_str(&contents)
        .with_context(|| format!("Invalid layout JSON in {}", path.display()))
}

pub async fn run_frame(
    source: &SourceArgs,
    view: &ViewArgs,
    layout: Option<&Path>,
    output: Option<&Path>,
) -> anyhow::Result<()> {
    let layout = read_layout(layout)?;
    let data = source.load_dataset().await?;
    let dashboard = Dashboard::new(data, layout, view.to_view_state());
    let json = serde_json::to_string_pretty(dashboard.frame())
        .context("Failed to serialize dashboard frame")?;
    write_output(output, &format!("{}\n", json))
}
