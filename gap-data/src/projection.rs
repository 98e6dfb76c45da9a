//! Pure projections from entities and view state to draw frames.
//!
//! All frame structs derive `Serialize` so they can be passed to D3.js as
//! JSON. Coordinates are in pixels of the chart's SVG; axes carry their
//! domain and pixel range so the renderer can lay out ticks.

use crate::entity::CountryEntity;
use crate::join::JoinedDataset;
use crate::layout::ChartLayout;
use crate::scale::{extent, BandScale, ColorScale, LinearScale, RadiusScale};
use crate::state::ViewState;
use gap_indicators::Indicator;
use serde::Serialize;

/// A continuous axis.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Axis {
    pub label: String,
    pub domain: (f64, f64),
    pub range: (f64, f64),
}

impl Axis {
    fn from_scale(label: impl Into<String>, scale: &LinearScale) -> Self {
        Self {
            label: label.into(),
            domain: scale.domain,
            range: scale.range,
        }
    }
}

/// A categorical axis.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BandAxis {
    pub domain: Vec<String>,
    pub range: (f64, f64),
    pub bandwidth: f64,
}

/// Opacity rule for the region highlight.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct HighlightStyle {
    pub region: Option<String>,
    pub dimmed_opacity: f64,
}

impl HighlightStyle {
    pub fn new(state: &ViewState, layout: &ChartLayout) -> Self {
        Self {
            region: state.highlighted_region.clone(),
            dimmed_opacity: layout.dimmed_opacity,
        }
    }

    /// Full opacity for marks of the highlighted region, or for every mark
    /// when nothing is highlighted.
    pub fn opacity_for(&self, region: &str) -> f64 {
        match &self.region {
            Some(highlighted) if highlighted != region => self.dimmed_opacity,
            _ => 1.0,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ScatterPoint {
    pub geo: String,
    pub country: String,
    pub region: String,
    pub x_value: f64,
    pub y_value: f64,
    pub r_value: f64,
    pub cx: f64,
    pub cy: f64,
    pub r: f64,
    pub fill: String,
    pub opacity: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ScatterFrame {
    pub year: i32,
    pub x: Indicator,
    pub y: Indicator,
    pub radius: Indicator,
    pub x_axis: Option<Axis>,
    pub y_axis: Option<Axis>,
    pub radius_domain: Option<(f64, f64)>,
    /// Only countries with x, y and radius values defined in `year`
    pub points: Vec<ScatterPoint>,
}

impl ScatterFrame {
    /// Re-apply the highlight to existing points without recomputing them.
    pub fn restyle(&mut self, style: &HighlightStyle) {
        for point in &mut self.points {
            point.opacity = style.opacity_for(&point.region);
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Bar {
    pub region: String,
    /// Mean of the defined values in the region
    pub mean: f64,
    /// Number of countries that contributed to the mean
    pub count: usize,
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
    pub fill: String,
    pub opacity: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BarFrame {
    pub year: i32,
    pub indicator: Indicator,
    pub x_axis: BandAxis,
    pub y_axis: Option<Axis>,
    /// One bar per region with at least one defined value, in region order
    pub bars: Vec<Bar>,
}

impl BarFrame {
    pub fn restyle(&mut self, style: &HighlightStyle) {
        for bar in &mut self.bars {
            bar.opacity = style.opacity_for(&bar.region);
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LinePoint {
    pub year: i32,
    pub value: f64,
    pub x: f64,
    pub y: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LineFrame {
    pub geo: String,
    pub country: String,
    pub indicator: Indicator,
    pub x_axis: Option<Axis>,
    pub y_axis: Option<Axis>,
    /// Defined years only, ascending
    pub points: Vec<LinePoint>,
    /// Runs of consecutive years; a missing year starts a new segment
    pub segments: Vec<Vec<[f64; 2]>>,
    pub stroke: String,
    pub stroke_width: f64,
}

fn color_scale(data: &JoinedDataset, layout: &ChartLayout) -> ColorScale {
    ColorScale::new(data.regions().to_vec(), layout.palette.clone())
}

/// Scatter plot of `x` against `y`, sized by `radius`, for the selected year.
pub fn project_scatter(
    data: &JoinedDataset,
    state: &ViewState,
    layout: &ChartLayout,
) -> ScatterFrame {
    let entities = data.entities();
    let year = state.year;
    let x_scale = LinearScale::for_indicator(entities, state.x, year, layout.plot_x_range());
    let y_scale = LinearScale::for_indicator(entities, state.y, year, layout.plot_y_range());
    let r_scale = RadiusScale::for_indicator(entities, state.radius, year, layout.radius_range());
    let colors = color_scale(data, layout);
    let style = HighlightStyle::new(state, layout);

    let points = match (&x_scale, &y_scale, &r_scale) {
        (Some(xs), Some(ys), Some(rs)) => entities
            .iter()
            .filter_map(|entity| {
                let x_value = entity.value(state.x, year)?;
                let y_value = entity.value(state.y, year)?;
                let r_value = entity.value(state.radius, year)?;
                Some(ScatterPoint {
                    geo: entity.geo.clone(),
                    country: entity.country.clone(),
                    region: entity.region.clone(),
                    x_value,
                    y_value,
                    r_value,
                    cx: xs.apply(x_value),
                    cy: ys.apply(y_value),
                    r: rs.apply(r_value),
                    fill: colors.color(&entity.region).to_string(),
                    opacity: style.opacity_for(&entity.region),
                })
            })
            .collect(),
        _ => Vec::new(),
    };

    ScatterFrame {
        year,
        x: state.x,
        y: state.y,
        radius: state.radius,
        x_axis: x_scale.as_ref().map(|s| Axis::from_scale(state.x.label(), s)),
        y_axis: y_scale.as_ref().map(|s| Axis::from_scale(state.y.label(), s)),
        radius_domain: r_scale.map(|s| s.domain()),
        points,
    }
}

/// Mean of the defined `indicator` values per region, in region order.
/// Regions without any defined value are left out.
pub fn region_means(
    entities: &[CountryEntity],
    regions: &[String],
    indicator: Indicator,
    year: i32,
) -> Vec<(String, f64, usize)> {
    regions
        .iter()
        .filter_map(|region| {
            let (sum, count) = entities
                .iter()
                .filter(|entity| &entity.region == region)
                .filter_map(|entity| entity.value(indicator, year))
                .fold((0.0, 0usize), |(sum, count), v| (sum + v, count + 1));
            if count == 0 {
                None
            } else {
                Some((region.clone(), sum / count as f64, count))
            }
        })
        .collect()
}

/// Bar chart of the regional mean of the `bar` indicator for the selected year.
pub fn project_bar(data: &JoinedDataset, state: &ViewState, layout: &ChartLayout) -> BarFrame {
    let year = state.year;
    let means = region_means(data.entities(), data.regions(), state.bar, year);
    let band = BandScale::new(
        data.regions().to_vec(),
        layout.bar_x_range(),
        layout.band_padding,
    );
    let y_scale = means
        .iter()
        .map(|(_, mean, _)| *mean)
        .reduce(f64::max)
        .map(|max| LinearScale::new((0.0, max), layout.plot_y_range()));
    let colors = color_scale(data, layout);
    let style = HighlightStyle::new(state, layout);
    let baseline = layout.plot_y_range().0;

    let bars = match &y_scale {
        Some(ys) => means
            .into_iter()
            .filter_map(|(region, mean, count)| {
                let x = band.position(&region)?;
                let y = ys.apply(mean);
                Some(Bar {
                    fill: colors.color(&region).to_string(),
                    opacity: style.opacity_for(&region),
                    region,
                    mean,
                    count,
                    x,
                    y,
                    width: band.bandwidth(),
                    height: baseline - y,
                })
            })
            .collect(),
        None => Vec::new(),
    };

    BarFrame {
        year,
        indicator: state.bar,
        x_axis: BandAxis {
            bandwidth: band.bandwidth(),
            domain: band.domain,
            range: band.range,
        },
        y_axis: y_scale.as_ref().map(|s| Axis::from_scale(state.bar.label(), s)),
        bars,
    }
}

/// Year series of the `line` indicator for the selected country.
///
/// Returns `None` when no country is selected or the selection is unknown.
pub fn project_line(
    data: &JoinedDataset,
    state: &ViewState,
    layout: &ChartLayout,
) -> Option<LineFrame> {
    let entity = data.find(state.selected_country.as_deref()?)?;
    let span = data.year_span();

    let series: Vec<(i32, f64)> = match span {
        Some((first, last)) => (first..=last)
            .filter_map(|year| entity.value(state.line, year).map(|v| (year, v)))
            .collect(),
        None => Vec::new(),
    };

    let x_scale = span.map(|(first, last)| {
        LinearScale::new((first as f64, last as f64), layout.plot_x_range())
    });
    let y_scale = extent(series.iter().map(|(_, v)| *v)).map(|(lo, hi)| {
        LinearScale::new(
            (lo * (1.0 - layout.line_padding), hi * (1.0 + layout.line_padding)),
            layout.plot_y_range(),
        )
    });

    let points: Vec<LinePoint> = match (&x_scale, &y_scale) {
        (Some(xs), Some(ys)) => series
            .iter()
            .map(|&(year, value)| LinePoint {
                year,
                value,
                x: xs.apply(year as f64),
                y: ys.apply(value),
            })
            .collect(),
        _ => Vec::new(),
    };

    let mut segments: Vec<Vec<[f64; 2]>> = Vec::new();
    for (idx, point) in points.iter().enumerate() {
        if idx == 0 || points[idx - 1].year + 1 != point.year {
            segments.push(Vec::new());
        }
        if let Some(segment) = segments.last_mut() {
            segment.push([point.x, point.y]);
        }
    }

    Some(LineFrame {
        geo: entity.geo.clone(),
        country: entity.country.clone(),
        indicator: state.line,
        x_axis: x_scale.as_ref().map(|s| Axis::from_scale("Year", s)),
        y_axis: y_scale.as_ref().map(|s| Axis::from_scale(state.line.label(), s)),
        points,
        segments,
        stroke: layout.line_color.clone(),
        stroke_width: layout.line_width,
    })
}
