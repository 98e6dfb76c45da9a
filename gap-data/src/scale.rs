//! Scales derived from the joined entities.
//!
//! Scales are cheap to build and are rebuilt from the current entities and
//! view state on every recompute; nothing here caches a domain.

use crate::entity::CountryEntity;
use gap_indicators::Indicator;
use serde::Serialize;
use std::collections::HashSet;

/// Color used for a region that is not part of the color domain.
pub const UNKNOWN_COLOR: &str = "#9E9E9E";

/// The defined values of `indicator` in `year`, skipping entities without one.
pub fn indicator_values<'a>(
    entities: &'a [CountryEntity],
    indicator: Indicator,
    year: i32,
) -> impl Iterator<Item = f64> + 'a {
    entities
        .iter()
        .filter_map(move |entity| entity.value(indicator, year))
}

/// `[min, max]` of the finite values, or `None` if there are none.
pub fn extent(values: impl IntoIterator<Item = f64>) -> Option<(f64, f64)> {
    values
        .into_iter()
        .filter(|v| v.is_finite())
        .fold(None, |acc, v| match acc {
            None => Some((v, v)),
            Some((lo, hi)) => Some((lo.min(v), hi.max(v))),
        })
}

/// Distinct regions in first-seen order.
pub fn region_order(entities: &[CountryEntity]) -> Vec<String> {
    let mut seen = HashSet::new();
    entities
        .iter()
        .filter(|entity| seen.insert(entity.region.as_str()))
        .map(|entity| entity.region.clone())
        .collect()
}

/// Linear mapping from a numeric domain onto a pixel range.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct LinearScale {
    pub domain: (f64, f64),
    pub range: (f64, f64),
}

impl LinearScale {
    pub fn new(domain: (f64, f64), range: (f64, f64)) -> Self {
        Self { domain, range }
    }

    /// A scale over the extent of `values`; `None` when no value is defined.
    pub fn from_values(values: impl IntoIterator<Item = f64>, range: (f64, f64)) -> Option<Self> {
        extent(values).map(|domain| Self::new(domain, range))
    }

    /// Scale over `indicator` in `year` across all entities.
    pub fn for_indicator(
        entities: &[CountryEntity],
        indicator: Indicator,
        year: i32,
        range: (f64, f64),
    ) -> Option<Self> {
        Self::from_values(indicator_values(entities, indicator, year), range)
    }

    /// Map `value` onto the range. A zero-width domain maps to the range midpoint.
    pub fn apply(&self, value: f64) -> f64 {
        let (d0, d1) = self.domain;
        let (r0, r1) = self.range;
        let span = d1 - d0;
        let t = if span == 0.0 { 0.5 } else { (value - d0) / span };
        r0 + t * (r1 - r0)
    }
}

/// Square-root radius scale anchored at zero.
///
/// `radius = max_radius * sqrt(value / max_value)`, so the area of a circle
/// is proportional to its value. Radii below `min_radius` are raised to it
/// to keep small marks clickable.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct RadiusScale {
    pub max_value: f64,
    pub min_radius: f64,
    pub max_radius: f64,
}

impl RadiusScale {
    pub fn new(max_value: f64, (min_radius, max_radius): (f64, f64)) -> Self {
        Self {
            max_value,
            min_radius,
            max_radius,
        }
    }

    /// Scale over `indicator` in `year` across all entities.
    pub fn for_indicator(
        entities: &[CountryEntity],
        indicator: Indicator,
        year: i32,
        radii: (f64, f64),
    ) -> Option<Self> {
        extent(indicator_values(entities, indicator, year)).map(|(_, max)| Self::new(max, radii))
    }

    pub fn domain(&self) -> (f64, f64) {
        (0.0, self.max_value)
    }

    pub fn apply(&self, value: f64) -> f64 {
        if self.max_value <= 0.0 {
            return self.min_radius;
        }
        let t = (value.max(0.0) / self.max_value).sqrt();
        (self.max_radius * t).max(self.min_radius)
    }
}

/// Categorical band layout, as used for the region axis of the bar chart.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BandScale {
    pub domain: Vec<String>,
    pub range: (f64, f64),
    step: f64,
    start: f64,
    bandwidth: f64,
}

impl BandScale {
    /// Bands over `domain` with equal inner and outer `padding` (fraction of a step).
    pub fn new(domain: Vec<String>, range: (f64, f64), padding: f64) -> Self {
        let n = domain.len() as f64;
        let (r0, r1) = range;
        let step = (r1 - r0) / (n - padding + 2.0 * padding).max(1.0);
        let start = r0 + (r1 - r0 - step * (n - padding)) * 0.5;
        Self {
            domain,
            range,
            step,
            start,
            bandwidth: step * (1.0 - padding),
        }
    }

    /// Left edge of the band for `key`.
    pub fn position(&self, key: &str) -> Option<f64> {
        self.domain
            .iter()
            .position(|d| d == key)
            .map(|idx| self.start + self.step * idx as f64)
    }

    pub fn bandwidth(&self) -> f64 {
        self.bandwidth
    }
}

/// Ordinal color scale cycling through a palette.
#[derive(Debug, Clone, PartialEq)]
pub struct ColorScale {
    domain: Vec<String>,
    palette: Vec<String>,
}

impl ColorScale {
    pub fn new(domain: Vec<String>, palette: Vec<String>) -> Self {
        Self { domain, palette }
    }

    pub fn color(&self, key: &str) -> &str {
        if self.palette.is_empty() {
            return UNKNOWN_COLOR;
        }
        self.domain
            .iter()
            .position(|d| d == key)
            .map(|idx| self.palette[idx % self.palette.len()].as_str())
            .unwrap_or(UNKNOWN_COLOR)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use gap_indicators::YearValues;
    use std::collections::BTreeMap;

    fn entity(geo: &str, region: &str, gdp_2000: Option<f64>) -> CountryEntity {
        let mut indicators = BTreeMap::new();
        let mut gdp = YearValues::new();
        if let Some(v) = gdp_2000 {
            gdp.insert(2000, v);
        }
        indicators.insert(Indicator::Gdp, gdp);
        CountryEntity {
            country: geo.to_uppercase(),
            geo: geo.to_string(),
            region: region.to_string(),
            indicators,
        }
    }

    #[test]
    fn test_extent_skips_non_finite() {
        assert_eq!(extent(vec![3.0, f64::NAN, -1.0, 7.5]), Some((-1.0, 7.5)));
        assert_eq!(extent(Vec::<f64>::new()), None);
    }

    #[test]
    fn test_linear_domain_excludes_missing_values() {
        let entities = vec![
            entity("a", "x", Some(100.0)),
            entity("b", "x", None),
            entity("c", "y", Some(300.0)),
        ];
        let scale = LinearScale::for_indicator(&entities, Indicator::Gdp, 2000, (0.0, 10.0)).unwrap();
        // A missing value must not pull the minimum down to zero.
        assert_eq!(scale.domain, (100.0, 300.0));
        assert_eq!(scale.apply(200.0), 5.0);
    }

    #[test]
    fn test_linear_scale_without_values() {
        let entities = vec![entity("a", "x", None)];
        assert!(LinearScale::for_indicator(&entities, Indicator::Gdp, 2000, (0.0, 1.0)).is_none());
    }

    #[test]
    fn test_linear_inverted_range() {
        let scale = LinearScale::new((0.0, 10.0), (470.0, 30.0));
        assert_eq!(scale.apply(0.0), 470.0);
        assert_eq!(scale.apply(10.0), 30.0);
    }

    #[test]
    fn test_linear_degenerate_domain_maps_to_midpoint() {
        let scale = LinearScale::new((5.0, 5.0), (0.0, 100.0));
        assert_eq!(scale.apply(5.0), 50.0);
    }

    #[test]
    fn test_radius_doubling_value_scales_by_sqrt_two() {
        let scale = RadiusScale::new(1000.0, (1.0, 30.0));
        let r1 = scale.apply(200.0);
        let r2 = scale.apply(400.0);
        assert!((r2 / r1 - std::f64::consts::SQRT_2).abs() < 1e-12);
        assert_eq!(scale.apply(1000.0), 30.0);
    }

    #[test]
    fn test_radius_floor() {
        let scale = RadiusScale::new(1000.0, (10.0, 30.0));
        assert_eq!(scale.apply(0.0), 10.0);
        assert_eq!(scale.apply(-5.0), 10.0);
        assert_eq!(RadiusScale::new(0.0, (10.0, 30.0)).apply(0.0), 10.0);
    }

    #[test]
    fn test_radius_domain_anchored_at_zero() {
        let entities = vec![entity("a", "x", Some(100.0)), entity("b", "x", Some(400.0))];
        let scale = RadiusScale::for_indicator(&entities, Indicator::Gdp, 2000, (10.0, 30.0)).unwrap();
        assert_eq!(scale.domain(), (0.0, 400.0));
    }

    #[test]
    fn test_region_order_is_first_seen() {
        let entities = vec![
            entity("a", "europe", None),
            entity("b", "asia", None),
            entity("c", "europe", None),
            entity("d", "africa", None),
        ];
        assert_eq!(region_order(&entities), vec!["europe", "asia", "africa"]);
    }

    #[test]
    fn test_band_layout() {
        let domain = vec!["a".to_string(), "b".to_string()];
        let band = BandScale::new(domain, (0.0, 210.0), 0.1);
        // step = 210 / (2 - 0.1 + 0.2) = 100
        assert!((band.bandwidth() - 90.0).abs() < 1e-9);
        assert!((band.position("a").unwrap() - 10.0).abs() < 1e-9);
        assert!((band.position("b").unwrap() - 110.0).abs() < 1e-9);
        assert_eq!(band.position("c"), None);
    }

    #[test]
    fn test_band_empty_domain() {
        let band = BandScale::new(Vec::new(), (0.0, 100.0), 0.1);
        assert_eq!(band.position("a"), None);
    }

    #[test]
    fn test_color_cycles_palette() {
        let domain: Vec<String> = ["a", "b", "c"].iter().map(|s| s.to_string()).collect();
        let palette = vec!["#111111".to_string(), "#222222".to_string()];
        let colors = ColorScale::new(domain, palette);
        assert_eq!(colors.color("a"), "#111111");
        assert_eq!(colors.color("b"), "#222222");
        assert_eq!(colors.color("c"), "#111111");
        assert_eq!(colors.color("z"), UNKNOWN_COLOR);
    }
}
