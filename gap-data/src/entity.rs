use gap_indicators::{Indicator, YearValues};
use serde::Serialize;
use std::collections::BTreeMap;

/// A country with every indicator series joined onto it.
///
/// `geo` is the identity key; `country` is only a display name and is not
/// guaranteed to be unique.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CountryEntity {
    pub country: String,
    pub geo: String,
    pub region: String,
    /// One entry per indicator; a country missing from a table has an empty series.
    pub indicators: BTreeMap<Indicator, YearValues>,
}

impl CountryEntity {
    /// The value of `indicator` in `year`, if the source table had one.
    pub fn value(&self, indicator: Indicator, year: i32) -> Option<f64> {
        self.indicators
            .get(&indicator)
            .and_then(|series| series.get(&year))
            .copied()
    }

    /// The full per-year series of `indicator`.
    pub fn series(&self, indicator: Indicator) -> Option<&YearValues> {
        self.indicators.get(&indicator)
    }
}
