//! Join of the indicator tables into one list of countries.
//!
//! The population table is authoritative: its rows, in file order, define
//! which countries exist and in which order. Every other table is looked up
//! by exact `geo` match; a country missing from a table keeps an empty
//! series for that indicator instead of being dropped.

use crate::entity::CountryEntity;
use crate::scale::region_order;
use gap_indicators::{Indicator, IndicatorTables, YearValues};
use serde::Serialize;
use std::collections::{BTreeMap, HashMap};

/// Load-time anomalies found while joining. None of them is fatal.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct JoinReport {
    /// Extra rows whose `geo` was already seen in the same table (first row wins)
    pub duplicate_geos: Vec<(Indicator, String)>,
    /// Population rows skipped because their `geo` was empty
    pub blank_geo_rows: usize,
    /// Countries with no row in a table, per indicator
    pub unmatched: BTreeMap<Indicator, usize>,
    /// Non-numeric cells treated as missing, per indicator
    pub coercion_failures: BTreeMap<Indicator, usize>,
}

impl JoinReport {
    pub fn is_clean(&self) -> bool {
        self.duplicate_geos.is_empty()
            && self.blank_geo_rows == 0
            && self.unmatched.values().all(|&n| n == 0)
            && self.coercion_failures.values().all(|&n| n == 0)
    }
}

/// The joined entities and everything derived once from them.
#[derive(Debug, Clone, PartialEq)]
pub struct JoinedDataset {
    entities: Vec<CountryEntity>,
    regions: Vec<String>,
    year_span: Option<(i32, i32)>,
    report: JoinReport,
    by_geo: HashMap<String, usize>,
}

impl JoinedDataset {
    /// Entities in population-table order.
    pub fn entities(&self) -> &[CountryEntity] {
        &self.entities
    }

    /// Distinct regions in first-seen order.
    pub fn regions(&self) -> &[String] {
        &self.regions
    }

    /// Earliest and latest year column across all tables.
    pub fn year_span(&self) -> Option<(i32, i32)> {
        self.year_span
    }

    pub fn report(&self) -> &JoinReport {
        &self.report
    }

    pub fn find(&self, geo: &str) -> Option<&CountryEntity> {
        self.by_geo.get(geo).map(|&idx| &self.entities[idx])
    }

    pub fn has_region(&self, region: &str) -> bool {
        self.regions.iter().any(|r| r == region)
    }

    pub fn len(&self) -> usize {
        self.entities.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entities.is_empty()
    }
}

/// Join the five tables into one entity per population row.
pub fn join(tables: &IndicatorTables) -> JoinedDataset {
    let population = tables.get(Indicator::Population);
    let mut report = JoinReport::default();

    for table in tables.iter() {
        report.duplicate_geos.extend(
            table
                .duplicate_geos()
                .iter()
                .map(|geo| (table.indicator(), geo.clone())),
        );
        report
            .coercion_failures
            .insert(table.indicator(), table.coercion_failures());
    }

    let mut entities = Vec::with_capacity(population.len());
    for (row_idx, row) in population.rows().iter().enumerate() {
        if row.geo.is_empty() {
            log::warn!("Skipping population row '{}' with no geo", row.country);
            report.blank_geo_rows += 1;
            continue;
        }
        if !population.is_first_occurrence(row_idx) {
            continue;
        }

        let mut indicators = BTreeMap::new();
        indicators.insert(Indicator::Population, row.values.clone());
        for indicator in Indicator::ALL
            .into_iter()
            .filter(|i| *i != Indicator::Population)
        {
            let values = match tables.get(indicator).get(&row.geo) {
                Some(matched) => matched.values.clone(),
                None => {
                    log::debug!("{} has no {} row", row.geo, indicator);
                    *report.unmatched.entry(indicator).or_insert(0) += 1;
                    YearValues::new()
                }
            };
            indicators.insert(indicator, values);
        }

        entities.push(CountryEntity {
            country: row.country.clone(),
            geo: row.geo.clone(),
            region: row.region.clone(),
            indicators,
        });
    }

    let by_geo = entities
        .iter()
        .enumerate()
        .map(|(idx, entity)| (entity.geo.clone(), idx))
        .collect();
    let regions = region_order(&entities);

    log::info!(
        "Joined {} countries across {} regions",
        entities.len(),
        regions.len()
    );

    JoinedDataset {
        entities,
        regions,
        year_span: tables.year_span(),
        report,
        by_geo,
    }
}
