//! Parsing of a single indicator table.
//!
//! # CSV Format
//!
//! Header row `country,geo,region,<year>,<year>,...`, one row per country:
//!
//! ```text
//! country,geo,region,1999,2000
//! Sweden,swe,europe,8.86,8.87
//! ```
//!
//! Columns are located by header name, so their order does not matter.
//! Headers that parse as an integer are year columns; anything else is
//! ignored. Cells that are empty or not numeric are treated as absent.

use crate::error::LoadError;
use crate::indicator::Indicator;
use csv::{ReaderBuilder, StringRecord, Trim};
use serde::Serialize;
use std::collections::{BTreeMap, HashMap};

/// Values of one indicator for one country, keyed by year.
pub type YearValues = BTreeMap<i32, f64>;

/// One row of an indicator table.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct IndicatorRow {
    pub country: String,
    pub geo: String,
    pub region: String,
    pub values: YearValues,
}

/// A parsed indicator table: rows in file order plus a `geo` index.
#[derive(Debug, Clone, PartialEq)]
pub struct IndicatorTable {
    indicator: Indicator,
    rows: Vec<IndicatorRow>,
    /// First row index for each non-empty `geo`.
    index: HashMap<String, usize>,
    duplicate_geos: Vec<String>,
    coercion_failures: usize,
    year_span: Option<(i32, i32)>,
}

impl IndicatorTable {
    /// Parse a CSV payload into a table for `indicator`.
    pub fn parse(indicator: Indicator, bytes: &[u8]) -> Result<Self, LoadError> {
        let mut rdr = ReaderBuilder::new()
            .has_headers(true)
            .flexible(true)
            .trim(Trim::All)
            .from_reader(bytes);

        let headers = rdr
            .headers()
            .map_err(|source| LoadError::Csv { indicator, source })?
            .clone();
        let country_idx = column(&headers, indicator, "country")?;
        let geo_idx = column(&headers, indicator, "geo")?;
        let region_idx = column(&headers, indicator, "region")?;

        let year_columns: Vec<(usize, i32)> = headers
            .iter()
            .enumerate()
            .filter_map(|(idx, h)| h.parse::<i32>().ok().map(|year| (idx, year)))
            .collect();
        let year_span = year_columns
            .iter()
            .map(|(_, year)| *year)
            .fold(None, |span: Option<(i32, i32)>, year| match span {
                None => Some((year, year)),
                Some((lo, hi)) => Some((lo.min(year), hi.max(year))),
            });

        let mut table = IndicatorTable {
            year_span,
            ..IndicatorTable::empty(indicator)
        };

        for result in rdr.records() {
            let record = result.map_err(|source| LoadError::Csv { indicator, source })?;
            let mut values = YearValues::new();
            for &(idx, year) in &year_columns {
                let cell = record.get(idx).unwrap_or("");
                if cell.is_empty() {
                    continue;
                }
                match cell.parse::<f64>() {
                    Ok(v) if v.is_finite() => {
                        values.insert(year, v);
                    }
                    _ => table.coercion_failures += 1,
                }
            }

            let row = IndicatorRow {
                country: record.get(country_idx).unwrap_or("").to_string(),
                geo: record.get(geo_idx).unwrap_or("").to_string(),
                region: record.get(region_idx).unwrap_or("").to_string(),
                values,
            };

            if !row.geo.is_empty() {
                if table.index.contains_key(&row.geo) {
                    log::warn!(
                        "{}: duplicate geo '{}' ({}), keeping the first row",
                        indicator,
                        row.geo,
                        row.country
                    );
                    table.duplicate_geos.push(row.geo.clone());
                } else {
                    table.index.insert(row.geo.clone(), table.rows.len());
                }
            }
            table.rows.push(row);
        }

        if table.coercion_failures > 0 {
            log::debug!(
                "{}: {} non-numeric cells treated as missing",
                indicator,
                table.coercion_failures
            );
        }
        log::info!("Parsed {} rows for {}", table.rows.len(), indicator);
        Ok(table)
    }

    /// A table with no rows and no year columns.
    pub fn empty(indicator: Indicator) -> Self {
        IndicatorTable {
            indicator,
            rows: Vec::new(),
            index: HashMap::new(),
            duplicate_geos: Vec::new(),
            coercion_failures: 0,
            year_span: None,
        }
    }

    pub fn indicator(&self) -> Indicator {
        self.indicator
    }

    /// All rows in file order, duplicates and blank `geo` rows included.
    pub fn rows(&self) -> &[IndicatorRow] {
        &self.rows
    }

    /// The first row whose `geo` matches exactly.
    pub fn get(&self, geo: &str) -> Option<&IndicatorRow> {
        self.index.get(geo).map(|&idx| &self.rows[idx])
    }

    /// Returns true if `row_idx` is the first occurrence of its `geo`.
    pub fn is_first_occurrence(&self, row_idx: usize) -> bool {
        self.rows
            .get(row_idx)
            .and_then(|row| self.index.get(&row.geo))
            .is_some_and(|&first| first == row_idx)
    }

    /// `geo` values that appeared more than once, one entry per extra row.
    pub fn duplicate_geos(&self) -> &[String] {
        &self.duplicate_geos
    }

    /// Number of non-empty cells that were not a finite number.
    pub fn coercion_failures(&self) -> usize {
        self.coercion_failures
    }

    /// Earliest and latest year column, if the table has any.
    pub fn year_span(&self) -> Option<(i32, i32)> {
        self.year_span
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}

fn column(
    headers: &StringRecord,
    indicator: Indicator,
    name: &'static str,
) -> Result<usize, LoadError> {
    headers
        .iter()
        .position(|h| h.eq_ignore_ascii_case(name))
        .ok_or(LoadError::MissingColumn {
            indicator,
            column: name,
        })
}
