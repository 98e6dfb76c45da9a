//! All-or-nothing loading of the five indicator tables.

use crate::compression::maybe_inflate;
use crate::error::LoadError;
use crate::indicator::Indicator;
use crate::source::{IndicatorSource, SourceLocations};
use crate::table::IndicatorTable;

/// One table per indicator.
#[derive(Debug, Clone, PartialEq)]
pub struct IndicatorTables {
    tables: [IndicatorTable; 5],
}

impl IndicatorTables {
    /// Assemble from parsed tables. An indicator without a table gets an
    /// empty one, so every lookup succeeds; a later table for the same
    /// indicator replaces an earlier one.
    pub fn from_tables(tables: impl IntoIterator<Item = IndicatorTable>) -> Self {
        let mut slots: [Option<IndicatorTable>; 5] = Default::default();
        for table in tables {
            let idx = table.indicator().index();
            slots[idx] = Some(table);
        }
        Self {
            tables: Indicator::ALL.map(|indicator| {
                slots[indicator.index()]
                    .take()
                    .unwrap_or_else(|| IndicatorTable::empty(indicator))
            }),
        }
    }

    /// Parse CSV payloads synchronously, e.g. tables embedded with `include_str!`.
    pub fn parse_csv<'a>(
        payloads: impl IntoIterator<Item = (Indicator, &'a str)>,
    ) -> Result<Self, LoadError> {
        let tables = payloads
            .into_iter()
            .map(|(indicator, csv)| IndicatorTable::parse(indicator, csv.as_bytes()))
            .collect::<Result<Vec<_>, _>>()?;
        Ok(Self::from_tables(tables))
    }

    pub fn get(&self, indicator: Indicator) -> &IndicatorTable {
        &self.tables[indicator.index()]
    }

    pub fn iter(&self) -> impl Iterator<Item = &IndicatorTable> {
        self.tables.iter()
    }

    /// Earliest and latest year column across every table.
    pub fn year_span(&self) -> Option<(i32, i32)> {
        self.tables
            .iter()
            .filter_map(IndicatorTable::year_span)
            .reduce(|(lo, hi), (a, b)| (lo.min(a), hi.max(b)))
    }
}

/// Fetch and parse every indicator table from `source`.
///
/// Tables are fetched in [`Indicator::ALL`] order. The first failure aborts
/// the load; no partially loaded set is ever returned.
pub async fn load<S: IndicatorSource>(
    source: &S,
    locations: &SourceLocations,
) -> Result<IndicatorTables, LoadError> {
    let mut tables = Vec::with_capacity(Indicator::ALL.len());
    for indicator in Indicator::ALL {
        let location = locations
            .get(indicator)
            .ok_or(LoadError::MissingLocation(indicator))?;
        log::info!("Fetching {} from {}", indicator, location);

        let bytes = source
            .fetch(location)
            .await
            .map_err(|reason| LoadError::Fetch {
                indicator,
                location: location.to_string(),
                reason,
            })?;
        let bytes = maybe_inflate(bytes).map_err(|e| LoadError::Decompression {
            indicator,
            reason: e.to_string(),
        })?;
        tables.push(IndicatorTable::parse(indicator, &bytes)?);
    }
    Ok(IndicatorTables::from_tables(tables))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::source::EmbeddedSource;
    use flate2::write::GzEncoder;
    use flate2::Compression;
    use std::io::Write;

    const TABLE: &[u8] = b"country,geo,region,2000\nSweden,swe,europe,1\n";

    fn source_with_all_tables() -> EmbeddedSource {
        Indicator::ALL.iter().fold(EmbeddedSource::new(), |source, indicator| {
            source.with_file(indicator.default_file_name(), TABLE)
        })
    }

    #[tokio::test]
    async fn test_load_all_tables() {
        let tables = load(&source_with_all_tables(), &SourceLocations::default())
            .await
            .unwrap();
        for indicator in Indicator::ALL {
            assert_eq!(tables.get(indicator).indicator(), indicator);
            assert_eq!(tables.get(indicator).len(), 1);
        }
    }

    #[tokio::test]
    async fn test_load_fails_when_one_source_is_missing() {
        let source = source_with_all_tables();
        let locations = SourceLocations::default().with(Indicator::FertilityRate, "missing.csv");
        let err = load(&source, &locations).await.unwrap_err();
        match err {
            LoadError::Fetch {
                indicator,
                location,
                ..
            } => {
                assert_eq!(indicator, Indicator::FertilityRate);
                assert_eq!(location, "missing.csv");
            }
            other => panic!("unexpected error: {}", other),
        }
    }

    #[tokio::test]
    async fn test_load_fails_on_non_tabular_payload() {
        let source = source_with_all_tables().with_file("gdp.csv", b"<html>not found</html>");
        let err = load(&source, &SourceLocations::default()).await.unwrap_err();
        assert!(matches!(
            err,
            LoadError::MissingColumn {
                indicator: Indicator::Gdp,
                ..
            }
        ));
    }

    #[tokio::test]
    async fn test_load_fails_without_location() {
        let err = load(&source_with_all_tables(), &SourceLocations::empty())
            .await
            .unwrap_err();
        assert!(matches!(err, LoadError::MissingLocation(Indicator::Population)));
    }

    #[tokio::test]
    async fn test_load_inflates_gzip_payloads() {
        let mut encoder = GzEncoder::new(Vec::new(), Compression::default());
        encoder.write_all(TABLE).unwrap();
        let compressed: &'static [u8] = Box::leak(encoder.finish().unwrap().into_boxed_slice());

        let source = source_with_all_tables().with_file("gdp.csv.gz", compressed);
        let locations = SourceLocations::default().with(Indicator::Gdp, "gdp.csv.gz");
        let tables = load(&source, &locations).await.unwrap();
        assert_eq!(tables.get(Indicator::Gdp).get("swe").unwrap().values.get(&2000), Some(&1.0));
    }

    #[tokio::test]
    async fn test_load_bundled_fixtures() {
        let tables = load(&EmbeddedSource::bundled(), &SourceLocations::default())
            .await
            .unwrap();
        assert!(!tables.get(Indicator::Population).is_empty());
        assert_eq!(tables.year_span(), Some((1995, 2010)));
    }

    #[test]
    fn test_from_tables_places_by_indicator() {
        let gdp = IndicatorTable::parse(Indicator::Gdp, TABLE).unwrap();
        let first = IndicatorTable::parse(Indicator::Population, TABLE).unwrap();
        let second = IndicatorTable::parse(
            Indicator::Population,
            b"country,geo,region,2000\nKenya,ken,africa,31\nChile,chl,americas,15\n",
        )
        .unwrap();

        let tables = IndicatorTables::from_tables([gdp, first, second]);
        assert_eq!(tables.get(Indicator::Gdp).len(), 1);
        assert_eq!(tables.get(Indicator::Population).len(), 2);
        assert!(tables.get(Indicator::Population).get("ken").is_some());
        assert!(tables.get(Indicator::LifeExpectancy).is_empty());
        let order: Vec<Indicator> = tables.iter().map(|t| t.indicator()).collect();
        assert_eq!(order, Indicator::ALL.to_vec());
    }

    #[test]
    fn test_missing_tables_are_empty() {
        let tables = IndicatorTables::parse_csv([(
            Indicator::Population,
            "country,geo,region,1990\nSweden,swe,europe,1\n",
        )])
        .unwrap();
        assert!(tables.get(Indicator::Gdp).is_empty());
        assert_eq!(tables.year_span(), Some((1990, 1990)));
    }
}
