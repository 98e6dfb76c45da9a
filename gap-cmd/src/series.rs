//! `series`: one country's values for one indicator, as CSV.

use crate::source::SourceArgs;
use crate::write_output;
use anyhow::Context;
use gap_data::CountryEntity;
use gap_indicators::Indicator;
use std::path::Path;

/// Render `year,value` rows for every defined year, oldest first.
pub fn series_csv(entity: &CountryEntity, indicator: Indicator) -> anyhow::Result<String> {
    let mut writer = csv::Writer::from_writer(Vec::new());
    writer.write_record(["year", indicator.name()])?;
    if let Some(values) = entity.series(indicator) {
        for (year, value) in values {
            writer.write_record([year.to_string(), value.to_string()])?;
        }
    }
    let bytes = writer.into_inner().context("Failed to flush CSV")?;
    Ok(String::from_utf8(bytes)?)
}

pub async fn run_series(
    source: &SourceArgs,
    geo: &str,
    indicator: Indicator,
    output: Option<&Path>,
) -> anyhow::Result<()> {
    let data = source.load_dataset().await?;
    let entity = data
        .find(geo)
        .with_context(|| format!("No country with geo '{}'", geo))?;
    if entity.series(indicator).map_or(true, |values| values.is_empty()) {
        log::warn!("{} has no {} values", entity.country, indicator);
    }
    write_output(output, &series_csv(entity, indicator)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use gap_data::join;
    use gap_indicators::IndicatorTables;

    fn dataset() -> gap_data::JoinedDataset {
        let tables = IndicatorTables::parse_csv(gap_indicators::fixtures::ALL).unwrap();
        join(&tables)
    }

    #[test]
    fn test_series_skips_missing_years() {
        let data = dataset();
        let angola = data.find("ago").unwrap();
        let csv = series_csv(angola, Indicator::Gdp).unwrap();
        let lines: Vec<&str> = csv.lines().collect();
        assert_eq!(lines[0], "year,gdp");
        assert_eq!(lines.len(), 1 + 14);
        assert!(!lines.iter().any(|line| line.starts_with("1998,") || line.starts_with("1999,")));
    }

    #[test]
    fn test_series_for_unmatched_indicator_is_header_only() {
        let data = dataset();
        let afghanistan = data.find("afg").unwrap();
        assert_eq!(series_csv(afghanistan, Indicator::Gdp).unwrap(), "year,gdp\n");
    }

    #[tokio::test]
    async fn test_unknown_geo_is_an_error() {
        let err = run_series(&SourceArgs::default(), "xyz", Indicator::Gdp, None)
            .await
            .unwrap_err();
        assert!(err.to_string().contains("xyz"));
    }
}
