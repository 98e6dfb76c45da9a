//! `summary`: what was loaded and what looked wrong.

use crate::source::SourceArgs;
use gap_data::JoinedDataset;
use std::fmt::Write;

pub fn summarize(data: &JoinedDataset) -> String {
    let mut out = String::new();
    let report = data.report();

    let _ = writeln!(out, "Countries: {}", data.len());
    let _ = writeln!(out, "Regions: {}", data.regions().join(", "));
    match data.year_span() {
        Some((first, last)) => {
            let _ = writeln!(out, "Years: {}-{}", first, last);
        }
        None => {
            let _ = writeln!(out, "Years: none");
        }
    }

    if report.is_clean() {
        let _ = writeln!(out, "No join warnings");
        return out;
    }
    for (indicator, geo) in &report.duplicate_geos {
        let _ = writeln!(out, "warning: duplicate geo '{}' in {} (first row kept)", geo, indicator);
    }
    if report.blank_geo_rows > 0 {
        let _ = writeln!(out, "warning: {} population rows without geo skipped", report.blank_geo_rows);
    }
    for (indicator, count) in report.unmatched.iter().filter(|(_, &n)| n > 0) {
        let _ = writeln!(out, "warning: {} countries have no {} row", count, indicator);
    }
    for (indicator, count) in report.coercion_failures.iter().filter(|(_, &n)| n > 0) {
        let _ = writeln!(out, "warning: {} non-numeric {} cells treated as missing", count, indicator);
    }
    out
}

pub async fn run_summary(source: &SourceArgs) -> anyhow::Result<()> {
    let data = source.load_dataset().await?;
    print!("{}", summarize(&data));
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use gap_data::join;
    use gap_indicators::IndicatorTables;

    #[test]
    fn test_summary_of_bundled_tables() {
        let tables = IndicatorTables::parse_csv(gap_indicators::fixtures::ALL).unwrap();
        let summary = summarize(&join(&tables));

        assert!(summary.contains("Countries: 10"));
        assert!(summary.contains("Years: 1995-2010"));
        assert!(summary.contains("duplicate geo 'ken' in fertility-rate"));
        assert!(summary.contains("1 countries have no gdp row"));
        assert!(summary.contains("non-numeric child-mortality cells"));
    }
}
