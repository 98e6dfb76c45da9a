//! Command implementations for the gap CLI.
//!
//! Provides subcommands that load the five indicator tables, join them and
//! print what the dashboard would draw.

use clap::Subcommand;
use gap_indicators::Indicator;
use std::path::PathBuf;

pub mod frame;
pub mod series;
pub mod source;
pub mod summary;

pub use frame::ViewArgs;
pub use source::SourceArgs;

#[derive(Subcommand)]
pub enum Command {
    /// Load and join the tables, then print counts, regions and warnings
    Summary {
        #[command(flatten)]
        source: SourceArgs,
    },

    /// Print the full dashboard frame for a view state as JSON
    Frame {
        #[command(flatten)]
        source: SourceArgs,

        #[command(flatten)]
        view: ViewArgs,

        /// JSON file overriding chart sizes, radius range, palette, etc.
        #[arg(long)]
        layout: Option<PathBuf>,

        /// Write to this file instead of stdout
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Print one country's year/value series as CSV
    Series {
        #[command(flatten)]
        source: SourceArgs,

        /// Country geo code, e.g. "swe"
        #[arg(long)]
        geo: String,

        /// Indicator name, e.g. "gdp" or "life-expectancy"
        #[arg(short, long)]
        indicator: Indicator,

        /// Write to this file instead of stdout
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
}

pub async fn run(command: Command) -> anyhow::Result<()> {
    match command {
        Command::Summary { source } => summary::run_summary(&source).await,
        Command::Frame {
            source,
            view,
            layout,
            output,
        } => frame::run_frame(&source, &view, layout.as_deref(), output.as_deref()).await,
        Command::Series {
            source,
            geo,
            indicator,
            output,
        } => series::run_series(&source, &geo, indicator, output.as_deref()).await,
    }
}

/// Write `contents` to `output`, or to stdout when no path is given.
pub(crate) fn write_output(output: Option<&std::path::Path>, contents: &str) -> anyhow::Result<()> {
    use anyhow::Context;

    match output {
        Some(path) => {
            std::fs::write(path, contents)
                .with_context(|| format!("Failed to write {}", path.display()))?;
            log::info!("Wrote {}", path.display());
        }
        None => print!("{}", contents),
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;

    #[derive(Parser)]
    struct TestCli {
        #[command(subcommand)]
        command: Command,
    }

    #[test]
    fn test_parse_series_command() {
        let cli = TestCli::try_parse_from([
            "gap-cli",
            "series",
            "--geo",
            "swe",
            "--indicator",
            "life-expectancy",
            "--data-dir",
            "data",
        ])
        .unwrap();
        match cli.command {
            Command::Series {
                source,
                geo,
                indicator,
                output,
            } => {
                assert_eq!(geo, "swe");
                assert_eq!(indicator, Indicator::LifeExpectancy);
                assert_eq!(source.data_dir, Some(PathBuf::from("data")));
                assert!(output.is_none());
            }
            _ => panic!("expected series"),
        }
    }

    #[test]
    fn test_unknown_indicator_is_rejected() {
        assert!(TestCli::try_parse_from(["gap-cli", "series", "--geo", "swe", "-i", "gnp"]).is_err());
    }

    #[test]
    fn test_data_dir_and_base_url_conflict() {
        assert!(TestCli::try_parse_from([
            "gap-cli",
            "summary",
            "--data-dir",
            "data",
            "--base-url",
            "http://localhost:8080",
        ])
        .is_err());
    }

    #[test]
    fn test_parse_frame_view_options() {
        let cli = TestCli::try_parse_from([
            "gap-cli", "frame", "--year", "2005", "--x", "gdp", "--country", "ken",
        ])
        .unwrap();
        match cli.command {
            Command::Frame { view, .. } => {
                let state = view.to_view_state();
                assert_eq!(state.year, 2005);
                assert_eq!(state.x, Indicator::Gdp);
                assert_eq!(state.selected_country.as_deref(), Some("ken"));
            }
            _ => panic!("expected frame"),
        }
    }
}
