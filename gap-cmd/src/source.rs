//! Where the CLI reads the indicator tables from.

use anyhow::Context;
use clap::Args;
use gap_data::{join, JoinedDataset};
use gap_indicators::source::{FsSource, HttpSource};
use gap_indicators::{load, EmbeddedSource, IndicatorTables, SourceLocations};
use std::path::PathBuf;

/// Data source flags shared by every subcommand.
///
/// With neither flag, the sample tables bundled into the binary are used.
#[derive(Args, Debug, Clone, Default)]
pub struct SourceArgs {
    /// Directory containing population.csv, gdp.csv, cmu5.csv, ...
    #[arg(short, long, conflicts_with = "base_url")]
    pub data_dir: Option<PathBuf>,

    /// Base URL serving the same files
    #[arg(short, long)]
    pub base_url: Option<String>,
}

impl SourceArgs {
    pub async fn load_tables(&self) -> anyhow::Result<IndicatorTables> {
        let locations = SourceLocations::default();
        let tables = if let Some(dir) = &self.data_dir {
            load(&FsSource::new(dir), &locations)
                .await
                .with_context(|| format!("Failed to load indicators from {}", dir.display()))?
        } else if let Some(url) = &self.base_url {
            load(&HttpSource::new(url.as_str()), &locations)
                .await
                .with_context(|| format!("Failed to load indicators from {}", url))?
        } else {
            log::info!("No data source given; using the bundled sample tables");
            load(&EmbeddedSource::bundled(), &locations)
                .await
                .context("Failed to load bundled indicators")?
        };
        Ok(tables)
    }

    /// Load and join.
    pub async fn load_dataset(&self) -> anyhow::Result<JoinedDataset> {
        let tables = self.load_tables().await?;
        let data = join(&tables);
        if data.is_empty() {
            anyhow::bail!("The population table has no countries");
        }
        Ok(data)
    }
}
