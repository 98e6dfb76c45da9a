//! Byte sources for indicator tables.
//!
//! A source turns a location string (file name, relative path) into the raw
//! table payload. The WASM dashboard uses [`EmbeddedSource`] with tables
//! compiled into the binary; the native CLI reads a directory (`fs` feature)
//! or a static file server (`http` feature).

use crate::indicator::Indicator;
use std::collections::{BTreeMap, HashMap};

#[cfg(feature = "fs")]
use std::path::PathBuf;

/// Something that can fetch the bytes stored at a location.
///
/// Errors are reported as a human-readable reason; the loader attaches the
/// indicator and location before surfacing them.
#[allow(async_fn_in_trait)]
pub trait IndicatorSource {
    async fn fetch(&self, location: &str) -> Result<Vec<u8>, String>;
}

/// Where each indicator table lives within a source.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SourceLocations {
    locations: BTreeMap<Indicator, String>,
}

impl Default for SourceLocations {
    fn default() -> Self {
        Self {
            locations: Indicator::ALL
                .into_iter()
                .map(|indicator| (indicator, indicator.default_file_name().to_string()))
                .collect(),
        }
    }
}

impl SourceLocations {
    /// No locations at all; every indicator must be added with [`Self::with`].
    pub fn empty() -> Self {
        Self {
            locations: BTreeMap::new(),
        }
    }

    /// Override the location of one indicator.
    pub fn with(mut self, indicator: Indicator, location: impl Into<String>) -> Self {
        self.locations.insert(indicator, location.into());
        self
    }

    pub fn get(&self, indicator: Indicator) -> Option<&str> {
        self.locations.get(&indicator).map(String::as_str)
    }
}

/// In-memory payloads keyed by location.
#[derive(Debug, Clone, Default)]
pub struct EmbeddedSource {
    files: HashMap<String, &'static [u8]>,
}

impl EmbeddedSource {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a payload under `location`.
    pub fn with_file(mut self, location: impl Into<String>, bytes: &'static [u8]) -> Self {
        self.files.insert(location.into(), bytes);
        self
    }

    /// The sample tables shipped in `fixtures/`, under their default names.
    pub fn bundled() -> Self {
        crate::fixtures::ALL
            .iter()
            .fold(Self::new(), |source, (indicator, csv)| {
                source.with_file(indicator.default_file_name(), csv.as_bytes())
            })
    }
}

impl IndicatorSource for EmbeddedSource {
    async fn fetch(&self, location: &str) -> Result<Vec<u8>, String> {
        self.files
            .get(location)
            .map(|bytes| bytes.to_vec())
            .ok_or_else(|| format!("no embedded file named '{}'", location))
    }
}

/// Tables read from a directory on disk.
#[cfg(feature = "fs")]
#[derive(Debug, Clone)]
pub struct FsSource {
    root: PathBuf,
}

#[cfg(feature = "fs")]
impl FsSource {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }
}

#[cfg(feature = "fs")]
impl IndicatorSource for FsSource {
    async fn fetch(&self, location: &str) -> Result<Vec<u8>, String> {
        let path = self.root.join(location);
        tokio::fs::read(&path)
            .await
            .map_err(|e| format!("{}: {}", path.display(), e))
    }
}

/// Tables served as static files under a base URL.
#[cfg(feature = "http")]
#[derive(Debug, Clone)]
pub struct HttpSource {
    base_url: String,
    client: reqwest::Client,
}

#[cfg(feature = "http")]
impl HttpSource {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            client: reqwest::Client::new(),
        }
    }

    fn url_for(&self, location: &str) -> String {
        format!(
            "{}/{}",
            self.base_url.trim_end_matches('/'),
            location.trim_start_matches('/')
        )
    }
}

#[cfg(feature = "http")]
impl IndicatorSource for HttpSource {
    async fn fetch(&self, location: &str) -> Result<Vec<u8>, String> {
        let url = self.url_for(location);
        let response = self
            .client
            .get(&url)
            .send()
            .await
            .map_err(|e| format!("{}: {}", url, e))?;
        if !response.status().is_success() {
            return Err(format!("{}: bad response status {}", url, response.status()));
        }
        let body = response
            .bytes()
            .await
            .map_err(|e| format!("{}: failed to read body: {}", url, e))?;
        Ok(body.to_vec())
    }
}
