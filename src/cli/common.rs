//! Shared setup for command handlers.

use anyhow::{Context, Result};

use crate::catalog::Catalog;
use crate::config::LogokitConfig;
use crate::export::{AssetFetcher, DirSink};

/// Load the catalog named by `[catalog].path`.
pub fn load_catalog(config: &LogokitConfig) -> Result<Catalog> {
    Catalog::load(&config.catalog.path).context("Failed to load asset catalog")
}

pub fn fetcher(config: &LogokitConfig) -> Result<AssetFetcher> {
    AssetFetcher::new(config.fetch.settings()).context("Failed to set up asset fetcher")
}

/// Sink writing into `[export].output`.
pub fn sink(config: &LogokitConfig) -> DirSink {
    DirSink::new(&config.export.output)
}
