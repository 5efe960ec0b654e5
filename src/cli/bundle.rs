//! `logokit bundle` and `logokit shot`: screenshot downloads.

use anyhow::Result;
use std::process::ExitCode;

use super::common::{fetcher, load_catalog, sink};
use crate::config::LogokitConfig;
use crate::export::{BatchItem, Outcome, ScreenshotExporter, SkipReason};
use crate::log;
use crate::logger::notice_success;

/// Zip every screenshot of `asset_id`.
pub async fn run_bundle(config: &LogokitConfig, asset_id: &str) -> Result<ExitCode> {
    let catalog = load_catalog(config)?;
    let asset = catalog.asset(asset_id)?;
    let items: Vec<BatchItem> = catalog
        .screenshots_of(asset_id)
        .iter()
        .map(BatchItem::from)
        .collect();

    let exporter = ScreenshotExporter::new(fetcher(config)?, sink(config));
    let outcome = exporter.export_all_as_zip(&asset.name, &items).await;
    if outcome.skipped() == Some(SkipReason::EmptyBatch) {
        log!("bundle"; "{} has no screenshots", asset.name);
    }
    Ok(outcome.exit_code())
}

/// Download one screenshot of `asset_id`.
pub async fn run_shot(config: &LogokitConfig, asset_id: &str, shot_id: &str) -> Result<ExitCode> {
    let catalog = load_catalog(config)?;
    let asset = catalog.asset(asset_id)?;
    let shot = catalog.screenshot(asset_id, shot_id)?;

    let exporter = ScreenshotExporter::new(fetcher(config)?, sink(config));
    let outcome = exporter
        .download_screenshot(&asset.name, &BatchItem::from(shot))
        .await;
    if let Outcome::Saved(path) = &outcome
        && let Some(name) = path.file_name()
    {
        notice_success(&format!("saved {}", name.to_string_lossy()));
    }
    Ok(outcome.exit_code())
}
