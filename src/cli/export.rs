//! `logokit export`: save one logo as svg, png or webp.

use anyhow::Result;
use std::process::ExitCode;

use super::common::{fetcher, load_catalog, sink};
use crate::config::LogokitConfig;
use crate::export::{AssetExporter, ExportFormat, Outcome, Selection};
use crate::logger::notice_success;
use crate::svg::load_svg;

pub async fn run_export(
    config: &LogokitConfig,
    asset_id: &str,
    format: ExportFormat,
    variant: Option<String>,
) -> Result<ExitCode> {
    let catalog = load_catalog(config)?;
    let asset = catalog.asset(asset_id)?;

    let svg = load_svg(asset, &fetcher(config)?).await;
    let selection = Selection::new(asset.clone())
        .with_svg(svg)
        .with_variant(variant);

    let exporter = AssetExporter::with_size(sink(config), config.export.size);
    let outcome = exporter.export(Some(&selection), format).await;
    if let Outcome::Saved(path) = &outcome
        && let Some(name) = path.file_name()
    {
        notice_success(&format!("saved {}", name.to_string_lossy()));
    }
    Ok(outcome.exit_code())
}
