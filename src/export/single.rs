//! Single-asset download.
//!
//! `SVG` saves the markup as-is. `PNG` / `WEBP` rasterize it at a fixed
//! square size first. One export runs at a time per exporter; requests made
//! while one is processing are ignored.

use std::path::PathBuf;

use super::filename::asset_filename;
use super::raster::{RASTER_SIZE, rasterize};
use super::{Blob, DownloadSink, ExportError, ExportFormat, InFlight, Outcome, SkipReason};
use crate::catalog::Asset;
use crate::logger::notice_error;
use crate::{debug, log};

const CONVERT_FAILED: &str = "Could not convert image. Try downloading as SVG.";

/// The asset shown in the detail view, with its loaded markup.
#[derive(Debug, Clone)]
pub struct Selection {
    pub asset: Asset,
    /// `None` until the SVG has been loaded.
    pub svg: Option<String>,
    /// Active visual variant, if not the default one.
    pub variant: Option<String>,
}

impl Selection {
    pub fn new(asset: Asset) -> Self {
        Self {
            asset,
            svg: None,
            variant: None,
        }
    }

    pub fn with_svg(mut self, svg: impl Into<String>) -> Self {
        self.svg = Some(svg.into());
        self
    }

    pub fn with_variant(mut self, variant: Option<String>) -> Self {
        self.variant = variant;
        self
    }
}

pub struct AssetExporter<S> {
    sink: S,
    size: u32,
    processing: InFlight<ExportFormat>,
}

impl<S: DownloadSink> AssetExporter<S> {
    pub fn new(sink: S) -> Self {
        Self::with_size(sink, RASTER_SIZE)
    }

    /// Exporter rendering bitmaps at `size`×`size`.
    pub fn with_size(sink: S, size: u32) -> Self {
        Self {
            sink,
            size,
            processing: InFlight::new(),
        }
    }

    /// Format currently being exported, if any.
    pub fn processing(&self) -> Option<ExportFormat> {
        self.processing.current()
    }

    /// Export the selection in `format` and hand it to the sink.
    pub async fn export(
        &self,
        selection: Option<&Selection>,
        format: ExportFormat,
    ) -> Outcome<PathBuf> {
        let Some(selection) = selection else {
            return Outcome::Skipped(SkipReason::NothingSelected);
        };
        let Some(svg) = selection.svg.as_deref().filter(|s| !s.is_empty()) else {
            return Outcome::Skipped(SkipReason::SvgNotLoaded);
        };
        let Some(_guard) = self.processing.try_begin(format) else {
            debug!("export"; "busy, ignoring {} request", format.label());
            return Outcome::Skipped(SkipReason::Busy);
        };

        let filename = asset_filename(&selection.asset, selection.variant.as_deref(), format);
        let result = match self.render(svg, format).await {
            Ok(blob) => self.sink.save(&blob, &filename),
            Err(err) => Err(err),
        };

        match result {
            Ok(path) => {
                log!("export"; "{}", path.display());
                Outcome::Saved(path)
            }
            Err(err) => {
                log!("error"; "download of {} failed: {}", filename, err);
                notice_error(CONVERT_FAILED, &error_chain(&err));
                Outcome::Failed(err)
            }
        }
    }

    async fn render(&self, svg: &str, format: ExportFormat) -> Result<Blob, ExportError> {
        match format.raster() {
            None => Ok(Blob::svg(svg)),
            Some(mime) => {
                let url = rasterize(svg, self.size, self.size, mime).await?;
                Ok(url.into_blob())
            }
        }
    }
}

/// `error: cause: cause` on one line.
pub(super) fn error_chain(err: &(dyn std::error::Error + 'static)) -> String {
    let mut message = err.to_string();
    let mut source = err.source();
    while let Some(cause) = source {
        message.push_str(": ");
        message.push_str(&cause.to_string());
        source = cause.source();
    }
    message
}
