//! Asset export pipeline.
//!
//! # Modules
//!
//! - [`raster`]: SVG → canvas → PNG/WebP `data:` URL
//! - [`single`]: one logo as SVG / PNG / WebP
//! - [`batch`]: screenshot sets as one ZIP archive
//! - [`fetch`]: local / remote / inline asset retrieval
//! - [`sink`]: where finished downloads are written
//!
//! # Flow
//!
//! ```text
//!  svg markup ──► single ──┬─ SVG ──────────────► Blob ──► sink
//!                          └─ PNG/WebP ► raster ─► Blob ──► sink
//!
//!  [url, label] ──► fetch (concurrent, per-item failures dropped)
//!                      └──► zip folder ──► Blob ──► sink
//! ```

mod batch;
mod blob;
mod data_url;
mod error;
mod fetch;
mod filename;
mod format;
mod guard;
mod outcome;
mod raster;
mod single;
mod sink;

pub use batch::{BatchItem, BatchReport, ScreenshotExporter};
pub use blob::Blob;
pub use data_url::DataUrl;
pub use error::ExportError;
pub use fetch::{AssetFetcher, FetchSettings, Fetcher};
pub use filename::asset_filename;
pub use format::{ExportFormat, RasterMime};
pub use guard::InFlight;
pub use outcome::{Outcome, SkipReason};
pub use raster::{RASTER_SIZE, rasterize};
pub use single::{AssetExporter, Selection};
pub use sink::{DirSink, DownloadSink};

#[cfg(test)]
pub(crate) use sink::MemorySink;
#[cfg(test)]
pub(crate) use fetch::testing as fetch_testing;
