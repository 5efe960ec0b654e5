//! Screenshot downloads: one image, or a whole set as a ZIP archive.
//!
//! Batch fetches run concurrently and fail independently. An item that
//! cannot be fetched is logged and left out of the archive; only a failure
//! to assemble or save the archive fails the batch.

use futures::future::join_all;
use std::collections::HashSet;
use std::io::{Cursor, Write};
use std::path::{Path, PathBuf};
use zip::write::SimpleFileOptions;
use zip::{CompressionMethod, ZipWriter};

use super::filename::{archive_filename, archive_folder, screenshot_entry, screenshot_filename};
use super::single::error_chain;
use super::{Blob, DownloadSink, ExportError, Fetcher, InFlight, Outcome, SkipReason};
use crate::catalog::Screenshot;
use crate::logger::{ProgressLine, notice_error, notice_success, notice_warning};
use crate::utils::mime;
use crate::{debug, log};

/// One remote image of a batch.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BatchItem {
    pub url: String,
    pub label: String,
}

impl BatchItem {
    pub fn new(url: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            label: label.into(),
        }
    }
}

impl From<&Screenshot> for BatchItem {
    fn from(shot: &Screenshot) -> Self {
        Self::new(&shot.url, &shot.label)
    }
}

/// What ended up in a saved archive.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BatchReport {
    pub archive: PathBuf,
    /// Entry paths inside the archive, in item order.
    pub entries: Vec<String>,
    /// URLs that could not be fetched.
    pub failed: Vec<String>,
}

pub struct ScreenshotExporter<F, S> {
    fetcher: F,
    sink: S,
    all: InFlight<()>,
    single: InFlight<()>,
}

impl<F: Fetcher, S: DownloadSink> ScreenshotExporter<F, S> {
    pub fn new(fetcher: F, sink: S) -> Self {
        Self {
            fetcher,
            sink,
            all: InFlight::new(),
            single: InFlight::new(),
        }
    }

    pub fn is_zipping(&self) -> bool {
        self.all.is_active()
    }

    pub fn is_downloading(&self) -> bool {
        self.single.is_active()
    }

    /// Fetch every item concurrently and save them as one archive.
    pub async fn export_all_as_zip(
        &self,
        collection: &str,
        items: &[BatchItem],
    ) -> Outcome<BatchReport> {
        if items.is_empty() {
            return Outcome::Skipped(SkipReason::EmptyBatch);
        }
        let Some(_guard) = self.all.try_begin(()) else {
            debug!("bundle"; "archive for {} already in progress", collection);
            return Outcome::Skipped(SkipReason::Busy);
        };

        let fetched = self.fetch_all(items).await;

        let mut failed = Vec::new();
        let mut files = Vec::with_capacity(fetched.len());
        for (item, result) in items.iter().zip(fetched) {
            match result {
                Ok(bytes) => files.push((screenshot_entry(&item.label), bytes)),
                Err(err) => {
                    log!("fetch"; "skipping {}: {}", item.label, err);
                    failed.push(item.url.clone());
                }
            }
        }

        let folder = archive_folder(collection);
        let filename = archive_filename(collection);

        match self.package(folder, files, &filename).await {
            Ok((archive, entries)) => {
                log!("bundle"; "{} ({} files)", archive.display(), entries.len());
                if failed.is_empty() {
                    notice_success(&format!("saved {filename}"));
                } else {
                    notice_warning(
                        &format!(
                            "saved {filename}, {} of {} screenshots could not be downloaded",
                            failed.len(),
                            items.len()
                        ),
                        &failed.join(", "),
                    );
                }
                Outcome::Saved(BatchReport {
                    archive,
                    entries,
                    failed,
                })
            }
            Err(err) => {
                log!("error"; "batch download failed: {}", err);
                notice_error("Failed to create zip file.", &error_chain(&err));
                Outcome::Failed(err)
            }
        }
    }

    /// Fetch and save a single screenshot.
    pub async fn download_screenshot(&self, collection: &str, item: &BatchItem) -> Outcome<PathBuf> {
        let Some(_guard) = self.single.try_begin(()) else {
            return Outcome::Skipped(SkipReason::Busy);
        };

        let filename = screenshot_filename(collection, &item.label);
        let result = match self.fetcher.fetch(&item.url).await {
            Ok(bytes) => self.sink.save(&Blob::new(image_mime(&item.url), bytes), &filename),
            Err(err) => Err(err),
        };

        match result {
            Ok(path) => {
                log!("shot"; "{}", path.display());
                Outcome::Saved(path)
            }
            Err(err) => {
                log!("error"; "download failed: {}", err);
                notice_error("Failed to download image.", &error_chain(&err));
                Outcome::Failed(err)
            }
        }
    }

    /// Fetch all items concurrently; results are in item order.
    async fn fetch_all(&self, items: &[BatchItem]) -> Vec<Result<Vec<u8>, ExportError>> {
        let progress = ProgressLine::new("bundle", &[("fetch", items.len())]);

        let results = {
            let progress = &progress;
            let fetcher = &self.fetcher;
            join_all(items.iter().map(|item| async move {
                let result = fetcher.fetch(&item.url).await;
                progress.inc("fetch");
                result
            }))
            .await
        };

        progress.finish();
        results
    }

    async fn package(
        &self,
        folder: String,
        files: Vec<(String, Vec<u8>)>,
        filename: &str,
    ) -> Result<(PathBuf, Vec<String>), ExportError> {
        let (bytes, entries) =
            tokio::task::spawn_blocking(move || build_archive(&folder, &files)).await??;
        let path = self.sink.save(&Blob::new(mime::types::ZIP, bytes), filename)?;
        Ok((path, entries))
    }
}

/// Type guessed from the URL's extension; anything unrecognized is saved as PNG.
fn image_mime(url: &str) -> &'static str {
    let path = url.split(['?', '#']).next().unwrap_or(url);
    Some(mime::from_path(Path::new(path)))
        .filter(|m| mime::is_image(m))
        .unwrap_or(mime::types::PNG)
}

/// Deflate `files` into `folder/` of a new archive.
///
/// Repeated names get a numeric suffix (`login.png`, `login-2.png`).
fn build_archive(
    folder: &str,
    files: &[(String, Vec<u8>)],
) -> Result<(Vec<u8>, Vec<String>), zip::result::ZipError> {
    let options = SimpleFileOptions::default().compression_method(CompressionMethod::Deflated);
    let mut zip = ZipWriter::new(Cursor::new(Vec::new()));
    let mut used = HashSet::new();
    let mut entries = Vec::with_capacity(files.len());

    for (name, bytes) in files {
        let entry = unique_entry(folder, name, &mut used);
        zip.start_file(entry.clone(), options)?;
        zip.write_all(bytes)?;
        entries.push(entry);
    }

    let cursor = zip.finish()?;
    Ok((cursor.into_inner(), entries))
}

fn unique_entry(folder: &str, name: &str, used: &mut HashSet<String>) -> String {
    let candidate = format!("{folder}/{name}");
    if used.insert(candidate.clone()) {
        return candidate;
    }

    let (stem, ext) = name.rsplit_once('.').unwrap_or((name, ""));
    (2..)
        .map(|n| {
            if ext.is_empty() {
                format!("{folder}/{stem}-{n}")
            } else {
                format!("{folder}/{stem}-{n}.{ext}")
            }
        })
        .find(|entry| used.insert(entry.clone()))
        .unwrap_or(candidate)
}
