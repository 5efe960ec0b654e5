//! Download targets.
//!
//! A [`DownloadSink`] is where a finished export lands: the equivalent of the
//! browser saving a blob under a suggested file name.

use std::fs;
use std::path::PathBuf;

use super::{Blob, ExportError};
use crate::debug;

pub trait DownloadSink: Send + Sync {
    /// Save `blob` as `filename`, returning where it ended up.
    fn save(&self, blob: &Blob, filename: &str) -> Result<PathBuf, ExportError>;
}

impl<S: DownloadSink + ?Sized> DownloadSink for &S {
    fn save(&self, blob: &Blob, filename: &str) -> Result<PathBuf, ExportError> {
        (**self).save(blob, filename)
    }
}

/// Writes downloads into one directory, created on first use.
#[derive(Debug, Clone)]
pub struct DirSink {
    dir: PathBuf,
}

impl DirSink {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }
}

impl DownloadSink for DirSink {
    fn save(&self, blob: &Blob, filename: &str) -> Result<PathBuf, ExportError> {
        fs::create_dir_all(&self.dir).map_err(|err| ExportError::Io(self.dir.clone(), err))?;
        let path = self.dir.join(flatten_name(filename));
        fs::write(&path, &blob.bytes).map_err(|err| ExportError::Io(path.clone(), err))?;
        debug!("export"; "wrote {} ({}, {} bytes)", path.display(), blob.mime, blob.len());
        Ok(path)
    }
}

/// Keep a suggested name inside the target directory.
fn flatten_name(filename: &str) -> String {
    let name: String = filename
        .chars()
        .map(|c| if matches!(c, '/' | '\\' | '\0') { '-' } else { c })
        .collect();
    match name.as_str() {
        "" | "." | ".." => "download".to_string(),
        _ => name,
    }
}

/// Records downloads in memory.
#[cfg(test)]
#[derive(Debug, Default)]
pub(crate) struct MemorySink {
    saved: parking_lot::Mutex<Vec<(String, Blob)>>,
}

#[cfg(test)]
impl MemorySink {
    pub(crate) fn saved(&self) -> Vec<(String, Blob)> {
        self.saved.lock().clone()
    }
}

#[cfg(test)]
impl DownloadSink for MemorySink {
    fn save(&self, blob: &Blob, filename: &str) -> Result<PathBuf, ExportError> {
        self.saved.lock().push((filename.to_string(), blob.clone()));
        Ok(PathBuf::from(filename))
    }
}
