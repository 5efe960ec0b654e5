//! Export error types.

use std::path::PathBuf;
use thiserror::Error;

/// Failures of one export job.
///
/// Every variant is terminal for the job that produced it; nothing is
/// retried.
#[derive(Debug, Error)]
pub enum ExportError {
    /// The SVG could not be decoded by the renderer.
    #[error("failed to decode svg: {0}")]
    Decode(String),

    /// No drawing surface could be allocated.
    #[error("rendering surface unavailable ({width}x{height})")]
    Context { width: u32, height: u32 },

    /// Pixels could not be encoded to the requested bitmap format.
    #[error("failed to encode {mime}")]
    Encode {
        mime: &'static str,
        #[source]
        source: image::ImageError,
    },

    /// Malformed `data:` URL.
    #[error("invalid data url: {0}")]
    DataUrl(String),

    /// One remote asset could not be retrieved.
    #[error("failed to fetch `{url}`: {reason}")]
    Fetch { url: String, reason: String },

    /// Archive assembly failed.
    #[error("failed to build archive")]
    Packaging(#[from] zip::result::ZipError),

    #[error("IO error when writing `{0}`")]
    Io(PathBuf, #[source] std::io::Error),

    /// Background render/pack task panicked or was cancelled.
    #[error("export task failed")]
    Task(#[from] tokio::task::JoinError),
}

impl ExportError {
    pub fn fetch(url: &str, reason: impl ToString) -> Self {
        Self::Fetch {
            url: url.to_string(),
            reason: reason.to_string(),
        }
    }
}
