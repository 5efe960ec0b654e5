//! In-memory file payloads handed to a download sink.

use crate::utils::mime;

/// Typed binary payload, the unit a [`DownloadSink`](super::DownloadSink) saves.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Blob {
    pub mime: String,
    pub bytes: Vec<u8>,
}

impl Blob {
    pub fn new(mime: impl Into<String>, bytes: Vec<u8>) -> Self {
        Self {
            mime: mime.into(),
            bytes,
        }
    }

    /// Vector blob for raw SVG text.
    pub fn svg(markup: &str) -> Self {
        Self::new(mime::types::SVG, markup.as_bytes().to_vec())
    }

    pub fn len(&self) -> usize {
        self.bytes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bytes.is_empty()
    }
}
