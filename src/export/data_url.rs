//! `data:` URLs produced by the rasterizer.

use base64::Engine;
use base64::engine::general_purpose::STANDARD;
use percent_encoding::percent_decode_str;
use std::fmt;

use super::{Blob, ExportError};

/// Decoded `data:` URL.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DataUrl {
    pub mime: String,
    pub data: Vec<u8>,
}

impl DataUrl {
    pub fn new(mime: impl Into<String>, data: Vec<u8>) -> Self {
        Self {
            mime: mime.into(),
            data,
        }
    }

    /// Parse `data:[<mime>][;base64],<payload>`.
    ///
    /// A missing media type defaults to `text/plain;charset=US-ASCII`;
    /// non-base64 payloads are percent-decoded.
    pub fn parse(input: &str) -> Result<Self, ExportError> {
        let rest = input
            .strip_prefix("data:")
            .ok_or_else(|| ExportError::DataUrl("missing `data:` scheme".into()))?;
        let (header, payload) = rest
            .split_once(',')
            .ok_or_else(|| ExportError::DataUrl("missing `,` separator".into()))?;

        let (media, is_base64) = match header.strip_suffix(";base64") {
            Some(media) => (media, true),
            None => (header, false),
        };
        let mime = if media.is_empty() {
            "text/plain;charset=US-ASCII".to_string()
        } else {
            media.to_string()
        };

        let data = if is_base64 {
            STANDARD
                .decode(payload.trim())
                .map_err(|err| ExportError::DataUrl(err.to_string()))?
        } else {
            percent_decode_str(payload).collect()
        };

        Ok(Self { mime, data })
    }

    /// Convert into a downloadable blob of the same type.
    pub fn into_blob(self) -> Blob {
        Blob::new(self.mime, self.data)
    }
}

impl fmt::Display for DataUrl {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "data:{};base64,{}", self.mime, STANDARD.encode(&self.data))
    }
}
