//! `[export]` section configuration.
//!
//! # Example
//!
//! ```toml
//! [export]
//! output = "downloads"    # Where exported files land
//! size = 1024             # Raster edge length in pixels
//! ```

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

use crate::export::RASTER_SIZE;

/// Largest accepted raster edge.
pub const MAX_RASTER_SIZE: u32 = 8192;

/// Export destination and raster settings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ExportConfig {
    /// Download directory, relative to the project root.
    pub output: PathBuf,

    /// Edge length of PNG/WebP output, at most [`MAX_RASTER_SIZE`].
    /// Logos are stretched to a square.
    pub size: u32,
}

impl Default for ExportConfig {
    fn default() -> Self {
        Self {
            output: PathBuf::from("downloads"),
            size: RASTER_SIZE,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = ExportConfig::default();
        assert_eq!(config.output, PathBuf::from("downloads"));
        assert_eq!(config.size, 1024);
    }

    #[test]
    fn test_partial_section() {
        let config: ExportConfig = toml::from_str("size = 512").unwrap();
        assert_eq!(config.size, 512);
        assert_eq!(config.output, PathBuf::from("downloads"));
    }
}
