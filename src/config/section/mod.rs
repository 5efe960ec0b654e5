//! Configuration section definitions.
//!
//! Each section maps to a `[name]` table in `logokit.toml`.

mod export;
mod fetch;

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

pub use export::{ExportConfig, MAX_RASTER_SIZE};
pub use fetch::FetchConfig;

/// `[codegen]` section: component source generation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CodegenConfig {
    /// Display name used when the asset name sanitizes to nothing.
    pub component: String,
}

impl Default for CodegenConfig {
    fn default() -> Self {
        Self {
            component: "Icon".to_string(),
        }
    }
}

/// `[catalog]` section: where the asset catalog lives.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CatalogConfig {
    pub path: PathBuf,
}

impl Default for CatalogConfig {
    fn default() -> Self {
        Self {
            path: PathBuf::from("catalog.json"),
        }
    }
}
