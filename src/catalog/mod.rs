//! Asset catalog: logos and app screenshots.
//!
//! The catalog is static data loaded from a JSON file:
//!
//! ```json
//! {
//!   "assets": [
//!     { "id": "nuran-bank", "name": "Nuran Bank", "logoUrl": "/logos/nuran.svg",
//!       "colors": ["#1E3A8A"], "type": "bank", "hasScreenshots": true }
//!   ],
//!   "screenshots": {
//!     "nuran-bank": [
//!       { "id": "1", "url": "https://...", "label": "Login", "category": "auth" }
//!     ]
//!   }
//! }
//! ```

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("IO error when reading `{0}`")]
    Io(PathBuf, #[source] std::io::Error),

    #[error("catalog parsing error in `{0}`")]
    Json(PathBuf, #[source] serde_json::Error),

    #[error("unknown asset `{0}`")]
    UnknownAsset(String),

    #[error("asset `{asset}` has no screenshot `{id}`")]
    UnknownScreenshot { asset: String, id: String },
}

/// What an asset is a logo of.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "snake_case")]
pub enum AssetKind {
    Bank,
    PaymentMethod,
}

/// A named visual entity with a logo.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Asset {
    pub id: String,
    pub name: String,
    pub logo_url: String,
    #[serde(default)]
    pub colors: Vec<String>,
    #[serde(rename = "type")]
    pub kind: AssetKind,
    #[serde(default)]
    pub is_new: bool,
    #[serde(default)]
    pub is_updated: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub website: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub figma_url: Option<String>,
    #[serde(default)]
    pub has_screenshots: bool,
}

impl Asset {
    /// Whether the logo is vector markup (otherwise a placeholder is shown).
    pub fn has_vector_logo(&self) -> bool {
        self.logo_url.ends_with(".svg")
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ScreenCategory {
    Onboarding,
    Dashboard,
    Transaction,
    Settings,
    Auth,
}

/// One app screenshot of an asset.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Screenshot {
    pub id: String,
    pub url: String,
    pub label: String,
    pub category: ScreenCategory,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Catalog {
    #[serde(default)]
    pub assets: Vec<Asset>,
    /// Asset id -> screenshots.
    #[serde(default)]
    pub screenshots: BTreeMap<String, Vec<Screenshot>>,
}

impl Catalog {
    pub fn from_str(content: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(content)
    }

    pub fn load(path: &Path) -> Result<Self, CatalogError> {
        let content = std::fs::read_to_string(path)
            .map_err(|err| CatalogError::Io(path.to_path_buf(), err))?;
        Self::from_str(&content).map_err(|err| CatalogError::Json(path.to_path_buf(), err))
    }

    pub fn asset(&self, id: &str) -> Result<&Asset, CatalogError> {
        self.assets
            .iter()
            .find(|a| a.id == id)
            .ok_or_else(|| CatalogError::UnknownAsset(id.to_string()))
    }

    /// Screenshots of an asset (empty when it has none).
    pub fn screenshots_of(&self, id: &str) -> &[Screenshot] {
        self.screenshots.get(id).map_or(&[], Vec::as_slice)
    }

    pub fn screenshot(&self, asset: &str, id: &str) -> Result<&Screenshot, CatalogError> {
        self.screenshots_of(asset)
            .iter()
            .find(|s| s.id == id)
            .ok_or_else(|| CatalogError::UnknownScreenshot {
                asset: asset.to_string(),
                id: id.to_string(),
            })
    }

    /// Case-insensitive substring match on asset names, optionally by kind.
    ///
    /// An empty query matches everything.
    pub fn search(&self, query: &str, kind: Option<AssetKind>) -> Vec<&Asset> {
        let needle = query.to_lowercase();
        self.assets
            .iter()
            .filter(|a| kind.is_none_or(|k| a.kind == k))
            .filter(|a| a.name.to_lowercase().contains(&needle))
            .collect()
    }
}
