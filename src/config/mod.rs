//! Project configuration management for `logokit.toml`.
//!
//! # Module Structure
//!
//! ```text
//! config/
//! ├── section/       # [export] [fetch] [codegen] [catalog]
//! ├── error          # ConfigError
//! └── mod.rs         # LogokitConfig (this file)
//! ```
//!
//! # Sections
//!
//! | Section     | Purpose                                         |
//! |-------------|-------------------------------------------------|
//! | `[export]`  | Download directory and raster size              |
//! | `[fetch]`   | Asset root, request timeout, user agent         |
//! | `[codegen]` | Fallback component name                         |
//! | `[catalog]` | Location of the catalog JSON                    |

mod error;
mod section;

pub use error::ConfigError;
pub use section::{CatalogConfig, CodegenConfig, ExportConfig, FetchConfig, MAX_RASTER_SIZE};

use crate::{cli::Cli, debug, log};
use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::{
    fs,
    path::{Path, PathBuf},
};

/// Root configuration structure representing logokit.toml
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct LogokitConfig {
    /// Absolute path to the config file, empty when none was found
    #[serde(skip)]
    pub config_path: PathBuf,

    /// Project root: parent of the config file, or cwd without one
    #[serde(skip)]
    pub root: PathBuf,

    #[serde(default)]
    pub export: ExportConfig,

    #[serde(default)]
    pub fetch: FetchConfig,

    #[serde(default)]
    pub codegen: CodegenConfig,

    #[serde(default)]
    pub catalog: CatalogConfig,
}

impl LogokitConfig {
    /// Load configuration for the current working directory.
    pub fn load(cli: &Cli) -> Result<Self> {
        let cwd = std::env::current_dir().context("Failed to get current working directory")?;
        Self::load_in(cli, &cwd)
    }

    /// Load configuration, searching upward from `cwd`.
    ///
    /// A missing config file is not an error: every section falls back to its
    /// defaults and paths resolve against `cwd`.
    pub fn load_in(cli: &Cli, cwd: &Path) -> Result<Self> {
        let mut config = match find_config_file(&cli.config, cwd) {
            Some(path) => {
                let mut config = Self::from_path(&path)?;
                config.config_path = path;
                config
            }
            None => {
                debug!("config"; "no {} found, using defaults", cli.config.display());
                Self::default()
            }
        };

        config.finalize(cli, cwd);
        config.validate()?;
        Ok(config)
    }

    /// Parse configuration from TOML string
    pub fn from_str(content: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(content)?)
    }

    /// Load configuration from file path with unknown field detection.
    fn from_path(path: &Path) -> Result<Self, ConfigError> {
        let content =
            fs::read_to_string(path).map_err(|err| ConfigError::Io(path.to_path_buf(), err))?;

        let (config, ignored) = Self::parse_with_ignored(&content)?;
        if !ignored.is_empty() {
            Self::print_unknown_fields_warning(&ignored, path);
        }
        Ok(config)
    }

    /// Parse TOML content, collecting any unknown fields.
    fn parse_with_ignored(content: &str) -> Result<(Self, Vec<String>), ConfigError> {
        let mut ignored = Vec::new();
        let deserializer = toml::Deserializer::new(content);
        let config = serde_ignored::deserialize(deserializer, |path: serde_ignored::Path| {
            ignored.push(path.to_string());
        })?;
        Ok((config, ignored))
    }

    fn print_unknown_fields_warning(fields: &[String], path: &Path) {
        let display_path = path
            .file_name()
            .map(|n| n.to_string_lossy())
            .unwrap_or_else(|| path.to_string_lossy());
        log!("warning"; "unknown fields in {}, ignoring: {}", display_path, fields.join(", "));
    }

    /// Resolve the root, apply CLI overrides, then anchor relative paths.
    fn finalize(&mut self, cli: &Cli, cwd: &Path) {
        let root = self
            .config_path
            .parent()
            .map(Path::to_path_buf)
            .unwrap_or_else(|| cwd.to_path_buf());

        self.root = root;
        self.apply_cli_options(cli);
        self.normalize_paths();
    }

    fn apply_cli_options(&mut self, cli: &Cli) {
        Self::update_option(&mut self.export.output, cli.output.as_ref());
        Self::update_option(&mut self.export.size, cli.size.as_ref());
        Self::update_option(&mut self.catalog.path, cli.catalog.as_ref());
    }

    /// Update config option if CLI value is provided.
    fn update_option<T: Clone>(config_option: &mut T, cli_option: Option<&T>) {
        if let Some(option) = cli_option {
            *config_option = option.clone();
        }
    }

    fn normalize_paths(&mut self) {
        self.export.output = self.root_join(&self.export.output);
        self.fetch.assets = self.root_join(&self.fetch.assets);
        self.catalog.path = self.root_join(&self.catalog.path);
    }

    /// Check value ranges after overrides are applied.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.export.size == 0 {
            return Err(ConfigError::Validation(
                "[export].size must be greater than 0".into(),
            ));
        }
        if self.export.size > MAX_RASTER_SIZE {
            return Err(ConfigError::Validation(format!(
                "[export].size must be at most {MAX_RASTER_SIZE}, got {}",
                self.export.size
            )));
        }
        if self.fetch.timeout == 0 {
            return Err(ConfigError::Validation(
                "[fetch].timeout must be greater than 0".into(),
            ));
        }
        if self.codegen.component.trim().is_empty() {
            return Err(ConfigError::Validation(
                "[codegen].component must not be empty".into(),
            ));
        }
        Ok(())
    }

    /// Get the root directory path
    pub fn get_root(&self) -> &Path {
        &self.root
    }

    /// Join a path with the root directory. Absolute paths are kept as-is.
    pub fn root_join(&self, path: impl AsRef<Path>) -> PathBuf {
        self.root.join(path)
    }
}

/// Find config file by searching upward from `start`.
///
/// ```text
/// /home/user/brand/public/logos/  ← cwd
/// /home/user/brand/logokit.toml   ← found!
/// ```
pub fn find_config_file(config_name: &Path, start: &Path) -> Option<PathBuf> {
    if config_name.is_absolute() {
        return config_name.exists().then(|| config_name.to_path_buf());
    }

    let mut current = start;
    loop {
        let candidate = current.join(config_name);
        if candidate.is_file() {
            return Some(candidate);
        }
        current = current.parent()?;
    }
}
