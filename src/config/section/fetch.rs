//! `[fetch]` section configuration.
//!
//! # Example
//!
//! ```toml
//! [fetch]
//! assets = "public"           # Root for logo paths such as /logos/visa.svg
//! timeout = 30                # Seconds per remote request
//! user_agent = "logokit/0.1"  # Optional
//! ```

use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use std::time::Duration;

use crate::export::FetchSettings;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FetchConfig {
    /// Directory that non-URL asset paths resolve against.
    pub assets: PathBuf,

    /// Request timeout in seconds.
    pub timeout: u64,

    pub user_agent: Option<String>,
}

impl Default for FetchConfig {
    fn default() -> Self {
        Self {
            assets: PathBuf::from("public"),
            timeout: 30,
            user_agent: None,
        }
    }
}

impl FetchConfig {
    pub fn settings(&self) -> FetchSettings {
        FetchSettings {
            root: self.assets.clone(),
            timeout: Duration::from_secs(self.timeout),
            user_agent: self.user_agent.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_settings_conversion() {
        let config: FetchConfig = toml::from_str(
            r#"
            assets = "static"
            timeout = 5
            user_agent = "logokit-test"
            "#,
        )
        .unwrap();

        let settings = config.settings();
        assert_eq!(settings.root, PathBuf::from("static"));
        assert_eq!(settings.timeout, Duration::from_secs(5));
        assert_eq!(settings.user_agent.as_deref(), Some("logokit-test"));
    }
}
