//! Card configuration.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;
use crate::money::Currency;
use crate::recency::{RecencyWindow, DEFAULT_WINDOW_DAYS};
use crate::theme::Theme;

/// Settings shared by every card in a render.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CardConfig {
    /// Currency prices are expressed in.
    #[serde(default)]
    pub currency: Currency,

    /// Days a release stays "new".
    #[serde(default = "default_window_days")]
    pub new_release_window_days: u32,

    /// Path prefix for the card link (`{prefix}/{slug}`).
    #[serde(default = "default_link_prefix")]
    pub link_prefix: String,

    /// Gap between the image and the text rows, in pixels.
    #[serde(default = "default_spacer_px")]
    pub spacer_px: u32,

    /// Colours and weights.
    #[serde(default)]
    pub theme: Theme,
}

fn default_window_days() -> u32 {
    DEFAULT_WINDOW_DAYS
}

fn default_link_prefix() -> String {
    "/shoe".to_string()
}

fn default_spacer_px() -> u32 {
    12
}

impl Default for CardConfig {
    fn default() -> Self {
        Self {
            currency: Currency::default(),
            new_release_window_days: default_window_days(),
            link_prefix: default_link_prefix(),
            spacer_px: default_spacer_px(),
            theme: Theme::default(),
        }
    }
}

impl CardConfig {
    /// Load config from a `.toml` or `.json` file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.display().to_string(),
            source,
        })?;

        let config = if path.extension().is_some_and(|e| e == "json") {
            Self::from_json(&content)?
        } else {
            Self::from_toml(&content)?
        };
        config.validate()?;
        Ok(config)
    }

    /// Parse config from TOML text.
    pub fn from_toml(content: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(content)?)
    }

    /// Parse config from JSON text.
    pub fn from_json(content: &str) -> Result<Self, ConfigError> {
        Ok(serde_json::from_str(content)?)
    }

    /// Reject values that would produce broken markup.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !self.link_prefix.is_empty() && !self.link_prefix.starts_with('/') {
            return Err(ConfigError::Invalid {
                key: "link_prefix",
                reason: format!("must start with '/', got {:?}", self.link_prefix),
            });
        }
        if self.link_prefix.ends_with('/') {
            return Err(ConfigError::Invalid {
                key: "link_prefix",
                reason: "must not end with '/'".to_string(),
            });
        }
        Ok(())
    }

    /// Recency window derived from `new_release_window_days`.
    pub fn recency_window(&self) -> RecencyWindow {
        RecencyWindow::new(self.new_release_window_days)
    }
}
