//! CLI configuration.

use std::path::Path;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use shoe_card::CardConfig;
use shoe_observability::{LogFormat, LogLevel};

/// Config file names searched for, in order.
pub const CONFIG_NAMES: [&str; 3] = ["shoecard.toml", ".shoecard.toml", "shoecard.json"];

/// CLI configuration file.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CliConfig {
    /// Card rendering settings.
    #[serde(default)]
    pub card: CardConfig,

    /// Page and log output settings.
    #[serde(default)]
    pub output: OutputConfig,
}

impl CliConfig {
    /// Load config from a file.
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;

        let config = Self::parse(&content, is_json(path))
            .with_context(|| format!("Failed to parse config: {}", path.display()))?;
        config
            .card
            .validate()
            .with_context(|| format!("Invalid config: {}", path.display()))?;
        Ok(config)
    }

    /// Parse config text as JSON or TOML.
    pub fn parse(content: &str, json: bool) -> Result<Self> {
        if json {
            Ok(serde_json::from_str(content)?)
        } else {
            Ok(toml::from_str(content)?)
        }
    }

    /// Save config to a file.
    pub fn save(&self, path: &Path) -> Result<()> {
        let content = if is_json(path) {
            serde_json::to_string_pretty(self)?
        } else {
            toml::to_string_pretty(self)?
        };

        std::fs::write(path, content)
            .with_context(|| format!("Failed to write config file: {}", path.display()))
    }
}

/// Output settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OutputConfig {
    /// Page title for full-page renders.
    #[serde(default = "default_title")]
    pub title: String,

    /// Minimum log level.
    #[serde(default = "default_log_level")]
    pub log_level: LogLevel,

    /// Log line format.
    #[serde(default)]
    pub log_format: LogFormat,
}

fn default_title() -> String {
    "Shoes".to_string()
}

fn default_log_level() -> LogLevel {
    LogLevel::Info
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            title: default_title(),
            log_level: default_log_level(),
            log_format: LogFormat::default(),
        }
    }
}

pub fn is_json(path: &Path) -> bool {
    path.extension().is_some_and(|e| e == "json")
}

/// Generate a default shoecard.toml config file.
///
/// The title is written as a TOML string literal so quotes and backslashes
/// survive the round trip.
pub fn generate_default_config(title: &str) -> String {
    let title = toml::Value::String(title.to_string()).to_string();

    format!(
        r#"# Shoe card configuration

[card]
currency = "USD"
# Releases younger than this many days get the "Just released!" tag
new_release_window_days = 30
link_prefix = "/shoe"
spacer_px = 12

[card.theme.colors]
white = "hsl(0deg 0% 100%)"
primary = "hsl(340deg 65% 47%)"
secondary = "hsl(240deg 60% 63%)"
gray700 = "hsl(220deg 5% 40%)"
gray900 = "hsl(220deg 3% 20%)"

[card.theme.weights]
normal = 500
medium = 600
bold = 800

[output]
title = {title}
log_level = "info"
log_format = "human"
"#,
        title = title
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_parses_to_defaults() {
        let config = CliConfig::parse(&generate_default_config("Shoes"), false).unwrap();
        assert_eq!(config, CliConfig::default());
    }

    #[test]
    fn test_default_config_keeps_quoted_title() {
        let title = r#"Josh's "Best" Shoes \ Boots"#;
        let config = CliConfig::parse(&generate_default_config(title), false).unwrap();
        assert_eq!(config.output.title, title);
        assert_eq!(config.card, CardConfig::default());
    }

    #[test]
    fn test_partial_config() {
        let config = CliConfig::parse(
            r#"
[card]
new_release_window_days = 7

[output]
log_format = "json"
"#,
            false,
        )
        .unwrap();
        assert_eq!(config.card.new_release_window_days, 7);
        assert_eq!(config.card.link_prefix, "/shoe");
        assert_eq!(config.output.log_format, LogFormat::Json);
        assert_eq!(config.output.title, "Shoes");
    }

    #[test]
    fn test_json_config() {
        let config =
            CliConfig::parse(r#"{"output": {"log_level": "debug"}}"#, true).unwrap();
        assert_eq!(config.output.log_level, LogLevel::Debug);
    }

    #[test]
    fn test_is_json() {
        assert!(is_json(Path::new("shoecard.json")));
        assert!(!is_json(Path::new("shoecard.toml")));
    }
}
