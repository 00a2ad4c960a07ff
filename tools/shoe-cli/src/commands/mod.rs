//! CLI command implementations.

pub mod classify;
pub mod config;
pub mod render;

use clap::{Args, Subcommand};

/// Arguments for the render command.
#[derive(Args)]
pub struct RenderArgs {
    /// Catalog file (JSON or TOML).
    pub catalog: String,

    /// Write HTML to this file instead of stdout.
    #[arg(short, long)]
    pub output: Option<String>,

    /// Emit only the card grid, without the page wrapper and styles.
    #[arg(long)]
    pub fragment: bool,

    /// Page title (overrides `output.title`).
    #[arg(short, long)]
    pub title: Option<String>,

    /// Fail on the first invalid listing instead of skipping it.
    #[arg(long)]
    pub strict: bool,
}

/// Arguments for the classify command.
#[derive(Args)]
pub struct ClassifyArgs {
    /// Catalog file (JSON or TOML).
    pub catalog: String,

    /// Only show listings of this variant (on-sale, new-release, default).
    #[arg(long)]
    pub variant: Option<String>,
}

/// Arguments for the config command.
#[derive(Args)]
pub struct ConfigArgs {
    #[command(subcommand)]
    pub command: ConfigCommand,
}

#[derive(Subcommand)]
pub enum ConfigCommand {
    /// Show current configuration.
    Show,
    /// Get a config value.
    Get {
        /// Config key (dot-separated).
        key: String,
    },
    /// Set a config value.
    Set {
        /// Config key (dot-separated).
        key: String,
        /// Value to set.
        value: String,
    },
    /// Initialize a new config file.
    Init {
        /// Overwrite an existing config without asking.
        #[arg(short, long)]
        force: bool,
    },
    /// Validate a config file.
    Validate {
        /// File to validate (default: the discovered config).
        path: Option<String>,
    },
}
