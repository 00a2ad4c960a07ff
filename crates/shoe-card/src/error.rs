//! Card error types.
//!
//! Rendering itself never fails. These errors come from the edges: checking a
//! listing before it is rendered and loading card configuration.

use thiserror::Error;

/// Problems found by [`Listing::validate`](crate::Listing::validate).
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ListingError {
    /// Slug is empty or only whitespace.
    #[error("Listing has an empty slug")]
    EmptySlug,

    /// Display name is empty.
    #[error("Listing {0} has an empty name")]
    EmptyName(String),

    /// A price below zero.
    #[error("Listing {slug} has a negative {field}: {amount}")]
    NegativePrice {
        slug: String,
        field: &'static str,
        amount: i64,
    },

    /// Sale price that does not undercut the base price.
    #[error("Listing {slug} has sale price {sale_price} not below price {price}")]
    SaleNotDiscounted {
        slug: String,
        price: i64,
        sale_price: i64,
    },
}

/// Errors loading card configuration.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// Config file could not be read.
    #[error("Failed to read config file {path}: {source}")]
    Read {
        path: String,
        #[source]
        source: std::io::Error,
    },

    /// TOML config did not parse.
    #[error("Failed to parse TOML config: {0}")]
    Toml(#[from] toml::de::Error),

    /// JSON config did not parse.
    #[error("Failed to parse JSON config: {0}")]
    Json(#[from] serde_json::Error),

    /// Config parsed but holds an unusable value.
    #[error("Invalid config value for {key}: {reason}")]
    Invalid { key: &'static str, reason: String },
}
