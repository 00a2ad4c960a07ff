//! Catalog files: lists of shoe listings.
//!
//! JSON catalogs are either a bare array of listings or an object with a
//! `shoes` array. TOML catalogs use `[[shoes]]` tables, with release dates
//! written as quoted strings.

use std::path::Path;

use anyhow::{Context, Result};
use serde::Deserialize;
use shoe_card::Listing;

use crate::config::is_json;

#[derive(Deserialize)]
#[serde(untagged)]
enum JsonCatalog {
    Bare(Vec<Listing>),
    Wrapped { shoes: Vec<Listing> },
}

#[derive(Deserialize)]
struct TomlCatalog {
    #[serde(default)]
    shoes: Vec<Listing>,
}

/// Read and parse a catalog file.
pub async fn load_catalog(path: &Path) -> Result<Vec<Listing>> {
    let content = tokio::fs::read_to_string(path)
        .await
        .with_context(|| format!("Failed to read catalog: {}", path.display()))?;

    parse_catalog(&content, is_json(path))
        .with_context(|| format!("Failed to parse catalog: {}", path.display()))
}

/// Parse catalog text.
pub fn parse_catalog(content: &str, json: bool) -> Result<Vec<Listing>> {
    if json {
        let catalog: JsonCatalog = serde_json::from_str(content)?;
        Ok(match catalog {
            JsonCatalog::Bare(shoes) | JsonCatalog::Wrapped { shoes } => shoes,
        })
    } else {
        let catalog: TomlCatalog = toml::from_str(content)?;
        Ok(catalog.shoes)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bare_json_array() {
        let shoes = parse_catalog(
            r#"[{
                "slug": "tail-lights",
                "name": "Tail Lights",
                "imageSrc": "/assets/tail-lights.jpg",
                "price": 10000,
                "salePrice": 5000,
                "releaseDate": "2026-10-19",
                "numOfColors": 1
            }]"#,
            true,
        )
        .unwrap();
        assert_eq!(shoes.len(), 1);
        assert_eq!(shoes[0].sale_price, Some(5000));
    }

    #[test]
    fn test_wrapped_json() {
        let shoes = parse_catalog(r#"{"shoes": []}"#, true).unwrap();
        assert!(shoes.is_empty());
    }

    #[test]
    fn test_toml_catalog() {
        let shoes = parse_catalog(
            r#"
[[shoes]]
slug = "grid-runner"
name = "Grid Runner"
image_src = "/assets/grid-runner.jpg"
price = 7999
release_date = "2026-10-09"
num_of_colors = 3

[[shoes]]
slug = "classic"
name = "Classic"
image_src = "/assets/classic.jpg"
price = 12000
release_date = "2024-10-19"
num_of_colors = 2
"#,
            false,
        )
        .unwrap();
        assert_eq!(shoes.len(), 2);
        assert_eq!(shoes[0].sale_price, None);
        assert_eq!(shoes[1].num_of_colors, 2);
    }

    #[test]
    fn test_bad_json() {
        assert!(parse_catalog(r#"{"shoe": 1}"#, true).is_err());
    }
}
