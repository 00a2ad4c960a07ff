//! Show the variant each listing would render with.

use anyhow::{bail, Result};
use serde::Serialize;
use shoe_card::{build_card, CardConfig, Listing, Variant};

use super::ClassifyArgs;
use crate::catalog::load_catalog;
use crate::context::Context;
use crate::output::variant_badge;

/// Run the classify command.
pub async fn run(args: ClassifyArgs, ctx: &Context) -> Result<()> {
    let filter = match args.variant.as_deref() {
        Some(name) => match Variant::from_str(name) {
            Some(v) => Some(v),
            None => bail!(
                "Unknown variant '{}' (expected on-sale, new-release or default)",
                name
            ),
        },
        None => None,
    };

    let listings = load_catalog(&ctx.resolve_path(&args.catalog)).await?;
    let rows = classify_rows(&listings, &ctx.config.card, ctx.today, filter);

    if ctx.output.is_json() {
        ctx.output.json(&rows);
        return Ok(());
    }

    ctx.output
        .header(&format!("Variants as of {}", ctx.today.format("%Y-%m-%d")));

    if rows.is_empty() {
        ctx.output.info("No matching listings.");
        return Ok(());
    }

    ctx.output.table_row(
        &["SLUG", "VARIANT", "BADGE", "PRICE", "SALE", "COLORS"],
        &[24, 12, 15, 10, 10, 10],
    );

    for row in &rows {
        let variant = variant_badge(row.variant, 12);
        let price = if row.struck {
            format!("~{}", row.price)
        } else {
            row.price.clone()
        };
        ctx.output.table_row(
            &[
                &row.slug,
                &variant,
                row.badge.unwrap_or("-"),
                &price,
                row.sale_price.as_deref().unwrap_or("-"),
                &row.color_label,
            ],
            &[24, 12, 15, 10, 10, 10],
        );
    }

    ctx.output.info(&format!("Total: {} listing(s)", rows.len()));

    Ok(())
}

#[derive(Debug, Serialize)]
struct ClassifyRow {
    slug: String,
    variant: Variant,
    badge: Option<&'static str>,
    price: String,
    struck: bool,
    sale_price: Option<String>,
    color_label: String,
}

fn classify_rows(
    listings: &[Listing],
    config: &CardConfig,
    today: chrono::NaiveDate,
    filter: Option<Variant>,
) -> Vec<ClassifyRow> {
    listings
        .iter()
        .map(|listing| build_card(listing, config, today))
        .filter(|card| filter.map_or(true, |v| card.variant == v))
        .map(|card| ClassifyRow {
            badge: card.image.badge.map(|b| b.label),
            slug: card.slug,
            variant: card.variant,
            price: card.price.text,
            struck: card.price.struck,
            sale_price: card.sale_price,
            color_label: card.color_label,
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Duration, NaiveDate};

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2026, 10, 19).unwrap()
    }

    fn listings() -> Vec<Listing> {
        let shoe = |slug: &str, sale_price: Option<i64>, age_days: i64| Listing {
            slug: slug.to_string(),
            name: slug.to_uppercase(),
            image_src: format!("/assets/{}.jpg", slug),
            price: 10000,
            sale_price,
            release_date: today() - Duration::days(age_days),
            num_of_colors: 2,
        };
        vec![
            shoe("sale", Some(5000), 0),
            shoe("fresh", None, 10),
            shoe("old", None, 730),
        ]
    }

    #[test]
    fn test_rows_for_each_variant() {
        let rows = classify_rows(&listings(), &CardConfig::default(), today(), None);
        let variants: Vec<Variant> = rows.iter().map(|r| r.variant).collect();
        assert_eq!(
            variants,
            vec![Variant::OnSale, Variant::NewRelease, Variant::Default]
        );
        assert_eq!(rows[0].badge, Some("Sale"));
        assert!(rows[0].struck);
        assert_eq!(rows[1].badge, Some("Just released!"));
        assert_eq!(rows[2].badge, None);
    }

    #[test]
    fn test_filter() {
        let rows = classify_rows(
            &listings(),
            &CardConfig::default(),
            today(),
            Some(Variant::NewRelease),
        );
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].slug, "fresh");
    }

    #[test]
    fn test_rows_serialize_variant_names() {
        let rows = classify_rows(&listings(), &CardConfig::default(), today(), None);
        let json = serde_json::to_value(&rows).unwrap();
        assert_eq!(json[0]["variant"], "on-sale");
        assert_eq!(json[1]["variant"], "new-release");
    }
}
