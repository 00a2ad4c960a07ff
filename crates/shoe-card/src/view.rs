//! Card render tree.
//!
//! [`build_card`] is the single entry point: it classifies the listing and
//! lays out everything the card shows as plain data. HTML and Leptos output
//! are both produced from a [`CardView`].

use chrono::NaiveDate;
use serde::Serialize;

use crate::config::CardConfig;
use crate::listing::Listing;
use crate::money::format_price;
use crate::text::pluralize;
use crate::variant::{classify, Badge, Variant};

/// A fully laid-out card.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CardView {
    pub slug: String,
    pub variant: Variant,
    /// Link target for the whole card.
    pub href: String,
    pub image: ImageView,
    pub spacer_px: u32,
    /// Name and base price.
    pub name: String,
    pub price: PriceLabel,
    /// Colour count label and sale price.
    pub color_label: String,
    pub sale_price: Option<String>,
}

/// Product image plus its overlay badge.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ImageView {
    pub src: String,
    /// Empty: the image is decorative, the name is right below it.
    pub alt: String,
    pub badge: Option<Badge>,
}

/// Formatted base price.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PriceLabel {
    pub text: String,
    /// Struck through when a sale price replaces it.
    pub struck: bool,
}

/// Build the card for `listing` as of `today`.
pub fn build_card(listing: &Listing, config: &CardConfig, today: NaiveDate) -> CardView {
    let variant = classify(
        listing.sale_price,
        listing.release_date,
        &config.recency_window(),
        today,
    );

    CardView {
        slug: listing.slug.clone(),
        variant,
        href: card_href(&config.link_prefix, &listing.slug),
        image: ImageView {
            src: listing.image_src.clone(),
            alt: String::new(),
            badge: variant.badge(),
        },
        spacer_px: config.spacer_px,
        name: listing.name.clone(),
        price: PriceLabel {
            text: format_price(listing.price, config.currency),
            struck: listing.sale_price.is_some(),
        },
        color_label: pluralize("Color", listing.num_of_colors),
        sale_price: listing
            .sale_price
            .map(|amount| format_price(amount, config.currency)),
    }
}

/// Build the card using the local calendar date.
pub fn build_card_today(listing: &Listing, config: &CardConfig) -> CardView {
    build_card(listing, config, chrono::Local::now().date_naive())
}

fn card_href(prefix: &str, slug: &str) -> String {
    format!("{}/{}", prefix, encode_path_segment(slug))
}

fn encode_path_segment(s: &str) -> String {
    let mut result = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            'a'..='z' | 'A'..='Z' | '0'..='9' | '-' | '_' | '.' | '~' => result.push(c),
            _ => {
                let mut buf = [0u8; 4];
                for byte in c.encode_utf8(&mut buf).as_bytes() {
                    result.push_str(&format!("%{:02X}", byte));
                }
            }
        }
    }
    result
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Duration;

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2026, 10, 19).unwrap()
    }

    fn listing() -> Listing {
        Listing {
            slug: "tail-lights".to_string(),
            name: "Tail Lights".to_string(),
            image_src: "/assets/tail-lights.jpg".to_string(),
            price: 10000,
            sale_price: Some(5000),
            release_date: today(),
            num_of_colors: 1,
        }
    }

    #[test]
    fn test_on_sale_card() {
        let card = build_card(&listing(), &CardConfig::default(), today());
        assert_eq!(card.variant, Variant::OnSale);
        assert_eq!(card.image.badge.map(|b| b.label), Some("Sale"));
        assert_eq!(card.price.text, "$100.00");
        assert!(card.price.struck);
        assert_eq!(card.sale_price.as_deref(), Some("$50.00"));
        assert_eq!(card.color_label, "1 Color");
        assert_eq!(card.href, "/shoe/tail-lights");
        assert_eq!(card.image.alt, "");
        assert_eq!(card.spacer_px, 12);
    }

    #[test]
    fn test_plain_card_has_no_strike() {
        let mut l = listing();
        l.sale_price = None;
        l.release_date = today() - Duration::days(400);
        l.num_of_colors = 4;

        let card = build_card(&l, &CardConfig::default(), today());
        assert_eq!(card.variant, Variant::Default);
        assert!(card.image.badge.is_none());
        assert!(!card.price.struck);
        assert!(card.sale_price.is_none());
        assert_eq!(card.color_label, "4 Colors");
    }

    #[test]
    fn test_zero_sale_price_is_struck() {
        let mut l = listing();
        l.sale_price = Some(0);
        l.release_date = today() - Duration::days(400);

        let card = build_card(&l, &CardConfig::default(), today());
        assert_eq!(card.variant, Variant::OnSale);
        assert!(card.price.struck);
        assert_eq!(card.price.text, "$100.00");
        assert_eq!(card.sale_price.as_deref(), Some("$0.00"));
    }

    #[test]
    fn test_build_is_deterministic() {
        let config = CardConfig::default();
        assert_eq!(
            build_card(&listing(), &config, today()),
            build_card(&listing(), &config, today())
        );
    }

    #[test]
    fn test_currency_from_config() {
        let config = CardConfig {
            currency: crate::money::Currency::JPY,
            ..Default::default()
        };
        let card = build_card(&listing(), &config, today());
        assert_eq!(card.price.text, "\u{00a5}10000");
    }

    #[test]
    fn test_href_encodes_slug() {
        let mut l = listing();
        l.slug = "air max/90 é".to_string();
        let card = build_card(&l, &CardConfig::default(), today());
        assert_eq!(card.href, "/shoe/air%20max%2F90%20%C3%A9");
    }
}
