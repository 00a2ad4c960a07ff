//! End-to-end card scenarios: listing in, HTML out.

use chrono::{Duration, NaiveDate};
use shoe_card::prelude::*;

fn today() -> NaiveDate {
    NaiveDate::from_ymd_opt(2026, 10, 19).unwrap()
}

fn listing(price: i64, sale_price: Option<i64>, release_date: NaiveDate, colors: u32) -> Listing {
    Listing {
        slug: "scenario-shoe".to_string(),
        name: "Scenario Shoe".to_string(),
        image_src: "/assets/scenario-shoe.jpg".to_string(),
        price,
        sale_price,
        release_date,
        num_of_colors: colors,
    }
}

#[test]
fn on_sale_released_today() {
    let card = build_card(
        &listing(10000, Some(5000), today(), 1),
        &CardConfig::default(),
        today(),
    );

    assert_eq!(card.variant, Variant::OnSale);
    assert_eq!(card.image.badge.map(|b| b.label), Some("Sale"));
    assert!(card.price.struck);
    assert_eq!(card.sale_price.as_deref(), Some("$50.00"));
    assert_eq!(card.color_label, "1 Color");

    let html = render_card(&card);
    assert!(html.contains(">Sale<"));
    assert!(html.contains("shoe-card__price--struck\">$100.00<"));
    assert!(html.contains(">$50.00<"));
    assert!(html.contains(">1 Color<"));
}

#[test]
fn new_release_ten_days_ago() {
    let card = build_card(
        &listing(7999, None, today() - Duration::days(10), 3),
        &CardConfig::default(),
        today(),
    );

    assert_eq!(card.variant, Variant::NewRelease);
    assert_eq!(card.image.badge.map(|b| b.label), Some("Just released!"));
    assert!(!card.price.struck);
    assert_eq!(card.price.text, "$79.99");
    assert_eq!(card.sale_price, None);
    assert_eq!(card.color_label, "3 Colors");

    let html = render_card(&card);
    assert!(html.contains(">Just released!<"));
    assert!(!html.contains("shoe-card__price--struck"));
    assert!(html.contains(">3 Colors<"));
}

#[test]
fn default_two_years_old() {
    let card = build_card(
        &listing(12000, None, today() - Duration::days(730), 2),
        &CardConfig::default(),
        today(),
    );

    assert_eq!(card.variant, Variant::Default);
    assert!(card.image.badge.is_none());
    assert!(!card.price.struck);
    assert_eq!(card.color_label, "2 Colors");

    let html = render_card(&card);
    assert!(html.contains(r#"data-variant="default""#));
    assert!(!html.contains("shoe-card__tag"));
    assert!(html.contains(">$120.00<"));
}

#[test]
fn sale_beats_recent_release_for_every_window() {
    for days in [0, 1, 30, 365] {
        let config = CardConfig {
            new_release_window_days: days,
            ..Default::default()
        };
        let card = build_card(&listing(9000, Some(1), today(), 5), &config, today());
        assert_eq!(card.variant, Variant::OnSale);
    }
}

#[test]
fn zero_colors_pluralizes() {
    let card = build_card(
        &listing(5000, None, today(), 0),
        &CardConfig::default(),
        today(),
    );
    assert_eq!(card.color_label, "0 Colors");
}
