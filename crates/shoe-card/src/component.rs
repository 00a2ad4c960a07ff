//! Leptos component rendering the same markup as [`crate::html::render_card`].

use chrono::NaiveDate;
use leptos::prelude::*;

use crate::config::CardConfig;
use crate::listing::Listing;
use crate::view::{build_card, build_card_today, CardView};

/// Product card for a shoe listing.
///
/// ```rust,ignore
/// view! {
///     <ShoeCard listing=listing.clone()/>
/// }
/// ```
#[component]
pub fn ShoeCard(
    /// Listing to show.
    listing: Listing,
    /// Card settings; defaults when omitted.
    #[prop(optional)]
    config: Option<CardConfig>,
    /// Reference date for the "Just released!" check; the local date when omitted.
    #[prop(optional)]
    today: Option<NaiveDate>,
) -> impl IntoView {
    let config = config.unwrap_or_default();
    let card = match today {
        Some(today) => build_card(&listing, &config, today),
        None => build_card_today(&listing, &config),
    };
    let CardView {
        slug,
        variant,
        href,
        image,
        spacer_px,
        name,
        price,
        color_label,
        sale_price,
    } = card;

    let badge = image.badge.map(|badge| {
        view! {
            <div class={format!("shoe-card__tag {}", badge.class())}>{badge.label}</div>
        }
    });

    let price_class = if price.struck {
        "shoe-card__price shoe-card__price--struck"
    } else {
        "shoe-card__price"
    };

    view! {
        <a href=href class="shoe-card__link">
            <article class="shoe-card" data-slug=slug data-variant={variant.as_str()}>
                <div class="shoe-card__image-wrapper">
                    <img src={image.src} alt={image.alt} class="shoe-card__image"/>
                    {badge}
                </div>
                <div class="shoe-card__spacer" style={format!("height: {}px", spacer_px)}></div>
                <div class="shoe-card__row">
                    <h3 class="shoe-card__name">{name}</h3>
                    <span class=price_class>{price.text}</span>
                </div>
                <div class="shoe-card__row">
                    <p class="shoe-card__colors">{color_label}</p>
                    <span class="shoe-card__sale-price">{sale_price}</span>
                </div>
            </article>
        </a>
    }
}
