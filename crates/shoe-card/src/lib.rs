//! Shoe listing cards.
//!
//! This crate turns a [`Listing`] into a product card:
//!
//! - **Variant**: every listing is exactly one of on-sale, new-release or default
//! - **Money**: cents-based prices formatted per currency
//! - **View**: a plain render tree ([`CardView`]) built without side effects
//! - **HTML**: escaped markup and a stylesheet derived from the [`Theme`]
//!
//! # Example
//!
//! ```rust
//! use chrono::NaiveDate;
//! use shoe_card::prelude::*;
//!
//! let listing = Listing {
//!     slug: "tail-lights".to_string(),
//!     name: "Tail Lights".to_string(),
//!     image_src: "/assets/tail-lights.jpg".to_string(),
//!     price: 10000,
//!     sale_price: Some(5000),
//!     release_date: NaiveDate::from_ymd_opt(2026, 1, 1).unwrap(),
//!     num_of_colors: 1,
//! };
//!
//! let today = NaiveDate::from_ymd_opt(2026, 1, 1).unwrap();
//! let card = build_card(&listing, &CardConfig::default(), today);
//! assert_eq!(card.variant, Variant::OnSale);
//! assert!(render_card(&card).contains("Sale"));
//! ```

pub mod config;
pub mod error;
pub mod html;
pub mod listing;
pub mod money;
pub mod recency;
pub mod text;
pub mod theme;
pub mod variant;
pub mod view;

#[cfg(feature = "leptos")]
pub mod component;

pub use config::CardConfig;
pub use error::{ConfigError, ListingError};
pub use listing::Listing;
pub use money::{format_price, Currency, Money};
pub use variant::{classify, Variant};
pub use view::{build_card, CardView};

/// Prelude for convenient imports.
pub mod prelude {
    pub use crate::config::CardConfig;
    pub use crate::error::{ConfigError, ListingError};
    pub use crate::html::{
        card_styles, grid_from_rendered, page_from_grid, render_card, render_grid, render_page,
    };
    pub use crate::listing::Listing;
    pub use crate::money::{format_price, Currency, Money};
    pub use crate::recency::RecencyWindow;
    pub use crate::text::pluralize;
    pub use crate::theme::{Colors, Theme, Weights};
    pub use crate::variant::{classify, Badge, BadgeTone, Variant};
    pub use crate::view::{build_card, build_card_today, CardView, PriceLabel};

    #[cfg(feature = "leptos")]
    pub use crate::component::ShoeCard;
}
