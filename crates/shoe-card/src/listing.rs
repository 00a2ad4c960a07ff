//! Shoe listing input.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::error::ListingError;

/// A shoe listing as handed to the card.
///
/// Prices are in the smallest currency unit. Field names also accept the
/// camelCase spelling used by storefront JSON feeds (`imageSrc`, `salePrice`,
/// `releaseDate`, `numOfColors`).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Listing {
    /// URL-friendly identifier.
    pub slug: String,
    /// Display name.
    pub name: String,
    /// Product image URL.
    #[serde(alias = "imageSrc")]
    pub image_src: String,
    /// Base price.
    pub price: i64,
    /// Discounted price, present only while on sale.
    #[serde(default, alias = "salePrice", skip_serializing_if = "Option::is_none")]
    pub sale_price: Option<i64>,
    /// Release date (YYYY-MM-DD).
    #[serde(alias = "releaseDate")]
    pub release_date: NaiveDate,
    /// Number of colourways.
    #[serde(alias = "numOfColors")]
    pub num_of_colors: u32,
}

impl Listing {
    /// Whether a sale price is set.
    pub fn is_on_sale(&self) -> bool {
        self.sale_price.is_some()
    }

    /// Check the listing for values a storefront should never publish.
    ///
    /// Rendering does not require this; it is for loaders that want to reject
    /// bad feed rows up front.
    pub fn validate(&self) -> Result<(), ListingError> {
        if self.slug.trim().is_empty() {
            return Err(ListingError::EmptySlug);
        }
        if self.name.trim().is_empty() {
            return Err(ListingError::EmptyName(self.slug.clone()));
        }
        if self.price < 0 {
            return Err(ListingError::NegativePrice {
                slug: self.slug.clone(),
                field: "price",
                amount: self.price,
            });
        }
        if let Some(sale_price) = self.sale_price {
            if sale_price < 0 {
                return Err(ListingError::NegativePrice {
                    slug: self.slug.clone(),
                    field: "sale_price",
                    amount: sale_price,
                });
            }
            if sale_price >= self.price {
                return Err(ListingError::SaleNotDiscounted {
                    slug: self.slug.clone(),
                    price: self.price,
                    sale_price,
                });
            }
        }
        Ok(())
    }
}
