//! Card variant classification.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::recency::RecencyWindow;

/// Display mode of a card. Exactly one applies to any listing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "kebab-case")]
pub enum Variant {
    /// A sale price is set.
    OnSale,
    /// No sale price and released within the recency window.
    NewRelease,
    /// Neither of the above.
    #[default]
    Default,
}

impl Variant {
    pub fn as_str(&self) -> &'static str {
        match self {
            Variant::OnSale => "on-sale",
            Variant::NewRelease => "new-release",
            Variant::Default => "default",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "on-sale" => Some(Variant::OnSale),
            "new-release" => Some(Variant::NewRelease),
            "default" => Some(Variant::Default),
            _ => None,
        }
    }

    /// Status tag overlaid on the image, if any.
    pub fn badge(&self) -> Option<Badge> {
        match self {
            Variant::OnSale => Some(Badge {
                label: "Sale",
                tone: BadgeTone::Primary,
            }),
            Variant::NewRelease => Some(Badge {
                label: "Just released!",
                tone: BadgeTone::Secondary,
            }),
            Variant::Default => None,
        }
    }

    /// All variants, in precedence order.
    pub fn all() -> [Variant; 3] {
        [Variant::OnSale, Variant::NewRelease, Variant::Default]
    }
}

impl std::fmt::Display for Variant {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Accent colour of a badge.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BadgeTone {
    Primary,
    Secondary,
}

/// Status tag shown on the card image.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct Badge {
    pub label: &'static str,
    pub tone: BadgeTone,
}

impl Badge {
    /// CSS modifier class for this badge.
    pub fn class(&self) -> &'static str {
        match self.tone {
            BadgeTone::Primary => "shoe-card__tag--sale",
            BadgeTone::Secondary => "shoe-card__tag--new",
        }
    }
}

/// Pick the variant for a listing.
///
/// A sale price wins over a recent release date.
pub fn classify(
    sale_price: Option<i64>,
    release_date: NaiveDate,
    window: &RecencyWindow,
    today: NaiveDate,
) -> Variant {
    if sale_price.is_some() {
        Variant::OnSale
    } else if window.is_recent(release_date, today) {
        Variant::NewRelease
    } else {
        Variant::Default
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Duration;

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2026, 10, 19).unwrap()
    }

    #[test]
    fn test_sale_wins_over_recent_release() {
        let window = RecencyWindow::default();
        assert_eq!(classify(Some(5000), today(), &window, today()), Variant::OnSale);
    }

    #[test]
    fn test_sale_with_old_release() {
        let window = RecencyWindow::default();
        let old = today() - Duration::days(800);
        assert_eq!(classify(Some(0), old, &window, today()), Variant::OnSale);
    }

    #[test]
    fn test_recent_without_sale() {
        let window = RecencyWindow::default();
        let release = today() - Duration::days(10);
        assert_eq!(classify(None, release, &window, today()), Variant::NewRelease);
    }

    #[test]
    fn test_old_without_sale() {
        let window = RecencyWindow::default();
        let release = today() - Duration::days(730);
        assert_eq!(classify(None, release, &window, today()), Variant::Default);
    }

    #[test]
    fn test_window_is_configurable() {
        let release = today() - Duration::days(45);
        assert_eq!(
            classify(None, release, &RecencyWindow::new(60), today()),
            Variant::NewRelease
        );
        assert_eq!(
            classify(None, release, &RecencyWindow::new(30), today()),
            Variant::Default
        );
    }

    #[test]
    fn test_badges() {
        assert_eq!(Variant::OnSale.badge().map(|b| b.label), Some("Sale"));
        assert_eq!(
            Variant::NewRelease.badge().map(|b| b.label),
            Some("Just released!")
        );
        assert_eq!(Variant::Default.badge(), None);
    }

    #[test]
    fn test_variant_round_trips_str() {
        for v in Variant::all() {
            assert_eq!(Variant::from_str(v.as_str()), Some(v));
        }
        assert_eq!(Variant::from_str("clearance"), None);
    }
}
