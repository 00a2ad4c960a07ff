//! Design tokens used by the card markup and stylesheet.

use serde::{Deserialize, Serialize};

/// Colour palette.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Colors {
    pub white: String,
    pub primary: String,
    pub secondary: String,
    pub gray700: String,
    pub gray900: String,
}

impl Default for Colors {
    fn default() -> Self {
        Self {
            white: "hsl(0deg 0% 100%)".to_string(),
            primary: "hsl(340deg 65% 47%)".to_string(),
            secondary: "hsl(240deg 60% 63%)".to_string(),
            gray700: "hsl(220deg 5% 40%)".to_string(),
            gray900: "hsl(220deg 3% 20%)".to_string(),
        }
    }
}

/// Font weights.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Weights {
    pub normal: u16,
    pub medium: u16,
    pub bold: u16,
}

impl Default for Weights {
    fn default() -> Self {
        Self {
            normal: 500,
            medium: 600,
            bold: 800,
        }
    }
}

/// Theme applied to rendered cards.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Theme {
    pub colors: Colors,
    pub weights: Weights,
}
