//! Release-date recency check.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Default window: anything released in the last month is new.
pub const DEFAULT_WINDOW_DAYS: u32 = 30;

/// The span of days within which a release counts as new.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct RecencyWindow {
    pub days: u32,
}

impl Default for RecencyWindow {
    fn default() -> Self {
        Self {
            days: DEFAULT_WINDOW_DAYS,
        }
    }
}

impl RecencyWindow {
    /// Create a window of `days` days.
    pub fn new(days: u32) -> Self {
        Self { days }
    }

    /// True when fewer than `days` days separate `release` from `today`.
    ///
    /// Releases dated after `today` are announced drops and count as recent.
    pub fn is_recent(&self, release: NaiveDate, today: NaiveDate) -> bool {
        (today - release).num_days() < i64::from(self.days)
    }
}
