//! Activity calendar payload as returned by the contributions API.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Highest intensity level the activity source reports
pub const MAX_INTENSITY_LEVEL: u8 = 4;

/// Contribution activity for one calendar day
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DailyActivity {
    pub date: NaiveDate,
    pub count: u32,
    #[serde(rename = "level")]
    pub intensity_level: u8,
}

impl DailyActivity {
    pub fn new(date: NaiveDate, count: u32, intensity_level: u8) -> Self {
        Self {
            date,
            count,
            intensity_level,
        }
    }
}

/// Yearly totals plus the chronologically ascending daily record
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct CalendarPayload {
    /// Contribution count keyed by year (or `lastYear` for a rolling window)
    #[serde(rename = "total", default)]
    pub totals: BTreeMap<String, u64>,
    pub contributions: Vec<DailyActivity>,
}

impl CalendarPayload {
    /// Check that days are strictly ascending and levels are in range
    pub fn validate(&self) -> Result<(), String> {
        for pair in self.contributions.windows(2) {
            if pair[1].date <= pair[0].date {
                return Err(format!(
                    "contributions out of order at {} (after {})",
                    pair[1].date, pair[0].date
                ));
            }
        }
        if let Some(day) = self
            .contributions
            .iter()
            .find(|day| day.intensity_level > MAX_INTENSITY_LEVEL)
        {
            return Err(format!(
                "intensity level {} out of range on {}",
                day.intensity_level, day.date
            ));
        }
        Ok(())
    }
}
