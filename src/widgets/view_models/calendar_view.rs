//! # Calendar View
//!
//! Lays the recent activity window out as a week-column grid, the way a
//! contribution calendar is drawn: one column per week, Sunday at the top.

use super::transform::select_recent_window;
use crate::widgets::models::{CalendarPayload, DailyActivity};
use chrono::{Datelike, Duration};

/// Intensity levels for one week, indexed Sunday (0) to Saturday (6)
pub type WeekColumn = [Option<u8>; 7];

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CalendarView {
    days: Vec<DailyActivity>,
    weeks: Vec<WeekColumn>,
    month_labels: Vec<(usize, String)>,
}

impl CalendarView {
    /// Build the grid for the trailing `window` days of `payload`
    pub fn from_payload(payload: &CalendarPayload, window: usize) -> Self {
        let days = select_recent_window(&payload.contributions, window).to_vec();

        let Some(first) = days.first() else {
            return Self {
                days,
                weeks: Vec::new(),
                month_labels: Vec::new(),
            };
        };

        let week_start =
            first.date - Duration::days(i64::from(first.date.weekday().num_days_from_sunday()));

        let mut weeks: Vec<WeekColumn> = Vec::new();
        let mut month_labels: Vec<(usize, String)> = Vec::new();
        let mut last_month = None;

        for day in &days {
            let offset = usize::try_from((day.date - week_start).num_days()).unwrap_or(0);
            let (column, row) = (offset / 7, offset % 7);
            if weeks.len() <= column {
                weeks.resize(column + 1, [None; 7]);
            }
            weeks[column][row] = Some(day.intensity_level);

            let month = (day.date.year(), day.date.month());
            if last_month != Some(month) {
                last_month = Some(month);
                let label = day.date.format("%b").to_string();
                match month_labels.last_mut() {
                    // a week spanning a month boundary is labelled with the newer month
                    Some((labelled, text)) if *labelled == column => *text = label,
                    _ => month_labels.push((column, label)),
                }
            }
        }

        Self {
            days,
            weeks,
            month_labels,
        }
    }

    /// Windowed days in chronological order
    pub fn days(&self) -> &[DailyActivity] {
        &self.days
    }

    pub fn weeks(&self) -> &[WeekColumn] {
        &self.weeks
    }

    /// `(week column, abbreviated month)` pairs
    pub fn month_labels(&self) -> &[(usize, String)] {
        &self.month_labels
    }
}
