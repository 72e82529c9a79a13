//! Date-range presets for timestamp filters.
//!
//! Every dashboard offers the same small set of ranges ("today", "past
//! week", "past month"). A range is resolved against a caller-supplied
//! `now` so that matching stays deterministic and testable.
//!
//! Unknown range names are rejected at parse time with
//! [`KeepsakeError::InvalidFilter`]. Once constructed, resolving a cutoff
//! never fails.

use chrono::{DateTime, Duration, Months, Utc};

use crate::error::{KeepsakeError, Result};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DateRange {
    /// No cutoff; every timestamp matches.
    #[default]
    AnyTime,
    /// Since the start of the current day (UTC).
    Today,
    /// The last 7 days.
    PastWeek,
    /// The last calendar month.
    PastMonth,
}

impl DateRange {
    /// Parse a user-supplied range name.
    pub fn parse(input: &str) -> Result<Self> {
        match input.trim().to_ascii_lowercase().as_str() {
            "any" | "all" | "anytime" => Ok(DateRange::AnyTime),
            "today" => Ok(DateRange::Today),
            "week" | "past-week" => Ok(DateRange::PastWeek),
            "month" | "past-month" => Ok(DateRange::PastMonth),
            other => Err(KeepsakeError::InvalidFilter(format!(
                "unknown date range '{}' (expected any, today, week, or month)",
                other
            ))),
        }
    }

    /// The cutoff instant relative to `now`, or `None` for [`DateRange::AnyTime`].
    pub fn cutoff(&self, now: DateTime<Utc>) -> Option<DateTime<Utc>> {
        match self {
            DateRange::AnyTime => None,
            DateRange::Today => Some(
                now.date_naive()
                    .and_hms_opt(0, 0, 0)
                    .unwrap_or_default()
                    .and_utc(),
            ),
            DateRange::PastWeek => Some(now - Duration::days(7)),
            // Falls back to ~30 days if the calendar subtraction overflows
            DateRange::PastMonth => Some(
                now.checked_sub_months(Months::new(1))
                    .unwrap_or(now - Duration::days(30)),
            ),
        }
    }
}
