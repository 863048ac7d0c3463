//! Date-range validation for feed queries.
//!
//! The upstream feed accepts at most a 7-day inclusive window, so the
//! range is parsed and bounded here, before any upstream request is
//! issued.

use chrono::NaiveDate;

use crate::error::CoreError;

/// Textual date format the feed expects (`2024-01-07`).
pub const FEED_DATE_FORMAT: &str = "%Y-%m-%d";

/// Maximum inclusive span the feed accepts, in days.
pub const MAX_RANGE_DAYS: i64 = 7;

/// A validated, inclusive calendar-date interval.
///
/// Constructed per request via [`DateRange::parse`]; never persisted.
/// Invariants: `start <= end` and [`span_days`](Self::span_days) is
/// at most [`MAX_RANGE_DAYS`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DateRange {
    pub start: NaiveDate,
    pub end: NaiveDate,
}

impl DateRange {
    /// Parse and validate a requested date interval.
    ///
    /// Fails with [`CoreError::InvalidRange`] when either bound does
    /// not parse as `YYYY-MM-DD`, when the range is reversed, or when
    /// the inclusive span exceeds [`MAX_RANGE_DAYS`].
    pub fn parse(start_text: &str, end_text: &str) -> Result<Self, CoreError> {
        let start = parse_date(start_text)?;
        let end = parse_date(end_text)?;

        if start > end {
            return Err(CoreError::InvalidRange(
                "Start date must not be after end date.".to_string(),
            ));
        }

        let range = Self { start, end };
        if range.span_days() > MAX_RANGE_DAYS {
            return Err(CoreError::InvalidRange(
                "Date range cannot exceed 7 days.".to_string(),
            ));
        }

        Ok(range)
    }

    /// Inclusive day span: a single-day range spans 1.
    pub fn span_days(&self) -> i64 {
        (self.end - self.start).num_days() + 1
    }
}

fn parse_date(text: &str) -> Result<NaiveDate, CoreError> {
    NaiveDate::parse_from_str(text, FEED_DATE_FORMAT)
        .map_err(|_| CoreError::InvalidRange(format!("Unparseable date: {text}")))
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
