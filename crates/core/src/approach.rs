//! Close-approach window computation and filtering.
//!
//! Detail queries narrow an asteroid's approach history to a window of
//! one calendar year either side of "now". The offset is calendar
//! arithmetic ([`chrono::Months`]), not a fixed day count, so leap
//! years are respected.

use chrono::{Months, NaiveDateTime};

use crate::asteroid::ApproachEvent;
use crate::error::CoreError;

/// Textual format of `close_approach_date_full` (`Sep 08, 2024 20:28`).
pub const APPROACH_DATE_FORMAT: &str = "%b %d, %Y %H:%M";

/// Calendar-month offset applied either side of "now".
const WINDOW_MONTHS: u32 = 12;

/// An exclusive time window around a reference instant.
///
/// Events exactly on either bound are outside the window.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ApproachWindow {
    start: NaiveDateTime,
    end: NaiveDateTime,
}

impl ApproachWindow {
    /// Build the `[now - 1 year, now + 1 year]` window around `now`.
    pub fn centered_on(now: NaiveDateTime) -> Result<Self, CoreError> {
        let start = now
            .checked_sub_months(Months::new(WINDOW_MONTHS))
            .ok_or_else(|| CoreError::Internal("approach window start out of range".to_string()))?;
        let end = now
            .checked_add_months(Months::new(WINDOW_MONTHS))
            .ok_or_else(|| CoreError::Internal("approach window end out of range".to_string()))?;
        Ok(Self { start, end })
    }

    /// Whether `at` falls strictly inside the window.
    pub fn contains(&self, at: NaiveDateTime) -> bool {
        at > self.start && at < self.end
    }
}

/// Parse a `close_approach_date_full` value.
pub fn parse_approach_date(text: &str) -> Result<NaiveDateTime, CoreError> {
    NaiveDateTime::parse_from_str(text, APPROACH_DATE_FORMAT)
        .map_err(|_| CoreError::MalformedData(format!("unparseable approach date: {text}")))
}

/// Filter approach events to those strictly inside `window`,
/// preserving their relative order.
///
/// A record with a missing or unparseable `close_approach_date_full`
/// fails the whole call rather than being skipped.
pub fn filter_approaches(
    events: Vec<ApproachEvent>,
    window: &ApproachWindow,
) -> Result<Vec<ApproachEvent>, CoreError> {
    let mut kept = Vec::with_capacity(events.len());
    for event in events {
        let text = event.close_approach_date_full.as_deref().ok_or_else(|| {
            CoreError::MalformedData("approach record missing close_approach_date_full".to_string())
        })?;
        if window.contains(parse_approach_date(text)?) {
            kept.push(event);
        }
    }
    Ok(kept)
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
