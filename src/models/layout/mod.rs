// Layout model module
// Window descriptors and the records the layout engine emits

use chrono::{Duration, NaiveDate, NaiveDateTime, Weekday};
use serde::Serialize;
use thiserror::Error;

use crate::models::event::{CalendarEvent, InvalidEventReason};
use crate::utils::date;

/// Hard failures, all of them window mis-constructions at the call site.
/// Recoverable conditions (malformed events, capacity overflow) travel
/// inside the layout result instead — a calendar view must always render
/// something for a given day.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum LayoutError {
    #[error("visible window must contain at least one day")]
    EmptyWindow,
    #[error("invalid calendar month {month} of year {year}")]
    InvalidMonth { year: i32, month: u32 },
    #[error("window of {days} days cannot be split into whole weeks")]
    UnevenWindow { days: usize },
}

/// A contiguous run of whole calendar days currently rendered: one week, or
/// a 6-week month grid. Half-open: `[start, start + days)`.
///
/// Construction validates the day count, so a window in hand is always
/// non-degenerate.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct VisibleWindow {
    start: NaiveDate,
    days: usize,
}

impl VisibleWindow {
    /// Create a window of `days` consecutive days starting at `start`.
    ///
    /// # Returns
    /// `LayoutError::EmptyWindow` when `days` is zero — that is a window
    /// mis-construction bug at the call site, not a recoverable condition.
    pub fn new(start: NaiveDate, days: usize) -> Result<Self, LayoutError> {
        if days == 0 {
            return Err(LayoutError::EmptyWindow);
        }
        Ok(Self { start, days })
    }

    /// A 7-day window starting at `start`.
    pub fn week(start: NaiveDate) -> Self {
        Self { start, days: 7 }
    }

    /// The 42-day (6-week) grid for a month: begins on the `week_start`-aligned
    /// day of the week containing the 1st.
    pub fn month_grid(year: i32, month: u32, week_start: Weekday) -> Result<Self, LayoutError> {
        let start = date::month_grid_start(year, month, week_start)
            .ok_or(LayoutError::InvalidMonth { year, month })?;
        Ok(Self { start, days: 42 })
    }

    pub fn start(&self) -> NaiveDate {
        self.start
    }

    pub fn days(&self) -> usize {
        self.days
    }

    /// The first day no longer inside the window.
    pub fn end_exclusive(&self) -> NaiveDate {
        self.start + Duration::days(self.days as i64)
    }

    pub fn start_wall_clock(&self) -> NaiveDateTime {
        self.start.and_hms_opt(0, 0, 0).unwrap()
    }

    pub fn end_wall_clock(&self) -> NaiveDateTime {
        self.end_exclusive().and_hms_opt(0, 0, 0).unwrap()
    }

    /// Signed day index of `day` relative to the window start. Negative
    /// before the window, `>= days` past it.
    pub fn day_offset(&self, day: NaiveDate) -> i64 {
        date::days_from(self.start, day)
    }
}

/// One placed event: its row within the week strip and the inclusive
/// day-index range it occupies, clamped to the window.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LayoutAssignment<'a> {
    pub event: &'a CalendarEvent,
    /// Vertical slot, 0 at the top.
    pub row: usize,
    /// First occupied day index, in `[0, days)`.
    pub start_column: usize,
    /// Number of occupied columns, in `[1, days - start_column]`.
    pub span: usize,
    /// True when the event's true start lies before the window, so the
    /// rendered bar should omit its leading cap.
    pub is_clipped_start: bool,
    /// True when the event's true end lies past the window.
    pub is_clipped_end: bool,
}

/// Owned, serializable form of an assignment for callers on the other side
/// of a process or language boundary.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LayoutRecord {
    pub event_id: String,
    pub row: usize,
    pub start_column: usize,
    pub span: usize,
    pub is_clipped_start: bool,
    pub is_clipped_end: bool,
}

impl From<&LayoutAssignment<'_>> for LayoutRecord {
    fn from(assignment: &LayoutAssignment<'_>) -> Self {
        Self {
            event_id: assignment.event.id.clone(),
            row: assignment.row,
            start_column: assignment.start_column,
            span: assignment.span,
            is_clipped_start: assignment.is_clipped_start,
            is_clipped_end: assignment.is_clipped_end,
        }
    }
}

/// A malformed event excluded at the validation boundary.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Rejection {
    pub id: String,
    pub reason: InvalidEventReason,
}
