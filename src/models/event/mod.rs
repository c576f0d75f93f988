// Event module
// Plain calendar event records consumed by the layout engine

use chrono::{DateTime, Duration, Local, NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// A point on the calendar: either a wall-clock instant or a whole day.
///
/// All-day dates follow the common calendar-API convention of an exclusive
/// end: an all-day event covering one day ends on the following date.
///
/// On the wire each side is `{ "instant": <RFC 3339> }` or
/// `{ "date": "YYYY-MM-DD" }`, exactly one of the two.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "EventTimeRepr", into = "EventTimeRepr")]
pub enum EventTime {
    Timed(DateTime<Local>),
    AllDay(NaiveDate),
}

impl EventTime {
    pub fn is_all_day(&self) -> bool {
        matches!(self, EventTime::AllDay(_))
    }

    /// The calendar day this point falls on.
    pub fn date(&self) -> NaiveDate {
        match self {
            EventTime::Timed(instant) => instant.date_naive(),
            EventTime::AllDay(date) => *date,
        }
    }

    /// Wall-clock position used for window-overlap comparisons.
    /// All-day dates sit at midnight, which makes the exclusive-end
    /// convention line up with half-open interval checks.
    pub fn wall_clock(&self) -> NaiveDateTime {
        match self {
            EventTime::Timed(instant) => instant.naive_local(),
            EventTime::AllDay(date) => date.and_hms_opt(0, 0, 0).unwrap(),
        }
    }
}

/// Wire shape for one side of an event: `instant` xor `date`.
#[derive(Serialize, Deserialize)]
struct EventTimeRepr {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    instant: Option<DateTime<Local>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    date: Option<NaiveDate>,
}

impl TryFrom<EventTimeRepr> for EventTime {
    type Error = String;

    fn try_from(repr: EventTimeRepr) -> Result<Self, Self::Error> {
        match (repr.instant, repr.date) {
            (Some(instant), None) => Ok(EventTime::Timed(instant)),
            (None, Some(date)) => Ok(EventTime::AllDay(date)),
            (Some(_), Some(_)) => Err("event time must not carry both instant and date".into()),
            (None, None) => Err("event time requires either instant or date".into()),
        }
    }
}

impl From<EventTime> for EventTimeRepr {
    fn from(time: EventTime) -> Self {
        match time {
            EventTime::Timed(instant) => EventTimeRepr {
                instant: Some(instant),
                date: None,
            },
            EventTime::AllDay(date) => EventTimeRepr {
                instant: None,
                date: Some(date),
            },
        }
    }
}

/// Why an event was excluded from layout at the validation boundary.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum InvalidEventReason {
    #[error("event end precedes its start")]
    EndBeforeStart,
    #[error("event mixes an all-day side with a timed side")]
    MixedVariants,
}

/// Calendar event as handed over by the client's data layer.
///
/// Immutable for the duration of one layout computation; the engine borrows
/// events and never copies or mutates them.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CalendarEvent {
    /// Opaque identifier. Used only for identity, never parsed.
    pub id: String,
    pub start: EventTime,
    /// Absent means a zero-duration event at `start`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub end: Option<EventTime>,
}

impl CalendarEvent {
    /// Create a timed event.
    ///
    /// # Examples
    /// ```
    /// use zen_calendar_layout::models::event::CalendarEvent;
    /// use chrono::{Local, TimeZone};
    ///
    /// let start = Local.with_ymd_and_hms(2024, 6, 4, 9, 0, 0).unwrap();
    /// let event = CalendarEvent::timed("standup", start, Some(start + chrono::Duration::hours(1)));
    /// assert!(!event.is_all_day());
    /// ```
    pub fn timed(
        id: impl Into<String>,
        start: DateTime<Local>,
        end: Option<DateTime<Local>>,
    ) -> Self {
        Self {
            id: id.into(),
            start: EventTime::Timed(start),
            end: end.map(EventTime::Timed),
        }
    }

    /// Create an all-day event. `end` is exclusive: a one-day event ends on
    /// the date after it starts.
    pub fn all_day(id: impl Into<String>, start: NaiveDate, end: Option<NaiveDate>) -> Self {
        Self {
            id: id.into(),
            start: EventTime::AllDay(start),
            end: end.map(EventTime::AllDay),
        }
    }

    /// Validate the event.
    ///
    /// All-day-ness is a property of the whole event: a record mixing an
    /// all-day side with a timed side is malformed rather than interpreted
    /// from its start field alone.
    pub fn validate(&self) -> Result<(), InvalidEventReason> {
        if let Some(end) = self.end {
            if end.is_all_day() != self.start.is_all_day() {
                return Err(InvalidEventReason::MixedVariants);
            }
            if end.wall_clock() < self.start.wall_clock() {
                return Err(InvalidEventReason::EndBeforeStart);
            }
        }
        Ok(())
    }

    /// The end, defaulted to the start when absent.
    pub fn effective_end(&self) -> EventTime {
        self.end.unwrap_or(self.start)
    }

    /// True iff both sides are calendar dates without a time component.
    pub fn is_all_day(&self) -> bool {
        self.start.is_all_day() && self.effective_end().is_all_day()
    }

    pub fn start_wall_clock(&self) -> NaiveDateTime {
        self.start.wall_clock()
    }

    pub fn end_wall_clock(&self) -> NaiveDateTime {
        self.effective_end().wall_clock()
    }

    /// Calendar day of the start.
    pub fn start_date(&self) -> NaiveDate {
        self.start.date()
    }

    /// Calendar day of the effective end. For all-day events this is the
    /// exclusive end date; the engine adjusts for that when mapping columns.
    pub fn end_date(&self) -> NaiveDate {
        self.effective_end().date()
    }

    /// Get the duration of the event. Zero when the end is absent.
    pub fn duration(&self) -> Duration {
        self.end_wall_clock() - self.start_wall_clock()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn end_defaults_to_start() {
        let start = Local.with_ymd_and_hms(2024, 6, 4, 9, 0, 0).unwrap();
        let event = CalendarEvent::timed("e1", start, None);
        assert_eq!(event.effective_end(), EventTime::Timed(start));
        assert_eq!(event.duration(), Duration::zero());
        assert!(event.validate().is_ok());
    }

    #[test]
    fn end_before_start_is_invalid() {
        let start = Local.with_ymd_and_hms(2024, 6, 4, 9, 0, 0).unwrap();
        let event = CalendarEvent::timed("e1", start, Some(start - Duration::minutes(30)));
        assert_eq!(event.validate(), Err(InvalidEventReason::EndBeforeStart));
    }

    #[test]
    fn mixed_variants_are_invalid() {
        let event = CalendarEvent {
            id: "e1".into(),
            start: EventTime::AllDay(date(2024, 6, 4)),
            end: Some(EventTime::Timed(
                Local.with_ymd_and_hms(2024, 6, 4, 17, 0, 0).unwrap(),
            )),
        };
        assert_eq!(event.validate(), Err(InvalidEventReason::MixedVariants));
    }

    #[test]
    fn all_day_requires_both_sides() {
        let all_day = CalendarEvent::all_day("e1", date(2024, 1, 1), Some(date(2024, 1, 2)));
        assert!(all_day.is_all_day());
        assert_eq!(all_day.duration(), Duration::days(1));

        let start = Local.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap();
        let timed = CalendarEvent::timed("e2", start, Some(start + Duration::days(1)));
        assert!(!timed.is_all_day());
    }

    #[test]
    fn wire_shape_round_trips() {
        let json = r#"{"id":"abc","start":{"date":"2024-01-01"},"end":{"date":"2024-01-02"}}"#;
        let event: CalendarEvent = serde_json::from_str(json).unwrap();
        assert_eq!(
            event,
            CalendarEvent::all_day("abc", date(2024, 1, 1), Some(date(2024, 1, 2)))
        );
        assert_eq!(serde_json::to_string(&event).unwrap(), json);
    }

    #[test]
    fn wire_shape_rejects_both_or_neither() {
        let both = r#"{"id":"x","start":{"instant":"2024-01-01T09:00:00+00:00","date":"2024-01-01"}}"#;
        assert!(serde_json::from_str::<CalendarEvent>(both).is_err());
        let neither = r#"{"id":"x","start":{}}"#;
        assert!(serde_json::from_str::<CalendarEvent>(neither).is_err());
    }
}
