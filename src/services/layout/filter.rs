// Window filtering and boundary validation
// Selects the events that overlap a visible window and screens out
// malformed records so the engine only ever sees well-formed input.

use crate::models::event::CalendarEvent;
use crate::models::layout::{Rejection, VisibleWindow};

/// Result of one filter pass: borrowed survivors plus the records excluded
/// at the boundary. Order of `accepted` is not significant; the engine
/// re-sorts.
#[derive(Debug, Default)]
pub struct FilterOutcome<'a> {
    pub accepted: Vec<&'a CalendarEvent>,
    pub rejected: Vec<Rejection>,
}

/// Select the events overlapping `window`.
///
/// Overlap is the standard half-open check: an event is kept iff its
/// effective start precedes the window end AND its effective end follows
/// the window start. A zero-duration timed event therefore shows up only
/// when its instant lies strictly inside the window; one sitting exactly on
/// the window start is out. An all-day event whose exclusive end equals its
/// start covers no day at all, so it never overlaps anything — excluding it
/// here keeps the engine's accounting exact (placed + overflowed always
/// equals the accepted count).
///
/// Malformed events (end before start, mixed all-day/timed sides) are not
/// errors: they land in `rejected` with their reason so the caller can log
/// or surface a warning, and the rest of the view still renders.
pub fn filter_window<'a>(
    events: &'a [CalendarEvent],
    window: &VisibleWindow,
) -> FilterOutcome<'a> {
    let window_start = window.start_wall_clock();
    let window_end = window.end_wall_clock();

    let mut outcome = FilterOutcome::default();
    for event in events {
        match event.validate() {
            Err(reason) => {
                log::warn!("excluding malformed event {}: {}", event.id, reason);
                outcome.rejected.push(Rejection {
                    id: event.id.clone(),
                    reason,
                });
            }
            Ok(()) => {
                // Zero-length all-day range: no day to occupy.
                if event.is_all_day() && event.end_date() == event.start_date() {
                    continue;
                }
                if event.start_wall_clock() < window_end && event.end_wall_clock() > window_start {
                    outcome.accepted.push(event);
                }
            }
        }
    }

    log::debug!(
        "{} of {} events overlap the {}-day window starting {}",
        outcome.accepted.len(),
        events.len(),
        window.days(),
        window.start()
    );
    outcome
}
