// Event layout engine
// Deterministic row assignment for week strips of a calendar grid: sorts the
// filtered events, maps each onto its clamped day-column range, then packs
// them greedily into the lowest free row.

use chrono::Duration;

use super::filter;
use super::occupancy::OccupancyGrid;
use super::LayoutError;
use crate::models::event::CalendarEvent;
use crate::models::layout::{LayoutAssignment, LayoutRecord, Rejection, VisibleWindow};

/// Default cap on stacked rows per week strip. Events beyond it are dropped
/// from the visual layout and reported, bounding worst-case output size.
pub const DEFAULT_MAX_ROWS: usize = 10;

/// Stateless layout engine; `max_rows` is its only configuration. Holds no
/// caches and never mutates input events, so a single instance may be used
/// from any number of callers at once.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LayoutEngine {
    max_rows: usize,
}

impl Default for LayoutEngine {
    fn default() -> Self {
        Self {
            max_rows: DEFAULT_MAX_ROWS,
        }
    }
}

/// Everything one layout pass produces. Counts for a "+N more" affordance
/// come from `overflowed` plus the lengths here; the engine itself never
/// renders anything.
#[derive(Debug, Default)]
pub struct LayoutResult<'a> {
    /// Placed events, in placement order (start ascending, then longer
    /// first). Callers needing row grouping re-sort.
    pub assignments: Vec<LayoutAssignment<'a>>,
    /// Malformed events excluded at the validation boundary.
    pub rejected: Vec<Rejection>,
    /// Ids of events that overlapped the window but found no free row
    /// within `max_rows`.
    pub overflowed: Vec<String>,
}

impl LayoutResult<'_> {
    /// Owned, serializable copies of the assignments.
    pub fn records(&self) -> Vec<LayoutRecord> {
        self.assignments.iter().map(LayoutRecord::from).collect()
    }
}

impl LayoutEngine {
    pub fn new(max_rows: usize) -> Self {
        Self { max_rows }
    }

    pub fn max_rows(&self) -> usize {
        self.max_rows
    }

    /// Lay out `events` over one window strip.
    ///
    /// The computation is a pure function of its inputs: the same events in
    /// the same order always yield the identical result.
    ///
    /// Sort order is effective start ascending, ties broken by duration
    /// descending — among events starting together the longer one is placed
    /// first, which keeps multi-day bars stable at the top of the stack.
    pub fn layout<'a>(
        &self,
        events: &'a [CalendarEvent],
        window: &VisibleWindow,
    ) -> LayoutResult<'a> {
        let filtered = filter::filter_window(events, window);
        let mut candidates = filtered.accepted;
        candidates.sort_by(|a, b| {
            a.start_wall_clock()
                .cmp(&b.start_wall_clock())
                .then_with(|| b.duration().cmp(&a.duration()))
        });

        let mut result = LayoutResult {
            assignments: Vec::with_capacity(candidates.len()),
            rejected: filtered.rejected,
            overflowed: Vec::new(),
        };

        let last_column = (window.days() - 1) as i64;
        let mut grid = OccupancyGrid::new(window.days(), self.max_rows);

        for event in candidates {
            let start_offset = window.day_offset(event.start_date());
            let mut end_offset = window.day_offset(event.end_date());
            if event.is_all_day() {
                // All-day end dates are exclusive: a one-day event must
                // occupy exactly one column.
                end_offset -= 1;
            }

            let is_clipped_start = start_offset < 0;
            let is_clipped_end = end_offset > last_column;
            let first = start_offset.clamp(0, last_column) as usize;
            let last = end_offset.clamp(0, last_column) as usize;
            if first > last {
                // The filter guarantees overlap and screens out zero-length
                // all-day ranges, so clamping cannot invert the range.
                // Defensive no-op rather than a panic if it ever does.
                continue;
            }

            match grid.place(first, last) {
                Some(row) => result.assignments.push(LayoutAssignment {
                    event,
                    row,
                    start_column: first,
                    span: last - first + 1,
                    is_clipped_start,
                    is_clipped_end,
                }),
                None => {
                    log::warn!(
                        "event {} overflows the {}-row cap for window starting {}",
                        event.id,
                        self.max_rows,
                        window.start()
                    );
                    result.overflowed.push(event.id.clone());
                }
            }
        }

        result
    }

    /// Lay out a multi-week window one 7-day segment at a time, the way a
    /// month grid renders: each week strip stacks its events independently
    /// and columns restart at 0 per segment.
    ///
    /// # Returns
    /// `LayoutError::UnevenWindow` when the window is not a whole number of
    /// weeks — the same class of call-site bug as an empty window.
    pub fn layout_month<'a>(
        &self,
        events: &'a [CalendarEvent],
        window: &VisibleWindow,
    ) -> Result<Vec<LayoutResult<'a>>, LayoutError> {
        if window.days() % 7 != 0 {
            return Err(LayoutError::UnevenWindow {
                days: window.days(),
            });
        }

        let weeks = window.days() / 7;
        let mut segments = Vec::with_capacity(weeks);
        for segment in 0..weeks {
            let week_start = window.start() + Duration::days(7 * segment as i64);
            segments.push(self.layout(events, &VisibleWindow::week(week_start)));
        }
        Ok(segments)
    }
}
