// Date utility functions
// Whole-day arithmetic over calendar dates, so DST and sub-day timing can
// never shift an event into the wrong grid column.

use chrono::{Datelike, Duration, NaiveDate, Weekday};

/// Whole-day offset of `date` from `origin`. Negative when `date` is earlier.
pub fn days_from(origin: NaiveDate, date: NaiveDate) -> i64 {
    (date - origin).num_days()
}

/// First day of the week containing `date`, for a week beginning on `week_start`.
pub fn week_start_of(date: NaiveDate, week_start: Weekday) -> NaiveDate {
    let days_back = (date.weekday().num_days_from_monday() + 7
        - week_start.num_days_from_monday())
        % 7;
    date - Duration::days(days_back as i64)
}

/// First cell of a month grid: the `week_start`-aligned day of the week
/// containing the 1st of the month. `None` for an invalid year/month pair.
pub fn month_grid_start(year: i32, month: u32, week_start: Weekday) -> Option<NaiveDate> {
    let first_of_month = NaiveDate::from_ymd_opt(year, month, 1)?;
    Some(week_start_of(first_of_month, week_start))
}
