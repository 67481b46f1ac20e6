//! Bounded-range work-time queries.
//!
//! This module clips an employee's shifts to an arbitrary query window and
//! sums the overlapping portions.

use chrono::{Duration, NaiveDateTime};

use crate::error::{StatsError, StatsResult};
use crate::models::Schedule;

/// Computes the work time of one employee inside a query window.
///
/// Every matching shift that overlaps the window under the strict
/// open-interval test `shift.start < to && shift.end > from` contributes
/// its clipped portion `min(shift.end, to) - max(shift.start, from)`; a
/// shift that only touches a window boundary exactly is excluded.
///
/// Returns zero when no shift overlaps. Unlike [`employee_stats`], an
/// unknown employee is not an error here; the asymmetry is long-standing
/// behavior callers rely on.
///
/// [`employee_stats`]: fn@super::employee_stats
///
/// # Errors
///
/// [`StatsError::InvalidRange`] if `from` is after `to`. A degenerate
/// window with `from == to` is legal and yields zero.
///
/// # Examples
///
/// ```
/// use roster_stats::models::{Schedule, Shift};
/// use roster_stats::stats::work_time_in_range;
/// use chrono::{Duration, NaiveDateTime};
///
/// let parse = |s| NaiveDateTime::parse_from_str(s, "%Y-%m-%d %H:%M:%S").unwrap();
/// let schedule = Schedule::from(vec![Shift {
///     employee_id: "123".to_string(),
///     start: parse("2023-10-01 08:00:00"),
///     end: parse("2023-10-01 16:00:00"),
/// }]);
///
/// let worked = work_time_in_range(
///     &schedule,
///     parse("2023-10-01 12:00:00"),
///     parse("2023-10-02 00:00:00"),
///     "123",
/// )
/// .unwrap();
/// assert_eq!(worked, Duration::hours(4));
/// ```
pub fn work_time_in_range(
    schedule: &Schedule,
    from: NaiveDateTime,
    to: NaiveDateTime,
    employee_id: &str,
) -> StatsResult<Duration> {
    if from > to {
        return Err(StatsError::InvalidRange { from, to });
    }

    let mut total = Duration::zero();

    for shift in schedule.shifts_for(employee_id) {
        if shift.start < to && shift.end > from {
            total = total + (shift.end.min(to) - shift.start.max(from));
        }
    }

    Ok(total)
}
