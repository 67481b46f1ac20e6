//! Span between two shifts.

use chrono::Duration;

use crate::error::{StatsError, StatsResult};
use crate::models::Shift;

/// Computes the span from the start of the first shift to the end of the
/// second.
///
/// This is deliberately a span, not a gap: the result covers both shifts
/// and anything between them, `second.end - first.start`.
///
/// # Errors
///
/// - [`StatsError::MissingShift`] if either shift reference is absent.
/// - [`StatsError::InvalidShift`] if either shift has its end before its
///   own start.
///
/// # Examples
///
/// ```
/// use roster_stats::models::Shift;
/// use roster_stats::stats::time_diff_between_shifts;
/// use chrono::{Duration, NaiveDateTime};
///
/// let parse = |s| NaiveDateTime::parse_from_str(s, "%Y-%m-%d %H:%M:%S").unwrap();
/// let first = Shift {
///     employee_id: "123".to_string(),
///     start: parse("2023-10-01 08:00:00"),
///     end: parse("2023-10-01 16:00:00"),
/// };
/// let second = Shift {
///     employee_id: "456".to_string(),
///     start: parse("2023-10-01 16:00:00"),
///     end: parse("2023-10-02 00:00:00"),
/// };
///
/// let span = time_diff_between_shifts(Some(&first), Some(&second)).unwrap();
/// assert_eq!(span, Duration::hours(16));
/// ```
pub fn time_diff_between_shifts(
    first: Option<&Shift>,
    second: Option<&Shift>,
) -> StatsResult<Duration> {
    let (Some(first), Some(second)) = (first, second) else {
        return Err(StatsError::MissingShift);
    };

    for shift in [first, second] {
        if shift.end < shift.start {
            return Err(StatsError::InvalidShift {
                employee_id: shift.employee_id.clone(),
                message: "end time before start time".to_string(),
            });
        }
    }

    Ok(second.end - first.start)
}
