//! Holiday calendar clipping.
//!
//! This module determines how much of a shift counts toward the holiday
//! bucket: holiday membership is decided by the start day alone, and a
//! shift that crosses midnight is clipped at the end of its start day.

use chrono::Duration;

use crate::config::StatsPolicy;
use crate::models::Shift;

/// Returns the portion of a shift that counts toward the holiday bucket.
///
/// A shift counts only if its start day falls on a holiday weekday under
/// the given policy:
///
/// - A shift starting and ending on the same calendar day contributes its
///   entire duration.
/// - A shift crossing midnight contributes the portion from its start
///   through 23:59:59 of the start day, plus one second to land exactly
///   on the midnight boundary. The remainder after midnight is excluded
///   even though it still counts toward the total bucket.
/// - Any other shift contributes nothing.
///
/// # Examples
///
/// ```
/// use roster_stats::config::StatsPolicy;
/// use roster_stats::models::Shift;
/// use roster_stats::stats::holiday_portion;
/// use chrono::{Duration, NaiveDateTime};
///
/// // 2023-10-01 is a Sunday.
/// let shift = Shift {
///     employee_id: "123".to_string(),
///     start: NaiveDateTime::parse_from_str("2023-10-01 23:00:00", "%Y-%m-%d %H:%M:%S").unwrap(),
///     end: NaiveDateTime::parse_from_str("2023-10-02 07:00:00", "%Y-%m-%d %H:%M:%S").unwrap(),
/// };
/// assert_eq!(holiday_portion(&shift, &StatsPolicy::default()), Duration::hours(1));
/// ```
pub fn holiday_portion(shift: &Shift, policy: &StatsPolicy) -> Duration {
    if !policy.is_holiday(shift.start.date()) {
        return Duration::zero();
    }

    if !shift.is_overnight() {
        return shift.duration();
    }

    let last_second = shift
        .start
        .date()
        .and_hms_opt(23, 59, 59)
        .expect("valid end of day");
    (last_second - shift.start) + Duration::seconds(1)
}
