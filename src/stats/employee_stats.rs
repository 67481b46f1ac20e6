//! Per-employee duration aggregation.
//!
//! This module provides the single-pass accumulation of total, night, and
//! holiday durations for one employee across a schedule.

use chrono::Duration;

use crate::config::StatsPolicy;
use crate::error::{StatsError, StatsResult};
use crate::models::Schedule;

use super::calendar::holiday_portion;

/// Aggregate worked-time durations for one employee.
///
/// Produced fresh on every query and never cached. The buckets are
/// independent accumulations over the same pass: a single shift may
/// contribute to all three at once, so `night` and `holiday` are not
/// bounded by `total` in any guaranteed way.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DurationStats {
    /// The exact sum of shift durations.
    pub total: Duration,
    /// The duration attributed to night work, credited as a fixed amount
    /// per overnight shift.
    pub night: Duration,
    /// The duration attributed to holiday work.
    pub holiday: Duration,
}

/// Computes aggregate duration statistics for one employee.
///
/// Scans every shift in the schedule whose employee matches, in a single
/// pass:
///
/// - **Total**: the exact sum of `end - start` over matching shifts.
/// - **Night**: every overnight shift (start and end on different calendar
///   days) is credited the policy's fixed night credit, regardless of how
///   long the shift actually is. Overnight shifts are assumed to always
///   fully contain the canonical night window.
/// - **Holiday**: shifts starting on a holiday weekday contribute per
///   [`holiday_portion`].
///
/// # Errors
///
/// - [`StatsError::EmptyEmployeeId`] if `employee_id` is empty, before any
///   computation.
/// - [`StatsError::NoMatchingShifts`] if the accumulated total is still
///   zero after the scan.
///
/// # Examples
///
/// ```
/// use roster_stats::config::StatsPolicy;
/// use roster_stats::models::{Schedule, Shift};
/// use roster_stats::stats::employee_stats;
/// use chrono::{Duration, NaiveDateTime};
///
/// let schedule = Schedule::from(vec![Shift {
///     employee_id: "123".to_string(),
///     start: NaiveDateTime::parse_from_str("2023-10-03 19:00:00", "%Y-%m-%d %H:%M:%S").unwrap(),
///     end: NaiveDateTime::parse_from_str("2023-10-04 07:00:00", "%Y-%m-%d %H:%M:%S").unwrap(),
/// }]);
///
/// let stats = employee_stats(&schedule, "123", &StatsPolicy::default()).unwrap();
/// assert_eq!(stats.total, Duration::hours(12));
/// assert_eq!(stats.night, Duration::hours(8));
/// ```
pub fn employee_stats(
    schedule: &Schedule,
    employee_id: &str,
    policy: &StatsPolicy,
) -> StatsResult<DurationStats> {
    if employee_id.is_empty() {
        return Err(StatsError::EmptyEmployeeId);
    }

    let mut total = Duration::zero();
    let mut night = Duration::zero();
    let mut holiday = Duration::zero();

    for shift in schedule.shifts_for(employee_id) {
        total = total + shift.duration();

        if shift.is_overnight() {
            night = night + policy.night_credit();
        }

        holiday = holiday + holiday_portion(shift, policy);
    }

    if total == Duration::zero() {
        return Err(StatsError::NoMatchingShifts {
            employee_id: employee_id.to_string(),
        });
    }

    Ok(DurationStats {
        total,
        night,
        holiday,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Shift;
    use chrono::NaiveDateTime;

    fn make_shift(employee_id: &str, start: &str, end: &str) -> Shift {
        Shift {
            employee_id: employee_id.to_string(),
            start: NaiveDateTime::parse_from_str(start, "%Y-%m-%d %H:%M:%S").unwrap(),
            end: NaiveDateTime::parse_from_str(end, "%Y-%m-%d %H:%M:%S").unwrap(),
        }
    }

    /// The roster exercised by the original system's demo: two weekday day
    /// shifts, a Tuesday-to-Wednesday overnight, and a Sunday-to-Monday
    /// overnight. 2023-10-01 and 2023-10-08 are Sundays.
    fn demo_schedule() -> Schedule {
        Schedule::from(vec![
            make_shift("123", "2023-10-01 08:00:00", "2023-10-01 16:00:00"),
            make_shift("123", "2023-10-02 08:00:00", "2023-10-02 16:00:00"),
            make_shift("123", "2023-10-03 19:00:00", "2023-10-04 07:00:00"),
            make_shift("123", "2023-10-08 20:00:00", "2023-10-09 06:00:00"),
        ])
    }

    // ==========================================================================
    // ES-001: total is the exact sum of matching shift durations
    // ==========================================================================
    #[test]
    fn test_es_001_total_is_exact_sum() {
        let stats = employee_stats(&demo_schedule(), "123", &StatsPolicy::default()).unwrap();

        // 8h + 8h + 12h + 10h
        assert_eq!(stats.total, Duration::hours(38));
    }

    // ==========================================================================
    // ES-002: each overnight shift credits exactly the fixed night amount
    // ==========================================================================
    #[test]
    fn test_es_002_overnight_credits_fixed_eight_hours() {
        let schedule = Schedule::from(vec![make_shift(
            "123",
            "2023-10-03 19:00:00",
            "2023-10-04 07:00:00",
        )]);

        let stats = employee_stats(&schedule, "123", &StatsPolicy::default()).unwrap();

        // The shift spans 12 hours but the night bucket gets the fixed 8.
        assert_eq!(stats.total, Duration::hours(12));
        assert_eq!(stats.night, Duration::hours(8));
    }

    // ==========================================================================
    // ES-003: same-day Sunday shift counts fully as holiday time
    // ==========================================================================
    #[test]
    fn test_es_003_sunday_day_shift_counts_fully() {
        let schedule = Schedule::from(vec![make_shift(
            "123",
            "2023-10-01 08:00:00",
            "2023-10-01 16:00:00",
        )]);

        let stats = employee_stats(&schedule, "123", &StatsPolicy::default()).unwrap();

        assert_eq!(stats.holiday, Duration::hours(8));
        assert_eq!(stats.night, Duration::zero());
    }

    // ==========================================================================
    // ES-004: Sunday 23:00 to Monday 07:00 is clipped to one holiday hour
    // ==========================================================================
    #[test]
    fn test_es_004_sunday_into_monday_clipped() {
        let schedule = Schedule::from(vec![make_shift(
            "123",
            "2023-10-01 23:00:00",
            "2023-10-02 07:00:00",
        )]);

        let stats = employee_stats(&schedule, "123", &StatsPolicy::default()).unwrap();

        assert_eq!(stats.total, Duration::hours(8));
        assert_eq!(stats.holiday, Duration::hours(1));
        // The same shift also feeds the night bucket.
        assert_eq!(stats.night, Duration::hours(8));
    }

    // ==========================================================================
    // ES-005: buckets accumulate independently across the demo roster
    // ==========================================================================
    #[test]
    fn test_es_005_demo_roster_buckets() {
        let stats = employee_stats(&demo_schedule(), "123", &StatsPolicy::default()).unwrap();

        // Two overnight shifts at 8h credit each.
        assert_eq!(stats.night, Duration::hours(16));
        // The Sunday day shift (8h) plus the clipped Sunday 20:00 start
        // (20:00 -> midnight = 4h).
        assert_eq!(stats.holiday, Duration::hours(12));
    }

    // ==========================================================================
    // ES-006: empty employee id is rejected before any computation
    // ==========================================================================
    #[test]
    fn test_es_006_empty_employee_id() {
        let result = employee_stats(&demo_schedule(), "", &StatsPolicy::default());
        assert!(matches!(result, Err(StatsError::EmptyEmployeeId)));
    }

    // ==========================================================================
    // ES-007: unknown employee fails with NoMatchingShifts
    // ==========================================================================
    #[test]
    fn test_es_007_unknown_employee() {
        let result = employee_stats(&demo_schedule(), "nonexistent", &StatsPolicy::default());

        match result {
            Err(StatsError::NoMatchingShifts { employee_id }) => {
                assert_eq!(employee_id, "nonexistent");
            }
            other => panic!("Expected NoMatchingShifts, got {:?}", other),
        }
    }

    // ==========================================================================
    // ES-008: empty schedule fails with NoMatchingShifts
    // ==========================================================================
    #[test]
    fn test_es_008_empty_schedule() {
        let result = employee_stats(&Schedule::new(), "123", &StatsPolicy::default());
        assert!(matches!(result, Err(StatsError::NoMatchingShifts { .. })));
    }

    // ==========================================================================
    // ES-009: other employees' shifts are ignored
    // ==========================================================================
    #[test]
    fn test_es_009_other_employees_ignored() {
        let schedule = Schedule::from(vec![
            make_shift("123", "2023-10-02 08:00:00", "2023-10-02 16:00:00"),
            make_shift("456", "2023-10-02 16:00:00", "2023-10-03 00:00:00"),
        ]);

        let stats = employee_stats(&schedule, "123", &StatsPolicy::default()).unwrap();
        assert_eq!(stats.total, Duration::hours(8));
        assert_eq!(stats.night, Duration::zero());
    }

    // ==========================================================================
    // ES-010: a Saturday-holiday policy shifts the bucket
    // ==========================================================================
    #[test]
    fn test_es_010_custom_holiday_policy() {
        use crate::config::NightWindow;
        use chrono::Weekday;

        let policy = StatsPolicy {
            holiday_weekdays: vec![Weekday::Sat],
            night_window: NightWindow::default(),
        };

        // 2023-09-30 is a Saturday.
        let schedule = Schedule::from(vec![
            make_shift("123", "2023-09-30 08:00:00", "2023-09-30 16:00:00"),
            make_shift("123", "2023-10-01 08:00:00", "2023-10-01 16:00:00"),
        ]);

        let stats = employee_stats(&schedule, "123", &policy).unwrap();
        assert_eq!(stats.holiday, Duration::hours(8));
    }
}
