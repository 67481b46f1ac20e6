//! Shift model.
//!
//! This module defines the Shift struct representing one continuous work
//! interval for one employee.

use chrono::{Duration, NaiveDateTime};
use serde::{Deserialize, Serialize};

/// Represents one continuous work interval for one employee.
///
/// A shift is created once by the ingestion collaborator and immutable
/// thereafter. Ingestion guarantees that `end` is strictly after `start`
/// once overnight normalization has been applied.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Shift {
    /// Identifier of the employee working this shift.
    pub employee_id: String,
    /// The absolute start timestamp of the shift.
    pub start: NaiveDateTime,
    /// The absolute end timestamp of the shift.
    pub end: NaiveDateTime,
}

impl Shift {
    /// Returns the elapsed duration of the shift.
    ///
    /// # Examples
    ///
    /// ```
    /// use roster_stats::models::Shift;
    /// use chrono::{Duration, NaiveDateTime};
    ///
    /// let shift = Shift {
    ///     employee_id: "123".to_string(),
    ///     start: NaiveDateTime::parse_from_str("2023-10-01 08:00:00", "%Y-%m-%d %H:%M:%S").unwrap(),
    ///     end: NaiveDateTime::parse_from_str("2023-10-01 16:00:00", "%Y-%m-%d %H:%M:%S").unwrap(),
    /// };
    /// assert_eq!(shift.duration(), Duration::hours(8));
    /// ```
    pub fn duration(&self) -> Duration {
        self.end - self.start
    }

    /// Returns true if the shift's start and end fall on different
    /// calendar days.
    ///
    /// # Examples
    ///
    /// ```
    /// use roster_stats::models::Shift;
    /// use chrono::NaiveDateTime;
    ///
    /// let shift = Shift {
    ///     employee_id: "123".to_string(),
    ///     start: NaiveDateTime::parse_from_str("2023-10-03 19:00:00", "%Y-%m-%d %H:%M:%S").unwrap(),
    ///     end: NaiveDateTime::parse_from_str("2023-10-04 07:00:00", "%Y-%m-%d %H:%M:%S").unwrap(),
    /// };
    /// assert!(shift.is_overnight());
    /// ```
    pub fn is_overnight(&self) -> bool {
        self.start.date() != self.end.date()
    }
}
