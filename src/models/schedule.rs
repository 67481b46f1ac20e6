//! Schedule model.
//!
//! This module defines the Schedule struct, an ordered collection of
//! shifts owned by the caller and only ever read by the statistics engine.

use serde::{Deserialize, Serialize};

use super::Shift;

/// An ordered collection of shifts.
///
/// Insertion order is preserved and no uniqueness constraint applies:
/// multiple shifts per employee per day are legal, and overlapping shifts
/// are neither deduplicated nor rejected.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Schedule {
    /// The shifts, in insertion order.
    #[serde(default)]
    pub shifts: Vec<Shift>,
}

impl Schedule {
    /// Creates an empty schedule.
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a shift to the schedule.
    pub fn push(&mut self, shift: Shift) {
        self.shifts.push(shift);
    }

    /// Returns the number of shifts in the schedule.
    pub fn len(&self) -> usize {
        self.shifts.len()
    }

    /// Returns true if the schedule holds no shifts.
    pub fn is_empty(&self) -> bool {
        self.shifts.is_empty()
    }

    /// Returns an iterator over the shifts belonging to the given employee,
    /// in insertion order.
    ///
    /// # Examples
    ///
    /// ```
    /// use roster_stats::models::{Schedule, Shift};
    /// use chrono::NaiveDateTime;
    ///
    /// let mut schedule = Schedule::new();
    /// schedule.push(Shift {
    ///     employee_id: "123".to_string(),
    ///     start: NaiveDateTime::parse_from_str("2023-10-01 08:00:00", "%Y-%m-%d %H:%M:%S").unwrap(),
    ///     end: NaiveDateTime::parse_from_str("2023-10-01 16:00:00", "%Y-%m-%d %H:%M:%S").unwrap(),
    /// });
    /// assert_eq!(schedule.shifts_for("123").count(), 1);
    /// assert_eq!(schedule.shifts_for("456").count(), 0);
    /// ```
    pub fn shifts_for<'a>(&'a self, employee_id: &'a str) -> impl Iterator<Item = &'a Shift> {
        self.shifts
            .iter()
            .filter(move |shift| shift.employee_id == employee_id)
    }
}

impl From<Vec<Shift>> for Schedule {
    fn from(shifts: Vec<Shift>) -> Self {
        Self { shifts }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDateTime;

    fn make_shift(employee_id: &str, start: &str, end: &str) -> Shift {
        Shift {
            employee_id: employee_id.to_string(),
            start: NaiveDateTime::parse_from_str(start, "%Y-%m-%d %H:%M:%S").unwrap(),
            end: NaiveDateTime::parse_from_str(end, "%Y-%m-%d %H:%M:%S").unwrap(),
        }
    }

    #[test]
    fn test_empty_schedule() {
        let schedule = Schedule::new();
        assert!(schedule.is_empty());
        assert_eq!(schedule.len(), 0);
    }

    #[test]
    fn test_push_preserves_insertion_order() {
        let mut schedule = Schedule::new();
        schedule.push(make_shift("123", "2023-10-02 08:00:00", "2023-10-02 16:00:00"));
        schedule.push(make_shift("123", "2023-10-01 08:00:00", "2023-10-01 16:00:00"));

        assert_eq!(schedule.len(), 2);
        // Not sorted: the later date stays first because it was pushed first.
        assert_eq!(
            schedule.shifts[0].start,
            NaiveDateTime::parse_from_str("2023-10-02 08:00:00", "%Y-%m-%d %H:%M:%S").unwrap()
        );
    }

    #[test]
    fn test_shifts_for_filters_by_employee() {
        let schedule = Schedule::from(vec![
            make_shift("123", "2023-10-01 08:00:00", "2023-10-01 16:00:00"),
            make_shift("456", "2023-10-01 16:00:00", "2023-10-02 00:00:00"),
            make_shift("123", "2023-10-02 08:00:00", "2023-10-02 16:00:00"),
        ]);

        let matched: Vec<_> = schedule.shifts_for("123").collect();
        assert_eq!(matched.len(), 2);
        assert!(matched.iter().all(|s| s.employee_id == "123"));
    }

    #[test]
    fn test_duplicate_shifts_are_kept() {
        let shift = make_shift("123", "2023-10-01 08:00:00", "2023-10-01 16:00:00");
        let schedule = Schedule::from(vec![shift.clone(), shift]);
        assert_eq!(schedule.shifts_for("123").count(), 2);
    }

    #[test]
    fn test_schedule_deserialization_defaults_to_empty() {
        let schedule: Schedule = serde_json::from_str("{}").unwrap();
        assert!(schedule.is_empty());
    }
}
