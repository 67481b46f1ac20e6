//! Policy types for the statistics engine.
//!
//! This module contains the strongly-typed policy structures that are
//! deserialized from YAML policy files. The default policy reproduces the
//! fixed business rules of the original roster system: Sundays are
//! holidays, and the canonical night window runs 22:00-06:00.

use chrono::{Datelike, Duration, NaiveDate, NaiveTime, Weekday};
use serde::Deserialize;

/// The canonical night window used to credit overnight shifts.
///
/// The engine credits every overnight shift with the full length of this
/// window: overnight shifts are assumed to always fully contain it, and
/// partial night coverage is not modeled.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
pub struct NightWindow {
    /// The clock time at which the night window opens.
    pub start: NaiveTime,
    /// The clock time at which the night window closes, on the next
    /// calendar day whenever it is not after `start`.
    pub end: NaiveTime,
}

impl NightWindow {
    /// Returns the length of the night window.
    ///
    /// A window whose `end` is not after its `start` wraps past midnight.
    ///
    /// # Examples
    ///
    /// ```
    /// use roster_stats::config::NightWindow;
    /// use chrono::{Duration, NaiveTime};
    ///
    /// let window = NightWindow {
    ///     start: NaiveTime::from_hms_opt(22, 0, 0).unwrap(),
    ///     end: NaiveTime::from_hms_opt(6, 0, 0).unwrap(),
    /// };
    /// assert_eq!(window.length(), Duration::hours(8));
    /// ```
    pub fn length(&self) -> Duration {
        if self.end > self.start {
            self.end - self.start
        } else {
            Duration::days(1) - (self.start - self.end)
        }
    }
}

impl Default for NightWindow {
    fn default() -> Self {
        Self {
            start: NaiveTime::from_hms_opt(22, 0, 0).expect("valid window start"),
            end: NaiveTime::from_hms_opt(6, 0, 0).expect("valid window end"),
        }
    }
}

/// The policy value that parameterizes the statistics engine.
///
/// The engine's control flow never changes with the policy; only the
/// holiday weekday set and the night credit do.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct StatsPolicy {
    /// The weekdays that count as holidays.
    pub holiday_weekdays: Vec<Weekday>,
    /// The canonical night window.
    pub night_window: NightWindow,
}

impl StatsPolicy {
    /// Returns true if the given calendar day falls on a holiday weekday.
    pub fn is_holiday(&self, date: NaiveDate) -> bool {
        self.holiday_weekdays.contains(&date.weekday())
    }

    /// Returns the fixed duration credited to the night bucket for each
    /// overnight shift.
    pub fn night_credit(&self) -> Duration {
        self.night_window.length()
    }
}

impl Default for StatsPolicy {
    fn default() -> Self {
        Self {
            holiday_weekdays: vec![Weekday::Sun],
            night_window: NightWindow::default(),
        }
    }
}
