//! Statistics computations over a schedule.
//!
//! This module contains the pure functions of the statistics engine:
//! per-employee duration aggregation across total, night, and holiday
//! buckets, bounded-range work-time queries, holiday calendar clipping,
//! and the span between two shifts. Nothing here performs I/O or mutates
//! the schedule.

mod calendar;
mod employee_stats;
mod shift_span;
mod work_range;

pub use calendar::holiday_portion;
pub use employee_stats::{DurationStats, employee_stats};
pub use shift_span::time_diff_between_shifts;
pub use work_range::work_time_in_range;
