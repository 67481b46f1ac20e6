//! Roster file ingestion.
//!
//! This module reads a wide roster CSV into a [`Schedule`]. The first
//! column holds the roster date (year-day-month order); the remaining
//! columns come in `Name_Start`/`Name_End` pairs, one pair per employee.
//! A start or end cell of `00:00` marks "no shift" for that employee on
//! that day. Parsed end clock times at or before the start clock time
//! belong to the next calendar day and are advanced by 24 hours before
//! the shift is stored.
//!
//! Any malformed header, date, time, or record aborts the load with a
//! distinct error; a schedule is never partially returned.

use std::path::Path;

use chrono::{Duration, NaiveDate, NaiveTime};
use tracing::{debug, info};

use crate::error::{StatsError, StatsResult};
use crate::models::{Schedule, Shift};

/// Date column layout: year first, then day, then month.
const DATE_FORMAT: &str = "%Y-%d-%m";
/// Time cell layout; single-digit hours are accepted.
const TIME_FORMAT: &str = "%H:%M";
/// Header suffix naming an employee's start column.
const START_SUFFIX: &str = "_Start";

/// A raw cell value marking "no shift" for the employee on that day.
fn is_no_shift(cell: &str) -> bool {
    cell == "00:00" || cell == "0:00"
}

/// Loads a schedule from a wide roster CSV file.
///
/// # Errors
///
/// - [`StatsError::RosterNotFound`] if the file cannot be opened.
/// - [`StatsError::MalformedHeader`] if the header has no employee column
///   pairs or a start column lacks the `_Start` suffix.
/// - [`StatsError::MalformedRecord`] if a record cannot be read or is cut
///   off before an employee's pair.
/// - [`StatsError::InvalidDate`] / [`StatsError::InvalidTime`] if a cell
///   fails to parse.
///
/// # Example
///
/// ```no_run
/// use roster_stats::ingest::load_schedule_from_csv;
///
/// let schedule = load_schedule_from_csv("roster.csv").unwrap();
/// println!("{} shifts loaded", schedule.len());
/// ```
pub fn load_schedule_from_csv<P: AsRef<Path>>(path: P) -> StatsResult<Schedule> {
    let path = path.as_ref();
    let path_str = path.display().to_string();

    let mut reader = csv::ReaderBuilder::new()
        .flexible(true)
        .from_path(path)
        .map_err(|_| StatsError::RosterNotFound {
            path: path_str.clone(),
        })?;

    let headers = reader
        .headers()
        .map_err(|e| StatsError::MalformedHeader {
            message: e.to_string(),
        })?
        .clone();

    let employee_ids = parse_header(&headers)?;

    let mut schedule = Schedule::new();

    for result in reader.records() {
        let record = result.map_err(|e| StatsError::MalformedRecord {
            line: e.position().map(|p| p.line()).unwrap_or(0),
            message: e.to_string(),
        })?;
        let line = record.position().map(|p| p.line()).unwrap_or(0);

        let date_cell = record
            .get(0)
            .ok_or_else(|| StatsError::MalformedRecord {
                line,
                message: "missing date cell".to_string(),
            })?
            .trim();

        let base_date = NaiveDate::parse_from_str(date_cell, DATE_FORMAT).map_err(|_| {
            StatsError::InvalidDate {
                value: date_cell.to_string(),
            }
        })?;

        for (index, employee_id) in employee_ids.iter().enumerate() {
            let start_cell = cell(&record, index * 2 + 1, employee_id, line)?;
            let end_cell = cell(&record, index * 2 + 2, employee_id, line)?;

            if is_no_shift(start_cell) || is_no_shift(end_cell) {
                debug!(employee_id = %employee_id, line, "skipping no-shift cell pair");
                continue;
            }

            let start_clock = parse_time(start_cell)?;
            let end_clock = parse_time(end_cell)?;

            let start = base_date.and_time(start_clock);
            let mut end = base_date.and_time(end_clock);

            // An end clock at or before the start clock belongs to the
            // next calendar day.
            if end <= start {
                end += Duration::hours(24);
            }

            schedule.push(Shift {
                employee_id: employee_id.clone(),
                start,
                end,
            });
        }
    }

    info!(
        path = %path_str,
        employees = employee_ids.len(),
        shifts = schedule.len(),
        "loaded roster"
    );

    Ok(schedule)
}

/// Extracts employee identifiers from the header's `Name_Start` columns.
fn parse_header(headers: &csv::StringRecord) -> StatsResult<Vec<String>> {
    if headers.len() < 3 {
        return Err(StatsError::MalformedHeader {
            message: format!(
                "expected a date column and at least one start/end pair, got {} columns",
                headers.len()
            ),
        });
    }

    let mut employee_ids = Vec::new();
    for index in (1..headers.len()).step_by(2) {
        let column = &headers[index];
        let employee_id =
            column
                .strip_suffix(START_SUFFIX)
                .ok_or_else(|| StatsError::MalformedHeader {
                    message: format!("column '{}' does not end with '{}'", column, START_SUFFIX),
                })?;
        employee_ids.push(employee_id.to_string());
    }

    Ok(employee_ids)
}

/// Fetches and trims one cell, erroring when the record is cut off.
fn cell<'r>(
    record: &'r csv::StringRecord,
    index: usize,
    employee_id: &str,
    line: u64,
) -> StatsResult<&'r str> {
    record
        .get(index)
        .map(str::trim)
        .ok_or_else(|| StatsError::MalformedRecord {
            line,
            message: format!("missing cell for employee '{}'", employee_id),
        })
}

fn parse_time(cell: &str) -> StatsResult<NaiveTime> {
    NaiveTime::parse_from_str(cell, TIME_FORMAT).map_err(|_| StatsError::InvalidTime {
        value: cell.to_string(),
    })
}
