//! Error types for the roster statistics engine.
//!
//! This module provides strongly-typed errors using the `thiserror` crate
//! for all error conditions that can occur during ingestion and statistics
//! computation.

use chrono::NaiveDateTime;
use thiserror::Error;

/// The main error type for the roster statistics engine.
///
/// All operations in the engine return this error type, making it easy
/// to handle errors consistently throughout the application.
///
/// # Example
///
/// ```
/// use roster_stats::error::StatsError;
///
/// let error = StatsError::PolicyNotFound {
///     path: "/missing/policy.yaml".to_string(),
/// };
/// assert_eq!(error.to_string(), "Policy file not found: /missing/policy.yaml");
/// ```
#[derive(Debug, Error)]
pub enum StatsError {
    /// Policy file was not found at the specified path.
    #[error("Policy file not found: {path}")]
    PolicyNotFound {
        /// The path that was not found.
        path: String,
    },

    /// Policy file could not be parsed.
    #[error("Failed to parse policy file '{path}': {message}")]
    PolicyParseError {
        /// The path to the file that failed to parse.
        path: String,
        /// A description of the parse error.
        message: String,
    },

    /// An empty employee identifier was supplied to a query.
    #[error("Employee id must not be empty")]
    EmptyEmployeeId,

    /// A query time range had its start after its end.
    #[error("Invalid time range: {from} is after {to}")]
    InvalidRange {
        /// The start of the requested range.
        from: NaiveDateTime,
        /// The end of the requested range.
        to: NaiveDateTime,
    },

    /// A shift reference required by the operation was absent.
    #[error("Cannot compute a span over an absent shift")]
    MissingShift,

    /// A shift contained inconsistent data, such as an end before its start.
    #[error("Invalid shift for employee '{employee_id}': {message}")]
    InvalidShift {
        /// The employee the malformed shift belongs to.
        employee_id: String,
        /// A description of what made the shift invalid.
        message: String,
    },

    /// A valid statistics query matched no shift in the schedule.
    #[error("No shifts found for employee '{employee_id}'")]
    NoMatchingShifts {
        /// The employee identifier that matched nothing.
        employee_id: String,
    },

    /// Roster file was not found or could not be opened.
    #[error("Roster file not found: {path}")]
    RosterNotFound {
        /// The path that could not be opened.
        path: String,
    },

    /// The roster header row did not follow the `Name_Start`/`Name_End`
    /// column-pair convention.
    #[error("Malformed roster header: {message}")]
    MalformedHeader {
        /// A description of what made the header invalid.
        message: String,
    },

    /// A roster record could not be read or was cut off mid-pair.
    #[error("Malformed roster record at line {line}: {message}")]
    MalformedRecord {
        /// The 1-based line number of the offending record (0 if unknown).
        line: u64,
        /// A description of what made the record invalid.
        message: String,
    },

    /// A roster date cell could not be parsed.
    #[error("Invalid roster date: {value}")]
    InvalidDate {
        /// The raw cell value that failed to parse.
        value: String,
    },

    /// A roster time cell could not be parsed.
    #[error("Invalid roster time: {value}")]
    InvalidTime {
        /// The raw cell value that failed to parse.
        value: String,
    },
}

/// A type alias for Results that return StatsError.
pub type StatsResult<T> = Result<T, StatsError>;
