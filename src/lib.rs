//! Worked-time statistics engine for tabular shift rosters.
//!
//! This crate computes per-employee worked-time statistics (total hours,
//! night-shift hours, holiday hours) and bounded-range work-time queries
//! over an in-memory schedule of shifts, plus the CSV ingestion that
//! produces such a schedule from a wide roster file.

#![warn(missing_docs)]

pub mod config;
pub mod error;
pub mod ingest;
pub mod models;
pub mod stats;
