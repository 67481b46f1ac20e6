//! Core data models for the roster statistics engine.
//!
//! This module contains the value types the engine computes over.

mod schedule;
mod shift;

pub use schedule::Schedule;
pub use shift::Shift;
