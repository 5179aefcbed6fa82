//! Error types for interval operations
//!
//! Provides unified error handling for model construction, interval set
//! mutation, gesture resolution and configuration loading.

use crate::model::{Interval, Point};
use thiserror::Error;

/// Errors that can occur while building or mutating intervals
#[derive(Error, Debug)]
pub enum SpanError {
    /// Boundaries coincide, cross, or lie further apart than `i32::MAX`
    #[error("invalid interval: boundaries {a} and {b} coincide, cross or overflow the length")]
    InvalidInterval { a: Point, b: Point },

    /// Direct insertion of an interval overlapping a live one
    #[error("interval {new} overlaps existing interval {existing}")]
    Overlap { new: Interval, existing: Interval },

    /// Seeded interval reaches outside the addressable line
    #[error("interval {interval} lies outside the line [{start}, {end}]")]
    OutOfBounds {
        interval: Interval,
        start: Point,
        end: Point,
    },

    /// A gesture reached a state that breaks an engine invariant
    #[error("unresolved gesture: {0}")]
    UnresolvedGesture(String),

    /// Section layout rejected during validation
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),

    /// IO error from std::io
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON parsing error from serde_json
    #[error("JSON parse error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Result type alias for interval operations
pub type SpanResult<T> = Result<T, SpanError>;
