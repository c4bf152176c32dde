//! Unified error handling for the trace-render library.
//!
//! All fallible operations in this crate return [`Result`] with a
//! [`TraceError`]. Errors are pure and local: nothing is retried, logged
//! away, or swallowed — the host decides presentation.

use std::fmt;

/// Unified error type for trace-render operations.
#[derive(Debug, Clone, PartialEq)]
pub enum TraceError {
    /// Coordinates outside the valid latitude/longitude range (or non-finite)
    InvalidCoordinate { latitude: f64, longitude: f64 },
    /// An operation requiring at least one point was called on zero points
    EmptyInput { operation: &'static str },
    /// No IANA timezone could be resolved for the coordinate
    UnresolvedTimezone { latitude: f64, longitude: f64 },
}

impl fmt::Display for TraceError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TraceError::InvalidCoordinate {
                latitude,
                longitude,
            } => {
                write!(
                    f,
                    "Invalid coordinate ({}, {}): latitude must be in [-90, 90], longitude in [-180, 180]",
                    latitude, longitude
                )
            }
            TraceError::EmptyInput { operation } => {
                write!(f, "{} requires at least one point", operation)
            }
            TraceError::UnresolvedTimezone {
                latitude,
                longitude,
            } => {
                write!(
                    f,
                    "No timezone resolved for coordinate ({}, {})",
                    latitude, longitude
                )
            }
        }
    }
}

impl std::error::Error for TraceError {}

/// Result type alias for trace-render operations.
pub type Result<T> = std::result::Result<T, TraceError>;
