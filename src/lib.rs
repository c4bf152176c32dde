//! # Trace Render
//!
//! GPS trace statistics, tiered simplification, and viewport render caching
//! for interactive maps.
//!
//! This library provides:
//! - Summary statistics for recorded GPS traces (distance, duration,
//!   elevation gain, altitude extremes, bounding box, local UTC offset)
//! - Three resolution tiers of simplified geometry (detail/medium/coarse)
//!   for progressive rendering
//! - Caches that gate re-fetching ([`LoadedAreaCache`]) and re-drawing
//!   ([`OverlayRedrawCache`]) as the user pans and zooms
//!
//! ## Features
//!
//! - **`parallel`** - Enable parallel batch simplification with rayon
//! - **`tzf`** - Enable the built-in coordinate-to-timezone resolver
//! - **`full`** - Enable all features
//!
//! ## Quick Start
//!
//! ```rust
//! use trace_render::{simplify, stats, GeoPoint};
//!
//! let points = vec![
//!     GeoPoint::new(51.417864, 5.445850, 18.0, None).unwrap(),
//!     GeoPoint::new(51.411864, 5.441850, 21.5, None).unwrap(),
//!     GeoPoint::new(51.414371, 5.438404, 19.0, None).unwrap(),
//! ];
//!
//! let distance = stats::distance_of_trace(&points);
//! assert!(distance > 0.0);
//!
//! let tiers = simplify::simplify(&points).expect("trace has at least 2 points");
//! assert_eq!(tiers.detail.len(), 3);
//! assert!(tiers.coarse.len() <= tiers.medium.len());
//! ```

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

// Unified error handling
pub mod error;
pub use error::{Result, TraceError};

// Geographic utilities (haversine distance, polyline length)
pub mod geo_utils;

// Trace statistics (distance, duration, elevation, bounds)
pub mod stats;
pub use stats::TraceSummary;

// Tiered trace simplification
pub mod simplify;
pub use simplify::SimplifyConfig;

// Local UTC offset resolution
pub mod timezone;
pub use timezone::{timezone_offset_minutes, TimezoneLookup};
#[cfg(feature = "tzf")]
pub use timezone::TzfLookup;

// Viewport load tracking
pub mod loaded_area;
pub use loaded_area::LoadedAreaCache;

// Per-overlay redraw tracking
pub mod overlay;
pub use overlay::OverlayRedrawCache;

// ============================================================================
// Core Types
// ============================================================================

/// Micro-degrees per degree, used for integer coordinate encoding.
pub const MICRO_DEGREES: f64 = 1_000_000.0;

/// A recorded GPS point with latitude, longitude, altitude and optional
/// timestamp.
///
/// Points are validated once at construction; every statistic and
/// simplification function assumes valid input and never re-validates.
///
/// # Example
/// ```
/// use trace_render::GeoPoint;
/// let point = GeoPoint::new(51.5074, -0.1278, 11.0, None).unwrap(); // London
/// assert!(GeoPoint::new(91.0, 0.0, 0.0, None).is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GeoPoint {
    pub latitude: f64,
    pub longitude: f64,
    /// Altitude in meters (0.0 when the source record had none)
    pub altitude: f64,
    /// Recording time; `None` for synthetic points
    pub timestamp: Option<DateTime<Utc>>,
}

impl GeoPoint {
    /// Create a new GPS point, rejecting out-of-range or non-finite
    /// coordinates with [`TraceError::InvalidCoordinate`].
    pub fn new(
        latitude: f64,
        longitude: f64,
        altitude: f64,
        timestamp: Option<DateTime<Utc>>,
    ) -> Result<Self> {
        if !latitude.is_finite()
            || !longitude.is_finite()
            || !(-90.0..=90.0).contains(&latitude)
            || !(-180.0..=180.0).contains(&longitude)
        {
            return Err(TraceError::InvalidCoordinate {
                latitude,
                longitude,
            });
        }
        Ok(Self {
            latitude,
            longitude,
            altitude,
            timestamp,
        })
    }
}

/// An integer coordinate in micro-degrees (degrees × 1,000,000, rounded
/// half away from zero).
///
/// The integer encoding lets downstream consumers compare coordinates with
/// exact equality and store geometry compactly.
///
/// # Example
/// ```
/// use trace_render::MicroPoint;
/// let p = MicroPoint::from_degrees(51.417864, 5.445850);
/// assert_eq!(p.lat, 51417864);
/// assert_eq!(p.lng, 5445850);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct MicroPoint {
    pub lat: i32,
    pub lng: i32,
}

impl MicroPoint {
    /// Convert a degree coordinate pair to micro-degrees.
    ///
    /// `f64::round` rounds half away from zero, matching the encoding used
    /// by the rendering host.
    pub fn from_degrees(lat: f64, lng: f64) -> Self {
        Self {
            lat: (lat * MICRO_DEGREES).round() as i32,
            lng: (lng * MICRO_DEGREES).round() as i32,
        }
    }

    /// Decode back to fractional degrees as (lat, lng).
    pub fn to_degrees(self) -> (f64, f64) {
        (self.lat as f64 / MICRO_DEGREES, self.lng as f64 / MICRO_DEGREES)
    }
}

/// The three resolution tiers of a simplified trace.
///
/// Produced once per uploaded trace by [`simplify::simplify`] and immutable
/// thereafter. For any input of ≥2 points,
/// `detail.len() >= medium.len() >= coarse.len()`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SimplifiedTrace {
    /// Every input point, lossless (high zoom)
    pub detail: Vec<MicroPoint>,
    /// Jitter removed, shape preserved (mid zoom)
    pub medium: Vec<MicroPoint>,
    /// Whole-trace overview (low zoom)
    pub coarse: Vec<MicroPoint>,
}

/// Bounding box of a trace, in degrees.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Bounds {
    pub max_lat: f64,
    pub min_lat: f64,
    pub max_lng: f64,
    pub min_lng: f64,
}

/// Kind of a map marker overlay.
///
/// A closed set: the rendering host maps each kind to an icon, but that
/// mapping lives entirely outside this crate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum MarkerKind {
    Red,
    Green,
    SearchHit,
    New,
}

// ============================================================================
// Tests
// ============================================================================
