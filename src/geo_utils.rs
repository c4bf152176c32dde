//! Geographic utilities shared by the statistics and simplification modules.
//!
//! All functions expect WGS84 coordinates (latitude/longitude in degrees),
//! the standard produced by GPS receivers and track-file parsers.

use crate::GeoPoint;
use geo::{Distance, Haversine, Point};

/// Calculate the great-circle distance between two GPS points using the
/// haversine formula.
///
/// Uses the `geo` crate's [`Haversine`] metric (mean Earth radius), so the
/// result matches reference haversine implementations to floating precision.
///
/// # Example
/// ```
/// use trace_render::{geo_utils, GeoPoint};
///
/// let london = GeoPoint::new(51.5074, -0.1278, 0.0, None).unwrap();
/// let paris = GeoPoint::new(48.8566, 2.3522, 0.0, None).unwrap();
/// let distance = geo_utils::haversine_distance(&london, &paris);
/// assert!((distance - 343_560.0).abs() < 1000.0); // ~344 km
/// ```
#[inline]
pub fn haversine_distance(p1: &GeoPoint, p2: &GeoPoint) -> f64 {
    let point1 = Point::new(p1.longitude, p1.latitude);
    let point2 = Point::new(p2.longitude, p2.latitude);
    Haversine::distance(point1, point2)
}

/// Total length of a polyline in meters, accumulated over consecutive pairs
/// left to right. Empty or single-point input returns 0.0.
pub fn polyline_length(points: &[GeoPoint]) -> f64 {
    if points.len() < 2 {
        return 0.0;
    }

    points
        .windows(2)
        .map(|w| haversine_distance(&w[0], &w[1]))
        .sum()
}
