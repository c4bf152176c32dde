//! Summary statistics for recorded GPS traces.
//!
//! Every function here is pure and takes an ordered point sequence (insertion
//! order = temporal order along the recorded path). Statistics that need at
//! least one point fail with [`TraceError::EmptyInput`]; the length-dependent
//! degenerate cases (0 or 1 points) of the remaining functions return 0.

use crate::geo_utils::polyline_length;
use crate::{Bounds, GeoPoint, Result, TraceError};
use serde::{Deserialize, Serialize};

/// Calibration factor applied once to the total positive elevation gain,
/// compensating for barometric/GPS altitude noise.
const ELEVATION_CALIBRATION: f64 = 0.95;

/// Total trace distance in meters: the left-to-right sum of great-circle
/// distances between consecutive points. 0 or 1 points yield 0.0.
pub fn distance_of_trace(points: &[GeoPoint]) -> f64 {
    polyline_length(points)
}

/// Trace duration in seconds: last timestamp minus first.
///
/// Returns 0 for fewer than 2 points or when either endpoint has no
/// timestamp. Not clamped: a trace recorded with inverted timestamps yields
/// a negative duration, which the caller must guard against.
pub fn duration_seconds(points: &[GeoPoint]) -> i64 {
    if points.len() < 2 {
        return 0;
    }
    match (points[0].timestamp, points[points.len() - 1].timestamp) {
        (Some(first), Some(last)) => (last - first).num_seconds(),
        _ => 0,
    }
}

/// Total positive elevation gain in meters.
///
/// Sums `max(0, alt[i+1] - alt[i])` over consecutive pairs, then applies the
/// calibration factor once to the total (not per step). 0 or 1 points yield
/// 0.0.
pub fn elevation_gain(points: &[GeoPoint]) -> f64 {
    let climbed: f64 = points
        .windows(2)
        .map(|w| (w[1].altitude - w[0].altitude).max(0.0))
        .sum();
    climbed * ELEVATION_CALIBRATION
}

/// Minimum altitude across all points, in meters.
pub fn lowest_altitude(points: &[GeoPoint]) -> Result<f64> {
    points
        .iter()
        .map(|p| p.altitude)
        .reduce(f64::min)
        .ok_or(TraceError::EmptyInput {
            operation: "lowest_altitude",
        })
}

/// Maximum altitude across all points, in meters.
pub fn highest_altitude(points: &[GeoPoint]) -> Result<f64> {
    points
        .iter()
        .map(|p| p.altitude)
        .reduce(f64::max)
        .ok_or(TraceError::EmptyInput {
            operation: "highest_altitude",
        })
}

/// Bounding box of the trace in degrees.
///
/// A single point yields a degenerate (zero-area) box equal to that point on
/// all four fields.
pub fn bounding_box(points: &[GeoPoint]) -> Result<Bounds> {
    if points.is_empty() {
        return Err(TraceError::EmptyInput {
            operation: "bounding_box",
        });
    }

    let mut max_lat = f64::MIN;
    let mut min_lat = f64::MAX;
    let mut max_lng = f64::MIN;
    let mut min_lng = f64::MAX;

    for p in points {
        max_lat = max_lat.max(p.latitude);
        min_lat = min_lat.min(p.latitude);
        max_lng = max_lng.max(p.longitude);
        min_lng = min_lng.min(p.longitude);
    }

    Ok(Bounds {
        max_lat,
        min_lat,
        max_lng,
        min_lng,
    })
}

/// Precomputed per-trace metadata, ready for the rendering host.
///
/// Computed once after upload so the host never recomputes statistics during
/// render passes.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TraceSummary {
    /// Total distance in meters
    pub distance_meters: f64,
    /// Elapsed seconds between first and last timestamp (0 if unknown)
    pub duration_seconds: i64,
    /// Calibrated positive elevation gain in meters
    pub elevation_gain: f64,
    /// Minimum altitude in meters
    pub lowest_altitude: f64,
    /// Maximum altitude in meters
    pub highest_altitude: f64,
    /// Bounding box in degrees
    pub bounds: Bounds,
}

impl TraceSummary {
    /// Compute all statistics for a trace in one call.
    ///
    /// Fails with [`TraceError::EmptyInput`] on zero points.
    pub fn from_points(points: &[GeoPoint]) -> Result<Self> {
        if points.is_empty() {
            return Err(TraceError::EmptyInput {
                operation: "TraceSummary::from_points",
            });
        }

        Ok(Self {
            distance_meters: distance_of_trace(points),
            duration_seconds: duration_seconds(points),
            elevation_gain: elevation_gain(points),
            lowest_altitude: lowest_altitude(points)?,
            highest_altitude: highest_altitude(points)?,
            bounds: bounding_box(points)?,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geo_utils::haversine_distance;
    use chrono::{TimeZone, Utc};

    fn point(lat: f64, lng: f64) -> GeoPoint {
        GeoPoint::new(lat, lng, 0.0, None).unwrap()
    }

    fn point_at_altitude(altitude: f64) -> GeoPoint {
        GeoPoint::new(0.0, 0.0, altitude, None).unwrap()
    }

    fn point_at_time(year: i32, month: u32, day: u32, h: u32, m: u32, s: u32) -> GeoPoint {
        let ts = Utc.with_ymd_and_hms(year, month, day, h, m, s).unwrap();
        GeoPoint::new(0.0, 0.0, 0.0, Some(ts)).unwrap()
    }

    #[test]
    fn test_distance_single_point_is_zero() {
        assert_eq!(distance_of_trace(&[point(30.849635, -83.24559)]), 0.0);
        assert_eq!(distance_of_trace(&[]), 0.0);
    }

    #[test]
    fn test_distance_two_points_equals_haversine() {
        let p1 = point(30.849635, -83.24559);
        let p2 = point(27.950575, -82.457178);
        assert_eq!(distance_of_trace(&[p1, p2]), haversine_distance(&p1, &p2));
    }

    #[test]
    fn test_distance_three_points_is_ordered_sum() {
        let p1 = point(30.849635, -83.24559);
        let p2 = point(27.950575, -82.457178);
        let p3 = point(27.950175, -82.452178);
        let expected = haversine_distance(&p1, &p2) + haversine_distance(&p2, &p3);
        assert_eq!(distance_of_trace(&[p1, p2, p3]), expected);
    }

    #[test]
    fn test_duration() {
        let p1 = point_at_time(2019, 9, 15, 10, 20, 0);
        let p2 = point_at_time(2019, 9, 15, 10, 21, 0);
        let p3 = point_at_time(2019, 9, 15, 10, 21, 30);

        assert_eq!(duration_seconds(&[p1]), 0);
        assert_eq!(duration_seconds(&[p1, p2]), 60);
        assert_eq!(duration_seconds(&[p1, p2, p3]), 90);
    }

    #[test]
    fn test_duration_missing_timestamp_is_zero() {
        let timed = point_at_time(2019, 9, 15, 10, 20, 0);
        let synthetic = point(0.0, 0.0);
        assert_eq!(duration_seconds(&[timed, synthetic]), 0);
        assert_eq!(duration_seconds(&[synthetic, timed]), 0);
    }

    #[test]
    fn test_duration_inverted_timestamps_is_negative() {
        let p1 = point_at_time(2019, 9, 15, 10, 21, 0);
        let p2 = point_at_time(2019, 9, 15, 10, 20, 0);
        assert_eq!(duration_seconds(&[p1, p2]), -60);
    }

    #[test]
    fn test_elevation_gain() {
        let p1 = point_at_altitude(10.1);
        let p2 = point_at_altitude(11.1);
        let p3 = point_at_altitude(9.1);

        assert_eq!(elevation_gain(&[p1]), 0.0);
        assert!((elevation_gain(&[p1, p2]) - 0.95).abs() < 1e-9);
        // The descending segment contributes nothing
        assert!((elevation_gain(&[p1, p2, p3]) - 0.95).abs() < 1e-9);
    }

    #[test]
    fn test_altitude_extremes() {
        let p1 = point_at_altitude(10.1);
        let p2 = point_at_altitude(11.1);
        let p3 = point_at_altitude(9.1);

        assert_eq!(lowest_altitude(&[p1]).unwrap(), 10.1);
        assert_eq!(lowest_altitude(&[p1, p2]).unwrap(), 10.1);
        assert_eq!(lowest_altitude(&[p1, p2, p3]).unwrap(), 9.1);
        assert_eq!(highest_altitude(&[p1, p2, p3]).unwrap(), 11.1);
    }

    #[test]
    fn test_altitude_extremes_empty_input() {
        assert!(matches!(
            lowest_altitude(&[]),
            Err(TraceError::EmptyInput { .. })
        ));
        assert!(matches!(
            highest_altitude(&[]),
            Err(TraceError::EmptyInput { .. })
        ));
    }

    #[test]
    fn test_bounding_box_single_point_is_degenerate() {
        let b = bounding_box(&[point(51.443348, 5.479333)]).unwrap();
        assert_eq!(
            b,
            Bounds {
                max_lat: 51.443348,
                min_lat: 51.443348,
                max_lng: 5.479333,
                min_lng: 5.479333,
            }
        );
    }

    #[test]
    fn test_bounding_box_five_cities() {
        let points = [
            point(51.443348, 5.479333),    // Eindhoven
            point(48.857218, 2.341885),    // Paris
            point(37.803254, -122.417321), // San Francisco
            point(-23.591268, -46.614789), // São Paulo
            point(-33.855866, 151.216202), // Sydney
        ];
        let b = bounding_box(&points).unwrap();
        assert_eq!(
            b,
            Bounds {
                max_lat: 51.443348,
                min_lat: -33.855866,
                max_lng: 151.216202,
                min_lng: -122.417321,
            }
        );
    }

    #[test]
    fn test_bounding_box_empty_input() {
        assert!(matches!(
            bounding_box(&[]),
            Err(TraceError::EmptyInput { .. })
        ));
    }

    #[test]
    fn test_summary_from_points() {
        let t1 = Utc.with_ymd_and_hms(2019, 9, 15, 10, 20, 0).unwrap();
        let t2 = Utc.with_ymd_and_hms(2019, 9, 15, 10, 21, 0).unwrap();
        let p1 = GeoPoint::new(51.417864, 5.445850, 18.0, Some(t1)).unwrap();
        let p2 = GeoPoint::new(51.411864, 5.441850, 21.5, Some(t2)).unwrap();

        let summary = TraceSummary::from_points(&[p1, p2]).unwrap();
        assert_eq!(summary.distance_meters, distance_of_trace(&[p1, p2]));
        assert_eq!(summary.duration_seconds, 60);
        assert!((summary.elevation_gain - 3.5 * 0.95).abs() < 1e-9);
        assert_eq!(summary.lowest_altitude, 18.0);
        assert_eq!(summary.highest_altitude, 21.5);
        assert_eq!(summary.bounds.max_lat, 51.417864);
    }

    #[test]
    fn test_summary_empty_input() {
        assert!(matches!(
            TraceSummary::from_points(&[]),
            Err(TraceError::EmptyInput { .. })
        ));
    }
}
