//! Tiered trace simplification for progressive map rendering.
//!
//! A raw upload is turned into three resolution tiers:
//! - `detail` keeps every point (high zoom)
//! - `medium` removes GPS jitter but preserves route shape (mid zoom)
//! - `coarse` keeps only the overall route outline (whole-trace overview)
//!
//! The thinned tiers use the `geo` crate's Douglas-Peucker implementation
//! with perpendicular distance measured in degree space; endpoints are always
//! retained. Coordinates are emitted as micro-degree integers so the host can
//! compare geometry with exact equality.

use crate::{GeoPoint, MicroPoint, SimplifiedTrace};
use geo::{algorithm::simplify::Simplify, Coord, LineString};
use log::debug;

/// Tolerances for the thinned tiers, in degrees.
#[derive(Debug, Clone)]
pub struct SimplifyConfig {
    /// Tolerance for the medium (mid-zoom) tier.
    /// Default: 0.0001 (~11 meters), enough to drop GPS jitter
    pub medium_tolerance: f64,

    /// Tolerance for the coarse (overview) tier. Materially larger than
    /// `medium_tolerance` so long traces reduce to their outline.
    /// Default: 0.005 (~550 meters)
    pub coarse_tolerance: f64,
}

impl Default for SimplifyConfig {
    fn default() -> Self {
        Self {
            medium_tolerance: 0.0001,
            coarse_tolerance: 0.005,
        }
    }
}

/// Simplify a trace into the three resolution tiers with default tolerances.
///
/// Returns `None` for fewer than 2 points: a single point or an empty upload
/// is "nothing to simplify", deliberately distinct from malformed input
/// (which the [`GeoPoint`] constructor already rejected).
///
/// For any input of ≥2 points the tier lengths satisfy
/// `detail.len() >= medium.len() >= coarse.len()`.
///
/// # Example
/// ```
/// use trace_render::{simplify, GeoPoint};
///
/// let points = vec![
///     GeoPoint::new(51.417864, 5.445850, 0.0, None).unwrap(),
///     GeoPoint::new(51.411864, 5.441850, 0.0, None).unwrap(),
/// ];
///
/// let tiers = simplify::simplify(&points).unwrap();
/// assert_eq!(tiers.detail.len(), 2);
/// ```
pub fn simplify(points: &[GeoPoint]) -> Option<SimplifiedTrace> {
    simplify_with(points, &SimplifyConfig::default())
}

/// Simplify a trace with explicit tier tolerances.
pub fn simplify_with(points: &[GeoPoint], config: &SimplifyConfig) -> Option<SimplifiedTrace> {
    if points.len() < 2 {
        return None;
    }

    let detail: Vec<MicroPoint> = points
        .iter()
        .map(|p| MicroPoint::from_degrees(p.latitude, p.longitude))
        .collect();

    let line = LineString::new(
        points
            .iter()
            .map(|p| Coord {
                x: p.longitude,
                y: p.latitude,
            })
            .collect(),
    );

    let medium = thin(&line, config.medium_tolerance);
    let coarse = thin(&line, config.coarse_tolerance);

    debug!(
        "Simplified trace: {} points -> {} medium / {} coarse",
        detail.len(),
        medium.len(),
        coarse.len()
    );

    Some(SimplifiedTrace {
        detail,
        medium,
        coarse,
    })
}

/// Simplify many traces at once, in parallel.
///
/// Output order matches input order; each element is what [`simplify_with`]
/// would return for that trace. Traces are independent, so this is safe to
/// run while the host keeps interacting with already-rendered geometry.
#[cfg(feature = "parallel")]
pub fn simplify_batch(
    traces: &[Vec<GeoPoint>],
    config: &SimplifyConfig,
) -> Vec<Option<SimplifiedTrace>> {
    use rayon::prelude::*;

    traces
        .par_iter()
        .map(|points| simplify_with(points, config))
        .collect()
}

/// Douglas-Peucker pass at one tolerance, converting to micro-degrees.
fn thin(line: &LineString, tolerance: f64) -> Vec<MicroPoint> {
    line.simplify(&tolerance)
        .coords()
        .map(|c| MicroPoint::from_degrees(c.y, c.x))
        .collect()
}
