//! Viewport load tracking.
//!
//! [`LoadedAreaCache`] records which geographic rectangles have already been
//! fetched and rendered, and at which resolution, so a viewport change can
//! cheaply decide whether any new data is needed at all. One instance is
//! owned per map session by the rendering host and reset explicitly when the
//! data source changes.

use log::debug;

/// A rectangle that has been loaded, with its resolution flag.
///
/// Entries are append-only: never mutated or individually removed, only
/// cleared wholesale.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LoadedArea {
    pub max_lat: f64,
    pub max_lng: f64,
    pub min_lat: f64,
    pub min_lng: f64,
    pub is_detail: bool,
}

/// Ordered collection of loaded viewport rectangles.
#[derive(Debug, Default)]
pub struct LoadedAreaCache {
    areas: Vec<LoadedArea>,
}

impl LoadedAreaCache {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a successfully loaded rectangle.
    ///
    /// No deduplication or merging: overlapping and redundant rectangles may
    /// coexist.
    pub fn add_loaded(
        &mut self,
        max_lat: f64,
        max_lng: f64,
        min_lat: f64,
        min_lng: f64,
        is_detail: bool,
    ) {
        self.areas.push(LoadedArea {
            max_lat,
            max_lng,
            min_lat,
            min_lng,
            is_detail,
        });
    }

    /// Whether the query rectangle is already covered at the requested
    /// resolution.
    ///
    /// True iff some stored entry either
    /// (a) geographically contains the query rectangle and was loaded at
    ///     detail resolution, or
    /// (b) is non-detail while the query is also non-detail — containment is
    ///     deliberately NOT checked in this arm.
    ///
    /// The asymmetry is load-bearing: a non-detail load acts as a process-wide
    /// "coarse data is present" flag, while only detail loads are
    /// rectangle-scoped. Low-zoom viewports therefore never re-fetch once any
    /// coarse load has completed.
    pub fn is_loaded(
        &self,
        max_lat: f64,
        max_lng: f64,
        min_lat: f64,
        min_lng: f64,
        is_detail: bool,
    ) -> bool {
        self.areas.iter().any(|area| {
            let contained_at_detail = area.is_detail
                && max_lat <= area.max_lat
                && max_lng <= area.max_lng
                && min_lat >= area.min_lat
                && min_lng >= area.min_lng;
            contained_at_detail || (!area.is_detail && !is_detail)
        })
    }

    /// Discard all entries (full viewport/data reset).
    pub fn clear(&mut self) {
        debug!("Clearing {} loaded areas", self.areas.len());
        self.areas.clear();
    }

    /// Number of recorded rectangles.
    pub fn len(&self) -> usize {
        self.areas.len()
    }

    pub fn is_empty(&self) -> bool {
        self.areas.is_empty()
    }
}
