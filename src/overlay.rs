//! Per-overlay redraw tracking.
//!
//! [`OverlayRedrawCache`] remembers, for every overlay currently on screen,
//! whether its geometry was last drawn at detail or coarse resolution, so a
//! render pass only swaps in new geometry when the required resolution
//! actually changed. An entry exists iff the overlay is on screen; the
//! lifecycle follows the visible-overlay set.

use std::collections::HashMap;

/// Mapping from overlay identifier to its last-rendered resolution.
#[derive(Debug, Default)]
pub struct OverlayRedrawCache {
    entries: HashMap<String, bool>,
}

impl OverlayRedrawCache {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of currently tracked overlays.
    pub fn count(&self) -> usize {
        self.entries.len()
    }

    /// Whether the overlay must be redrawn to satisfy the required
    /// resolution.
    ///
    /// True if the overlay has no recorded entry, or if detail is wanted and
    /// the last draw was not at detail. A detail-resolution overlay never
    /// needs a redraw for a later coarse request.
    pub fn should_redraw(&self, id: &str, want_detail: bool) -> bool {
        match self.entries.get(id) {
            None => true,
            Some(&rendered_at_detail) => want_detail && !rendered_at_detail,
        }
    }

    /// Record that the overlay was drawn at the given resolution,
    /// overwriting any previous entry.
    pub fn add(&mut self, id: impl Into<String>, is_detail: bool) {
        self.entries.insert(id.into(), is_detail);
    }

    /// Forget the overlay (it left the viewport).
    pub fn remove(&mut self, id: &str) {
        self.entries.remove(id);
    }

    /// Discard all entries.
    pub fn clear(&mut self) {
        self.entries.clear();
    }
}
