//! Local UTC offset resolution for trace coordinates.
//!
//! Finding the IANA timezone that applies at a coordinate needs a polygon (or
//! coarse grid) table; that table is an external data collaborator supplied
//! by the host through [`TimezoneLookup`], not reimplemented here. Once an
//! identifier is known, the civil-calendar offset for a concrete date is
//! computed with `chrono-tz`, so daylight-saving rules are honored: the same
//! coordinate yields different offsets for a summer and a winter date.
//!
//! Hosts without their own polygon table can enable the `tzf` feature for a
//! built-in resolver backed by `tzf-rs`.

use crate::{Result, TraceError};
use chrono::{DateTime, Offset, Utc};
use chrono_tz::Tz;

/// Geographic-to-timezone-identifier resolver.
///
/// Implementations return the IANA identifier (e.g. `"Europe/Amsterdam"`)
/// applicable at the coordinate, or `None` when the coordinate falls outside
/// every known timezone polygon.
pub trait TimezoneLookup {
    fn timezone_id(&self, latitude: f64, longitude: f64) -> Option<String>;
}

/// UTC offset in minutes observed at the coordinate on the given instant.
///
/// Fails with [`TraceError::UnresolvedTimezone`] when the lookup yields
/// nothing or an identifier `chrono-tz` does not know. Falling back to UTC in
/// that case is host policy, not this crate's.
///
/// # Example
/// ```
/// use chrono::{TimeZone, Utc};
/// use trace_render::timezone::{timezone_offset_minutes, TimezoneLookup};
///
/// struct Amsterdam;
/// impl TimezoneLookup for Amsterdam {
///     fn timezone_id(&self, _lat: f64, _lng: f64) -> Option<String> {
///         Some("Europe/Amsterdam".to_string())
///     }
/// }
///
/// let summer = Utc.with_ymd_and_hms(2019, 9, 15, 10, 20, 30).unwrap();
/// let offset = timezone_offset_minutes(&Amsterdam, 51.417864, 5.445850, summer).unwrap();
/// assert_eq!(offset, 120); // CEST
/// ```
pub fn timezone_offset_minutes<L: TimezoneLookup + ?Sized>(
    lookup: &L,
    latitude: f64,
    longitude: f64,
    at: DateTime<Utc>,
) -> Result<i32> {
    let unresolved = TraceError::UnresolvedTimezone {
        latitude,
        longitude,
    };

    let id = lookup
        .timezone_id(latitude, longitude)
        .ok_or_else(|| unresolved.clone())?;
    let tz: Tz = id.parse().map_err(|_| unresolved)?;

    Ok(at.with_timezone(&tz).offset().fix().local_minus_utc() / 60)
}

/// Built-in resolver backed by the `tzf-rs` polygon table.
///
/// Construction parses the embedded table, so hosts should build one instance
/// and reuse it.
#[cfg(feature = "tzf")]
pub struct TzfLookup {
    finder: tzf_rs::DefaultFinder,
}

#[cfg(feature = "tzf")]
impl TzfLookup {
    pub fn new() -> Self {
        Self {
            finder: tzf_rs::DefaultFinder::new(),
        }
    }
}

#[cfg(feature = "tzf")]
impl Default for TzfLookup {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(feature = "tzf")]
impl TimezoneLookup for TzfLookup {
    fn timezone_id(&self, latitude: f64, longitude: f64) -> Option<String> {
        // tzf-rs takes (lng, lat) and returns "" for unknown coordinates
        let name = self.finder.get_tz_name(longitude, latitude);
        if name.is_empty() {
            None
        } else {
            Some(name.to_string())
        }
    }
}
