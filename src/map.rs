//! OpenStreetMap embed URL construction
//!
//! The map view is a static iframe; all this module does is build its URL:
//! a bounding box of center ± [`BBOX_DELTA`] degrees (`left,bottom,right,top`)
//! plus a marker pin at the center.

/// Half-width of the bounding box, in degrees
pub const BBOX_DELTA: f64 = 0.05;

const EMBED_BASE: &str = "https://www.openstreetmap.org/export/embed.html";

/// Build the embed URL for a map centered on the given coordinates
#[must_use]
pub fn embed_url(latitude: f64, longitude: f64) -> String {
    let bbox = [
        longitude - BBOX_DELTA,
        latitude - BBOX_DELTA,
        longitude + BBOX_DELTA,
        latitude + BBOX_DELTA,
    ]
    .map(|v| v.to_string())
    .join(",");

    format!("{EMBED_BASE}?bbox={bbox}&layer=mapnik&marker={latitude},{longitude}")
}
