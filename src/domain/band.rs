// AQI band rectangle descriptors
use serde::Serialize;

/// Upper edge used for the open-ended `Hazardous` band.
pub const BAND_SENTINEL: f64 = 5000.0;

pub const DEFAULT_BAND_WIDTH: f64 = 6.0;

/// One colored rectangle of the AQI side bar, in pixel space (y grows
/// downward).
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BandSegment {
    pub color: &'static str,
    pub top: f64,
    pub height: f64,
    pub width: f64,
}
