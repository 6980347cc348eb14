// AQI side-bar geometry: threshold bands clipped to the visible y-range
use crate::domain::aqi::AQI_LEVELS;
use crate::domain::band::{BAND_SENTINEL, BandSegment};

/// Value -> pixel mapping of a rendered y-axis. Pixel y grows downward, so
/// larger values map to smaller pixels.
pub trait AxisMapping {
    fn to_pixels(&self, value: f64) -> f64;
}

/// Linear y-axis: `min` sits at the bottom of the plot area and `max` at
/// `top`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LinearAxis {
    pub min: f64,
    pub max: f64,
    pub top: f64,
    pub height: f64,
}

impl LinearAxis {
    pub fn new(min: f64, max: f64, top: f64, height: f64) -> Self {
        Self {
            min,
            max,
            top,
            height,
        }
    }
}

impl AxisMapping for LinearAxis {
    fn to_pixels(&self, value: f64) -> f64 {
        self.top + (self.max - value) / (self.max - self.min) * self.height
    }
}

/// Decompose the AQI thresholds into rectangles covering the visible part of
/// the value axis, bottom band first.
///
/// Bands are clipped to `[visible_min, visible_max]`. The open-ended top
/// band stops at [`BAND_SENTINEL`], so the segments partition
/// `[visible_min, min(visible_max, BAND_SENTINEL)]` without gaps or
/// overlaps; any part of the range above the sentinel is left uncovered.
/// A missing axis, a malformed range or a mapping that yields non-finite
/// pixels is logged and produces no segments.
pub fn band_segments<M>(
    axis: Option<&M>,
    visible_min: f64,
    visible_max: f64,
    width: f64,
) -> Vec<BandSegment>
where
    M: AxisMapping + ?Sized,
{
    let Some(axis) = axis else {
        tracing::warn!("AQI band geometry skipped: no axis mapping available");
        return Vec::new();
    };

    if !visible_min.is_finite() || !visible_max.is_finite() || visible_min > visible_max {
        tracing::warn!(
            "AQI band geometry skipped: invalid visible range [{}, {}]",
            visible_min,
            visible_max
        );
        return Vec::new();
    }

    let visible_top_px = axis.to_pixels(visible_max);
    if !visible_top_px.is_finite() {
        tracing::warn!("AQI band geometry skipped: axis mapped {} to a non-finite pixel", visible_max);
        return Vec::new();
    }

    let mut segments = Vec::new();

    for (i, level) in AQI_LEVELS.iter().enumerate() {
        if level.lower_bound >= visible_max {
            break;
        }

        let upper = AQI_LEVELS
            .get(i + 1)
            .map_or(BAND_SENTINEL, |next| next.lower_bound)
            .min(visible_max);
        let lower = level.lower_bound.max(visible_min);
        if upper <= lower {
            continue;
        }

        let bottom_px = axis.to_pixels(lower);
        let top_px = axis.to_pixels(upper);
        if !bottom_px.is_finite() || !top_px.is_finite() {
            tracing::warn!("AQI band geometry skipped: axis produced non-finite pixels");
            return Vec::new();
        }

        if bottom_px <= visible_top_px {
            continue;
        }

        let height = (bottom_px - top_px).abs();
        if height == 0.0 {
            continue;
        }

        segments.push(BandSegment {
            color: level.color,
            top: top_px,
            height,
            width,
        });
    }

    tracing::debug!(
        "AQI band geometry: {} segments for range [{}, {}]",
        segments.len(),
        visible_min,
        visible_max
    );

    segments
}

/// Drawing surface for band rectangles, implemented by the rendering
/// adapter.
pub trait BandRenderer {
    fn draw_rect(&mut self, x: f64, y: f64, width: f64, height: f64, fill: &str);
}

/// Draw `segments` as a stacked bar whose left edge is at `left`.
pub fn render_bands<R>(renderer: &mut R, left: f64, segments: &[BandSegment])
where
    R: BandRenderer + ?Sized,
{
    for segment in segments {
        renderer.draw_rect(left, segment.top, segment.width, segment.height, segment.color);
    }
}
