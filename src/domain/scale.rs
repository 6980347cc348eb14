// Quantized y-axis ceilings for PM2.5 charts

/// A row of the ceiling table: maxima up to `bound` get an axis ceiling of
/// `ceiling`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct YMaxBreakpoint {
    pub bound: f64,
    pub ceiling: f64,
}

const fn breakpoint(bound: f64, ceiling: f64) -> YMaxBreakpoint {
    YMaxBreakpoint { bound, ceiling }
}

/// Deliberately coarse so the axis does not move with every new reading.
pub const YMAX_BREAKPOINTS: [YMaxBreakpoint; 7] = [
    breakpoint(50.0, 50.0),
    breakpoint(100.0, 100.0),
    breakpoint(200.0, 200.0),
    breakpoint(400.0, 500.0),
    breakpoint(600.0, 600.0),
    breakpoint(1000.0, 1000.0),
    breakpoint(1500.0, 1500.0),
];

/// Headroom applied to maxima beyond the last breakpoint.
pub const FALLBACK_MULTIPLIER: f64 = 1.05;

pub const DEFAULT_CEILING: f64 = YMAX_BREAKPOINTS[0].ceiling;

/// Axis ceiling for the largest value on a chart. Non-finite input falls back
/// to the smallest ceiling.
pub fn scale_ceiling_of(max_value: f64) -> f64 {
    if !max_value.is_finite() {
        return DEFAULT_CEILING;
    }

    YMAX_BREAKPOINTS
        .iter()
        .find(|bp| max_value <= bp.bound)
        .map(|bp| bp.ceiling)
        .unwrap_or(FALLBACK_MULTIPLIER * max_value)
}

/// Axis ceiling over every present, finite value. Missing values are skipped;
/// an input with nothing to plot gets the smallest ceiling.
pub fn scale_ceiling_for<I>(values: I) -> f64
where
    I: IntoIterator<Item = Option<f64>>,
{
    values
        .into_iter()
        .flatten()
        .filter(|v| v.is_finite())
        .fold(None, |max: Option<f64>, v| Some(max.map_or(v, |m| m.max(v))))
        .map_or(DEFAULT_CEILING, scale_ceiling_of)
}
