// Diurnal view domain models: day windows and night shading
use serde::Serialize;

/// Hours in one logical local day.
pub const HOURS_PER_DAY: usize = 24;

/// Fill for the night shading bands.
pub const NIGHT_SHADE_COLOR: &str = "rgb(0,0,0,0.1)";

/// Half-open index range `[start, end)` over an hourly series.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Window {
    pub start: usize,
    pub end: usize,
}

impl Window {
    pub fn new(start: usize, end: usize) -> Self {
        Self { start, end }
    }

    pub fn len(&self) -> usize {
        self.end.saturating_sub(self.start)
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// The part of `items` covered by this window; indices past the end of
    /// `items` are dropped rather than panicking.
    pub fn slice<'a, T>(&self, items: &'a [T]) -> &'a [T] {
        let end = self.end.min(items.len());
        let start = self.start.min(end);
        &items[start..end]
    }
}

/// The "yesterday" and "today" local-calendar windows of a series.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct DiurnalWindows {
    pub yesterday: Window,
    pub today: Window,
}

impl DiurnalWindows {
    /// Slice `values` into `(yesterday, today)`.
    pub fn split<'a, T>(&self, values: &'a [T]) -> (&'a [T], &'a [T]) {
        (self.yesterday.slice(values), self.today.slice(values))
    }
}

/// Local sunrise and sunset as fractional hours.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct SolarBoundaries {
    pub sunrise_hour: f64,
    pub sunset_hour: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct NightBand {
    pub color: &'static str,
    pub from: f64,
    pub to: f64,
}

impl SolarBoundaries {
    /// Shading for midnight to sunrise and sunset to midnight.
    pub fn night_bands(&self) -> [NightBand; 2] {
        [
            NightBand {
                color: NIGHT_SHADE_COLOR,
                from: 0.0,
                to: self.sunrise_hour,
            },
            NightBand {
                color: NIGHT_SHADE_COLOR,
                from: self.sunset_hour,
                to: HOURS_PER_DAY as f64,
            },
        ]
    }
}
