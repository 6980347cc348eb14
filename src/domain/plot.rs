// Derived plot data handed to the chart assembly layer
use chrono::{DateTime, Utc};
use serde::Serialize;

use super::aqi::{AqiLine, ColoredPoint};
use super::diurnal::{DiurnalWindows, NightBand, SolarBoundaries};

/// Raw plot input: parallel hourly arrays plus an optional 24-hour profile.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PlotRequest {
    pub datetime: Vec<DateTime<Utc>>,
    pub pm25: Option<Vec<Option<f64>>>,
    pub nowcast: Vec<Option<f64>>,
    pub hour_average: Vec<Option<f64>>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct YAxisRange {
    pub min: f64,
    pub max: f64,
}

impl YAxisRange {
    pub fn new(min: f64, max: f64) -> Self {
        Self { min, max }
    }
}

/// Everything a diurnal (time-of-day) chart needs beyond styling.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DiurnalPlotData {
    pub title: String,
    pub windows: DiurnalWindows,
    pub yesterday: Vec<ColoredPoint>,
    pub today: Vec<ColoredPoint>,
    pub hour_average: Vec<Option<f64>>,
    pub y_axis: YAxisRange,
    pub aqi_lines: Vec<AqiLine>,
    pub solar: SolarBoundaries,
    pub night_bands: [NightBand; 2],
}

/// Hourly NowCast bar chart data.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct HourlyBarData {
    pub title: String,
    pub start: DateTime<Utc>,
    pub points: Vec<ColoredPoint>,
    pub y_axis: YAxisRange,
}

/// Daily summary input: one timestamp per day with its mean and, for range
/// charts, its minimum and maximum.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct DailyRequest {
    pub daily_datetime: Vec<DateTime<Utc>>,
    pub daily_mean: Vec<Option<f64>>,
    pub daily_min: Option<Vec<Option<f64>>>,
    pub daily_max: Option<Vec<Option<f64>>>,
}

/// Daily mean bar chart data. `categories` are local-day labels such as
/// `"Jan 05"`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DailyBarData {
    pub title: String,
    pub categories: Vec<String>,
    pub points: Vec<ColoredPoint>,
    pub y_axis: YAxisRange,
    pub aqi_lines: Vec<AqiLine>,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct DailyRange {
    pub low: Option<f64>,
    pub high: Option<f64>,
}

/// Daily min..max columns with the colored mean on top.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DailyRangeData {
    pub title: String,
    pub categories: Vec<String>,
    pub means: Vec<ColoredPoint>,
    pub ranges: Vec<DailyRange>,
    pub y_axis: YAxisRange,
    pub aqi_lines: Vec<AqiLine>,
}

/// Hourly raw PM2.5 points with the NowCast line over them.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TimeseriesData {
    pub title: String,
    pub start: DateTime<Utc>,
    pub pm25: Vec<Option<f64>>,
    pub nowcast: Vec<Option<f64>>,
    pub y_axis: YAxisRange,
    pub aqi_lines: Vec<AqiLine>,
}
