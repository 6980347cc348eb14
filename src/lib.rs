//! Derived values for PM2.5 air-quality charts.
//!
//! Turns hourly PM2.5 series into what a chart needs besides styling: AQI
//! categories and colors, a stable y-axis ceiling, AQI side-bar rectangles,
//! daily summaries labelled by local day, and for diurnal views the local
//! "yesterday"/"today" split with day/night shading boundaries.
//!
//! Time zone conversion and sunrise/sunset lookups go through the
//! [`CivilClock`] and [`SunTimesProvider`] traits; [`ChronoTzClock`] and
//! [`SpaSunTimes`] are the bundled implementations.
pub mod application;
pub mod domain;
pub mod infrastructure;
pub mod presentation;

pub use application::band_geometry::{AxisMapping, BandRenderer, LinearAxis, band_segments, render_bands};
pub use application::civil_clock::{CivilClock, CivilTime};
pub use application::daily_service::DailyPlotService;
pub use application::diurnal_service::{DiurnalWindowService, windows_for_last_hour};
pub use application::plot_service::{DiurnalPlotService, HourlyBarService, TimeseriesPlotService};
pub use application::solar_service::{SolarBoundaryService, representative_instant};
pub use application::sun_times::{SunTimes, SunTimesProvider};
pub use application::validation::{validate_daily_arrays, validate_plot_arrays};
pub use domain::aqi::{AqiCategory, NEUTRAL_COLOR, aqi_lines, classify, color_of, colored_points};
pub use domain::band::BandSegment;
pub use domain::diurnal::{DiurnalWindows, SolarBoundaries, Window};
pub use domain::error::{PlotDataError, Result};
pub use domain::plot::{
    DailyBarData, DailyRange, DailyRangeData, DailyRequest, DiurnalPlotData, HourlyBarData, PlotRequest,
    TimeseriesData,
};
pub use domain::scale::{scale_ceiling_for, scale_ceiling_of};
pub use infrastructure::config::PlotConfig;
pub use infrastructure::spa_sun_times::SpaSunTimes;
pub use infrastructure::tz_clock::ChronoTzClock;
