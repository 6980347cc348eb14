// Plot services - derive everything a chart needs from one plot request
use crate::application::band_geometry::{AxisMapping, band_segments};
use crate::application::diurnal_service::DiurnalWindowService;
use crate::application::solar_service::SolarBoundaryService;
use crate::application::validation::{
    require_finite, require_same_length, validate_plot_arrays, warn_if_not_increasing,
};
use crate::domain::aqi::{aqi_lines, colored_points};
use crate::domain::band::BandSegment;
use crate::domain::error::{PlotDataError, Result};
use crate::domain::plot::{DiurnalPlotData, HourlyBarData, PlotRequest, TimeseriesData, YAxisRange};
use crate::domain::scale::scale_ceiling_for;
use crate::infrastructure::config::PlotConfig;

/// Reject malformed input before any windowing or sun lookups run.
fn validate_request(request: &PlotRequest) -> Result<()> {
    match &request.pm25 {
        Some(pm25) => validate_plot_arrays(&request.datetime, pm25, &request.nowcast)?,
        None => {
            require_same_length(
                "datetime",
                request.datetime.len(),
                "nowcast",
                request.nowcast.len(),
            )?;
            require_finite("nowcast", &request.nowcast)?;
            warn_if_not_increasing("datetime", &request.datetime);
        }
    }
    require_finite("hour_average", &request.hour_average)
}

#[derive(Clone)]
pub struct DiurnalPlotService {
    windows: DiurnalWindowService,
    solar: SolarBoundaryService,
    config: PlotConfig,
}

impl DiurnalPlotService {
    pub fn new(windows: DiurnalWindowService, solar: SolarBoundaryService, config: PlotConfig) -> Self {
        Self {
            windows,
            solar,
            config,
        }
    }

    pub fn build(&self, request: &PlotRequest) -> Result<DiurnalPlotData> {
        validate_request(request)?;

        let latitude = self
            .config
            .latitude
            .ok_or(PlotDataError::MissingSetting("latitude"))?;
        let longitude = self
            .config
            .longitude
            .ok_or(PlotDataError::MissingSetting("longitude"))?;
        let zone = self.config.timezone.as_str();

        let windows = self.windows.windows(&request.datetime, zone)?;
        let (yesterday, today) = windows.split(&request.nowcast);

        let solar = self
            .solar
            .boundaries_for_series(&request.datetime, latitude, longitude, zone)?;

        let y_max = scale_ceiling_for(
            request
                .hour_average
                .iter()
                .chain(yesterday)
                .chain(today)
                .copied(),
        );

        Ok(DiurnalPlotData {
            title: self.config.chart_title(),
            windows,
            yesterday: colored_points(yesterday),
            today: colored_points(today),
            hour_average: request.hour_average.clone(),
            y_axis: YAxisRange::new(0.0, y_max),
            aqi_lines: aqi_lines(self.config.aqi_line_width),
            solar,
            night_bands: solar.night_bands(),
        })
    }
}

#[derive(Clone)]
pub struct HourlyBarService {
    config: PlotConfig,
}

impl HourlyBarService {
    pub fn new(config: PlotConfig) -> Self {
        Self { config }
    }

    pub fn build(&self, request: &PlotRequest) -> Result<HourlyBarData> {
        validate_request(request)?;

        let start = *request
            .datetime
            .first()
            .ok_or(PlotDataError::EmptySeries("datetime"))?;

        Ok(HourlyBarData {
            title: self.config.chart_title(),
            start,
            points: colored_points(&request.nowcast),
            y_axis: YAxisRange::new(0.0, scale_ceiling_for(request.nowcast.iter().copied())),
        })
    }
}

#[derive(Clone)]
pub struct TimeseriesPlotService {
    config: PlotConfig,
}

impl TimeseriesPlotService {
    pub fn new(config: PlotConfig) -> Self {
        Self { config }
    }

    /// Raw hourly PM2.5 under the NowCast line. Needs `pm25`, which also
    /// sets the y-axis ceiling.
    pub fn build(&self, request: &PlotRequest) -> Result<TimeseriesData> {
        let pm25 = request
            .pm25
            .as_ref()
            .ok_or(PlotDataError::MissingSeries("pm25"))?;
        validate_request(request)?;

        let start = *request
            .datetime
            .first()
            .ok_or(PlotDataError::EmptySeries("datetime"))?;

        Ok(TimeseriesData {
            title: self.config.chart_title(),
            start,
            pm25: pm25.clone(),
            nowcast: request.nowcast.clone(),
            y_axis: YAxisRange::new(0.0, scale_ceiling_for(pm25.iter().copied())),
            aqi_lines: aqi_lines(self.config.aqi_line_width),
        })
    }

    /// AQI side-bar rectangles for a rendered chart, `band_width` pixels
    /// wide and clipped to the chart's y-axis range.
    pub fn aqi_bar<M>(&self, axis: Option<&M>, data: &TimeseriesData) -> Vec<BandSegment>
    where
        M: AxisMapping + ?Sized,
    {
        band_segments(axis, data.y_axis.min, data.y_axis.max, self.config.band_width)
    }
}
