// Command-line entry point - wire adapters into the plot services
use std::sync::Arc;

use anyhow::Context;
use tracing_subscriber::EnvFilter;

use pm25_plot_data::infrastructure::config::load_plot_config;
use pm25_plot_data::presentation::document::{PlotReport, parse_document};
use pm25_plot_data::{
    ChronoTzClock, CivilClock, DailyPlotService, DiurnalPlotService, DiurnalWindowService,
    HourlyBarService, SolarBoundaryService, SpaSunTimes, TimeseriesPlotService,
};

fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let path = std::env::args()
        .nth(1)
        .context("usage: pm25-plot-data <series.json>")?;

    // Load configuration, then let the document override per-site settings
    let mut config = load_plot_config()?;
    let json = std::fs::read_to_string(&path).with_context(|| format!("Failed to read {}", path))?;
    let document = parse_document(&json)?;
    document.apply_to(&mut config);
    let daily_request = document.daily_request();
    let request = document.into_request();

    // Collaborators (infrastructure layer)
    let clock: Arc<dyn CivilClock> = Arc::new(ChronoTzClock);
    let sun = Arc::new(SpaSunTimes::new(config.delta_t_seconds));

    // Services (application layer)
    let diurnal = DiurnalPlotService::new(
        DiurnalWindowService::new(clock.clone()),
        SolarBoundaryService::new(clock.clone(), sun),
        config.clone(),
    );
    let hourly = HourlyBarService::new(config.clone());
    let timeseries = TimeseriesPlotService::new(config.clone());
    let daily = DailyPlotService::new(clock, config);

    // Optional plots only when their series are present
    let timeseries_data = match request.pm25 {
        Some(_) => Some(timeseries.build(&request)?),
        None => None,
    };
    let (daily_data, daily_range_data) = match &daily_request {
        Some(summary) => {
            let ranges = match (&summary.daily_min, &summary.daily_max) {
                (Some(_), Some(_)) => Some(daily.ranges(summary)?),
                _ => None,
            };
            (Some(daily.bars(summary)?), ranges)
        }
        None => (None, None),
    };

    let report = PlotReport {
        diurnal: diurnal.build(&request)?,
        hourly: hourly.build(&request)?,
        timeseries: timeseries_data,
        daily: daily_data,
        daily_range: daily_range_data,
    };
    tracing::debug!("Built plot data for {} samples", request.datetime.len());

    println!("{}", serde_json::to_string_pretty(&report)?);
    Ok(())
}
