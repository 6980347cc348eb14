// Daily summary plots - one category per local day
use crate::application::civil_clock::CivilClock;
use crate::application::validation::validate_daily_arrays;
use crate::domain::aqi::{aqi_lines, colored_points};
use crate::domain::error::{PlotDataError, Result};
use crate::domain::plot::{DailyBarData, DailyRange, DailyRangeData, DailyRequest, YAxisRange};
use crate::domain::scale::scale_ceiling_for;
use crate::infrastructure::config::PlotConfig;
use chrono::{DateTime, Utc};
use std::sync::Arc;

const DAY_LABEL_FORMAT: &str = "%b %d";

#[derive(Clone)]
pub struct DailyPlotService {
    clock: Arc<dyn CivilClock>,
    config: PlotConfig,
}

impl DailyPlotService {
    pub fn new(clock: Arc<dyn CivilClock>, config: PlotConfig) -> Self {
        Self { clock, config }
    }

    /// Label each timestamp with its local calendar day, e.g. `"Dec 31"`.
    pub fn day_labels(&self, times: &[DateTime<Utc>]) -> Result<Vec<String>> {
        let zone = self.config.timezone.as_str();
        times
            .iter()
            .map(|instant| {
                let local = self.clock.civil_time(*instant, zone)?;
                Ok(local.date.format(DAY_LABEL_FORMAT).to_string())
            })
            .collect()
    }

    /// Colored daily means. The y-axis ceiling follows the means.
    pub fn bars(&self, request: &DailyRequest) -> Result<DailyBarData> {
        validate_daily_arrays(
            &request.daily_datetime,
            &request.daily_mean,
            request.daily_min.as_deref(),
            request.daily_max.as_deref(),
        )?;

        Ok(DailyBarData {
            title: self.config.chart_title(),
            categories: self.day_labels(&request.daily_datetime)?,
            points: colored_points(&request.daily_mean),
            y_axis: YAxisRange::new(0.0, scale_ceiling_for(request.daily_mean.iter().copied())),
            aqi_lines: aqi_lines(self.config.aqi_line_width),
        })
    }

    /// Daily min..max ranges plus colored means. Both `daily_min` and
    /// `daily_max` are required; the ceiling still follows the means only, so
    /// a tall daily maximum may run off the top of the chart.
    pub fn ranges(&self, request: &DailyRequest) -> Result<DailyRangeData> {
        let daily_min = request
            .daily_min
            .as_deref()
            .ok_or(PlotDataError::MissingSeries("daily_min"))?;
        let daily_max = request
            .daily_max
            .as_deref()
            .ok_or(PlotDataError::MissingSeries("daily_max"))?;

        validate_daily_arrays(
            &request.daily_datetime,
            &request.daily_mean,
            Some(daily_min),
            Some(daily_max),
        )?;

        let ranges = daily_min
            .iter()
            .zip(daily_max)
            .map(|(&low, &high)| DailyRange { low, high })
            .collect();

        Ok(DailyRangeData {
            title: self.config.chart_title(),
            categories: self.day_labels(&request.daily_datetime)?,
            means: colored_points(&request.daily_mean),
            ranges,
            y_axis: YAxisRange::new(0.0, scale_ceiling_for(request.daily_mean.iter().copied())),
            aqi_lines: aqi_lines(self.config.aqi_line_width),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::civil_clock::CivilTime;
    use chrono::{Duration, TimeZone, Timelike};

    /// Civil time eight hours behind UTC, like a winter US Pacific zone.
    struct PacificClock;

    impl CivilClock for PacificClock {
        fn civil_time(&self, instant: DateTime<Utc>, _zone: &str) -> Result<CivilTime> {
            let local = (instant - Duration::hours(8)).naive_utc();
            Ok(CivilTime::new(local.date(), local.hour(), local.minute()))
        }
    }

    fn service() -> DailyPlotService {
        let config = PlotConfig {
            location_name: "Test Location".to_string(),
            timezone: "America/Los_Angeles".to_string(),
            ..PlotConfig::default()
        };
        DailyPlotService::new(Arc::new(PacificClock), config)
    }

    fn request() -> DailyRequest {
        let start = Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap();
        DailyRequest {
            daily_datetime: (0..3).map(|i| start + Duration::days(i)).collect(),
            daily_mean: vec![Some(5.0), Some(10.0), Some(15.0)],
            daily_min: Some(vec![Some(2.0), Some(8.0), Some(12.0)]),
            daily_max: Some(vec![Some(8.0), Some(12.0), Some(70.0)]),
        }
    }

    #[test]
    fn test_daily_bars() {
        let data = service().bars(&request()).unwrap();

        assert_eq!(data.title, "Test Location");
        // Midnight UTC is still the previous evening in the local zone
        assert_eq!(data.categories, vec!["Dec 31", "Jan 01", "Jan 02"]);
        assert_eq!(data.points.len(), 3);
        assert_eq!(data.points[0].color, "rgb(0,255,0)");
        assert_eq!(data.points[1].color, "rgb(255,255,0)");
        assert_eq!(data.y_axis, YAxisRange::new(0.0, 50.0));
        assert_eq!(data.aqi_lines.len(), 5);
    }

    #[test]
    fn test_daily_bars_without_range_series() {
        let mut req = request();
        req.daily_min = None;
        req.daily_max = None;
        assert_eq!(service().bars(&req).unwrap().points.len(), 3);
    }

    #[test]
    fn test_daily_bars_reject_mismatched_mean() {
        let mut req = request();
        req.daily_mean.pop();
        let err = service().bars(&req).unwrap_err();
        assert!(matches!(err, PlotDataError::LengthMismatch { right: "daily_mean", .. }));
    }

    #[test]
    fn test_daily_ranges() {
        let data = service().ranges(&request()).unwrap();

        assert_eq!(data.categories[0], "Dec 31");
        assert_eq!(data.ranges.len(), 3);
        assert_eq!(
            data.ranges[2],
            DailyRange {
                low: Some(12.0),
                high: Some(70.0)
            }
        );
        assert_eq!(data.means[2].color, "rgb(255,255,0)");
        // Ceiling from the means, not the maxima
        assert_eq!(data.y_axis.max, 50.0);
    }

    #[test]
    fn test_daily_ranges_require_min_and_max() {
        let mut req = request();
        req.daily_max = None;
        let err = service().ranges(&req).unwrap_err();
        assert_eq!(err, PlotDataError::MissingSeries("daily_max"));

        let mut req = request();
        req.daily_min = Some(vec![Some(1.0)]);
        let err = service().ranges(&req).unwrap_err();
        assert!(matches!(err, PlotDataError::LengthMismatch { right: "daily_min", right_len: 1, .. }));
    }

    #[test]
    fn test_daily_empty_summary() {
        let data = service().bars(&DailyRequest::default()).unwrap();
        assert!(data.categories.is_empty());
        assert_eq!(data.y_axis.max, 50.0);
    }
}
