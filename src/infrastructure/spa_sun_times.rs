// Sunrise/sunset from the NREL solar position algorithm
use crate::application::sun_times::{SunTimes, SunTimesProvider};
use crate::domain::error::{PlotDataError, Result};
use chrono::{DateTime, Datelike, Duration, NaiveDate, NaiveTime, Utc};
use solar_positioning::{Horizon, SunriseResult, spa};

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SpaSunTimes {
    delta_t_seconds: f64,
}

impl SpaSunTimes {
    pub fn new(delta_t_seconds: f64) -> Self {
        Self { delta_t_seconds }
    }

    /// Sunrise and sunset as computed for the UTC day `day`, or `None` when
    /// the sun stays up or down all day. SPA reports event hours within that
    /// UTC day, so for far-from-Greenwich longitudes one of them can belong
    /// to the neighbouring local day.
    fn utc_day_events(
        &self,
        day: NaiveDate,
        latitude: f64,
        longitude: f64,
    ) -> Result<Option<(DateTime<Utc>, DateTime<Utc>)>> {
        let result = spa::sunrise_sunset_utc_for_horizon(
            day.year(),
            day.month(),
            day.day(),
            latitude,
            longitude,
            self.delta_t_seconds,
            Horizon::SunriseSunset,
        )
        .map_err(|e| PlotDataError::Solar(e.to_string()))?;

        let midnight = day.and_time(NaiveTime::MIN).and_utc();

        Ok(match result {
            SunriseResult::RegularDay {
                sunrise, sunset, ..
            } => Some((
                offset_by_hours(midnight, sunrise.hours()),
                offset_by_hours(midnight, sunset.hours()),
            )),
            _ => None,
        })
    }
}

/// UTC bounds of the local mean solar day `date` at `longitude`.
fn solar_day_bounds(date: NaiveDate, longitude: f64) -> (DateTime<Utc>, DateTime<Utc>) {
    let shift = Duration::milliseconds((longitude / 15.0 * 3_600_000.0).round() as i64);
    let start = date.and_time(NaiveTime::MIN).and_utc() - shift;
    (start, start + Duration::days(1))
}

impl SunTimesProvider for SpaSunTimes {
    /// Sunrise and sunset falling on the local day `date`, so that sunrise
    /// always precedes sunset.
    fn sun_times(&self, date: NaiveDate, latitude: f64, longitude: f64) -> Result<SunTimes> {
        let (day_start, day_end) = solar_day_bounds(date, longitude);
        let on_day = |t: &DateTime<Utc>| *t >= day_start && *t < day_end;

        let mut sunrise = None;
        let mut sunset = None;
        for day in [Some(date), date.pred_opt(), date.succ_opt()].into_iter().flatten() {
            if let Some((rise, set)) = self.utc_day_events(day, latitude, longitude)? {
                sunrise = sunrise.or(Some(rise).filter(&on_day));
                sunset = sunset.or(Some(set).filter(&on_day));
            }
        }

        match (sunrise, sunset) {
            (Some(sunrise), Some(sunset)) => Ok(SunTimes { sunrise, sunset }),
            _ => {
                tracing::warn!(
                    "No sunrise/sunset on {} at ({}, {})",
                    date,
                    latitude,
                    longitude
                );
                Err(PlotDataError::NoSunEvents {
                    date,
                    latitude,
                    longitude,
                })
            }
        }
    }
}

fn offset_by_hours(midnight: DateTime<Utc>, hours: f64) -> DateTime<Utc> {
    midnight + Duration::milliseconds((hours * 3_600_000.0).round() as i64)
}
