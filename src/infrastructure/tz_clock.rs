// IANA time zone conversions backed by chrono-tz
use crate::application::civil_clock::{CivilClock, CivilTime};
use crate::domain::error::{PlotDataError, Result};
use chrono::{DateTime, Timelike, Utc};
use chrono_tz::Tz;

#[derive(Debug, Clone, Copy, Default)]
pub struct ChronoTzClock;

pub fn parse_zone(zone: &str) -> Result<Tz> {
    zone.parse::<Tz>()
        .map_err(|_| PlotDataError::UnknownTimeZone(zone.to_string()))
}

impl CivilClock for ChronoTzClock {
    fn civil_time(&self, instant: DateTime<Utc>, zone: &str) -> Result<CivilTime> {
        let local = instant.with_timezone(&parse_zone(zone)?);
        Ok(CivilTime::new(local.date_naive(), local.hour(), local.minute()))
    }
}
