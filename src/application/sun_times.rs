// Solar position collaborator: date + coordinates -> sunrise/sunset instants
use crate::domain::error::Result;
use chrono::{DateTime, NaiveDate, Utc};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SunTimes {
    pub sunrise: DateTime<Utc>,
    pub sunset: DateTime<Utc>,
}

pub trait SunTimesProvider: Send + Sync {
    /// Sunrise and sunset on `date` at the given coordinates (decimal
    /// degrees, east and north positive). Fails when the sun does not rise
    /// or set that day.
    fn sun_times(&self, date: NaiveDate, latitude: f64, longitude: f64) -> Result<SunTimes>;
}
