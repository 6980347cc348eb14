// Civil time collaborator: UTC instant + zone -> local calendar fields
use crate::domain::error::Result;
use chrono::{DateTime, NaiveDate, Utc};

/// Local calendar date and wall-clock time of an instant.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CivilTime {
    pub date: NaiveDate,
    pub hour: u32,
    pub minute: u32,
}

impl CivilTime {
    pub fn new(date: NaiveDate, hour: u32, minute: u32) -> Self {
        Self { date, hour, minute }
    }

    /// `hour + minute / 60`, seconds ignored.
    pub fn fractional_hour(&self) -> f64 {
        f64::from(self.hour) + f64::from(self.minute) / 60.0
    }
}

pub trait CivilClock: Send + Sync {
    /// Convert `instant` to civil time in the IANA zone `zone`.
    fn civil_time(&self, instant: DateTime<Utc>, zone: &str) -> Result<CivilTime>;
}
