// Solar boundaries - local sunrise/sunset hours for night shading
use crate::application::civil_clock::CivilClock;
use crate::application::sun_times::SunTimesProvider;
use crate::domain::diurnal::SolarBoundaries;
use crate::domain::error::{PlotDataError, Result};
use chrono::{DateTime, Utc};
use std::sync::Arc;

#[derive(Clone)]
pub struct SolarBoundaryService {
    clock: Arc<dyn CivilClock>,
    sun: Arc<dyn SunTimesProvider>,
}

impl SolarBoundaryService {
    pub fn new(clock: Arc<dyn CivilClock>, sun: Arc<dyn SunTimesProvider>) -> Self {
        Self { clock, sun }
    }

    /// Sunrise and sunset, as fractional local hours, on the local calendar
    /// day containing `instant`.
    pub fn boundaries(
        &self,
        instant: DateTime<Utc>,
        latitude: f64,
        longitude: f64,
        zone: &str,
    ) -> Result<SolarBoundaries> {
        let local = self.clock.civil_time(instant, zone)?;
        let sun = self.sun.sun_times(local.date, latitude, longitude)?;

        let sunrise = self.clock.civil_time(sun.sunrise, zone)?;
        let sunset = self.clock.civil_time(sun.sunset, zone)?;

        let boundaries = SolarBoundaries {
            sunrise_hour: sunrise.fractional_hour(),
            sunset_hour: sunset.fractional_hour(),
        };
        tracing::debug!(
            "Sun times for {} at ({}, {}): sunrise {:.2}h, sunset {:.2}h",
            local.date,
            latitude,
            longitude,
            boundaries.sunrise_hour,
            boundaries.sunset_hour
        );

        Ok(boundaries)
    }

    /// Boundaries for the sample at the middle of `times`.
    pub fn boundaries_for_series(
        &self,
        times: &[DateTime<Utc>],
        latitude: f64,
        longitude: f64,
        zone: &str,
    ) -> Result<SolarBoundaries> {
        let instant = representative_instant(times).ok_or(PlotDataError::EmptySeries("datetime"))?;
        self.boundaries(instant, latitude, longitude, zone)
    }
}

/// The instant at index `⌊len / 2⌋`.
pub fn representative_instant(times: &[DateTime<Utc>]) -> Option<DateTime<Utc>> {
    times.get(times.len() / 2).copied()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::civil_clock::CivilTime;
    use crate::application::sun_times::SunTimes;
    use chrono::{Duration, NaiveDate, TimeZone, Timelike};
    use std::sync::Mutex;

    struct OffsetClock {
        offset_hours: i64,
    }

    impl CivilClock for OffsetClock {
        fn civil_time(&self, instant: DateTime<Utc>, _zone: &str) -> Result<CivilTime> {
            let local = (instant + Duration::hours(self.offset_hours)).naive_utc();
            Ok(CivilTime::new(local.date(), local.hour(), local.minute()))
        }
    }

    /// Sunrise 14:47 UTC and sunset 01:12 UTC the next day, recording the
    /// requested dates.
    #[derive(Default)]
    struct FixedSun {
        requested: Mutex<Vec<NaiveDate>>,
    }

    impl SunTimesProvider for FixedSun {
        fn sun_times(&self, date: NaiveDate, _latitude: f64, _longitude: f64) -> Result<SunTimes> {
            self.requested.lock().unwrap().push(date);
            let midnight = date.and_hms_opt(0, 0, 0).unwrap().and_utc();
            Ok(SunTimes {
                sunrise: midnight + Duration::minutes(14 * 60 + 47),
                sunset: midnight + Duration::minutes(25 * 60 + 12),
            })
        }
    }

    struct PolarSun;

    impl SunTimesProvider for PolarSun {
        fn sun_times(&self, date: NaiveDate, latitude: f64, longitude: f64) -> Result<SunTimes> {
            Err(PlotDataError::NoSunEvents {
                date,
                latitude,
                longitude,
            })
        }
    }

    #[test]
    fn test_boundaries_converted_to_local_hours() {
        let sun = Arc::new(FixedSun::default());
        let service = SolarBoundaryService::new(Arc::new(OffsetClock { offset_hours: -8 }), sun.clone());
        let instant = Utc.with_ymd_and_hms(2024, 1, 2, 0, 0, 0).unwrap();

        let bounds = service.boundaries(instant, 37.7749, -122.4194, "America/Los_Angeles").unwrap();

        // 14:47Z -> 06:47 local, 01:12Z -> 17:12 local
        assert!((bounds.sunrise_hour - (6.0 + 47.0 / 60.0)).abs() < 1e-9);
        assert!((bounds.sunset_hour - (17.0 + 12.0 / 60.0)).abs() < 1e-9);
        assert!(bounds.sunrise_hour < bounds.sunset_hour);

        // Local date of 2024-01-02T00:00Z at UTC-8 is January 1st
        let requested = sun.requested.lock().unwrap();
        assert_eq!(requested.as_slice(), &[NaiveDate::from_ymd_opt(2024, 1, 1).unwrap()]);
    }

    #[test]
    fn test_boundaries_for_series_uses_middle_sample() {
        let sun = Arc::new(FixedSun::default());
        let service = SolarBoundaryService::new(Arc::new(OffsetClock { offset_hours: 0 }), sun.clone());
        let start = Utc.with_ymd_and_hms(2024, 3, 9, 12, 0, 0).unwrap();
        let times: Vec<_> = (0..48).map(|i| start + Duration::hours(i)).collect();

        service.boundaries_for_series(&times, 45.0, -120.0, "UTC").unwrap();

        // times[24] is 2024-03-10T12:00Z
        let requested = sun.requested.lock().unwrap();
        assert_eq!(requested.as_slice(), &[NaiveDate::from_ymd_opt(2024, 3, 10).unwrap()]);
    }

    #[test]
    fn test_representative_instant() {
        let start = Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap();
        let times: Vec<_> = (0..5).map(|i| start + Duration::hours(i)).collect();
        assert_eq!(representative_instant(&times), Some(times[2]));
        assert_eq!(representative_instant(&[]), None);
    }

    #[test]
    fn test_polar_day_propagates() {
        let service = SolarBoundaryService::new(Arc::new(OffsetClock { offset_hours: 0 }), Arc::new(PolarSun));
        let instant = Utc.with_ymd_and_hms(2024, 6, 21, 12, 0, 0).unwrap();
        let err = service.boundaries(instant, 78.2, 15.6, "UTC").unwrap_err();
        assert!(matches!(err, PlotDataError::NoSunEvents { .. }));
    }

    #[test]
    fn test_empty_series() {
        let service = SolarBoundaryService::new(Arc::new(OffsetClock { offset_hours: 0 }), Arc::new(PolarSun));
        let err = service.boundaries_for_series(&[], 0.0, 0.0, "UTC").unwrap_err();
        assert_eq!(err, PlotDataError::EmptySeries("datetime"));
    }
}
