// Diurnal windows - split an hourly series into local "yesterday" and "today"
use crate::application::civil_clock::CivilClock;
use crate::domain::diurnal::{DiurnalWindows, HOURS_PER_DAY, Window};
use crate::domain::error::{PlotDataError, Result};
use chrono::{DateTime, Utc};
use std::sync::Arc;

#[derive(Clone)]
pub struct DiurnalWindowService {
    clock: Arc<dyn CivilClock>,
}

impl DiurnalWindowService {
    pub fn new(clock: Arc<dyn CivilClock>) -> Self {
        Self { clock }
    }

    /// Today runs from the sample at local hour 0 through the last sample;
    /// yesterday is the (up to) 24 samples before it.
    pub fn windows(&self, times: &[DateTime<Utc>], zone: &str) -> Result<DiurnalWindows> {
        let last = times
            .last()
            .ok_or(PlotDataError::EmptySeries("datetime"))?;
        let last_hour = self.clock.civil_time(*last, zone)?.hour as usize;

        let windows = windows_for_last_hour(times.len(), last_hour);
        tracing::debug!(
            "Diurnal windows for {} samples in {} (last local hour {}): yesterday={:?}, today={:?}",
            times.len(),
            zone,
            last_hour,
            windows.yesterday,
            windows.today
        );

        Ok(windows)
    }
}

/// Window arithmetic for a series of `len` samples whose final sample falls
/// on local hour `last_hour`.
///
/// Starts that would be negative saturate at 0, so a short series yields
/// shorter windows rather than invalid ones.
pub fn windows_for_last_hour(len: usize, last_hour: usize) -> DiurnalWindows {
    let today_end = len;
    let today_start = today_end.saturating_sub(1 + last_hour);
    let yesterday_end = today_start;
    let yesterday_start = yesterday_end.saturating_sub(HOURS_PER_DAY);

    DiurnalWindows {
        yesterday: Window::new(yesterday_start, yesterday_end),
        today: Window::new(today_start, today_end),
    }
}
