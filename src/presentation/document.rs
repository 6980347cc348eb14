// JSON documents read and written by the command-line front end
use crate::domain::plot::{
    DailyBarData, DailyRangeData, DailyRequest, DiurnalPlotData, HourlyBarData, PlotRequest,
    TimeseriesData,
};
use crate::infrastructure::config::PlotConfig;
use anyhow::Context;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Input document: hourly arrays, an optional daily summary, and optional
/// per-site settings that take precedence over the loaded configuration.
#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct PlotDocument {
    pub datetime: Vec<DateTime<Utc>>,
    #[serde(default)]
    pub pm25: Option<Vec<Option<f64>>>,
    pub nowcast: Vec<Option<f64>>,
    #[serde(default)]
    pub hour_average: Vec<Option<f64>>,
    #[serde(default)]
    pub daily_datetime: Vec<DateTime<Utc>>,
    #[serde(default)]
    pub daily_mean: Vec<Option<f64>>,
    #[serde(default)]
    pub daily_min: Option<Vec<Option<f64>>>,
    #[serde(default)]
    pub daily_max: Option<Vec<Option<f64>>>,
    pub title: Option<String>,
    pub location_name: Option<String>,
    pub timezone: Option<String>,
    pub latitude: Option<f64>,
    pub longitude: Option<f64>,
}

impl PlotDocument {
    pub fn apply_to(&self, config: &mut PlotConfig) {
        if let Some(title) = &self.title {
            config.title = Some(title.clone());
        }
        if let Some(location_name) = &self.location_name {
            config.location_name = location_name.clone();
        }
        if let Some(timezone) = &self.timezone {
            config.timezone = timezone.clone();
        }
        if self.latitude.is_some() {
            config.latitude = self.latitude;
        }
        if self.longitude.is_some() {
            config.longitude = self.longitude;
        }
    }

    /// The daily summary, when the document carries one.
    pub fn daily_request(&self) -> Option<DailyRequest> {
        if self.daily_datetime.is_empty() {
            return None;
        }
        Some(DailyRequest {
            daily_datetime: self.daily_datetime.clone(),
            daily_mean: self.daily_mean.clone(),
            daily_min: self.daily_min.clone(),
            daily_max: self.daily_max.clone(),
        })
    }

    pub fn into_request(self) -> PlotRequest {
        PlotRequest {
            datetime: self.datetime,
            pm25: self.pm25,
            nowcast: self.nowcast,
            hour_average: self.hour_average,
        }
    }
}

pub fn parse_document(json: &str) -> anyhow::Result<PlotDocument> {
    serde_json::from_str(json).context("Failed to parse plot document")
}

#[derive(Debug, Serialize)]
pub struct PlotReport {
    pub diurnal: DiurnalPlotData,
    pub hourly: HourlyBarData,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub timeseries: Option<TimeseriesData>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub daily: Option<DailyBarData>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub daily_range: Option<DailyRangeData>,
}

#[cfg(test)]
mod tests {
    use super::*;

    const DOCUMENT: &str = r#"{
        "datetime": ["2024-01-01T00:00:00Z", "2024-01-01T01:00:00Z", "2024-01-01T02:00:00Z"],
        "nowcast": [4.2, null, 12.5],
        "location_name": "Test Location",
        "timezone": "America/Los_Angeles",
        "latitude": 37.7749,
        "longitude": -122.4194
    }"#;

    #[test]
    fn test_parse_document() {
        let document = parse_document(DOCUMENT).unwrap();

        assert_eq!(document.datetime.len(), 3);
        assert_eq!(document.nowcast, vec![Some(4.2), None, Some(12.5)]);
        assert!(document.pm25.is_none());
        assert!(document.hour_average.is_empty());
        assert_eq!(document.title, None);
        assert!(document.daily_request().is_none());
    }

    #[test]
    fn test_daily_request() {
        let document = parse_document(
            r#"{
                "datetime": ["2024-01-01T00:00:00Z"],
                "nowcast": [4.2],
                "daily_datetime": ["2024-01-01T00:00:00Z", "2024-01-02T00:00:00Z"],
                "daily_mean": [5.0, null],
                "daily_max": [9.0, 11.0]
            }"#,
        )
        .unwrap();

        let daily = document.daily_request().unwrap();
        assert_eq!(daily.daily_datetime.len(), 2);
        assert_eq!(daily.daily_mean, vec![Some(5.0), None]);
        assert_eq!(daily.daily_min, None);
        assert_eq!(daily.daily_max, Some(vec![Some(9.0), Some(11.0)]));
    }

    #[test]
    fn test_apply_to_config() {
        let document = parse_document(DOCUMENT).unwrap();
        let mut config = PlotConfig {
            title: Some("From config".to_string()),
            ..PlotConfig::default()
        };

        document.apply_to(&mut config);

        assert_eq!(config.title.as_deref(), Some("From config"));
        assert_eq!(config.location_name, "Test Location");
        assert_eq!(config.timezone, "America/Los_Angeles");
        assert_eq!(config.latitude, Some(37.7749));
    }

    #[test]
    fn test_into_request() {
        let request = parse_document(DOCUMENT).unwrap().into_request();
        assert_eq!(request.datetime.len(), request.nowcast.len());
    }

    #[test]
    fn test_parse_rejects_non_timestamp() {
        let err = parse_document(r#"{"datetime": ["yesterday"], "nowcast": [1.0]}"#).unwrap_err();
        assert!(err.to_string().contains("Failed to parse plot document"));
    }
}
