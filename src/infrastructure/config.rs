use crate::domain::aqi::DEFAULT_AQI_LINE_WIDTH;
use crate::domain::band::DEFAULT_BAND_WIDTH;
use serde::Deserialize;

/// Every recognized plot option. Missing keys take the values from
/// [`PlotConfig::default`].
#[derive(Debug, Deserialize, Clone, PartialEq)]
#[serde(default)]
pub struct PlotConfig {
    /// Chart title; falls back to `location_name` when unset.
    pub title: Option<String>,
    pub location_name: String,
    /// IANA zone used for local-day windows and sun times.
    pub timezone: String,
    pub latitude: Option<f64>,
    pub longitude: Option<f64>,
    pub aqi_line_width: f64,
    /// Pixel width of the AQI side bar.
    pub band_width: f64,
    /// TT - UT1 in seconds, fed to the solar position algorithm.
    pub delta_t_seconds: f64,
}

impl Default for PlotConfig {
    fn default() -> Self {
        Self {
            title: None,
            location_name: String::new(),
            timezone: "UTC".to_string(),
            latitude: None,
            longitude: None,
            aqi_line_width: DEFAULT_AQI_LINE_WIDTH,
            band_width: DEFAULT_BAND_WIDTH,
            delta_t_seconds: 69.0,
        }
    }
}

impl PlotConfig {
    pub fn chart_title(&self) -> String {
        self.title
            .clone()
            .unwrap_or_else(|| self.location_name.clone())
    }
}

/// Load `config/plot.{toml,json,...}` if present, overridden by `PM25_*`
/// environment variables (e.g. `PM25_TIMEZONE`).
pub fn load_plot_config() -> anyhow::Result<PlotConfig> {
    load_plot_config_from("config/plot")
}

pub fn load_plot_config_from(path: &str) -> anyhow::Result<PlotConfig> {
    let settings = config::Config::builder()
        .add_source(config::File::with_name(path).required(false))
        .add_source(config::Environment::with_prefix("PM25"))
        .build()?;

    Ok(settings.try_deserialize()?)
}
