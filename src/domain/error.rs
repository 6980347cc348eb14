// Error types for plot data derivation
use chrono::NaiveDate;
use thiserror::Error;

/// Errors raised by series validation and the diurnal/solar services.
///
/// Constant-table lookups (classification, colors, axis ceilings) and band
/// geometry never produce these; they degrade to documented defaults instead.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum PlotDataError {
    #[error("'{left}' and '{right}' must have the same length ({left_len} vs {right_len})")]
    LengthMismatch {
        left: &'static str,
        left_len: usize,
        right: &'static str,
        right_len: usize,
    },

    #[error("Invalid {field} value at index {index}: {value}")]
    InvalidValue {
        field: &'static str,
        index: usize,
        value: f64,
    },

    #[error("Series '{0}' is empty")]
    EmptySeries(&'static str),

    #[error("Series '{0}' is required for this plot")]
    MissingSeries(&'static str),

    #[error("Missing setting: {0}")]
    MissingSetting(&'static str),

    #[error("Unknown time zone: {0}")]
    UnknownTimeZone(String),

    #[error("No sunrise/sunset on {date} at ({latitude}, {longitude})")]
    NoSunEvents {
        date: NaiveDate,
        latitude: f64,
        longitude: f64,
    },

    #[error("Solar position calculation failed: {0}")]
    Solar(String),
}

pub type Result<T> = std::result::Result<T, PlotDataError>;
