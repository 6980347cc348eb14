// Boundary validation for plot input arrays
use crate::domain::error::{PlotDataError, Result};
use chrono::{DateTime, Utc};

/// Check that the parallel input arrays line up and hold usable values.
///
/// Errors name the offending field (and index). Timestamps that are not
/// strictly increasing only produce a warning.
pub fn validate_plot_arrays(
    datetime: &[DateTime<Utc>],
    pm25: &[Option<f64>],
    nowcast: &[Option<f64>],
) -> Result<()> {
    require_same_length("datetime", datetime.len(), "pm25", pm25.len())?;
    require_same_length("datetime", datetime.len(), "nowcast", nowcast.len())?;
    require_finite("pm25", pm25)?;
    require_finite("nowcast", nowcast)?;
    warn_if_not_increasing("datetime", datetime);
    Ok(())
}

/// Same checks for a daily summary: every present daily series must line up
/// with `daily_datetime`.
pub fn validate_daily_arrays(
    daily_datetime: &[DateTime<Utc>],
    daily_mean: &[Option<f64>],
    daily_min: Option<&[Option<f64>]>,
    daily_max: Option<&[Option<f64>]>,
) -> Result<()> {
    let days = daily_datetime.len();
    require_same_length("daily_datetime", days, "daily_mean", daily_mean.len())?;
    require_finite("daily_mean", daily_mean)?;

    for (field, values) in [("daily_min", daily_min), ("daily_max", daily_max)] {
        if let Some(values) = values {
            require_same_length("daily_datetime", days, field, values.len())?;
            require_finite(field, values)?;
        }
    }

    warn_if_not_increasing("daily_datetime", daily_datetime);
    Ok(())
}

pub fn require_same_length(
    left: &'static str,
    left_len: usize,
    right: &'static str,
    right_len: usize,
) -> Result<()> {
    if left_len != right_len {
        return Err(PlotDataError::LengthMismatch {
            left,
            left_len,
            right,
            right_len,
        });
    }
    Ok(())
}

/// Missing values are allowed; present ones must be finite.
pub fn require_finite(field: &'static str, values: &[Option<f64>]) -> Result<()> {
    let invalid = values
        .iter()
        .enumerate()
        .find_map(|(index, value)| match value {
            Some(v) if !v.is_finite() => Some((index, *v)),
            _ => None,
        });

    if let Some((index, value)) = invalid {
        return Err(PlotDataError::InvalidValue {
            field,
            index,
            value,
        });
    }
    Ok(())
}

/// Returns whether `times` is strictly increasing, logging the first
/// offending index otherwise.
pub fn warn_if_not_increasing(field: &str, times: &[DateTime<Utc>]) -> bool {
    match times.windows(2).position(|pair| pair[1] <= pair[0]) {
        Some(index) => {
            tracing::warn!(
                "'{}' is not strictly increasing at index {} ({} -> {})",
                field,
                index + 1,
                times[index],
                times[index + 1]
            );
            false
        }
        None => true,
    }
}
