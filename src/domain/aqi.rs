// PM2.5 AQI categories, display colors and threshold plot lines
use serde::Serialize;

/// Color used for missing or invalid concentrations.
pub const NEUTRAL_COLOR: &str = "rgb(187,187,187)";

/// EPA AQI categories for PM2.5, ordered from best to worst.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum AqiCategory {
    Good = 1,
    Moderate = 2,
    UnhealthyForSensitiveGroups = 3,
    Unhealthy = 4,
    VeryUnhealthy = 5,
    Hazardous = 6,
}

/// One row of the AQI level table: a category, the concentration where it
/// begins and the color it is drawn with.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AqiLevel {
    pub lower_bound: f64,
    pub category: AqiCategory,
    pub color: &'static str,
}

/// PM2.5 breakpoints (µg/m³) from the 2024 NAAQS update. Each level ends
/// where the next one begins; `Hazardous` is unbounded above.
pub const AQI_LEVELS: [AqiLevel; 6] = [
    AqiLevel {
        lower_bound: 0.0,
        category: AqiCategory::Good,
        color: "rgb(0,255,0)",
    },
    AqiLevel {
        lower_bound: 9.0,
        category: AqiCategory::Moderate,
        color: "rgb(255,255,0)",
    },
    AqiLevel {
        lower_bound: 35.4,
        category: AqiCategory::UnhealthyForSensitiveGroups,
        color: "rgb(255,126,0)",
    },
    AqiLevel {
        lower_bound: 55.4,
        category: AqiCategory::Unhealthy,
        color: "rgb(255,0,0)",
    },
    AqiLevel {
        lower_bound: 125.4,
        category: AqiCategory::VeryUnhealthy,
        color: "rgb(143,63,151)",
    },
    AqiLevel {
        lower_bound: 225.4,
        category: AqiCategory::Hazardous,
        color: "rgb(126,0,35)",
    },
];

impl AqiCategory {
    /// Category ordinal, 1 (Good) through 6 (Hazardous).
    pub fn ordinal(self) -> u8 {
        self as u8
    }

    pub fn from_ordinal(ordinal: u8) -> Option<Self> {
        AQI_LEVELS
            .iter()
            .map(|level| level.category)
            .find(|category| category.ordinal() == ordinal)
    }

    pub fn level(self) -> AqiLevel {
        AQI_LEVELS[usize::from(self.ordinal()) - 1]
    }

    pub fn color(self) -> &'static str {
        self.level().color
    }

    pub fn label(self) -> &'static str {
        match self {
            AqiCategory::Good => "Good",
            AqiCategory::Moderate => "Moderate",
            AqiCategory::UnhealthyForSensitiveGroups => "Unhealthy for Sensitive Groups",
            AqiCategory::Unhealthy => "Unhealthy",
            AqiCategory::VeryUnhealthy => "Very Unhealthy",
            AqiCategory::Hazardous => "Hazardous",
        }
    }
}

/// Classify a PM2.5 concentration.
///
/// A value exactly on a breakpoint belongs to the lower category, so
/// `classify(9.0)` is `Good` while `classify(9.0001)` is `Moderate`.
/// Non-finite input yields `None` (unknown); finite negatives fall in `Good`.
pub fn classify(value: f64) -> Option<AqiCategory> {
    if !value.is_finite() {
        return None;
    }

    let category = AQI_LEVELS
        .windows(2)
        .find(|pair| value <= pair[1].lower_bound)
        .map(|pair| pair[0].category)
        .unwrap_or(AqiCategory::Hazardous);

    Some(category)
}

/// Classify a possibly missing concentration.
pub fn classify_concentration(value: Option<f64>) -> Option<AqiCategory> {
    value.and_then(classify)
}

/// Display color for a concentration, in the `rgb(r,g,b)` form consumed by
/// the chart layer.
pub fn color_of(value: f64) -> &'static str {
    classify(value).map_or(NEUTRAL_COLOR, AqiCategory::color)
}

pub fn color_of_concentration(value: Option<f64>) -> &'static str {
    classify_concentration(value).map_or(NEUTRAL_COLOR, AqiCategory::color)
}

/// A horizontal plot line marking where an AQI category begins.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AqiLine {
    pub color: &'static str,
    pub width: f64,
    pub value: f64,
}

pub const DEFAULT_AQI_LINE_WIDTH: f64 = 2.0;

/// Threshold lines for every category above `Good`, each drawn in the color
/// of the category it opens.
pub fn aqi_lines(width: f64) -> Vec<AqiLine> {
    AQI_LEVELS
        .iter()
        .skip(1)
        .map(|level| AqiLine {
            color: level.color,
            width,
            value: level.lower_bound,
        })
        .collect()
}

/// A series value paired with its AQI color and category name (used as the
/// point's tooltip text). Missing values carry neither.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ColoredPoint {
    pub y: Option<f64>,
    pub color: &'static str,
    pub category: Option<&'static str>,
}

pub fn colored_points(values: &[Option<f64>]) -> Vec<ColoredPoint> {
    values
        .iter()
        .map(|&y| ColoredPoint {
            y,
            color: color_of_concentration(y),
            category: classify_concentration(y).map(AqiCategory::label),
        })
        .collect()
}
