use std::cmp::Ordering;
use std::fmt;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Legend/series name of the observed values line.
pub const ACTUAL_SERIES_NAME: &str = "Actual";
/// Legend name of the forecast error series.
///
/// Hover points from individual error regions carry names that contain this
/// token (`Error-Area-0`, `Error-Area-1`, ...).
pub const ERROR_SERIES_NAME: &str = "Error";
/// Label used for the collapsed error annotation in hover output.
pub const FORECAST_ERROR_LABEL: &str = "Forecast Error";

const LEAD_DAY_SUFFIX: &str = "-Day";

/// Identifies how many days ahead a forecast was issued (`"1"`, `"2"`, ...).
///
/// Keys that parse as integers order numerically and sort before any
/// non-numeric key; everything else orders lexicographically.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct LeadDayKey(String);

impl LeadDayKey {
    #[must_use]
    pub fn new(key: impl Into<String>) -> Self {
        Self(key.into())
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    #[must_use]
    pub fn as_number(&self) -> Option<u64> {
        self.0.trim().parse().ok()
    }

    /// Legend and series name for this lead day, e.g. `"2-Day"`.
    #[must_use]
    pub fn series_name(&self) -> String {
        format!("{}{LEAD_DAY_SUFFIX}", self.0)
    }

    /// Parses a `"{day}-Day"` series name back into its key.
    #[must_use]
    pub fn from_series_name(name: &str) -> Option<Self> {
        let day = name.strip_suffix(LEAD_DAY_SUFFIX)?;
        if day.is_empty() {
            return None;
        }
        Some(Self::new(day))
    }
}

impl Ord for LeadDayKey {
    fn cmp(&self, other: &Self) -> Ordering {
        match (self.as_number(), other.as_number()) {
            (Some(left), Some(right)) => left.cmp(&right).then_with(|| self.0.cmp(&other.0)),
            (Some(_), None) => Ordering::Less,
            (None, Some(_)) => Ordering::Greater,
            (None, None) => self.0.cmp(&other.0),
        }
    }
}

impl PartialOrd for LeadDayKey {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl fmt::Display for LeadDayKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for LeadDayKey {
    fn from(value: &str) -> Self {
        Self::new(value)
    }
}

/// One sample of a normalized time series.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TimedValue {
    pub time: DateTime<Utc>,
    pub value: f64,
}

impl TimedValue {
    #[must_use]
    pub fn new(time: DateTime<Utc>, value: f64) -> Self {
        Self { time, value }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum DisplayEmphasis {
    Normal,
    /// Error annotations, rendered with danger styling.
    Danger,
}

/// Human-readable `label: value` pair for hover and statistics panels.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DisplayValue {
    pub label: String,
    pub formatted_value: String,
    pub emphasis: DisplayEmphasis,
}

impl DisplayValue {
    #[must_use]
    pub fn new(label: impl Into<String>, formatted_value: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            formatted_value: formatted_value.into(),
            emphasis: DisplayEmphasis::Normal,
        }
    }

    #[must_use]
    pub fn with_emphasis(mut self, emphasis: DisplayEmphasis) -> Self {
        self.emphasis = emphasis;
        self
    }
}

impl fmt::Display for DisplayValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.label, self.formatted_value)
    }
}

/// Hover panel content: a date/time header plus ordered values.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ActiveDisplay {
    pub header: String,
    pub values: Vec<DisplayValue>,
}

#[cfg(test)]
mod tests {
    use super::LeadDayKey;

    #[test]
    fn numeric_keys_order_numerically_before_text_keys() {
        let mut keys = vec![
            LeadDayKey::new("10"),
            LeadDayKey::new("x"),
            LeadDayKey::new("2"),
            LeadDayKey::new("1"),
        ];
        keys.sort();
        let ordered: Vec<&str> = keys.iter().map(LeadDayKey::as_str).collect();
        assert_eq!(ordered, vec!["1", "2", "10", "x"]);
    }

    #[test]
    fn series_name_round_trips_through_legend_label() {
        let key = LeadDayKey::new("3");
        assert_eq!(key.series_name(), "3-Day");
        assert_eq!(LeadDayKey::from_series_name("3-Day"), Some(key));
        assert_eq!(LeadDayKey::from_series_name("-Day"), None);
        assert_eq!(LeadDayKey::from_series_name("Actual"), None);
    }
}
