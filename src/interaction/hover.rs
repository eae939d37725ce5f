use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::core::ERROR_SERIES_NAME;

/// Raw point reported by a hover/voronoi activation for one series.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HoverPoint {
    pub series_name: String,
    pub timestamp: DateTime<Utc>,
    pub value: Option<f64>,
    #[serde(default)]
    pub error_amount: Option<f64>,
}

impl HoverPoint {
    #[must_use]
    pub fn new(series_name: impl Into<String>, timestamp: DateTime<Utc>, value: Option<f64>) -> Self {
        Self {
            series_name: series_name.into(),
            timestamp,
            value,
            error_amount: None,
        }
    }

    /// Point from an error region carrying only the signed error.
    #[must_use]
    pub fn error(series_name: impl Into<String>, timestamp: DateTime<Utc>, amount: f64) -> Self {
        Self::new(series_name, timestamp, None).with_error_amount(amount)
    }

    #[must_use]
    pub fn with_error_amount(mut self, amount: f64) -> Self {
        self.error_amount = Some(amount);
        self
    }

    #[must_use]
    pub fn is_error(&self) -> bool {
        self.series_name.contains(ERROR_SERIES_NAME)
    }
}
