use chrono::format::{Item, StrftimeItems};
use serde::{Deserialize, Serialize};

use crate::core::ValueFormat;
use crate::error::{ChartError, ChartResult};
use crate::render::{Color, validate_opacity};

/// What to do with a fetch result whose request was superseded by a newer one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum StaleResponsePolicy {
    /// Every resolution replaces the displayed analysis, whatever its age.
    LastWriteWins,
    /// Resolutions older than the latest issued request are discarded.
    IgnoreSuperseded,
}

/// Public session configuration.
///
/// Serializable so host applications can ship chart styling as JSON without
/// inventing their own format.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChartSessionConfig {
    /// Colors assigned to lead days in ascending order, cycling when short.
    #[serde(default = "default_lead_day_palette")]
    pub lead_day_palette: Vec<Color>,
    #[serde(default = "default_actual_color")]
    pub actual_color: Color,
    #[serde(default = "default_error_color")]
    pub error_color: Color,
    /// Legend symbol opacity for series not drawn on the plot.
    #[serde(default = "default_marker_opacity")]
    pub marker_opacity: f64,
    /// Legend label opacity for series not drawn on the plot.
    #[serde(default = "default_dimmed_label_opacity")]
    pub dimmed_label_opacity: f64,
    /// Opacity of the oldest lead day in the cumulative view.
    #[serde(default = "default_fade_min_opacity")]
    pub fade_min_opacity: f64,
    #[serde(default)]
    pub value_format: ValueFormat,
    /// `strftime` pattern for the hover panel header.
    #[serde(default = "default_header_time_pattern")]
    pub header_time_pattern: String,
    /// Offset applied to hover timestamps before formatting the header.
    #[serde(default)]
    pub header_utc_offset_minutes: i32,
    #[serde(default = "default_stale_response_policy")]
    pub stale_response_policy: StaleResponsePolicy,
}

impl Default for ChartSessionConfig {
    fn default() -> Self {
        Self {
            lead_day_palette: default_lead_day_palette(),
            actual_color: default_actual_color(),
            error_color: default_error_color(),
            marker_opacity: default_marker_opacity(),
            dimmed_label_opacity: default_dimmed_label_opacity(),
            fade_min_opacity: default_fade_min_opacity(),
            value_format: ValueFormat::default(),
            header_time_pattern: default_header_time_pattern(),
            header_utc_offset_minutes: 0,
            stale_response_policy: default_stale_response_policy(),
        }
    }
}

impl ChartSessionConfig {
    #[must_use]
    pub fn with_lead_day_palette(mut self, palette: Vec<Color>) -> Self {
        self.lead_day_palette = palette;
        self
    }

    #[must_use]
    pub fn with_fade_min_opacity(mut self, opacity: f64) -> Self {
        self.fade_min_opacity = opacity;
        self
    }

    #[must_use]
    pub fn with_marker_opacity(mut self, opacity: f64) -> Self {
        self.marker_opacity = opacity;
        self
    }

    #[must_use]
    pub fn with_value_format(mut self, value_format: ValueFormat) -> Self {
        self.value_format = value_format;
        self
    }

    #[must_use]
    pub fn with_header_time_pattern(mut self, pattern: impl Into<String>) -> Self {
        self.header_time_pattern = pattern.into();
        self
    }

    #[must_use]
    pub fn with_header_utc_offset_minutes(mut self, offset_minutes: i32) -> Self {
        self.header_utc_offset_minutes = offset_minutes;
        self
    }

    #[must_use]
    pub fn with_stale_response_policy(mut self, policy: StaleResponsePolicy) -> Self {
        self.stale_response_policy = policy;
        self
    }

    pub fn from_json_str(input: &str) -> ChartResult<Self> {
        let config: Self = serde_json::from_str(input).map_err(|e| {
            ChartError::InvalidData(format!("failed to parse session config: {e}"))
        })?;
        config.validate()
    }

    pub fn validate(self) -> ChartResult<Self> {
        if self.lead_day_palette.is_empty() {
            return Err(ChartError::InvalidData(
                "lead-day palette must contain at least one color".to_owned(),
            ));
        }
        for color in &self.lead_day_palette {
            color.validate()?;
        }
        self.actual_color.validate()?;
        self.error_color.validate()?;

        validate_opacity(self.marker_opacity, "marker opacity")?;
        validate_opacity(self.dimmed_label_opacity, "dimmed label opacity")?;
        validate_opacity(self.fade_min_opacity, "fade min opacity")?;

        self.value_format.validate()?;

        if StrftimeItems::new(&self.header_time_pattern).any(|item| matches!(item, Item::Error)) {
            return Err(ChartError::InvalidData(format!(
                "invalid header time pattern `{}`",
                self.header_time_pattern
            )));
        }
        if !(-14 * 60..=14 * 60).contains(&self.header_utc_offset_minutes) {
            return Err(ChartError::InvalidData(
                "header utc offset must be between -840 and 840 minutes".to_owned(),
            ));
        }

        Ok(self)
    }
}

fn default_lead_day_palette() -> Vec<Color> {
    vec![
        Color::rgb(0.129, 0.400, 0.675),
        Color::rgb(0.263, 0.576, 0.765),
        Color::rgb(0.573, 0.773, 0.871),
        Color::rgb(0.400, 0.651, 0.118),
        Color::rgb(0.651, 0.463, 0.114),
        Color::rgb(0.459, 0.439, 0.702),
        Color::rgb(0.400, 0.400, 0.400),
    ]
}

fn default_actual_color() -> Color {
    Color::rgb(0.0, 0.0, 0.0)
}

fn default_error_color() -> Color {
    Color::rgb(0.863, 0.208, 0.271)
}

fn default_marker_opacity() -> f64 {
    0.3
}

fn default_dimmed_label_opacity() -> f64 {
    0.5
}

fn default_fade_min_opacity() -> f64 {
    0.25
}

pub(crate) fn default_header_time_pattern() -> String {
    "%a %b %-d, %-I:%M %p".to_owned()
}

fn default_stale_response_policy() -> StaleResponsePolicy {
    StaleResponsePolicy::LastWriteWins
}
