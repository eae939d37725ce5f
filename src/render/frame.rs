use serde::{Deserialize, Serialize};

use crate::core::{
    ActiveDisplay, DisplayValue, ERROR_REGION_STEP_MILLIS, ErrorRegion, TimedValue,
    VariableMetadata,
};
use crate::error::{ChartError, ChartResult};
use crate::interaction::ActiveDay;
use crate::render::primitives::validate_opacity;
use crate::render::{Color, LegendSymbol};

/// One plotted line.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VisibleSeries {
    pub name: String,
    pub opacity: f64,
    pub color: Color,
    pub points: Vec<TimedValue>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LegendEntry {
    pub name: String,
    pub color: Color,
    pub symbol: LegendSymbol,
    pub symbol_opacity: f64,
    pub label_opacity: f64,
}

/// Everything a rendering backend needs for one chart draw pass.
///
/// Built from the current payload and interaction state; never mutated by
/// the renderer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChartFrame {
    pub variable: Option<VariableMetadata>,
    pub active_day: ActiveDay,
    pub visible_series: Vec<VisibleSeries>,
    pub error_color: Color,
    pub error_regions: Vec<ErrorRegion>,
    pub legend_entries: Vec<LegendEntry>,
    pub active_display: Option<ActiveDisplay>,
    pub stats_display: Vec<DisplayValue>,
    pub status_message: Option<String>,
}

impl ChartFrame {
    /// Frame with nothing to plot, used while no analysis is loaded.
    #[must_use]
    pub fn empty(error_color: Color, status_message: Option<String>) -> Self {
        Self {
            variable: None,
            active_day: ActiveDay::Cumulative,
            visible_series: Vec::new(),
            error_color,
            error_regions: Vec::new(),
            legend_entries: Vec::new(),
            active_display: None,
            stats_display: Vec::new(),
            status_message,
        }
    }

    #[must_use]
    pub fn series(&self, name: &str) -> Option<&VisibleSeries> {
        self.visible_series.iter().find(|series| series.name == name)
    }

    #[must_use]
    pub fn legend_entry(&self, name: &str) -> Option<&LegendEntry> {
        self.legend_entries.iter().find(|entry| entry.name == name)
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.visible_series.is_empty() && self.error_regions.is_empty()
    }

    pub fn validate(&self) -> ChartResult<()> {
        self.error_color.validate()?;

        for series in &self.visible_series {
            series.color.validate()?;
            validate_opacity(series.opacity, "series opacity")?;
            if series.points.windows(2).any(|pair| pair[0].time > pair[1].time) {
                return Err(ChartError::InvalidData(format!(
                    "series `{}` points must be sorted by time",
                    series.name
                )));
            }
        }

        for entry in &self.legend_entries {
            entry.color.validate()?;
            validate_opacity(entry.symbol_opacity, "legend symbol opacity")?;
            validate_opacity(entry.label_opacity, "legend label opacity")?;
        }

        for region in &self.error_regions {
            let contiguous = region.points.windows(2).all(|pair| {
                (pair[1].x - pair[0].x).num_milliseconds() == ERROR_REGION_STEP_MILLIS
            });
            if region.is_empty() || !contiguous {
                return Err(ChartError::InvalidData(
                    "error regions must be non-empty hourly runs".to_owned(),
                ));
            }
        }

        Ok(())
    }
}
