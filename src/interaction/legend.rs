use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::core::{ACTUAL_SERIES_NAME, ERROR_SERIES_NAME, LeadDayKey, VariableAnalysis};
use crate::error::{ChartError, ChartResult};

/// Which lead day, if any, is isolated on the chart.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum ActiveDay {
    /// All lead days shown, cumulative statistics.
    #[default]
    Cumulative,
    Isolated(LeadDayKey),
}

impl ActiveDay {
    #[must_use]
    pub fn isolated_day(&self) -> Option<&LeadDayKey> {
        match self {
            Self::Cumulative => None,
            Self::Isolated(day) => Some(day),
        }
    }

    #[must_use]
    pub fn is_cumulative(&self) -> bool {
        matches!(self, Self::Cumulative)
    }
}

/// Outcome of one legend interaction.
///
/// `NoChange` leaves the active day untouched, which is distinct from
/// `Cumulative` clearing it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum DayUpdate {
    Cumulative,
    NoChange,
    Isolated(LeadDayKey),
}

impl DayUpdate {
    #[must_use]
    pub fn apply(self, current: ActiveDay) -> ActiveDay {
        match self {
            Self::Cumulative => ActiveDay::Cumulative,
            Self::NoChange => current,
            Self::Isolated(day) => ActiveDay::Isolated(day),
        }
    }
}

/// Parsed legend entry name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LegendLabel {
    Actual,
    Error,
    LeadDay(LeadDayKey),
}

impl LegendLabel {
    #[must_use]
    pub fn parse(label: &str) -> Option<Self> {
        match label.trim() {
            ACTUAL_SERIES_NAME => Some(Self::Actual),
            ERROR_SERIES_NAME => Some(Self::Error),
            other => LeadDayKey::from_series_name(other).map(Self::LeadDay),
        }
    }
}

/// Owns the active lead day and resolves legend clicks against it.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct LegendStateMachine {
    active_day: ActiveDay,
}

impl LegendStateMachine {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn active_day(&self) -> &ActiveDay {
        &self.active_day
    }

    /// Resolves the transition a click on `label` would cause.
    ///
    /// Labels that name no series of `variable` yield `MissingSeries`.
    pub fn resolve(&self, label: &str, variable: &VariableAnalysis) -> ChartResult<DayUpdate> {
        let missing = || ChartError::MissingSeries {
            label: label.to_owned(),
        };
        let parsed = LegendLabel::parse(label).ok_or_else(missing)?;

        let update = match (&self.active_day, parsed) {
            (ActiveDay::Cumulative, LegendLabel::Actual) => DayUpdate::NoChange,
            (ActiveDay::Cumulative, LegendLabel::Error) => {
                let first = variable.first_lead_day().ok_or_else(missing)?;
                DayUpdate::Isolated(first.clone())
            }
            (_, LegendLabel::LeadDay(day)) if variable.lead_day(&day).is_none() => {
                return Err(missing());
            }
            (ActiveDay::Cumulative, LegendLabel::LeadDay(day)) => DayUpdate::Isolated(day),
            (ActiveDay::Isolated(_), LegendLabel::Actual) => DayUpdate::Cumulative,
            (ActiveDay::Isolated(_), LegendLabel::Error) => DayUpdate::NoChange,
            (ActiveDay::Isolated(current), LegendLabel::LeadDay(day)) => {
                if *current == day {
                    DayUpdate::Cumulative
                } else {
                    DayUpdate::Isolated(day)
                }
            }
        };
        Ok(update)
    }

    pub fn apply(&mut self, update: DayUpdate) {
        self.active_day = update.apply(std::mem::take(&mut self.active_day));
    }

    /// Resolves and applies a legend click, returning the applied update.
    pub fn on_legend_click(
        &mut self,
        label: &str,
        variable: &VariableAnalysis,
    ) -> ChartResult<DayUpdate> {
        let update = self.resolve(label, variable)?;
        debug!(label, ?update, "legend click");
        self.apply(update.clone());
        Ok(update)
    }

    /// Returns to the cumulative view, e.g. after a new payload arrives.
    pub fn reset(&mut self) {
        self.active_day = ActiveDay::Cumulative;
    }
}
