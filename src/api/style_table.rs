use indexmap::IndexMap;

use crate::core::{ACTUAL_SERIES_NAME, ERROR_SERIES_NAME, LeadDayKey, VariableAnalysis};
use crate::interaction::ActiveDay;
use crate::render::{Color, LegendEntry, LegendSymbol};

use super::ChartSessionConfig;

/// Which payload series a style entry stands for.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SeriesKind {
    Actual,
    LeadDay(LeadDayKey),
    Error,
}

/// Canonical look of one series, shared by plot and legend.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SeriesStyle {
    pub color: Color,
    /// Opacity in the cumulative view.
    pub base_opacity: f64,
    pub symbol: LegendSymbol,
}

#[derive(Debug, Clone, PartialEq)]
pub struct StyledSeries {
    pub kind: SeriesKind,
    pub style: SeriesStyle,
}

/// Series name to style, in legend order: `Actual`, lead days ascending,
/// then `Error`.
///
/// Built once per (payload, variable) and consulted for both plotted series
/// and legend entries.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct StyleTable {
    entries: IndexMap<String, StyledSeries>,
    marker_opacity: f64,
    dimmed_label_opacity: f64,
}

impl StyleTable {
    #[must_use]
    pub fn for_variable(variable: &VariableAnalysis, config: &ChartSessionConfig) -> Self {
        let lead_days = variable.sorted_lead_days();
        let mut entries = IndexMap::with_capacity(lead_days.len() + 2);

        entries.insert(
            ACTUAL_SERIES_NAME.to_owned(),
            StyledSeries {
                kind: SeriesKind::Actual,
                style: SeriesStyle {
                    color: config.actual_color,
                    base_opacity: 1.0,
                    symbol: LegendSymbol::Circle,
                },
            },
        );

        for (rank, day) in lead_days.iter().enumerate() {
            let color = config.lead_day_palette[rank % config.lead_day_palette.len()];
            entries.insert(
                day.series_name(),
                StyledSeries {
                    kind: SeriesKind::LeadDay((*day).clone()),
                    style: SeriesStyle {
                        color,
                        base_opacity: recency_opacity(
                            rank,
                            lead_days.len(),
                            config.fade_min_opacity,
                        ),
                        symbol: LegendSymbol::Line,
                    },
                },
            );
        }

        entries.insert(
            ERROR_SERIES_NAME.to_owned(),
            StyledSeries {
                kind: SeriesKind::Error,
                style: SeriesStyle {
                    color: config.error_color,
                    base_opacity: 1.0,
                    symbol: LegendSymbol::Square,
                },
            },
        );

        Self {
            entries,
            marker_opacity: config.marker_opacity,
            dimmed_label_opacity: config.dimmed_label_opacity,
        }
    }

    #[must_use]
    pub fn get(&self, name: &str) -> Option<&StyledSeries> {
        self.entries.get(name)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &StyledSeries)> {
        self.entries.iter().map(|(name, entry)| (name.as_str(), entry))
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Opacity of `name` on the plot, or `None` when it is not drawn.
    #[must_use]
    pub fn plot_opacity(&self, name: &str, active_day: &ActiveDay) -> Option<f64> {
        let entry = self.entries.get(name)?;
        match (&entry.kind, active_day) {
            (SeriesKind::Actual, _) => Some(entry.style.base_opacity),
            (SeriesKind::Error, ActiveDay::Cumulative) => None,
            (SeriesKind::Error, ActiveDay::Isolated(_)) => Some(entry.style.base_opacity),
            (SeriesKind::LeadDay(_), ActiveDay::Cumulative) => Some(entry.style.base_opacity),
            (SeriesKind::LeadDay(day), ActiveDay::Isolated(active)) => {
                (day == active).then_some(1.0)
            }
        }
    }

    /// Legend styling for every series under `active_day`.
    ///
    /// Series missing from the plot keep their legend entry at marker
    /// opacity so they stay clickable.
    #[must_use]
    pub fn legend_entries(&self, active_day: &ActiveDay) -> Vec<LegendEntry> {
        self.entries
            .iter()
            .map(|(name, entry)| {
                let (symbol_opacity, label_opacity) = match self.plot_opacity(name, active_day) {
                    Some(opacity) => (opacity, 1.0),
                    None => (self.marker_opacity, self.dimmed_label_opacity),
                };
                LegendEntry {
                    name: name.clone(),
                    color: entry.style.color,
                    symbol: entry.style.symbol,
                    symbol_opacity,
                    label_opacity,
                }
            })
            .collect()
    }
}

/// Linear fade from 1.0 (most recent forecast) to `min_opacity` (oldest).
fn recency_opacity(rank: usize, count: usize, min_opacity: f64) -> f64 {
    if count <= 1 {
        return 1.0;
    }
    let step = (1.0 - min_opacity) / (count - 1) as f64;
    1.0 - rank as f64 * step
}
