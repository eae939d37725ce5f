use crate::core::value_format::{ValueFormat, title_case};
use crate::core::{DisplayValue, LeadDayKey, StatsBlock, VariableAnalysis};
use crate::error::{ChartError, ChartResult};

/// Picks the statistics block matching the current isolation state.
///
/// No isolated day selects the cumulative block.
pub fn select_stats<'a>(
    variable: &'a VariableAnalysis,
    isolated_day: Option<&LeadDayKey>,
) -> ChartResult<&'a StatsBlock> {
    match isolated_day {
        None => Ok(&variable.cumulative_stats),
        Some(day) => variable
            .lead_day(day)
            .map(|lead_day| &lead_day.stats)
            .ok_or_else(|| ChartError::MissingSeries {
                label: day.series_name(),
            }),
    }
}

/// Flattens a statistics block into display values.
///
/// Only properties whose name is a substring of the stat-type name are
/// shown; null values are skipped.
#[must_use]
pub fn stats_display_values(block: &StatsBlock, format: &ValueFormat) -> Vec<DisplayValue> {
    block
        .iter()
        .flat_map(|(stat_type, properties)| {
            properties
                .iter()
                .filter(move |(property, _)| stat_type.contains(property.as_str()))
                .filter_map(move |(_, value)| {
                    let value = (*value)?;
                    Some(DisplayValue::new(
                        title_case(stat_type),
                        format.format(value, stat_type, Some(stat_type)),
                    ))
                })
        })
        .collect()
}
