use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use crate::core::LeadDayKey;
use crate::error::{ChartError, ChartResult};

/// ISO-8601 timestamp string to value. Input order is not meaningful.
pub type TimestampMap<V> = IndexMap<String, V>;

/// Stat-type name to its properties (`{"bias": {"bias": -0.4, "count": 96}}`).
///
/// Only properties whose name is contained in the type name are meant for
/// display; the rest are auxiliary fields such as sample counts.
pub type StatsBlock = IndexMap<String, IndexMap<String, Option<f64>>>;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VariableMetadata {
    pub display_name: String,
    pub prop_name: String,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct LeadDayAnalysis {
    #[serde(default)]
    pub fcasts: TimestampMap<f64>,
    #[serde(default)]
    pub errors: TimestampMap<f64>,
    #[serde(default)]
    pub stats: StatsBlock,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VariableAnalysis {
    pub metadata: VariableMetadata,
    #[serde(default)]
    pub obs: TimestampMap<f64>,
    #[serde(default)]
    pub lead_days: IndexMap<LeadDayKey, LeadDayAnalysis>,
    #[serde(default)]
    pub cumulative_stats: StatsBlock,
}

impl VariableAnalysis {
    #[must_use]
    pub fn lead_day(&self, key: &LeadDayKey) -> Option<&LeadDayAnalysis> {
        self.lead_days.get(key)
    }

    /// Lead-day keys in display order (most recent forecast first).
    #[must_use]
    pub fn sorted_lead_days(&self) -> Vec<&LeadDayKey> {
        let mut keys: Vec<&LeadDayKey> = self.lead_days.keys().collect();
        keys.sort();
        keys
    }

    #[must_use]
    pub fn first_lead_day(&self) -> Option<&LeadDayKey> {
        self.lead_days.keys().min()
    }
}

/// Complete analysis document for one requested date range.
///
/// Replaced wholesale on every fetch; never mutated by the chart core.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct AnalysisPayload {
    variables: IndexMap<String, VariableAnalysis>,
}

impl AnalysisPayload {
    #[must_use]
    pub fn new(variables: IndexMap<String, VariableAnalysis>) -> Self {
        Self { variables }
    }

    pub fn from_json_str(input: &str) -> ChartResult<Self> {
        serde_json::from_str(input).map_err(|e| {
            ChartError::InvalidData(format!("failed to parse analysis payload: {e}"))
        })
    }

    #[must_use]
    pub fn variable(&self, name: &str) -> Option<&VariableAnalysis> {
        self.variables.get(name)
    }

    pub fn variables(&self) -> impl Iterator<Item = (&str, &VariableAnalysis)> {
        self.variables
            .iter()
            .map(|(name, variable)| (name.as_str(), variable))
    }

    #[must_use]
    pub fn first_variable_name(&self) -> Option<&str> {
        self.variables.keys().next().map(String::as_str)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.variables.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.variables.is_empty()
    }
}
