use std::collections::BTreeMap;

use chrono::{DateTime, Utc};

use crate::core::primitives::parse_timestamp;
use crate::core::{TimedValue, TimestampMap};
use crate::error::ChartResult;

/// Normalizes a timestamp-keyed map into samples sorted ascending by time.
///
/// Every entry is kept: the output has the same cardinality as the input.
/// The first malformed key aborts the whole series so callers never chart a
/// partial sequence.
pub fn index_series(map: &TimestampMap<f64>) -> ChartResult<Vec<TimedValue>> {
    let mut series = map
        .iter()
        .map(|(raw, value)| Ok(TimedValue::new(parse_timestamp(raw)?, *value)))
        .collect::<ChartResult<Vec<_>>>()?;
    series.sort_by_key(|sample| sample.time);
    Ok(series)
}

/// Builds an instant-keyed lookup for joining series by time.
///
/// Keys spelled differently but naming the same instant collapse; the entry
/// appearing last in the input wins.
pub fn index_lookup(map: &TimestampMap<f64>) -> ChartResult<BTreeMap<DateTime<Utc>, f64>> {
    map.iter()
        .map(|(raw, value)| Ok((parse_timestamp(raw)?, *value)))
        .collect()
}
