use chrono::{DateTime, NaiveDateTime, Utc};
use rust_decimal::prelude::FromPrimitive;
use rust_decimal::{Decimal, RoundingStrategy};

use crate::error::{ChartError, ChartResult};

/// Offset-less form emitted by the analysis backend (`2019-03-01T05:00:00`).
const NAIVE_TIMESTAMP_FORMAT: &str = "%Y-%m-%dT%H:%M:%S%.f";

/// Parses an ISO-8601 timestamp key.
///
/// RFC 3339 input keeps its offset; offset-less input is read as UTC.
pub fn parse_timestamp(raw: &str) -> ChartResult<DateTime<Utc>> {
    let trimmed = raw.trim();
    if let Ok(time) = DateTime::parse_from_rfc3339(trimmed) {
        return Ok(time.with_timezone(&Utc));
    }
    NaiveDateTime::parse_from_str(trimmed, NAIVE_TIMESTAMP_FORMAT)
        .map(|naive| naive.and_utc())
        .map_err(|source| ChartError::MalformedTimestamp {
            timestamp: raw.to_owned(),
            source,
        })
}

/// Rounds `value * scale` half away from zero to one decimal place.
///
/// Returns `None` when the value cannot be represented as a decimal
/// (non-finite or out of range). Negative zero collapses to zero.
#[must_use]
pub fn round_to_tenths(value: f64, scale: Decimal) -> Option<Decimal> {
    let scaled = Decimal::from_f64(value)?.checked_mul(scale)?;
    let rounded = scaled.round_dp_with_strategy(1, RoundingStrategy::MidpointAwayFromZero);
    if rounded.is_zero() {
        return Some(Decimal::ZERO);
    }
    Some(rounded)
}
