use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tracing::trace;

use crate::core::TimestampMap;
use crate::core::time_series::{index_lookup, index_series};
use crate::error::ChartResult;

/// Fixed spacing between consecutive samples of one error region.
pub const ERROR_REGION_STEP_MILLIS: i64 = 3_600_000;

/// One sample of a shaded error area.
///
/// `y` is the forecast and `y0` the observation at `x`; either can be absent
/// when that series has no sample at the error's timestamp.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ErrorRegionPoint {
    pub x: DateTime<Utc>,
    pub y: Option<f64>,
    pub y0: Option<f64>,
    pub amount: f64,
}

/// Maximal run of error samples spaced exactly one step apart.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ErrorRegion {
    pub points: Vec<ErrorRegionPoint>,
}

impl ErrorRegion {
    fn starting_at(point: ErrorRegionPoint) -> Self {
        Self {
            points: vec![point],
        }
    }

    /// Series name used by the renderer and echoed back in hover points.
    #[must_use]
    pub fn series_name(index: usize) -> String {
        format!("Error-Area-{index}")
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.points.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    #[must_use]
    pub fn start(&self) -> Option<DateTime<Utc>> {
        self.points.first().map(|point| point.x)
    }

    #[must_use]
    pub fn end(&self) -> Option<DateTime<Utc>> {
        self.points.last().map(|point| point.x)
    }

    fn continues_with(&self, x: DateTime<Utc>) -> bool {
        self.end()
            .is_some_and(|end| (x - end).num_milliseconds() == ERROR_REGION_STEP_MILLIS)
    }
}

/// Groups per-timestamp forecast errors into contiguous hourly regions.
///
/// `fcasts` and `obs` are joined by instant; a missing sample leaves the
/// corresponding coordinate empty instead of failing.
pub fn build_error_regions(
    errors: &TimestampMap<f64>,
    fcasts: &TimestampMap<f64>,
    obs: &TimestampMap<f64>,
) -> ChartResult<Vec<ErrorRegion>> {
    if errors.is_empty() {
        return Ok(Vec::new());
    }

    let errors = index_series(errors)?;
    let fcasts = index_lookup(fcasts)?;
    let obs = index_lookup(obs)?;

    let mut regions: Vec<ErrorRegion> = Vec::new();
    for sample in errors {
        let point = ErrorRegionPoint {
            x: sample.time,
            y: fcasts.get(&sample.time).copied(),
            y0: obs.get(&sample.time).copied(),
            amount: sample.value,
        };
        match regions.last_mut() {
            Some(current) if current.continues_with(point.x) => current.points.push(point),
            _ => regions.push(ErrorRegion::starting_at(point)),
        }
    }

    trace!(region_count = regions.len(), "built error regions");
    Ok(regions)
}
