use std::fmt::Write as _;

use chrono::{DateTime, FixedOffset, Offset, Utc};
use smallvec::SmallVec;
use tracing::{trace, warn};

use crate::core::{
    ActiveDisplay, DisplayEmphasis, DisplayValue, FORECAST_ERROR_LABEL, title_case,
};
use crate::interaction::HoverPoint;

use super::ChartSessionConfig;
use super::session_config::default_header_time_pattern;

/// Turns the points of one hover activation into panel content.
///
/// Points without a value are skipped. All error-region points collapse into
/// a single `Forecast Error` entry, placed last. Returns `None` when nothing
/// is left to show. `kind` is the declared type of the charted variable and
/// takes part in unit selection.
#[must_use]
pub fn format_active_points(
    points: &[HoverPoint],
    kind: Option<&str>,
    config: &ChartSessionConfig,
) -> Option<ActiveDisplay> {
    let first = points.first()?;

    let mut values: SmallVec<[DisplayValue; 8]> = SmallVec::new();
    let mut error_amount = None;
    for point in points {
        if point.is_error() {
            error_amount = error_amount.or(point.error_amount);
            continue;
        }
        let Some(value) = point.value else {
            continue;
        };
        values.push(DisplayValue::new(
            title_case(&point.series_name),
            config
                .value_format
                .format(value, &point.series_name, kind),
        ));
    }

    if let Some(amount) = error_amount {
        values.push(
            DisplayValue::new(
                FORECAST_ERROR_LABEL,
                config.value_format.format(amount, FORECAST_ERROR_LABEL, kind),
            )
            .with_emphasis(DisplayEmphasis::Danger),
        );
    }

    trace!(
        point_count = points.len(),
        value_count = values.len(),
        "formatted active points"
    );
    if values.is_empty() {
        return None;
    }

    Some(ActiveDisplay {
        header: format_header(first, config),
        values: values.into_vec(),
    })
}

/// Header in the configured offset and pattern.
///
/// Out-of-range offsets fall back to UTC and unusable patterns to the default
/// one, so an unvalidated config never aborts a hover.
fn format_header(point: &HoverPoint, config: &ChartSessionConfig) -> String {
    let offset = config
        .header_utc_offset_minutes
        .checked_mul(60)
        .and_then(FixedOffset::east_opt)
        .unwrap_or(Utc.fix());
    let local = point.timestamp.with_timezone(&offset);

    write_time(&local, &config.header_time_pattern).unwrap_or_else(|| {
        warn!(
            pattern = %config.header_time_pattern,
            "invalid header time pattern, using default"
        );
        write_time(&local, &default_header_time_pattern()).unwrap_or_else(|| local.to_rfc3339())
    })
}

fn write_time(time: &DateTime<FixedOffset>, pattern: &str) -> Option<String> {
    let mut header = String::new();
    write!(header, "{}", time.format(pattern)).ok()?;
    Some(header)
}
