pub mod error_regions;
pub mod payload;
pub mod primitives;
pub mod stats;
pub mod time_series;
pub mod types;
pub mod value_format;

pub use error_regions::{
    ERROR_REGION_STEP_MILLIS, ErrorRegion, ErrorRegionPoint, build_error_regions,
};
pub use payload::{
    AnalysisPayload, LeadDayAnalysis, StatsBlock, TimestampMap, VariableAnalysis,
    VariableMetadata,
};
pub use stats::{select_stats, stats_display_values};
pub use time_series::{index_lookup, index_series};
pub use types::{
    ACTUAL_SERIES_NAME, ActiveDisplay, DisplayEmphasis, DisplayValue, ERROR_SERIES_NAME,
    FORECAST_ERROR_LABEL, LeadDayKey, TimedValue,
};
pub use value_format::{ValueFormat, title_case};
