//! Session-level API: configuration, event handling and frame building.

mod active_point_formatter;
mod frame_builder;
mod json_contract;
mod session;
mod session_config;
mod style_table;

pub use active_point_formatter::format_active_points;
pub use json_contract::{CHART_FRAME_JSON_SCHEMA_V1, ChartFrameJsonContractV1};
pub use session::{ChartEvent, ChartSession, FetchTicket, SessionStatus};
pub use session_config::{ChartSessionConfig, StaleResponsePolicy};
pub use style_table::{SeriesKind, SeriesStyle, StyleTable, StyledSeries};
