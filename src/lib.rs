//! forecast-chart: transform and interaction core for forecast-vs-observed charts.
//!
//! The crate turns an analysis payload (per-lead-day forecasts, observations
//! and errors) into a renderer-agnostic `ChartFrame`, and tracks legend
//! isolation and hover state in an explicit `ChartSession`.

pub mod api;
pub mod core;
pub mod error;
pub mod interaction;
pub mod render;
pub mod telemetry;

pub use api::{ChartEvent, ChartSession, ChartSessionConfig};
pub use error::{ChartError, ChartResult};
