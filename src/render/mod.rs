mod frame;
mod null_renderer;
mod primitives;

pub use frame::{ChartFrame, LegendEntry, VisibleSeries};
pub use null_renderer::NullRenderer;
pub use primitives::{Color, LegendSymbol};
pub(crate) use primitives::validate_opacity;

use crate::error::ChartResult;

/// Contract implemented by any rendering backend.
///
/// Backends receive a fully materialized `ChartFrame` so drawing code stays
/// isolated from payload parsing and interaction logic.
pub trait Renderer {
    fn render(&mut self, frame: &ChartFrame) -> ChartResult<()>;
}
