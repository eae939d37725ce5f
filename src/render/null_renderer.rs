use crate::error::ChartResult;
use crate::render::{ChartFrame, Renderer};

/// No-op renderer used by tests and headless session usage.
///
/// It still validates frame content so tests can catch invalid output before
/// a real backend consumes it.
#[derive(Debug, Default)]
pub struct NullRenderer {
    pub last_series_count: usize,
    pub last_region_count: usize,
    pub last_legend_count: usize,
}

impl Renderer for NullRenderer {
    fn render(&mut self, frame: &ChartFrame) -> ChartResult<()> {
        frame.validate()?;
        self.last_series_count = frame.visible_series.len();
        self.last_region_count = frame.error_regions.len();
        self.last_legend_count = frame.legend_entries.len();
        Ok(())
    }
}
