use tracing::debug;

use crate::core::{
    ErrorRegion, build_error_regions, index_series, select_stats, stats_display_values,
};
use crate::error::ChartResult;
use crate::render::{ChartFrame, Renderer, VisibleSeries};

use super::active_point_formatter::format_active_points;
use super::{ChartSession, SeriesKind};

impl ChartSession {
    /// Builds the full render contract for the current state.
    ///
    /// Any malformed timestamp in the selected variable fails the whole frame
    /// rather than producing a partial chart.
    pub fn frame(&self) -> ChartResult<ChartFrame> {
        let Some(variable) = self.variable() else {
            return Ok(ChartFrame::empty(
                self.config.error_color,
                self.status.message(),
            ));
        };
        let active_day = self.legend.active_day();

        let mut visible_series = Vec::new();
        for (name, entry) in self.styles.iter() {
            let Some(opacity) = self.styles.plot_opacity(name, active_day) else {
                continue;
            };
            let source = match &entry.kind {
                SeriesKind::Actual => &variable.obs,
                SeriesKind::LeadDay(day) => match variable.lead_day(day) {
                    Some(lead_day) => &lead_day.fcasts,
                    None => continue,
                },
                SeriesKind::Error => continue,
            };
            visible_series.push(VisibleSeries {
                name: name.to_owned(),
                opacity,
                color: entry.style.color,
                points: index_series(source)?,
            });
        }

        let error_regions: Vec<ErrorRegion> = match active_day
            .isolated_day()
            .and_then(|day| variable.lead_day(day))
        {
            Some(lead_day) => {
                build_error_regions(&lead_day.errors, &lead_day.fcasts, &variable.obs)?
            }
            None => Vec::new(),
        };

        let stats = select_stats(variable, active_day.isolated_day())?;

        let frame = ChartFrame {
            variable: Some(variable.metadata.clone()),
            active_day: active_day.clone(),
            visible_series,
            error_color: self.config.error_color,
            error_regions,
            legend_entries: self.styles.legend_entries(active_day),
            active_display: format_active_points(
                &self.hover_points,
                Some(variable.metadata.prop_name.as_str()),
                &self.config,
            ),
            stats_display: stats_display_values(stats, &self.config.value_format),
            status_message: self.status.message(),
        };
        debug!(
            variable = %variable.metadata.prop_name,
            series_count = frame.visible_series.len(),
            region_count = frame.error_regions.len(),
            "built chart frame"
        );
        Ok(frame)
    }

    /// Builds the current frame and hands it to `renderer`.
    pub fn render<R: Renderer>(&self, renderer: &mut R) -> ChartResult<()> {
        let frame = self.frame()?;
        renderer.render(&frame)
    }
}
