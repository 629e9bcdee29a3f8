use smallvec::SmallVec;
use tracing::{debug, trace};

use crate::config::{DEFAULT_SERIES_PALETTE, SeriesKind, SeriesSpec};
use crate::core::densify_linear;
use crate::error::ChartResult;
use crate::render::{ChartBackend, Color, SeriesId};

use super::legend::{LegendEntry, LegendOverlay};

/// Owns the set of realized series handles for one mounted chart.
///
/// The tracked handles are always exactly the realization of the most
/// recently applied configuration: `remove_all` is called before every
/// rebuild, never standalone.
#[derive(Debug, Default)]
pub struct SeriesManager {
    handles: SmallVec<[SeriesId; 8]>,
}

impl SeriesManager {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn handles(&self) -> &[SeriesId] {
        &self.handles
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.handles.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.handles.is_empty()
    }

    /// Realizes one spec on the chart: resolves the series color, densifies
    /// sparse scalar data, loads it, attaches markers and price lines, and
    /// registers a legend entry when the spec declares a title.
    pub fn add_series<B: ChartBackend>(
        &mut self,
        chart: &mut B,
        legend: &mut LegendOverlay,
        palette: &[Color],
        spec: &SeriesSpec,
        kind: SeriesKind,
    ) -> ChartResult<SeriesId> {
        let palette = if palette.is_empty() {
            &DEFAULT_SERIES_PALETTE
        } else {
            palette
        };
        let color = spec
            .options
            .color
            .unwrap_or(palette[self.handles.len() % palette.len()]);

        let mut options = spec.options.clone();
        options.color = Some(color);
        let series = chart.add_series(kind, &options)?;

        let data = densify_linear(&spec.data, spec.linear_interpolation);
        chart.set_series_data(series, &data);

        if !spec.markers.is_empty() {
            chart.set_series_markers(series, &spec.markers);
        }
        for line in &spec.price_lines {
            chart.create_price_line(series, line);
        }

        if let Some(title) = spec.legend.as_deref().filter(|title| !title.is_empty()) {
            legend.add_entry(LegendEntry {
                series,
                color,
                title: title.to_owned(),
            });
        }

        self.handles.push(series);
        trace!(series = series.0, %kind, points = data.len(), "added series");
        Ok(series)
    }

    /// Removes every tracked handle from the chart and clears the tracked
    /// set and all legend entries.
    pub fn remove_all<B: ChartBackend>(&mut self, chart: &mut B, legend: &mut LegendOverlay) {
        debug!(count = self.handles.len(), "removing all series");
        for &series in &self.handles {
            chart.remove_series(series);
        }
        self.handles.clear();
        legend.set_entries(Vec::new());
    }
}
