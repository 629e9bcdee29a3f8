use serde::{Deserialize, Serialize};

use crate::config::{ChartOptions, PriceLine, SeriesKind, SeriesMarker, SeriesOptions};
use crate::core::{SeriesPoint, TimeRange};
use crate::error::ChartResult;

use super::events::{Handler, PointerEvent};

/// Engine-assigned handle for one realized series.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct SeriesId(pub u64);

/// Contract of the stateful rendering engine behind one mounted chart.
///
/// Implementations bind an engine instance to a concrete drawing surface;
/// the reconciliation core drives them exclusively through this trait. All
/// operations are synchronous, and subscription registration is idempotent
/// for a handler of the same identity.
pub trait ChartBackend {
    fn apply_options(&mut self, options: &ChartOptions);

    fn resize(&mut self, width: u32, height: u32);

    /// Realizes a new series of `kind`.
    ///
    /// Engines that do not implement a kind report
    /// [`ChartError::UnsupportedSeriesType`](crate::error::ChartError).
    fn add_series(&mut self, kind: SeriesKind, options: &SeriesOptions) -> ChartResult<SeriesId>;

    fn set_series_data(&mut self, series: SeriesId, data: &[SeriesPoint]);

    fn set_series_markers(&mut self, series: SeriesId, markers: &[SeriesMarker]);

    fn create_price_line(&mut self, series: SeriesId, line: &PriceLine);

    fn remove_series(&mut self, series: SeriesId);

    fn set_visible_range(&mut self, range: TimeRange);

    fn subscribe_click(&mut self, handler: Handler<PointerEvent>);
    fn unsubscribe_click(&mut self, handler: &Handler<PointerEvent>);

    fn subscribe_crosshair_move(&mut self, handler: Handler<PointerEvent>);
    fn unsubscribe_crosshair_move(&mut self, handler: &Handler<PointerEvent>);

    fn subscribe_visible_range_change(&mut self, handler: Handler<TimeRange>);
    fn unsubscribe_visible_range_change(&mut self, handler: &Handler<TimeRange>);

    /// Releases engine-side resources; the handle is dropped right after.
    fn remove(&mut self);
}
