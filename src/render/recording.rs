//! Recording doubles for the host-facing traits.
//!
//! These back the crate's own tests and headless embedding: they validate
//! what a real engine would reject, record every call into shared state the
//! caller can keep inspecting after the adapter takes ownership, and can
//! replay engine events into current subscribers.

use std::cell::{Cell, RefCell};
use std::rc::Rc;

use indexmap::IndexMap;

use crate::config::{ChartOptions, PriceLine, SeriesKind, SeriesMarker, SeriesOptions};
use crate::core::{SeriesPoint, TimeRange};
use crate::error::{ChartError, ChartResult};

use super::backend::{ChartBackend, SeriesId};
use super::events::{Handler, PointerEvent};
use super::host::{HostContainer, OverlayRenderer, ResizeSignal};
use super::primitives::Color;

/// One recorded engine call, in invocation order.
#[derive(Debug, Clone, PartialEq)]
pub enum BackendCall {
    ApplyOptions(ChartOptions),
    Resize { width: u32, height: u32 },
    AddSeries { series: SeriesId, kind: SeriesKind, options: SeriesOptions },
    SetSeriesData { series: SeriesId, points: usize },
    SetSeriesMarkers { series: SeriesId, markers: usize },
    CreatePriceLine { series: SeriesId, line: PriceLine },
    RemoveSeries(SeriesId),
    SetVisibleRange(TimeRange),
    SubscribeClick,
    UnsubscribeClick,
    SubscribeCrosshairMove,
    UnsubscribeCrosshairMove,
    SubscribeVisibleRangeChange,
    UnsubscribeVisibleRangeChange,
    Remove,
}

#[derive(Default)]
struct RecordingState {
    calls: Vec<BackendCall>,
    next_series: u64,
    live: IndexMap<SeriesId, SeriesKind>,
    series_data: IndexMap<SeriesId, Vec<SeriesPoint>>,
    applied_options: Option<ChartOptions>,
    unsupported: Vec<SeriesKind>,
    click_handlers: Vec<Handler<PointerEvent>>,
    crosshair_handlers: Vec<Handler<PointerEvent>>,
    range_handlers: Vec<Handler<TimeRange>>,
    removed: bool,
}

/// In-memory [`ChartBackend`] recording every call.
///
/// Clones share state, so a test can keep one clone while the adapter owns
/// the other.
#[derive(Clone, Default)]
pub struct RecordingBackend {
    state: Rc<RefCell<RecordingState>>,
}

impl RecordingBackend {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Makes subsequent `add_series` calls for `kind` fail, to exercise the
    /// unsupported-series path.
    pub fn reject_kind(&self, kind: SeriesKind) {
        self.state.borrow_mut().unsupported.push(kind);
    }

    #[must_use]
    pub fn calls(&self) -> Vec<BackendCall> {
        self.state.borrow().calls.clone()
    }

    pub fn clear_calls(&self) {
        self.state.borrow_mut().calls.clear();
    }

    /// Currently realized series in addition order.
    #[must_use]
    pub fn live_series(&self) -> Vec<(SeriesId, SeriesKind)> {
        self.state
            .borrow()
            .live
            .iter()
            .map(|(series, kind)| (*series, *kind))
            .collect()
    }

    #[must_use]
    pub fn series_data(&self, series: SeriesId) -> Option<Vec<SeriesPoint>> {
        self.state.borrow().series_data.get(&series).cloned()
    }

    #[must_use]
    pub fn applied_options(&self) -> Option<ChartOptions> {
        self.state.borrow().applied_options.clone()
    }

    /// `(click, crosshair, visible-range)` subscriber counts.
    #[must_use]
    pub fn subscriber_counts(&self) -> (usize, usize, usize) {
        let state = self.state.borrow();
        (
            state.click_handlers.len(),
            state.crosshair_handlers.len(),
            state.range_handlers.len(),
        )
    }

    #[must_use]
    pub fn is_removed(&self) -> bool {
        self.state.borrow().removed
    }

    pub fn emit_click(&self, event: &PointerEvent) {
        let handlers = self.state.borrow().click_handlers.clone();
        for handler in &handlers {
            handler.invoke(event);
        }
    }

    pub fn emit_crosshair_move(&self, event: &PointerEvent) {
        let handlers = self.state.borrow().crosshair_handlers.clone();
        for handler in &handlers {
            handler.invoke(event);
        }
    }

    pub fn emit_visible_range_change(&self, range: &TimeRange) {
        let handlers = self.state.borrow().range_handlers.clone();
        for handler in &handlers {
            handler.invoke(range);
        }
    }
}

impl ChartBackend for RecordingBackend {
    fn apply_options(&mut self, options: &ChartOptions) {
        let mut state = self.state.borrow_mut();
        state.calls.push(BackendCall::ApplyOptions(options.clone()));
        state.applied_options = Some(options.clone());
    }

    fn resize(&mut self, width: u32, height: u32) {
        self.state
            .borrow_mut()
            .calls
            .push(BackendCall::Resize { width, height });
    }

    fn add_series(&mut self, kind: SeriesKind, options: &SeriesOptions) -> ChartResult<SeriesId> {
        let mut state = self.state.borrow_mut();
        if state.unsupported.contains(&kind) {
            return Err(ChartError::UnsupportedSeriesType {
                kind: kind.to_string(),
            });
        }
        let series = SeriesId(state.next_series);
        state.next_series += 1;
        state.live.insert(series, kind);
        state.calls.push(BackendCall::AddSeries {
            series,
            kind,
            options: options.clone(),
        });
        Ok(series)
    }

    fn set_series_data(&mut self, series: SeriesId, data: &[SeriesPoint]) {
        debug_assert!(
            data.windows(2).all(|pair| pair[0].time() < pair[1].time()),
            "series data times must be strictly increasing"
        );
        let mut state = self.state.borrow_mut();
        state.calls.push(BackendCall::SetSeriesData {
            series,
            points: data.len(),
        });
        state.series_data.insert(series, data.to_vec());
    }

    fn set_series_markers(&mut self, series: SeriesId, markers: &[SeriesMarker]) {
        self.state.borrow_mut().calls.push(BackendCall::SetSeriesMarkers {
            series,
            markers: markers.len(),
        });
    }

    fn create_price_line(&mut self, series: SeriesId, line: &PriceLine) {
        self.state.borrow_mut().calls.push(BackendCall::CreatePriceLine {
            series,
            line: line.clone(),
        });
    }

    fn remove_series(&mut self, series: SeriesId) {
        let mut state = self.state.borrow_mut();
        state.live.shift_remove(&series);
        state.series_data.shift_remove(&series);
        state.calls.push(BackendCall::RemoveSeries(series));
    }

    fn set_visible_range(&mut self, range: TimeRange) {
        self.state
            .borrow_mut()
            .calls
            .push(BackendCall::SetVisibleRange(range));
    }

    fn subscribe_click(&mut self, handler: Handler<PointerEvent>) {
        let mut state = self.state.borrow_mut();
        state.calls.push(BackendCall::SubscribeClick);
        if !state.click_handlers.iter().any(|known| known.same(&handler)) {
            state.click_handlers.push(handler);
        }
    }

    fn unsubscribe_click(&mut self, handler: &Handler<PointerEvent>) {
        let mut state = self.state.borrow_mut();
        state.calls.push(BackendCall::UnsubscribeClick);
        state.click_handlers.retain(|known| !known.same(handler));
    }

    fn subscribe_crosshair_move(&mut self, handler: Handler<PointerEvent>) {
        let mut state = self.state.borrow_mut();
        state.calls.push(BackendCall::SubscribeCrosshairMove);
        if !state
            .crosshair_handlers
            .iter()
            .any(|known| known.same(&handler))
        {
            state.crosshair_handlers.push(handler);
        }
    }

    fn unsubscribe_crosshair_move(&mut self, handler: &Handler<PointerEvent>) {
        let mut state = self.state.borrow_mut();
        state.calls.push(BackendCall::UnsubscribeCrosshairMove);
        state.crosshair_handlers.retain(|known| !known.same(handler));
    }

    fn subscribe_visible_range_change(&mut self, handler: Handler<TimeRange>) {
        let mut state = self.state.borrow_mut();
        state.calls.push(BackendCall::SubscribeVisibleRangeChange);
        if !state.range_handlers.iter().any(|known| known.same(&handler)) {
            state.range_handlers.push(handler);
        }
    }

    fn unsubscribe_visible_range_change(&mut self, handler: &Handler<TimeRange>) {
        let mut state = self.state.borrow_mut();
        state.calls.push(BackendCall::UnsubscribeVisibleRangeChange);
        state.range_handlers.retain(|known| !known.same(handler));
    }

    fn remove(&mut self) {
        let mut state = self.state.borrow_mut();
        state.calls.push(BackendCall::Remove);
        state.live.clear();
        state.series_data.clear();
        state.click_handlers.clear();
        state.crosshair_handlers.clear();
        state.range_handlers.clear();
        state.removed = true;
    }
}

/// Overlay double capturing rendered legend rows.
#[derive(Debug, Default)]
pub struct RecordingOverlay {
    pub rows: Vec<(String, Color)>,
    pub clear_count: usize,
}

impl RecordingOverlay {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn texts(&self) -> Vec<String> {
        self.rows.iter().map(|(text, _)| text.clone()).collect()
    }
}

impl OverlayRenderer for RecordingOverlay {
    fn clear(&mut self) {
        self.rows.clear();
        self.clear_count += 1;
    }

    fn push_row(&mut self, text: &str, color: Color) {
        self.rows.push((text.to_owned(), color));
    }
}

/// Container double with an adjustable content box.
#[derive(Clone, Default)]
pub struct FixedContainer {
    size: Rc<Cell<Option<(u32, u32)>>>,
}

impl FixedContainer {
    #[must_use]
    pub fn new(size: Option<(u32, u32)>) -> Self {
        Self {
            size: Rc::new(Cell::new(size)),
        }
    }

    pub fn set_content_box(&self, size: Option<(u32, u32)>) {
        self.size.set(size);
    }
}

impl HostContainer for FixedContainer {
    fn content_box(&self) -> Option<(u32, u32)> {
        self.size.get()
    }
}

#[derive(Debug, Default)]
struct ResizeSignalState {
    connects: usize,
    disconnects: usize,
    connected: bool,
}

/// Resize-signal double counting connect/disconnect transitions.
#[derive(Clone, Default)]
pub struct RecordingResizeSignal {
    state: Rc<RefCell<ResizeSignalState>>,
}

impl RecordingResizeSignal {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn connects(&self) -> usize {
        self.state.borrow().connects
    }

    #[must_use]
    pub fn disconnects(&self) -> usize {
        self.state.borrow().disconnects
    }

    #[must_use]
    pub fn is_connected(&self) -> bool {
        self.state.borrow().connected
    }
}

impl ResizeSignal for RecordingResizeSignal {
    fn connect(&mut self) {
        let mut state = self.state.borrow_mut();
        state.connects += 1;
        state.connected = true;
    }

    fn disconnect(&mut self) {
        let mut state = self.state.borrow_mut();
        state.disconnects += 1;
        state.connected = false;
    }
}
