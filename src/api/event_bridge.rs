use std::cell::RefCell;
use std::rc::Rc;

use crate::config::ChartConfig;
use crate::render::{ChartBackend, Handler, PointerEvent};

use super::legend::LegendOverlay;

/// Attaches and detaches chart event subscriptions.
///
/// Besides the three caller-supplied handlers, a legend-refresh crosshair
/// subscription is always attached. Its closure is created once so its
/// identity stays stable across full updates: re-subscribing it is
/// idempotent at the engine, and `detach_all` can remove it on unmount. It
/// is never exposed to the caller.
pub struct EventBridge {
    legend_refresh: Handler<PointerEvent>,
}

impl EventBridge {
    #[must_use]
    pub fn new(legend: Rc<RefCell<LegendOverlay>>) -> Self {
        let legend_refresh =
            Handler::new(move |event: &PointerEvent| legend.borrow().on_crosshair_move(event));
        Self { legend_refresh }
    }

    /// Subscribes the configuration's handlers plus the legend refresh.
    pub fn subscribe<B: ChartBackend>(&self, chart: &mut B, config: &ChartConfig) {
        if let Some(handler) = &config.on_click {
            chart.subscribe_click(handler.clone());
        }
        if let Some(handler) = &config.on_crosshair_move {
            chart.subscribe_crosshair_move(handler.clone());
        }
        if let Some(handler) = &config.on_time_range_move {
            chart.subscribe_visible_range_change(handler.clone());
        }
        chart.subscribe_crosshair_move(self.legend_refresh.clone());
    }

    /// Detaches the caller-supplied handlers of `config`, leaving the
    /// legend refresh attached.
    pub fn detach_user<B: ChartBackend>(&self, chart: &mut B, config: &ChartConfig) {
        if let Some(handler) = &config.on_click {
            chart.unsubscribe_click(handler);
        }
        if let Some(handler) = &config.on_crosshair_move {
            chart.unsubscribe_crosshair_move(handler);
        }
        if let Some(handler) = &config.on_time_range_move {
            chart.unsubscribe_visible_range_change(handler);
        }
    }

    /// Detaches everything, including the legend refresh. Unmount path.
    pub fn detach_all<B: ChartBackend>(&self, chart: &mut B, config: &ChartConfig) {
        self.detach_user(chart, config);
        chart.unsubscribe_crosshair_move(&self.legend_refresh);
    }
}

impl std::fmt::Debug for EventBridge {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("EventBridge").finish_non_exhaustive()
    }
}
