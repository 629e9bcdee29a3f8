use std::cell::RefCell;
use std::rc::Rc;

use tracing::trace;

use crate::render::{Color, OverlayRenderer, PointerEvent, PriceValue, SeriesId};

/// Colors for OHLC legend rows, chosen by close-vs-open direction.
/// `close == open` counts as bullish.
const BULLISH_ROW_COLOR: Color = Color::rgba8(0, 150, 136, 0.8);
const BEARISH_ROW_COLOR: Color = Color::rgba8(255, 82, 82, 0.8);

/// One legend row source: a realized series that declared a title.
#[derive(Debug, Clone, PartialEq)]
pub struct LegendEntry {
    pub series: SeriesId,
    pub color: Color,
    pub title: String,
}

/// Tracks legend entries and redraws the overlay on crosshair movement.
///
/// Every movement event triggers a full redraw, not an incremental patch;
/// the overlay is a handful of rows and the engine already throttles its
/// pointer tracking.
pub struct LegendOverlay {
    renderer: Rc<RefCell<dyn OverlayRenderer>>,
    entries: Vec<LegendEntry>,
}

impl LegendOverlay {
    #[must_use]
    pub fn new(renderer: Rc<RefCell<dyn OverlayRenderer>>) -> Self {
        Self {
            renderer,
            entries: Vec::new(),
        }
    }

    #[must_use]
    pub fn entries(&self) -> &[LegendEntry] {
        &self.entries
    }

    /// Replaces the tracked entries without touching rendered content.
    pub fn set_entries(&mut self, entries: Vec<LegendEntry>) {
        self.entries = entries;
    }

    pub fn add_entry(&mut self, entry: LegendEntry) {
        self.entries.push(entry);
    }

    /// Drops all entries and wipes the rendered overlay.
    pub fn clear(&mut self) {
        self.entries.clear();
        self.renderer.borrow_mut().clear();
    }

    /// Renders the configuration's static top label.
    pub fn render_static_label(&self, label: &str, color: Color) {
        self.renderer.borrow_mut().push_row(label, color);
    }

    /// Redraws one row per entry, in registration order, from the event's
    /// per-series price map. Entries without a price at this time are
    /// skipped; events without a time leave the overlay untouched.
    pub fn on_crosshair_move(&self, event: &PointerEvent) {
        if event.time.is_none() || self.entries.is_empty() {
            return;
        }

        let mut renderer = self.renderer.borrow_mut();
        renderer.clear();
        let mut rendered = 0_usize;
        for entry in &self.entries {
            let Some(price) = event.series_prices.get(&entry.series) else {
                continue;
            };
            match *price {
                PriceValue::Scalar(value) => {
                    renderer.push_row(&format!("{} {}", entry.title, value), entry.color);
                }
                PriceValue::Ohlc {
                    open,
                    high,
                    low,
                    close,
                } => {
                    let color = if close >= open {
                        BULLISH_ROW_COLOR
                    } else {
                        BEARISH_ROW_COLOR
                    };
                    renderer.push_row(
                        &format!("{} O:{open} H:{high} L:{low} C:{close}", entry.title),
                        color,
                    );
                }
            }
            rendered += 1;
        }
        trace!(entries = self.entries.len(), rendered, "legend redraw");
    }
}

impl std::fmt::Debug for LegendOverlay {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("LegendOverlay")
            .field("entries", &self.entries)
            .finish_non_exhaustive()
    }
}
