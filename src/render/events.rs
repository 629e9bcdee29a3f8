use std::fmt;
use std::rc::Rc;

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use super::backend::SeriesId;

/// Shared event callback with reference identity.
///
/// Two handlers compare equal only when they wrap the same allocation, the
/// property the stale-handler detach tier relies on: cloning a handler into
/// the next configuration keeps its identity, constructing a new closure
/// does not.
pub struct Handler<E>(Rc<dyn Fn(&E)>);

impl<E> Handler<E> {
    pub fn new(callback: impl Fn(&E) + 'static) -> Self {
        Self(Rc::new(callback))
    }

    #[must_use]
    pub fn same(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.0, &other.0)
    }

    pub fn invoke(&self, event: &E) {
        (self.0)(event);
    }
}

impl<E> Clone for Handler<E> {
    fn clone(&self) -> Self {
        Self(Rc::clone(&self.0))
    }
}

impl<E> fmt::Debug for Handler<E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Handler({:p})", Rc::as_ptr(&self.0))
    }
}

/// Identity comparison lifted over optional handlers.
#[must_use]
pub fn same_handler<E>(a: &Option<Handler<E>>, b: &Option<Handler<E>>) -> bool {
    match (a, b) {
        (Some(a), Some(b)) => a.same(b),
        (None, None) => true,
        _ => false,
    }
}

/// Current price of one series under the pointer.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum PriceValue {
    Scalar(f64),
    Ohlc {
        open: f64,
        high: f64,
        low: f64,
        close: f64,
    },
}

/// Engine notification for click and crosshair-move subscriptions.
///
/// `series_prices` preserves series registration order, which the legend
/// relies on for stable row ordering.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PointerEvent {
    pub time: Option<f64>,
    pub point: Option<(f64, f64)>,
    pub series_prices: IndexMap<SeriesId, PriceValue>,
}

impl PointerEvent {
    #[must_use]
    pub fn at_time(time: f64) -> Self {
        Self {
            time: Some(time),
            ..Self::default()
        }
    }

    #[must_use]
    pub fn with_price(mut self, series: SeriesId, price: PriceValue) -> Self {
        self.series_prices.insert(series, price);
        self
    }
}
