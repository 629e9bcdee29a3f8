//! chart-sync: declarative configuration reconciliation for stateful chart
//! engines.
//!
//! A [`ChartConfig`] describes what a chart should show — series lists,
//! theme, viewport range, event handlers. [`api::ChartAdapter`] keeps one
//! engine instance synchronized with the latest configuration, choosing the
//! minimal imperative action per change: detach stale handlers, rebuild the
//! series set, or re-apply the viewport only. The engine itself sits behind
//! [`render::ChartBackend`], so any Lightweight-Charts-style surface can be
//! driven by implementing that trait plus the small host traits for the
//! container box, window resize signal and legend overlay.

pub mod api;
pub mod config;
pub mod core;
pub mod error;
pub mod render;
pub mod telemetry;

pub use api::{ChartAdapter, UpdateAction};
pub use config::{ChartConfig, SeriesKind, SeriesSpec};
pub use error::{ChartError, ChartResult};
pub use render::{ChartBackend, Handler, SeriesId};
