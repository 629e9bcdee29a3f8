pub mod adapter;
pub mod event_bridge;
pub mod legend;
pub mod reconcile;
pub mod resize_controller;
pub mod series_manager;

pub use adapter::ChartAdapter;
pub use event_bridge::EventBridge;
pub use legend::{LegendEntry, LegendOverlay};
pub use reconcile::{UpdateAction, classify_update};
pub use resize_controller::{
    ComputedSize, DEFAULT_CHART_HEIGHT, ResizeController, compute_size,
};
pub use series_manager::SeriesManager;
