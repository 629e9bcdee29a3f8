mod backend;
mod events;
mod host;
mod primitives;
mod recording;

pub use backend::{ChartBackend, SeriesId};
pub use events::{Handler, PointerEvent, PriceValue, same_handler};
pub use host::{HostContainer, OverlayRenderer, ResizeSignal};
pub use primitives::Color;
pub use recording::{
    BackendCall, FixedContainer, RecordingBackend, RecordingOverlay, RecordingResizeSignal,
};
