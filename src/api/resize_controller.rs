use crate::config::ChartConfig;
use crate::render::ResizeSignal;

/// Height applied when neither the configuration nor the container
/// provides one.
pub const DEFAULT_CHART_HEIGHT: u32 = 500;

/// Dimensions resolved from the configuration and the container box.
///
/// `width` stays `None` when no source can provide one; the engine then
/// keeps its own default and standalone resize calls are skipped.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ComputedSize {
    pub width: Option<u32>,
    pub height: u32,
}

/// Resolves chart dimensions: auto axes read the container box, fixed axes
/// read the configured value, and height falls back to
/// [`DEFAULT_CHART_HEIGHT`].
#[must_use]
pub fn compute_size(config: &ChartConfig, container: Option<(u32, u32)>) -> ComputedSize {
    let width = if config.auto_width {
        container.map(|(width, _)| width)
    } else {
        config.width
    };
    let height = if config.auto_height {
        container
            .map(|(_, height)| height)
            .or(config.height)
            .unwrap_or(DEFAULT_CHART_HEIGHT)
    } else {
        config.height.unwrap_or(DEFAULT_CHART_HEIGHT)
    };
    ComputedSize { width, height }
}

/// Owns the window-resize hook installation state.
///
/// Enable/disable are idempotent: the underlying signal sees only state
/// transitions, never a double install.
#[derive(Debug)]
pub struct ResizeController<S: ResizeSignal> {
    signal: S,
    installed: bool,
}

impl<S: ResizeSignal> ResizeController<S> {
    #[must_use]
    pub fn new(signal: S) -> Self {
        Self {
            signal,
            installed: false,
        }
    }

    pub fn enable(&mut self) {
        if !self.installed {
            self.signal.connect();
            self.installed = true;
        }
    }

    pub fn disable(&mut self) {
        if self.installed {
            self.signal.disconnect();
            self.installed = false;
        }
    }

    #[must_use]
    pub fn is_enabled(&self) -> bool {
        self.installed
    }
}
