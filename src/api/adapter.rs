use std::cell::RefCell;
use std::rc::Rc;

use tracing::{debug, trace, warn};

use crate::config::{ChartConfig, ChartOptions, theme_options, theme_text_color};
use crate::error::ChartResult;
use crate::render::{ChartBackend, HostContainer, OverlayRenderer, ResizeSignal, SeriesId};

use super::event_bridge::EventBridge;
use super::legend::{LegendEntry, LegendOverlay};
use super::reconcile::{UpdateAction, classify_update};
use super::resize_controller::{ResizeController, compute_size};
use super::series_manager::SeriesManager;

/// Top-level controller keeping one engine instance synchronized with the
/// latest declarative configuration.
///
/// The adapter exclusively owns the engine handle between `mount` and
/// `unmount`; collaborators receive it only as call-scoped references.
/// While no handle is present every engine-facing operation is a silent
/// no-op, so window-resize and crosshair callbacks may fire at any point
/// relative to the lifecycle without failing.
pub struct ChartAdapter<B, C, S>
where
    B: ChartBackend,
    C: HostContainer,
    S: ResizeSignal,
{
    chart: Option<B>,
    container: C,
    resize: ResizeController<S>,
    series: SeriesManager,
    legend: Rc<RefCell<LegendOverlay>>,
    events: EventBridge,
    applied: Option<ChartConfig>,
}

impl<B, C, S> ChartAdapter<B, C, S>
where
    B: ChartBackend,
    C: HostContainer,
    S: ResizeSignal,
{
    #[must_use]
    pub fn new(container: C, signal: S, overlay: Rc<RefCell<dyn OverlayRenderer>>) -> Self {
        let legend = Rc::new(RefCell::new(LegendOverlay::new(overlay)));
        let events = EventBridge::new(Rc::clone(&legend));
        Self {
            chart: None,
            container,
            resize: ResizeController::new(signal),
            series: SeriesManager::new(),
            legend,
            events,
            applied: None,
        }
    }

    #[must_use]
    pub fn is_mounted(&self) -> bool {
        self.chart.is_some()
    }

    #[must_use]
    pub fn series_handles(&self) -> &[SeriesId] {
        self.series.handles()
    }

    #[must_use]
    pub fn legend_entries(&self) -> Vec<LegendEntry> {
        self.legend.borrow().entries().to_vec()
    }

    /// Takes ownership of a freshly created engine instance and applies the
    /// initial configuration. Mounting over a live instance tears the old
    /// one down first.
    pub fn mount(&mut self, chart: B, config: ChartConfig) -> ChartResult<()> {
        if self.chart.is_some() {
            self.unmount();
        }
        self.chart = Some(chart);
        self.full_update(&config)?;
        self.apply_computed_size(&config);
        self.applied = Some(config);
        debug!("mounted chart adapter");
        Ok(())
    }

    /// Reconciles the next configuration against the applied one, running
    /// the minimal action its differences require.
    pub fn update(&mut self, next: ChartConfig) -> ChartResult<()> {
        if !next.auto_width && !next.auto_height {
            self.resize.disable();
        }

        let Some(prev) = self.applied.take() else {
            self.full_update(&next)?;
            self.applied = Some(next);
            return Ok(());
        };

        let action = classify_update(&prev, &next);
        debug!(?action, "classified configuration update");
        match action {
            UpdateAction::DetachStaleHandlers => {
                let Self { chart, events, .. } = self;
                if let Some(chart) = chart.as_mut() {
                    events.detach_user(chart, &prev);
                }
            }
            UpdateAction::RebuildSeries => {
                {
                    let Self {
                        chart,
                        series,
                        legend,
                        ..
                    } = self;
                    if let Some(chart) = chart.as_mut() {
                        series.remove_all(chart, &mut legend.borrow_mut());
                    }
                }
                self.full_update(&next)?;
            }
            UpdateAction::ApplyViewport => self.apply_visible_range(&next),
            UpdateAction::Unchanged => {}
        }
        self.applied = Some(next);
        Ok(())
    }

    /// Reverses all subscriptions and listeners, then releases the engine
    /// handle. Safe to call repeatedly.
    pub fn unmount(&mut self) {
        {
            let Self {
                chart,
                series,
                legend,
                events,
                applied,
                ..
            } = self;
            if let Some(chart) = chart.as_mut() {
                match applied.as_ref() {
                    Some(config) => events.detach_all(chart, config),
                    None => events.detach_all(chart, &ChartConfig::default()),
                }
                series.remove_all(chart, &mut legend.borrow_mut());
                chart.remove();
            }
        }
        self.chart = None;
        self.resize.disable();
        self.applied = None;
        debug!("unmounted chart adapter");
    }

    /// Host entry point for the window resize signal. No-op unless the
    /// listener is installed and a chart is mounted.
    pub fn on_window_resize(&mut self) {
        let Self {
            chart,
            container,
            resize,
            applied,
            ..
        } = self;
        if !resize.is_enabled() {
            return;
        }
        let (Some(chart), Some(config)) = (chart.as_mut(), applied.as_ref()) else {
            return;
        };
        let size = compute_size(config, container.content_box());
        if let Some(width) = size.width {
            chart.resize(width, size.height);
            trace!(width, height = size.height, "window resize applied");
        }
    }

    /// The full update sequence: theme and dimensions, legend reset, series
    /// rebuild, event resubscription, viewport, resize listener.
    fn full_update(&mut self, config: &ChartConfig) -> ChartResult<()> {
        let Self {
            chart,
            container,
            resize,
            series,
            legend,
            events,
            ..
        } = self;

        resize.disable();
        let Some(chart) = chart.as_mut() else {
            debug!("full update skipped: chart not mounted");
            return Ok(());
        };

        let size = compute_size(config, container.content_box());
        let computed = ChartOptions {
            width: size.width,
            height: Some(size.height),
            ..ChartOptions::default()
        };
        let options = theme_options(config.dark_theme)
            .merged_with(&computed)
            .merged_with(&config.options);
        chart.apply_options(&options);

        {
            let mut legend = legend.borrow_mut();
            // Handles from an aborted earlier rebuild must not survive.
            if !series.is_empty() {
                series.remove_all(chart, &mut legend);
            }
            legend.clear();
            if let Some(label) = config.legend.as_deref().filter(|label| !label.is_empty()) {
                legend.render_static_label(label, theme_text_color(config.dark_theme));
            }
            for (kind, spec) in config.series_specs() {
                series.add_series(chart, &mut legend, config.palette(), spec, kind)?;
            }
        }

        events.subscribe(chart, config);

        if let Some(range) = config.visible_range() {
            chart.set_visible_range(range);
        } else if config.from.is_some() || config.to.is_some() {
            warn!("visible range skipped: both `from` and `to` must be set");
        }

        if config.auto_width || config.auto_height {
            resize.enable();
        }
        debug!(series = series.len(), "applied full update");
        Ok(())
    }

    fn apply_visible_range(&mut self, config: &ChartConfig) {
        let Some(chart) = self.chart.as_mut() else {
            return;
        };
        if let Some(range) = config.visible_range() {
            chart.set_visible_range(range);
        } else if config.from.is_some() || config.to.is_some() {
            warn!("visible range skipped: both `from` and `to` must be set");
        }
    }

    fn apply_computed_size(&mut self, config: &ChartConfig) {
        let size = compute_size(config, self.container.content_box());
        if let (Some(chart), Some(width)) = (self.chart.as_mut(), size.width) {
            chart.resize(width, size.height);
            trace!(width, height = size.height, "applied initial chart size");
        }
    }
}
