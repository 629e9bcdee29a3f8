use crate::config::ChartConfig;

/// The minimal imperative action a configuration change requires.
///
/// Exactly one action applies per update; the groups are checked in
/// priority order and the first difference wins. A change touching both the
/// handler group and the presentation group therefore only detaches the
/// stale handlers, and the new handlers attach on a later full rebuild.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UpdateAction {
    Unchanged,
    /// Unsubscribe the previously attached handlers; nothing is re-attached.
    DetachStaleHandlers,
    /// Remove every series, then run the full update sequence.
    RebuildSeries,
    /// Re-apply the visible time range only.
    ApplyViewport,
}

/// Classifies the difference between the applied and the next configuration.
#[must_use]
pub fn classify_update(prev: &ChartConfig, next: &ChartConfig) -> UpdateAction {
    if prev.handlers_differ(next) {
        UpdateAction::DetachStaleHandlers
    } else if prev.presentation_differs(next) {
        UpdateAction::RebuildSeries
    } else if prev.viewport_differs(next) {
        UpdateAction::ApplyViewport
    } else {
        UpdateAction::Unchanged
    }
}
