use chart_sync::api::{UpdateAction, classify_update};
use chart_sync::config::{ChartConfig, ChartOptions, LayoutOptions, SeriesSpec};
use chart_sync::core::{SeriesPoint, TimeRange};
use chart_sync::render::{Color, Handler, PointerEvent};

fn line_spec(values: &[(f64, f64)]) -> SeriesSpec {
    SeriesSpec::new(
        values
            .iter()
            .map(|&(time, value)| SeriesPoint::scalar(time, value))
            .collect(),
    )
}

fn base_config() -> ChartConfig {
    ChartConfig::new()
        .with_line_series(vec![line_spec(&[(0.0, 1.0), (1.0, 2.0)])])
        .with_on_click(Handler::new(|_event: &PointerEvent| {}))
        .with_visible_range(0.0, 1.0)
}

#[test]
fn identical_configs_are_unchanged() {
    let prev = base_config();
    let next = prev.clone();
    assert_eq!(classify_update(&prev, &next), UpdateAction::Unchanged);
}

#[test]
fn cloned_handlers_keep_identity() {
    let handler = Handler::new(|_event: &PointerEvent| {});
    let prev = ChartConfig::new().with_on_click(handler.clone());
    let next = ChartConfig::new().with_on_click(handler);
    assert_eq!(classify_update(&prev, &next), UpdateAction::Unchanged);
}

#[test]
fn replaced_click_handler_detaches() {
    let prev = base_config();
    let mut next = prev.clone();
    next.on_click = Some(Handler::new(|_event: &PointerEvent| {}));
    assert_eq!(
        classify_update(&prev, &next),
        UpdateAction::DetachStaleHandlers
    );
}

#[test]
fn added_and_dropped_handlers_detach() {
    let prev = ChartConfig::new();
    let mut next = prev.clone();
    next.on_time_range_move = Some(Handler::new(|_range: &TimeRange| {}));
    assert_eq!(
        classify_update(&prev, &next),
        UpdateAction::DetachStaleHandlers
    );

    let prev = base_config();
    let mut next = prev.clone();
    next.on_click = None;
    assert_eq!(
        classify_update(&prev, &next),
        UpdateAction::DetachStaleHandlers
    );
}

#[test]
fn changed_series_contents_rebuild() {
    let prev = base_config();
    let mut next = prev.clone();
    next.line_series = vec![line_spec(&[(0.0, 1.0), (1.0, 3.0)])];
    assert_eq!(classify_update(&prev, &next), UpdateAction::RebuildSeries);
}

#[test]
fn added_series_list_rebuilds() {
    let prev = base_config();
    let mut next = prev.clone();
    next.histogram_series = vec![line_spec(&[(0.0, 4.0), (1.0, 5.0)])];
    assert_eq!(classify_update(&prev, &next), UpdateAction::RebuildSeries);
}

#[test]
fn theme_flag_toggle_rebuilds() {
    let prev = base_config();
    let mut next = prev.clone();
    next.dark_theme = !prev.dark_theme;
    assert_eq!(classify_update(&prev, &next), UpdateAction::RebuildSeries);
}

#[test]
fn options_overlay_change_rebuilds() {
    let prev = base_config();
    let mut next = prev.clone();
    next.options = ChartOptions {
        layout: LayoutOptions {
            background_color: Some(Color::rgb8(0x10, 0x20, 0x30)),
            ..LayoutOptions::default()
        },
        ..ChartOptions::default()
    };
    assert_eq!(classify_update(&prev, &next), UpdateAction::RebuildSeries);
}

#[test]
fn palette_override_alone_does_not_rebuild() {
    // The palette is read during series realization but is not part of the
    // presentation difference group; changing it alone is not an update.
    let prev = base_config();
    let mut next = prev.clone();
    next.colors = Some(vec![Color::rgb8(1, 2, 3)]);
    assert_eq!(classify_update(&prev, &next), UpdateAction::Unchanged);
}

#[test]
fn viewport_change_applies_viewport_only() {
    let prev = base_config();
    let mut next = prev.clone();
    next.from = Some(0.5);
    next.to = Some(1.5);
    assert_eq!(classify_update(&prev, &next), UpdateAction::ApplyViewport);

    let mut partial = prev.clone();
    partial.to = None;
    assert_eq!(classify_update(&prev, &partial), UpdateAction::ApplyViewport);
}

#[test]
fn handler_change_takes_priority_over_series_change() {
    let prev = base_config();
    let mut next = prev.clone();
    next.on_click = Some(Handler::new(|_event: &PointerEvent| {}));
    next.line_series = vec![line_spec(&[(0.0, 9.0), (1.0, 8.0)])];
    assert_eq!(
        classify_update(&prev, &next),
        UpdateAction::DetachStaleHandlers
    );
}

#[test]
fn series_change_takes_priority_over_viewport_change() {
    let prev = base_config();
    let mut next = prev.clone();
    next.line_series = vec![line_spec(&[(0.0, 9.0), (1.0, 8.0)])];
    next.from = Some(0.25);
    assert_eq!(classify_update(&prev, &next), UpdateAction::RebuildSeries);
}
