use std::cell::{Cell, RefCell};
use std::rc::Rc;

use chart_sync::api::ChartAdapter;
use chart_sync::config::{ChartConfig, SeriesSpec};
use chart_sync::core::{SeriesPoint, TimeRange};
use chart_sync::render::{
    BackendCall, Color, FixedContainer, Handler, OverlayRenderer, PointerEvent, PriceValue,
    RecordingBackend, RecordingOverlay, RecordingResizeSignal,
};

type TestAdapter = ChartAdapter<RecordingBackend, FixedContainer, RecordingResizeSignal>;

struct Harness {
    adapter: TestAdapter,
    backend: RecordingBackend,
    overlay: Rc<RefCell<RecordingOverlay>>,
    signal: RecordingResizeSignal,
}

fn harness() -> Harness {
    let backend = RecordingBackend::new();
    let overlay = Rc::new(RefCell::new(RecordingOverlay::new()));
    let signal = RecordingResizeSignal::new();
    let adapter = ChartAdapter::new(
        FixedContainer::new(Some((800, 600))),
        signal.clone(),
        Rc::clone(&overlay) as Rc<RefCell<dyn OverlayRenderer>>,
    );
    Harness {
        adapter,
        backend,
        overlay,
        signal,
    }
}

fn line_spec(values: &[(f64, f64)]) -> SeriesSpec {
    SeriesSpec::new(
        values
            .iter()
            .map(|&(time, value)| SeriesPoint::scalar(time, value))
            .collect(),
    )
}

fn index_of(calls: &[BackendCall], matches: impl Fn(&BackendCall) -> bool) -> usize {
    calls
        .iter()
        .position(|call| matches(call))
        .expect("expected call recorded")
}

#[test]
fn mount_runs_the_full_update_sequence_in_order() {
    let mut harness = harness();
    let config = ChartConfig::new()
        .with_auto_size(true, false)
        .with_line_series(vec![line_spec(&[(0.0, 1.0), (1.0, 2.0)])])
        .with_on_click(Handler::new(|_event: &PointerEvent| {}))
        .with_visible_range(0.0, 1.0);
    harness
        .adapter
        .mount(harness.backend.clone(), config)
        .expect("mount");

    let calls = harness.backend.calls();
    let options_at = index_of(&calls, |call| matches!(call, BackendCall::ApplyOptions(_)));
    let series_at = index_of(&calls, |call| matches!(call, BackendCall::AddSeries { .. }));
    let subscribe_at = index_of(&calls, |call| matches!(call, BackendCall::SubscribeClick));
    let range_at = index_of(&calls, |call| {
        matches!(call, BackendCall::SetVisibleRange(_))
    });
    let resize_at = index_of(&calls, |call| matches!(call, BackendCall::Resize { .. }));

    assert!(options_at < series_at);
    assert!(series_at < subscribe_at);
    assert!(subscribe_at < range_at);
    assert!(range_at < resize_at, "initial sizing runs after the update");

    assert!(harness.adapter.is_mounted());
    assert!(harness.signal.is_connected());
}

#[test]
fn mount_applies_theme_and_computed_dimensions() {
    let mut harness = harness();
    let config = ChartConfig::new()
        .with_dark_theme(true)
        .with_line_series(vec![line_spec(&[(0.0, 1.0), (1.0, 2.0)])]);
    harness
        .adapter
        .mount(harness.backend.clone(), config)
        .expect("mount");

    let options = harness.backend.applied_options().expect("options applied");
    assert_eq!(
        options.layout.background_color,
        Some(Color::rgb8(0x13, 0x17, 0x22))
    );
    assert_eq!(options.layout.text_color, Some(Color::rgb8(0xD9, 0xD9, 0xD9)));
    assert_eq!(
        options.grid.vert_lines.color,
        Some(Color::rgb8(0x36, 0x3C, 0x4E))
    );
    // No explicit or auto width; the engine keeps its own default.
    assert_eq!(options.width, None);
    assert_eq!(options.height, Some(500));
}

#[test]
fn mount_renders_the_static_legend_label() {
    let mut harness = harness();
    let config = ChartConfig::new().with_legend("Intraday");
    harness
        .adapter
        .mount(harness.backend.clone(), config)
        .expect("mount");

    let overlay = harness.overlay.borrow();
    assert_eq!(overlay.rows.len(), 1);
    assert_eq!(overlay.rows[0].0, "Intraday");
    assert_eq!(overlay.rows[0].1, Color::rgb8(0x19, 0x19, 0x19));
}

#[test]
fn crosshair_event_drives_legend_rows() {
    let mut harness = harness();
    let config = ChartConfig::new()
        .with_line_series(vec![line_spec(&[(0.0, 1.0), (1.0, 2.0)]).with_legend("AAPL")]);
    harness
        .adapter
        .mount(harness.backend.clone(), config)
        .expect("mount");

    let (series, _) = harness.backend.live_series()[0];
    let event = PointerEvent::at_time(0.5).with_price(series, PriceValue::Scalar(42.0));
    harness.backend.emit_crosshair_move(&event);

    let overlay = harness.overlay.borrow();
    assert_eq!(overlay.texts(), vec!["AAPL 42".to_owned()]);
}

#[test]
fn user_handlers_receive_engine_events() {
    let clicks = Rc::new(Cell::new(0_u32));
    let seen_range = Rc::new(Cell::new(None::<TimeRange>));

    let mut harness = harness();
    let config = ChartConfig::new()
        .with_on_click(Handler::new({
            let clicks = Rc::clone(&clicks);
            move |_event: &PointerEvent| clicks.set(clicks.get() + 1)
        }))
        .with_on_time_range_move(Handler::new({
            let seen_range = Rc::clone(&seen_range);
            move |range: &TimeRange| seen_range.set(Some(*range))
        }));
    harness
        .adapter
        .mount(harness.backend.clone(), config)
        .expect("mount");

    harness.backend.emit_click(&PointerEvent::at_time(1.0));
    harness
        .backend
        .emit_visible_range_change(&TimeRange::new(2.0, 9.0));

    assert_eq!(clicks.get(), 1);
    assert_eq!(seen_range.get(), Some(TimeRange::new(2.0, 9.0)));
}

#[test]
fn unmount_reverses_subscriptions_listeners_and_series() {
    let mut harness = harness();
    let config = ChartConfig::new()
        .with_auto_size(true, true)
        .with_line_series(vec![line_spec(&[(0.0, 1.0), (1.0, 2.0)]).with_legend("L")])
        .with_on_click(Handler::new(|_event: &PointerEvent| {}))
        .with_on_crosshair_move(Handler::new(|_event: &PointerEvent| {}))
        .with_on_time_range_move(Handler::new(|_range: &TimeRange| {}));
    harness
        .adapter
        .mount(harness.backend.clone(), config)
        .expect("mount");
    assert!(harness.signal.is_connected());

    harness.adapter.unmount();

    assert!(!harness.adapter.is_mounted());
    assert_eq!(harness.backend.subscriber_counts(), (0, 0, 0));
    assert!(harness.backend.live_series().is_empty());
    assert!(harness.backend.is_removed());
    assert!(!harness.signal.is_connected());
    assert!(harness.adapter.series_handles().is_empty());
    assert!(harness.adapter.legend_entries().is_empty());
}

#[test]
fn unmount_twice_is_safe() {
    let mut harness = harness();
    harness
        .adapter
        .mount(harness.backend.clone(), ChartConfig::new())
        .expect("mount");
    harness.adapter.unmount();
    harness.adapter.unmount();

    let calls = harness.backend.calls();
    assert_eq!(
        calls
            .iter()
            .filter(|call| matches!(call, BackendCall::Remove))
            .count(),
        1
    );
}

#[test]
fn events_after_unmount_do_not_touch_the_overlay() {
    let mut harness = harness();
    let config = ChartConfig::new()
        .with_line_series(vec![line_spec(&[(0.0, 1.0), (1.0, 2.0)]).with_legend("L")]);
    harness
        .adapter
        .mount(harness.backend.clone(), config)
        .expect("mount");
    let (series, _) = harness.backend.live_series()[0];

    harness.adapter.unmount();
    let rows_before = harness.overlay.borrow().rows.clone();

    let event = PointerEvent::at_time(0.5).with_price(series, PriceValue::Scalar(1.0));
    harness.backend.emit_crosshair_move(&event);
    assert_eq!(harness.overlay.borrow().rows, rows_before);
}

#[test]
fn series_realize_in_declaration_order() {
    let mut harness = harness();
    let candles = SeriesSpec::new(vec![
        SeriesPoint::ohlc(0.0, 1.0, 2.0, 0.5, 1.5),
        SeriesPoint::ohlc(1.0, 1.5, 2.5, 1.0, 2.0),
    ]);
    let config = ChartConfig::new()
        .with_histogram_series(vec![line_spec(&[(0.0, 1.0), (1.0, 2.0)])])
        .with_candlestick_series(vec![candles])
        .with_line_series(vec![line_spec(&[(0.0, 3.0), (1.0, 4.0)])]);
    harness
        .adapter
        .mount(harness.backend.clone(), config)
        .expect("mount");

    let kinds: Vec<_> = harness
        .backend
        .live_series()
        .iter()
        .map(|(_, kind)| *kind)
        .collect();
    assert_eq!(
        kinds,
        vec![
            chart_sync::config::SeriesKind::Candlestick,
            chart_sync::config::SeriesKind::Line,
            chart_sync::config::SeriesKind::Histogram,
        ]
    );
}

#[test]
fn failed_rebuild_leaves_no_stale_handles_behind() {
    let mut harness = harness();
    harness
        .backend
        .reject_kind(chart_sync::config::SeriesKind::Histogram);

    let broken = ChartConfig::new()
        .with_line_series(vec![line_spec(&[(0.0, 1.0), (1.0, 2.0)])])
        .with_histogram_series(vec![line_spec(&[(0.0, 5.0), (1.0, 6.0)])]);
    assert!(harness.adapter.mount(harness.backend.clone(), broken).is_err());

    // Recovering with a valid configuration must not duplicate the series
    // realized before the failure.
    let fixed = ChartConfig::new().with_line_series(vec![line_spec(&[(0.0, 1.0), (1.0, 2.0)])]);
    harness.adapter.update(fixed).expect("recovery update");

    let live: Vec<_> = harness
        .backend
        .live_series()
        .iter()
        .map(|(id, _)| *id)
        .collect();
    assert_eq!(live.len(), 1);
    assert_eq!(harness.adapter.series_handles(), live.as_slice());
}

#[test]
fn remounting_tears_down_the_previous_instance() {
    let mut harness = harness();
    harness
        .adapter
        .mount(harness.backend.clone(), ChartConfig::new())
        .expect("mount");

    let replacement = RecordingBackend::new();
    harness
        .adapter
        .mount(replacement.clone(), ChartConfig::new())
        .expect("remount");

    assert!(harness.backend.is_removed());
    assert!(!replacement.is_removed());
    assert!(harness.adapter.is_mounted());
}
