use chart_sync::config::{SeriesKind, SeriesSpec};
use chart_sync::core::SeriesPoint;
use chart_sync::error::ChartError;

#[test]
fn scalar_and_ohlc_samples_use_their_native_json_shapes() {
    let spec = SeriesSpec::new(vec![
        SeriesPoint::scalar(1.0, 10.0),
        SeriesPoint::scalar(2.0, 11.5),
    ])
    .with_legend("AAPL")
    .with_linear_interpolation(0.5);

    let json = spec.to_json_pretty().expect("serialize");
    assert!(json.contains("\"value\": 11.5"));
    assert!(!json.contains("Scalar"), "samples serialize untagged");

    let parsed = SeriesSpec::from_json_str(&json).expect("parse");
    assert_eq!(parsed, spec);
}

#[test]
fn ohlc_samples_parse_from_candle_records() {
    let json = r#"{
  "data": [
    { "time": 1.0, "open": 10.0, "high": 12.0, "low": 9.0, "close": 11.0 }
  ]
}"#;
    let spec = SeriesSpec::from_json_str(json).expect("parse");
    assert_eq!(
        spec.data,
        vec![SeriesPoint::ohlc(1.0, 10.0, 12.0, 9.0, 11.0)]
    );
    assert!(spec.data[0].is_ohlc());
}

#[test]
fn series_kind_parses_known_tags_and_rejects_the_rest() {
    assert_eq!("candlestick".parse::<SeriesKind>().expect("parse"), SeriesKind::Candlestick);
    assert_eq!("histogram".parse::<SeriesKind>().expect("parse"), SeriesKind::Histogram);
    assert_eq!(SeriesKind::Area.to_string(), "area");

    let error = "spline".parse::<SeriesKind>().expect_err("unknown tag");
    match error {
        ChartError::UnsupportedSeriesType { kind } => assert_eq!(kind, "spline"),
        other => panic!("unexpected error: {other}"),
    }
}
