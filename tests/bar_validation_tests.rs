use candlechart_rs::ChartError;
use candlechart_rs::core::{Bar, Timeframe};
use chrono::{TimeZone, Utc};
use rust_decimal::Decimal;

const TS: i64 = 1_672_531_200_000; // 2023-01-01T00:00:00Z

#[test]
fn valid_bar_constructs() {
    let bar = Bar::new(100.0, 105.0, 95.0, 102.0, TS).expect("valid bar");
    assert!(bar.is_bullish());
    assert_eq!(bar.timestamp_ms, TS);
}

#[test]
fn non_finite_prices_are_rejected() {
    for bad in [f64::NAN, f64::INFINITY, f64::NEG_INFINITY] {
        let err = Bar::new(bad, 105.0, 95.0, 102.0, TS).expect_err("must fail");
        assert!(matches!(err, ChartError::InvalidData(_)));
    }
}

#[test]
fn inverted_low_high_is_rejected() {
    let err = Bar::new(100.0, 95.0, 105.0, 102.0, TS).expect_err("must fail");
    assert!(matches!(err, ChartError::InvalidData(_)));
}

#[test]
fn open_close_outside_envelope_is_rejected() {
    let err = Bar::new(110.0, 105.0, 95.0, 102.0, TS).expect_err("open above high");
    assert!(matches!(err, ChartError::InvalidData(_)));

    let err = Bar::new(100.0, 105.0, 95.0, 90.0, TS).expect_err("close below low");
    assert!(matches!(err, ChartError::InvalidData(_)));
}

#[test]
fn open_close_tie_is_bullish() {
    let bar = Bar::new(100.0, 105.0, 95.0, 100.0, TS).expect("valid bar");
    assert!(bar.is_bullish());

    let bearish = Bar::new(100.0, 105.0, 95.0, 99.0, TS).expect("valid bar");
    assert!(!bearish.is_bullish());
}

#[test]
fn decimal_time_constructor_matches_raw_constructor() {
    let time = Utc
        .with_ymd_and_hms(2023, 1, 1, 0, 0, 0)
        .single()
        .expect("valid instant");
    let bar = Bar::from_decimal_time(
        time,
        Decimal::new(10_000, 2), // 100.00
        Decimal::new(10_500, 2),
        Decimal::new(9_500, 2),
        Decimal::new(10_200, 2),
    )
    .expect("valid bar");

    assert_eq!(bar, Bar::new(100.0, 105.0, 95.0, 102.0, TS).expect("valid bar"));
    assert_eq!(bar.datetime(), time);
}

#[test]
fn timeframe_request_paths_match_upstream_routes() {
    assert_eq!(Timeframe::M5.request_path(), "5/minute");
    assert_eq!(Timeframe::M15.request_path(), "15/minute");
    assert_eq!(Timeframe::M30.request_path(), "30/minute");
    assert_eq!(Timeframe::H1.request_path(), "1/hour");
}

#[test]
fn timeframe_display_names_are_compact() {
    let names: Vec<String> = Timeframe::ALL.iter().map(|tf| tf.to_string()).collect();
    assert_eq!(names, ["5m", "15m", "30m", "1h"]);
    assert_eq!(Timeframe::default(), Timeframe::H1);
}
