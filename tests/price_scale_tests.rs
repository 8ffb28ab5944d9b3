use approx::assert_abs_diff_eq;
use candlechart_rs::ChartError;
use candlechart_rs::core::{Bar, PriceScale};

fn bar(open: f64, high: f64, low: f64, close: f64) -> Bar {
    Bar::new(open, high, low, close, 1_672_531_200_000).expect("valid bar")
}

#[test]
fn domain_is_low_high_envelope_of_visible_slice() {
    let visible = vec![
        bar(100.0, 110.0, 95.0, 105.0),
        bar(105.0, 120.0, 101.0, 118.0),
        bar(118.0, 119.0, 90.0, 92.0),
    ];

    let scale = PriceScale::compute(&visible, 600.0).expect("scale");
    assert_abs_diff_eq!(scale.min_cost(), 90.0);
    assert_abs_diff_eq!(scale.max_cost(), 120.0);
    assert_abs_diff_eq!(scale.px_per_unit(), 600.0 / 30.0);
}

#[test]
fn extremes_map_to_chart_edges() {
    let visible = vec![bar(10.0, 40.0, 5.0, 30.0), bar(30.0, 55.0, 25.0, 50.0)];
    let scale = PriceScale::compute(&visible, 480.0).expect("scale");

    assert_abs_diff_eq!(scale.price_to_y(scale.min_cost()), 480.0, epsilon = 1e-9);
    assert_abs_diff_eq!(scale.price_to_y(scale.max_cost()), 0.0, epsilon = 1e-9);
}

#[test]
fn price_and_pixel_mapping_round_trips() {
    let visible = vec![bar(10.0, 40.0, 5.0, 30.0), bar(30.0, 55.0, 25.0, 50.0)];
    let scale = PriceScale::compute(&visible, 480.0).expect("scale");

    for price in [5.0, 17.5, 30.0, 55.0] {
        let y = scale.price_to_y(price);
        assert_abs_diff_eq!(scale.y_to_price(y), price, epsilon = 1e-9);
    }
}

#[test]
fn flat_window_maps_everything_to_mid_height() {
    // Scenario: every visible bar pinned at 100.
    let visible = vec![bar(100.0, 100.0, 100.0, 100.0); 5];
    let scale = PriceScale::compute(&visible, 600.0).expect("scale");

    assert!(scale.is_degenerate());
    assert_abs_diff_eq!(scale.px_per_unit(), 0.0);
    assert_abs_diff_eq!(scale.price_to_y(100.0), 300.0);
    assert_abs_diff_eq!(scale.price_to_y(42.0), 300.0);
    assert_abs_diff_eq!(scale.y_to_price(0.0), 100.0);
}

#[test]
fn empty_visible_slice_is_an_error() {
    let err = PriceScale::compute(&[], 600.0).expect_err("empty slice must fail");
    assert!(matches!(err, ChartError::EmptyBarSequence));
}

#[test]
fn invalid_height_is_rejected() {
    let visible = vec![bar(10.0, 40.0, 5.0, 30.0)];
    for height in [0.0, -10.0, f64::NAN] {
        let err = PriceScale::compute(&visible, height).expect_err("height must fail");
        assert!(matches!(err, ChartError::InvalidData(_)));
    }
}
