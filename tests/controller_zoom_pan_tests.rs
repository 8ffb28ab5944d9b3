use candlechart_rs::ChartError;
use candlechart_rs::core::{
    Bar, MIN_VISIBLE_BARS, ViewportState, apply_resize, apply_zoom_pan,
};

fn hourly_bars(count: usize) -> Vec<Bar> {
    let newest_ms: i64 = 1_672_531_200_000;
    (0..count)
        .map(|i| {
            let base = 50.0 + (i % 11) as f64;
            Bar::new(
                base,
                base + 3.0,
                base - 3.0,
                base - 1.0,
                newest_ms - i as i64 * 3_600_000,
            )
            .expect("valid bar")
        })
        .collect()
}

fn viewport(count: usize) -> ViewportState {
    ViewportState::new(hourly_bars(count), 800.0, 600.0).expect("viewport init")
}

#[test]
fn zoom_in_halves_visible_count() {
    // Scenario: 200 bars at 50 visible, factor 2.0 -> 25 visible.
    let state = viewport(200);
    let state = apply_zoom_pan(&state, 80.0 / 50.0, 0.0).expect("zoom to 50");
    assert_eq!(state.visible_count(), 50);

    let state = apply_zoom_pan(&state, 2.0, 0.0).expect("zoom to 25");
    assert_eq!(state.visible_count(), 25);
}

#[test]
fn zoom_out_grows_visible_count_up_to_bar_count() {
    let state = viewport(120);
    let state = apply_zoom_pan(&state, 0.5, 0.0).expect("zoom out");
    assert_eq!(state.visible_count(), 120);

    // Already at the cap, zooming further out is a no-op.
    let state = apply_zoom_pan(&state, 0.1, 0.0).expect("zoom out at cap");
    assert_eq!(state.visible_count(), 120);
}

#[test]
fn zoom_in_never_drops_below_minimum() {
    let state = viewport(400);
    let state = apply_zoom_pan(&state, 1_000.0, 0.0).expect("deep zoom in");
    assert_eq!(state.visible_count(), MIN_VISIBLE_BARS);
}

#[test]
fn pan_clamps_to_scrollable_range() {
    let state = viewport(200);

    let panned = apply_zoom_pan(&state, 1.0, -10_000.0).expect("pan left of origin");
    assert!((panned.scroll_offset_px() - 0.0).abs() <= f64::EPSILON);

    let panned = apply_zoom_pan(&state, 1.0, 1.0e9).expect("pan past history");
    assert!((panned.scroll_offset_px() - panned.max_scroll_px()).abs() <= 1e-9);
}

#[test]
fn zoom_and_pan_apply_as_one_atomic_transition() {
    // Zooming out widens the window, which shrinks the scrollable range.
    // The pan clamp must already use the new pitch.
    let state = viewport(100);
    let state = apply_zoom_pan(&state, 80.0 / 50.0, 0.0).expect("zoom to 50");
    let state = apply_zoom_pan(&state, 1.0, 1.0e9).expect("scroll to the end");
    assert!(state.scroll_offset_px() > 0.0);

    let widened = apply_zoom_pan(&state, 0.5, 0.0).expect("zoom out to full history");
    assert_eq!(widened.visible_count(), 100);
    assert!(widened.scroll_offset_px() <= widened.max_scroll_px());
    assert!((widened.max_scroll_px() - 0.0).abs() <= f64::EPSILON);
}

#[test]
fn non_positive_zoom_factor_is_rejected() {
    let state = viewport(100);

    for factor in [0.0, -1.0, f64::NAN, f64::NEG_INFINITY] {
        let err = apply_zoom_pan(&state, factor, 0.0).expect_err("factor must fail");
        assert!(matches!(err, ChartError::InvalidGesture { .. }));
    }
}

#[test]
fn non_finite_pan_delta_is_rejected() {
    let state = viewport(100);
    let err = apply_zoom_pan(&state, 1.0, f64::INFINITY).expect_err("pan must fail");
    assert!(matches!(err, ChartError::InvalidData(_)));
}

#[test]
fn resize_updates_size_and_reclamps_scroll() {
    let state = viewport(200);
    let state = apply_zoom_pan(&state, 1.0, 1.0e9).expect("scroll to the end");
    let max_before = state.max_scroll_px();
    assert!(state.scroll_offset_px() > 0.0);

    // Wider component -> shorter scrollable range at the same bar count.
    let resized = apply_resize(&state, 1_600.0, 900.0).expect("resize");
    assert!((resized.width_px() - 1_600.0).abs() <= f64::EPSILON);
    assert!((resized.height_px() - 900.0).abs() <= f64::EPSILON);
    assert!(resized.max_scroll_px() < max_before);
    assert!(resized.scroll_offset_px() <= resized.max_scroll_px());
}

#[test]
fn resize_rejects_degenerate_dimensions() {
    let state = viewport(100);
    let err = apply_resize(&state, -5.0, 600.0).expect_err("negative width must fail");
    assert!(matches!(err, ChartError::InvalidViewport { .. }));
}

#[test]
fn failed_transition_leaves_prior_state_usable() {
    let state = viewport(100);
    let before = state.clone();

    let _ = apply_zoom_pan(&state, 0.0, 0.0).expect_err("invalid gesture");
    assert_eq!(state, before);
}
