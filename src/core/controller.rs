//! Pure viewport state transitions.
//!
//! Each function maps an old [`ViewportState`] plus one input event to a new
//! state, re-establishing every clamping invariant atomically. Callers that
//! receive an error keep the prior state untouched.

use tracing::debug;

use crate::core::viewport::{MIN_VISIBLE_BARS, ViewportState};
use crate::error::{ChartError, ChartResult};

/// Applies one combined zoom/pan gesture step.
///
/// `zoom_factor > 1` shows fewer bars (zoom in), `zoom_factor < 1` shows more
/// (zoom out). Zoom and pan are applied as one transition: the pan clamp uses
/// the bar pitch derived from the new visible count, never the old one.
///
/// `zoom_factor` that is non-finite or `<= 0` is rejected with
/// [`ChartError::InvalidGesture`]; clamping to an epsilon was deliberately not
/// chosen so malformed recognizer output stays visible to the host.
pub fn apply_zoom_pan(
    state: &ViewportState,
    zoom_factor: f64,
    pan_delta_px: f64,
) -> ChartResult<ViewportState> {
    if !zoom_factor.is_finite() || zoom_factor <= 0.0 {
        return Err(ChartError::InvalidGesture { zoom_factor });
    }
    if !pan_delta_px.is_finite() {
        return Err(ChartError::InvalidData(
            "pan delta must be finite".to_owned(),
        ));
    }

    let requested_count = (state.visible_count() as f64 / zoom_factor)
        .round()
        .clamp(MIN_VISIBLE_BARS.min(state.bar_count()) as f64, state.bar_count() as f64)
        as usize;
    let requested_scroll = state.scroll_offset_px() + pan_delta_px;

    let next = ViewportState::clamped(
        state.bars_shared(),
        requested_count,
        requested_scroll,
        state.width_px(),
        state.height_px(),
    );

    debug!(
        zoom_factor,
        pan_delta_px,
        visible_count = next.visible_count(),
        scroll_offset_px = next.scroll_offset_px(),
        "applied zoom/pan transition"
    );

    Ok(next)
}

/// Applies a component resize.
///
/// Only the size fields change, but the scroll offset is re-clamped against
/// the new width: shrinking the component can invalidate a previously valid
/// offset.
pub fn apply_resize(
    state: &ViewportState,
    width_px: f64,
    height_px: f64,
) -> ChartResult<ViewportState> {
    if !width_px.is_finite() || !height_px.is_finite() || width_px <= 0.0 || height_px <= 0.0 {
        return Err(ChartError::InvalidViewport {
            width_px,
            height_px,
        });
    }

    let next = ViewportState::clamped(
        state.bars_shared(),
        state.visible_count(),
        state.scroll_offset_px(),
        width_px,
        height_px,
    );

    debug!(
        width_px,
        height_px,
        scroll_offset_px = next.scroll_offset_px(),
        "applied resize transition"
    );

    Ok(next)
}
