mod frame;
mod null_renderer;
mod primitives;

pub use frame::RenderFrame;
pub use null_renderer::NullRenderer;
pub use primitives::DrawPrimitive;

#[cfg(feature = "parallel-projection")]
use rayon::prelude::*;

use crate::core::types::{Bar, Timeframe};
use crate::core::viewport::ViewportState;
use crate::core::{PriceScale, label_for, should_delimit};
use crate::error::ChartResult;

/// Vertical inset of delimiter labels from the bottom edge.
const DELIMITER_LABEL_INSET_PX: f64 = 20.0;

/// Contract implemented by any rendering backend.
///
/// Backends receive a fully materialized, deterministic [`RenderFrame`] so
/// drawing code remains isolated from viewport and gesture logic.
pub trait Renderer {
    fn render(&mut self, frame: &RenderFrame) -> ChartResult<()>;
}

/// Projects one viewport snapshot into an ordered primitive sequence.
///
/// Bars render right to left: the most recent visible bar sits at the right
/// edge and higher slice indices march toward the left edge. Per bar the
/// frame receives a wick, a body and (when the delimiter rules fire) a
/// dashed gridline plus its label; three price boundary lines for min, max
/// and last traded price close the sequence.
///
/// An empty visible slice yields an empty frame instead of an error, so a
/// draw cycle racing a reload never fails.
pub fn render_chart(state: &ViewportState, timeframe: Timeframe) -> ChartResult<RenderFrame> {
    let mut frame = RenderFrame::new(state.width_px(), state.height_px(), state.bar_pitch_px());

    let visible = state.visible_slice();
    if visible.is_empty() {
        return Ok(frame);
    }

    let scale = PriceScale::compute(visible, state.height_px())?;
    let first = state.first_visible_index();
    let bars = state.bars();

    let per_bar = project_visible_bars(state, visible, bars, first, scale, timeframe);
    for mut primitives in per_bar {
        frame.primitives.append(&mut primitives);
    }

    let last_price = visible[0].close;
    for (price, text) in [
        (scale.min_cost(), format_price(scale.min_cost())),
        (scale.max_cost(), format_price(scale.max_cost())),
        (last_price, format_price(last_price)),
    ] {
        frame.push(DrawPrimitive::PriceBoundaryLine {
            y: scale.price_to_y(price),
            text,
        });
    }

    Ok(frame)
}

#[cfg(feature = "parallel-projection")]
fn project_visible_bars(
    state: &ViewportState,
    visible: &[Bar],
    bars: &[Bar],
    first: usize,
    scale: PriceScale,
    timeframe: Timeframe,
) -> Vec<Vec<DrawPrimitive>> {
    visible
        .par_iter()
        .enumerate()
        .map(|(index, bar)| {
            bar_primitives(
                state,
                bar,
                index,
                bars.get(first + index + 1),
                scale,
                timeframe,
            )
        })
        .collect()
}

#[cfg(not(feature = "parallel-projection"))]
fn project_visible_bars(
    state: &ViewportState,
    visible: &[Bar],
    bars: &[Bar],
    first: usize,
    scale: PriceScale,
    timeframe: Timeframe,
) -> Vec<Vec<DrawPrimitive>> {
    visible
        .iter()
        .enumerate()
        .map(|(index, bar)| {
            bar_primitives(
                state,
                bar,
                index,
                bars.get(first + index + 1),
                scale,
                timeframe,
            )
        })
        .collect()
}

fn bar_primitives(
    state: &ViewportState,
    bar: &Bar,
    index: usize,
    next_bar: Option<&Bar>,
    scale: PriceScale,
    timeframe: Timeframe,
) -> Vec<DrawPrimitive> {
    let x = state.width_px() - index as f64 * state.bar_pitch_px();

    let mut out = Vec::with_capacity(4);
    out.push(DrawPrimitive::WickLine {
        x,
        y0: scale.price_to_y(bar.low),
        y1: scale.price_to_y(bar.high),
    });
    out.push(DrawPrimitive::BodyRect {
        x,
        y_top: scale.price_to_y(bar.open.max(bar.close)),
        height: scale.px_per_unit() * (bar.open - bar.close).abs(),
        bullish: bar.is_bullish(),
    });

    if should_delimit(timeframe, bar, next_bar) {
        out.push(DrawPrimitive::GridLine { x, dashed: true });
        out.push(DrawPrimitive::Label {
            x,
            y: state.height_px() - DELIMITER_LABEL_INSET_PX,
            text: label_for(timeframe, bar),
        });
    }

    out
}

fn format_price(price: f64) -> String {
    format!("{price:.2}")
}
