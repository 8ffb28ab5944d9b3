use serde::{Deserialize, Serialize};

use crate::core::types::Bar;
use crate::error::{ChartError, ChartResult};

/// Price axis mapping for the currently visible bars.
///
/// The domain is the low/high envelope of the visible slice only, recomputed
/// whenever the slice changes. That is what gives the chart its
/// auto-rescaling vertical zoom: scrolling into a calm region stretches it to
/// fill the full height.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PriceScale {
    min_cost: f64,
    max_cost: f64,
    px_per_unit: f64,
    height_px: f64,
}

impl PriceScale {
    /// Computes the scale from a non-empty visible slice.
    ///
    /// A window where every bar has the same price (`max_cost == min_cost`)
    /// is degenerate but must not fail: `px_per_unit` becomes `0.0` and all
    /// price mapping collapses to mid-height, so flat windows render as a
    /// single horizontal line instead of dividing by zero.
    pub fn compute(visible: &[Bar], height_px: f64) -> ChartResult<Self> {
        if visible.is_empty() {
            return Err(ChartError::EmptyBarSequence);
        }
        if !height_px.is_finite() || height_px <= 0.0 {
            return Err(ChartError::InvalidData(
                "price scale height must be finite and > 0".to_owned(),
            ));
        }

        let mut min_cost = f64::INFINITY;
        let mut max_cost = f64::NEG_INFINITY;
        for bar in visible {
            min_cost = min_cost.min(bar.low);
            max_cost = max_cost.max(bar.high);
        }

        let px_per_unit = if max_cost > min_cost {
            height_px / (max_cost - min_cost)
        } else {
            0.0
        };

        Ok(Self {
            min_cost,
            max_cost,
            px_per_unit,
            height_px,
        })
    }

    #[must_use]
    pub fn min_cost(self) -> f64 {
        self.min_cost
    }

    #[must_use]
    pub fn max_cost(self) -> f64 {
        self.max_cost
    }

    #[must_use]
    pub fn px_per_unit(self) -> f64 {
        self.px_per_unit
    }

    #[must_use]
    pub fn height_px(self) -> f64 {
        self.height_px
    }

    /// Returns `true` when the visible window has zero price range.
    #[must_use]
    pub fn is_degenerate(self) -> bool {
        self.px_per_unit == 0.0
    }

    /// Maps a price to a vertical pixel coordinate.
    ///
    /// Price increases upward while pixel y increases downward, so
    /// `price_to_y(min_cost) == height_px` and `price_to_y(max_cost) == 0`.
    /// Degenerate scales map every price to mid-height.
    #[must_use]
    pub fn price_to_y(self, price: f64) -> f64 {
        if self.is_degenerate() {
            return self.height_px / 2.0;
        }
        self.height_px - self.px_per_unit * (price - self.min_cost)
    }

    /// Maps a vertical pixel coordinate back to a price.
    ///
    /// Degenerate scales report the (single) visible price for any y.
    #[must_use]
    pub fn y_to_price(self, y: f64) -> f64 {
        if self.is_degenerate() {
            return self.min_cost;
        }
        self.min_cost + (self.height_px - y) / self.px_per_unit
    }
}
