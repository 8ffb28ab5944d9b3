use serde::{Deserialize, Serialize};

use crate::error::{ChartError, ChartResult};

/// One backend-agnostic draw command in pixel space.
///
/// The variant order inside a frame is the paint order; backends execute the
/// sequence front to back without reordering.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum DrawPrimitive {
    /// Vertical low/high wick segment at a bar center.
    WickLine { x: f64, y0: f64, y1: f64 },
    /// Candle body spanning open/close.
    ///
    /// `x` is the bar center; the backend derives the body width from the
    /// frame's bar pitch (half a pitch, centered). `bullish` selects the
    /// fill color; an `open == close` tie is bullish.
    BodyRect {
        x: f64,
        y_top: f64,
        height: f64,
        bullish: bool,
    },
    /// Vertical time-axis gridline.
    GridLine { x: f64, dashed: bool },
    /// Text placement, horizontally centered on `x`.
    Label { x: f64, y: f64, text: String },
    /// Horizontal reference line for the min/max/last price.
    PriceBoundaryLine { y: f64, text: String },
}

impl DrawPrimitive {
    pub fn validate(&self) -> ChartResult<()> {
        match self {
            Self::WickLine { x, y0, y1 } => {
                if !x.is_finite() || !y0.is_finite() || !y1.is_finite() {
                    return Err(ChartError::InvalidData(
                        "wick coordinates must be finite".to_owned(),
                    ));
                }
            }
            Self::BodyRect {
                x, y_top, height, ..
            } => {
                if !x.is_finite() || !y_top.is_finite() {
                    return Err(ChartError::InvalidData(
                        "body coordinates must be finite".to_owned(),
                    ));
                }
                // A doji body legitimately collapses to zero height.
                if !height.is_finite() || *height < 0.0 {
                    return Err(ChartError::InvalidData(
                        "body height must be finite and >= 0".to_owned(),
                    ));
                }
            }
            Self::GridLine { x, .. } => {
                if !x.is_finite() {
                    return Err(ChartError::InvalidData(
                        "gridline x must be finite".to_owned(),
                    ));
                }
            }
            Self::Label { x, y, text } => {
                if text.is_empty() {
                    return Err(ChartError::InvalidData(
                        "label text must not be empty".to_owned(),
                    ));
                }
                if !x.is_finite() || !y.is_finite() {
                    return Err(ChartError::InvalidData(
                        "label coordinates must be finite".to_owned(),
                    ));
                }
            }
            Self::PriceBoundaryLine { y, text } => {
                if text.is_empty() {
                    return Err(ChartError::InvalidData(
                        "price boundary text must not be empty".to_owned(),
                    ));
                }
                if !y.is_finite() {
                    return Err(ChartError::InvalidData(
                        "price boundary y must be finite".to_owned(),
                    ));
                }
            }
        }
        Ok(())
    }
}
