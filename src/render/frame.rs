use crate::error::{ChartError, ChartResult};
use crate::render::DrawPrimitive;

/// Backend-agnostic scene for one chart draw pass.
///
/// `bar_pitch_px` accompanies the primitives so backends can derive candle
/// body widths without re-deriving viewport math.
#[derive(Debug, Clone, PartialEq)]
pub struct RenderFrame {
    pub width_px: f64,
    pub height_px: f64,
    pub bar_pitch_px: f64,
    pub primitives: Vec<DrawPrimitive>,
}

impl RenderFrame {
    #[must_use]
    pub fn new(width_px: f64, height_px: f64, bar_pitch_px: f64) -> Self {
        Self {
            width_px,
            height_px,
            bar_pitch_px,
            primitives: Vec::new(),
        }
    }

    pub fn push(&mut self, primitive: DrawPrimitive) {
        self.primitives.push(primitive);
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.primitives.is_empty()
    }

    /// Number of label primitives (delimiter labels only, not boundary text).
    #[must_use]
    pub fn label_count(&self) -> usize {
        self.primitives
            .iter()
            .filter(|primitive| matches!(primitive, DrawPrimitive::Label { .. }))
            .count()
    }

    pub fn validate(&self) -> ChartResult<()> {
        if !self.width_px.is_finite()
            || !self.height_px.is_finite()
            || self.width_px <= 0.0
            || self.height_px <= 0.0
        {
            return Err(ChartError::InvalidViewport {
                width_px: self.width_px,
                height_px: self.height_px,
            });
        }
        if !self.bar_pitch_px.is_finite() || self.bar_pitch_px <= 0.0 {
            return Err(ChartError::InvalidData(
                "frame bar pitch must be finite and > 0".to_owned(),
            ));
        }

        for primitive in &self.primitives {
            primitive.validate()?;
        }

        Ok(())
    }
}
