use std::sync::Arc;

use serde::{Deserialize, Serialize};

use crate::core::types::Bar;
use crate::error::{ChartError, ChartResult};

/// Visible bar count used when a fresh viewport is constructed.
pub const DEFAULT_VISIBLE_BARS: usize = 80;
/// Lower zoom limit: a viewport never shows fewer bars than this
/// (unless the whole sequence is shorter).
pub const MIN_VISIBLE_BARS: usize = 20;

/// Immutable snapshot of the pan/zoom window over one bar sequence.
///
/// The bar sequence is ordered newest first and shared read-only for the
/// state's lifetime. Every gesture or resize produces a new value through
/// [`crate::core::controller`]; nothing here mutates in place.
#[derive(Debug, Clone, PartialEq)]
pub struct ViewportState {
    bars: Arc<[Bar]>,
    visible_count: usize,
    scroll_offset_px: f64,
    width_px: f64,
    height_px: f64,
}

/// Serializable viewport parameters for host-side save/restore.
///
/// The bar sequence is intentionally absent: a restore re-attaches bars
/// supplied by the data collaborator and re-clamps every parameter, so a
/// stale snapshot can never violate viewport invariants.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ViewportSnapshot {
    pub visible_count: usize,
    pub scroll_offset_px: f64,
    pub width_px: f64,
    pub height_px: f64,
}

impl ViewportSnapshot {
    /// Serializes the snapshot for host-side persistence.
    pub fn to_json(self) -> ChartResult<String> {
        serde_json::to_string(&self).map_err(|err| {
            ChartError::InvalidData(format!("snapshot serialization failed: {err}"))
        })
    }

    pub fn from_json(json: &str) -> ChartResult<Self> {
        serde_json::from_str(json).map_err(|err| {
            ChartError::InvalidData(format!("snapshot deserialization failed: {err}"))
        })
    }
}

impl ViewportState {
    /// Creates a viewport over a non-empty, newest-first bar sequence with
    /// the default visible count and zero scroll.
    pub fn new(bars: Vec<Bar>, width_px: f64, height_px: f64) -> ChartResult<Self> {
        validate_size(width_px, height_px)?;
        if bars.is_empty() {
            return Err(ChartError::EmptyBarSequence);
        }

        Ok(Self::clamped(
            bars.into(),
            DEFAULT_VISIBLE_BARS,
            0.0,
            width_px,
            height_px,
        ))
    }

    /// Re-attaches a bar sequence to previously saved viewport parameters.
    pub fn restore(bars: Vec<Bar>, snapshot: ViewportSnapshot) -> ChartResult<Self> {
        validate_size(snapshot.width_px, snapshot.height_px)?;
        if bars.is_empty() {
            return Err(ChartError::EmptyBarSequence);
        }
        if !snapshot.scroll_offset_px.is_finite() {
            return Err(ChartError::InvalidData(
                "snapshot scroll offset must be finite".to_owned(),
            ));
        }

        Ok(Self::clamped(
            bars.into(),
            snapshot.visible_count,
            snapshot.scroll_offset_px,
            snapshot.width_px,
            snapshot.height_px,
        ))
    }

    /// Builds a state with all invariants re-established in one step:
    /// the visible count is clamped first, then the scroll offset is clamped
    /// against the pitch derived from the clamped count.
    pub(crate) fn clamped(
        bars: Arc<[Bar]>,
        visible_count: usize,
        scroll_offset_px: f64,
        width_px: f64,
        height_px: f64,
    ) -> Self {
        let bar_count = bars.len();
        let visible_count = visible_count.clamp(MIN_VISIBLE_BARS.min(bar_count), bar_count);
        let pitch = width_px / visible_count as f64;
        let max_scroll = (pitch * bar_count as f64 - width_px).max(0.0);
        let scroll_offset_px = scroll_offset_px.clamp(0.0, max_scroll);

        Self {
            bars,
            visible_count,
            scroll_offset_px,
            width_px,
            height_px,
        }
    }

    #[must_use]
    pub fn bars(&self) -> &[Bar] {
        &self.bars
    }

    pub(crate) fn bars_shared(&self) -> Arc<[Bar]> {
        Arc::clone(&self.bars)
    }

    #[must_use]
    pub fn bar_count(&self) -> usize {
        self.bars.len()
    }

    #[must_use]
    pub fn visible_count(&self) -> usize {
        self.visible_count
    }

    #[must_use]
    pub fn scroll_offset_px(&self) -> f64 {
        self.scroll_offset_px
    }

    #[must_use]
    pub fn width_px(&self) -> f64 {
        self.width_px
    }

    #[must_use]
    pub fn height_px(&self) -> f64 {
        self.height_px
    }

    /// Horizontal pixel distance between adjacent bar centers.
    #[must_use]
    pub fn bar_pitch_px(&self) -> f64 {
        self.width_px / self.visible_count as f64
    }

    /// Upper scroll bound for the current zoom level and component width.
    #[must_use]
    pub fn max_scroll_px(&self) -> f64 {
        (self.bar_pitch_px() * self.bars.len() as f64 - self.width_px).max(0.0)
    }

    /// Index of the first (most recent) visible bar.
    #[must_use]
    pub fn first_visible_index(&self) -> usize {
        let passed_by = (self.scroll_offset_px / self.bar_pitch_px()).round().max(0.0) as usize;
        passed_by.min(self.bars.len() - 1)
    }

    /// Exclusive end index of the visible window.
    ///
    /// The window covers at most `visible_count` bars, so the slice can hold
    /// the entire sequence when the sequence is shorter than the window.
    #[must_use]
    pub fn visible_end_index(&self) -> usize {
        (self.first_visible_index() + self.visible_count).min(self.bars.len())
    }

    /// Bars inside the current window, newest first.
    ///
    /// Index ordering is normalized so adversarial scroll/zoom combinations
    /// can never produce a negative-length slice.
    #[must_use]
    pub fn visible_slice(&self) -> &[Bar] {
        let first = self.first_visible_index();
        let end = self.visible_end_index();
        &self.bars[first.min(end)..first.max(end)]
    }

    /// Captures the restorable viewport parameters.
    #[must_use]
    pub fn snapshot(&self) -> ViewportSnapshot {
        ViewportSnapshot {
            visible_count: self.visible_count,
            scroll_offset_px: self.scroll_offset_px,
            width_px: self.width_px,
            height_px: self.height_px,
        }
    }
}

fn validate_size(width_px: f64, height_px: f64) -> ChartResult<()> {
    if !width_px.is_finite() || !height_px.is_finite() || width_px <= 0.0 || height_px <= 0.0 {
        return Err(ChartError::InvalidViewport {
            width_px,
            height_px,
        });
    }
    Ok(())
}
