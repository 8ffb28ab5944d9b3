//! Engine orchestration: screen status, serialized event intake and the
//! renderer seam.
//!
//! Gesture and resize events are queued and drained in FIFO order, each
//! transition computed from the single authoritative current snapshot. That
//! rules out two transitions racing against the same stale base state and
//! makes event sequences deterministically replayable in tests.

use std::collections::VecDeque;

use tracing::{debug, warn};

use crate::core::controller::{apply_resize, apply_zoom_pan};
use crate::core::types::{Bar, Timeframe};
use crate::core::viewport::{ViewportSnapshot, ViewportState};
use crate::error::{ChartError, ChartResult};
use crate::render::{RenderFrame, Renderer, render_chart};

/// Initial engine parameters supplied by the host layout.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ChartEngineConfig {
    pub width_px: f64,
    pub height_px: f64,
    pub timeframe: Timeframe,
}

impl ChartEngineConfig {
    #[must_use]
    pub fn new(width_px: f64, height_px: f64) -> Self {
        Self {
            width_px,
            height_px,
            timeframe: Timeframe::default(),
        }
    }

    #[must_use]
    pub fn with_timeframe(mut self, timeframe: Timeframe) -> Self {
        self.timeframe = timeframe;
        self
    }
}

/// Closed screen status consumed by the host UI.
///
/// The viewport core only ever operates on `Content`; every other variant
/// renders nothing.
#[derive(Debug, Clone, PartialEq)]
pub enum ScreenState {
    Initial,
    Loading,
    Content {
        viewport: ViewportState,
        timeframe: Timeframe,
    },
    Failure {
        message: String,
    },
}

/// One entry of the serialized input queue.
#[derive(Debug, Clone, PartialEq)]
pub enum ChartEvent {
    /// Combined pinch/drag step from the host gesture recognizer.
    ZoomPan { zoom_factor: f64, pan_delta_px: f64 },
    /// Component size change from the host layout system.
    Resize { width_px: f64, height_px: f64 },
    /// Explicit user timeframe selection; triggers a full reload upstream.
    TimeframeSelected(Timeframe),
    /// Fully materialized, newest-first bar sequence from the data collaborator.
    BarsLoaded {
        bars: Vec<Bar>,
        timeframe: Timeframe,
    },
    /// Terminal load failure reported by the data collaborator.
    LoadFailed { message: String },
}

/// Seam for the out-of-scope data collaborator.
///
/// The engine never fetches; it receives either a fully resolved sequence or
/// a failure. Zero bars behave exactly like [`ChartError::EmptyBarSequence`].
pub trait BarProvider {
    fn load_bars(&self, symbol: &str, timeframe: Timeframe) -> ChartResult<Vec<Bar>>;
}

/// Single-threaded, frame-driven chart engine.
///
/// Owns the authoritative [`ScreenState`], the FIFO event queue and the
/// rendering backend. Rendering is a pure read of the current snapshot, so a
/// host may redraw at any point between event batches.
#[derive(Debug)]
pub struct ChartEngine<R: Renderer> {
    renderer: R,
    screen: ScreenState,
    queue: VecDeque<ChartEvent>,
    width_px: f64,
    height_px: f64,
    timeframe: Timeframe,
}

impl<R: Renderer> ChartEngine<R> {
    pub fn new(renderer: R, config: ChartEngineConfig) -> ChartResult<Self> {
        if !config.width_px.is_finite()
            || !config.height_px.is_finite()
            || config.width_px <= 0.0
            || config.height_px <= 0.0
        {
            return Err(ChartError::InvalidViewport {
                width_px: config.width_px,
                height_px: config.height_px,
            });
        }

        Ok(Self {
            renderer,
            screen: ScreenState::Initial,
            queue: VecDeque::new(),
            width_px: config.width_px,
            height_px: config.height_px,
            timeframe: config.timeframe,
        })
    }

    #[must_use]
    pub fn screen_state(&self) -> &ScreenState {
        &self.screen
    }

    #[must_use]
    pub fn selected_timeframe(&self) -> Timeframe {
        self.timeframe
    }

    /// Enqueues one event without processing it.
    pub fn push_event(&mut self, event: ChartEvent) {
        self.queue.push_back(event);
    }

    /// Drains the queue in arrival order and returns the number of events
    /// consumed.
    ///
    /// Invalid gestures and invalid resize payloads are logged and dropped;
    /// the prior state is kept. No error escapes to the host.
    pub fn process_events(&mut self) -> usize {
        let mut processed = 0;
        while let Some(event) = self.queue.pop_front() {
            self.apply_event(event);
            processed += 1;
        }
        processed
    }

    fn apply_event(&mut self, event: ChartEvent) {
        match event {
            ChartEvent::ZoomPan {
                zoom_factor,
                pan_delta_px,
            } => {
                let ScreenState::Content { viewport, .. } = &self.screen else {
                    debug!(zoom_factor, pan_delta_px, "ignoring gesture outside content state");
                    return;
                };
                match apply_zoom_pan(viewport, zoom_factor, pan_delta_px) {
                    Ok(next) => self.replace_viewport(next),
                    Err(err) => warn!(error = %err, "dropping invalid gesture event"),
                }
            }
            ChartEvent::Resize {
                width_px,
                height_px,
            } => {
                if !width_px.is_finite()
                    || !height_px.is_finite()
                    || width_px <= 0.0
                    || height_px <= 0.0
                {
                    warn!(width_px, height_px, "dropping invalid resize event");
                    return;
                }
                self.width_px = width_px;
                self.height_px = height_px;
                if let ScreenState::Content { viewport, .. } = &self.screen {
                    match apply_resize(viewport, width_px, height_px) {
                        Ok(next) => self.replace_viewport(next),
                        Err(err) => warn!(error = %err, "dropping resize event"),
                    }
                }
            }
            ChartEvent::TimeframeSelected(timeframe) => {
                debug!(%timeframe, "timeframe selected, awaiting reload");
                self.timeframe = timeframe;
                self.screen = ScreenState::Loading;
            }
            ChartEvent::BarsLoaded { bars, timeframe } => {
                self.timeframe = timeframe;
                if bars.is_empty() {
                    // Same treatment as an upstream "no bars available".
                    warn!(%timeframe, "loaded an empty bar sequence");
                    self.screen = ScreenState::Failure {
                        message: ChartError::EmptyBarSequence.to_string(),
                    };
                    return;
                }
                match ViewportState::new(bars, self.width_px, self.height_px) {
                    Ok(viewport) => {
                        debug!(
                            %timeframe,
                            bar_count = viewport.bar_count(),
                            "entering content state"
                        );
                        self.screen = ScreenState::Content {
                            viewport,
                            timeframe,
                        };
                    }
                    Err(err) => {
                        warn!(error = %err, "failed to build viewport from loaded bars");
                        self.screen = ScreenState::Failure {
                            message: err.to_string(),
                        };
                    }
                }
            }
            ChartEvent::LoadFailed { message } => {
                warn!(message = %message, "bar load failed");
                self.screen = ScreenState::Failure { message };
            }
        }
    }

    fn replace_viewport(&mut self, next: ViewportState) {
        if let ScreenState::Content { viewport, .. } = &mut self.screen {
            *viewport = next;
        }
    }

    /// Synchronously drives one load cycle through a [`BarProvider`].
    ///
    /// Sets `Loading`, converts the provider outcome into a queue event and
    /// processes the queue. Hosts with their own async fetch pipeline can
    /// skip this and push [`ChartEvent::BarsLoaded`] directly.
    pub fn load_bars_with(&mut self, provider: &dyn BarProvider, symbol: &str) {
        self.screen = ScreenState::Loading;
        let timeframe = self.timeframe;
        let event = match provider.load_bars(symbol, timeframe) {
            Ok(bars) => ChartEvent::BarsLoaded { bars, timeframe },
            Err(err) => ChartEvent::LoadFailed {
                message: err.to_string(),
            },
        };
        self.push_event(event);
        self.process_events();
    }

    /// Projects the current snapshot into a frame.
    ///
    /// Returns `None` outside the content state: there is nothing to draw.
    pub fn render_frame(&self) -> ChartResult<Option<RenderFrame>> {
        match &self.screen {
            ScreenState::Content {
                viewport,
                timeframe,
            } => Ok(Some(render_chart(viewport, *timeframe)?)),
            _ => Ok(None),
        }
    }

    /// Renders the current snapshot through the backend.
    ///
    /// Returns `false` when the screen state has nothing to draw.
    pub fn draw(&mut self) -> ChartResult<bool> {
        let Some(frame) = self.render_frame()? else {
            return Ok(false);
        };
        self.renderer.render(&frame)?;
        Ok(true)
    }

    /// Captures restorable viewport parameters, when content is present.
    #[must_use]
    pub fn viewport_snapshot(&self) -> Option<ViewportSnapshot> {
        match &self.screen {
            ScreenState::Content { viewport, .. } => Some(viewport.snapshot()),
            _ => None,
        }
    }

    /// Re-enters the content state from saved parameters plus a re-supplied
    /// bar sequence, re-clamping everything against the current data.
    pub fn restore_viewport(
        &mut self,
        bars: Vec<Bar>,
        snapshot: ViewportSnapshot,
        timeframe: Timeframe,
    ) -> ChartResult<()> {
        let viewport = ViewportState::restore(bars, snapshot)?;
        self.width_px = viewport.width_px();
        self.height_px = viewport.height_px();
        self.timeframe = timeframe;
        self.screen = ScreenState::Content {
            viewport,
            timeframe,
        };
        Ok(())
    }
}
