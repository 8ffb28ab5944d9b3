use thiserror::Error;

pub type ChartResult<T> = Result<T, ChartError>;

#[derive(Debug, Error)]
pub enum ChartError {
    #[error("empty bar sequence")]
    EmptyBarSequence,

    #[error("invalid gesture: zoom factor {zoom_factor} must be finite and > 0")]
    InvalidGesture { zoom_factor: f64 },

    #[error("invalid viewport size: width={width_px}, height={height_px}")]
    InvalidViewport { width_px: f64, height_px: f64 },

    #[error("invalid data: {0}")]
    InvalidData(String),
}
