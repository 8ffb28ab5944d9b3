pub mod controller;
pub mod price_scale;
pub mod primitives;
pub mod time_axis;
pub mod types;
pub mod viewport;

pub use controller::{apply_resize, apply_zoom_pan};
pub use price_scale::PriceScale;
pub use time_axis::{label_for, should_delimit};
pub use types::{Bar, Timeframe};
pub use viewport::{DEFAULT_VISIBLE_BARS, MIN_VISIBLE_BARS, ViewportSnapshot, ViewportState};
