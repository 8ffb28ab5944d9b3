//! Timeframe-specific time-axis delimiter rules.
//!
//! Both functions are pure over `(timeframe, bar, next_bar)` decomposed in
//! the fixed UTC calendar, so the same inputs always yield the same gridline
//! decision and label text. `next_bar` is the chronologically older neighbor
//! (one index further back in the newest-first sequence).

use chrono::{Datelike, Timelike};

use crate::core::types::{Bar, Timeframe};

/// Decides whether a gridline/label belongs at `bar`.
///
/// - 5m: top of every hour.
/// - 15m: top of every even hour.
/// - 30m / 1h: day boundary against the older neighbor; the oldest bar
///   (`next_bar == None`) never delimits.
#[must_use]
pub fn should_delimit(timeframe: Timeframe, bar: &Bar, next_bar: Option<&Bar>) -> bool {
    let time = bar.datetime();
    match timeframe {
        Timeframe::M5 => time.minute() == 0,
        Timeframe::M15 => time.minute() == 0 && time.hour() % 2 == 0,
        Timeframe::M30 | Timeframe::H1 => match next_bar {
            Some(next) => next.datetime().day() != time.day(),
            None => false,
        },
    }
}

/// Label text for a delimited bar: `HH:00` for intraday granularities,
/// `D MonShort` (e.g. `5 Jan`) for day boundaries.
#[must_use]
pub fn label_for(timeframe: Timeframe, bar: &Bar) -> String {
    let time = bar.datetime();
    match timeframe {
        Timeframe::M5 | Timeframe::M15 => format!("{:02}:00", time.hour()),
        Timeframe::M30 | Timeframe::H1 => format!("{} {}", time.day(), time.format("%b")),
    }
}
