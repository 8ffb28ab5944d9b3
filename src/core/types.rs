use std::fmt;

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::core::primitives::{datetime_to_epoch_millis, decimal_to_f64};
use crate::error::{ChartError, ChartResult};

/// One OHLC price sample for a fixed time bucket.
///
/// Bar sequences are ordered newest first: index 0 is the most recent bar and
/// increasing indices walk back in time.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Bar {
    pub open: f64,
    pub high: f64,
    pub low: f64,
    pub close: f64,
    pub timestamp_ms: i64,
}

impl Bar {
    /// Builds a validated bar from raw floating values and an epoch-millis timestamp.
    ///
    /// Invariants:
    /// - all price values are finite
    /// - `low <= high`
    /// - `open` and `close` are within `[low, high]`
    /// - `timestamp_ms` is representable as a calendar instant
    pub fn new(open: f64, high: f64, low: f64, close: f64, timestamp_ms: i64) -> ChartResult<Self> {
        if !open.is_finite() || !high.is_finite() || !low.is_finite() || !close.is_finite() {
            return Err(ChartError::InvalidData(
                "ohlc values must be finite".to_owned(),
            ));
        }

        if low > high {
            return Err(ChartError::InvalidData(
                "ohlc low must be <= high".to_owned(),
            ));
        }

        if open < low || open > high || close < low || close > high {
            return Err(ChartError::InvalidData(
                "ohlc open/close must be within low/high range".to_owned(),
            ));
        }

        if DateTime::from_timestamp_millis(timestamp_ms).is_none() {
            return Err(ChartError::InvalidData(
                "bar timestamp is outside the representable calendar range".to_owned(),
            ));
        }

        Ok(Self {
            open,
            high,
            low,
            close,
            timestamp_ms,
        })
    }

    /// Converts strongly-typed temporal/decimal input into a validated bar.
    pub fn from_decimal_time(
        time: DateTime<Utc>,
        open: Decimal,
        high: Decimal,
        low: Decimal,
        close: Decimal,
    ) -> ChartResult<Self> {
        Self::new(
            decimal_to_f64(open, "open")?,
            decimal_to_f64(high, "high")?,
            decimal_to_f64(low, "low")?,
            decimal_to_f64(close, "close")?,
            datetime_to_epoch_millis(time),
        )
    }

    /// Returns `true` when close price is greater than or equal to open price.
    ///
    /// An `open == close` tie counts as bullish by convention.
    #[must_use]
    pub fn is_bullish(self) -> bool {
        self.close >= self.open
    }

    /// Returns the bar instant in the fixed UTC calendar.
    #[must_use]
    pub fn datetime(self) -> DateTime<Utc> {
        // Representability is validated in `Bar::new`.
        DateTime::from_timestamp_millis(self.timestamp_ms).unwrap_or(DateTime::UNIX_EPOCH)
    }
}

/// Bar bucket granularity selectable by the host.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum Timeframe {
    M5,
    M15,
    M30,
    #[default]
    H1,
}

impl Timeframe {
    pub const ALL: [Self; 4] = [Self::M5, Self::M15, Self::M30, Self::H1];

    /// REST path fragment used by the upstream aggregates endpoint.
    ///
    /// The data collaborator owns the actual request; this only keeps the
    /// timeframe-to-path mapping in one place.
    #[must_use]
    pub fn request_path(self) -> &'static str {
        match self {
            Self::M5 => "5/minute",
            Self::M15 => "15/minute",
            Self::M30 => "30/minute",
            Self::H1 => "1/hour",
        }
    }

    /// Bucket length in minutes.
    #[must_use]
    pub fn bucket_minutes(self) -> u32 {
        match self {
            Self::M5 => 5,
            Self::M15 => 15,
            Self::M30 => 30,
            Self::H1 => 60,
        }
    }
}

impl fmt::Display for Timeframe {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::M5 => "5m",
            Self::M15 => "15m",
            Self::M30 => "30m",
            Self::H1 => "1h",
        };
        write!(f, "{name}")
    }
}
