use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use rust_decimal::prelude::ToPrimitive;
use serde::{Deserialize, Serialize};

use crate::error::{ChartError, ChartResult};

/// One sample of a plotted series.
///
/// Scalar samples drive line/area/histogram series; OHLC samples drive
/// candlestick/bar series. Times are unix seconds and must be strictly
/// increasing within one series.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum SeriesPoint {
    Scalar {
        time: f64,
        value: f64,
    },
    Ohlc {
        time: f64,
        open: f64,
        high: f64,
        low: f64,
        close: f64,
    },
}

impl SeriesPoint {
    #[must_use]
    pub const fn scalar(time: f64, value: f64) -> Self {
        Self::Scalar { time, value }
    }

    #[must_use]
    pub const fn ohlc(time: f64, open: f64, high: f64, low: f64, close: f64) -> Self {
        Self::Ohlc {
            time,
            open,
            high,
            low,
            close,
        }
    }

    /// Builds a scalar sample from a wall-clock timestamp and decimal price.
    pub fn from_decimal_time(time: DateTime<Utc>, price: Decimal) -> ChartResult<Self> {
        Ok(Self::Scalar {
            time: datetime_to_unix_seconds(time),
            value: decimal_to_f64(price, "price")?,
        })
    }

    #[must_use]
    pub fn time(self) -> f64 {
        match self {
            Self::Scalar { time, .. } | Self::Ohlc { time, .. } => time,
        }
    }

    /// Returns the scalar value, `None` for OHLC-shaped samples.
    #[must_use]
    pub fn scalar_value(self) -> Option<f64> {
        match self {
            Self::Scalar { value, .. } => Some(value),
            Self::Ohlc { .. } => None,
        }
    }

    #[must_use]
    pub fn is_ohlc(self) -> bool {
        matches!(self, Self::Ohlc { .. })
    }
}

/// Visible time window of the chart, independent of series identity.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TimeRange {
    pub from: f64,
    pub to: f64,
}

impl TimeRange {
    #[must_use]
    pub const fn new(from: f64, to: f64) -> Self {
        Self { from, to }
    }

    #[must_use]
    pub fn from_datetimes(from: DateTime<Utc>, to: DateTime<Utc>) -> Self {
        Self {
            from: datetime_to_unix_seconds(from),
            to: datetime_to_unix_seconds(to),
        }
    }
}

pub fn decimal_to_f64(value: Decimal, field_name: &str) -> ChartResult<f64> {
    value.to_f64().ok_or_else(|| {
        ChartError::InvalidData(format!("{field_name} cannot be represented as f64"))
    })
}

#[must_use]
pub fn datetime_to_unix_seconds(time: DateTime<Utc>) -> f64 {
    time.timestamp_millis() as f64 / 1000.0
}
