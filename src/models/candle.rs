//! OHLC chart models

use chrono::{DateTime, Utc};

/// A single OHLC observation on a candlestick chart
#[derive(Debug, Clone)]
pub struct Candle {
    pub timestamp: DateTime<Utc>,
    pub open: f64,
    pub high: f64,
    pub low: f64,
    pub close: f64,
}
