use chrono::DateTime;
use serde::Deserialize;
use thiserror::Error;

use crate::models::Candle;

/// Comprehensive error type for market data API operations
#[derive(Debug, Clone, Error)]
pub enum ApiError {
    /// 400 Bad Request
    #[error("Bad Request: {0}")]
    BadRequest(String),
    /// 401 Unauthorized
    #[error("Unauthorized: {0}")]
    Unauthorized(String),
    /// 403 Forbidden
    #[error("Forbidden: {0}")]
    Forbidden(String),
    /// 404 Not Found (unknown or delisted symbol)
    #[error("Not Found: {0}")]
    NotFound(String),
    /// 429 Too Many Requests
    #[error("Rate Limited: {0}")]
    RateLimited(String),
    /// 5xx Server Error
    #[error("Server Error ({0}): {1}")]
    ServerError(i32, String),
    /// Other HTTP errors
    #[error("HTTP Error ({0}): {1}")]
    HttpError(i32, String),
    /// Network/request error
    #[error("Request Error: {0}")]
    RequestError(String),
    /// Deserialization error
    #[error("Deserialization Error: {0}")]
    DeserializationError(String),
    /// Error reported inside an otherwise successful response body
    #[error("API Error: {0}")]
    ApiResponse(String),
}

/// Error object Yahoo embeds in response envelopes
#[derive(Debug, Clone, Deserialize)]
pub struct ApiErrorBody {
    pub code: Option<String>,
    pub description: Option<String>,
}

impl ApiErrorBody {
    pub fn to_message(&self) -> String {
        match (&self.code, &self.description) {
            (Some(code), Some(desc)) => format!("{}: {}", code, desc),
            (Some(code), None) => code.clone(),
            (None, Some(desc)) => desc.clone(),
            (None, None) => "unknown error".to_string(),
        }
    }
}

// ---- v8 chart endpoint ----

/// Top-level response from GET /v8/finance/chart/{symbol}
#[derive(Debug, Clone, Deserialize)]
pub struct ChartResponse {
    pub chart: ChartEnvelope,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ChartEnvelope {
    pub result: Option<Vec<ChartResult>>,
    pub error: Option<ApiErrorBody>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ChartResult {
    pub meta: ChartMeta,
    #[serde(default)]
    pub timestamp: Vec<i64>,
    pub indicators: Indicators,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ChartMeta {
    pub symbol: String,
    pub currency: Option<String>,
    #[serde(rename = "regularMarketPrice")]
    pub regular_market_price: Option<f64>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Indicators {
    #[serde(default)]
    pub quote: Vec<QuoteBlock>,
}

/// OHLC series as parallel arrays; buckets with no trade come back null
#[derive(Debug, Clone, Default, Deserialize)]
pub struct QuoteBlock {
    #[serde(default)]
    pub open: Vec<Option<f64>>,
    #[serde(default)]
    pub high: Vec<Option<f64>>,
    #[serde(default)]
    pub low: Vec<Option<f64>>,
    #[serde(default)]
    pub close: Vec<Option<f64>>,
}

impl ChartResult {
    /// Zip the parallel arrays into candles, dropping buckets with any
    /// missing field.
    pub fn candles(&self) -> Vec<Candle> {
        let quote = match self.indicators.quote.first() {
            Some(q) => q,
            None => return Vec::new(),
        };
        let mut candles = Vec::with_capacity(self.timestamp.len());
        for (i, &ts) in self.timestamp.iter().enumerate() {
            let (Some(open), Some(high), Some(low), Some(close)) = (
                quote.open.get(i).copied().flatten(),
                quote.high.get(i).copied().flatten(),
                quote.low.get(i).copied().flatten(),
                quote.close.get(i).copied().flatten(),
            ) else {
                continue;
            };
            let Some(timestamp) = DateTime::from_timestamp(ts, 0) else {
                continue;
            };
            candles.push(Candle {
                timestamp,
                open,
                high,
                low,
                close,
            });
        }
        candles
    }
}

// ---- v10 quoteSummary endpoint ----

/// Top-level response from GET /v10/finance/quoteSummary/{symbol}
#[derive(Debug, Clone, Deserialize)]
pub struct QuoteSummaryResponse {
    #[serde(rename = "quoteSummary")]
    pub quote_summary: QuoteSummaryEnvelope,
}

#[derive(Debug, Clone, Deserialize)]
pub struct QuoteSummaryEnvelope {
    pub result: Option<Vec<QuoteSummaryResult>>,
    pub error: Option<ApiErrorBody>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct QuoteSummaryResult {
    #[serde(rename = "assetProfile")]
    pub asset_profile: Option<AssetProfile>,
    pub price: Option<PriceModule>,
    #[serde(rename = "summaryDetail")]
    pub summary_detail: Option<SummaryDetail>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct AssetProfile {
    pub sector: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct PriceModule {
    #[serde(rename = "longName")]
    pub long_name: Option<String>,
    #[serde(rename = "marketCap")]
    pub market_cap: Option<RawValue>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct SummaryDetail {
    #[serde(rename = "previousClose")]
    pub previous_close: Option<RawValue>,
    #[serde(rename = "fiftyTwoWeekHigh")]
    pub fifty_two_week_high: Option<RawValue>,
    #[serde(rename = "fiftyTwoWeekLow")]
    pub fifty_two_week_low: Option<RawValue>,
    #[serde(rename = "dividendYield")]
    pub dividend_yield: Option<RawValue>,
    #[serde(rename = "trailingPE")]
    pub trailing_pe: Option<RawValue>,
}

/// Yahoo wraps every numeric field as `{"raw": 2890.5, "fmt": "2,890.50"}`
#[derive(Debug, Clone, Default, Deserialize)]
pub struct RawValue {
    pub raw: Option<f64>,
    pub fmt: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_chart_response_null_buckets_are_dropped() {
        let json = r#"{
            "chart": {
                "result": [{
                    "meta": {"symbol": "RELIANCE.NS", "currency": "INR", "regularMarketPrice": 2890.5},
                    "timestamp": [1714953600, 1715040000, 1715126400],
                    "indicators": {
                        "quote": [{
                            "open":  [2850.0, null, 2880.0],
                            "high":  [2900.0, null, 2910.0],
                            "low":   [2840.0, null, 2860.0],
                            "close": [2890.0, null, 2905.0]
                        }]
                    }
                }],
                "error": null
            }
        }"#;
        let response: ChartResponse = serde_json::from_str(json).unwrap();
        let result = &response.chart.result.unwrap()[0];
        assert_eq!(result.meta.symbol, "RELIANCE.NS");
        let candles = result.candles();
        assert_eq!(candles.len(), 2);
        assert_eq!(candles[0].close, 2890.0);
        assert_eq!(candles[1].close, 2905.0);
    }

    #[test]
    fn test_chart_error_body() {
        let json = r#"{
            "chart": {
                "result": null,
                "error": {"code": "Not Found", "description": "No data found, symbol may be delisted"}
            }
        }"#;
        let response: ChartResponse = serde_json::from_str(json).unwrap();
        let error = response.chart.error.unwrap();
        assert_eq!(
            error.to_message(),
            "Not Found: No data found, symbol may be delisted"
        );
    }

    #[test]
    fn test_quote_summary_deserializes_wrapped_values() {
        let json = r#"{
            "quoteSummary": {
                "result": [{
                    "assetProfile": {"sector": "Energy"},
                    "price": {
                        "longName": "Reliance Industries Limited",
                        "marketCap": {"raw": 19562000000000.0, "fmt": "19.56T"}
                    },
                    "summaryDetail": {
                        "previousClose": {"raw": 2890.5, "fmt": "2,890.50"},
                        "fiftyTwoWeekHigh": {"raw": 3024.9},
                        "fiftyTwoWeekLow": {"raw": 2220.3},
                        "dividendYield": {"raw": 0.0035},
                        "trailingPE": {"raw": 28.4}
                    }
                }],
                "error": null
            }
        }"#;
        let response: QuoteSummaryResponse = serde_json::from_str(json).unwrap();
        let result = &response.quote_summary.result.unwrap()[0];
        assert_eq!(
            result.price.as_ref().unwrap().long_name.as_deref(),
            Some("Reliance Industries Limited")
        );
        let detail = result.summary_detail.as_ref().unwrap();
        assert_eq!(detail.previous_close.as_ref().unwrap().raw, Some(2890.5));
        assert_eq!(detail.trailing_pe.as_ref().unwrap().raw, Some(28.4));
    }

    #[test]
    fn test_quote_summary_tolerates_missing_modules() {
        let json = r#"{"quoteSummary": {"result": [{}], "error": null}}"#;
        let response: QuoteSummaryResponse = serde_json::from_str(json).unwrap();
        let result = &response.quote_summary.result.unwrap()[0];
        assert!(result.price.is_none());
        assert!(result.asset_profile.is_none());
    }
}
