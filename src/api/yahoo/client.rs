use reqwest::header::{HeaderMap, HeaderValue, ACCEPT, USER_AGENT};
use reqwest::Client as HttpClient;
use tracing::warn;

use super::models::{ApiError, ChartResponse, QuoteSummaryResponse, QuoteSummaryResult};
use crate::models::Candle;

/// Yahoo Finance API client for NSE quotes and OHLC history
#[derive(Clone)]
pub struct YahooFinanceClient {
    http_client: HttpClient,
    base_url: String,
}

impl YahooFinanceClient {
    const DEFAULT_BASE_URL: &'static str = "https://query1.finance.yahoo.com";
    // Yahoo rejects reqwest's default user agent
    const USER_AGENT_VALUE: &'static str =
        "Mozilla/5.0 (X11; Linux x86_64; rv:120.0) Gecko/20100101 Firefox/120.0";

    /// Create a new Yahoo Finance client
    pub fn new() -> Self {
        Self {
            http_client: HttpClient::new(),
            base_url: Self::DEFAULT_BASE_URL.to_string(),
        }
    }

    /// Create a new client with custom base URL (for testing)
    pub fn with_base_url(base_url: String) -> Self {
        Self {
            http_client: HttpClient::new(),
            base_url,
        }
    }

    fn create_headers(&self) -> HeaderMap {
        let mut headers = HeaderMap::new();
        headers.insert(ACCEPT, HeaderValue::from_static("application/json"));
        headers.insert(USER_AGENT, HeaderValue::from_static(Self::USER_AGENT_VALUE));
        headers
    }

    /// Parse error response based on HTTP status code
    async fn handle_error_response(
        status: reqwest::StatusCode,
        response: reqwest::Response,
    ) -> ApiError {
        let status_code = status.as_u16();
        let body_text = response.text().await.unwrap_or_default();

        match status_code {
            400 => {
                // Try to pull the message out of a JSON error body
                if let Ok(err_json) = serde_json::from_str::<serde_json::Value>(&body_text) {
                    let message = err_json
                        .get("message")
                        .and_then(|v| v.as_str())
                        .unwrap_or(&body_text);
                    ApiError::BadRequest(message.to_string())
                } else {
                    ApiError::BadRequest(body_text)
                }
            }
            401 => ApiError::Unauthorized(body_text),
            403 => ApiError::Forbidden(body_text),
            404 => ApiError::NotFound(body_text),
            429 => {
                warn!("Rate limited by market data API");
                ApiError::RateLimited(body_text)
            }
            500..=599 => {
                warn!("Server error {}: {}", status_code, body_text);
                ApiError::ServerError(status_code as i32, body_text)
            }
            _ => ApiError::HttpError(status_code as i32, body_text),
        }
    }

    /// Fetch daily OHLC history for a symbol over a period string
    /// understood by Yahoo ("5d", "1mo", "6mo", "1y", ...)
    pub async fn chart(&self, symbol: &str, range: &str) -> Result<Vec<Candle>, ApiError> {
        let url = format!(
            "{}/v8/finance/chart/{}?range={}&interval=1d",
            self.base_url, symbol, range
        );

        let response = self
            .http_client
            .get(&url)
            .headers(self.create_headers())
            .send()
            .await
            .map_err(|e| ApiError::RequestError(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            return Err(Self::handle_error_response(status, response).await);
        }

        let body: ChartResponse = response
            .json()
            .await
            .map_err(|e| ApiError::DeserializationError(e.to_string()))?;

        if let Some(error) = body.chart.error {
            return Err(ApiError::ApiResponse(error.to_message()));
        }

        Ok(body
            .chart
            .result
            .unwrap_or_default()
            .into_iter()
            .next()
            .map(|r| r.candles())
            .unwrap_or_default())
    }

    /// Fetch descriptive metadata (name, sector, market cap, ...) for a symbol
    pub async fn quote_summary(&self, symbol: &str) -> Result<QuoteSummaryResult, ApiError> {
        let url = format!(
            "{}/v10/finance/quoteSummary/{}?modules=assetProfile,price,summaryDetail",
            self.base_url, symbol
        );

        let response = self
            .http_client
            .get(&url)
            .headers(self.create_headers())
            .send()
            .await
            .map_err(|e| ApiError::RequestError(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            return Err(Self::handle_error_response(status, response).await);
        }

        let body: QuoteSummaryResponse = response
            .json()
            .await
            .map_err(|e| ApiError::DeserializationError(e.to_string()))?;

        if let Some(error) = body.quote_summary.error {
            return Err(ApiError::ApiResponse(error.to_message()));
        }

        body.quote_summary
            .result
            .unwrap_or_default()
            .into_iter()
            .next()
            .ok_or_else(|| ApiError::NotFound(format!("No quote summary data for {}", symbol)))
    }
}

impl Default for YahooFinanceClient {
    fn default() -> Self {
        Self::new()
    }
}
