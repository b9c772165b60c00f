//! Stock detail models

use crate::utils::format_with_commas;

/// Metadata for a single NSE-listed stock as reported by the market data API.
///
/// Numeric fields are optional because Yahoo omits them for thinly covered
/// symbols; they render as `N/A`.
#[derive(Debug, Clone)]
pub struct StockDetails {
    /// Display symbol with the `.NS` suffix stripped
    pub symbol: String,
    pub company_name: String,
    pub sector: Option<String>,
    pub market_cap: Option<i64>,
    pub previous_close: Option<f64>,
    pub fifty_two_week_high: Option<f64>,
    pub fifty_two_week_low: Option<f64>,
    pub dividend_yield: Option<f64>,
    pub trailing_pe: Option<f64>,
}

impl StockDetails {
    /// Labeled display fields, in the order they appear in the reply embed
    pub fn detail_fields(&self) -> Vec<(&'static str, String)> {
        vec![
            ("Symbol", self.symbol.clone()),
            ("Company Name", self.company_name.clone()),
            (
                "Sector",
                self.sector.clone().unwrap_or_else(|| "N/A".to_string()),
            ),
            (
                "Market Cap",
                self.market_cap
                    .map(format_with_commas)
                    .unwrap_or_else(|| "N/A".to_string()),
            ),
            ("Previous Close", rupees(self.previous_close)),
            ("52-Week High", rupees(self.fifty_two_week_high)),
            ("52-Week Low", rupees(self.fifty_two_week_low)),
            (
                "Dividend Yield",
                self.dividend_yield
                    .map(|v| format!("{}%", v))
                    .unwrap_or_else(|| "N/A".to_string()),
            ),
            (
                "P/E Ratio",
                self.trailing_pe
                    .map(|v| v.to_string())
                    .unwrap_or_else(|| "N/A".to_string()),
            ),
        ]
    }
}

fn rupees(value: Option<f64>) -> String {
    match value {
        Some(v) => format!("₹{}", v),
        None => "N/A".to_string(),
    }
}
