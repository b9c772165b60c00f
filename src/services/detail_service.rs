use crate::api::yahoo::{ApiError, QuoteSummaryResult, YahooFinanceClient};
use crate::models::StockDetails;
use crate::services::symbol_service;

/// Fetch descriptive metadata for a stock named in free text.
///
/// A symbol the API does not recognize, or one with no usable metadata
/// (no long name), is reported as not found; other API failures surface as
/// descriptive strings.
pub async fn get_stock_details(
    client: &YahooFinanceClient,
    stock_name: &str,
) -> Result<StockDetails, String> {
    let symbol = symbol_service::resolve(stock_name);

    let summary = match client.quote_summary(&symbol).await {
        Ok(summary) => summary,
        Err(ApiError::NotFound(_)) => return Err(not_found(stock_name)),
        Err(e) => return Err(format!("❌ Stock not found or API error: {}", e)),
    };

    details_from_summary(stock_name, &symbol, summary)
}

/// Build the detail struct out of a quote summary payload.
/// Split from the fetch so the mapping is testable without a server.
fn details_from_summary(
    stock_name: &str,
    symbol: &str,
    summary: QuoteSummaryResult,
) -> Result<StockDetails, String> {
    let QuoteSummaryResult {
        asset_profile,
        price,
        summary_detail,
    } = summary;

    let price = price.unwrap_or_default();
    let Some(company_name) = price.long_name else {
        return Err(not_found(stock_name));
    };
    let detail = summary_detail.unwrap_or_default();

    Ok(StockDetails {
        symbol: symbol_service::display_symbol(symbol),
        company_name,
        sector: asset_profile.and_then(|p| p.sector),
        market_cap: price.market_cap.and_then(|v| v.raw).map(|v| v as i64),
        previous_close: detail.previous_close.and_then(|v| v.raw),
        fifty_two_week_high: detail.fifty_two_week_high.and_then(|v| v.raw),
        fifty_two_week_low: detail.fifty_two_week_low.and_then(|v| v.raw),
        dividend_yield: detail.dividend_yield.and_then(|v| v.raw),
        trailing_pe: detail.trailing_pe.and_then(|v| v.raw),
    })
}

fn not_found(stock_name: &str) -> String {
    format!("❌ Stock '{}' not found in NSE.", stock_name)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::yahoo::models::{AssetProfile, PriceModule, RawValue, SummaryDetail};

    fn raw(value: f64) -> Option<RawValue> {
        Some(RawValue {
            raw: Some(value),
            fmt: None,
        })
    }

    #[test]
    fn test_details_from_full_summary() {
        let summary = QuoteSummaryResult {
            asset_profile: Some(AssetProfile {
                sector: Some("Energy".to_string()),
            }),
            price: Some(PriceModule {
                long_name: Some("Reliance Industries Limited".to_string()),
                market_cap: raw(19562000000000.0),
            }),
            summary_detail: Some(SummaryDetail {
                previous_close: raw(2890.5),
                fifty_two_week_high: raw(3024.9),
                fifty_two_week_low: raw(2220.3),
                dividend_yield: raw(0.35),
                trailing_pe: raw(28.4),
            }),
        };

        let details = details_from_summary("reliance", "RELIANCE.NS", summary).unwrap();
        assert_eq!(details.symbol, "RELIANCE");
        assert_eq!(details.company_name, "Reliance Industries Limited");
        assert_eq!(details.sector.as_deref(), Some("Energy"));
        assert_eq!(details.market_cap, Some(19562000000000));
        assert_eq!(details.previous_close, Some(2890.5));
    }

    #[test]
    fn test_missing_long_name_is_not_found() {
        let summary = QuoteSummaryResult::default();
        let err = details_from_summary("bogus", "BOGUS.NS", summary).unwrap_err();
        assert_eq!(err, "❌ Stock 'bogus' not found in NSE.");
    }

    #[test]
    fn test_missing_modules_leave_fields_empty() {
        let summary = QuoteSummaryResult {
            asset_profile: None,
            price: Some(PriceModule {
                long_name: Some("Wipro Limited".to_string()),
                market_cap: None,
            }),
            summary_detail: None,
        };
        let details = details_from_summary("wipro", "WIPRO.NS", summary).unwrap();
        assert_eq!(details.company_name, "Wipro Limited");
        assert!(details.sector.is_none());
        assert!(details.market_cap.is_none());
        assert!(details.trailing_pe.is_none());
    }
}
