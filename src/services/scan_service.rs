use tracing::{debug, warn};

use crate::api::yahoo::{ApiError, YahooFinanceClient};
use crate::models::{Candle, PerformanceResult};
use crate::services::symbol_service;

/// Simple return over a candle series: (last close - first close) / first close.
/// Returns None when there are fewer than two observations.
pub fn fractional_return(candles: &[Candle]) -> Option<f64> {
    if candles.len() < 2 {
        return None;
    }
    let first = candles.first()?.close;
    let last = candles.last()?.close;
    Some((last - first) / first)
}

/// Pick the best performer from (company, return) pairs.
/// Strict `>` comparison, so ties keep the earliest candidate.
pub fn pick_best(
    returns: impl IntoIterator<Item = (&'static str, f64)>,
) -> Option<PerformanceResult> {
    let mut best: Option<PerformanceResult> = None;
    for (company, fractional_return) in returns {
        let better = match &best {
            Some(current) => fractional_return > current.fractional_return,
            None => true,
        };
        if better {
            best = Some(PerformanceResult {
                company,
                fractional_return,
            });
        }
    }
    best
}

/// Walk the symbol table in order and find the company with the highest
/// fractional return over `timeframe`.
///
/// A candidate is skipped, not fatal, when its history is empty, too short,
/// or its fetch fails; the scan only errors when every single candidate
/// failed at the fetch level.
pub async fn find_best_performer(
    client: &YahooFinanceClient,
    timeframe: &str,
) -> Result<Option<PerformanceResult>, String> {
    let mut returns: Vec<(&'static str, f64)> = Vec::new();
    let mut fetch_failures = 0usize;
    let mut first_error: Option<ApiError> = None;

    for (company, symbol) in symbol_service::STOCK_SYMBOLS {
        let candles = match client.chart(symbol, timeframe).await {
            Ok(candles) => candles,
            Err(e) => {
                warn!("Skipping {} in scan, fetch failed: {}", company, e);
                fetch_failures += 1;
                if first_error.is_none() {
                    first_error = Some(e);
                }
                continue;
            }
        };

        match fractional_return(&candles) {
            Some(performance) => {
                debug!(
                    "{} returned {:+.4} over {} ({} candles)",
                    company,
                    performance,
                    timeframe,
                    candles.len()
                );
                returns.push((company, performance));
            }
            None => {
                warn!(
                    "Skipping {} in scan: not enough history ({} candles)",
                    company,
                    candles.len()
                );
            }
        }
    }

    if returns.is_empty() && fetch_failures == symbol_service::STOCK_SYMBOLS.len() {
        if let Some(e) = first_error {
            return Err(format!("❌ Error fetching best stock: {}", e));
        }
    }

    Ok(pick_best(returns))
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::DateTime;

    fn candle(ts: i64, close: f64) -> Candle {
        Candle {
            timestamp: DateTime::from_timestamp(ts, 0).unwrap(),
            open: close,
            high: close,
            low: close,
            close,
        }
    }

    #[test]
    fn test_fractional_return_needs_two_observations() {
        assert_eq!(fractional_return(&[]), None);
        assert_eq!(fractional_return(&[candle(0, 100.0)]), None);
    }

    #[test]
    fn test_fractional_return_uses_first_and_last_close() {
        let candles = vec![candle(0, 100.0), candle(1, 90.0), candle(2, 105.0)];
        assert_eq!(fractional_return(&candles), Some(0.05));
    }

    #[test]
    fn test_pick_best_keeps_first_on_tie() {
        let returns = vec![
            ("TATA MOTORS", 0.02),
            ("RELIANCE", 0.05),
            ("INFOSYS", -0.01),
            ("TCS", 0.05),
        ];
        let best = pick_best(returns).unwrap();
        assert_eq!(best.company, "RELIANCE");
        assert_eq!(best.fractional_return, 0.05);
    }

    #[test]
    fn test_pick_best_empty_is_none() {
        assert_eq!(pick_best(Vec::new()), None);
    }

    #[test]
    fn test_single_observation_candidate_is_excluded() {
        // one candidate has the numerically highest close but only one candle
        let short_history = vec![candle(0, 9999.0)];
        assert_eq!(fractional_return(&short_history), None);

        // so a scan over pairs built from valid histories never sees it
        let returns = vec![("RELIANCE", 0.01)];
        assert_eq!(pick_best(returns).unwrap().company, "RELIANCE");
    }
}
