/// Trim transport-level noise off client error strings before they reach
/// users.
///
/// reqwest failures read like:
/// "Request Error: error sending request for url (https://query1.finance.yahoo.com/...): ..."
///
/// Users only need to know the data service was unreachable.
pub fn clean_api_error(error_msg: &str) -> String {
    if error_msg.contains("error sending request for url") {
        "Could not reach the market data service. Please try again.".to_string()
    } else {
        error_msg.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_transport_errors_are_replaced() {
        let raw = "Request Error: error sending request for url (https://query1.finance.yahoo.com/v8/finance/chart/RELIANCE.NS): connection refused";
        assert_eq!(
            clean_api_error(raw),
            "Could not reach the market data service. Please try again."
        );
    }

    #[test]
    fn test_other_errors_pass_through() {
        let raw = "❌ Stock 'FOO' not found in NSE.";
        assert_eq!(clean_api_error(raw), raw);
    }
}
