use lazy_static::lazy_static;
use std::collections::HashMap;

/// NSE companies the bot knows about, in scan order.
///
/// The order matters: the best-performer scan walks this list front to back
/// and ties keep the earlier entry.
pub const STOCK_SYMBOLS: [(&str, &str); 10] = [
    ("TATA MOTORS", "TATAMOTORS.NS"),
    ("RELIANCE", "RELIANCE.NS"),
    ("INFOSYS", "INFY.NS"),
    ("TCS", "TCS.NS"),
    ("HDFC BANK", "HDFCBANK.NS"),
    ("ICICI BANK", "ICICIBANK.NS"),
    ("BAJAJ FINANCE", "BAJFINANCE.NS"),
    ("L&T", "LT.NS"),
    ("HINDUSTAN UNILEVER", "HINDUNILVR.NS"),
    ("WIPRO", "WIPRO.NS"),
];

lazy_static! {
    static ref SYMBOL_LOOKUP: HashMap<&'static str, &'static str> =
        STOCK_SYMBOLS.iter().copied().collect();
}

/// Turn a free-text company name into an NSE ticker symbol.
///
/// Exact matches against the table win; anything else gets spaces stripped
/// and the `.NS` suffix appended. The fallback is a best-effort guess, not a
/// validated lookup — a bogus name produces a symbol the data API will
/// simply report as not found.
pub fn resolve(name: &str) -> String {
    let normalized = name.trim().to_uppercase();
    match SYMBOL_LOOKUP.get(normalized.as_str()) {
        Some(symbol) => symbol.to_string(),
        None => format!("{}.NS", normalized.replace(' ', "")),
    }
}

/// Strip the exchange suffix for user-facing text
pub fn display_symbol(symbol: &str) -> String {
    symbol.trim_end_matches(".NS").to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resolve_exact_match() {
        assert_eq!(resolve("RELIANCE"), "RELIANCE.NS");
        assert_eq!(resolve("INFOSYS"), "INFY.NS");
        assert_eq!(resolve("L&T"), "LT.NS");
    }

    #[test]
    fn test_resolve_is_case_insensitive_and_trims() {
        assert_eq!(resolve("  tata motors "), "TATAMOTORS.NS");
        assert_eq!(resolve("hdfc bank"), "HDFCBANK.NS");
    }

    #[test]
    fn test_resolve_unknown_name_falls_back_to_suffix() {
        assert_eq!(resolve("Some Corp"), "SOMECORP.NS");
        assert_eq!(resolve("zomato"), "ZOMATO.NS");
    }

    #[test]
    fn test_display_symbol_strips_suffix() {
        assert_eq!(display_symbol("RELIANCE.NS"), "RELIANCE");
        assert_eq!(display_symbol("WIPRO"), "WIPRO");
    }
}
