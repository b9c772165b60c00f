use lazy_static::lazy_static;
use regex::Regex;

/// Period used when the question contains no duration phrase
pub const DEFAULT_TIMEFRAME: &str = "1mo";

lazy_static! {
    // No word boundary after the unit: "5 days" matches through the
    // "day" prefix, same as "5 day".
    static ref TIMEFRAME_RE: Regex = Regex::new(r"(\d+)\s*(day|week|month|year)").unwrap();
}

/// Pull a period token out of a free-text question.
///
/// The first `<number> <unit>` phrase wins; later ones are ignored.
/// "show me 5 days" -> "5d", "in 2 months" -> "2mo", "3 weeks" -> "21d",
/// no duration phrase -> "1mo".
pub fn extract_timeframe(text: &str) -> String {
    let lowered = text.to_lowercase();
    let Some(caps) = TIMEFRAME_RE.captures(&lowered) else {
        return DEFAULT_TIMEFRAME.to_string();
    };
    let Ok(number) = caps[1].parse::<u64>() else {
        return DEFAULT_TIMEFRAME.to_string();
    };
    match &caps[2] {
        "day" => format!("{}d", number),
        "week" => format!("{}d", number.saturating_mul(7)),
        "month" => format!("{}mo", number),
        "year" => format!("{}y", number),
        _ => unreachable!("regex only captures the four units"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_extract_days() {
        assert_eq!(extract_timeframe("show me 5 days"), "5d");
        assert_eq!(extract_timeframe("last 1 day"), "1d");
    }

    #[test]
    fn test_extract_weeks_convert_to_days() {
        assert_eq!(extract_timeframe("3 weeks"), "21d");
        assert_eq!(extract_timeframe("best stock in 1 week"), "7d");
    }

    #[test]
    fn test_extract_months_and_years() {
        assert_eq!(extract_timeframe("in 2 months"), "2mo");
        assert_eq!(extract_timeframe("1 year"), "1y");
    }

    #[test]
    fn test_no_duration_returns_default() {
        assert_eq!(extract_timeframe("no duration here"), "1mo");
        assert_eq!(extract_timeframe(""), "1mo");
    }

    #[test]
    fn test_case_and_missing_space() {
        assert_eq!(extract_timeframe("LAST 5 DAYS"), "5d");
        assert_eq!(extract_timeframe("10days"), "10d");
    }

    #[test]
    fn test_only_first_match_is_used() {
        assert_eq!(extract_timeframe("2 months or maybe 1 year"), "2mo");
    }
}
