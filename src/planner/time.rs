// src/planner/time.rs

use once_cell::sync::Lazy;
use regex::Regex;

/// Clock-time expressions: 1-2 digits, optional `:MM`, optional am/pm suffix.
/// No semantic validation, so "99:99" matches too.
static TIME_EXPR: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?i)\d{1,2}(?::\d{2})?\s*(?:am|pm)?").unwrap());

/// Extract time expressions like "10", "3:15", "12 am" in order of appearance.
/// Matches are returned verbatim; the optional am/pm arm means a match can
/// carry trailing whitespace.
pub fn extract_times(text: &str) -> Vec<String> {
    TIME_EXPR
        .find_iter(text)
        .map(|m| m.as_str().to_string())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_input_yields_no_times() {
        assert!(extract_times("").is_empty());
        assert!(extract_times("a quiet day with no plans").is_empty());
    }

    #[test]
    fn bare_hours_in_order() {
        // the whitespace before "to" sits inside the first match
        assert_eq!(extract_times("Lunch at 12 to 1"), vec!["12 ", "1"]);
    }

    #[test]
    fn minutes_and_meridiem_suffixes() {
        assert_eq!(extract_times("standup at 9:15"), vec!["9:15"]);
        assert_eq!(extract_times("12 am to 3 am"), vec!["12 am", "3 am"]);
    }

    #[test]
    fn meridiem_is_case_insensitive() {
        assert_eq!(extract_times("dinner at 7 PM"), vec!["7 PM"]);
    }

    #[test]
    fn no_semantic_validation() {
        assert_eq!(extract_times("alarm at 99:99"), vec!["99:99"]);
    }
}
