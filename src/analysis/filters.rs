//! Token filters shared by the analysis pipelines
//!
//! Word-character tests are Unicode-aware: CJK characters count as word
//! characters, punctuation in any script does not.

use once_cell::sync::Lazy;
use regex::Regex;
use std::collections::BTreeSet;

/// Any character outside the Unicode word-character class.
static NON_WORD: Lazy<Regex> = Lazy::new(|| Regex::new(r"[^\w]").expect("valid regex"));

/// Date/time fragments and bare numbers that carry no vocabulary value:
/// pure digits, or digits followed by a year/month/day/minute marker.
static UNWANTED: Lazy<Vec<Regex>> = Lazy::new(|| {
    [r"^\d+$", r"\d+年", r"\d+月", r"\d+日", r"\d+分"]
        .iter()
        .map(|p| Regex::new(p).expect("valid regex"))
        .collect()
});

/// A token is clean when every character is a word character. One
/// punctuation character anywhere disqualifies the whole token.
pub fn is_clean(token: &str) -> bool {
    !NON_WORD.is_match(token)
}

/// A token is meaningful when it is longer than one character and is
/// not a number or date/time fragment.
pub fn is_meaningful(token: &str) -> bool {
    token.chars().count() > 1 && !UNWANTED.iter().any(|p| p.is_match(token))
}

/// Drop every token containing punctuation.
pub fn retain_clean(tokens: Vec<String>) -> Vec<String> {
    tokens.into_iter().filter(|t| is_clean(t)).collect()
}

/// Drop single-character tokens and number/date fragments.
pub fn retain_meaningful(tokens: Vec<String>) -> Vec<String> {
    tokens.into_iter().filter(|t| is_meaningful(t)).collect()
}

/// Deduplicate and sort lexicographically.
pub fn dedup_sorted(tokens: Vec<String>) -> Vec<String> {
    tokens.into_iter().collect::<BTreeSet<_>>().into_iter().collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_clean_accepts_cjk_words() {
        assert!(is_clean("大熊猫"));
        assert!(is_clean("hello"));
        assert!(is_clean("世界123"));
    }

    #[test]
    fn test_clean_rejects_any_punctuation() {
        assert!(!is_clean("。"));
        assert!(!is_clean("hello!"));
        assert!(!is_clean("你，好"));
        assert!(!is_clean("a b"));
    }

    #[test]
    fn test_meaningful_rejects_single_chars() {
        assert!(!is_meaningful("好"));
        assert!(!is_meaningful("a"));
        assert!(is_meaningful("很好"));
    }

    #[test]
    fn test_meaningful_rejects_dates_and_numbers() {
        assert!(!is_meaningful("2024"));
        assert!(!is_meaningful("2024年"));
        assert!(!is_meaningful("5月"));
        assert!(!is_meaningful("10日"));
        assert!(!is_meaningful("30分"));
        assert!(is_meaningful("月亮"));
    }

    #[test]
    fn test_dedup_sorted_orders_lexicographically() {
        let tokens = vec![
            "banana".to_string(),
            "apple".to_string(),
            "banana".to_string(),
        ];
        assert_eq!(dedup_sorted(tokens), ["apple", "banana"]);
    }

    #[test]
    fn test_retain_pipeline() {
        let tokens = vec![
            "大熊猫".to_string(),
            "。".to_string(),
            "竹".to_string(),
            "2024年".to_string(),
            "竹子".to_string(),
        ];
        let kept = retain_meaningful(retain_clean(tokens));
        assert_eq!(kept, ["大熊猫", "竹子"]);
    }
}
