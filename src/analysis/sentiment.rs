//! Sentiment classification of phrase tokens via dictionary lookup
//!
//! Positive matching is exact membership; negative matching is literal
//! substring containment (any negative entry occurring inside the token
//! counts). The asymmetry is intentional: negative entries act as
//! stems, positive entries as whole phrases.

use crate::analysis::filters::dedup_sorted;
use crate::types::SentimentReport;

/// Classify `tokens` (in original order, repeats included) against the
/// positive and negative term lists.
///
/// Counters increment per occurrence; only the unrecognized bucket is
/// deduplicated and sorted.
pub fn classify(tokens: &[String], positive: &[String], negative: &[String]) -> SentimentReport {
    let mut report = SentimentReport {
        word_num: tokens.len(),
        ..Default::default()
    };

    for token in tokens {
        if positive.iter().any(|p| p == token) {
            report.positive_num += 1;
            report.positive.push(token.clone());
        } else if negative.iter().any(|n| token.contains(n.as_str())) {
            report.negative_num += 1;
            report.negative.push(token.clone());
        } else {
            report.unrecognized.push(token.clone());
        }
    }

    report.unrecognized = dedup_sorted(std::mem::take(&mut report.unrecognized));
    report
}
