//! Term-frequency aggregation over a segmentation result
//!
//! Builds the deduplicated vocabulary, the entity type-label set, and
//! the related-concept set. Counting runs over the already-deduplicated
//! vocabulary, so every reported frequency is 1; this matches the
//! established pipeline ordering and is relied on by callers.

use crate::analysis::filters::{dedup_sorted, retain_clean, retain_meaningful};
use crate::types::{SegmentationResult, TermFrequencyReport};
use std::collections::BTreeMap;

/// Aggregate a segmentation result into a term-frequency report.
///
/// Never fails; an empty result set produces an all-empty report.
pub fn build_report(segmentation: &SegmentationResult) -> TermFrequencyReport {
    let words: Vec<String> = segmentation.words.iter().map(|w| w.text.clone()).collect();

    let mut type_labels = Vec::new();
    let mut related = Vec::new();
    for entity in &segmentation.entities {
        type_labels.push(entity.type_label.clone());
        related.extend(entity.related.iter().cloned());
    }

    // Words get the full filter chain; labels and related concepts only
    // drop punctuation.
    let words = dedup_sorted(retain_meaningful(retain_clean(words)));
    let type_labels = dedup_sorted(retain_clean(type_labels));
    let related = dedup_sorted(retain_clean(related));

    let mut frequency = BTreeMap::new();
    for word in &words {
        *frequency.entry(word.clone()).or_insert(0) += 1;
    }

    TermFrequencyReport {
        frequency,
        type_labels,
        related,
    }
}
