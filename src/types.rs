//! Core data structures for segmentation results and analysis reports

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// A word or phrase produced by the segmentation service, with its
/// part-of-speech tag.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SegmentedToken {
    pub text: String,
    pub tag: String,
}

/// A recognized named/typed span of text, with a localized type label
/// and semantically related concepts.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SegmentedEntity {
    pub text: String,
    pub tag: String,
    /// Natural-language name of the entity type (e.g. Chinese or English).
    pub type_label: String,
    /// Related concept strings suggested by the service.
    pub related: Vec<String>,
}

/// Normalized output of the external segmentation service.
///
/// Produced fresh per call; never cached. All lists default to empty
/// when the service response omits them or the call failed.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SegmentationResult {
    pub words: Vec<SegmentedToken>,
    pub phrases: Vec<SegmentedToken>,
    pub entities: Vec<SegmentedEntity>,
}

/// Result of term-frequency analysis over one passage of text.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TermFrequencyReport {
    /// Occurrence count per distinct surviving word. Counting runs over
    /// the deduplicated vocabulary, so every count is 1; kept that way
    /// to match the established pipeline ordering.
    pub frequency: BTreeMap<String, usize>,

    /// Deduplicated, sorted localized entity type labels.
    pub type_labels: Vec<String>,

    /// Deduplicated, sorted related-concept strings.
    pub related: Vec<String>,
}

/// Result of sentiment classification over one passage of text.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SentimentReport {
    /// Occurrences that matched the positive dictionary exactly.
    pub positive_num: usize,

    /// Occurrences containing a negative dictionary entry as a substring.
    pub negative_num: usize,

    /// Total phrase tokens considered (after punctuation filtering,
    /// before classification).
    pub word_num: usize,

    /// Tokens classified positive, in original order (with repeats).
    pub positive: Vec<String>,

    /// Tokens classified negative, in original order (with repeats).
    pub negative: Vec<String>,

    /// Tokens that matched neither dictionary, deduplicated and sorted.
    pub unrecognized: Vec<String>,
}
