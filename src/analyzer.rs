//! The analysis facade wiring dictionaries, normalization, the
//! segmentation client, and persistence into the two public pipelines.

use crate::analysis::normalize::TextNormalizer;
use crate::analysis::{filters, sentiment, term_frequency};
use crate::config::AnalyzerConfig;
use crate::dictionary::{DictionaryCache, DictionarySource};
use crate::error::Result;
use crate::services::segmentation::{HttpSegmentationClient, Segmenter};
use crate::storage::UnrecognizedWordStore;
use crate::types::{SentimentReport, TermFrequencyReport};
use std::sync::Arc;
use tracing::{debug, info};

/// Lexical and sentiment analyzer for free-form text.
///
/// Methods take `&self` and the analyzer is `Send + Sync`; the host may
/// run many analyses concurrently against one instance. Dictionary
/// loads and the segmentation call are the only suspension points.
pub struct TextAnalyzer {
    dictionaries: Arc<DictionaryCache>,
    normalizer: TextNormalizer,
    segmenter: Arc<dyn Segmenter>,
    unrecognized: UnrecognizedWordStore,
}

impl TextAnalyzer {
    /// Build an analyzer talking to the configured segmentation API.
    pub fn new(config: AnalyzerConfig) -> Self {
        let segmenter = Arc::new(HttpSegmentationClient::new(
            config.segmentation_endpoint.clone(),
        ));
        Self::with_segmenter(config, segmenter)
    }

    /// Build an analyzer with a custom segmentation backend.
    pub fn with_segmenter(config: AnalyzerConfig, segmenter: Arc<dyn Segmenter>) -> Self {
        let dictionaries = Arc::new(DictionaryCache::new(DictionarySource::new(
            config.user_dict_dir.clone(),
            config.template_dir.clone(),
        )));
        let normalizer = TextNormalizer::new(Arc::clone(&dictionaries));
        let unrecognized = UnrecognizedWordStore::new(config.unrecognized_path.clone());

        Self {
            dictionaries,
            normalizer,
            segmenter,
            unrecognized,
        }
    }

    /// Distinct words/entities in `text` with their frequencies, entity
    /// type labels, and related concepts.
    ///
    /// A failed segmentation call degrades to an all-empty report; only
    /// a dictionary load failure is returned as an error.
    pub async fn term_frequency(&self, text: &str) -> Result<TermFrequencyReport> {
        let text = self.normalizer.normalize(text).await?;
        let segmentation = self.segmenter.segment(&text).await.into_result();

        let report = term_frequency::build_report(&segmentation);
        debug!(
            "Term frequency: {} distinct words, {} type labels, {} related concepts",
            report.frequency.len(),
            report.type_labels.len(),
            report.related.len()
        );
        Ok(report)
    }

    /// Positive/negative occurrence counts over the phrase tokens of
    /// `text`, persisting newly seen unrecognized tokens for curation.
    ///
    /// A failed segmentation call degrades to a zeroed report.
    pub async fn sentiment(&self, text: &str) -> Result<SentimentReport> {
        let text = self.normalizer.normalize(text).await?;

        let positive = self.dictionaries.get("positive").await?;
        let negative = self.dictionaries.get("negative").await?;

        let segmentation = self.segmenter.segment(&text).await.into_result();
        let tokens: Vec<String> = segmentation
            .phrases
            .iter()
            .map(|p| p.text.clone())
            .collect();
        let tokens = filters::retain_clean(tokens);

        let report = sentiment::classify(
            &tokens,
            positive.category("positive"),
            negative.category("negative"),
        );
        debug!(
            "Sentiment: positive {:?}, negative {:?}, unrecognized {:?}",
            report.positive, report.negative, report.unrecognized
        );

        self.unrecognized.merge(&report.unrecognized).await?;
        info!(
            "Sentiment over {} phrase tokens: {} positive, {} negative",
            report.word_num, report.positive_num, report.negative_num
        );
        Ok(report)
    }
}
