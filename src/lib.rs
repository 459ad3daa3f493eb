//! Sentilex - Lexical & Sentiment Analysis Core
//!
//! Analyzes free-form text using an external word-segmentation /
//! entity-extraction service combined with locally curated term
//! dictionaries. It answers two questions about a passage:
//! - which distinct words and entities appear, with semantic labels
//!   (term-frequency analysis), and
//! - how many occurrences skew positive vs. negative in sentiment,
//!   logging anything it cannot classify for later dictionary curation.
//!
//! # Architecture
//!
//! - **Dictionary**: YAML word-lists with a process-wide load-once cache
//! - **Analysis**: text normalization, token filters, the
//!   term-frequency and sentiment pipelines
//! - **Services**: the segmentation API client and response normalization
//! - **Storage**: the persisted, self-growing unrecognized-word list
//!
//! # Example
//!
//! ```ignore
//! use sentilex::{AnalyzerConfig, TextAnalyzer};
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     let analyzer = TextAnalyzer::new(AnalyzerConfig::rooted("data/sentilex"));
//!
//!     let terms = analyzer.term_frequency("大熊猫喜欢吃竹子").await?;
//!     let mood = analyzer.sentiment("今天很开心，一点也不难过").await?;
//!     println!("{} distinct terms, {} positive", terms.frequency.len(), mood.positive_num);
//!
//!     Ok(())
//! }
//! ```

pub mod analysis;
pub mod analyzer;
pub mod config;
pub mod dictionary;
pub mod error;
pub mod services;
pub mod storage;
pub mod types;

// Re-export commonly used types
pub use analyzer::TextAnalyzer;
pub use config::AnalyzerConfig;
pub use dictionary::{Dictionary, DictionaryCache, DictionarySource};
pub use error::{Result, SentilexError};
pub use services::{HttpSegmentationClient, SegmentationReply, Segmenter};
pub use storage::UnrecognizedWordStore;
pub use types::{
    SegmentationResult, SegmentedEntity, SegmentedToken, SentimentReport, TermFrequencyReport,
};
