//! Analysis pipelines: token filtering, text normalization,
//! term-frequency aggregation, and sentiment classification.

pub mod filters;
pub mod normalize;
pub mod sentiment;
pub mod term_frequency;

pub use normalize::TextNormalizer;
