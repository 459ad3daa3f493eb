//! Services layer for the analysis core
//!
//! Provides the client for the external segmentation / entity-extraction
//! API and the normalization of its responses.

pub mod segmentation;

pub use segmentation::{HttpSegmentationClient, SegmentationReply, Segmenter};
