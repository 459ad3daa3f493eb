//! Configuration for the analysis core
//!
//! The core is embedded in a host plugin runtime, so configuration is a
//! plain struct the host fills in (or deserializes from its own config
//! file). There is no command-line surface here.

use serde::Deserialize;
use std::path::PathBuf;

/// Default endpoint of the external segmentation / entity-extraction API.
pub const DEFAULT_SEGMENTATION_ENDPOINT: &str = "https://texsmart.qq.com/api";

/// Settings for a [`TextAnalyzer`](crate::TextAnalyzer) instance.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct AnalyzerConfig {
    /// URL of the segmentation API.
    pub segmentation_endpoint: String,

    /// Directory holding user-curated dictionary files (`<name>.yaml`).
    /// Created on demand; missing files are seeded from `template_dir`.
    pub user_dict_dir: PathBuf,

    /// Directory holding packaged dictionary templates.
    pub template_dir: PathBuf,

    /// Path of the persisted unrecognized-word store.
    pub unrecognized_path: PathBuf,
}

impl Default for AnalyzerConfig {
    fn default() -> Self {
        Self {
            segmentation_endpoint: DEFAULT_SEGMENTATION_ENDPOINT.to_string(),
            user_dict_dir: PathBuf::from("data/config"),
            template_dir: PathBuf::from("templates"),
            unrecognized_path: PathBuf::from("data/config/unrecognized_words.yaml"),
        }
    }
}

impl AnalyzerConfig {
    /// Config rooted at a single data directory: dictionaries in
    /// `<root>/config`, templates in `<root>/templates`.
    pub fn rooted(root: impl Into<PathBuf>) -> Self {
        let root = root.into();
        Self {
            segmentation_endpoint: DEFAULT_SEGMENTATION_ENDPOINT.to_string(),
            user_dict_dir: root.join("config"),
            template_dir: root.join("templates"),
            unrecognized_path: root.join("config").join("unrecognized_words.yaml"),
        }
    }
}
