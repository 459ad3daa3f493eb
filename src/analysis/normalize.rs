//! Text normalization: strips configured "meaningless" substrings
//! (fillers, stopword-like noise) before any analysis runs.

use crate::dictionary::DictionaryCache;
use crate::error::Result;
use std::sync::Arc;

/// Removes every occurrence of each configured meaningless phrase.
///
/// Matching is literal substring removal in dictionary order, not regex
/// and not token-aligned: an entry may match inside a longer token and
/// is still stripped. Idempotent on text already free of the entries.
pub struct TextNormalizer {
    dictionaries: Arc<DictionaryCache>,
}

impl TextNormalizer {
    pub fn new(dictionaries: Arc<DictionaryCache>) -> Self {
        Self { dictionaries }
    }

    /// Strip all meaningless phrases from `text`.
    ///
    /// May trigger the one-time load of the "meaningless" dictionary;
    /// that load failure propagates.
    pub async fn normalize(&self, text: &str) -> Result<String> {
        let dict = self.dictionaries.get("meaningless").await?;

        let mut out = text.to_string();
        for phrase in dict.category("meaningless") {
            if phrase.is_empty() {
                continue;
            }
            out = out.replace(phrase.as_str(), "");
        }
        Ok(out)
    }
}
