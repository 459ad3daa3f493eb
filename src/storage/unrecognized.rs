//! Persistent store of unrecognized sentiment tokens
//!
//! A flat YAML file holding `{unrecognized: [..]}`, kept deduplicated
//! and sorted so a curator can skim it and promote entries into the
//! positive/negative dictionaries. Within normal operation the list
//! only grows: every merge unions with what is already on disk and
//! rewrites the file in full.
//!
//! The rewrite goes through a temp file in the same directory followed
//! by a rename, and merges within one process are serialized behind a
//! mutex. Concurrent writers in separate processes still race
//! (last writer wins); no cross-process lock is taken.

use crate::error::Result;
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};
use tempfile::NamedTempFile;
use tokio::sync::Mutex;
use tracing::debug;

#[derive(Debug, Default, Serialize, Deserialize)]
struct StoreFile {
    #[serde(default)]
    unrecognized: Vec<String>,
}

/// Cumulative, deduplicated, sorted list of tokens the sentiment
/// classifier could not place.
pub struct UnrecognizedWordStore {
    path: PathBuf,
    write_lock: Mutex<()>,
}

impl UnrecognizedWordStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            write_lock: Mutex::new(()),
        }
    }

    /// Current contents of the store; an absent file reads as empty.
    pub async fn load(&self) -> Result<Vec<String>> {
        Self::read_file(&self.path).await
    }

    /// Union `words` into the persisted list, rewriting the file in
    /// full. Returns the combined list.
    pub async fn merge(&self, words: &[String]) -> Result<Vec<String>> {
        let _guard = self.write_lock.lock().await;

        let mut combined: BTreeSet<String> =
            Self::read_file(&self.path).await?.into_iter().collect();
        combined.extend(words.iter().cloned());
        let combined: Vec<String> = combined.into_iter().collect();

        self.rewrite(&combined)?;
        debug!(
            "Persisted {} unrecognized words to {}",
            combined.len(),
            self.path.display()
        );
        Ok(combined)
    }

    async fn read_file(path: &Path) -> Result<Vec<String>> {
        if !path.exists() {
            return Ok(Vec::new());
        }
        let text = tokio::fs::read_to_string(path).await?;
        let file: StoreFile = serde_yaml::from_str(&text)?;
        Ok(file.unrecognized)
    }

    fn rewrite(&self, words: &[String]) -> Result<()> {
        let parent = self.path.parent().unwrap_or_else(|| Path::new("."));
        std::fs::create_dir_all(parent)?;

        let temp = NamedTempFile::new_in(parent)?;
        let mut writer = BufWriter::new(&temp);
        serde_yaml::to_writer(
            &mut writer,
            &StoreFile {
                unrecognized: words.to_vec(),
            },
        )?;
        writer.flush()?;
        drop(writer);
        temp.persist(&self.path).map_err(|e| e.error)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn strings(items: &[&str]) -> Vec<String> {
        items.iter().map(|s| s.to_string()).collect()
    }

    #[tokio::test]
    async fn test_absent_file_reads_empty() {
        let dir = TempDir::new().unwrap();
        let store = UnrecognizedWordStore::new(dir.path().join("unrecognized_words.yaml"));
        assert!(store.load().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_merge_unions_across_runs() {
        let dir = TempDir::new().unwrap();
        let store = UnrecognizedWordStore::new(dir.path().join("unrecognized_words.yaml"));

        store.merge(&strings(&["banana", "apple"])).await.unwrap();
        let combined = store.merge(&strings(&["cherry"])).await.unwrap();

        assert_eq!(combined, ["apple", "banana", "cherry"]);
        assert_eq!(store.load().await.unwrap(), ["apple", "banana", "cherry"]);
    }

    #[tokio::test]
    async fn test_merge_deduplicates() {
        let dir = TempDir::new().unwrap();
        let store = UnrecognizedWordStore::new(dir.path().join("words.yaml"));

        store.merge(&strings(&["再见", "你好"])).await.unwrap();
        let combined = store.merge(&strings(&["你好", "再见"])).await.unwrap();

        assert_eq!(combined, ["你好", "再见"]);
    }

    #[tokio::test]
    async fn test_file_is_human_readable_yaml() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("words.yaml");
        let store = UnrecognizedWordStore::new(&path);

        store.merge(&strings(&["你好"])).await.unwrap();

        // Unicode must be preserved verbatim, not escaped.
        let text = std::fs::read_to_string(&path).unwrap();
        assert!(text.contains("unrecognized"));
        assert!(text.contains("你好"));
    }

    #[tokio::test]
    async fn test_creates_parent_directories() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("nested/deep/words.yaml");
        let store = UnrecognizedWordStore::new(&path);

        store.merge(&strings(&["token"])).await.unwrap();
        assert!(path.exists());
    }

    #[tokio::test]
    async fn test_empty_merge_still_writes_file() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("words.yaml");
        let store = UnrecognizedWordStore::new(&path);

        store.merge(&[]).await.unwrap();
        assert!(path.exists());
        assert!(store.load().await.unwrap().is_empty());
    }
}
