//! Dictionary loading and process-wide memoization
//!
//! Classification word-lists (positive, negative, meaningless) live in
//! YAML files. A user-curated copy takes precedence; on first use a
//! missing user file is seeded from the packaged template so later
//! curation has something to edit. Loaded dictionaries are cached for
//! the process lifetime: no expiry, no invalidation.

use crate::error::{Result, SentilexError};
use std::collections::HashMap;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use tokio::sync::RwLock;
use tracing::{debug, info};

/// A named mapping from a category key (e.g. "positive") to an ordered
/// list of terms.
#[derive(Debug, Clone, Default)]
pub struct Dictionary {
    entries: HashMap<String, Vec<String>>,
}

impl Dictionary {
    /// Terms under `key`, or an empty slice when the category is absent.
    pub fn category(&self, key: &str) -> &[String] {
        self.entries.get(key).map(Vec::as_slice).unwrap_or(&[])
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl From<HashMap<String, Vec<String>>> for Dictionary {
    fn from(entries: HashMap<String, Vec<String>>) -> Self {
        Self { entries }
    }
}

/// Resolves a dictionary name to its backing YAML file, seeding the
/// user copy from the packaged template on first use.
#[derive(Debug, Clone)]
pub struct DictionarySource {
    user_dir: PathBuf,
    template_dir: PathBuf,
}

impl DictionarySource {
    pub fn new(user_dir: impl Into<PathBuf>, template_dir: impl Into<PathBuf>) -> Self {
        Self {
            user_dir: user_dir.into(),
            template_dir: template_dir.into(),
        }
    }

    fn user_path(&self, name: &str) -> PathBuf {
        self.user_dir.join(format!("{name}.yaml"))
    }

    /// Load the dictionary `name` from disk, copying the template into
    /// the user directory first if no user file exists yet.
    pub async fn load(&self, name: &str) -> Result<Dictionary> {
        let user_path = self.user_path(name);

        if !user_path.exists() {
            self.seed_from_template(name, &user_path).await?;
        }

        let text = tokio::fs::read_to_string(&user_path).await?;
        let entries: HashMap<String, Vec<String>> = serde_yaml::from_str(&text)?;
        debug!("Loaded dictionary '{}' from {}", name, user_path.display());
        Ok(Dictionary::from(entries))
    }

    async fn seed_from_template(&self, name: &str, user_path: &Path) -> Result<()> {
        let template_path = self.template_dir.join(format!("{name}.yaml"));
        if !template_path.exists() {
            return Err(SentilexError::DictionaryNotFound(name.to_string()));
        }

        tokio::fs::create_dir_all(&self.user_dir).await?;
        tokio::fs::copy(&template_path, user_path).await?;
        info!(
            "Seeded user dictionary '{}' from template {}",
            name,
            template_path.display()
        );
        Ok(())
    }
}

/// Process-wide cache of loaded dictionaries, keyed by file name.
///
/// Each name is read from disk at most once; subsequent lookups return
/// the cached value. First-time loads of the same name are serialized
/// behind the write lock, so concurrent requests cannot double-load.
pub struct DictionaryCache {
    source: DictionarySource,
    loaded: RwLock<HashMap<String, Arc<Dictionary>>>,
}

impl DictionaryCache {
    pub fn new(source: DictionarySource) -> Self {
        Self {
            source,
            loaded: RwLock::new(HashMap::new()),
        }
    }

    /// Fetch the dictionary `name`, loading it on first use.
    ///
    /// Load failure propagates to the caller; no fallback dictionary is
    /// substituted and nothing is cached for the failed name.
    pub async fn get(&self, name: &str) -> Result<Arc<Dictionary>> {
        if let Some(dict) = self.loaded.read().await.get(name) {
            return Ok(Arc::clone(dict));
        }

        let mut loaded = self.loaded.write().await;
        // Another request may have finished the load while we waited.
        if let Some(dict) = loaded.get(name) {
            return Ok(Arc::clone(dict));
        }

        let dict = Arc::new(self.source.load(name).await?);
        loaded.insert(name.to_string(), Arc::clone(&dict));
        Ok(dict)
    }
}
