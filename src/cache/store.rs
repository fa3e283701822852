//! Cache store mapping categories to fetched articles
//!
//! Holds the category → articles mapping in memory and rewrites the full
//! serialized store to a JSON file on every update. The on-disk shape is
//! `{ "<category>": { "timestamp": <epoch ms>, "articles": [...] } }`.

use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};
use std::sync::Mutex;
use tracing::warn;

use crate::news::Article;

/// A single cached fetch result for one category
///
/// Entries are replaced wholesale on refresh; there is no partial merge.
/// The timestamp serializes as epoch milliseconds to match the persisted
/// file format.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CacheEntry {
    /// When the articles were fetched
    #[serde(with = "chrono::serde::ts_milliseconds")]
    pub timestamp: DateTime<Utc>,
    /// The articles returned by the upstream API (possibly empty)
    pub articles: Vec<Article>,
}

impl CacheEntry {
    /// Returns true if this entry is older than the given window
    fn is_older_than(&self, max_age: Duration, now: DateTime<Utc>) -> bool {
        now - self.timestamp > max_age
    }
}

/// In-memory cache of articles per category, mirrored to a file
///
/// All mutation is routed through [`CacheStore::insert`], which replaces the
/// entry for one category and persists the entire store. The internal mutex
/// serializes map updates and file writes, so the persisted file is always a
/// consistent snapshot of the store; it does not prevent two callers from
/// both observing staleness and both fetching (last write wins).
#[derive(Debug)]
pub struct CacheStore {
    /// File the store is mirrored to on every update
    path: PathBuf,
    /// The category → entry mapping
    entries: Mutex<HashMap<String, CacheEntry>>,
}

impl CacheStore {
    /// Loads the store from the given file
    ///
    /// A missing or unparseable file yields an empty store; corruption is
    /// logged but never fatal.
    pub fn load(path: impl Into<PathBuf>) -> Self {
        let path = path.into();
        let entries = match fs::read_to_string(&path) {
            Ok(content) => match serde_json::from_str(&content) {
                Ok(entries) => entries,
                Err(e) => {
                    warn!("Ignoring corrupt cache file {}: {e}", path.display());
                    HashMap::new()
                }
            },
            Err(_) => HashMap::new(),
        };

        Self {
            path,
            entries: Mutex::new(entries),
        }
    }

    /// Returns the path of the persisted cache file
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Number of categories currently cached
    pub fn len(&self) -> usize {
        self.entries.lock().expect("cache lock poisoned").len()
    }

    /// Returns true if no categories are cached
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Returns the cached articles for a category if the entry is younger
    /// than `max_age`
    pub fn fresh(&self, category: &str, max_age: Duration) -> Option<Vec<Article>> {
        let entries = self.entries.lock().expect("cache lock poisoned");
        let entry = entries.get(category)?;
        if entry.is_older_than(max_age, Utc::now()) {
            None
        } else {
            Some(entry.articles.clone())
        }
    }

    /// Returns true if the category has no entry or its entry is older than
    /// `max_age`
    pub fn is_stale(&self, category: &str, max_age: Duration) -> bool {
        let entries = self.entries.lock().expect("cache lock poisoned");
        match entries.get(category) {
            Some(entry) => entry.is_older_than(max_age, Utc::now()),
            None => true,
        }
    }

    /// Replaces the entry for a category with `{now, articles}` and rewrites
    /// the whole store to the cache file
    pub fn insert(&self, category: &str, articles: Vec<Article>) -> std::io::Result<()> {
        let mut entries = self.entries.lock().expect("cache lock poisoned");
        entries.insert(
            category.to_string(),
            CacheEntry {
                timestamp: Utc::now(),
                articles,
            },
        );
        self.persist(&entries)
    }

    /// Rewrites the full serialized store to the cache file
    fn persist(&self, entries: &HashMap<String, CacheEntry>) -> std::io::Result<()> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent)?;
            }
        }

        let json = serde_json::to_string_pretty(entries)
            .map_err(|e| std::io::Error::new(std::io::ErrorKind::InvalidData, e))?;

        fs::write(&self.path, json)
    }
}
