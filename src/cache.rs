/*!
 * Persistent translation caching functionality.
 *
 * This module provides a write-through cache mapping source strings to
 * translations for one fixed (provider, source language, target language)
 * triple. Every mutation is persisted synchronously to a JSON file so a
 * process restart never loses a paid-for translation.
 *
 * A cached `None` is meaningful: it records that the backend produced
 * nothing different from the input, so the same string is never retried.
 */

use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};

use log::{debug, warn};

use crate::errors::CacheError;

/// Subdirectory under the cache base holding all translation cache files
const CACHE_SUBDIR: &str = "mtl";

/// File extension of the durable cache artifact
const CACHE_FILE_EXTENSION: &str = "json";

/// Translation cache for storing and retrieving translations
///
/// One instance per (provider, source language, target language) triple.
/// Entries map source strings to either a translated string or `None`,
/// the marker for "no meaningful translation".
pub struct TranslationCache {
    /// In-memory cache contents, the source of truth
    entries: HashMap<String, Option<String>>,

    /// Path of the durable cache artifact
    cache_file: PathBuf,
}

impl TranslationCache {
    /// Load the cache for the given triple from durable storage
    ///
    /// A missing file yields an empty cache. An unreadable or malformed
    /// file is logged and also yields an empty cache; a corrupt cache
    /// degrades to a cold cache, never to an error.
    pub fn load<P: AsRef<Path>>(
        cache_base: P,
        provider_id: &str,
        source_language: &str,
        target_language: &str,
    ) -> Self {
        let cache_file =
            Self::cache_file_path(cache_base, provider_id, source_language, target_language);

        let entries = match Self::read_entries(&cache_file) {
            Ok(entries) => {
                debug!(
                    "Loaded {} cached translations from {:?}",
                    entries.len(),
                    cache_file
                );
                entries
            }
            Err(err) => {
                warn!(
                    "Failed to read translation cache {:?}: {}, starting cold",
                    cache_file, err
                );
                HashMap::new()
            }
        };

        Self {
            entries,
            cache_file,
        }
    }

    /// Compute the durable artifact path for a cache triple
    ///
    /// The path is `<cache_base>/mtl/<provider>-<src>-<dst>.json`, so
    /// caches for different providers and language pairs never collide
    /// and are independently clearable.
    pub fn cache_file_path<P: AsRef<Path>>(
        cache_base: P,
        provider_id: &str,
        source_language: &str,
        target_language: &str,
    ) -> PathBuf {
        cache_base.as_ref().join(CACHE_SUBDIR).join(format!(
            "{}-{}-{}.{}",
            provider_id, source_language, target_language, CACHE_FILE_EXTENSION
        ))
    }

    /// Read and deserialize the cache file, treating absence as empty
    fn read_entries(cache_file: &Path) -> Result<HashMap<String, Option<String>>, CacheError> {
        if !cache_file.exists() {
            return Ok(HashMap::new());
        }

        let json = fs::read_to_string(cache_file)?;
        Ok(serde_json::from_str(&json)?)
    }

    /// Look up a translation, without side effects
    ///
    /// Returns `None` when the key has never been cached,
    /// `Some(None)` when the key is cached with the "no translation"
    /// marker, and `Some(Some(text))` for a cached translation.
    pub fn get(&self, source_text: &str) -> Option<Option<&str>> {
        self.entries.get(source_text).map(|value| value.as_deref())
    }

    /// Insert or overwrite an entry, then persist the whole cache
    ///
    /// Persistence failures are logged and swallowed; the in-memory
    /// entry stays valid either way.
    pub fn put(&mut self, source_text: &str, translation: Option<String>) {
        self.entries.insert(source_text.to_string(), translation);

        if let Err(err) = self.persist() {
            warn!(
                "Failed to write translation cache {:?}: {}",
                self.cache_file, err
            );
        }
    }

    /// Serialize the entire cache to its durable artifact
    pub fn persist(&self) -> Result<(), CacheError> {
        if let Some(parent) = self.cache_file.parent() {
            fs::create_dir_all(parent)?;
        }

        let json = serde_json::to_string_pretty(&self.entries)?;
        fs::write(&self.cache_file, json)?;
        Ok(())
    }

    /// Empty the in-memory cache and delete the durable artifact
    ///
    /// Deletion failures are logged and swallowed; the in-memory cache
    /// is cleared regardless.
    pub fn clear(&mut self) {
        self.entries.clear();

        if self.cache_file.exists() {
            if let Err(err) = fs::remove_file(&self.cache_file) {
                warn!(
                    "Failed to delete translation cache {:?}: {}",
                    self.cache_file, err
                );
            }
        }

        debug!("Translation cache cleared");
    }

    /// Get the number of entries in the cache
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Check if the cache is empty
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Path of the durable cache artifact
    pub fn cache_file(&self) -> &Path {
        &self.cache_file
    }
}
