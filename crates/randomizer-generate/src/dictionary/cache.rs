use std::collections::BTreeMap;
use std::sync::{Arc, Mutex, OnceLock, PoisonError, RwLock};

use super::{Dictionary, DictionarySource};
use crate::errors::DictionaryError;

/// Dictionaries keyed by source uid.
///
/// Loads are serialized so that concurrent cached lookups of the same uid end
/// up sharing one instance. Reads of already cached entries never wait on a
/// load in progress.
#[derive(Debug, Default)]
pub struct DictionaryCache {
    entries: RwLock<BTreeMap<String, Arc<Dictionary>>>,
    load_lock: Mutex<()>,
}

impl DictionaryCache {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the dictionary for `source`, loading it when needed.
    ///
    /// With `use_cache` a cached instance is returned as is. Without it the
    /// source is always read again, and the fresh dictionary still replaces
    /// the cached entry so later cached lookups reuse it.
    pub fn get_or_load(
        &self,
        source: &dyn DictionarySource,
        use_cache: bool,
    ) -> Result<Arc<Dictionary>, DictionaryError> {
        let uid = source.uid();
        if use_cache && let Some(hit) = self.get(&uid) {
            tracing::trace!(event = "dictionary_cache_hit", uid = %uid);
            return Ok(hit);
        }

        let _guard = self.load_lock.lock().unwrap_or_else(PoisonError::into_inner);
        if use_cache && let Some(hit) = self.get(&uid) {
            tracing::trace!(event = "dictionary_cache_hit", uid = %uid);
            return Ok(hit);
        }

        let dictionary = Arc::new(Dictionary::load(source)?);
        self.entries
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .insert(uid, Arc::clone(&dictionary));
        Ok(dictionary)
    }

    pub fn get(&self, uid: &str) -> Option<Arc<Dictionary>> {
        self.entries
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .get(uid)
            .cloned()
    }

    pub fn contains(&self, uid: &str) -> bool {
        self.get(uid).is_some()
    }

    pub fn len(&self) -> usize {
        self.entries
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Drops every cached dictionary.
    ///
    /// A load that finishes after this call still inserts its result.
    pub fn clear(&self) {
        let mut entries = self.entries.write().unwrap_or_else(PoisonError::into_inner);
        let dropped = entries.len();
        entries.clear();
        tracing::debug!(event = "dictionary_cache_cleared", dropped = dropped);
    }
}

/// Process-wide cache for callers that do not manage their own.
pub fn global_cache() -> Arc<DictionaryCache> {
    static CACHE: OnceLock<Arc<DictionaryCache>> = OnceLock::new();
    Arc::clone(CACHE.get_or_init(|| Arc::new(DictionaryCache::new())))
}
