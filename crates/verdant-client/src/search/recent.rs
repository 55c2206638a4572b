//! Recent-search history.

use serde::{Deserialize, Serialize};
use verdant_cache::Cache;

use crate::error::ClientError;

/// Maximum number of remembered searches.
pub const RECENT_SEARCH_LIMIT: usize = 5;

/// Most-recent-first list of submitted queries.
///
/// Entries are unique under case-insensitive comparison and there are never
/// more than [`RECENT_SEARCH_LIMIT`] of them. Serialized as a plain JSON
/// string array.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RecentSearches {
    entries: Vec<String>,
}

impl RecentSearches {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build from stored entries, dropping blanks, duplicates and overflow.
    pub fn from_entries<I, S>(entries: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut recent = Self::new();
        for entry in entries {
            let entry: String = entry.into();
            let entry = entry.trim();
            if entry.is_empty() || recent.position(entry).is_some() {
                continue;
            }
            if recent.entries.len() == RECENT_SEARCH_LIMIT {
                break;
            }
            recent.entries.push(entry.to_string());
        }
        recent
    }

    /// Record a submitted query.
    ///
    /// The trimmed query moves to the front, replacing any case-insensitive
    /// duplicate. Blank queries are ignored. Returns whether the list changed.
    pub fn push(&mut self, query: &str) -> bool {
        let query = query.trim();
        if query.is_empty() {
            return false;
        }
        if self.entries.first().map(String::as_str) == Some(query) {
            return false;
        }
        if let Some(index) = self.position(query) {
            self.entries.remove(index);
        }
        self.entries.insert(0, query.to_string());
        self.entries.truncate(RECENT_SEARCH_LIMIT);
        true
    }

    pub fn clear(&mut self) {
        self.entries.clear();
    }

    pub fn entries(&self) -> &[String] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    fn position(&self, query: &str) -> Option<usize> {
        let needle = query.to_lowercase();
        self.entries.iter().position(|e| e.to_lowercase() == needle)
    }

    /// Load the list stored under `key`.
    ///
    /// A missing or malformed value yields an empty list.
    pub fn load(cache: &Cache, key: &str) -> Self {
        match cache.get::<Vec<String>>(key) {
            Ok(Some(entries)) => Self::from_entries(entries),
            Ok(None) => Self::new(),
            Err(e) => {
                tracing::warn!(key, error = %e, "discarding unreadable recent searches");
                Self::new()
            }
        }
    }

    /// Persist the list under `key`.
    pub fn save(&self, cache: &Cache, key: &str) -> Result<(), ClientError> {
        cache.set(key, self)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use verdant_cache::{KeyValueStore, MemoryStore};

    #[test]
    fn test_push_promotes_case_insensitive_duplicate() {
        let mut recent = RecentSearches::from_entries(["tea", "honey"]);
        assert!(recent.push("Tea"));
        assert_eq!(recent.entries(), ["Tea", "honey"]);
    }

    #[test]
    fn test_push_caps_length() {
        let mut recent = RecentSearches::new();
        for q in ["a", "b", "c", "d", "e", "f", "g"] {
            recent.push(q);
        }
        assert_eq!(recent.len(), RECENT_SEARCH_LIMIT);
        assert_eq!(recent.entries(), ["g", "f", "e", "d", "c"]);
    }

    #[test]
    fn test_push_trims_and_ignores_blank() {
        let mut recent = RecentSearches::new();
        assert!(!recent.push("   "));
        assert!(recent.push("  clove oil "));
        assert_eq!(recent.entries(), ["clove oil"]);
        assert!(!recent.push("clove oil"));
    }

    #[test]
    fn test_from_entries_normalises() {
        let recent = RecentSearches::from_entries(["a", "", "A", "b", "c", "d", "e", "f"]);
        assert_eq!(recent.entries(), ["a", "b", "c", "d", "e"]);
    }

    #[test]
    fn test_storage_round_trip() {
        let store = MemoryStore::new();
        let cache = Cache::new(store.clone());

        let mut recent = RecentSearches::new();
        recent.push("honey");
        recent.push("tea");
        recent.save(&cache, "recentSearches").unwrap();

        assert_eq!(
            store.get_raw("recentSearches").unwrap().as_deref(),
            Some(r#"["tea","honey"]"#)
        );
        assert_eq!(RecentSearches::load(&cache, "recentSearches"), recent);
    }

    #[test]
    fn test_malformed_storage_loads_empty() {
        let store = MemoryStore::new();
        store.set_raw("recentSearches", "not json").unwrap();
        let cache = Cache::new(store);

        assert!(RecentSearches::load(&cache, "recentSearches").is_empty());
        assert!(RecentSearches::load(&cache, "missing").is_empty());
    }
}
