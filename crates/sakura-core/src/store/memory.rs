//! In-memory key-value store.

use std::collections::BTreeMap;

use super::KeyValueStore;
use crate::error::Result;

/// A store backed by an ordered map. Nothing survives the process.
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    entries: BTreeMap<String, String>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of stored keys.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// All stored keys in sorted order.
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.entries.keys().map(String::as_str)
    }
}

impl KeyValueStore for MemoryStore {
    fn put(&mut self, key: &str, value: &str) -> Result<()> {
        self.entries.insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn get(&self, key: &str) -> Result<Option<String>> {
        Ok(self.entries.get(key).cloned())
    }

    fn delete(&mut self, key: &str) -> Result<()> {
        self.entries.remove(key);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_put_get_delete() {
        let mut store = MemoryStore::new();
        assert!(store.is_empty());

        store.put("date-invitation-a", "{}").expect("put");
        assert_eq!(store.get("date-invitation-a").expect("get").as_deref(), Some("{}"));
        assert_eq!(store.len(), 1);

        store.put("date-invitation-a", "{\"accepted\":true}").expect("overwrite");
        assert_eq!(store.len(), 1);

        store.delete("date-invitation-a").expect("delete");
        assert_eq!(store.get("date-invitation-a").expect("get"), None);
    }

    #[test]
    fn test_delete_missing_key_is_ok() {
        let mut store = MemoryStore::new();
        assert!(store.delete("missing").is_ok());
    }

    #[test]
    fn test_keys_are_sorted() {
        let mut store = MemoryStore::new();
        store.put("b", "2").expect("put");
        store.put("a", "1").expect("put");
        assert_eq!(store.keys().collect::<Vec<_>>(), ["a", "b"]);
    }
}
