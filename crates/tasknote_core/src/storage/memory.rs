use super::{KeyValueStore, StoreError, StoreResult};
use std::collections::BTreeMap;

/// In-process store, optionally capped by a byte quota.
///
/// The quota counts UTF-8 bytes of every key and value, like the per-origin
/// limit of browser storage.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MemoryStore {
    items: BTreeMap<String, String>,
    quota_bytes: Option<usize>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates an empty store that rejects writes beyond `quota_bytes`.
    pub fn with_quota(quota_bytes: usize) -> Self {
        Self {
            items: BTreeMap::new(),
            quota_bytes: Some(quota_bytes),
        }
    }

    /// Total bytes currently held (keys plus values).
    pub fn used_bytes(&self) -> usize {
        self.items
            .iter()
            .map(|(key, value)| key.len() + value.len())
            .sum()
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

impl KeyValueStore for MemoryStore {
    fn get_item(&self, key: &str) -> StoreResult<Option<String>> {
        Ok(self.items.get(key).cloned())
    }

    fn set_item(&mut self, key: &str, value: &str) -> StoreResult<()> {
        if let Some(quota_bytes) = self.quota_bytes {
            let replaced = self
                .items
                .get(key)
                .map_or(0, |previous| key.len() + previous.len());
            let required_bytes = self.used_bytes() - replaced + key.len() + value.len();
            if required_bytes > quota_bytes {
                return Err(StoreError::QuotaExceeded {
                    key: key.to_string(),
                    required_bytes,
                    quota_bytes,
                });
            }
        }

        self.items.insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove_item(&mut self, key: &str) -> StoreResult<()> {
        self.items.remove(key);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::MemoryStore;
    use crate::storage::{KeyValueStore, StoreError};

    #[test]
    fn set_get_and_remove() {
        let mut store = MemoryStore::new();
        assert_eq!(store.get_item("todos").unwrap(), None);

        store.set_item("todos", "[]").unwrap();
        store.set_item("todos", "[1]").unwrap();
        assert_eq!(store.get_item("todos").unwrap().as_deref(), Some("[1]"));
        assert_eq!(store.len(), 1);

        store.remove_item("todos").unwrap();
        store.remove_item("todos").unwrap();
        assert!(store.is_empty());
    }

    #[test]
    fn quota_rejects_oversized_write_and_keeps_previous_value() {
        let mut store = MemoryStore::with_quota(12);
        store.set_item("notes", "[]").unwrap();

        let err = store.set_item("notes", "[\"too long\"]").unwrap_err();
        assert!(matches!(
            err,
            StoreError::QuotaExceeded { quota_bytes: 12, .. }
        ));
        assert_eq!(store.get_item("notes").unwrap().as_deref(), Some("[]"));
    }

    #[test]
    fn quota_accounts_for_replaced_value() {
        let mut store = MemoryStore::with_quota(10);
        store.set_item("k", "123456789").unwrap();
        store.set_item("k", "987654321").unwrap();
        assert_eq!(store.used_bytes(), 10);
    }
}
