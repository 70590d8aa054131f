use std::collections::HashMap;

use super::{valid_key, KeyValueStore, StoreError};

/// Store that lives for the duration of the process.
#[derive(Debug, Default, Clone)]
pub struct MemoryStore {
    entries: HashMap<String, String>,
}

impl MemoryStore {
    pub fn new() -> MemoryStore {
        MemoryStore {
            entries: HashMap::new(),
        }
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl KeyValueStore for MemoryStore {
    fn get(&self, key: &str) -> Option<String> {
        self.entries.get(key).cloned()
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), StoreError> {
        if !valid_key(key) {
            return Err(StoreError::InvalidKey(key.to_string()));
        }

        self.entries.insert(key.to_string(), value.to_string());

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use anyhow::{bail, Result};
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn test_set_replaces_value() -> Result<()> {
        let mut store = MemoryStore::new();
        assert_eq!(store.get("budget"), None);

        store.set("budget", "300")?;
        store.set("budget", "500")?;

        assert_eq!(store.get("budget"), Some("500".to_string()));
        assert_eq!(store.len(), 1);

        Ok(())
    }

    #[test]
    fn test_rejects_invalid_key() -> Result<()> {
        let mut store = MemoryStore::new();
        if let Err(err) = store.set("../budget", "1") {
            assert!(matches!(err, StoreError::InvalidKey(_)));
        } else {
            bail!("keys with path separators should be rejected");
        }

        assert!(store.is_empty());

        Ok(())
    }
}
