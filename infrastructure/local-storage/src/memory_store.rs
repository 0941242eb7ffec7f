use std::collections::HashMap;
use std::sync::RwLock;

use business::domain::cart::store::KeyValueStore;
use business::domain::errors::RepositoryError;

/// Process-local store; contents vanish with the process.
#[derive(Default)]
pub struct InMemoryKeyValueStore {
    entries: RwLock<HashMap<String, String>>,
}

impl InMemoryKeyValueStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.entries.read().map(|e| e.len()).unwrap_or(0)
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl KeyValueStore for InMemoryKeyValueStore {
    fn get(&self, key: &str) -> Result<Option<String>, RepositoryError> {
        let entries = self
            .entries
            .read()
            .map_err(|_| RepositoryError::Persistence)?;
        Ok(entries.get(key).cloned())
    }

    fn set(&self, key: &str, value: &str) -> Result<(), RepositoryError> {
        let mut entries = self
            .entries
            .write()
            .map_err(|_| RepositoryError::Persistence)?;
        entries.insert(key.to_string(), value.to_string());
        Ok(())
    }
}
