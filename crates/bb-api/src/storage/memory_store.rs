use crate::{ApiError, ApiResult, KeyValueStore};

use std::collections::BTreeMap;
use std::sync::Mutex;

/// Process-local store, used by tests and one-shot tooling
#[derive(Debug, Default)]
pub struct MemoryStore {
    entries: Mutex<BTreeMap<String, String>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl KeyValueStore for MemoryStore {
    fn get(&self, key: &str) -> ApiResult<Option<String>> {
        let entries = self
            .entries
            .lock()
            .map_err(|_| ApiError::storage("memory store lock poisoned"))?;
        Ok(entries.get(key).cloned())
    }

    fn write_batch(&self, batch: &[(&str, Option<String>)]) -> ApiResult<()> {
        let mut entries = self
            .entries
            .lock()
            .map_err(|_| ApiError::storage("memory store lock poisoned"))?;

        for (key, value) in batch {
            match value {
                Some(value) => entries.insert(key.to_string(), value.clone()),
                None => entries.remove(*key),
            };
        }
        Ok(())
    }
}
