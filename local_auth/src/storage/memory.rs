use async_trait::async_trait;
use std::collections::HashMap;

use super::errors::StorageError;
use super::types::{InMemoryPreferenceStore, PreferenceStore};

impl InMemoryPreferenceStore {
    pub(crate) fn new() -> Self {
        tracing::info!("Creating new in-memory preference store");
        Self {
            entry: HashMap::new(),
        }
    }
}

#[async_trait]
impl PreferenceStore for InMemoryPreferenceStore {
    async fn init(&self) -> Result<(), StorageError> {
        Ok(()) // Nothing to initialize for in-memory store
    }

    async fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        Ok(self.entry.get(key).cloned())
    }

    async fn put(&mut self, key: &str, value: &str) -> Result<(), StorageError> {
        self.entry.insert(key.to_string(), value.to_string());
        Ok(())
    }
}
