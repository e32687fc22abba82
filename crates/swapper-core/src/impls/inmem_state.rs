//! InMemoryStateStore - プロセス内の key-value ストア

use std::collections::HashMap;

use async_trait::async_trait;
use tokio::sync::Mutex;

use crate::ports::{StateStore, StoreError};

/// Keeps entries for the lifetime of the process.
#[derive(Debug, Default)]
pub struct InMemoryStateStore {
    entries: Mutex<HashMap<String, String>>,
}

impl InMemoryStateStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Seed an entry before handing the store to a decider.
    pub fn with_entry(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.entries.get_mut().insert(key.into(), value.into());
        self
    }

    pub async fn snapshot(&self) -> HashMap<String, String> {
        self.entries.lock().await.clone()
    }
}

#[async_trait]
impl StateStore for InMemoryStateStore {
    async fn get(&self, key: &str) -> Result<Option<String>, StoreError> {
        Ok(self.entries.lock().await.get(key).cloned())
    }

    async fn set(&self, key: &str, value: String) -> Result<(), StoreError> {
        self.entries.lock().await.insert(key.to_string(), value);
        Ok(())
    }
}
