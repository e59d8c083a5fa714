use std::collections::{HashMap, HashSet};
use std::sync::RwLock;

use snowfolio_core::HistoryEntry;

use crate::{HistoryStore, error::StoreError};

/// In-memory store for tests and local runs without a redis server.
/// Mirrors the redis backend's semantics: unordered tracked set, ordered
/// append log per address.
#[derive(Default)]
pub struct MemoryHistoryStore {
    inner: RwLock<Inner>,
}

#[derive(Default)]
struct Inner {
    tracked: HashSet<String>,
    history: HashMap<String, Vec<HistoryEntry>>,
}

impl MemoryHistoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait::async_trait]
impl HistoryStore for MemoryHistoryStore {
    async fn is_tracked(&self, address: &str) -> Result<bool, StoreError> {
        let inner = self.inner.read().expect("memory store lock poisoned");
        Ok(inner.tracked.contains(address))
    }

    async fn tracked_addresses(&self) -> Result<Vec<String>, StoreError> {
        let inner = self.inner.read().expect("memory store lock poisoned");
        Ok(inner.tracked.iter().cloned().collect())
    }

    async fn add_tracked(&self, address: &str) -> Result<(), StoreError> {
        let mut inner = self.inner.write().expect("memory store lock poisoned");
        inner.tracked.insert(address.to_string());
        Ok(())
    }

    async fn remove_tracked(&self, address: &str) -> Result<(), StoreError> {
        let mut inner = self.inner.write().expect("memory store lock poisoned");
        inner.tracked.remove(address);
        Ok(())
    }

    async fn append_history(&self, address: &str, entry: &HistoryEntry) -> Result<(), StoreError> {
        let mut inner = self.inner.write().expect("memory store lock poisoned");
        inner
            .history
            .entry(address.to_string())
            .or_default()
            .push(entry.clone());
        Ok(())
    }

    async fn read_history(&self, address: &str) -> Result<Vec<HistoryEntry>, StoreError> {
        let inner = self.inner.read().expect("memory store lock poisoned");
        Ok(inner.history.get(address).cloned().unwrap_or_default())
    }

    async fn delete_history(&self, address: &str) -> Result<(), StoreError> {
        let mut inner = self.inner.write().expect("memory store lock poisoned");
        inner.history.remove(address);
        Ok(())
    }
}
