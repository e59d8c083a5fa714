pub mod error;
pub mod memory;
pub mod redis;

pub use error::StoreError;
pub use memory::MemoryHistoryStore;
pub use self::redis::RedisHistoryStore;

use snowfolio_core::HistoryEntry;

/// Narrow persistence interface for tracked accounts and their snapshots.
///
/// Backends must provide set membership over tracked addresses and an
/// ordered append/read log per address; nothing else is assumed.
#[async_trait::async_trait]
pub trait HistoryStore: Send + Sync {
    async fn is_tracked(&self, address: &str) -> Result<bool, StoreError>;

    async fn tracked_addresses(&self) -> Result<Vec<String>, StoreError>;

    async fn add_tracked(&self, address: &str) -> Result<(), StoreError>;

    async fn remove_tracked(&self, address: &str) -> Result<(), StoreError>;

    async fn append_history(&self, address: &str, entry: &HistoryEntry) -> Result<(), StoreError>;

    async fn read_history(&self, address: &str) -> Result<Vec<HistoryEntry>, StoreError>;

    async fn delete_history(&self, address: &str) -> Result<(), StoreError>;
}
