use ::redis::{AsyncCommands, aio::MultiplexedConnection};
use snowfolio_core::HistoryEntry;

use crate::{HistoryStore, error::StoreError};

const TRACKED_SET_KEY: &str = "users";

fn history_key(address: &str) -> String {
    format!("{address}-history")
}

/// Redis-backed store: tracked addresses live in one set, each account's
/// snapshots in its own list. Append ordering relies on `RPUSH` being
/// atomic per key.
#[derive(Clone)]
pub struct RedisHistoryStore {
    conn: MultiplexedConnection,
}

impl RedisHistoryStore {
    /// Connect once at startup; the multiplexed connection is cheap to
    /// clone and shared by every caller.
    pub async fn connect(redis_url: &str) -> Result<Self, StoreError> {
        let client = ::redis::Client::open(redis_url)?;
        let conn = client.get_multiplexed_async_connection().await?;

        tracing::info!("🗃️ Connected to redis");
        Ok(Self { conn })
    }
}

#[async_trait::async_trait]
impl HistoryStore for RedisHistoryStore {
    async fn is_tracked(&self, address: &str) -> Result<bool, StoreError> {
        let mut conn = self.conn.clone();
        let tracked: bool = conn.sismember(TRACKED_SET_KEY, address).await?;
        Ok(tracked)
    }

    async fn tracked_addresses(&self) -> Result<Vec<String>, StoreError> {
        let mut conn = self.conn.clone();
        let addresses: Vec<String> = conn.smembers(TRACKED_SET_KEY).await?;
        Ok(addresses)
    }

    async fn add_tracked(&self, address: &str) -> Result<(), StoreError> {
        let mut conn = self.conn.clone();
        let _: () = conn.sadd(TRACKED_SET_KEY, address).await?;
        Ok(())
    }

    async fn remove_tracked(&self, address: &str) -> Result<(), StoreError> {
        let mut conn = self.conn.clone();
        let _: () = conn.srem(TRACKED_SET_KEY, address).await?;
        Ok(())
    }

    async fn append_history(&self, address: &str, entry: &HistoryEntry) -> Result<(), StoreError> {
        let payload = serde_json::to_string(entry)?;
        let mut conn = self.conn.clone();
        let _: () = conn.rpush(history_key(address), payload).await?;
        Ok(())
    }

    async fn read_history(&self, address: &str) -> Result<Vec<HistoryEntry>, StoreError> {
        let mut conn = self.conn.clone();
        let raw: Vec<String> = conn.lrange(history_key(address), 0, -1).await?;
        let entries = raw
            .iter()
            .map(|payload| serde_json::from_str(payload))
            .collect::<Result<Vec<HistoryEntry>, _>>()?;
        Ok(entries)
    }

    async fn delete_history(&self, address: &str) -> Result<(), StoreError> {
        let mut conn = self.conn.clone();
        let _: () = conn.del(history_key(address)).await?;
        Ok(())
    }
}
