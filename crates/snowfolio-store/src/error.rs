use thiserror::Error;

#[derive(Error, Debug)]
pub enum StoreError {
    #[error("redis command failed: {0}")]
    Redis(#[from] redis::RedisError),

    #[error("history entry serialization failed: {0}")]
    Serde(#[from] serde_json::Error),
}
