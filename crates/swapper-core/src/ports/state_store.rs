//! StateStore port - ホスト管理の key-value ストア
//!
//! 値はすべて文字列。使うキーは `lastTimestamp` のみ。

use async_trait::async_trait;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("state io: {0}")]
    Io(#[from] std::io::Error),

    #[error("state encoding: {0}")]
    Encoding(#[from] serde_json::Error),
}

/// Persistent string key-value storage owned by the host.
///
/// Read once and written at most once per run; no locking is expected
/// because runs never overlap.
#[async_trait]
pub trait StateStore: Send + Sync {
    async fn get(&self, key: &str) -> Result<Option<String>, StoreError>;

    async fn set(&self, key: &str, value: String) -> Result<(), StoreError>;
}
