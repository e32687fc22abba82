//! ChainReader port - read-only view of the chain.

use alloy_primitives::{Address, U256};
use async_trait::async_trait;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ChainError {
    #[error("rpc transport: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("rpc error {code}: {message}")]
    Rpc { code: i64, message: String },

    #[error("{method} returned no result")]
    MissingResult { method: &'static str },

    #[error("failed to decode {method} result: {reason}")]
    Decode {
        method: &'static str,
        reason: String,
    },
}

/// Reads needed by the decider. Everything is evaluated at the latest block.
#[async_trait]
pub trait ChainReader: Send + Sync {
    /// Timestamp (Unix seconds) of the latest block.
    async fn latest_block_timestamp(&self) -> Result<u64, ChainError>;

    /// ERC-20 `balanceOf(owner)` on `token`.
    async fn balance_of(&self, token: Address, owner: Address) -> Result<U256, ChainError>;
}
