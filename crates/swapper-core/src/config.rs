//! Configuration: per-deployment user args plus the fixed swap policy.

use alloy_primitives::{Address, U256, address};
use serde::Deserialize;
use thiserror::Error;

use crate::domain::tokens;

/// MIM on Ethereum mainnet.
pub const MIM: Address = address!("99D8a9C45b2ecA8864373A26D1459e3Dff1e17F3");

/// SPELL on Ethereum mainnet.
pub const SPELL: Address = address!("090185f2135308BaD17527004364eBcC2D37e5F6");

/// Secret holding the aggregator API key.
pub const ZEROX_API_KEY: &str = "ZEROX_API_KEY";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid user args: {0}")]
    Json(#[from] serde_json::Error),

    #[error("zeroExApiBaseUrl must not be empty")]
    EmptyBaseUrl,
}

/// User args supplied by the deployment.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SwapperConfig {
    /// Swapper contract: holds the MIM and receives the encoded call.
    pub exec_address: Address,

    /// e.g. `https://api.0x.org`
    pub zero_ex_api_base_url: String,
}

impl SwapperConfig {
    pub fn new(exec_address: Address, zero_ex_api_base_url: impl Into<String>) -> Self {
        Self {
            exec_address,
            zero_ex_api_base_url: zero_ex_api_base_url.into(),
        }
    }

    /// Parse a user-args JSON document.
    pub fn from_json(raw: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(raw)?;
        if config.zero_ex_api_base_url.trim().is_empty() {
            return Err(ConfigError::EmptyBaseUrl);
        }
        Ok(config)
    }
}

/// Thresholds and token pair. Fixed per deployment of this binary.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SwapPolicy {
    pub sell_token: Address,
    pub buy_token: Address,

    /// Below this balance there is nothing worth swapping.
    pub min_sell_balance: U256,

    /// Upper bound on a single swap.
    pub max_sell_amount: U256,

    /// Quotes returning less than this are rejected.
    pub min_buy_amount: U256,

    /// Minimum seconds between two executions.
    pub min_interval_secs: u64,
}

impl SwapPolicy {
    /// Amount to sell for a given balance: `min(balance, max_sell_amount)`.
    pub fn sell_amount_for(&self, balance: U256) -> U256 {
        balance.min(self.max_sell_amount)
    }
}

impl Default for SwapPolicy {
    fn default() -> Self {
        Self {
            sell_token: MIM,
            buy_token: SPELL,
            min_sell_balance: tokens(100),
            max_sell_amount: tokens(10_000),
            min_buy_amount: tokens(100_000),
            min_interval_secs: 3_600,
        }
    }
}
