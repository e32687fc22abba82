//! Token amounts.
//!
//! All balances and quotes are 18-decimal ERC-20 amounts held in `U256`.
//! Thresholds are written in whole tokens and scaled with [`tokens`].

use alloy_primitives::U256;
use alloy_primitives::utils::format_ether;

/// Decimals of both MIM and SPELL.
pub const TOKEN_DECIMALS: u8 = 18;

/// `whole` tokens expressed in base units (`whole * 10^18`).
pub fn tokens(whole: u64) -> U256 {
    U256::from(whole) * U256::from(10u64).pow(U256::from(TOKEN_DECIMALS))
}

/// Human readable amount for logs, e.g. `"500.000000000000000000"`.
pub fn format_tokens(amount: U256) -> String {
    format_ether(amount)
}
