//! EncodedCall: the `(to, data)` pair handed to the executor.

use alloy_primitives::{Address, Bytes};
use alloy_sol_types::SolCall;
use serde::{Deserialize, Serialize};

use crate::abi::ISpellSwapper;

/// An opaque instruction for the external executor to submit on-chain.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EncodedCall {
    pub to: Address,
    pub data: Bytes,
}

impl EncodedCall {
    pub fn new(to: Address, data: Bytes) -> Self {
        Self { to, data }
    }

    /// `swapMimForSpell1Inch(router, data)` on the swapper contract at `swapper`.
    pub fn swap_mim_for_spell(swapper: Address, router: Address, data: Bytes) -> Self {
        let call = ISpellSwapper::swapMimForSpell1InchCall { router, data };
        Self::new(swapper, Bytes::from(call.abi_encode()))
    }
}
