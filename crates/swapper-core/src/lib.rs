//! swapper-core
//!
//! Eligibility check and payload builder for the scheduled MIM → SPELL swap.
//!
//! # モジュール構成
//! - **domain**: ドメインモデル（amount, checkpoint, quote, call, decision, errors）
//! - **ports**: 抽象化レイヤー（StateStore, SecretProvider, ChainReader, QuoteSource, Decider）
//! - **app**: ゲート列を実行する SwapDecider
//! - **impls**: ports の実装（in-memory / JSON file / JSON-RPC / 0x API）
//! - **config**: user args と固定の SwapPolicy
//! - **abi**: Solidity インターフェース定義

pub mod abi;
pub mod app;
pub mod config;
pub mod domain;
pub mod impls;
pub mod ports;

#[cfg(test)]
pub(crate) mod testing;

pub use app::{SwapDecider, SwapPorts};
pub use config::{SwapPolicy, SwapperConfig};
pub use domain::{Decision, EncodedCall, ExecResult, FatalError, SkipReason};
pub use ports::Decider;
