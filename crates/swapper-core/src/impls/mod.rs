//! Impls - ports の実装
//!
//! # 含まれる実装
//! - **InMemoryStateStore**: テスト・開発用の key-value ストア
//! - **JsonFileStateStore**: CLI 用。実行間で `lastTimestamp` を JSON ファイルに保存
//! - **StaticSecrets / EnvSecrets**: シークレット
//! - **JsonRpcChainReader**: Ethereum JSON-RPC（`eth_getBlockByNumber`, `eth_call`）
//! - **ZeroExQuoteClient**: 0x `/swap/v1/quote`

pub mod file_state;
pub mod inmem_state;
pub mod json_rpc;
pub mod secrets;
pub mod zeroex;

pub use self::file_state::JsonFileStateStore;
pub use self::inmem_state::InMemoryStateStore;
pub use self::json_rpc::JsonRpcChainReader;
pub use self::secrets::{EnvSecrets, StaticSecrets};
pub use self::zeroex::ZeroExQuoteClient;
