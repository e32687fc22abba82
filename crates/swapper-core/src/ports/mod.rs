//! Ports - 外部システムへの抽象化レイヤー
//!
//! Decider が触れる外部世界はすべてここの trait を経由します。
//! ホスト（スケジューラ）が実装を注入し、テストでは fake を注入します。
//!
//! - **StateStore**: `lastTimestamp` を保持する key-value ストア
//! - **SecretProvider**: `ZEROX_API_KEY` などのシークレット
//! - **ChainReader**: ブロック時刻と ERC-20 残高の読み取り
//! - **QuoteSource**: オフチェーンのスワップ見積もり API
//! - **Decider**: 上記を組み合わせて Decision を返す入口

pub mod chain;
pub mod decider;
pub mod quote_source;
pub mod secrets;
pub mod state_store;

pub use self::chain::{ChainError, ChainReader};
pub use self::decider::Decider;
pub use self::quote_source::{QuoteError, QuoteSource};
pub use self::secrets::SecretProvider;
pub use self::state_store::{StateStore, StoreError};
