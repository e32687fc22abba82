//! App - アプリケーション層
//!
//! ports を組み合わせて 1 回分の判定ロジックを実装します。
//!
//! # 主要コンポーネント
//! - **SwapDecider**: ゲート列（secret → 時間 → 残高 → 見積もり）を順に評価し Decision を返す
//! - **SwapPorts**: Decider に注入する外部ポートの束

pub mod decider;

pub use self::decider::{SwapDecider, SwapPorts};
