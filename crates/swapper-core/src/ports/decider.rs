//! Decider port - 1 回の実行で Decision を 1 つ返す入口
//!
//! スケジューラは `Decider` だけを知っていればよく、
//! 中のゲート構成や外部ポートは実装側に閉じ込めます。

use async_trait::async_trait;

use crate::domain::Decision;

/// Produces exactly one [`Decision`] per invocation.
///
/// Implementations must not retry; the scheduler owns retries and timeouts.
#[async_trait]
pub trait Decider: Send + Sync {
    async fn decide(&self) -> Decision;
}
