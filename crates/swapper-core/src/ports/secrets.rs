//! SecretProvider port - デプロイ側が管理するシークレット
//!
//! 使う名前は `ZEROX_API_KEY` のみ。

use async_trait::async_trait;

/// Named secrets supplied by the deployment.
#[async_trait]
pub trait SecretProvider: Send + Sync {
    /// `None` when the secret is not configured.
    async fn get(&self, name: &str) -> Option<String>;
}
