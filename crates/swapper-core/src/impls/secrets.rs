//! StaticSecrets / EnvSecrets - SecretProvider の実装

use std::collections::HashMap;

use async_trait::async_trait;

use crate::ports::SecretProvider;

/// Fixed set of secrets, e.g. injected by a host runtime.
#[derive(Debug, Default, Clone)]
pub struct StaticSecrets {
    values: HashMap<String, String>,
}

impl StaticSecrets {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.values.insert(name.into(), value.into());
        self
    }
}

#[async_trait]
impl SecretProvider for StaticSecrets {
    async fn get(&self, name: &str) -> Option<String> {
        self.values.get(name).cloned()
    }
}

/// Reads secrets from process environment variables of the same name.
#[derive(Debug, Default, Clone, Copy)]
pub struct EnvSecrets;

#[async_trait]
impl SecretProvider for EnvSecrets {
    async fn get(&self, name: &str) -> Option<String> {
        std::env::var(name).ok()
    }
}
