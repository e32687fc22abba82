//! JsonRpcChainReader - Ethereum JSON-RPC over HTTP.

use std::str::FromStr;
use std::sync::atomic::{AtomicU64, Ordering};
use std::time::Duration;

use alloy_primitives::{Address, Bytes, U256};
use alloy_sol_types::SolCall;
use async_trait::async_trait;
use serde::Deserialize;
use serde_json::{Value, json};
use tracing::debug;

use crate::abi::IERC20;
use crate::ports::{ChainError, ChainReader};

#[derive(Debug, Deserialize)]
struct RpcResponse {
    #[serde(default)]
    result: Option<Value>,
    #[serde(default)]
    error: Option<RpcErrorBody>,
}

#[derive(Debug, Deserialize)]
struct RpcErrorBody {
    code: i64,
    message: String,
}

pub struct JsonRpcChainReader {
    client: reqwest::Client,
    url: String,
    next_id: AtomicU64,
}

impl JsonRpcChainReader {
    pub fn new(url: impl Into<String>, timeout: Duration) -> Result<Self, ChainError> {
        let client = reqwest::Client::builder().timeout(timeout).build()?;
        Ok(Self::with_client(client, url))
    }

    pub fn with_client(client: reqwest::Client, url: impl Into<String>) -> Self {
        Self {
            client,
            url: url.into(),
            next_id: AtomicU64::new(1),
        }
    }

    async fn call(&self, method: &'static str, params: Value) -> Result<Value, ChainError> {
        let id = self.next_id.fetch_add(1, Ordering::Relaxed);
        debug!(method, id, "rpc call");
        let body = json!({
            "jsonrpc": "2.0",
            "id": id,
            "method": method,
            "params": params,
        });
        let response: RpcResponse = self
            .client
            .post(&self.url)
            .json(&body)
            .send()
            .await?
            .error_for_status()?
            .json()
            .await?;
        unwrap_result(method, response)
    }
}

fn unwrap_result(method: &'static str, response: RpcResponse) -> Result<Value, ChainError> {
    if let Some(error) = response.error {
        return Err(ChainError::Rpc {
            code: error.code,
            message: error.message,
        });
    }
    match response.result {
        Some(Value::Null) | None => Err(ChainError::MissingResult { method }),
        Some(result) => Ok(result),
    }
}

fn parse_block_timestamp(block: &Value) -> Result<u64, ChainError> {
    const METHOD: &str = "eth_getBlockByNumber";
    let raw = block
        .get("timestamp")
        .and_then(Value::as_str)
        .ok_or(ChainError::MissingResult { method: METHOD })?;
    let digits = raw.strip_prefix("0x").unwrap_or(raw);
    u64::from_str_radix(digits, 16).map_err(|e| ChainError::Decode {
        method: METHOD,
        reason: format!("timestamp {raw:?}: {e}"),
    })
}

fn decode_balance(result: &Value) -> Result<U256, ChainError> {
    const METHOD: &str = "eth_call";
    let decode_err = |reason: String| ChainError::Decode {
        method: METHOD,
        reason,
    };
    let raw = result
        .as_str()
        .ok_or_else(|| decode_err(format!("expected hex string, got {result}")))?;
    let bytes = Bytes::from_str(raw).map_err(|e| decode_err(e.to_string()))?;
    IERC20::balanceOfCall::abi_decode_returns(&bytes, true)
        .map(|ret| ret.balance)
        .map_err(|e| decode_err(e.to_string()))
}

#[async_trait]
impl ChainReader for JsonRpcChainReader {
    async fn latest_block_timestamp(&self) -> Result<u64, ChainError> {
        let block = self
            .call("eth_getBlockByNumber", json!(["latest", false]))
            .await?;
        parse_block_timestamp(&block)
    }

    async fn balance_of(&self, token: Address, owner: Address) -> Result<U256, ChainError> {
        let data = Bytes::from(IERC20::balanceOfCall { owner }.abi_encode());
        let result = self
            .call("eth_call", json!([{ "to": token, "data": data }, "latest"]))
            .await?;
        decode_balance(&result)
    }
}
