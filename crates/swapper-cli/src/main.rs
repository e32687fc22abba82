use std::sync::Arc;
use std::time::Duration;

use anyhow::{Context, Result, bail};
use tracing_subscriber::EnvFilter;

use swapper_core::impls::{EnvSecrets, JsonFileStateStore, JsonRpcChainReader, ZeroExQuoteClient};
use swapper_core::{Decider, SwapDecider, SwapPorts, SwapperConfig};

const DEFAULT_STATE_PATH: &str = ".swapper-state.json";
const HTTP_TIMEOUT: Duration = Duration::from_secs(30);

/// One scheduled run: evaluate the gates once and print the host result.
///
/// Usage: `swapper-cli <user-args.json>`
///
/// Environment:
/// - `SWAPPER_RPC_URL` (required): Ethereum JSON-RPC endpoint
/// - `SWAPPER_STATE_PATH`: checkpoint file, default `.swapper-state.json`
/// - `ZEROX_API_KEY`: aggregator API key
/// - `RUST_LOG`: log filter, default `info`
#[tokio::main]
async fn main() -> Result<()> {
    // logs go to stderr, stdout carries the result json
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    let Some(args_path) = std::env::args().nth(1) else {
        bail!("usage: swapper-cli <user-args.json>");
    };
    let raw = std::fs::read_to_string(&args_path)
        .with_context(|| format!("reading user args from {args_path}"))?;
    let config = SwapperConfig::from_json(&raw)?;

    let rpc_url = std::env::var("SWAPPER_RPC_URL").context("SWAPPER_RPC_URL is not set")?;
    let state_path =
        std::env::var("SWAPPER_STATE_PATH").unwrap_or_else(|_| DEFAULT_STATE_PATH.to_string());

    let state = Arc::new(JsonFileStateStore::new(state_path));
    tracing::debug!(path = %state.path().display(), "checkpoint file");

    let ports = SwapPorts {
        state,
        secrets: Arc::new(EnvSecrets),
        chain: Arc::new(JsonRpcChainReader::new(rpc_url, HTTP_TIMEOUT)?),
        quotes: Arc::new(ZeroExQuoteClient::new(
            config.zero_ex_api_base_url.clone(),
            HTTP_TIMEOUT,
        )?),
    };
    let decider = SwapDecider::new(config, ports);
    let policy = decider.policy();
    tracing::info!(
        exec_address = %decider.config().exec_address,
        sell_token = %policy.sell_token,
        buy_token = %policy.buy_token,
        min_interval_secs = policy.min_interval_secs,
        "starting swap check"
    );

    let result = decider
        .decide()
        .await
        .into_exec_result()
        .context("swap check aborted")?;

    tracing::info!(can_exec = result.can_exec, "run finished");
    println!("{}", serde_json::to_string_pretty(&result)?);
    Ok(())
}
