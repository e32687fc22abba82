//! SwapDecider - decides whether to swap the swapper's MIM for SPELL.
//!
//! Gates run strictly in order and the first failing one wins:
//! 1. checkpoint read
//! 2. API key present
//! 3. minimum interval elapsed
//! 4. MIM balance readable and above the minimum
//! 5. quote fetched, well-formed, and above the minimum output
//!
//! Only when every gate passes is the checkpoint moved to the current block
//! time. The write happens before the call is submitted, so a call that later
//! fails on-chain still consumes the interval.

use std::sync::Arc;

use async_trait::async_trait;
use tracing::{debug, info, warn};

use crate::config::{SwapPolicy, SwapperConfig, ZEROX_API_KEY};
use crate::domain::{
    Checkpoint, Decision, EncodedCall, FatalError, LAST_TIMESTAMP_KEY, Quote, QuoteRequest,
    SkipReason, format_tokens,
};
use crate::ports::{ChainReader, Decider, QuoteSource, SecretProvider, StateStore};

/// External collaborators injected by the host.
#[derive(Clone)]
pub struct SwapPorts {
    pub state: Arc<dyn StateStore>,
    pub secrets: Arc<dyn SecretProvider>,
    pub chain: Arc<dyn ChainReader>,
    pub quotes: Arc<dyn QuoteSource>,
}

pub struct SwapDecider {
    config: SwapperConfig,
    policy: SwapPolicy,
    ports: SwapPorts,
}

impl SwapDecider {
    pub fn new(config: SwapperConfig, ports: SwapPorts) -> Self {
        Self {
            config,
            policy: SwapPolicy::default(),
            ports,
        }
    }

    pub fn with_policy(mut self, policy: SwapPolicy) -> Self {
        self.policy = policy;
        self
    }

    pub fn config(&self) -> &SwapperConfig {
        &self.config
    }

    pub fn policy(&self) -> &SwapPolicy {
        &self.policy
    }

    /// Ok(decision) for skip/execute, Err for anything that aborts the run.
    async fn run_gates(&self) -> Result<Decision, FatalError> {
        let raw = self.ports.state.get(LAST_TIMESTAMP_KEY).await?;
        let checkpoint = Checkpoint::parse(raw.as_deref());
        if let Some(raw) = raw.as_deref().filter(|r| *r != checkpoint.encode()) {
            warn!(
                stored = raw,
                read_as = checkpoint.last_timestamp(),
                "non-canonical checkpoint"
            );
        }

        let Some(api_key) = self
            .ports
            .secrets
            .get(ZEROX_API_KEY)
            .await
            .filter(|key| !key.is_empty())
        else {
            return Ok(Decision::Skip(SkipReason::MissingApiKey));
        };

        let now = self.ports.chain.latest_block_timestamp().await?;
        if !checkpoint.is_due(now, self.policy.min_interval_secs) {
            debug!(
                now,
                last_timestamp = checkpoint.last_timestamp(),
                "interval not elapsed"
            );
            return Ok(Decision::Skip(SkipReason::TimeNotElapsed));
        }

        let balance = match self
            .ports
            .chain
            .balance_of(self.policy.sell_token, self.config.exec_address)
            .await
        {
            Ok(balance) => balance,
            Err(error) => {
                warn!(%error, "balance read failed");
                return Ok(Decision::Skip(SkipReason::RpcCallFailed));
            }
        };
        if balance < self.policy.min_sell_balance {
            debug!(balance = %format_tokens(balance), "balance below minimum");
            return Ok(Decision::Skip(SkipReason::InsufficientBalance));
        }
        let sell_amount = self.policy.sell_amount_for(balance);

        let request = QuoteRequest {
            sell_token: self.policy.sell_token,
            buy_token: self.policy.buy_token,
            sell_amount,
            api_key,
        };
        let raw_quote = self
            .ports
            .quotes
            .fetch_quote(&request)
            .await?
            .ok_or(FatalError::EmptyQuote)?;
        let quote = Quote::try_from(raw_quote)?;

        info!(
            sell = %format_tokens(sell_amount),
            buy = %format_tokens(quote.buy_amount),
            router = %quote.to,
            "quote received"
        );

        if quote.buy_amount < self.policy.min_buy_amount {
            return Ok(Decision::Skip(SkipReason::InsufficientQuote));
        }

        self.ports
            .state
            .set(LAST_TIMESTAMP_KEY, Checkpoint::new(now).encode())
            .await?;

        Ok(Decision::Execute(EncodedCall::swap_mim_for_spell(
            self.config.exec_address,
            quote.to,
            quote.data,
        )))
    }
}

#[async_trait]
impl Decider for SwapDecider {
    async fn decide(&self) -> Decision {
        match self.run_gates().await {
            Ok(decision) => {
                if let Decision::Skip(reason) = &decision {
                    info!(%reason, "skipping");
                }
                decision
            }
            Err(error) => {
                warn!(%error, "run aborted");
                Decision::Fatal(error)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::abi::ISpellSwapper;
    use crate::domain::{QuoteResponse, QuoteValidationError, tokens};
    use crate::impls::{InMemoryStateStore, StaticSecrets};
    use crate::testing::{FakeChain, FakeQuotes};
    use alloy_primitives::{Address, U256, address, bytes};
    use alloy_sol_types::SolCall;
    use rstest::rstest;

    const EXEC: Address = address!("dFE1a5b757523Ca6F7f049ac02151808E6A52111");
    const ROUTER: Address = address!("def1c0ded9bec7f1a1670819833240f027b25eff");

    struct Harness {
        state: Arc<InMemoryStateStore>,
        chain: Arc<FakeChain>,
        quotes: Arc<FakeQuotes>,
        decider: SwapDecider,
    }

    fn quote(buy_whole: u64) -> QuoteResponse {
        QuoteResponse {
            buy_amount: Some(tokens(buy_whole).to_string()),
            data: Some("0x0abc".to_string()),
            to: Some(format!("{ROUTER}")),
        }
    }

    fn harness(
        state: InMemoryStateStore,
        secrets: StaticSecrets,
        chain: FakeChain,
        quotes: FakeQuotes,
    ) -> Harness {
        let state = Arc::new(state);
        let chain = Arc::new(chain);
        let quotes = Arc::new(quotes);
        let ports = SwapPorts {
            state: state.clone(),
            secrets: Arc::new(secrets),
            chain: chain.clone(),
            quotes: quotes.clone(),
        };
        let decider = SwapDecider::new(SwapperConfig::new(EXEC, "https://api.0x.org"), ports);
        Harness {
            state,
            chain,
            quotes,
            decider,
        }
    }

    fn with_key() -> StaticSecrets {
        StaticSecrets::new().with(ZEROX_API_KEY, "key")
    }

    /// lastTimestamp=0, now=10000, balance=500, quote=200000.
    fn happy() -> Harness {
        harness(
            InMemoryStateStore::new(),
            with_key(),
            FakeChain::new(10_000, tokens(500)),
            FakeQuotes::returning(quote(200_000)),
        )
    }

    async fn stored_checkpoint(h: &Harness) -> Option<String> {
        h.state.get(LAST_TIMESTAMP_KEY).await.unwrap()
    }

    #[tokio::test]
    async fn success_encodes_swap_and_moves_checkpoint() {
        let h = happy();

        let decision = h.decider.decide().await;

        let Decision::Execute(call) = decision else {
            panic!("expected execute");
        };
        assert_eq!(call.to, EXEC);
        let decoded = ISpellSwapper::swapMimForSpell1InchCall::abi_decode(&call.data, true).unwrap();
        assert_eq!(decoded.router, ROUTER);
        assert_eq!(decoded.data, bytes!("0abc"));
        assert_eq!(stored_checkpoint(&h).await.as_deref(), Some("10000"));
    }

    #[tokio::test]
    async fn quote_request_carries_pair_amount_and_key() {
        let h = happy();

        h.decider.decide().await;

        let requests = h.quotes.requests();
        assert_eq!(requests.len(), 1);
        let request = &requests[0];
        assert_eq!(request.sell_token, crate::config::MIM);
        assert_eq!(request.buy_token, crate::config::SPELL);
        assert_eq!(request.sell_amount, tokens(500));
        assert_eq!(request.api_key, "key");
    }

    #[tokio::test]
    async fn rerun_in_same_block_is_rate_limited() {
        let h = happy();

        assert!(h.decider.decide().await.is_execute());
        let again = h.decider.decide().await;

        assert_eq!(again.skip_reason(), Some(SkipReason::TimeNotElapsed));
        assert_eq!(stored_checkpoint(&h).await.as_deref(), Some("10000"));
    }

    #[rstest]
    #[case::absent(None)]
    #[case::empty(Some(""))]
    #[tokio::test]
    async fn missing_api_key_skips_without_side_effects(#[case] key: Option<&str>) {
        let secrets = match key {
            Some(k) => StaticSecrets::new().with(ZEROX_API_KEY, k),
            None => StaticSecrets::new(),
        };
        let h = harness(
            InMemoryStateStore::new(),
            secrets,
            FakeChain::new(10_000, tokens(500)),
            FakeQuotes::returning(quote(200_000)),
        );

        let decision = h.decider.decide().await;

        assert_eq!(decision.skip_reason(), Some(SkipReason::MissingApiKey));
        assert_eq!(h.chain.calls(), 0);
        assert!(h.quotes.requests().is_empty());
        assert_eq!(stored_checkpoint(&h).await, None);
    }

    #[rstest]
    #[case::same_time(10_000)]
    #[case::one_second_short(13_599)]
    #[tokio::test]
    async fn interval_not_elapsed_skips_and_keeps_checkpoint(#[case] now: u64) {
        let h = harness(
            InMemoryStateStore::new().with_entry(LAST_TIMESTAMP_KEY, "10000"),
            with_key(),
            FakeChain::new(now, tokens(500)),
            FakeQuotes::returning(quote(200_000)),
        );

        let decision = h.decider.decide().await;

        assert_eq!(decision.skip_reason(), Some(SkipReason::TimeNotElapsed));
        assert_eq!(stored_checkpoint(&h).await.as_deref(), Some("10000"));
        assert!(h.quotes.requests().is_empty());
    }

    #[tokio::test]
    async fn interval_exactly_elapsed_executes() {
        let h = harness(
            InMemoryStateStore::new().with_entry(LAST_TIMESTAMP_KEY, "10000"),
            with_key(),
            FakeChain::new(13_600, tokens(500)),
            FakeQuotes::returning(quote(200_000)),
        );

        assert!(h.decider.decide().await.is_execute());
        assert_eq!(stored_checkpoint(&h).await.as_deref(), Some("13600"));
    }

    #[rstest]
    #[case::empty(U256::ZERO)]
    #[case::one_wei_short(tokens(100) - U256::from(1u64))]
    #[case::ninety_nine(tokens(99))]
    #[tokio::test]
    async fn low_balance_skips(#[case] balance: U256) {
        let h = harness(
            InMemoryStateStore::new(),
            with_key(),
            FakeChain::new(10_000, balance),
            FakeQuotes::returning(quote(200_000)),
        );

        let decision = h.decider.decide().await;

        assert_eq!(decision.skip_reason(), Some(SkipReason::InsufficientBalance));
        assert!(h.quotes.requests().is_empty());
    }

    #[tokio::test]
    async fn balance_read_failure_is_a_skip() {
        let h = harness(
            InMemoryStateStore::new(),
            with_key(),
            FakeChain::new(10_000, tokens(500)).failing_balance(),
            FakeQuotes::returning(quote(200_000)),
        );

        let decision = h.decider.decide().await;

        assert_eq!(decision.skip_reason(), Some(SkipReason::RpcCallFailed));
    }

    #[tokio::test]
    async fn block_read_failure_is_fatal() {
        let h = harness(
            InMemoryStateStore::new(),
            with_key(),
            FakeChain::new(10_000, tokens(500)).failing_block(),
            FakeQuotes::returning(quote(200_000)),
        );

        let decision = h.decider.decide().await;

        assert!(matches!(decision, Decision::Fatal(FatalError::Chain(_))));
    }

    #[rstest]
    #[case::minimum(100, 100)]
    #[case::below_cap(500, 500)]
    #[case::at_cap(10_000, 10_000)]
    #[case::above_cap(1_000_000, 10_000)]
    #[tokio::test]
    async fn sell_amount_is_balance_capped(#[case] balance: u64, #[case] expected: u64) {
        let h = harness(
            InMemoryStateStore::new(),
            with_key(),
            FakeChain::new(10_000, tokens(balance)),
            FakeQuotes::returning(quote(200_000)),
        );

        h.decider.decide().await;

        assert_eq!(h.quotes.requests()[0].sell_amount, tokens(expected));
    }

    #[rstest]
    #[case::zero(0)]
    #[case::just_below(99_999)]
    #[tokio::test]
    async fn thin_quote_skips_and_keeps_checkpoint(#[case] buy: u64) {
        let h = harness(
            InMemoryStateStore::new().with_entry(LAST_TIMESTAMP_KEY, "1"),
            with_key(),
            FakeChain::new(10_000, tokens(500)),
            FakeQuotes::returning(quote(buy)),
        );

        let decision = h.decider.decide().await;

        assert_eq!(decision.skip_reason(), Some(SkipReason::InsufficientQuote));
        assert_eq!(stored_checkpoint(&h).await.as_deref(), Some("1"));
    }

    #[tokio::test]
    async fn missing_buy_amount_is_fatal_not_skip() {
        let h = harness(
            InMemoryStateStore::new(),
            with_key(),
            FakeChain::new(10_000, tokens(500)),
            FakeQuotes::returning(QuoteResponse {
                buy_amount: None,
                ..quote(200_000)
            }),
        );

        let decision = h.decider.decide().await;

        assert_eq!(decision.skip_reason(), None);
        let err = decision.into_exec_result().unwrap_err();
        assert_eq!(err.to_string(), "No buyAmount");
        assert_eq!(stored_checkpoint(&h).await, None);
    }

    #[tokio::test]
    async fn missing_router_is_fatal() {
        let h = harness(
            InMemoryStateStore::new(),
            with_key(),
            FakeChain::new(10_000, tokens(500)),
            FakeQuotes::returning(QuoteResponse {
                to: None,
                ..quote(200_000)
            }),
        );

        assert!(matches!(
            h.decider.decide().await,
            Decision::Fatal(FatalError::MalformedQuote(_))
        ));
        assert_eq!(stored_checkpoint(&h).await, None);
    }

    #[tokio::test]
    async fn odd_length_quote_data_is_fatal() {
        let h = harness(
            InMemoryStateStore::new(),
            with_key(),
            FakeChain::new(10_000, tokens(500)),
            FakeQuotes::returning(QuoteResponse {
                data: Some("0xabc".to_string()),
                ..quote(200_000)
            }),
        );

        let decision = h.decider.decide().await;

        assert_eq!(decision.skip_reason(), None);
        assert!(matches!(
            decision,
            Decision::Fatal(FatalError::MalformedQuote(QuoteValidationError::Invalid {
                field: "data",
                ..
            }))
        ));
        assert_eq!(stored_checkpoint(&h).await, None);
    }

    #[tokio::test]
    async fn empty_quote_body_is_fatal() {
        let h = harness(
            InMemoryStateStore::new(),
            with_key(),
            FakeChain::new(10_000, tokens(500)),
            FakeQuotes::empty(),
        );

        assert!(matches!(
            h.decider.decide().await,
            Decision::Fatal(FatalError::EmptyQuote)
        ));
    }

    #[rstest]
    #[case::no_digits("not-a-number", 10_000, "10000")]
    #[case::fractional("1700000000.0", 1_800_000_000, "1800000000")]
    #[tokio::test]
    async fn malformed_checkpoint_recovers_on_success(
        #[case] stored: &str,
        #[case] now: u64,
        #[case] rewritten: &str,
    ) {
        let h = harness(
            InMemoryStateStore::new().with_entry(LAST_TIMESTAMP_KEY, stored),
            with_key(),
            FakeChain::new(now, tokens(500)),
            FakeQuotes::returning(quote(200_000)),
        );

        assert!(h.decider.decide().await.is_execute());
        assert_eq!(stored_checkpoint(&h).await.as_deref(), Some(rewritten));
    }

    #[tokio::test]
    async fn fractional_checkpoint_still_enforces_interval() {
        let h = harness(
            InMemoryStateStore::new().with_entry(LAST_TIMESTAMP_KEY, "1700000000.0"),
            with_key(),
            FakeChain::new(1_700_000_100, tokens(500)),
            FakeQuotes::returning(quote(200_000)),
        );

        let decision = h.decider.decide().await;

        assert_eq!(decision.skip_reason(), Some(SkipReason::TimeNotElapsed));
        assert_eq!(
            stored_checkpoint(&h).await.as_deref(),
            Some("1700000000.0")
        );
    }

    #[tokio::test]
    async fn custom_policy_thresholds_apply() {
        let policy = SwapPolicy {
            min_buy_amount: tokens(300_000),
            ..SwapPolicy::default()
        };
        let h = happy();
        let decider = SwapDecider::new(h.decider.config().clone(), h.decider.ports.clone())
            .with_policy(policy);
        assert_eq!(decider.policy().min_buy_amount, tokens(300_000));

        let decision = decider.decide().await;

        assert_eq!(decision.skip_reason(), Some(SkipReason::InsufficientQuote));
    }
}
