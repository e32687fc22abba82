//! Fakes for the chain and quote ports. Test-only.

use std::sync::Mutex;
use std::sync::atomic::{AtomicUsize, Ordering};

use alloy_primitives::{Address, U256};
use async_trait::async_trait;

use crate::domain::{QuoteRequest, QuoteResponse};
use crate::ports::{ChainError, ChainReader, QuoteError, QuoteSource};

pub struct FakeChain {
    timestamp: u64,
    balance: U256,
    fail_block: bool,
    fail_balance: bool,
    calls: AtomicUsize,
}

impl FakeChain {
    pub fn new(timestamp: u64, balance: U256) -> Self {
        Self {
            timestamp,
            balance,
            fail_block: false,
            fail_balance: false,
            calls: AtomicUsize::new(0),
        }
    }

    pub fn failing_block(mut self) -> Self {
        self.fail_block = true;
        self
    }

    pub fn failing_balance(mut self) -> Self {
        self.fail_balance = true;
        self
    }

    /// Reads of any kind made so far.
    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl ChainReader for FakeChain {
    async fn latest_block_timestamp(&self) -> Result<u64, ChainError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        if self.fail_block {
            return Err(ChainError::MissingResult {
                method: "eth_getBlockByNumber",
            });
        }
        Ok(self.timestamp)
    }

    async fn balance_of(&self, _token: Address, _owner: Address) -> Result<U256, ChainError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        if self.fail_balance {
            return Err(ChainError::Rpc {
                code: -32000,
                message: "execution reverted".to_string(),
            });
        }
        Ok(self.balance)
    }
}

pub struct FakeQuotes {
    response: Option<QuoteResponse>,
    requests: Mutex<Vec<QuoteRequest>>,
}

impl FakeQuotes {
    pub fn returning(response: QuoteResponse) -> Self {
        Self {
            response: Some(response),
            requests: Mutex::new(Vec::new()),
        }
    }

    /// Answers every request with an empty body.
    pub fn empty() -> Self {
        Self {
            response: None,
            requests: Mutex::new(Vec::new()),
        }
    }

    pub fn requests(&self) -> Vec<QuoteRequest> {
        self.requests.lock().unwrap().clone()
    }
}

#[async_trait]
impl QuoteSource for FakeQuotes {
    async fn fetch_quote(
        &self,
        request: &QuoteRequest,
    ) -> Result<Option<QuoteResponse>, QuoteError> {
        self.requests.lock().unwrap().push(request.clone());
        Ok(self.response.clone())
    }
}
