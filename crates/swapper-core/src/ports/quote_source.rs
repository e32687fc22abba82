//! QuoteSource port - off-chain swap aggregator.

use async_trait::async_trait;
use thiserror::Error;

use crate::domain::{QuoteRequest, QuoteResponse};

#[derive(Debug, Error)]
pub enum QuoteError {
    #[error("quote transport: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("quote api responded {status}: {body}")]
    Status { status: u16, body: String },

    #[error("quote body is not valid json: {0}")]
    Decode(#[from] serde_json::Error),
}

/// Fetches a raw quote.
///
/// Returns `Ok(None)` when the API answered with an empty body. Field
/// validation is left to the caller so every malformed shape is reported
/// the same way.
#[async_trait]
pub trait QuoteSource: Send + Sync {
    async fn fetch_quote(&self, request: &QuoteRequest)
        -> Result<Option<QuoteResponse>, QuoteError>;
}
