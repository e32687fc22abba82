//! ZeroExQuoteClient - 0x swap API (`/swap/v1/quote`).

use std::time::Duration;

use async_trait::async_trait;
use tracing::info;

use crate::domain::{QuoteRequest, QuoteResponse};
use crate::ports::{QuoteError, QuoteSource};

/// Header carrying the API key.
pub const API_KEY_HEADER: &str = "0x-api-key";

pub struct ZeroExQuoteClient {
    client: reqwest::Client,
    base_url: String,
}

impl ZeroExQuoteClient {
    pub fn new(base_url: impl Into<String>, timeout: Duration) -> Result<Self, QuoteError> {
        let client = reqwest::Client::builder().timeout(timeout).build()?;
        Ok(Self::with_client(client, base_url))
    }

    pub fn with_client(client: reqwest::Client, base_url: impl Into<String>) -> Self {
        Self {
            client,
            base_url: base_url.into(),
        }
    }

    /// `{base}/swap/v1/quote?buyToken=..&sellToken=..&sellAmount=..`
    pub fn quote_url(&self, request: &QuoteRequest) -> String {
        format!(
            "{}/swap/v1/quote?buyToken={}&sellToken={}&sellAmount={}",
            self.base_url.trim_end_matches('/'),
            request.buy_token,
            request.sell_token,
            request.sell_amount,
        )
    }
}

fn parse_body(body: &str) -> Result<Option<QuoteResponse>, QuoteError> {
    if body.trim().is_empty() {
        return Ok(None);
    }
    Ok(serde_json::from_str(body)?)
}

#[async_trait]
impl QuoteSource for ZeroExQuoteClient {
    async fn fetch_quote(
        &self,
        request: &QuoteRequest,
    ) -> Result<Option<QuoteResponse>, QuoteError> {
        let url = self.quote_url(request);
        info!(%url, "requesting quote");

        let response = self
            .client
            .get(&url)
            .header(API_KEY_HEADER, request.api_key.as_str())
            .send()
            .await?;
        let status = response.status();
        let body = response.text().await?;
        if !status.is_success() {
            return Err(QuoteError::Status {
                status: status.as_u16(),
                body,
            });
        }
        parse_body(&body)
    }
}
