//! Quote model: raw aggregator response and its validated form.

use std::fmt;
use std::str::FromStr;

use alloy_primitives::{Address, Bytes, U256};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// What we ask the aggregator: sell `sell_amount` of `sell_token` for `buy_token`.
#[derive(Clone, PartialEq, Eq)]
pub struct QuoteRequest {
    pub sell_token: Address,
    pub buy_token: Address,
    pub sell_amount: U256,
    pub api_key: String,
}

impl fmt::Debug for QuoteRequest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("QuoteRequest")
            .field("sell_token", &self.sell_token)
            .field("buy_token", &self.buy_token)
            .field("sell_amount", &self.sell_amount)
            .field("api_key", &"<redacted>")
            .finish()
    }
}

/// JSON body of `/swap/v1/quote`, only the fields we consume.
///
/// Everything is optional here; [`Quote::try_from`] decides what is missing.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct QuoteResponse {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub buy_amount: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub data: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub to: Option<String>,
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum QuoteValidationError {
    #[error("No {0}")]
    Missing(&'static str),

    #[error("invalid {field} {value:?}: {reason}")]
    Invalid {
        field: &'static str,
        value: String,
        reason: String,
    },
}

/// A quote with every field present and well-formed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Quote {
    pub buy_amount: U256,
    pub data: Bytes,
    pub to: Address,
}

impl TryFrom<QuoteResponse> for Quote {
    type Error = QuoteValidationError;

    fn try_from(raw: QuoteResponse) -> Result<Self, Self::Error> {
        let buy_amount = required("buyAmount", raw.buy_amount)?;
        let buy_amount = U256::from_str_radix(&buy_amount, 10)
            .map_err(|e| invalid("buyAmount", &buy_amount, e))?;

        let data = required("data", raw.data)?;
        let data = Bytes::from_str(&data).map_err(|e| invalid("data", &data, e))?;

        let to = required("to", raw.to)?;
        let to = Address::from_str(&to).map_err(|e| invalid("to", &to, e))?;

        Ok(Self {
            buy_amount,
            data,
            to,
        })
    }
}

// An empty string counts as missing.
fn required(field: &'static str, value: Option<String>) -> Result<String, QuoteValidationError> {
    value
        .filter(|v| !v.is_empty())
        .ok_or(QuoteValidationError::Missing(field))
}

fn invalid(field: &'static str, value: &str, reason: impl fmt::Display) -> QuoteValidationError {
    QuoteValidationError::Invalid {
        field,
        value: value.to_string(),
        reason: reason.to_string(),
    }
}
