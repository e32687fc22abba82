//! Errors - unrecoverable failures of a run.
//!
//! Expected non-eligibility is a [`SkipReason`](super::SkipReason), never an
//! error. Anything here aborts the run without a decision.
//!
//! Known inconsistency: a failed balance read is downgraded to a skip, while
//! a failed block read or a malformed quote is fatal.

use thiserror::Error;

use super::quote::QuoteValidationError;
use crate::ports::{ChainError, QuoteError, StoreError};

#[derive(Debug, Error)]
pub enum FatalError {
    #[error("state store: {0}")]
    Store(#[from] StoreError),

    #[error("block read failed: {0}")]
    Chain(#[from] ChainError),

    #[error("Get quote api failed: {0}")]
    QuoteRequest(#[from] QuoteError),

    #[error("Get quote api failed: empty response")]
    EmptyQuote,

    #[error(transparent)]
    MalformedQuote(#[from] QuoteValidationError),
}
