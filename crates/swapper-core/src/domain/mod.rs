//! Domain model (amounts, checkpoint, quote, decision, errors).

pub mod amount;
pub mod call;
pub mod checkpoint;
pub mod decision;
pub mod errors;
pub mod exec_result;
pub mod quote;

pub use amount::{format_tokens, tokens};
pub use call::EncodedCall;
pub use checkpoint::{Checkpoint, LAST_TIMESTAMP_KEY};
pub use decision::{Decision, SkipReason};
pub use errors::FatalError;
pub use exec_result::ExecResult;
pub use quote::{Quote, QuoteRequest, QuoteResponse, QuoteValidationError};
