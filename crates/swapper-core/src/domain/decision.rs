//! Decision model: the single result of one run.
//!
//! Three variants keep the two failure channels apart:
//! - `Skip`: expected, the host just waits for the next tick.
//! - `Execute`: submit the encoded call.
//! - `Fatal`: the run aborted and produced no decision.

use std::fmt;

use super::call::EncodedCall;
use super::errors::FatalError;
use super::exec_result::ExecResult;

/// Why a run chose not to execute.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SkipReason {
    /// `ZEROX_API_KEY` is absent (or empty).
    MissingApiKey,
    /// The minimum interval since the checkpoint has not passed.
    TimeNotElapsed,
    /// The source-token balance could not be read.
    RpcCallFailed,
    /// The swapper holds less than the minimum source balance.
    InsufficientBalance,
    /// The quoted output is below the minimum.
    InsufficientQuote,
}

impl SkipReason {
    /// Message reported to the host.
    pub fn message(&self) -> &'static str {
        match self {
            SkipReason::MissingApiKey => "ZEROX_API_KEY not set in secrets",
            SkipReason::TimeNotElapsed => "Time not elapsed",
            SkipReason::RpcCallFailed => "Rpc call failed",
            SkipReason::InsufficientBalance => "not enough mim",
            SkipReason::InsufficientQuote => "not enough on contract",
        }
    }
}

impl fmt::Display for SkipReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.message())
    }
}

#[derive(Debug)]
pub enum Decision {
    Skip(SkipReason),
    Execute(EncodedCall),
    Fatal(FatalError),
}

impl Decision {
    pub fn is_execute(&self) -> bool {
        matches!(self, Decision::Execute(_))
    }

    pub fn skip_reason(&self) -> Option<SkipReason> {
        match self {
            Decision::Skip(reason) => Some(*reason),
            _ => None,
        }
    }

    /// Host wire shape. `Fatal` has no wire shape and comes back as `Err`.
    pub fn into_exec_result(self) -> Result<ExecResult, FatalError> {
        match self {
            Decision::Skip(reason) => Ok(ExecResult::skip(reason.message())),
            Decision::Execute(call) => Ok(ExecResult::execute(vec![call])),
            Decision::Fatal(error) => Err(error),
        }
    }
}
