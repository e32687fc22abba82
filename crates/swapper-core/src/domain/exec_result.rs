//! ExecResult: the `{ canExec, message?, callData? }` shape the host expects.

use serde::{Deserialize, Serialize};

use super::call::EncodedCall;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExecResult {
    pub can_exec: bool,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub call_data: Vec<EncodedCall>,
}

impl ExecResult {
    pub fn skip(message: impl Into<String>) -> Self {
        Self {
            can_exec: false,
            message: Some(message.into()),
            call_data: Vec::new(),
        }
    }

    pub fn execute(call_data: Vec<EncodedCall>) -> Self {
        Self {
            can_exec: true,
            message: None,
            call_data,
        }
    }
}
