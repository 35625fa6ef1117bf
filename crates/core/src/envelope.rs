//! The uniform response envelope.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Response shape returned by every dispatch action, success or failure.
///
/// Optional fields are omitted from the wire form entirely rather than sent
/// as nulls, so callers can key off presence: `count` accompanies list
/// responses, `message` accompanies mutations, `timestamp` accompanies
/// successes, `error` accompanies failures.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Envelope {
    pub success: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub count: Option<usize>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub timestamp: Option<DateTime<Utc>>,
}

impl Envelope {
    fn success_base() -> Self {
        Self {
            success: true,
            data: None,
            error: None,
            message: None,
            count: None,
            timestamp: Some(Utc::now()),
        }
    }

    /// Single-record read result.
    pub fn record(data: Value) -> Self {
        let mut envelope = Self::success_base();
        envelope.data = Some(data);
        envelope
    }

    /// Collection read result; `count` mirrors the number of items.
    pub fn list(items: Vec<Value>) -> Self {
        let mut envelope = Self::success_base();
        envelope.count = Some(items.len());
        envelope.data = Some(Value::Array(items));
        envelope
    }

    /// Mutation result with a human-readable confirmation.
    pub fn mutated(data: Value, message: impl Into<String>) -> Self {
        let mut envelope = Self::record(data);
        envelope.message = Some(message.into());
        envelope
    }

    /// Failure envelope. Timestamps are reserved for successes.
    pub fn failure(error: impl Into<String>) -> Self {
        Self {
            success: false,
            data: None,
            error: Some(error.into()),
            message: None,
            count: None,
            timestamp: None,
        }
    }
}
