//! Uniform result shape returned by every provider operation

use serde::{Deserialize, Serialize};
use serde_json::Value;
use crate::Result;
use crate::error::Error;

/// Message used for every token-step failure
pub const AUTH_FAILURE_MESSAGE: &str = "Unable to get access token";

/// Provider records plus optional metadata, or an in-payload error.
///
/// Failures never escape as errors: callers get `error` set and `data` empty.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SearchResult {
    #[serde(default)]
    pub data: Vec<Value>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub meta: Option<Value>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub dictionaries: Option<Value>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl SearchResult {
    /// Extract `data`, `meta` and `dictionaries` from a provider body
    pub fn from_body(mut body: Value) -> Self {
        let data = match body.get_mut("data").map(Value::take) {
            Some(Value::Array(records)) => records,
            Some(Value::Null) | None => Vec::new(),
            Some(single) => vec![single],
        };
        let meta = body.get_mut("meta").map(Value::take).filter(|v| !v.is_null());
        let dictionaries = body
            .get_mut("dictionaries")
            .map(Value::take)
            .filter(|v| !v.is_null());

        Self {
            data,
            meta,
            dictionaries,
            error: None,
        }
    }

    pub fn failure(message: impl Into<String>) -> Self {
        Self {
            error: Some(message.into()),
            ..Self::default()
        }
    }

    /// Collapse a typed outcome into the uniform shape
    pub fn from_outcome(outcome: Result<SearchResult>) -> Self {
        match outcome {
            Ok(result) => result,
            Err(e) => e.into(),
        }
    }

    pub fn is_error(&self) -> bool {
        self.error.is_some()
    }

    pub fn len(&self) -> usize {
        self.data.len()
    }

    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }
}

impl From<Error> for SearchResult {
    fn from(err: Error) -> Self {
        match err {
            Error::Auth(_) => SearchResult::failure(AUTH_FAILURE_MESSAGE),
            Error::Http(e) => SearchResult::failure(e.to_string()),
            other => SearchResult::failure(other.to_string()),
        }
    }
}
