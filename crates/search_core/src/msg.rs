use serde_json::Value;

use crate::RequestId;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Msg {
    /// User edited the query input box.
    InputChanged(String),
    /// User activated the search trigger control.
    SearchClicked,
    /// Key pressed while the query input has focus.
    KeyPressed(Key),
    /// The outbound request settled, either with a parsed JSON body or a failure.
    SearchFinished {
        request_id: RequestId,
        result: Result<Value, RequestFailure>,
    },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Key {
    Enter,
    Other(String),
}

/// Request-level failure: network error, non-success status or unparsable body.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("{description}")]
pub struct RequestFailure {
    pub description: String,
}

impl RequestFailure {
    pub fn new(description: impl Into<String>) -> Self {
        Self {
            description: description.into(),
        }
    }
}
