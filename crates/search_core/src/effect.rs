use crate::RequestId;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect {
    /// Issue `GET /search?q=<query>`; `query` is already trimmed.
    IssueSearch { request_id: RequestId, query: String },
}
