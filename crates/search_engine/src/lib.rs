//! Shop search engine: HTTP client for the search endpoint and effect execution.
mod engine;
mod fetch;
mod types;

pub use engine::EngineHandle;
pub use fetch::{ClientSettings, ReqwestSearchClient, SearchClient};
pub use types::{EngineError, EngineEvent, FailureKind, FetchError, RequestId};
