use std::sync::{Arc, Mutex};
use std::time::Duration;

use search_engine::{EngineEvent, EngineHandle, FailureKind, FetchError, SearchClient};
use serde_json::{json, Value};

struct ScriptedClient {
    seen: Mutex<Vec<String>>,
}

#[async_trait::async_trait]
impl SearchClient for ScriptedClient {
    async fn search(&self, query: &str) -> Result<Value, FetchError> {
        self.seen.lock().unwrap().push(query.to_string());
        if query == "boom" {
            Err(FetchError {
                kind: FailureKind::HttpStatus(503),
                message: "503 Service Unavailable".to_string(),
            })
        } else {
            Ok(json!([{"title": query}]))
        }
    }
}

fn wait_for_event(engine: &EngineHandle) -> EngineEvent {
    engine
        .recv_timeout(Duration::from_secs(5))
        .expect("engine event")
}

#[test]
fn engine_reports_completed_searches_with_their_ids() {
    let client = Arc::new(ScriptedClient {
        seen: Mutex::new(Vec::new()),
    });
    let engine = EngineHandle::with_client(client.clone()).expect("engine");

    engine.search(3, "phone");
    assert_eq!(
        wait_for_event(&engine),
        EngineEvent::SearchCompleted {
            request_id: 3,
            result: Ok(json!([{"title": "phone"}])),
        }
    );

    engine.search(4, "boom");
    match wait_for_event(&engine) {
        EngineEvent::SearchCompleted { request_id, result } => {
            assert_eq!(request_id, 4);
            assert_eq!(result.unwrap_err().to_string(), "HTTP 503");
        }
    }

    assert_eq!(*client.seen.lock().unwrap(), vec!["phone", "boom"]);
    assert!(engine.try_recv().is_none());
}
