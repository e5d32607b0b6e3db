use std::sync::mpsc::{self, TryRecvError};
use std::thread::{self, JoinHandle};
use std::time::Duration;

use search_core::{Effect, Msg, RequestFailure};
use search_engine::{EngineEvent, EngineHandle};
use search_logging::{search_debug, search_info, search_warn};

use super::app::AppEvent;

const FORWARD_POLL: Duration = Duration::from_millis(100);

pub struct EffectRunner {
    engine: EngineHandle,
    // Dropping the sender tells the forwarding thread to stop.
    stop_tx: mpsc::Sender<()>,
    forwarder: JoinHandle<()>,
}

impl EffectRunner {
    /// Start forwarding engine events to `events` as widget messages.
    pub fn new(engine: EngineHandle, events: mpsc::Sender<AppEvent>) -> Self {
        let (stop_tx, stop_rx) = mpsc::channel();
        let forwarder = spawn_forwarder(engine.clone(), events, stop_rx);
        Self {
            engine,
            stop_tx,
            forwarder,
        }
    }

    /// Stop the forwarding thread and wait for it to exit.
    pub fn shutdown(self) {
        let Self {
            stop_tx, forwarder, ..
        } = self;
        drop(stop_tx);
        if forwarder.join().is_err() {
            search_warn!("Engine event forwarder panicked");
        }
        search_debug!("Engine event forwarder stopped");
    }

    pub fn run(&self, effects: Vec<Effect>) {
        for effect in effects {
            match effect {
                Effect::IssueSearch { request_id, query } => {
                    search_info!(
                        "IssueSearch request_id={} query_len={}",
                        request_id,
                        query.chars().count()
                    );
                    self.engine.search(request_id, query);
                }
            }
        }
    }
}

fn spawn_forwarder(
    engine: EngineHandle,
    events: mpsc::Sender<AppEvent>,
    stop_rx: mpsc::Receiver<()>,
) -> JoinHandle<()> {
    thread::spawn(move || loop {
        match stop_rx.try_recv() {
            Err(TryRecvError::Empty) => {}
            Ok(()) | Err(TryRecvError::Disconnected) => break,
        }
        if let Some(event) = engine.recv_timeout(FORWARD_POLL) {
            if events.send(AppEvent::Ui(engine_event_to_msg(event))).is_err() {
                break;
            }
        }
    })
}

/// Engine completions become `SearchFinished`, with failures reduced to
/// their display text.
pub fn engine_event_to_msg(event: EngineEvent) -> Msg {
    match event {
        EngineEvent::SearchCompleted { request_id, result } => Msg::SearchFinished {
            request_id,
            result: result.map_err(|err| RequestFailure::new(err.to_string())),
        },
    }
}
