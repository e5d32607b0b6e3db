use std::io::{self, BufRead, Write};
use std::sync::mpsc;
use std::thread;

use search_core::{apply_view, update, AppState, Msg, Phase};
use search_engine::{EngineError, EngineHandle};
use search_logging::{search_debug, search_info, search_warn};
use thiserror::Error;

use super::config::{config_path, load_config, AppConfig};
use super::effects::EffectRunner;
use super::input::{parse_line, InputLine};
use super::terminal::TerminalSurface;

#[derive(Debug, Error)]
pub enum AppError {
    #[error(transparent)]
    Engine(#[from] EngineError),
    #[error("terminal io: {0}")]
    Io(#[from] io::Error),
}

/// Events delivered to the main loop, in arrival order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AppEvent {
    Ui(Msg),
    /// Messages produced by one line of terminal input, applied together.
    Line(Vec<Msg>),
    Quit,
    /// Stdin reached end of file.
    InputClosed,
}

pub fn run_app() -> Result<(), AppError> {
    let path = config_path();
    let (config, config_error) = match load_config(&path) {
        Ok(config) => (config, None),
        Err(err) => (AppConfig::default(), Some(err)),
    };

    search_logging::initialize(&config.log_destination(), config.log_level());
    if let Some(err) = config_error {
        search_warn!("{}; using defaults", err);
    }
    search_info!(
        "Starting search_app base_url={} path={}",
        config.base_url,
        config.search_path
    );

    let engine = EngineHandle::new(config.client_settings())?;
    let (event_tx, event_rx) = mpsc::channel::<AppEvent>();
    let runner = EffectRunner::new(engine, event_tx.clone());
    spawn_stdin_reader(event_tx);

    let stdout = io::stdout();
    let mut surface = TerminalSurface::new(stdout.lock(), config.table_output);
    let state = AppState::with_price_format(config.price_format());

    let result = run_event_loop(state, &runner, &mut surface, event_rx);
    runner.shutdown();
    result?;
    search_info!("search_app exiting");
    Ok(())
}

/// Apply events to the controller until the user quits, or until input is
/// closed and no request is outstanding.
///
/// Events already queued when the loop wakes are applied as one batch and
/// rendered once.
pub fn run_event_loop<W: Write>(
    mut state: AppState,
    runner: &EffectRunner,
    surface: &mut TerminalSurface<W>,
    events: mpsc::Receiver<AppEvent>,
) -> io::Result<()> {
    render(&mut state, surface)?;

    let mut input_closed = false;
    while let Ok(first) = events.recv() {
        let mut quit = false;
        for event in std::iter::once(first).chain(events.try_iter()) {
            match event {
                AppEvent::Ui(msg) => state = dispatch_msg(state, runner, msg),
                AppEvent::Line(msgs) => {
                    for msg in msgs {
                        state = dispatch_msg(state, runner, msg);
                    }
                }
                AppEvent::Quit => {
                    quit = true;
                    break;
                }
                AppEvent::InputClosed => input_closed = true,
            }
        }
        render(&mut state, surface)?;

        if quit || (input_closed && *state.phase() == Phase::Idle) {
            break;
        }
    }
    Ok(())
}

fn dispatch_msg(state: AppState, runner: &EffectRunner, msg: Msg) -> AppState {
    search_debug!("Dispatching {:?}", msg);
    let (state, effects) = update(state, msg);
    runner.run(effects);
    state
}

fn render<W: Write>(state: &mut AppState, surface: &mut TerminalSurface<W>) -> io::Result<()> {
    if state.consume_dirty() {
        apply_view(&state.view(), surface);
        state.consume_focus_request();
        surface.flush()?;
    }
    Ok(())
}

fn spawn_stdin_reader(events: mpsc::Sender<AppEvent>) {
    thread::spawn(move || {
        let stdin = io::stdin();
        for line in stdin.lock().lines() {
            let line = match line {
                Ok(line) => line,
                Err(err) => {
                    search_warn!("Failed to read stdin: {}", err);
                    break;
                }
            };
            let event = match parse_line(&line) {
                InputLine::Quit => AppEvent::Quit,
                InputLine::Unknown(command) => {
                    eprintln!("Unknown command {command}; use /search or /quit");
                    continue;
                }
                input => AppEvent::Line(input.into_messages()),
            };
            if events.send(event).is_err() {
                return;
            }
        }
        let _ = events.send(AppEvent::InputClosed);
    });
}
