use std::ops::{Deref, DerefMut};

use crate::view_model::AppViewModel;
use crate::{PriceFormat, TableView};

pub type RequestId = u64;

/// Queries shorter than this many characters (after trimming) are rejected locally.
pub const MIN_QUERY_CHARS: usize = 2;

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum Phase {
    #[default]
    Idle,
    InFlight {
        request_id: RequestId,
        query: String,
    },
}

/// How the most recent search action ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    /// Query too short; nothing was sent.
    Rejected,
    Rendered { count: usize },
    Empty,
    NoticeShown,
    UnexpectedShape,
    Errored,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppState {
    input: String,
    message: String,
    table: TableView,
    controls_enabled: bool,
    focus_requested: bool,
    phase: Phase,
    outcome: Option<Outcome>,
    next_request_id: RequestId,
    price_format: PriceFormat,
    dirty: bool,
}

impl Default for AppState {
    fn default() -> Self {
        Self {
            input: String::new(),
            message: String::new(),
            table: TableView::default(),
            controls_enabled: true,
            // The query field takes focus as soon as the widget is shown.
            focus_requested: true,
            phase: Phase::Idle,
            outcome: None,
            next_request_id: 1,
            price_format: PriceFormat::default(),
            dirty: true,
        }
    }
}

impl AppState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_price_format(price_format: PriceFormat) -> Self {
        Self {
            price_format,
            ..Self::default()
        }
    }

    pub fn view(&self) -> AppViewModel {
        AppViewModel {
            input: self.input.clone(),
            message: self.message.clone(),
            table: self.table.clone(),
            input_enabled: self.controls_enabled,
            trigger_enabled: self.controls_enabled,
            focus_input: self.focus_requested,
            phase: self.phase.clone(),
            outcome: self.outcome,
            dirty: self.dirty,
        }
    }

    pub fn phase(&self) -> &Phase {
        &self.phase
    }

    pub fn controls_enabled(&self) -> bool {
        self.controls_enabled
    }

    pub fn price_format(&self) -> &PriceFormat {
        &self.price_format
    }

    /// Returns and clears the dirty flag.
    pub fn consume_dirty(&mut self) -> bool {
        std::mem::take(&mut self.dirty)
    }

    /// Returns and clears a pending request to focus the query input.
    pub fn consume_focus_request(&mut self) -> bool {
        std::mem::take(&mut self.focus_requested)
    }

    pub(crate) fn in_flight_request(&self) -> Option<RequestId> {
        match &self.phase {
            Phase::InFlight { request_id, .. } => Some(*request_id),
            Phase::Idle => None,
        }
    }

    pub(crate) fn input(&self) -> &str {
        &self.input
    }

    pub(crate) fn set_input(&mut self, input: String) {
        if self.input != input {
            self.input = input;
            self.mark_dirty();
        }
    }

    pub(crate) fn set_message(&mut self, message: impl Into<String>) {
        self.message = message.into();
        self.mark_dirty();
    }

    pub(crate) fn clear_table(&mut self) {
        self.table = TableView::default();
        self.mark_dirty();
    }

    /// Replace the whole table; nothing from a previous render survives.
    pub(crate) fn replace_table(&mut self, table: TableView) {
        self.table = table;
        self.mark_dirty();
    }

    pub(crate) fn set_outcome(&mut self, outcome: Outcome) {
        self.outcome = Some(outcome);
        self.mark_dirty();
    }

    /// Disable both controls and enter the in-flight phase.
    pub(crate) fn begin_request(&mut self, query: String) -> RequestId {
        let request_id = self.next_request_id;
        self.next_request_id += 1;
        self.phase = Phase::InFlight { request_id, query };
        self.controls_enabled = false;
        self.outcome = None;
        self.mark_dirty();
        request_id
    }

    /// Scope for handling a finished request. Controls are restored and focus
    /// returned to the input when the guard is dropped, on every exit path.
    pub(crate) fn settle(&mut self) -> SettleGuard<'_> {
        SettleGuard { state: self }
    }

    fn mark_dirty(&mut self) {
        self.dirty = true;
    }
}

pub(crate) struct SettleGuard<'a> {
    state: &'a mut AppState,
}

impl Deref for SettleGuard<'_> {
    type Target = AppState;

    fn deref(&self) -> &AppState {
        &*self.state
    }
}

impl DerefMut for SettleGuard<'_> {
    fn deref_mut(&mut self) -> &mut AppState {
        &mut *self.state
    }
}

impl Drop for SettleGuard<'_> {
    fn drop(&mut self) {
        self.state.phase = Phase::Idle;
        self.state.controls_enabled = true;
        self.state.focus_requested = true;
        self.state.mark_dirty();
    }
}
