use crate::{Outcome, Phase, TableView};

/// Snapshot of everything a host needs to draw the widget.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppViewModel {
    pub input: String,
    pub message: String,
    pub table: TableView,
    pub input_enabled: bool,
    pub trigger_enabled: bool,
    /// The query input should receive focus.
    pub focus_input: bool,
    pub phase: Phase,
    pub outcome: Option<Outcome>,
    pub dirty: bool,
}
