//! Maps terminal lines onto widget events.
//!
//! A plain line is typed into the query field followed by Enter. Lines
//! starting with `/` are commands: `/search` activates the trigger control
//! with the current query and `/quit` leaves the application.

use search_core::{Key, Msg};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InputLine {
    Submit(String),
    Trigger,
    Quit,
    Unknown(String),
}

pub fn parse_line(line: &str) -> InputLine {
    let line = line.trim_end_matches(['\r', '\n']);
    match line.trim() {
        "/quit" | "/exit" => InputLine::Quit,
        "/search" => InputLine::Trigger,
        command if command.starts_with('/') => InputLine::Unknown(command.to_string()),
        _ => InputLine::Submit(line.to_string()),
    }
}

impl InputLine {
    pub fn into_messages(self) -> Vec<Msg> {
        match self {
            InputLine::Submit(text) => vec![Msg::InputChanged(text), Msg::KeyPressed(Key::Enter)],
            InputLine::Trigger => vec![Msg::SearchClicked],
            InputLine::Quit | InputLine::Unknown(_) => Vec::new(),
        }
    }
}
