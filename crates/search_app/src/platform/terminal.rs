use std::borrow::Cow;
use std::io::{self, Write};

use search_core::{RowView, SearchSurface, TableView, EMPTY_CELL};
use unicode_width::UnicodeWidthStr;

use super::config::TableOutput;

const HEADERS: [&str; 4] = ["Shop", "Title", "Price", "Link"];
const PROMPT: &str = "> ";

/// Line-oriented rendition of the widget. Surface calls are buffered and
/// written out by [`TerminalSurface::flush`].
pub struct TerminalSurface<W: Write> {
    out: W,
    output: TableOutput,
    message: String,
    message_pending: bool,
    table: TableView,
    table_hidden: bool,
    table_pending: bool,
    input_enabled: bool,
    trigger_enabled: bool,
    focus_pending: bool,
}

impl<W: Write> TerminalSurface<W> {
    pub fn new(out: W, output: TableOutput) -> Self {
        Self {
            out,
            output,
            message: String::new(),
            message_pending: false,
            table: TableView::default(),
            table_hidden: true,
            table_pending: false,
            input_enabled: true,
            trigger_enabled: true,
            focus_pending: false,
        }
    }

    pub fn controls_enabled(&self) -> bool {
        self.input_enabled && self.trigger_enabled
    }

    pub fn into_inner(self) -> W {
        self.out
    }

    /// Write pending changes: the message line, then the table when it is
    /// visible, then the prompt when the input has focus or anything was
    /// written while the input is usable.
    pub fn flush(&mut self) -> io::Result<()> {
        let mut wrote = false;
        if std::mem::take(&mut self.message_pending) && !self.message.is_empty() {
            writeln!(self.out, "{}", sanitize(&self.message))?;
            wrote = true;
        }

        if std::mem::take(&mut self.table_pending) && !self.table_hidden {
            match self.output {
                TableOutput::Text => write!(self.out, "{}", format_text_table(&self.table.rows))?,
                TableOutput::Html => writeln!(self.out, "{}", sanitize(&self.table.body_html))?,
            }
            wrote = true;
        }

        let focus = std::mem::take(&mut self.focus_pending);
        if focus || (wrote && self.input_enabled) {
            write!(self.out, "{PROMPT}")?;
        }
        self.out.flush()
    }
}

impl<W: Write> SearchSurface for TerminalSurface<W> {
    fn set_message(&mut self, text: &str) {
        self.message = text.to_string();
        self.message_pending = true;
    }

    fn set_input_enabled(&mut self, enabled: bool) {
        self.input_enabled = enabled;
    }

    fn set_trigger_enabled(&mut self, enabled: bool) {
        self.trigger_enabled = enabled;
    }

    fn replace_table_body(&mut self, table: &TableView) {
        if self.table != *table {
            self.table = table.clone();
            self.table_pending = true;
        }
    }

    fn set_table_hidden(&mut self, hidden: bool) {
        if self.table_hidden && !hidden {
            self.table_pending = true;
        }
        self.table_hidden = hidden;
    }

    fn focus_input(&mut self) {
        self.focus_pending = true;
    }
}

/// Replace control characters (escape sequences, newlines, tabs) with their
/// escaped form so server text cannot drive the terminal.
fn sanitize(text: &str) -> Cow<'_, str> {
    if !text.chars().any(char::is_control) {
        return Cow::Borrowed(text);
    }
    let mut out = String::with_capacity(text.len() + 8);
    for ch in text.chars() {
        if ch.is_control() {
            out.extend(ch.escape_debug());
        } else {
            out.push(ch);
        }
    }
    Cow::Owned(out)
}

/// Align rows into columns separated by ` | `, with a header and rule line.
/// Control characters in cells are printed escaped.
pub fn format_text_table(rows: &[RowView]) -> String {
    let cells: Vec<[Cow<'_, str>; 4]> = rows
        .iter()
        .map(|row| {
            [
                sanitize(&row.shop),
                sanitize(&row.title),
                sanitize(&row.price),
                sanitize(row.link.as_deref().unwrap_or(EMPTY_CELL)),
            ]
        })
        .collect();

    let mut widths = HEADERS.map(UnicodeWidthStr::width);
    for row in &cells {
        for (width, cell) in widths.iter_mut().zip(row) {
            *width = (*width).max(cell.width());
        }
    }

    let mut out = String::new();
    push_line(&mut out, &HEADERS, &widths);
    let rule: Vec<String> = widths.iter().map(|width| "-".repeat(*width)).collect();
    out.push_str(&rule.join("-+-"));
    out.push('\n');
    for row in &cells {
        push_line(&mut out, row, &widths);
    }
    out
}

fn push_line<S: AsRef<str>>(out: &mut String, cells: &[S; 4], widths: &[usize; 4]) {
    let padded: Vec<String> = cells
        .iter()
        .zip(widths)
        .map(|(cell, width)| {
            let cell = cell.as_ref();
            let pad = width.saturating_sub(cell.width());
            format!("{cell}{}", " ".repeat(pad))
        })
        .collect();
    out.push_str(padded.join(" | ").trim_end());
    out.push('\n');
}
