use crate::{AppViewModel, TableView};

/// Handles to the widget's UI elements, injected by the host.
pub trait SearchSurface {
    fn set_message(&mut self, text: &str);
    fn set_input_enabled(&mut self, enabled: bool);
    fn set_trigger_enabled(&mut self, enabled: bool);
    /// Replace the whole table body with `table`'s rows.
    fn replace_table_body(&mut self, table: &TableView);
    fn set_table_hidden(&mut self, hidden: bool);
    fn focus_input(&mut self);
}

/// Push a view model into a surface. The table body is replaced before it is
/// revealed, and focus is moved last so it lands on an enabled input.
pub fn apply_view(view: &AppViewModel, surface: &mut dyn SearchSurface) {
    surface.replace_table_body(&view.table);
    surface.set_table_hidden(view.table.hidden);
    surface.set_message(&view.message);
    surface.set_trigger_enabled(view.trigger_enabled);
    surface.set_input_enabled(view.input_enabled);
    if view.focus_input && view.input_enabled {
        surface.focus_input();
    }
}
