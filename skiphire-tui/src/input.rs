use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use crate::app::App;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Action {
    None,
    Quit,
}

pub(crate) fn handle_key_event(key: KeyEvent, app: &mut App) -> Action {
    use KeyCode::{BackTab, Char, Down, Enter, Esc, Tab, Up};

    // Global quit shortcuts
    if key.code == Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
        return Action::Quit;
    }
    if key.code == Char('q') && key.modifiers.is_empty() {
        return Action::Quit;
    }

    // Once confirmed the skip step is done; only going back is allowed.
    if app.confirmation.is_some() {
        if matches!(key.code, Esc | BackTab | Char('b')) {
            app.confirmation = None;
        }
        return Action::None;
    }

    match key.code {
        Up | Char('k') => app.move_up(),
        Down | Char('j') => app.move_down(),
        Enter | Char(' ') => app.toggle_highlighted(),
        Char('x') => app.clear_selection(),
        Char('n') | Tab => app.confirm(),

        Char('r') => app.toggle_on_road(),
        Char('h') => app.toggle_heavy_waste(),
        Char('+' | '=') => app.raise_max_price(),
        Char('-') => app.lower_max_price(),
        Char('[') => app.lower_min_size(),
        Char(']') => app.raise_min_size(),
        Char('{') => app.lower_max_size(),
        Char('}') => app.raise_max_size(),
        Char('c') => app.reset_filters(),
        _ => {}
    }
    Action::None
}
