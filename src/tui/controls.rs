//! Keyboard input handling for the TUI.

use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

use super::runtime::App;

/// Maps a key event to a form action.
///
/// Guards on [`KeyEventKind::Press`] to avoid double-fire on some terminals.
pub fn handle_key(app: &mut App, key: KeyEvent) {
    if key.kind != KeyEventKind::Press {
        return;
    }
    match key.code {
        KeyCode::Char('q') | KeyCode::Esc => app.quit = true,
        KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => app.quit = true,
        KeyCode::Up | KeyCode::BackTab | KeyCode::Char('k') => app.select_prev(),
        KeyCode::Down | KeyCode::Tab | KeyCode::Char('j') => app.select_next(),
        KeyCode::Char('+' | '=' | 'l') | KeyCode::Right => app.increase(),
        KeyCode::Char('-' | 'h') | KeyCode::Left => app.decrease(),
        KeyCode::Char('1') => app.switch_preset("default"),
        KeyCode::Char('2') => app.switch_preset("compact"),
        KeyCode::Char('3') => app.switch_preset("full_load"),
        KeyCode::Char('r') => app.reset(),
        _ => {}
    }
}
