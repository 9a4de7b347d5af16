mod confirm;
mod edit;
mod navigate;

use crossterm::event::{KeyCode, KeyEvent};

use super::app::{App, Mode};

/// Handle a key event in the current mode
pub fn handle_key(app: &mut App, key: KeyEvent) {
    // Ignore bare modifier key presses (Shift, Ctrl, Alt, etc.)
    if matches!(key.code, KeyCode::Modifier(_)) {
        return;
    }
    // Any keypress replaces the previous transient status line
    app.status_message = None;

    match &app.mode {
        // Selected is Navigate with an armed tap; same keymap
        Mode::Navigate | Mode::Selected { .. } => navigate::handle_navigate(app, key),
        Mode::Edit => edit::handle_edit(app, key),
        Mode::Confirm(_) => confirm::handle_confirm(app, key),
    }
}
