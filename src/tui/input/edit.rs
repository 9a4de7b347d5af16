use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use crate::tui::app::App;

/// Longest quantity draft we accept; parse bounds reject anything near it
const MAX_DRAFT_LEN: usize = 10;

pub(super) fn handle_edit(app: &mut App, key: KeyEvent) {
    match (key.modifiers, key.code) {
        // Quantity field: digits and a decimal point
        (KeyModifiers::NONE, KeyCode::Char(c @ ('0'..='9' | '.'))) => {
            if let Some(edit) = &mut app.edit
                && edit.draft_qty.len() < MAX_DRAFT_LEN
            {
                edit.draft_qty.push(c);
            }
        }
        (KeyModifiers::NONE, KeyCode::Backspace) => {
            if let Some(edit) = &mut app.edit {
                edit.draft_qty.pop();
            }
        }

        // Unit selector
        (KeyModifiers::NONE, KeyCode::Left) => {
            let count = app.config.units.len().max(1);
            if let Some(edit) = &mut app.edit {
                edit.unit_idx = (edit.unit_idx + count - 1) % count;
            }
        }
        (KeyModifiers::NONE, KeyCode::Right | KeyCode::Tab) => {
            let count = app.config.units.len().max(1);
            if let Some(edit) = &mut app.edit {
                edit.unit_idx = (edit.unit_idx + 1) % count;
            }
        }

        // Undo/redo on the committed ledger, draft untouched
        (KeyModifiers::NONE, KeyCode::Char('u')) => app.edit_undo(),
        (KeyModifiers::SHIFT, KeyCode::Char('U')) => app.edit_redo(),

        (KeyModifiers::NONE, KeyCode::Enter) => app.save_edit(),
        (_, KeyCode::Esc) => app.cancel_edit(),
        _ => {}
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::config::AppConfig;
    use crate::model::ledger::Snapshot;
    use crate::tui::app::Mode;
    use std::path::PathBuf;
    use std::time::Instant;

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    fn editing_app() -> App {
        let config = AppConfig::default();
        let snapshot = Snapshot::blank(&config);
        let mut app = App::new(config, snapshot, PathBuf::from("/nonexistent"));
        let now = Instant::now();
        app.on_tap(now);
        app.on_tap(now);
        assert_eq!(app.mode, Mode::Edit);
        app
    }

    #[test]
    fn typing_builds_a_decimal_draft() {
        let mut app = editing_app();
        for c in ['2', '.', '5'] {
            handle_edit(&mut app, key(KeyCode::Char(c)));
        }
        assert_eq!(app.edit.as_ref().unwrap().draft_qty, "2.5");

        handle_edit(&mut app, key(KeyCode::Backspace));
        assert_eq!(app.edit.as_ref().unwrap().draft_qty, "2.");
    }

    #[test]
    fn letters_are_ignored_in_the_quantity_field() {
        let mut app = editing_app();
        handle_edit(&mut app, key(KeyCode::Char('x')));
        assert_eq!(app.edit.as_ref().unwrap().draft_qty, "");
    }

    #[test]
    fn unit_selector_wraps_both_directions() {
        let mut app = editing_app();
        let count = app.config.units.len();

        handle_edit(&mut app, key(KeyCode::Left));
        assert_eq!(app.edit.as_ref().unwrap().unit_idx, count - 1);
        handle_edit(&mut app, key(KeyCode::Right));
        assert_eq!(app.edit.as_ref().unwrap().unit_idx, 0);
        handle_edit(&mut app, key(KeyCode::Tab));
        assert_eq!(app.edit.as_ref().unwrap().unit_idx, 1);
    }

    #[test]
    fn enter_with_valid_draft_saves_and_closes() {
        let mut app = editing_app();
        handle_edit(&mut app, key(KeyCode::Char('3')));
        handle_edit(&mut app, key(KeyCode::Enter));
        assert_eq!(app.mode, Mode::Navigate);
        assert_eq!(
            app.snapshot.ledger("foodtruck", "Chorizo").unwrap().logs.len(),
            1
        );
    }

    #[test]
    fn enter_with_empty_draft_stays_open() {
        let mut app = editing_app();
        handle_edit(&mut app, key(KeyCode::Enter));
        assert_eq!(app.mode, Mode::Edit);
    }

    #[test]
    fn undo_key_pops_committed_entry_and_redo_restores_it() {
        let mut app = editing_app();
        handle_edit(&mut app, key(KeyCode::Char('4')));
        handle_edit(&mut app, key(KeyCode::Enter));

        // reopen the editor on the same item
        let now = Instant::now();
        app.on_tap(now);
        app.on_tap(now);

        handle_edit(&mut app, key(KeyCode::Char('u')));
        assert!(app.snapshot.ledger("foodtruck", "Chorizo").unwrap().logs.is_empty());
        assert_eq!(
            app.snapshot.ledger("foodtruck", "Chorizo").unwrap().undone.len(),
            1
        );

        handle_edit(&mut app, KeyEvent::new(KeyCode::Char('U'), KeyModifiers::SHIFT));
        assert_eq!(
            app.snapshot.ledger("foodtruck", "Chorizo").unwrap().logs.len(),
            1
        );
    }
}
