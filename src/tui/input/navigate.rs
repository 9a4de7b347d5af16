use std::time::Instant;

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use crate::tui::app::{App, Mode};

pub(super) fn handle_navigate(app: &mut App, key: KeyEvent) {
    match (key.modifiers, key.code) {
        (KeyModifiers::NONE, KeyCode::Char('q')) => {
            app.persist();
            app.should_quit = true;
        }

        // Cursor movement
        (KeyModifiers::NONE, KeyCode::Char('j') | KeyCode::Down) => {
            if app.cursor + 1 < app.item_count() {
                app.cursor += 1;
            }
        }
        (KeyModifiers::NONE, KeyCode::Char('k') | KeyCode::Up) => {
            app.cursor = app.cursor.saturating_sub(1);
        }
        (KeyModifiers::NONE, KeyCode::Char('g')) => {
            app.cursor = 0;
        }
        (KeyModifiers::SHIFT, KeyCode::Char('G')) => {
            app.cursor = app.item_count().saturating_sub(1);
        }

        // Location tabs
        (KeyModifiers::NONE, KeyCode::Char('h') | KeyCode::Left) => {
            let idx = app.location_idx.saturating_sub(1);
            app.switch_location(idx);
        }
        (KeyModifiers::NONE, KeyCode::Char('l') | KeyCode::Right | KeyCode::Tab) => {
            let next = (app.location_idx + 1) % app.config.locations.len().max(1);
            app.switch_location(next);
        }
        (KeyModifiers::NONE, KeyCode::Char(c @ '1'..='9')) => {
            app.switch_location(c as usize - '1' as usize);
        }

        // Tap the item under the cursor
        (KeyModifiers::NONE, KeyCode::Enter | KeyCode::Char(' ')) => {
            app.on_tap(Instant::now());
        }

        // Done: generate the order report
        (KeyModifiers::NONE, KeyCode::Char('d')) => {
            app.generate_report();
        }
        // Copy the report (only meaningful while the panel is showing)
        (KeyModifiers::NONE, KeyCode::Char('c')) => {
            app.copy_report();
        }

        // Clear-all, gated by confirm mode
        (KeyModifiers::SHIFT, KeyCode::Char('X')) => {
            app.request_clear_all();
        }

        (_, KeyCode::Esc) => {
            if app.report_text.is_some() {
                app.report_text = None;
            } else {
                app.mode = Mode::Navigate;
            }
        }
        _ => {}
    }
}
