pub mod confirm_popup;
pub mod edit_popup;
pub mod grid_view;
pub mod report_view;
pub mod status_row;
pub mod tab_bar;

use ratatui::Frame;
use ratatui::layout::{Constraint, Direction, Layout};
use ratatui::style::Style;
use ratatui::widgets::Block;

use super::app::{App, Mode};

/// Main render function — dispatches to sub-renderers
pub fn render(frame: &mut Frame, app: &mut App) {
    let area = frame.area();

    // Background fill
    let bg_style = Style::default().bg(app.theme.background);
    frame.render_widget(Block::default().style(bg_style), area);

    // Layout: tab bar (2 rows) | content | status row (1 row)
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(2), // tab bar + separator
            Constraint::Min(1),    // content area
            Constraint::Length(1), // status row
        ])
        .split(area);

    tab_bar::render_tab_bar(frame, app, chunks[0]);

    // Report panel replaces the grid while the generated order is showing
    if app.report_text.is_some() {
        report_view::render_report_view(frame, app, chunks[1]);
    } else {
        grid_view::render_grid_view(frame, app, chunks[1]);
    }

    // Popups on top of the content
    if app.mode == Mode::Edit {
        edit_popup::render_edit_popup(frame, app, frame.area());
    }
    if matches!(app.mode, Mode::Confirm(_)) {
        confirm_popup::render_confirm_popup(frame, app, frame.area());
    }

    status_row::render_status_row(frame, app, chunks[2]);
}
