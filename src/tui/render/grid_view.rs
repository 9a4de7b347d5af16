use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;

use crate::report;
use crate::tui::app::{App, GridRow, Mode};

/// Render the section-grouped item grid for the active location
pub fn render_grid_view(frame: &mut Frame, app: &mut App, area: Rect) {
    let rows = app.build_grid_rows();
    let location = app.current_location().to_string();

    // Row index of the cursor item, for scroll adjustment
    let cursor_row = rows
        .iter()
        .position(|r| matches!(r, GridRow::Item { index, .. } if *index == app.cursor))
        .unwrap_or(0);

    let visible = area.height as usize;
    if visible > 0 {
        if cursor_row < app.scroll_offset {
            app.scroll_offset = cursor_row;
        } else if cursor_row >= app.scroll_offset + visible {
            app.scroll_offset = cursor_row + 1 - visible;
        }
        app.scroll_offset = app.scroll_offset.min(rows.len().saturating_sub(visible));
    }

    let armed_item = match &app.mode {
        Mode::Selected { item, .. } => Some(item.as_str()),
        _ => None,
    };

    let bg = app.theme.background;
    let width = area.width as usize;
    let mut lines: Vec<Line> = Vec::new();

    for row in rows.iter().skip(app.scroll_offset).take(visible) {
        match row {
            GridRow::Section(title) => {
                lines.push(Line::from(Span::styled(
                    format!(" {}", title),
                    Style::default()
                        .fg(app.theme.highlight)
                        .bg(bg)
                        .add_modifier(Modifier::BOLD),
                )));
            }
            GridRow::Item { name, index } => {
                let is_cursor = *index == app.cursor;
                let is_armed = armed_item == Some(name.as_str());
                let row_bg = if is_cursor { app.theme.selection_bg } else { bg };

                let marker = if is_armed {
                    Span::styled(
                        " \u{25B8} ",
                        Style::default().fg(app.theme.selection_border).bg(row_bg),
                    )
                } else {
                    Span::styled("   ", Style::default().bg(row_bg))
                };

                let name_style = if is_cursor {
                    Style::default()
                        .fg(app.theme.text_bright)
                        .bg(row_bg)
                        .add_modifier(Modifier::BOLD)
                } else {
                    Style::default().fg(app.theme.text).bg(row_bg)
                };

                let mut spans = vec![marker, Span::styled(name.clone(), name_style)];

                // Per-location running totals shown next to the item name
                if let Some(ledger) = app.snapshot.ledger(&location, name) {
                    let summary = report::summarize_ledger(ledger);
                    if !summary.is_empty() {
                        spans.push(Span::styled(
                            format!("  {}", summary),
                            Style::default().fg(app.theme.green).bg(row_bg),
                        ));
                    }
                }

                // Pad cursor row background to full width
                if is_cursor {
                    let used: usize = spans.iter().map(|s| s.content.chars().count()).sum();
                    if used < width {
                        spans.push(Span::styled(
                            " ".repeat(width - used),
                            Style::default().bg(row_bg),
                        ));
                    }
                }

                lines.push(Line::from(spans));
            }
        }
    }

    frame.render_widget(
        Paragraph::new(lines).style(Style::default().bg(bg)),
        area,
    );
}
