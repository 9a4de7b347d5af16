use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::Style;
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;

use crate::tui::app::{App, Mode};

/// Render the status row (bottom of screen): transient message if present,
/// otherwise the key hints for the current mode
pub fn render_status_row(frame: &mut Frame, app: &App, area: Rect) {
    let bg = app.theme.background;
    let width = area.width as usize;

    let line = if let Some(message) = &app.status_message {
        Line::from(Span::styled(
            format!(" {}", message),
            Style::default().fg(app.theme.yellow).bg(bg),
        ))
    } else {
        let hint = match &app.mode {
            Mode::Navigate => {
                if app.report_text.is_some() {
                    "c copy  Esc close  q quit".to_string()
                } else {
                    "Enter tap  j/k move  Tab location  d done  X clear all  q quit".to_string()
                }
            }
            Mode::Selected { item, .. } => format!("tap {} again to edit", item),
            Mode::Edit => "type a quantity, \u{2190}\u{2192} pick unit".to_string(),
            Mode::Confirm(_) => "y confirm  n cancel".to_string(),
        };
        Line::from(Span::styled(
            format!(" {}", hint),
            Style::default().fg(app.theme.dim).bg(bg),
        ))
    };

    let mut spans = line.spans;
    let used: usize = spans.iter().map(|s| s.content.chars().count()).sum();
    if used < width {
        spans.push(Span::styled(" ".repeat(width - used), Style::default().bg(bg)));
    }

    frame.render_widget(
        Paragraph::new(Line::from(spans)).style(Style::default().bg(bg)),
        area,
    );
}
