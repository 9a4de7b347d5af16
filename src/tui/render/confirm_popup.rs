use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Clear, Paragraph};

use crate::tui::app::App;

/// Render the blocking yes/no prompt gating clear-all
pub fn render_confirm_popup(frame: &mut Frame, app: &App, area: Rect) {
    let bg = app.theme.background;
    let popup_w: u16 = 34;
    let inner_w = popup_w.saturating_sub(2) as usize;

    let center = |text: &str, style: Style| {
        let len = text.chars().count();
        let pad = inner_w.saturating_sub(len);
        let left = pad / 2;
        Line::from(vec![
            Span::styled(" ".repeat(left), Style::default().bg(bg)),
            Span::styled(text.to_string(), style),
            Span::styled(" ".repeat(pad - left), Style::default().bg(bg)),
        ])
    };

    let lines = vec![
        center("", Style::default().bg(bg)),
        center(
            "Clear ALL inventory?",
            Style::default()
                .fg(app.theme.text_bright)
                .bg(bg)
                .add_modifier(Modifier::BOLD),
        ),
        center("", Style::default().bg(bg)),
        center("y confirm   n cancel", Style::default().fg(app.theme.dim).bg(bg)),
    ];

    let popup_h = (lines.len() as u16 + 2).min(area.height);
    let x = area.x + area.width.saturating_sub(popup_w) / 2;
    let y = area.y + area.height.saturating_sub(popup_h) / 2;
    let popup_area = Rect::new(x, y, popup_w.min(area.width), popup_h);

    frame.render_widget(Clear, popup_area);

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(app.theme.red).bg(bg))
        .style(Style::default().bg(bg));

    frame.render_widget(
        Paragraph::new(lines).block(block).style(Style::default().bg(bg)),
        popup_area,
    );
}
