use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Clear, Paragraph};

use crate::report;
use crate::tui::app::App;

/// Render the quantity/unit edit popup, centered over the grid
pub fn render_edit_popup(frame: &mut Frame, app: &App, area: Rect) {
    let Some(edit) = &app.edit else { return };

    let bg = app.theme.background;
    let dim = app.theme.dim;
    let popup_w: u16 = 44;
    let inner_w = popup_w.saturating_sub(2) as usize;

    let unit = app
        .config
        .units
        .get(edit.unit_idx)
        .map(String::as_str)
        .unwrap_or("?");

    let mut lines: Vec<Line> = Vec::new();
    lines.push(Line::from(Span::styled(
        " ".repeat(inner_w),
        Style::default().bg(bg),
    )));
    lines.push(Line::from(vec![
        Span::styled("  Qty:  ", Style::default().fg(dim).bg(bg)),
        Span::styled(
            edit.draft_qty.clone(),
            Style::default().fg(app.theme.text_bright).bg(bg),
        ),
        Span::styled("\u{258C}", Style::default().fg(app.theme.highlight).bg(bg)),
    ]));
    lines.push(Line::from(vec![
        Span::styled("  Unit: ", Style::default().fg(dim).bg(bg)),
        Span::styled("\u{25C2} ", Style::default().fg(app.theme.highlight).bg(bg)),
        Span::styled(
            unit,
            Style::default()
                .fg(app.theme.text_bright)
                .bg(bg)
                .add_modifier(Modifier::BOLD),
        ),
        Span::styled(" \u{25B8}", Style::default().fg(app.theme.highlight).bg(bg)),
    ]));

    // Committed totals for this item at this location
    if let Some(ledger) = app.snapshot.ledger(&edit.location, &edit.item) {
        let summary = report::summarize_ledger(ledger);
        if !summary.is_empty() {
            lines.push(Line::from(Span::styled(
                format!("  so far: {}", summary),
                Style::default().fg(app.theme.green).bg(bg),
            )));
        }
    }

    lines.push(Line::from(Span::styled(
        " ".repeat(inner_w),
        Style::default().bg(bg),
    )));

    // Hint bar
    let hint = "Enter save  u undo  U redo  Esc cancel";
    let hint_len = hint.chars().count();
    let hint_pad = inner_w.saturating_sub(hint_len);
    let left_pad = hint_pad / 2;
    lines.push(Line::from(vec![
        Span::styled(" ".repeat(left_pad), Style::default().bg(bg)),
        Span::styled(hint, Style::default().fg(dim).bg(bg)),
        Span::styled(
            " ".repeat(hint_pad - left_pad),
            Style::default().bg(bg),
        ),
    ]));

    let popup_h = (lines.len() as u16 + 2).min(area.height.saturating_sub(2));
    let x = area.x + area.width.saturating_sub(popup_w) / 2;
    let y = area.y + area.height.saturating_sub(popup_h) / 2;
    let popup_area = Rect::new(x, y, popup_w.min(area.width), popup_h);

    frame.render_widget(Clear, popup_area);

    let title = format!(" Edit {} ", edit.item);
    let block = Block::default()
        .title(Span::styled(
            title,
            Style::default()
                .fg(app.theme.highlight)
                .bg(bg)
                .add_modifier(Modifier::BOLD),
        ))
        .borders(Borders::ALL)
        .border_style(Style::default().fg(app.theme.selection_border).bg(bg))
        .style(Style::default().bg(bg));

    frame.render_widget(
        Paragraph::new(lines).block(block).style(Style::default().bg(bg)),
        popup_area,
    );
}
