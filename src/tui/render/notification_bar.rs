use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;

use crate::tui::app::App;
use crate::util::unicode;

/// The single transient message row. Blank when nothing is showing.
pub fn render_notification_bar(frame: &mut Frame, app: &App, area: Rect) {
    let bg = app.theme.background;
    let width = area.width as usize;

    let line = match app.notification() {
        Some(note) => {
            let accent = app.theme.notification_color(note.kind);
            let text = unicode::truncate_to_width(&note.text, width.saturating_sub(3));
            Line::from(vec![
                Span::styled(" \u{258C}", Style::default().fg(accent).bg(bg)), // ▌ accent bar
                Span::styled(
                    text,
                    Style::default()
                        .fg(accent)
                        .bg(bg)
                        .add_modifier(Modifier::BOLD),
                ),
            ])
        }
        None => Line::from(Span::styled(" ".repeat(width), Style::default().bg(bg))),
    };

    frame.render_widget(Paragraph::new(line).style(Style::default().bg(bg)), area);
}
