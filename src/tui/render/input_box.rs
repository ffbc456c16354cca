use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::Style;
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};

use crate::tui::app::{App, Mode};

pub const PLACEHOLDER: &str = "Add a new task...";

/// Bordered box for typing a new task
pub fn render_input_box(frame: &mut Frame, app: &App, area: Rect) {
    let bg = app.theme.background;
    let focused = app.mode == Mode::Input;
    let border_color = if focused {
        app.theme.highlight
    } else {
        app.theme.dim
    };
    let text_style = Style::default().fg(app.theme.text_bright).bg(bg);

    let mut spans: Vec<Span> = Vec::new();
    if focused {
        let (before, after) = app.new_task.split_at_cursor();
        spans.push(Span::styled(before.to_string(), text_style));
        spans.push(Span::styled(
            "\u{258C}", // ▌ cursor
            Style::default().fg(app.theme.highlight).bg(bg),
        ));
        spans.push(Span::styled(after.to_string(), text_style));
        if app.new_task.buffer.is_empty() {
            spans.push(Span::styled(
                PLACEHOLDER,
                Style::default().fg(app.theme.dim).bg(bg),
            ));
        }
    } else if app.new_task.buffer.is_empty() {
        spans.push(Span::styled(
            PLACEHOLDER,
            Style::default().fg(app.theme.dim).bg(bg),
        ));
    } else {
        spans.push(Span::styled(app.new_task.buffer.clone(), text_style));
    }

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(border_color).bg(bg))
        .title(Span::styled(" + ", Style::default().fg(border_color).bg(bg)))
        .style(Style::default().bg(bg));

    let paragraph = Paragraph::new(Line::from(spans))
        .block(block)
        .style(Style::default().bg(bg));
    frame.render_widget(paragraph, area);
}
