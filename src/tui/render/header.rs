use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;

use crate::tui::app::App;

pub const TITLE: &str = "Operational To-Dos";

/// Title and "N of M completed" summary
pub fn render_header(frame: &mut Frame, app: &App, area: Rect) {
    let bg = app.theme.background;
    let title_style = Style::default()
        .fg(app.theme.text_bright)
        .bg(bg)
        .add_modifier(Modifier::BOLD);
    let summary = format!(
        " {} of {} completed",
        app.store.completed_count(),
        app.store.total()
    );

    let lines = vec![
        Line::from(Span::styled(format!(" {}", TITLE), title_style)),
        Line::from(Span::styled(summary, Style::default().fg(app.theme.dim).bg(bg))),
    ];
    frame.render_widget(Paragraph::new(lines).style(Style::default().bg(bg)), area);
}
