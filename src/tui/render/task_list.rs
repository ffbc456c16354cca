use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;

use crate::model::Task;
use crate::tui::app::{App, Mode};
use crate::util::unicode;

use super::helpers::{scroll_to_cursor, spans_width};

pub const EMPTY_MESSAGE: &str = "No tasks yet. Time to stay organized.";
pub const EDIT_PLACEHOLDER: &str = "Edit task...";

/// Render the task list, scrolling to keep the cursor visible
pub fn render_task_list(frame: &mut Frame, app: &mut App, area: Rect) {
    let bg = app.theme.background;

    if app.store.is_empty() {
        let empty = Paragraph::new(format!(" {}", EMPTY_MESSAGE))
            .style(Style::default().fg(app.theme.dim).bg(bg));
        frame.render_widget(empty, area);
        return;
    }

    let visible_height = area.height as usize;
    app.clamp_cursor();
    if visible_height == 0 {
        app.scroll_offset = app.scroll_offset.min(app.cursor);
        return;
    }
    app.scroll_offset = scroll_to_cursor(app.scroll_offset, app.cursor, visible_height);

    let app: &App = app;
    let width = area.width as usize;
    let scroll = app.scroll_offset;
    let end = app.store.total().min(scroll + visible_height);

    let lines: Vec<Line> = app.store.tasks()[scroll..end]
        .iter()
        .enumerate()
        .map(|(i, task)| render_task_line(app, task, scroll + i == app.cursor, width))
        .collect();

    frame.render_widget(Paragraph::new(lines).style(Style::default().bg(bg)), area);
}

fn render_task_line<'a>(app: &'a App, task: &'a Task, is_cursor: bool, width: usize) -> Line<'a> {
    let bg = app.theme.background;
    let row_bg = if is_cursor { app.theme.selection_bg } else { bg };
    let mut spans: Vec<Span> = Vec::new();

    // Column 0: cursor accent bar
    if is_cursor {
        spans.push(Span::styled(
            "\u{258E}",
            Style::default().fg(app.theme.highlight).bg(row_bg),
        ));
    } else {
        spans.push(Span::styled(" ", Style::default().bg(bg)));
    }

    let checkbox_color = if task.completed {
        app.theme.green
    } else {
        app.theme.text
    };
    spans.push(Span::styled(
        format!("{} ", task.checkbox()),
        Style::default().fg(checkbox_color).bg(row_bg),
    ));

    let editing = app.mode == Mode::Edit && app.edit.is_editing(task.id);
    if editing {
        let draft = app.edit.draft();
        let cursor = app.edit_cursor.min(draft.len());
        let (before, after) = draft.split_at(cursor);
        let text_style = Style::default()
            .fg(app.theme.text_bright)
            .bg(row_bg)
            .add_modifier(Modifier::UNDERLINED);
        spans.push(Span::styled(before, text_style));
        spans.push(Span::styled(
            "\u{258C}",
            Style::default().fg(app.theme.highlight).bg(row_bg),
        ));
        spans.push(Span::styled(after, text_style));
        if draft.is_empty() {
            spans.push(Span::styled(
                EDIT_PLACEHOLDER,
                Style::default().fg(app.theme.dim).bg(row_bg),
            ));
        }
    } else {
        let title_style = if task.completed {
            Style::default()
                .fg(app.theme.dim)
                .bg(row_bg)
                .add_modifier(Modifier::CROSSED_OUT)
        } else if is_cursor {
            Style::default()
                .fg(app.theme.text_bright)
                .bg(row_bg)
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(app.theme.text_bright).bg(row_bg)
        };
        let available = width.saturating_sub(spans_width(&spans));
        spans.push(Span::styled(
            unicode::truncate_to_width(&task.title, available),
            title_style,
        ));
    }

    // Pad cursor line so the highlight spans the full width
    if is_cursor {
        let used = spans_width(&spans);
        spans.push(Span::styled(
            unicode::padding(used, width),
            Style::default().bg(row_bg),
        ));
    }

    Line::from(spans)
}
