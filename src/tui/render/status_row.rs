use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::Style;
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;

use crate::tui::app::{App, Mode};
use crate::util::unicode;

/// Render the status row (bottom of screen)
pub fn render_status_row(frame: &mut Frame, app: &App, area: Rect) {
    let bg = app.theme.background;
    let width = area.width as usize;

    let (label, hint) = match app.mode {
        Mode::Navigate => ("", "a add  e edit  space toggle  d delete  ? help  q quit"),
        Mode::Input => ("-- ADD --", "Enter add  Esc done"),
        Mode::Edit => ("-- EDIT --", "Enter save  Esc reset"),
    };

    let mut spans = vec![Span::styled(
        format!(" {}", label),
        Style::default().fg(app.theme.highlight).bg(bg),
    )];
    if app.show_key_hints {
        let content_width = unicode::display_width(label) + 1;
        let hint_width = unicode::display_width(hint);
        if content_width + hint_width < width {
            spans.push(Span::styled(
                unicode::padding(content_width + hint_width, width),
                Style::default().bg(bg),
            ));
            spans.push(Span::styled(hint, Style::default().fg(app.theme.dim).bg(bg)));
        }
    }

    let paragraph = Paragraph::new(Line::from(spans)).style(Style::default().bg(bg));
    frame.render_widget(paragraph, area);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tui::render::test_helpers::*;

    #[test]
    fn hints_follow_mode() {
        let mut app = default_app();
        let output = render_to_string(TERM_W, 1, |frame, area| {
            render_status_row(frame, &app, area);
        });
        assert!(output.ends_with("? help  q quit"));

        app.mode = Mode::Edit;
        let output = render_to_string(TERM_W, 1, |frame, area| {
            render_status_row(frame, &app, area);
        });
        assert!(output.starts_with(" -- EDIT --"));
        assert!(output.ends_with("Enter save  Esc reset"));
    }

    #[test]
    fn hints_can_be_hidden() {
        let mut app = default_app();
        app.show_key_hints = false;
        app.mode = Mode::Input;
        let output = render_to_string(TERM_W, 1, |frame, area| {
            render_status_row(frame, &app, area);
        });
        assert_eq!(output, " -- ADD --");
    }

    #[test]
    fn narrow_terminal_drops_hints() {
        let app = default_app();
        let output = render_to_string(20, 1, |frame, area| {
            render_status_row(frame, &app, area);
        });
        assert_eq!(output, "");
    }
}
