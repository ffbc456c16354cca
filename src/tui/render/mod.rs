pub mod footer;
pub mod header;
pub mod help_overlay;
pub mod helpers;
pub mod input_box;
pub mod notification_bar;
pub mod status_row;
pub mod task_list;

#[cfg(test)]
pub mod test_helpers;

use ratatui::Frame;
use ratatui::layout::{Constraint, Direction, Layout};
use ratatui::style::Style;
use ratatui::widgets::Block;

use super::app::App;

/// Draw the whole screen, top to bottom
pub fn render(frame: &mut Frame, app: &mut App) {
    let area = frame.area();

    // Background fill
    let bg_style = Style::default().bg(app.theme.background);
    frame.render_widget(Block::default().style(bg_style), area);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(2), // title + completion count
            Constraint::Length(1), // notification
            Constraint::Length(3), // new-task input
            Constraint::Min(1),    // task list
            Constraint::Length(1), // footer
            Constraint::Length(1), // status row
        ])
        .split(area);

    header::render_header(frame, app, chunks[0]);
    notification_bar::render_notification_bar(frame, app, chunks[1]);
    input_box::render_input_box(frame, app, chunks[2]);
    task_list::render_task_list(frame, app, chunks[3]);
    footer::render_footer(frame, app, chunks[4]);
    status_row::render_status_row(frame, app, chunks[5]);

    // Help overlay (rendered on top of everything)
    if app.show_help {
        help_overlay::render_help_overlay(frame, app, frame.area());
    }
}
