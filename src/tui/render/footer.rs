use ratatui::Frame;
use ratatui::layout::{Alignment, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::widgets::Paragraph;

use crate::tui::app::App;

pub const TAGLINE: &str = "Built to keep the chaos in check.";

pub fn render_footer(frame: &mut Frame, app: &App, area: Rect) {
    let style = Style::default()
        .fg(app.theme.dim)
        .bg(app.theme.background)
        .add_modifier(Modifier::ITALIC);
    let footer = Paragraph::new(TAGLINE)
        .alignment(Alignment::Center)
        .style(style);
    frame.render_widget(footer, area);
}
