use crossterm::event::{KeyCode, KeyEvent};

use crate::tui::app::{App, Mode};

pub(super) fn handle_navigate(app: &mut App, key: KeyEvent) {
    // Help overlay swallows everything except its own toggles
    if app.show_help {
        if matches!(key.code, KeyCode::Char('?') | KeyCode::Esc | KeyCode::Char('q')) {
            app.show_help = false;
        }
        return;
    }

    match key.code {
        KeyCode::Char('q') => app.should_quit = true,
        KeyCode::Char('?') => app.show_help = true,
        KeyCode::Char('j') | KeyCode::Down => move_cursor(app, 1),
        KeyCode::Char('k') | KeyCode::Up => move_cursor(app, -1),
        KeyCode::Char('g') | KeyCode::Home => app.cursor = 0,
        KeyCode::Char('G') | KeyCode::End => {
            app.cursor = app.store.total().saturating_sub(1);
        }
        KeyCode::Char(' ') | KeyCode::Char('x') => {
            if let Some(id) = app.cursor_task().map(|t| t.id) {
                app.toggle_task(id);
            }
        }
        KeyCode::Char('e') | KeyCode::Enter => {
            if let Some((id, title)) = app.cursor_task().map(|t| (t.id, t.title.clone())) {
                app.begin_edit(id, &title);
            }
        }
        KeyCode::Char('d') | KeyCode::Delete => {
            if let Some(id) = app.cursor_task().map(|t| t.id) {
                app.remove_task(id);
            }
        }
        KeyCode::Char('a') | KeyCode::Char('i') | KeyCode::Char('/') => {
            app.mode = Mode::Input;
        }
        _ => {}
    }
}

fn move_cursor(app: &mut App, delta: isize) {
    let total = app.store.total();
    if total == 0 {
        return;
    }
    app.cursor = app.cursor.saturating_add_signed(delta).min(total - 1);
}
