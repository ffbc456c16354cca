use crossterm::event::{KeyCode, KeyEvent};

use crate::tui::app::{App, Mode};

/// Typing into the new-task box
pub(super) fn handle_task_input(app: &mut App, key: KeyEvent) {
    match key.code {
        KeyCode::Enter => {
            // Blank submissions are dropped before reaching the store
            if app.new_task.is_blank() {
                return;
            }
            let text = app.new_task.buffer.clone();
            if app.add_task(&text).is_some() {
                app.new_task.clear();
            }
        }
        KeyCode::Esc => app.mode = Mode::Navigate,
        _ => {
            app.new_task.handle_key(key);
        }
    }
}
