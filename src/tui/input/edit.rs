use crossterm::event::{KeyCode, KeyEvent};

use crate::tui::app::{App, Mode};
use crate::tui::text_input::TextInput;

/// Renaming a task. Enter saves; Esc resets the draft but stays in edit;
/// Up/Down drop the draft and start renaming the neighboring task.
pub(super) fn handle_edit(app: &mut App, key: KeyEvent) {
    let Some(id) = app.edit.active() else {
        app.mode = Mode::Navigate;
        return;
    };

    match key.code {
        KeyCode::Enter => app.commit_edit(id),
        KeyCode::Esc => app.reseed_edit(),
        KeyCode::Up => switch_target(app, -1),
        KeyCode::Down => switch_target(app, 1),
        _ => {
            let mut input = TextInput::with_cursor(app.edit.draft().to_string(), app.edit_cursor);
            if input.handle_key(key) {
                app.update_draft(&input.buffer);
                app.edit_cursor = input.cursor;
            }
        }
    }
}

fn switch_target(app: &mut App, delta: isize) {
    let total = app.store.total();
    if total == 0 {
        return;
    }
    let next = app.cursor.saturating_add_signed(delta).min(total - 1);
    if next == app.cursor {
        return;
    }
    app.cursor = next;
    if let Some((id, title)) = app.cursor_task().map(|t| (t.id, t.title.clone())) {
        app.begin_edit(id, &title);
    }
}
