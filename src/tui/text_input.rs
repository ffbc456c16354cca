use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use crate::util::unicode;

/// Single-line text buffer with a grapheme-aware byte cursor
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TextInput {
    pub buffer: String,
    /// Byte offset into `buffer`, always on a grapheme boundary
    pub cursor: usize,
}

impl TextInput {
    pub fn new() -> Self {
        Self::default()
    }

    /// Wrap existing text, clamping the cursor to its length
    pub fn with_cursor(buffer: String, cursor: usize) -> Self {
        let cursor = cursor.min(buffer.len());
        TextInput { buffer, cursor }
    }

    /// Replace the text and put the cursor at the end
    pub fn set(&mut self, text: &str) {
        self.buffer = text.to_string();
        self.cursor = self.buffer.len();
    }

    pub fn clear(&mut self) {
        self.buffer.clear();
        self.cursor = 0;
    }

    pub fn is_blank(&self) -> bool {
        self.buffer.trim().is_empty()
    }

    pub fn insert_char(&mut self, c: char) {
        self.buffer.insert(self.cursor, c);
        self.cursor += c.len_utf8();
    }

    pub fn backspace(&mut self) {
        if let Some(prev) = unicode::prev_grapheme_boundary(&self.buffer, self.cursor) {
            self.buffer.drain(prev..self.cursor);
            self.cursor = prev;
        }
    }

    pub fn delete(&mut self) {
        if let Some(next) = unicode::next_grapheme_boundary(&self.buffer, self.cursor) {
            self.buffer.drain(self.cursor..next);
        }
    }

    pub fn move_left(&mut self) {
        if let Some(prev) = unicode::prev_grapheme_boundary(&self.buffer, self.cursor) {
            self.cursor = prev;
        }
    }

    pub fn move_right(&mut self) {
        if let Some(next) = unicode::next_grapheme_boundary(&self.buffer, self.cursor) {
            self.cursor = next;
        }
    }

    /// Text before and after the cursor, for rendering
    pub fn split_at_cursor(&self) -> (&str, &str) {
        self.buffer.split_at(self.cursor)
    }

    /// Apply a line-editing key. Returns false if the key isn't an editing key.
    pub fn handle_key(&mut self, key: KeyEvent) -> bool {
        match (key.modifiers, key.code) {
            (m, KeyCode::Char(c))
                if !m.contains(KeyModifiers::CONTROL) && !m.contains(KeyModifiers::ALT) =>
            {
                self.insert_char(c);
            }
            // Ctrl+U: clear to start of line
            (m, KeyCode::Char('u')) if m.contains(KeyModifiers::CONTROL) => {
                self.buffer.drain(..self.cursor);
                self.cursor = 0;
            }
            (_, KeyCode::Backspace) => self.backspace(),
            (_, KeyCode::Delete) => self.delete(),
            (_, KeyCode::Left) => self.move_left(),
            (_, KeyCode::Right) => self.move_right(),
            (_, KeyCode::Home) => self.cursor = 0,
            (_, KeyCode::End) => self.cursor = self.buffer.len(),
            _ => return false,
        }
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    fn typed(text: &str) -> TextInput {
        let mut input = TextInput::new();
        for c in text.chars() {
            assert!(input.handle_key(key(KeyCode::Char(c))));
        }
        input
    }

    #[test]
    fn typing_appends_at_cursor() {
        let input = typed("Buy milk");
        assert_eq!(input.buffer, "Buy milk");
        assert_eq!(input.cursor, 8);
    }

    #[test]
    fn insert_in_middle() {
        let mut input = typed("Buymilk");
        for _ in 0..4 {
            input.handle_key(key(KeyCode::Left));
        }
        input.handle_key(key(KeyCode::Char(' ')));
        assert_eq!(input.buffer, "Buy milk");
        assert_eq!(input.split_at_cursor(), ("Buy ", "milk"));
    }

    #[test]
    fn backspace_and_delete_respect_graphemes() {
        let mut input = TextInput::with_cursor("cafe\u{0301}!".to_string(), 6);
        input.backspace();
        assert_eq!(input.buffer, "caf!");
        assert_eq!(input.cursor, 3);
        input.handle_key(key(KeyCode::Home));
        input.delete();
        assert_eq!(input.buffer, "af!");
        assert_eq!(input.cursor, 0);
        input.backspace();
        assert_eq!(input.buffer, "af!");
    }

    #[test]
    fn home_end_and_clear_line() {
        let mut input = typed("hello world");
        input.handle_key(key(KeyCode::Home));
        assert_eq!(input.cursor, 0);
        input.handle_key(key(KeyCode::End));
        assert_eq!(input.cursor, 11);
        for _ in 0..5 {
            input.move_left();
        }
        input.handle_key(KeyEvent::new(KeyCode::Char('u'), KeyModifiers::CONTROL));
        assert_eq!(input.buffer, "world");
        assert_eq!(input.cursor, 0);
    }

    #[test]
    fn non_editing_keys_are_not_consumed() {
        let mut input = TextInput::new();
        assert!(!input.handle_key(key(KeyCode::Enter)));
        assert!(!input.handle_key(key(KeyCode::Esc)));
        assert!(!input.handle_key(KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL)));
        assert!(input.buffer.is_empty());
    }

    #[test]
    fn blank_detection_and_set() {
        let mut input = typed("   ");
        assert!(input.is_blank());
        input.set("Draft");
        assert!(!input.is_blank());
        assert_eq!(input.cursor, 5);
        input.clear();
        assert_eq!(input, TextInput::new());
    }
}
