//! Single-line text editing with grapheme-aware cursor movement.

use unicode_segmentation::UnicodeSegmentation;

/// Editable text plus a cursor measured in grapheme clusters.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct TextInput {
    text: String,
    cursor: usize,
}

impl TextInput {
    #[must_use]
    pub fn new(text: impl Into<String>) -> Self {
        let mut input = Self::default();
        input.set_text(text.into());
        input
    }

    #[must_use]
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Cursor position in graphemes.
    #[must_use]
    pub fn cursor(&self) -> usize {
        self.cursor
    }

    /// Text before the cursor, used to place the terminal caret.
    #[must_use]
    pub fn text_before_cursor(&self) -> &str {
        &self.text[..self.byte_index_at(self.cursor)]
    }

    pub fn set_text(&mut self, text: String) {
        self.text = text;
        self.cursor = self.grapheme_count();
    }

    pub fn clear(&mut self) {
        self.text.clear();
        self.cursor = 0;
    }

    /// Insert a character. Line breaks are dropped: the field is single-line.
    pub fn enter_char(&mut self, ch: char) {
        if matches!(ch, '\n' | '\r') {
            return;
        }
        let index = self.byte_index_at(self.cursor);
        self.text.insert(index, ch);
        self.move_cursor_right();
    }

    /// Insert pasted text, with line breaks removed.
    pub fn enter_text(&mut self, text: &str) {
        let cleaned: String = text.chars().filter(|c| !matches!(c, '\n' | '\r')).collect();
        if cleaned.is_empty() {
            return;
        }
        let index = self.byte_index_at(self.cursor);
        self.text.insert_str(index, &cleaned);
        let inserted = cleaned.graphemes(true).count();
        self.cursor = (self.cursor + inserted).min(self.grapheme_count());
    }

    pub fn delete_char(&mut self) {
        if self.cursor == 0 {
            return;
        }
        let start = self.byte_index_at(self.cursor - 1);
        let end = self.byte_index_at(self.cursor);
        self.text.replace_range(start..end, "");
        self.cursor -= 1;
    }

    pub fn delete_char_forward(&mut self) {
        if self.cursor >= self.grapheme_count() {
            return;
        }
        let start = self.byte_index_at(self.cursor);
        let end = self.byte_index_at(self.cursor + 1);
        self.text.replace_range(start..end, "");
    }

    /// Delete back to the previous whitespace boundary.
    pub fn delete_word_backwards(&mut self) {
        let graphemes: Vec<&str> = self.text.graphemes(true).take(self.cursor).collect();
        let trailing_ws = graphemes
            .iter()
            .rev()
            .take_while(|g| is_whitespace(g))
            .count();
        let word = graphemes
            .iter()
            .rev()
            .skip(trailing_ws)
            .take_while(|g| !is_whitespace(g))
            .count();
        let start = self.byte_index_at(self.cursor - trailing_ws - word);
        let end = self.byte_index_at(self.cursor);
        self.text.replace_range(start..end, "");
        self.cursor -= trailing_ws + word;
    }

    pub fn move_cursor_left(&mut self) {
        self.cursor = self.cursor.saturating_sub(1);
    }

    pub fn move_cursor_right(&mut self) {
        self.cursor = (self.cursor + 1).min(self.grapheme_count());
    }

    pub fn move_cursor_home(&mut self) {
        self.cursor = 0;
    }

    pub fn move_cursor_end(&mut self) {
        self.cursor = self.grapheme_count();
    }

    fn grapheme_count(&self) -> usize {
        self.text.graphemes(true).count()
    }

    fn byte_index_at(&self, grapheme_index: usize) -> usize {
        self.text
            .grapheme_indices(true)
            .nth(grapheme_index)
            .map_or(self.text.len(), |(i, _)| i)
    }
}

fn is_whitespace(grapheme: &str) -> bool {
    grapheme.chars().all(char::is_whitespace)
}

#[cfg(test)]
mod tests {
    use super::TextInput;

    #[test]
    fn typing_appends_at_cursor() {
        let mut input = TextInput::default();
        for ch in "a@b.c".chars() {
            input.enter_char(ch);
        }
        assert_eq!(input.text(), "a@b.c");
        assert_eq!(input.cursor(), 5);
    }

    #[test]
    fn insert_in_middle() {
        let mut input = TextInput::new("ac");
        input.move_cursor_left();
        input.enter_char('b');
        assert_eq!(input.text(), "abc");
        assert_eq!(input.text_before_cursor(), "ab");
    }

    #[test]
    fn backspace_and_delete_respect_graphemes() {
        let mut input = TextInput::new("e\u{301}x");
        input.move_cursor_left();
        input.delete_char();
        assert_eq!(input.text(), "x");
        input.move_cursor_home();
        input.delete_char_forward();
        assert_eq!(input.text(), "");
        input.delete_char();
        assert_eq!(input.cursor(), 0);
    }

    #[test]
    fn newlines_are_dropped() {
        let mut input = TextInput::default();
        input.enter_char('\n');
        input.enter_text("owner@\r\nexample.com\n");
        assert_eq!(input.text(), "owner@example.com");
        assert_eq!(input.cursor(), 17);
    }

    #[test]
    fn delete_word_backwards_stops_at_whitespace() {
        let mut input = TextInput::new("hello big world  ");
        input.delete_word_backwards();
        assert_eq!(input.text(), "hello big ");
        input.delete_word_backwards();
        assert_eq!(input.text(), "hello ");
        input.move_cursor_home();
        input.delete_word_backwards();
        assert_eq!(input.text(), "hello ");
    }

    #[test]
    fn cursor_movement_is_clamped() {
        let mut input = TextInput::new("ab");
        input.move_cursor_right();
        assert_eq!(input.cursor(), 2);
        input.move_cursor_home();
        input.move_cursor_left();
        assert_eq!(input.cursor(), 0);
        input.move_cursor_end();
        assert_eq!(input.cursor(), 2);
    }
}
