//! Search bar input state for the TUI

use unicode_width::UnicodeWidthStr;

/// Search input state: the raw text, a byte-offset cursor, and focus.
pub struct SearchState {
    pub query: String,
    pub cursor_pos: usize,
    pub focused: bool,
}

impl Default for SearchState {
    fn default() -> Self {
        Self {
            query: String::new(),
            cursor_pos: 0,
            focused: true,
        }
    }
}

impl SearchState {
    /// Insert a character at the cursor.
    pub fn insert(&mut self, c: char) {
        self.query.insert(self.cursor_pos, c);
        self.cursor_pos += c.len_utf8();
    }

    /// Remove the character before the cursor. Returns whether the
    /// text changed.
    pub fn backspace(&mut self) -> bool {
        match self.prev_boundary() {
            Some(prev) => {
                self.query.remove(prev);
                self.cursor_pos = prev;
                true
            }
            None => false,
        }
    }

    /// Remove the character under the cursor. Returns whether the
    /// text changed.
    pub fn delete_forward(&mut self) -> bool {
        if self.cursor_pos < self.query.len() {
            self.query.remove(self.cursor_pos);
            true
        } else {
            false
        }
    }

    pub fn move_left(&mut self) {
        if let Some(prev) = self.prev_boundary() {
            self.cursor_pos = prev;
        }
    }

    pub fn move_right(&mut self) {
        if let Some(c) = self.query[self.cursor_pos..].chars().next() {
            self.cursor_pos += c.len_utf8();
        }
    }

    pub fn move_home(&mut self) {
        self.cursor_pos = 0;
    }

    pub fn move_end(&mut self) {
        self.cursor_pos = self.query.len();
    }

    /// Append a character at the end, moving the cursor with it.
    /// Used when typing from table focus jumps into the search bar.
    pub fn append(&mut self, c: char) {
        self.query.push(c);
        self.cursor_pos = self.query.len();
    }

    /// Clear the text. Returns whether the text changed.
    pub fn clear(&mut self) -> bool {
        if self.query.is_empty() {
            return false;
        }
        self.query.clear();
        self.cursor_pos = 0;
        true
    }

    /// Display column of the cursor within the query text.
    pub fn cursor_column(&self) -> usize {
        UnicodeWidthStr::width(&self.query[..self.cursor_pos])
    }

    /// Byte offset of the character boundary before the cursor.
    fn prev_boundary(&self) -> Option<usize> {
        self.query[..self.cursor_pos]
            .char_indices()
            .last()
            .map(|(i, _)| i)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn insert_advances_cursor() {
        let mut search = SearchState::default();
        search.insert('L');
        search.insert('o');
        assert_eq!(search.query, "Lo");
        assert_eq!(search.cursor_pos, 2);
    }

    #[test]
    fn backspace_respects_char_boundaries() {
        let mut search = SearchState::default();
        search.insert('S');
        search.insert('ã');
        assert!(search.backspace());
        assert_eq!(search.query, "S");
        assert_eq!(search.cursor_pos, 1);
    }

    #[test]
    fn backspace_at_start_is_noop() {
        let mut search = SearchState::default();
        assert!(!search.backspace());
    }

    #[test]
    fn delete_forward_removes_under_cursor() {
        let mut search = SearchState::default();
        search.insert('a');
        search.insert('b');
        search.move_home();
        assert!(search.delete_forward());
        assert_eq!(search.query, "b");
        search.move_end();
        assert!(!search.delete_forward());
    }

    #[test]
    fn cursor_moves_over_multibyte_chars() {
        let mut search = SearchState::default();
        search.insert('é');
        search.insert('x');
        search.move_left();
        search.move_left();
        assert_eq!(search.cursor_pos, 0);
        search.move_right();
        assert_eq!(search.cursor_pos, 'é'.len_utf8());
    }

    #[test]
    fn clear_reports_whether_anything_was_cleared() {
        let mut search = SearchState::default();
        assert!(!search.clear());
        search.insert('x');
        assert!(search.clear());
        assert_eq!(search.cursor_pos, 0);
    }

    #[test]
    fn cursor_column_counts_display_width() {
        let mut search = SearchState::default();
        search.insert('a');
        search.insert('é');
        assert_eq!(search.cursor_column(), 2);
    }
}
