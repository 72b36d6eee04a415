//! Single-line text field for form inputs.
//!
//! Stores the value and a char-based cursor. Rendering can mask the value
//! (password fields) without touching the stored text.

use unicode_width::UnicodeWidthStr;

/// Character shown in place of each masked char.
pub const MASK_CHAR: char = '•';

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TextField {
    value: String,
    cursor: usize,
}

impl TextField {
    pub fn value(&self) -> &str {
        &self.value
    }

    pub fn is_empty(&self) -> bool {
        self.value.is_empty()
    }

    /// Cursor position in chars.
    pub fn cursor(&self) -> usize {
        self.cursor
    }

    pub fn clear(&mut self) {
        self.value.clear();
        self.cursor = 0;
    }

    /// Inserts a char at the cursor. Newlines and control chars are dropped.
    pub fn insert_char(&mut self, ch: char) {
        if ch.is_control() {
            return;
        }
        let byte_idx = char_to_byte_index(&self.value, self.cursor);
        self.value.insert(byte_idx, ch);
        self.cursor += 1;
    }

    /// Inserts pasted text, keeping only the first line.
    pub fn insert_str(&mut self, text: &str) {
        let first_line = text.lines().next().unwrap_or("");
        let cleaned: String = first_line.chars().filter(|c| !c.is_control()).collect();
        let byte_idx = char_to_byte_index(&self.value, self.cursor);
        self.value.insert_str(byte_idx, &cleaned);
        self.cursor += cleaned.chars().count();
    }

    /// Backspace semantics.
    pub fn delete_prev_char(&mut self) {
        if self.cursor == 0 {
            return;
        }
        let start = char_to_byte_index(&self.value, self.cursor - 1);
        let end = char_to_byte_index(&self.value, self.cursor);
        self.value.replace_range(start..end, "");
        self.cursor -= 1;
    }

    /// Delete key semantics.
    pub fn delete_next_char(&mut self) {
        if self.cursor >= self.char_len() {
            return;
        }
        let start = char_to_byte_index(&self.value, self.cursor);
        let end = char_to_byte_index(&self.value, self.cursor + 1);
        self.value.replace_range(start..end, "");
    }

    pub fn move_left(&mut self) {
        self.cursor = self.cursor.saturating_sub(1);
    }

    pub fn move_right(&mut self) {
        self.cursor = (self.cursor + 1).min(self.char_len());
    }

    pub fn move_home(&mut self) {
        self.cursor = 0;
    }

    pub fn move_end(&mut self) {
        self.cursor = self.char_len();
    }

    /// Text to draw, masked or plain.
    pub fn display(&self, masked: bool) -> String {
        if masked {
            std::iter::repeat_n(MASK_CHAR, self.char_len()).collect()
        } else {
            self.value.clone()
        }
    }

    /// Terminal column of the cursor relative to the start of the text.
    ///
    /// Saturates at `u16::MAX` for values wider than any terminal.
    pub fn cursor_column(&self, masked: bool) -> u16 {
        let width = if masked {
            self.cursor
        } else {
            let byte_idx = char_to_byte_index(&self.value, self.cursor);
            self.value[..byte_idx].width()
        };
        u16::try_from(width).unwrap_or(u16::MAX)
    }

    fn char_len(&self) -> usize {
        self.value.chars().count()
    }
}

fn char_to_byte_index(line: &str, col: usize) -> usize {
    if col == 0 {
        return 0;
    }
    line.char_indices()
        .nth(col)
        .map_or(line.len(), |(i, _)| i)
}
