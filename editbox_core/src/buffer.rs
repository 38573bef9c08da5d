//! Line-based text buffer
//!
//! The buffer owns every character of the document. Line breaks are never
//! stored: they exist only between two lines, and offset arithmetic accounts
//! for them with a stride of `len(line) + 1`.

use core::fmt;

use crate::cursor::Position;
use crate::error::{BufferError, BufferResult};
use crate::style::{Character, Style};

/// One logical line: characters in reading order, no terminator
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Line {
    chars: Vec<Character>,
}

impl Line {
    pub fn new() -> Self {
        Self { chars: Vec::new() }
    }

    /// Build a line from `text`, giving every character `style`
    pub fn from_str_styled(text: &str, style: Style) -> Self {
        Self {
            chars: text.chars().map(|ch| Character::new(ch, style)).collect(),
        }
    }

    pub fn len(&self) -> usize {
        self.chars.len()
    }

    pub fn is_empty(&self) -> bool {
        self.chars.is_empty()
    }

    pub fn chars(&self) -> &[Character] {
        &self.chars
    }

    pub fn get(&self, col: usize) -> Option<Character> {
        self.chars.get(col).copied()
    }

    /// Split at `col`, keeping `[0, col)` and returning `[col, len)` as a new line
    fn split_off(&mut self, col: usize) -> Line {
        Line {
            chars: self.chars.split_off(col),
        }
    }

    fn append(&mut self, other: Line) {
        self.chars.extend(other.chars);
    }
}

impl fmt::Display for Line {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for c in &self.chars {
            write!(f, "{}", c.ch())?;
        }
        Ok(())
    }
}

/// Text buffer with line-based storage. Never holds zero lines.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Buffer {
    lines: Vec<Line>,
}

impl Buffer {
    /// An empty document: one empty line
    pub fn new() -> Self {
        Self {
            lines: vec![Line::new()],
        }
    }

    pub fn from_text(text: &str) -> Self {
        Self::from_text_styled(text, Style::DEFAULT)
    }

    /// Parse `text` using `'\n'` as the only separator.
    ///
    /// A trailing newline produces a trailing empty line, so
    /// `from_text(s).text() == s` for every `s`.
    pub fn from_text_styled(text: &str, style: Style) -> Self {
        let lines = text
            .split('\n')
            .map(|l| Line::from_str_styled(l, style))
            .collect();
        Self { lines }
    }

    /// Serialize, joining lines with `'\n'`
    pub fn text(&self) -> String {
        let mut out = String::with_capacity(self.document_len());
        for (i, line) in self.lines.iter().enumerate() {
            if i > 0 {
                out.push('\n');
            }
            out.extend(line.chars().iter().map(Character::ch));
        }
        out
    }

    pub fn line_count(&self) -> usize {
        self.lines.len()
    }

    pub fn line(&self, line: usize) -> Option<&Line> {
        self.lines.get(line)
    }

    pub fn line_len(&self, line: usize) -> usize {
        self.lines.get(line).map(Line::len).unwrap_or(0)
    }

    pub fn lines(&self) -> &[Line] {
        &self.lines
    }

    /// Insert `ch` at `pos`, shifting the rest of the line right
    pub fn insert_character(&mut self, pos: Position, ch: Character) -> bool {
        let Some(line) = self.lines.get_mut(pos.line) else {
            return false;
        };
        if pos.col > line.len() {
            return false;
        }

        line.chars.insert(pos.col, ch);
        true
    }

    /// Backspace at `pos`.
    ///
    /// Removes the character before `pos`, or at column 0 joins the line onto
    /// the end of the previous one. Returns where the cursor lands, or `None`
    /// when there is nothing before `pos`.
    pub fn delete_character_before(&mut self, pos: Position) -> Option<Position> {
        let line_len = self.lines.get(pos.line)?.len();
        if pos.col > line_len {
            return None;
        }

        if pos.col > 0 {
            self.lines[pos.line].chars.remove(pos.col - 1);
            Some(Position::new(pos.line, pos.col - 1))
        } else if pos.line > 0 {
            let current = self.lines.remove(pos.line);
            let prev = &mut self.lines[pos.line - 1];
            let join_col = prev.len();
            prev.append(current);
            tracing::debug!(line = pos.line - 1, col = join_col, "line join");
            Some(Position::new(pos.line - 1, join_col))
        } else {
            None
        }
    }

    /// Split the line at `pos` into `[0, col)` and `[col, len)`
    pub fn split_line(&mut self, pos: Position) -> bool {
        let Some(line) = self.lines.get_mut(pos.line) else {
            return false;
        };
        if pos.col > line.len() {
            return false;
        }

        let rest = line.split_off(pos.col);
        self.lines.insert(pos.line + 1, rest);
        tracing::debug!(line = pos.line, col = pos.col, "line split");
        true
    }

    /// Number of characters in `text()`, line breaks included
    pub fn document_len(&self) -> usize {
        let chars: usize = self.lines.iter().map(Line::len).sum();
        chars + self.lines.len() - 1
    }

    /// Flatten `pos` to a document offset. Each earlier line counts `len + 1`.
    pub fn offset_of(&self, pos: Position) -> usize {
        let before: usize = self
            .lines
            .iter()
            .take(pos.line)
            .map(|l| l.len() + 1)
            .sum();
        before + pos.col
    }

    /// Character at a document offset.
    ///
    /// An offset that lands on a line break yields [`Character::newline`].
    pub fn character_at(&self, offset: usize) -> BufferResult<Character> {
        let len = self.document_len();
        if offset >= len {
            return Err(BufferError::OffsetOutOfRange { offset, len });
        }

        let mut remaining = offset;
        for line in &self.lines {
            if remaining < line.len() {
                return Ok(line.chars[remaining]);
            }
            if remaining == line.len() {
                return Ok(Character::newline());
            }
            remaining -= line.len() + 1;
        }

        Err(BufferError::OffsetOutOfRange { offset, len })
    }

    pub fn is_empty(&self) -> bool {
        self.lines.len() == 1 && self.lines[0].is_empty()
    }
}

impl Default for Buffer {
    fn default() -> Self {
        Self::new()
    }
}
