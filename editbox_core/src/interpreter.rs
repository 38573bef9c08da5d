//! EditCore: the Command/Insert interpreter
//!
//! Two modes, one cursor, one buffer. Every handled key ends the same way:
//! the cursor is clamped into the bounds of the (possibly new) mode, then
//! compared against where it started. That single comparison decides
//! whether the cursor moved.

use crate::{
    buffer::Buffer,
    cursor::Position,
    error::BufferResult,
    key::EditKey,
    mode::EditMode,
    snapshot::EditSnapshot,
    style::{Character, Style},
};

/// Outcome from applying a key or replacing the text
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CoreOutcome {
    /// Key has no meaning in the current mode; forward it elsewhere
    Unhandled,
    /// Key was consumed
    Handled {
        text_changed: bool,
        cursor_moved: bool,
    },
}

impl CoreOutcome {
    pub fn is_handled(&self) -> bool {
        matches!(self, CoreOutcome::Handled { .. })
    }

    pub fn text_changed(&self) -> bool {
        matches!(
            self,
            CoreOutcome::Handled {
                text_changed: true,
                ..
            }
        )
    }

    pub fn cursor_moved(&self) -> bool {
        matches!(
            self,
            CoreOutcome::Handled {
                cursor_moved: true,
                ..
            }
        )
    }
}

/// What a mode handler did, before clamping
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Dispatch {
    Ignored,
    Handled,
    Edited,
}

/// Editor core state machine
#[derive(Debug, Clone)]
pub struct EditCore {
    mode: EditMode,
    buffer: Buffer,
    cursor: Position,
    style: Style,
}

impl EditCore {
    /// Create an empty editor in command mode
    pub fn new() -> Self {
        Self {
            mode: EditMode::Command,
            buffer: Buffer::new(),
            cursor: Position::zero(),
            style: Style::DEFAULT,
        }
    }

    /// Style given to typed characters and to text loaded with `set_text`
    pub fn with_style(mut self, style: Style) -> Self {
        self.style = style;
        self.buffer = Buffer::from_text_styled(&self.buffer.text(), style);
        self
    }

    pub fn with_text(mut self, text: &str) -> Self {
        self.buffer = Buffer::from_text_styled(text, self.style);
        self.cursor = self.cursor.clamped(&self.buffer, self.mode);
        self
    }

    pub fn with_mode(mut self, mode: EditMode) -> Self {
        self.mode = mode;
        self.cursor = self.cursor.clamped(&self.buffer, self.mode);
        self
    }

    /// Apply a key event and return the outcome
    pub fn apply_key(&mut self, key: EditKey) -> CoreOutcome {
        let before = self.cursor;

        let dispatch = match self.mode {
            EditMode::Command => self.handle_command_mode(key),
            EditMode::Insert => self.handle_insert_mode(key),
        };
        if dispatch == Dispatch::Ignored {
            return CoreOutcome::Unhandled;
        }

        self.cursor = self.cursor.clamped(&self.buffer, self.mode);
        CoreOutcome::Handled {
            text_changed: dispatch == Dispatch::Edited,
            cursor_moved: self.cursor != before,
        }
    }

    /// Replace the whole document.
    ///
    /// Every character takes this core's text style (see [`Self::with_style`]),
    /// replacing whatever styles the old text carried. The cursor returns to
    /// the origin. Always reports a text change.
    pub fn set_text(&mut self, text: &str) -> CoreOutcome {
        let before = self.cursor;
        self.buffer = Buffer::from_text_styled(text, self.style);
        self.cursor = Position::zero();
        tracing::debug!(lines = self.buffer.line_count(), "text replaced");
        CoreOutcome::Handled {
            text_changed: true,
            cursor_moved: self.cursor != before,
        }
    }

    pub fn text(&self) -> String {
        self.buffer.text()
    }

    /// Cursor as a flat document offset
    pub fn cursor_offset(&self) -> usize {
        self.buffer.offset_of(self.cursor)
    }

    pub fn character_at(&self, offset: usize) -> BufferResult<Character> {
        self.buffer.character_at(offset)
    }

    /// Get a complete snapshot of editor state
    pub fn snapshot(&self) -> EditSnapshot {
        EditSnapshot {
            mode: self.mode,
            cursor: self.cursor,
            lines: self.buffer.lines().iter().map(|l| l.to_string()).collect(),
        }
    }

    pub fn mode(&self) -> EditMode {
        self.mode
    }

    pub fn buffer(&self) -> &Buffer {
        &self.buffer
    }

    pub fn cursor(&self) -> Position {
        self.cursor
    }

    pub fn line_count(&self) -> usize {
        self.buffer.line_count()
    }

    pub fn style(&self) -> Style {
        self.style
    }

    fn set_mode(&mut self, mode: EditMode) {
        if self.mode != mode {
            tracing::debug!(from = self.mode.as_str(), to = mode.as_str(), "mode change");
            self.mode = mode;
        }
    }

    fn handle_command_mode(&mut self, key: EditKey) -> Dispatch {
        let EditKey::Char(ch) = key else {
            return Dispatch::Ignored;
        };

        match ch {
            'h' => self.cursor.col = self.cursor.col.saturating_sub(1),
            'l' => self.cursor.col += 1,
            'k' => self.cursor.line = self.cursor.line.saturating_sub(1),
            'j' => self.cursor.line += 1,
            '0' => self.cursor.col = 0,
            'i' => self.set_mode(EditMode::Insert),
            'A' => {
                self.cursor.col = self.buffer.line_len(self.cursor.line);
                self.set_mode(EditMode::Insert);
            }
            _ => return Dispatch::Ignored,
        }
        Dispatch::Handled
    }

    fn handle_insert_mode(&mut self, key: EditKey) -> Dispatch {
        match key {
            EditKey::Escape => {
                self.set_mode(EditMode::Command);
                self.cursor.col = self.cursor.col.saturating_sub(1);
                Dispatch::Handled
            }
            EditKey::Char(ch) if !ch.is_control() => {
                if self
                    .buffer
                    .insert_character(self.cursor, Character::new(ch, self.style))
                {
                    self.cursor.col += 1;
                    Dispatch::Edited
                } else {
                    Dispatch::Handled
                }
            }
            EditKey::Char(_) => Dispatch::Ignored,
            EditKey::Backspace => match self.buffer.delete_character_before(self.cursor) {
                Some(pos) => {
                    self.cursor = pos;
                    Dispatch::Edited
                }
                None => Dispatch::Handled,
            },
            EditKey::Enter => {
                if self.buffer.split_line(self.cursor) {
                    self.cursor.line += 1;
                    self.cursor.col = 0;
                    Dispatch::Edited
                } else {
                    Dispatch::Handled
                }
            }
            EditKey::Left => {
                self.cursor.col = self.cursor.col.saturating_sub(1);
                Dispatch::Handled
            }
            EditKey::Right => {
                self.cursor.col += 1;
                Dispatch::Handled
            }
            EditKey::Up => {
                self.cursor.line = self.cursor.line.saturating_sub(1);
                Dispatch::Handled
            }
            EditKey::Down => {
                self.cursor.line += 1;
                Dispatch::Handled
            }
        }
    }
}

impl Default for EditCore {
    fn default() -> Self {
        Self::new()
    }
}
