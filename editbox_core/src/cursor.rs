//! Cursor position and its mode-dependent bounds

#[cfg(feature = "serde_support")]
use serde::{Deserialize, Serialize};

use crate::buffer::Buffer;
use crate::mode::EditMode;

/// Cursor position as (line index, char index)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde_support", derive(Serialize, Deserialize))]
pub struct Position {
    pub line: usize,
    pub col: usize,
}

impl Position {
    pub const fn new(line: usize, col: usize) -> Self {
        Self { line, col }
    }

    pub const fn zero() -> Self {
        Self { line: 0, col: 0 }
    }

    /// Pull the position back inside `buffer` for the given mode.
    ///
    /// The line is clamped to `[0, line_count)`, then the column to
    /// `[0, mode.max_col(line_len)]`.
    pub fn clamped(self, buffer: &Buffer, mode: EditMode) -> Self {
        let line = self.line.min(buffer.line_count() - 1);
        let col = self.col.min(mode.max_col(buffer.line_len(line)));
        Self { line, col }
    }

    /// True when the position already satisfies the bounds of `mode`
    pub fn is_valid(&self, buffer: &Buffer, mode: EditMode) -> bool {
        self.line < buffer.line_count() && self.col <= mode.max_col(buffer.line_len(self.line))
    }
}
