//! Editing modes

#[cfg(feature = "serde_support")]
use serde::{Deserialize, Serialize};

/// Status text shown while inserting
pub const INSERT_STATUS: &str = "-- INSERT --";

/// Editing mode
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde_support", derive(Serialize, Deserialize))]
pub enum EditMode {
    /// Navigation only; the cursor always rests on a character
    #[default]
    Command,
    /// Text entry; the cursor may sit one past the last character
    Insert,
}

impl EditMode {
    pub fn as_str(&self) -> &'static str {
        match self {
            EditMode::Command => "COMMAND",
            EditMode::Insert => "INSERT",
        }
    }

    /// Highest valid cursor column on a line of `line_len` characters
    pub fn max_col(&self, line_len: usize) -> usize {
        match self {
            EditMode::Command => line_len.saturating_sub(1),
            EditMode::Insert => line_len,
        }
    }

    /// Status line text for this mode, if any
    pub fn status(&self) -> Option<&'static str> {
        match self {
            EditMode::Command => None,
            EditMode::Insert => Some(INSERT_STATUS),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mode_strings() {
        assert_eq!(EditMode::Command.as_str(), "COMMAND");
        assert_eq!(EditMode::Insert.as_str(), "INSERT");
        assert_eq!(EditMode::default(), EditMode::Command);
    }

    #[test]
    fn test_max_col() {
        assert_eq!(EditMode::Command.max_col(3), 2);
        assert_eq!(EditMode::Command.max_col(0), 0);
        assert_eq!(EditMode::Insert.max_col(3), 3);
        assert_eq!(EditMode::Insert.max_col(0), 0);
    }

    #[test]
    fn test_status() {
        assert_eq!(EditMode::Command.status(), None);
        assert_eq!(EditMode::Insert.status(), Some("-- INSERT --"));
    }
}
