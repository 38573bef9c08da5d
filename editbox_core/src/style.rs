//! Styled characters

#[cfg(feature = "serde_support")]
use serde::{Deserialize, Serialize};

/// Terminal color
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde_support", derive(Serialize, Deserialize))]
pub enum Color {
    /// Whatever the terminal uses when nothing is requested
    #[default]
    Default,
    Black,
    Red,
    Green,
    Yellow,
    Blue,
    Magenta,
    Cyan,
    White,
    /// 256-color palette entry
    Indexed(u8),
}

/// Foreground/background pair attached to every character
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde_support", derive(Serialize, Deserialize))]
pub struct Style {
    pub fg: Color,
    pub bg: Color,
}

impl Style {
    pub const DEFAULT: Self = Self {
        fg: Color::Default,
        bg: Color::Default,
    };

    pub const fn new(fg: Color, bg: Color) -> Self {
        Self { fg, bg }
    }
}

/// A single code point plus its style. One character occupies one cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde_support", derive(Serialize, Deserialize))]
pub struct Character {
    ch: char,
    style: Style,
}

impl Character {
    pub const fn new(ch: char, style: Style) -> Self {
        Self { ch, style }
    }

    /// Character with the default style
    pub const fn plain(ch: char) -> Self {
        Self::new(ch, Style::DEFAULT)
    }

    /// Stand-in for the line break between two lines; never stored in a line
    pub const fn newline() -> Self {
        Self::plain('\n')
    }

    pub fn ch(&self) -> char {
        self.ch
    }

    pub fn style(&self) -> Style {
        self.style
    }
}
