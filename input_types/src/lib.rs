#![no_std]

//! # Input Types
//!
//! Input event vocabulary consumed by terminal widgets.
//!
//! ## Philosophy
//!
//! - **Events, not bytes**: escape-sequence decoding happens upstream; widgets only
//!   ever see structured events
//! - **One event at a time**: a widget consumes a single event and reports whether
//!   it handled it, so a container can forward it elsewhere
//! - **Testable**: events are serializable and can be injected for testing
//!
//! ## Non-Goals
//!
//! This is NOT:
//! - A terminal decoder (raw bytes and escape sequences are someone else's job)
//! - Global keyboard state
//! - Focus routing

extern crate alloc;

use alloc::vec::Vec;
use core::fmt;
use serde::{Deserialize, Serialize};

/// Input event
///
/// Widgets only inspect [`InputEvent::Key`]; every other kind is reported as
/// unhandled.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum InputEvent {
    /// Keyboard event
    Key(KeyEvent),
    /// Terminal was resized to the given size in cells
    Resize { cols: usize, rows: usize },
}

impl InputEvent {
    /// Creates a key event
    pub fn key(event: KeyEvent) -> Self {
        Self::Key(event)
    }

    /// Creates a key press event carrying a printable character
    pub fn char(ch: char) -> Self {
        Self::Key(KeyEvent::pressed(KeyCode::Char, Modifiers::none()).with_char(ch))
    }

    /// Creates a key press event for a non-printable key
    pub fn press(code: KeyCode) -> Self {
        Self::Key(KeyEvent::pressed(code, Modifiers::none()))
    }

    /// Returns true if this is a key event
    pub fn is_key(&self) -> bool {
        matches!(self, Self::Key(_))
    }

    /// Returns the key event if this is a key event
    pub fn as_key(&self) -> Option<&KeyEvent> {
        match self {
            Self::Key(event) => Some(event),
            _ => None,
        }
    }
}

/// Keyboard event
///
/// A key code, the modifiers held at the time, and an optional printable
/// character already decoded by the input source.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct KeyEvent {
    /// The key that was pressed/released
    pub code: KeyCode,
    /// Modifier keys that were active
    pub modifiers: Modifiers,
    /// Event state (pressed, released, repeat)
    pub state: KeyState,
    /// Printable character, when the source decoded one
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ch: Option<char>,
}

impl KeyEvent {
    /// Creates a new key event
    pub fn new(code: KeyCode, modifiers: Modifiers, state: KeyState) -> Self {
        Self {
            code,
            modifiers,
            state,
            ch: None,
        }
    }

    /// Creates a key pressed event
    pub fn pressed(code: KeyCode, modifiers: Modifiers) -> Self {
        Self::new(code, modifiers, KeyState::Pressed)
    }

    /// Creates a key released event
    pub fn released(code: KeyCode, modifiers: Modifiers) -> Self {
        Self::new(code, modifiers, KeyState::Released)
    }

    /// Creates a key repeat event
    pub fn repeat(code: KeyCode, modifiers: Modifiers) -> Self {
        Self::new(code, modifiers, KeyState::Repeat)
    }

    /// Attaches the decoded printable character
    pub fn with_char(mut self, ch: char) -> Self {
        self.ch = Some(ch);
        self
    }

    /// Returns true if this is a press event
    pub fn is_pressed(&self) -> bool {
        self.state == KeyState::Pressed
    }

    /// Returns true if this is a release event
    pub fn is_released(&self) -> bool {
        self.state == KeyState::Released
    }

    /// Returns true if this is a repeat event
    pub fn is_repeat(&self) -> bool {
        self.state == KeyState::Repeat
    }

    /// Printable character for this event, if any.
    ///
    /// Prefers the decoded `ch`; otherwise derives one from the key code and
    /// Shift. Chords with Ctrl, Alt or Meta never produce a character.
    pub fn printable(&self) -> Option<char> {
        let m = self.modifiers;
        if m.is_ctrl() || m.is_alt() || m.is_meta() {
            return None;
        }

        match self.ch {
            Some(ch) if !ch.is_control() => Some(ch),
            Some(_) => None,
            None => self.code.to_char(m.is_shift()),
        }
    }
}

/// Key state
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum KeyState {
    /// Key was pressed down
    Pressed,
    /// Key was released
    Released,
    /// Key is auto-repeating
    Repeat,
}

/// Key code
///
/// Logical key codes. `Char` stands for any key whose meaning is carried by
/// the event's decoded character.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum KeyCode {
    // Decoded character (see KeyEvent::ch)
    Char,

    // Letters
    A,
    B,
    C,
    D,
    E,
    F,
    G,
    H,
    I,
    J,
    K,
    L,
    M,
    N,
    O,
    P,
    Q,
    R,
    S,
    T,
    U,
    V,
    W,
    X,
    Y,
    Z,

    // Numbers
    Num0,
    Num1,
    Num2,
    Num3,
    Num4,
    Num5,
    Num6,
    Num7,
    Num8,
    Num9,

    // Special keys
    Escape,
    Tab,
    Space,
    Enter,
    Backspace,
    Delete,
    Insert,
    Home,
    End,
    PageUp,
    PageDown,

    // Arrow keys
    Up,
    Down,
    Left,
    Right,

    // Punctuation and symbols
    Minus,
    Equal,
    LeftBracket,
    RightBracket,
    Backslash,
    Semicolon,
    Quote,
    Comma,
    Period,
    Slash,
    Grave,

    // Unknown/unmapped key
    Unknown,
}

impl KeyCode {
    /// US-layout character for this key, or `None` for non-printing keys
    pub fn to_char(self, shift: bool) -> Option<char> {
        let pick = |lower: char, upper: char| Some(if shift { upper } else { lower });

        match self {
            // Letters
            KeyCode::A => pick('a', 'A'),
            KeyCode::B => pick('b', 'B'),
            KeyCode::C => pick('c', 'C'),
            KeyCode::D => pick('d', 'D'),
            KeyCode::E => pick('e', 'E'),
            KeyCode::F => pick('f', 'F'),
            KeyCode::G => pick('g', 'G'),
            KeyCode::H => pick('h', 'H'),
            KeyCode::I => pick('i', 'I'),
            KeyCode::J => pick('j', 'J'),
            KeyCode::K => pick('k', 'K'),
            KeyCode::L => pick('l', 'L'),
            KeyCode::M => pick('m', 'M'),
            KeyCode::N => pick('n', 'N'),
            KeyCode::O => pick('o', 'O'),
            KeyCode::P => pick('p', 'P'),
            KeyCode::Q => pick('q', 'Q'),
            KeyCode::R => pick('r', 'R'),
            KeyCode::S => pick('s', 'S'),
            KeyCode::T => pick('t', 'T'),
            KeyCode::U => pick('u', 'U'),
            KeyCode::V => pick('v', 'V'),
            KeyCode::W => pick('w', 'W'),
            KeyCode::X => pick('x', 'X'),
            KeyCode::Y => pick('y', 'Y'),
            KeyCode::Z => pick('z', 'Z'),

            // Numbers
            KeyCode::Num0 => pick('0', ')'),
            KeyCode::Num1 => pick('1', '!'),
            KeyCode::Num2 => pick('2', '@'),
            KeyCode::Num3 => pick('3', '#'),
            KeyCode::Num4 => pick('4', '$'),
            KeyCode::Num5 => pick('5', '%'),
            KeyCode::Num6 => pick('6', '^'),
            KeyCode::Num7 => pick('7', '&'),
            KeyCode::Num8 => pick('8', '*'),
            KeyCode::Num9 => pick('9', '('),

            KeyCode::Space => Some(' '),

            // Punctuation
            KeyCode::Minus => pick('-', '_'),
            KeyCode::Equal => pick('=', '+'),
            KeyCode::LeftBracket => pick('[', '{'),
            KeyCode::RightBracket => pick(']', '}'),
            KeyCode::Backslash => pick('\\', '|'),
            KeyCode::Semicolon => pick(';', ':'),
            KeyCode::Quote => pick('\'', '"'),
            KeyCode::Comma => pick(',', '<'),
            KeyCode::Period => pick('.', '>'),
            KeyCode::Slash => pick('/', '?'),
            KeyCode::Grave => pick('`', '~'),

            _ => None,
        }
    }
}

impl fmt::Display for KeyCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:?}", self)
    }
}

/// Modifier keys
///
/// Bitflags representing modifier key states.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Modifiers {
    bits: u8,
}

impl Modifiers {
    /// No modifiers
    pub const NONE: Self = Self { bits: 0 };
    /// Control key
    pub const CTRL: Self = Self { bits: 1 << 0 };
    /// Alt key
    pub const ALT: Self = Self { bits: 1 << 1 };
    /// Shift key
    pub const SHIFT: Self = Self { bits: 1 << 2 };
    /// Meta/Super/Windows key
    pub const META: Self = Self { bits: 1 << 3 };

    /// Creates a new modifier set with no modifiers
    pub fn none() -> Self {
        Self::NONE
    }

    /// Adds a modifier
    pub fn with(mut self, other: Modifiers) -> Self {
        self.bits |= other.bits;
        self
    }

    /// Checks if a modifier is present
    pub fn contains(&self, other: Modifiers) -> bool {
        (self.bits & other.bits) == other.bits
    }

    pub fn is_ctrl(&self) -> bool {
        self.contains(Self::CTRL)
    }

    pub fn is_alt(&self) -> bool {
        self.contains(Self::ALT)
    }

    pub fn is_shift(&self) -> bool {
        self.contains(Self::SHIFT)
    }

    pub fn is_meta(&self) -> bool {
        self.contains(Self::META)
    }

    /// Returns true if no modifiers are pressed
    pub fn is_empty(&self) -> bool {
        self.bits == 0
    }
}

impl Default for Modifiers {
    fn default() -> Self {
        Self::NONE
    }
}

impl fmt::Display for Modifiers {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_empty() {
            return write!(f, "none");
        }

        let mut parts = Vec::new();
        if self.is_ctrl() {
            parts.push("Ctrl");
        }
        if self.is_alt() {
            parts.push("Alt");
        }
        if self.is_shift() {
            parts.push("Shift");
        }
        if self.is_meta() {
            parts.push("Meta");
        }
        write!(f, "{}", parts.join("+"))
    }
}
