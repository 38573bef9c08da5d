//! # Edit Box Widget
//!
//! A multi-line, vi-flavoured text field for terminal UIs.
//!
//! ## Philosophy
//!
//! - **Modal editing**: Command and Insert modes, a handful of keys each
//! - **Headless**: Drawing goes through the [`Surface`] trait, never a terminal
//! - **Testable**: Fully drivable with injected [`InputEvent`]s
//! - **Soft wrap**: Long lines fold at the text width, never scroll sideways
//!
//! ## Non-Goals
//!
//! This is NOT:
//! - A port of real vi/vim
//! - A full editor with undo, search, selection or clipboard
//! - Unicode width aware; every character takes one cell
//!
//! ## Design
//!
//! - All editing lives in `editbox_core::EditCore`
//! - The widget translates input, keeps the viewport on the cursor and draws
//! - Observers hear about text and cursor changes after each handled event

pub mod config;
pub mod control;
pub mod editbox;
pub mod geometry;
pub mod keymap;
pub mod surface;

pub use config::{ConfigError, ConfigResult, EditBoxConfig, Layout};
pub use control::Control;
pub use editbox::EditBox;
pub use geometry::Rect;
pub use keymap::translate;
pub use surface::{Cell, CellGrid, Surface};

pub use editbox_core::{EditMode, Position};
pub use input_types::InputEvent;
