//! # EditBox Core
//!
//! Text-editing engine behind the terminal edit box.
//!
//! ## Philosophy
//!
//! - **No I/O**: the core never touches a terminal; hosts render and feed keys
//! - **Deterministic**: same key trace => same editor state
//! - **Modal editing**: Command and Insert modes, vi style
//! - **Always in bounds**: every handled key ends with a clamp, so the cursor
//!   can be trusted by whoever reads it next
//!
//! ## Design
//!
//! The core provides:
//! - Buffer: lines of styled characters, never empty
//! - EditCore: the Command/Insert state machine over [`EditKey`]
//! - Wrap projection: logical lines to width-bounded visual rows, cursor included
//! - Viewport: scroll offset that keeps the cursor row on screen
//! - EditSnapshot: comparable state for replay testing

pub mod buffer;
pub mod cursor;
pub mod error;
pub mod interpreter;
pub mod key;
pub mod mode;
pub mod snapshot;
pub mod style;
pub mod viewport;
pub mod wrap;

pub use buffer::{Buffer, Line};
pub use cursor::Position;
pub use error::{BufferError, BufferResult};
pub use interpreter::{CoreOutcome, EditCore};
pub use key::EditKey;
pub use mode::{EditMode, INSERT_STATUS};
pub use snapshot::EditSnapshot;
pub use style::{Character, Color, Style};
pub use viewport::Viewport;
pub use wrap::{cursor_row, project, Projection, VisualRow};
