//! The edit box widget
//!
//! Glue between the outside world and [`EditCore`]: input events come in
//! through [`EditBox::handle_event`], drawing goes out through a
//! [`Surface`]. After every handled event the cursor's visual row is
//! recomputed and the viewport follows it, so rendering is a pure read.

use std::fmt;

use editbox_core::{
    cursor_row, project, BufferResult, Character, CoreOutcome, EditCore, EditMode, EditSnapshot,
    Position, Style, Viewport,
};
use input_types::InputEvent;

use crate::config::{ConfigResult, EditBoxConfig, Layout};
use crate::control::Control;
use crate::geometry::Rect;
use crate::keymap;
use crate::surface::Surface;

type Observer = Box<dyn FnMut(&EditCore)>;

/// Multi-line modal text editor widget
pub struct EditBox {
    core: EditCore,
    bounds: Rect,
    border: bool,
    layout: Layout,
    viewport: Viewport,
    focused: bool,
    text_changed: Vec<Observer>,
    cursor_moved: Vec<Observer>,
}

impl EditBox {
    /// Build an edit box, rejecting geometry that leaves no room for text
    pub fn new(config: EditBoxConfig) -> ConfigResult<Self> {
        let layout = config.validate()?;
        let core = EditCore::new()
            .with_style(config.text_style)
            .with_text(config.text.as_deref().unwrap_or(""))
            .with_mode(config.mode);

        tracing::debug!(
            width = layout.text_width.get(),
            height = layout.view_height.get(),
            border = config.border,
            lines = core.line_count(),
            "edit box created"
        );

        let mut edit_box = Self {
            core,
            bounds: config.bounds,
            border: config.border,
            layout,
            viewport: Viewport::new(layout.view_height),
            focused: false,
            text_changed: Vec::new(),
            cursor_moved: Vec::new(),
        };
        edit_box.follow_cursor();
        Ok(edit_box)
    }

    /// Register a callback fired after every text change
    pub fn on_text_changed(&mut self, observer: impl FnMut(&EditCore) + 'static) {
        self.text_changed.push(Box::new(observer));
    }

    /// Register a callback fired after every cursor move
    pub fn on_cursor_moved(&mut self, observer: impl FnMut(&EditCore) + 'static) {
        self.cursor_moved.push(Box::new(observer));
    }

    /// Process one input event. Only key events are considered.
    pub fn handle_event(&mut self, event: &InputEvent) -> bool {
        let Some(key_event) = event.as_key() else {
            return false;
        };
        let Some(key) = keymap::translate(key_event) else {
            tracing::trace!(
                code = %key_event.code,
                modifiers = %key_event.modifiers,
                "key has no edit meaning"
            );
            return false;
        };

        let outcome = self.core.apply_key(key);
        if !outcome.is_handled() {
            tracing::trace!(?key, mode = self.core.mode().as_str(), "key not handled");
            return false;
        }

        self.follow_cursor();
        self.notify(outcome);
        true
    }

    pub fn text(&self) -> String {
        self.core.text()
    }

    /// Replace the document. Fires one text-changed notification.
    pub fn set_text(&mut self, text: &str) {
        let outcome = self.core.set_text(text);
        self.viewport.reset();
        self.follow_cursor();
        self.notify(outcome);
    }

    /// Move or resize the widget
    pub fn set_bounds(&mut self, bounds: Rect) -> ConfigResult<()> {
        self.layout = Layout::resolve(bounds, self.border)?;
        self.bounds = bounds;
        self.viewport.set_height(self.layout.view_height);
        self.follow_cursor();
        Ok(())
    }

    pub fn set_focus(&mut self) {
        self.focused = true;
    }

    pub fn unset_focus(&mut self) {
        self.focused = false;
    }

    pub fn is_focused(&self) -> bool {
        self.focused
    }

    pub fn mode(&self) -> EditMode {
        self.core.mode()
    }

    pub fn cursor(&self) -> Position {
        self.core.cursor()
    }

    /// Index of the first visible visual row
    pub fn scroll(&self) -> usize {
        self.viewport.scroll()
    }

    pub fn line_count(&self) -> usize {
        self.core.line_count()
    }

    pub fn cursor_offset(&self) -> usize {
        self.core.cursor_offset()
    }

    pub fn character_at(&self, offset: usize) -> BufferResult<Character> {
        self.core.character_at(offset)
    }

    pub fn snapshot(&self) -> EditSnapshot {
        self.core.snapshot()
    }

    pub fn bounds(&self) -> Rect {
        self.bounds
    }

    pub fn layout(&self) -> Layout {
        self.layout
    }

    pub fn core(&self) -> &EditCore {
        &self.core
    }

    /// Draw visible rows, the border and status line, and the caret if focused.
    ///
    /// Cells not covered by text are left alone; clearing is the container's job.
    pub fn render(&self, surface: &mut dyn Surface) {
        let style = self.core.style();
        if self.border {
            draw_border(surface, self.bounds, style);
        }

        let layout = &self.layout;
        let projection = project(self.core.buffer(), self.core.cursor(), layout.text_width);
        let range = self.viewport.visible_range(projection.row_count());

        for (offset, row) in projection.visible(range).iter().enumerate() {
            let y = layout.top + offset;
            for (x, c) in row.chars.iter().enumerate() {
                let s = c.style();
                surface.set_cell(layout.left + x, y, c.ch(), s.fg, s.bg);
            }
        }

        if let Some(status) = self.core.mode().status() {
            for (x, ch) in status.chars().take(layout.text_width.get()).enumerate() {
                surface.set_cell(layout.left + x, layout.status_row, ch, style.fg, style.bg);
            }
        }

        if self.focused {
            let row = projection.cursor_row().saturating_sub(self.viewport.scroll());
            surface.set_cursor(layout.left + projection.cursor_col(), layout.top + row);
        }
    }

    fn follow_cursor(&mut self) {
        let row = cursor_row(self.core.buffer(), self.core.cursor(), self.layout.text_width);
        self.viewport.follow(row);
    }

    fn notify(&mut self, outcome: CoreOutcome) {
        if outcome.text_changed() {
            for observer in self.text_changed.iter_mut() {
                observer(&self.core);
            }
        }
        if outcome.cursor_moved() {
            for observer in self.cursor_moved.iter_mut() {
                observer(&self.core);
            }
        }
    }
}

impl fmt::Debug for EditBox {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("EditBox")
            .field("core", &self.core)
            .field("bounds", &self.bounds)
            .field("border", &self.border)
            .field("scroll", &self.viewport.scroll())
            .field("focused", &self.focused)
            .finish_non_exhaustive()
    }
}

impl Control for EditBox {
    fn render(&self, surface: &mut dyn Surface) {
        EditBox::render(self, surface)
    }

    fn set_focus(&mut self) {
        EditBox::set_focus(self)
    }

    fn unset_focus(&mut self) {
        EditBox::unset_focus(self)
    }

    fn handle_event(&mut self, event: &InputEvent) -> bool {
        EditBox::handle_event(self, event)
    }
}

fn draw_border(surface: &mut dyn Surface, bounds: Rect, style: Style) {
    if bounds.width == 0 || bounds.height == 0 {
        return;
    }
    let (right, bottom) = (bounds.right() - 1, bounds.bottom() - 1);
    let mut put = |col, row, glyph| surface.set_cell(col, row, glyph, style.fg, style.bg);

    for col in bounds.left..=right {
        put(col, bounds.top, '-');
        put(col, bottom, '-');
    }
    for row in bounds.top..=bottom {
        put(bounds.left, row, '|');
        put(right, row, '|');
    }
    for (col, row) in [
        (bounds.left, bounds.top),
        (right, bounds.top),
        (bounds.left, bottom),
        (right, bottom),
    ] {
        put(col, row, '+');
    }
}
