//! Capability set shared by focusable widgets

use input_types::InputEvent;

use crate::surface::Surface;

/// A widget a container can draw, focus and feed events to
pub trait Control {
    /// Draw into `surface`. Reads state only.
    fn render(&self, surface: &mut dyn Surface);

    fn set_focus(&mut self);

    fn unset_focus(&mut self);

    /// Consume one event. `false` means the container may pass it on.
    fn handle_event(&mut self, event: &InputEvent) -> bool;
}
