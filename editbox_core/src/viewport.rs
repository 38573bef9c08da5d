//! Vertical scroll tracking over visual rows

use core::num::NonZeroUsize;
use core::ops::Range;

/// Scroll needed to keep `cursor_row` inside a window of `height` rows
/// that currently starts at `scroll`.
///
/// Idempotent: feeding the result back in returns it unchanged.
pub fn follow(cursor_row: usize, scroll: usize, height: NonZeroUsize) -> usize {
    let height = height.get();
    if cursor_row < scroll {
        cursor_row
    } else if cursor_row >= scroll + height {
        cursor_row + 1 - height
    } else {
        scroll
    }
}

/// Scroll window over the visual rows of a document
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Viewport {
    scroll: usize,
    height: NonZeroUsize,
}

impl Viewport {
    pub fn new(height: NonZeroUsize) -> Self {
        Self { scroll: 0, height }
    }

    /// Index of the first visible row
    pub fn scroll(&self) -> usize {
        self.scroll
    }

    pub fn height(&self) -> NonZeroUsize {
        self.height
    }

    pub fn set_height(&mut self, height: NonZeroUsize) {
        self.height = height;
    }

    /// Adjust the scroll so `cursor_row` is visible.
    ///
    /// Returns true if the scroll offset changed.
    pub fn follow(&mut self, cursor_row: usize) -> bool {
        let scroll = follow(cursor_row, self.scroll, self.height);
        if scroll == self.scroll {
            return false;
        }
        tracing::trace!(from = self.scroll, to = scroll, cursor_row, "scroll");
        self.scroll = scroll;
        true
    }

    pub fn reset(&mut self) {
        self.scroll = 0;
    }

    /// Visible row indices, given how many rows exist
    pub fn visible_range(&self, total_rows: usize) -> Range<usize> {
        let end = (self.scroll + self.height.get()).min(total_rows);
        self.scroll.min(end)..end
    }
}


#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    proptest! {
        #[test]
        fn cursor_always_contained(cursor in 0usize..500, scroll in 0usize..500, height in 1usize..50) {
            let height = NonZeroUsize::new(height).unwrap();
            let s = follow(cursor, scroll, height);
            prop_assert!(s <= cursor);
            prop_assert!(cursor < s + height.get());
        }

        #[test]
        fn follow_is_idempotent(cursor in 0usize..500, scroll in 0usize..500, height in 1usize..50) {
            let height = NonZeroUsize::new(height).unwrap();
            let once = follow(cursor, scroll, height);
            prop_assert_eq!(follow(cursor, once, height), once);
        }
    }
}
