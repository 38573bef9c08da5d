//! Screen rectangles

use serde::{Deserialize, Serialize};

/// Rectangle of terminal cells
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct Rect {
    pub left: usize,
    pub top: usize,
    pub width: usize,
    pub height: usize,
}

impl Rect {
    pub const fn new(left: usize, top: usize, width: usize, height: usize) -> Self {
        Self {
            left,
            top,
            width,
            height,
        }
    }

    /// First column past the right edge
    pub fn right(&self) -> usize {
        self.left + self.width
    }

    /// First row past the bottom edge
    pub fn bottom(&self) -> usize {
        self.top + self.height
    }

    /// Shrink by `n` cells on every side
    pub fn inset(&self, n: usize) -> Rect {
        Rect {
            left: self.left.saturating_add(n),
            top: self.top.saturating_add(n),
            width: self.width.saturating_sub(2 * n),
            height: self.height.saturating_sub(2 * n),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_edges() {
        let r = Rect::new(2, 6, 30, 10);
        assert_eq!(r.right(), 32);
        assert_eq!(r.bottom(), 16);
    }

    #[test]
    fn test_inset() {
        let r = Rect::new(2, 6, 30, 10).inset(1);
        assert_eq!(r, Rect::new(3, 7, 28, 8));

        let tiny = Rect::new(0, 0, 1, 2).inset(1);
        assert_eq!(tiny.width, 0);
        assert_eq!(tiny.height, 0);
    }
}
