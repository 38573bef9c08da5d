//! Word-wrap projection of logical lines onto visual rows.
//!
//! Every logical line is cut into chunks of at most `width` characters. An
//! empty line still yields one (empty) row. The logical cursor is mapped into
//! the same row numbering in the same pass, so the caret and the drawn text
//! can never disagree.
//!
//! Rows borrow from the buffer; a [`Projection`] cannot outlive the state it
//! was computed from.

use core::num::NonZeroUsize;
use core::ops::Range;

use crate::buffer::Buffer;
use crate::cursor::Position;
use crate::style::Character;

/// A width-bounded slice of one logical line
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct VisualRow<'a> {
    /// Logical line this row belongs to
    pub line: usize,
    /// Column of the first character within that line
    pub start: usize,
    pub chars: &'a [Character],
}

impl VisualRow<'_> {
    pub fn len(&self) -> usize {
        self.chars.len()
    }

    pub fn is_empty(&self) -> bool {
        self.chars.is_empty()
    }

    pub fn text(&self) -> String {
        self.chars.iter().map(Character::ch).collect()
    }
}

/// Visual rows for a whole buffer plus the caret's visual cell
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Projection<'a> {
    rows: Vec<VisualRow<'a>>,
    cursor_row: usize,
    cursor_col: usize,
}

impl<'a> Projection<'a> {
    pub fn rows(&self) -> &[VisualRow<'a>] {
        &self.rows
    }

    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    pub fn cursor_row(&self) -> usize {
        self.cursor_row
    }

    pub fn cursor_col(&self) -> usize {
        self.cursor_col
    }

    /// Rows in `range`, clipped to what exists
    pub fn visible(&self, range: Range<usize>) -> &[VisualRow<'a>] {
        let end = range.end.min(self.rows.len());
        let start = range.start.min(end);
        &self.rows[start..end]
    }
}

/// Number of visual rows a line of `len` characters occupies
pub fn rows_for_len(len: usize, width: NonZeroUsize) -> usize {
    len.max(1).div_ceil(width.get())
}

/// Visual row of `cursor` without building the rows.
///
/// Agrees with [`Projection::cursor_row`] for the same inputs.
pub fn cursor_row(buffer: &Buffer, cursor: Position, width: NonZeroUsize) -> usize {
    let before: usize = buffer
        .lines()
        .iter()
        .take(cursor.line)
        .map(|line| rows_for_len(line.len(), width))
        .sum();
    before + cursor.col / width.get()
}

/// Project `buffer` onto rows of at most `width` characters and locate `cursor`.
///
/// The cursor maps to `(rows before its line + col / width, col % width)`.
pub fn project(buffer: &Buffer, cursor: Position, width: NonZeroUsize) -> Projection<'_> {
    let w = width.get();
    let mut rows = Vec::with_capacity(buffer.line_count());
    let mut cursor_row = 0;
    let mut cursor_col = 0;

    for (line_idx, line) in buffer.lines().iter().enumerate() {
        if line_idx == cursor.line {
            cursor_row = rows.len() + cursor.col / w;
            cursor_col = cursor.col % w;
        }

        let chars = line.chars();
        if chars.is_empty() {
            rows.push(VisualRow {
                line: line_idx,
                start: 0,
                chars,
            });
            continue;
        }

        for (chunk_idx, chunk) in chars.chunks(w).enumerate() {
            rows.push(VisualRow {
                line: line_idx,
                start: chunk_idx * w,
                chars: chunk,
            });
        }
    }

    Projection {
        rows,
        cursor_row,
        cursor_col,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn width(w: usize) -> NonZeroUsize {
        NonZeroUsize::new(w).unwrap()
    }

    fn row_texts(p: &Projection<'_>) -> Vec<String> {
        p.rows().iter().map(VisualRow::text).collect()
    }

    #[test]
    fn test_empty_document_is_one_empty_row() {
        let buffer = Buffer::new();
        let p = project(&buffer, Position::zero(), width(5));
        assert_eq!(p.row_count(), 1);
        assert!(p.rows()[0].is_empty());
        assert_eq!((p.cursor_row(), p.cursor_col()), (0, 0));
    }

    #[test]
    fn test_wraps_long_line() {
        let buffer = Buffer::from_text("ab\ncdef");
        let p = project(&buffer, Position::zero(), width(3));
        assert_eq!(row_texts(&p), vec!["ab", "cde", "f"]);
        assert_eq!(p.rows()[2].line, 1);
        assert_eq!(p.rows()[2].start, 3);
    }

    #[test]
    fn test_exact_multiple_has_no_trailing_row() {
        let buffer = Buffer::from_text("abcdef\nx");
        let p = project(&buffer, Position::zero(), width(3));
        assert_eq!(row_texts(&p), vec!["abc", "def", "x"]);
    }

    #[test]
    fn test_empty_lines_between() {
        let buffer = Buffer::from_text("a\n\nb");
        let p = project(&buffer, Position::new(2, 0), width(4));
        assert_eq!(row_texts(&p), vec!["a", "", "b"]);
        assert_eq!(p.cursor_row(), 2);
    }

    #[test]
    fn test_cursor_mapping_on_wrapped_line() {
        let buffer = Buffer::from_text("ab\ncdefgh");
        let p = project(&buffer, Position::new(1, 4), width(3));
        // rows: "ab", "cde", "fgh"; col 4 is 'g'
        assert_eq!(p.cursor_row(), 2);
        assert_eq!(p.cursor_col(), 1);
    }

    #[test]
    fn test_cursor_past_full_row_moves_to_next_row() {
        let buffer = Buffer::from_text("abc");
        let p = project(&buffer, Position::new(0, 3), width(3));
        assert_eq!(p.row_count(), 1);
        assert_eq!((p.cursor_row(), p.cursor_col()), (1, 0));
    }

    #[test]
    fn test_cursor_row_without_projection() {
        let buffer = Buffer::from_text("ab\ncdefgh\n\nxyz");
        assert_eq!(cursor_row(&buffer, Position::new(1, 4), width(3)), 2);
        assert_eq!(cursor_row(&buffer, Position::new(2, 0), width(3)), 3);
        assert_eq!(cursor_row(&buffer, Position::new(3, 3), width(3)), 5);
    }

    #[test]
    fn test_visible_clips() {
        let buffer = Buffer::from_text("a\nb\nc");
        let p = project(&buffer, Position::zero(), width(1));
        assert_eq!(p.visible(1..10).len(), 2);
        assert_eq!(p.visible(5..10).len(), 0);
    }

    #[test]
    fn test_rows_for_len() {
        assert_eq!(rows_for_len(0, width(3)), 1);
        assert_eq!(rows_for_len(3, width(3)), 1);
        assert_eq!(rows_for_len(4, width(3)), 2);
        assert_eq!(rows_for_len(7, width(1)), 7);
    }
}
