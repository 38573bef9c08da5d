//! Terminal surface abstraction
//!
//! Widgets draw through [`Surface`] and never touch the terminal. A real
//! backend maps these calls onto its cell buffer; [`CellGrid`] keeps them in
//! memory for tests and headless use.

use std::io;

use editbox_core::Color;

/// Drawing target for widgets
pub trait Surface {
    /// Write one glyph. Cells outside the surface are ignored.
    fn set_cell(&mut self, col: usize, row: usize, glyph: char, fg: Color, bg: Color);

    /// Place the terminal caret
    fn set_cursor(&mut self, col: usize, row: usize);

    /// Blank every cell and hide the caret
    fn clear(&mut self);

    /// Push pending changes to the terminal
    fn flush(&mut self) -> io::Result<()>;
}

/// A single drawn cell
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Cell {
    pub glyph: char,
    pub fg: Color,
    pub bg: Color,
}

impl Default for Cell {
    fn default() -> Self {
        Self {
            glyph: ' ',
            fg: Color::Default,
            bg: Color::Default,
        }
    }
}

/// In-memory surface
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CellGrid {
    cols: usize,
    rows: usize,
    cells: Vec<Cell>,
    cursor: Option<(usize, usize)>,
    flushes: usize,
}

impl CellGrid {
    pub fn new(cols: usize, rows: usize) -> Self {
        Self {
            cols,
            rows,
            cells: vec![Cell::default(); cols * rows],
            cursor: None,
            flushes: 0,
        }
    }

    pub fn cols(&self) -> usize {
        self.cols
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn cell(&self, col: usize, row: usize) -> Option<Cell> {
        if col >= self.cols || row >= self.rows {
            return None;
        }
        Some(self.cells[row * self.cols + col])
    }

    /// Glyphs of one row, trailing blanks removed
    pub fn row_text(&self, row: usize) -> String {
        if row >= self.rows {
            return String::new();
        }
        let start = row * self.cols;
        let text: String = self.cells[start..start + self.cols]
            .iter()
            .map(|c| c.glyph)
            .collect();
        text.trim_end().to_string()
    }

    /// Caret position, if one was set since the last clear
    pub fn cursor(&self) -> Option<(usize, usize)> {
        self.cursor
    }

    pub fn flush_count(&self) -> usize {
        self.flushes
    }
}

impl Surface for CellGrid {
    fn set_cell(&mut self, col: usize, row: usize, glyph: char, fg: Color, bg: Color) {
        if col >= self.cols || row >= self.rows {
            return;
        }
        self.cells[row * self.cols + col] = Cell { glyph, fg, bg };
    }

    fn set_cursor(&mut self, col: usize, row: usize) {
        self.cursor = Some((col, row));
    }

    fn clear(&mut self) {
        self.cells.fill(Cell::default());
        self.cursor = None;
    }

    fn flush(&mut self) -> io::Result<()> {
        self.flushes += 1;
        Ok(())
    }
}
