#![forbid(unsafe_code)]

//! Row-major cell grid that widgets draw into.
//!
//! Coordinates are zero-based with the origin at the top-left. All writes
//! outside the grid are silently dropped, so widgets can draw with rects
//! clipped by the caller without per-cell bounds checks of their own.

use fitui_core::geometry::{Rect, Size};
use unicode_segmentation::UnicodeSegmentation;
use unicode_width::UnicodeWidthStr;

use crate::cell::Cell;
use crate::style::Style;

/// A grid of [`Cell`]s.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Buffer {
    width: u16,
    height: u16,
    cells: Vec<Cell>,
}

impl Buffer {
    /// Create a blank buffer. Zero-sized buffers are valid and hold no cells.
    pub fn new(width: u16, height: u16) -> Self {
        let len = usize::from(width) * usize::from(height);
        Self {
            width,
            height,
            cells: vec![Cell::BLANK; len],
        }
    }

    #[inline]
    pub fn width(&self) -> u16 {
        self.width
    }

    #[inline]
    pub fn height(&self) -> u16 {
        self.height
    }

    #[inline]
    pub fn size(&self) -> Size {
        Size::new(self.width, self.height)
    }

    /// The full grid as a rect at the origin.
    #[inline]
    pub fn bounds(&self) -> Rect {
        Rect::new(0, 0, self.width, self.height)
    }

    #[inline]
    fn index(&self, x: u16, y: u16) -> Option<usize> {
        if x < self.width && y < self.height {
            Some(usize::from(y) * usize::from(self.width) + usize::from(x))
        } else {
            None
        }
    }

    /// Read a cell; `None` outside the grid.
    pub fn get(&self, x: u16, y: u16) -> Option<&Cell> {
        self.index(x, y).map(|i| &self.cells[i])
    }

    pub fn get_mut(&mut self, x: u16, y: u16) -> Option<&mut Cell> {
        self.index(x, y).map(move |i| &mut self.cells[i])
    }

    /// Write a cell; out-of-bounds writes are dropped.
    pub fn set(&mut self, x: u16, y: u16, cell: Cell) {
        if let Some(i) = self.index(x, y) {
            self.cells[i] = cell;
        }
    }

    /// Reset every cell to blank.
    pub fn clear(&mut self) {
        self.cells.fill(Cell::BLANK);
    }

    /// Fill the intersection of `area` with the grid.
    pub fn fill(&mut self, area: Rect, cell: Cell) {
        let area = area.intersection(self.bounds());
        for y in area.y..area.bottom() {
            for x in area.x..area.right() {
                self.set(x, y, cell);
            }
        }
    }

    /// Draw a single line of text starting at `(x, y)`, clipped to
    /// `max_width` columns and to the grid.
    ///
    /// Wide graphemes that would straddle the clip edge are dropped rather
    /// than half-drawn; the column a wide grapheme spills into is left as
    /// is. Returns the number of columns advanced.
    pub fn draw_text(&mut self, x: u16, y: u16, text: &str, max_width: u16, style: Style) -> u16 {
        let mut col = x;
        let limit = x.saturating_add(max_width);
        for grapheme in text.graphemes(true) {
            let w = grapheme.width() as u16;
            if w == 0 {
                continue;
            }
            if col.saturating_add(w) > limit {
                break;
            }
            let ch = grapheme.chars().next().unwrap_or(' ');
            let mut cell = Cell::from_char(ch);
            style.apply(&mut cell);
            self.set(col, y, cell);
            col = col.saturating_add(w);
        }
        col - x
    }

    /// Apply a style over every cell in `area`, preserving content.
    pub fn set_style(&mut self, area: Rect, style: Style) {
        if style.is_empty() {
            return;
        }
        let area = area.intersection(self.bounds());
        for y in area.y..area.bottom() {
            for x in area.x..area.right() {
                if let Some(cell) = self.get_mut(x, y) {
                    style.apply(cell);
                }
            }
        }
    }

    /// Iterate cells row by row with their coordinates.
    pub fn iter(&self) -> impl Iterator<Item = (u16, u16, &Cell)> {
        self.cells.iter().enumerate().map(move |(i, cell)| {
            let x = (i % usize::from(self.width)) as u16;
            let y = (i / usize::from(self.width)) as u16;
            (x, y, cell)
        })
    }

    /// Render a row as plain text, for assertions in tests.
    pub fn row_text(&self, y: u16) -> String {
        (0..self.width)
            .filter_map(|x| self.get(x, y))
            .map(|c| c.ch)
            .collect()
    }
}
