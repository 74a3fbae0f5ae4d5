#![forbid(unsafe_code)]

//! Cell types.
//!
//! The [`Cell`] is the unit of the terminal grid: one character plus its
//! colors and attributes. `None` colors mean the terminal's defaults.
//! Multi-column graphemes are not modeled; the buffer writes one char per
//! column and skips columns a wide character spills into.

use bitflags::bitflags;

/// A 24-bit color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    /// Create a color from components.
    #[inline]
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }
}

bitflags! {
    /// Text attributes.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
    pub struct StyleFlags: u8 {
        const BOLD = 1 << 0;
        const DIM = 1 << 1;
        const ITALIC = 1 << 2;
        const UNDERLINE = 1 << 3;
    }
}

/// One terminal cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Cell {
    /// Displayed character; `' '` for blank cells.
    pub ch: char,
    /// Foreground color, or terminal default.
    pub fg: Option<Rgb>,
    /// Background color, or terminal default.
    pub bg: Option<Rgb>,
    /// Text attributes.
    pub attrs: StyleFlags,
}

impl Cell {
    /// A blank cell with default colors.
    pub const BLANK: Self = Self {
        ch: ' ',
        fg: None,
        bg: None,
        attrs: StyleFlags::empty(),
    };

    /// Create an unstyled cell from a character.
    #[inline]
    pub const fn from_char(ch: char) -> Self {
        Self { ch, ..Self::BLANK }
    }

    /// Whether this cell displays nothing beyond the default background.
    #[inline]
    pub fn is_blank(&self) -> bool {
        *self == Self::BLANK
    }
}

impl Default for Cell {
    fn default() -> Self {
        Self::BLANK
    }
}

#[cfg(test)]
mod tests {
    use super::{Cell, Rgb, StyleFlags};

    #[test]
    fn default_cell_is_blank() {
        assert!(Cell::default().is_blank());
        assert_eq!(Cell::default().ch, ' ');
    }

    #[test]
    fn from_char_keeps_default_style() {
        let c = Cell::from_char('x');
        assert_eq!(c.ch, 'x');
        assert_eq!(c.fg, None);
        assert_eq!(c.bg, None);
        assert!(c.attrs.is_empty());
        assert!(!c.is_blank());
    }

    #[test]
    fn styled_space_is_not_blank() {
        let mut c = Cell::BLANK;
        c.bg = Some(Rgb::new(10, 20, 30));
        assert!(!c.is_blank());

        let mut bold = Cell::BLANK;
        bold.attrs = StyleFlags::BOLD;
        assert!(!bold.is_blank());
    }
}
