#![forbid(unsafe_code)]

//! Style builder applied to cells by widgets.

use crate::cell::{Cell, Rgb, StyleFlags};

/// A partial style: unset fields leave the cell unchanged.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Style {
    pub fg: Option<Rgb>,
    pub bg: Option<Rgb>,
    pub attrs: StyleFlags,
}

impl Style {
    /// An empty style.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the foreground color.
    #[must_use]
    pub fn fg(mut self, color: Rgb) -> Self {
        self.fg = Some(color);
        self
    }

    /// Set the background color.
    #[must_use]
    pub fn bg(mut self, color: Rgb) -> Self {
        self.bg = Some(color);
        self
    }

    /// Add the bold attribute.
    #[must_use]
    pub fn bold(mut self) -> Self {
        self.attrs |= StyleFlags::BOLD;
        self
    }

    /// Add the dim attribute.
    #[must_use]
    pub fn dim(mut self) -> Self {
        self.attrs |= StyleFlags::DIM;
        self
    }

    /// Add the italic attribute.
    #[must_use]
    pub fn italic(mut self) -> Self {
        self.attrs |= StyleFlags::ITALIC;
        self
    }

    /// Whether applying this style would change nothing.
    pub fn is_empty(&self) -> bool {
        self.fg.is_none() && self.bg.is_none() && self.attrs.is_empty()
    }

    /// Apply this style to a cell, preserving its content.
    pub fn apply(&self, cell: &mut Cell) {
        if let Some(fg) = self.fg {
            cell.fg = Some(fg);
        }
        if let Some(bg) = self.bg {
            cell.bg = Some(bg);
        }
        cell.attrs |= self.attrs;
    }
}
