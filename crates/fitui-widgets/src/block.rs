#![forbid(unsafe_code)]

//! Bordered block container.

use bitflags::bitflags;
use fitui_core::geometry::Rect;
use fitui_render::buffer::Buffer;
use fitui_render::cell::Cell;
use fitui_render::style::Style;

use crate::Widget;

bitflags! {
    /// Which sides of a block draw a border.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
    pub struct Borders: u8 {
        const TOP = 1 << 0;
        const RIGHT = 1 << 1;
        const BOTTOM = 1 << 2;
        const LEFT = 1 << 3;
        const ALL = Self::TOP.bits() | Self::RIGHT.bits() | Self::BOTTOM.bits() | Self::LEFT.bits();
    }
}

/// Border character set.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum BorderType {
    #[default]
    Plain,
    Rounded,
}

struct BorderSet {
    top_left: char,
    top_right: char,
    bottom_left: char,
    bottom_right: char,
    horizontal: char,
    vertical: char,
}

impl BorderType {
    fn to_border_set(self) -> BorderSet {
        match self {
            BorderType::Plain => BorderSet {
                top_left: '┌',
                top_right: '┐',
                bottom_left: '└',
                bottom_right: '┘',
                horizontal: '─',
                vertical: '│',
            },
            BorderType::Rounded => BorderSet {
                top_left: '╭',
                top_right: '╮',
                bottom_left: '╰',
                bottom_right: '╯',
                horizontal: '─',
                vertical: '│',
            },
        }
    }
}

/// A block with optional borders and a title on the top edge.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Block<'a> {
    borders: Borders,
    border_type: BorderType,
    border_style: Style,
    title: Option<&'a str>,
}

impl<'a> Block<'a> {
    pub fn new() -> Self {
        Self::default()
    }

    /// A block with all four borders.
    pub fn bordered() -> Self {
        Self::default().borders(Borders::ALL)
    }

    /// Set which borders to render.
    #[must_use]
    pub fn borders(mut self, borders: Borders) -> Self {
        self.borders = borders;
        self
    }

    /// Set the border character set.
    #[must_use]
    pub fn border_type(mut self, border_type: BorderType) -> Self {
        self.border_type = border_type;
        self
    }

    /// Set the style applied to border characters and the title.
    #[must_use]
    pub fn border_style(mut self, style: Style) -> Self {
        self.border_style = style;
        self
    }

    /// Set the title displayed on the top border.
    #[must_use]
    pub fn title(mut self, title: &'a str) -> Self {
        self.title = Some(title);
        self
    }

    /// The area inside this block's borders.
    pub fn inner(&self, area: Rect) -> Rect {
        let mut inner = area;
        if self.borders.contains(Borders::LEFT) {
            inner.x = inner.x.saturating_add(1);
            inner.width = inner.width.saturating_sub(1);
        }
        if self.borders.contains(Borders::TOP) {
            inner.y = inner.y.saturating_add(1);
            inner.height = inner.height.saturating_sub(1);
        }
        if self.borders.contains(Borders::RIGHT) {
            inner.width = inner.width.saturating_sub(1);
        }
        if self.borders.contains(Borders::BOTTOM) {
            inner.height = inner.height.saturating_sub(1);
        }
        inner
    }

    fn set(&self, buf: &mut Buffer, x: u16, y: u16, ch: char) {
        let mut cell = Cell::from_char(ch);
        self.border_style.apply(&mut cell);
        buf.set(x, y, cell);
    }
}

impl Widget for Block<'_> {
    fn render(&self, area: Rect, buf: &mut Buffer) {
        if area.is_empty() {
            return;
        }
        let set = self.border_type.to_border_set();
        let right = area.right().saturating_sub(1);
        let bottom = area.bottom().saturating_sub(1);

        if self.borders.contains(Borders::TOP) {
            for x in area.x..area.right() {
                self.set(buf, x, area.y, set.horizontal);
            }
        }
        if self.borders.contains(Borders::BOTTOM) {
            for x in area.x..area.right() {
                self.set(buf, x, bottom, set.horizontal);
            }
        }
        if self.borders.contains(Borders::LEFT) {
            for y in area.y..area.bottom() {
                self.set(buf, area.x, y, set.vertical);
            }
        }
        if self.borders.contains(Borders::RIGHT) {
            for y in area.y..area.bottom() {
                self.set(buf, right, y, set.vertical);
            }
        }

        if self.borders.contains(Borders::TOP | Borders::LEFT) {
            self.set(buf, area.x, area.y, set.top_left);
        }
        if self.borders.contains(Borders::TOP | Borders::RIGHT) {
            self.set(buf, right, area.y, set.top_right);
        }
        if self.borders.contains(Borders::BOTTOM | Borders::LEFT) {
            self.set(buf, area.x, bottom, set.bottom_left);
        }
        if self.borders.contains(Borders::BOTTOM | Borders::RIGHT) {
            self.set(buf, right, bottom, set.bottom_right);
        }

        if let Some(title) = self.title
            && self.borders.contains(Borders::TOP)
            && area.width > 4
        {
            let budget = area.width.saturating_sub(4);
            buf.draw_text(area.x.saturating_add(2), area.y, title, budget, self.border_style);
        }
    }
}
