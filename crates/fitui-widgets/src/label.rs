#![forbid(unsafe_code)]

//! Single-line text label.

use fitui_core::geometry::{Rect, Size};
use fitui_core::proposal::SizeProposal;
use fitui_render::buffer::Buffer;
use fitui_render::cell::Cell;
use fitui_render::style::Style;
use unicode_width::UnicodeWidthStr;

use crate::{Measurable, Widget};

/// A one-line text chip with optional horizontal padding.
///
/// The label always wants its full text width plus padding; it does not
/// shrink to a proposal. That makes it a fixed-footprint child whose fit
/// or overflow the container decides on.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Label {
    text: String,
    style: Style,
    padding: u16,
}

impl Label {
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            ..Self::default()
        }
    }

    /// Set the style applied to the whole label area.
    #[must_use]
    pub fn style(mut self, style: Style) -> Self {
        self.style = style;
        self
    }

    /// Columns of padding on each side of the text.
    #[must_use]
    pub fn padding(mut self, padding: u16) -> Self {
        self.padding = padding;
        self
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    fn content_width(&self) -> u16 {
        let text = u16::try_from(self.text.width()).unwrap_or(u16::MAX);
        text.saturating_add(self.padding.saturating_mul(2))
    }
}

impl Measurable for Label {
    fn measure(&self, _proposal: SizeProposal) -> Size {
        Size::new(self.content_width(), 1)
    }
}

impl Widget for Label {
    fn render(&self, area: Rect, buf: &mut Buffer) {
        if area.is_empty() {
            return;
        }
        let mut blank = Cell::BLANK;
        self.style.apply(&mut blank);
        buf.fill(Rect::new(area.x, area.y, area.width, 1), blank);

        let x = area.x.saturating_add(self.padding);
        let budget = area.width.saturating_sub(self.padding.saturating_mul(2));
        buf.draw_text(x, area.y, &self.text, budget, self.style);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use fitui_core::proposal::SizeProposal;
    use fitui_render::cell::Rgb;

    #[test]
    fn measure_ignores_proposal() {
        let label = Label::new("Fits").padding(1);
        let want = label.measure(SizeProposal::UNCONSTRAINED);
        assert_eq!(want, Size::new(6, 1));
        assert_eq!(label.measure(SizeProposal::exact(2, 1)), want);
    }

    #[test]
    fn wide_text_measures_in_columns() {
        let label = Label::new("日本");
        assert_eq!(label.measure(SizeProposal::UNCONSTRAINED).width, 4);
    }

    #[test]
    fn render_pads_and_fills_background() {
        let label = Label::new("ab")
            .padding(1)
            .style(Style::new().bg(Rgb::new(1, 1, 1)));
        let mut buf = Buffer::new(6, 1);
        label.render(Rect::new(1, 0, 4, 1), &mut buf);
        assert_eq!(buf.row_text(0), "  ab  ");
        assert_eq!(buf.get(1, 0).and_then(|c| c.bg), Some(Rgb::new(1, 1, 1)));
        assert_eq!(buf.get(0, 0).and_then(|c| c.bg), None);
        assert_eq!(buf.get(5, 0).and_then(|c| c.bg), None);
    }

    #[test]
    fn render_clips_to_area() {
        let label = Label::new("overflowing");
        let mut buf = Buffer::new(8, 1);
        label.render(Rect::new(0, 0, 4, 1), &mut buf);
        assert_eq!(buf.row_text(0), "over    ");
    }
}
