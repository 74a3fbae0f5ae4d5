#![forbid(unsafe_code)]

//! Screen 2: whole alternative subtrees swapped.

use fitui_core::geometry::Rect;
use fitui_core::proposal::{Axes, SizeProposal};
use fitui_render::buffer::Buffer;
use fitui_render::style::Style;
use fitui_widgets::{Block, BorderType, FitWidget, Label, ViewThatFits, Widget};

use crate::theme;

use super::Screen;

use super::layout_that_fits::MIN_WIDTH;

const ALTERNATIVES: [&str; 3] = [
    "View That Fits: the full, spelled-out label",
    "View That Fits",
    "VTF",
];

fn alternative(text: &str) -> Box<dyn FitWidget> {
    Box::new(
        Label::new(text)
            .padding(1)
            .style(Style::new().fg(theme::TEXT).bg(theme::CHIP_BG)),
    )
}

fn build_view() -> Option<ViewThatFits> {
    ViewThatFits::new(ALTERNATIVES.iter().map(|t| alternative(t)).collect())
        .ok()
        .map(|v| v.axes(Axes::HORIZONTAL))
}

pub struct ViewThatFitsScreen {
    view: Option<ViewThatFits>,
}

impl ViewThatFitsScreen {
    pub fn new() -> Self {
        Self { view: build_view() }
    }
}

impl Default for ViewThatFitsScreen {
    fn default() -> Self {
        Self::new()
    }
}

impl Screen for ViewThatFitsScreen {
    fn title(&self) -> &'static str {
        "View That Fits"
    }

    fn blurb(&self) -> &'static str {
        "Independent alternatives, longest first; only the chosen one renders."
    }

    fn render(&self, width: u16, area: Rect, buf: &mut Buffer) {
        let Some(view) = &self.view else {
            return;
        };
        if area.width < MIN_WIDTH || area.height < 8 {
            return;
        }
        let width = width.clamp(MIN_WIDTH, area.width);

        let box_area = Rect::new(area.x, area.y.saturating_add(1), area.width, 3)
            .centered_horizontally(width);
        let block = Block::bordered()
            .border_type(BorderType::Rounded)
            .border_style(Style::new().fg(theme::ACCENT));
        block.render(box_area, buf);
        let inner = block.inner(box_area);
        view.render(inner, buf);

        let selection = view.selection(SizeProposal::width_only(inner.width));
        let list_y = box_area.bottom().saturating_add(1);
        for (index, text) in ALTERNATIVES.iter().enumerate() {
            let chosen = index == selection.index;
            let marker = if chosen { "▶ " } else { "  " };
            let style = if chosen {
                Style::new().fg(theme::ACCENT).bold()
            } else {
                Style::new().fg(theme::MUTED)
            };
            let y = list_y.saturating_add(index as u16);
            let x = buf.draw_text(area.x, y, marker, area.width, style);
            let quoted = format!("\"{text}\"");
            buf.draw_text(area.x.saturating_add(x), y, &quoted, area.width, style);
        }

        let status = if selection.fits {
            format!(
                "alternative {} of {} fits in {} columns",
                selection.index + 1,
                ALTERNATIVES.len(),
                inner.width
            )
        } else {
            "nothing fits, shortest alternative shown".to_string()
        };
        let status_style = if selection.fits {
            Style::new().fg(theme::OK)
        } else {
            Style::new().fg(theme::OVERFLOW)
        };
        let status_y = list_y.saturating_add(ALTERNATIVES.len() as u16 + 1);
        buf.draw_text(area.x, status_y, &status, area.width, status_style);

        buf.draw_text(
            area.x,
            status_y.saturating_add(1),
            &format!("constraint width: {width} columns"),
            area.width,
            Style::new().fg(theme::TEXT),
        );
    }
}
