#![forbid(unsafe_code)]

//! Screen 1: one child set, candidate arrangements swapped.

use fitui_core::geometry::Rect;
use fitui_core::proposal::{Axes, SizeProposal};
use fitui_layout::{Arrangement, Stack};
use fitui_render::buffer::Buffer;
use fitui_render::style::Style;
use fitui_widgets::{Block, BorderType, FitContainer, FitWidget, Label, Widget};

use crate::theme;

use super::Screen;

/// Smallest useful constraint box, borders included.
pub const MIN_WIDTH: u16 = 6;

fn chip(text: &str) -> Box<dyn FitWidget> {
    Box::new(
        Label::new(text)
            .padding(1)
            .style(Style::new().fg(theme::TEXT).bg(theme::CHIP_BG)),
    )
}

fn build_container() -> Option<FitContainer> {
    let candidates: Vec<Box<dyn Arrangement>> = vec![
        Box::new(Stack::horizontal().gap(1)),
        Box::new(Stack::vertical()),
    ];
    let children = vec![chip("Layout"), chip("That"), chip("Fits")];
    FitContainer::new(candidates, children)
        .ok()
        .map(|c| c.axes(Axes::HORIZONTAL))
}

pub struct LayoutThatFitsScreen {
    container: Option<FitContainer>,
}

impl LayoutThatFitsScreen {
    pub fn new() -> Self {
        Self {
            container: build_container(),
        }
    }
}

impl Default for LayoutThatFitsScreen {
    fn default() -> Self {
        Self::new()
    }
}

impl Screen for LayoutThatFitsScreen {
    fn title(&self) -> &'static str {
        "Layout That Fits"
    }

    fn blurb(&self) -> &'static str {
        "Same chips, first arrangement that fits: row, then column."
    }

    fn render(&self, width: u16, area: Rect, buf: &mut Buffer) {
        let Some(container) = &self.container else {
            return;
        };
        if area.width < MIN_WIDTH || area.height < 8 {
            return;
        }
        let width = width.clamp(MIN_WIDTH, area.width);

        let muted = Style::new().fg(theme::MUTED);
        let text = Style::new().fg(theme::TEXT);

        // Constraint box, centered, tall enough for the column arrangement.
        let box_area = Rect::new(area.x, area.y.saturating_add(1), area.width, 5)
            .centered_horizontally(width);
        let block = Block::bordered()
            .border_type(BorderType::Rounded)
            .border_style(Style::new().fg(theme::ACCENT));
        block.render(box_area, buf);
        let inner = block.inner(box_area);
        container.render(inner, buf);

        // Selection readout against the inner width, the space the
        // children are actually offered.
        let proposal = SizeProposal::width_only(inner.width);
        let selection = container.selection(proposal);
        let candidates = [
            "Stack::horizontal().gap(1)  row",
            "Stack::vertical()           column",
        ];
        let list_y = box_area.bottom().saturating_add(1);
        for (index, line) in candidates.iter().enumerate() {
            let chosen = index == selection.index;
            let marker = if chosen { "▶ " } else { "  " };
            let style = if chosen {
                Style::new().fg(theme::ACCENT).bold()
            } else {
                muted
            };
            let y = list_y.saturating_add(index as u16);
            let x = buf.draw_text(area.x, y, marker, area.width, style);
            buf.draw_text(area.x.saturating_add(x), y, line, area.width, style);
        }

        let status = if selection.fits {
            format!(
                "candidate {} fits: needs {}x{} in {} columns",
                selection.index + 1,
                selection.size.width,
                selection.size.height,
                inner.width
            )
        } else {
            format!(
                "nothing fits, last candidate shown ({}x{})",
                selection.size.width, selection.size.height
            )
        };
        let status_style = if selection.fits {
            Style::new().fg(theme::OK)
        } else {
            Style::new().fg(theme::OVERFLOW)
        };
        let status_y = list_y.saturating_add(candidates.len() as u16 + 1);
        buf.draw_text(area.x, status_y, &status, area.width, status_style);

        buf.draw_text(
            area.x,
            status_y.saturating_add(1),
            &format!("constraint width: {width} columns"),
            area.width,
            text,
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn render_at(width: u16) -> Buffer {
        let mut buf = Buffer::new(80, 14);
        LayoutThatFitsScreen::new().render(width, Rect::new(0, 0, 80, 14), &mut buf);
        buf
    }

    fn dump(buf: &Buffer) -> String {
        (0..buf.height())
            .map(|y| buf.row_text(y))
            .collect::<Vec<_>>()
            .join("\n")
    }

    #[test]
    fn wide_box_shows_the_row() {
        let out = dump(&render_at(40));
        // Padded chips separated by one gap column.
        assert!(out.contains(" Layout   That   Fits "));
        assert!(out.contains("▶ Stack::horizontal"));
    }

    #[test]
    fn narrow_box_shows_the_column() {
        let buf = render_at(12);
        let out = dump(&buf);
        assert!(out.contains("▶ Stack::vertical"));
        // Chips stack: each row holds one.
        let rows: Vec<String> = (0..buf.height()).map(|y| buf.row_text(y)).collect();
        assert!(rows.iter().any(|r| r.contains("Layout") && !r.contains("That")));
    }

    #[test]
    fn tiny_area_renders_nothing() {
        let mut buf = Buffer::new(4, 3);
        LayoutThatFitsScreen::new().render(40, Rect::new(0, 0, 4, 3), &mut buf);
        assert!(buf.iter().all(|(_, _, c)| c.is_blank()));
    }

    #[test]
    fn status_reports_fit() {
        assert!(dump(&render_at(40)).contains("fits"));
    }
}
