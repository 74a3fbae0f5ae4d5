#![forbid(unsafe_code)]

//! Container that keeps one set of children and swaps the arrangement.

use fitui_core::geometry::{Rect, Size};
use fitui_core::proposal::{Axes, SizeProposal};
use fitui_layout::{Arrangement, Children, FitError, LayoutThatFits, Selection};
use fitui_render::buffer::Buffer;

use crate::{FitWidget, Measurable, Widget};

/// Renders the same children under the first candidate arrangement that
/// fits the area, falling back to the last candidate when none do.
///
/// Children keep their identity across arrangement switches; only the
/// rects they are placed into change.
pub struct FitContainer {
    layout: LayoutThatFits,
    children: Vec<Box<dyn FitWidget>>,
}

impl FitContainer {
    /// Create a container from candidate arrangements (most preferred
    /// first) and the children they all lay out.
    ///
    /// Fails if `candidates` is empty; there would be nothing to fall
    /// back to.
    pub fn new(
        candidates: Vec<Box<dyn Arrangement>>,
        children: Vec<Box<dyn FitWidget>>,
    ) -> Result<Self, FitError> {
        Ok(Self {
            layout: LayoutThatFits::new(candidates)?,
            children,
        })
    }

    /// Restrict which axes participate in the fit test.
    #[must_use]
    pub fn axes(mut self, axes: Axes) -> Self {
        self.layout = self.layout.axes(axes);
        self
    }

    pub fn child_count(&self) -> usize {
        self.children.len()
    }

    fn with_children<R>(&self, f: impl FnOnce(&Children<'_>) -> R) -> R {
        let measure = |index: usize, proposal: SizeProposal| {
            self.children
                .get(index)
                .map_or(Size::ZERO, |child| child.measure(proposal))
        };
        f(&Children::new(self.children.len(), &measure))
    }

    /// Which candidate the container would show under `proposal`.
    pub fn selection(&self, proposal: SizeProposal) -> Selection {
        self.with_children(|children| self.layout.select(proposal, children))
    }
}

impl Measurable for FitContainer {
    fn measure(&self, proposal: SizeProposal) -> Size {
        self.with_children(|children| self.layout.measure(proposal, children))
    }
}

impl Widget for FitContainer {
    fn render(&self, area: Rect, buf: &mut Buffer) {
        if area.is_empty() {
            return;
        }
        let proposal = SizeProposal::from_rect(area);
        let rects = self.with_children(|children| self.layout.place(area, proposal, children));
        for (child, rect) in self.children.iter().zip(rects) {
            let rect = rect.intersection(area);
            if !rect.is_empty() {
                child.render(rect, buf);
            }
        }
    }
}

impl std::fmt::Debug for FitContainer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FitContainer")
            .field("layout", &self.layout)
            .field("children", &self.children.len())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Label;
    use fitui_layout::Stack;

    fn chips() -> Vec<Box<dyn FitWidget>> {
        vec![
            Box::new(Label::new("Layout")),
            Box::new(Label::new("That")),
            Box::new(Label::new("Fits")),
        ]
    }

    fn container() -> FitContainer {
        FitContainer::new(
            vec![
                Box::new(Stack::horizontal().gap(1)),
                Box::new(Stack::vertical()),
            ],
            chips(),
        )
        .unwrap()
        .axes(Axes::HORIZONTAL)
    }

    #[test]
    fn empty_candidates_is_an_error() {
        assert!(FitContainer::new(Vec::new(), chips()).is_err());
    }

    #[test]
    fn wide_area_picks_the_row() {
        // "Layout" + "That" + "Fits" with single gaps needs 16 columns.
        let c = container();
        let sel = c.selection(SizeProposal::width_only(30));
        assert_eq!(sel.index, 0);
        assert!(sel.fits);
    }

    #[test]
    fn narrow_area_falls_through_to_the_column() {
        let c = container();
        let sel = c.selection(SizeProposal::width_only(10));
        assert_eq!(sel.index, 1);
        assert!(sel.fits);
    }

    #[test]
    fn render_matches_selection_shape() {
        let c = container();
        let mut buf = Buffer::new(30, 4);
        c.render(Rect::new(0, 0, 30, 4), &mut buf);
        assert_eq!(buf.row_text(0).trim_end(), "Layout That Fits");
        assert_eq!(buf.row_text(1).trim_end(), "");

        let mut buf = Buffer::new(10, 4);
        c.render(Rect::new(0, 0, 10, 4), &mut buf);
        assert_eq!(buf.row_text(0).trim_end(), "Layout");
        assert_eq!(buf.row_text(1).trim_end(), "That");
        assert_eq!(buf.row_text(2).trim_end(), "Fits");
    }

    #[test]
    fn children_are_clipped_to_the_area() {
        // Column arrangement but only two rows of space.
        let c = container();
        let mut buf = Buffer::new(10, 2);
        c.render(Rect::new(0, 0, 10, 2), &mut buf);
        assert_eq!(buf.row_text(0).trim_end(), "Layout");
        assert_eq!(buf.row_text(1).trim_end(), "That");
    }

    #[test]
    fn measure_reports_selected_candidate_size() {
        let c = container();
        let wide = c.measure(SizeProposal::width_only(30));
        assert_eq!(wide, Size::new(16, 1));
        let narrow = c.measure(SizeProposal::width_only(10));
        assert_eq!(narrow, Size::new(6, 3));
    }
}
