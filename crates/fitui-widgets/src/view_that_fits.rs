#![forbid(unsafe_code)]

//! Alternative-subtree selection.

use fitui_core::geometry::{Rect, Size};
use fitui_core::proposal::{Axes, SizeProposal};
use fitui_layout::{FitError, Selection, select_fitting};
use fitui_render::buffer::Buffer;

use crate::{FitWidget, Measurable, Widget};

/// Shows the first of several alternative widget subtrees that fits.
///
/// Unlike [`FitContainer`](crate::FitContainer), which rearranges one child
/// set, this swaps entire subtrees: each alternative is an independent
/// widget with its own content, and only the chosen one is rendered.
pub struct ViewThatFits {
    axes: Axes,
    alternatives: Vec<Box<dyn FitWidget>>,
}

impl ViewThatFits {
    /// Create a selector over `alternatives`, most preferred first.
    ///
    /// # Errors
    ///
    /// [`FitError::NoCandidates`] if `alternatives` is empty.
    pub fn new(alternatives: Vec<Box<dyn FitWidget>>) -> Result<Self, FitError> {
        if alternatives.is_empty() {
            return Err(FitError::NoCandidates);
        }
        Ok(Self {
            axes: Axes::all(),
            alternatives,
        })
    }

    /// Restrict which axes participate in the fit test.
    #[must_use]
    pub fn axes(mut self, axes: Axes) -> Self {
        self.axes = axes;
        self
    }

    pub fn alternative_count(&self) -> usize {
        self.alternatives.len()
    }

    /// Which alternative would be shown under `proposal`.
    pub fn selection(&self, proposal: SizeProposal) -> Selection {
        let result = select_fitting(&self.alternatives, proposal, self.axes, |alt| {
            alt.measure(proposal)
        });
        match result {
            Ok(selection) => selection,
            // Unreachable: the list is non-empty by construction.
            Err(FitError::NoCandidates) => Selection {
                index: 0,
                size: Size::ZERO,
                fits: false,
            },
        }
    }
}

impl Measurable for ViewThatFits {
    fn measure(&self, proposal: SizeProposal) -> Size {
        self.selection(proposal).size
    }
}

impl Widget for ViewThatFits {
    fn render(&self, area: Rect, buf: &mut Buffer) {
        if area.is_empty() {
            return;
        }
        let selection = self.selection(SizeProposal::from_rect(area));
        let Some(chosen) = self.alternatives.get(selection.index) else {
            return;
        };
        chosen.render(area, buf);
    }
}

impl std::fmt::Debug for ViewThatFits {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ViewThatFits")
            .field("axes", &self.axes)
            .field("alternatives", &self.alternatives.len())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Label;

    fn alternatives() -> ViewThatFits {
        ViewThatFits::new(vec![
            Box::new(Label::new("A long, spelled-out label")),
            Box::new(Label::new("A medium label")),
            Box::new(Label::new("Short")),
        ])
        .unwrap()
        .axes(Axes::HORIZONTAL)
    }

    #[test]
    fn empty_alternatives_is_an_error() {
        assert!(matches!(
            ViewThatFits::new(Vec::new()),
            Err(FitError::NoCandidates)
        ));
    }

    #[test]
    fn picks_first_alternative_that_fits() {
        let v = alternatives();
        assert_eq!(v.selection(SizeProposal::width_only(40)).index, 0);
        assert_eq!(v.selection(SizeProposal::width_only(20)).index, 1);
        assert_eq!(v.selection(SizeProposal::width_only(8)).index, 2);
    }

    #[test]
    fn falls_back_to_last_alternative() {
        let v = alternatives();
        let sel = v.selection(SizeProposal::width_only(2));
        assert_eq!(sel.index, 2);
        assert!(!sel.fits);
    }

    #[test]
    fn renders_only_the_chosen_subtree() {
        let v = alternatives();
        let mut buf = Buffer::new(20, 1);
        v.render(Rect::new(0, 0, 20, 1), &mut buf);
        assert_eq!(buf.row_text(0).trim_end(), "A medium label");
    }

    #[test]
    fn nests_inside_another_selector() {
        let outer = ViewThatFits::new(vec![
            Box::new(Label::new("An enormous outer alternative, never chosen")),
            Box::new(alternatives()),
        ])
        .unwrap()
        .axes(Axes::HORIZONTAL);

        let sel = outer.selection(SizeProposal::width_only(10));
        assert_eq!(sel.index, 1);
        // Inner selector resolved to its "Short" alternative.
        assert_eq!(sel.size, Size::new(5, 1));
    }
}
