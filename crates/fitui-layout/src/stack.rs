#![forbid(unsafe_code)]

//! Sequential stack arrangements.
//!
//! A [`Stack`] lays children out one after another along a main axis at
//! their intrinsic sizes, with an optional gap between them. Stacks are the
//! usual candidates handed to a fit selector: the same children measure
//! wide-and-short horizontally and narrow-and-tall vertically, so a
//! horizontal-first candidate list degrades gracefully as width shrinks.

use fitui_core::geometry::{Rect, Size};
use fitui_core::proposal::SizeProposal;

use crate::{Arrangement, Children};

/// The direction children are laid out in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Direction {
    /// Left to right.
    #[default]
    Horizontal,
    /// Top to bottom.
    Vertical,
}

/// A fixed-size sequence of children along one axis.
#[derive(Debug, Clone, Copy, Default)]
pub struct Stack {
    direction: Direction,
    gap: u16,
}

impl Stack {
    /// A left-to-right stack.
    pub fn horizontal() -> Self {
        Self {
            direction: Direction::Horizontal,
            gap: 0,
        }
    }

    /// A top-to-bottom stack.
    pub fn vertical() -> Self {
        Self {
            direction: Direction::Vertical,
            gap: 0,
        }
    }

    /// Set the gap between adjacent children.
    #[must_use]
    pub fn gap(mut self, gap: u16) -> Self {
        self.gap = gap;
        self
    }

    /// The proposal a child sees: unconstrained on the main axis (children
    /// take their intrinsic size there), the container's bound on the cross
    /// axis.
    fn child_proposal(&self, proposal: SizeProposal) -> SizeProposal {
        match self.direction {
            Direction::Horizontal => proposal.with_width(None),
            Direction::Vertical => proposal.with_height(None),
        }
    }

    fn total_gap(&self, count: usize) -> u16 {
        if count > 1 {
            ((count as u64 - 1) * self.gap as u64).min(u16::MAX as u64) as u16
        } else {
            0
        }
    }
}

impl Arrangement for Stack {
    fn measure(&self, proposal: SizeProposal, children: &Children<'_>) -> Size {
        let child_proposal = self.child_proposal(proposal);
        let mut main: u16 = 0;
        let mut cross: u16 = 0;

        for index in 0..children.len() {
            let size = children.measure(index, child_proposal);
            match self.direction {
                Direction::Horizontal => {
                    main = main.saturating_add(size.width);
                    cross = cross.max(size.height);
                }
                Direction::Vertical => {
                    main = main.saturating_add(size.height);
                    cross = cross.max(size.width);
                }
            }
        }
        main = main.saturating_add(self.total_gap(children.len()));

        match self.direction {
            Direction::Horizontal => Size::new(main, cross),
            Direction::Vertical => Size::new(cross, main),
        }
    }

    fn place(&self, bounds: Rect, proposal: SizeProposal, children: &Children<'_>) -> Vec<Rect> {
        let child_proposal = self.child_proposal(proposal);
        let mut rects = Vec::with_capacity(children.len());
        let mut pos = match self.direction {
            Direction::Horizontal => bounds.x,
            Direction::Vertical => bounds.y,
        };

        for index in 0..children.len() {
            let size = children.measure(index, child_proposal);
            let rect = match self.direction {
                Direction::Horizontal => Rect::new(pos, bounds.y, size.width, size.height),
                Direction::Vertical => Rect::new(bounds.x, pos, size.width, size.height),
            };
            let advance = match self.direction {
                Direction::Horizontal => size.width,
                Direction::Vertical => size.height,
            };
            pos = pos.saturating_add(advance).saturating_add(self.gap);
            rects.push(rect);
        }

        rects
    }
}
