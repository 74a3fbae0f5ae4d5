#![forbid(unsafe_code)]

//! Widgets for FitUI.
//!
//! A [`Widget`] renders itself into a [`Buffer`] within a given [`Rect`].
//! Widgets that participate in fit selection also implement [`Measurable`],
//! reporting the size they want under a [`SizeProposal`]; containers such
//! as [`FitContainer`] and [`ViewThatFits`] measure their children to pick
//! which candidate to show.

pub mod block;
pub mod fit_container;
pub mod label;
pub mod view_that_fits;

pub use block::{Block, BorderType, Borders};
pub use fit_container::FitContainer;
pub use label::Label;
pub use view_that_fits::ViewThatFits;

use fitui_core::geometry::{Rect, Size};
use fitui_core::proposal::SizeProposal;
use fitui_render::buffer::Buffer;

/// A renderable component.
pub trait Widget {
    /// Render the widget into the buffer at the given area.
    fn render(&self, area: Rect, buf: &mut Buffer);
}

/// A widget that can report its wanted size under a proposal.
pub trait Measurable {
    /// The size this widget wants when offered `proposal`.
    ///
    /// Measurement must be pure: the same proposal always yields the same
    /// size, and measuring must not mutate the widget.
    fn measure(&self, proposal: SizeProposal) -> Size;
}

/// A widget that both measures and renders, usable inside fit containers.
pub trait FitWidget: Widget + Measurable {}

impl<T: Widget + Measurable> FitWidget for T {}
