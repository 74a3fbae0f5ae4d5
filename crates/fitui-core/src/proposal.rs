#![forbid(unsafe_code)]

//! Space proposals and axis masks for fit testing.
//!
//! A [`SizeProposal`] is the space a container offers a piece of content for
//! measurement. Each dimension is either a finite bound or unconstrained.
//! An [`Axes`] mask selects which dimensions participate in a fit test;
//! an absent axis is never checked.

use bitflags::bitflags;

use crate::geometry::{Rect, Size};

bitflags! {
    /// The set of axes a measured size must fit within.
    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    pub struct Axes: u8 {
        /// Width must fit.
        const HORIZONTAL = 1 << 0;
        /// Height must fit.
        const VERTICAL = 1 << 1;
    }
}

impl Default for Axes {
    /// Both axes, matching the common "must fit entirely" case.
    fn default() -> Self {
        Self::all()
    }
}

/// A space offer: optional per-axis bounds, `None` meaning unconstrained.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct SizeProposal {
    /// Width bound in columns, or `None` for unconstrained.
    pub width: Option<u16>,
    /// Height bound in rows, or `None` for unconstrained.
    pub height: Option<u16>,
}

impl SizeProposal {
    /// A proposal with no bounds on either axis.
    pub const UNCONSTRAINED: Self = Self {
        width: None,
        height: None,
    };

    /// A proposal bounded on both axes.
    #[inline]
    pub const fn exact(width: u16, height: u16) -> Self {
        Self {
            width: Some(width),
            height: Some(height),
        }
    }

    /// A proposal bounded on width only (unbounded vertical layouts).
    #[inline]
    pub const fn width_only(width: u16) -> Self {
        Self {
            width: Some(width),
            height: None,
        }
    }

    /// A proposal matching a rectangle's extent on both axes.
    #[inline]
    pub const fn from_rect(rect: Rect) -> Self {
        Self::exact(rect.width, rect.height)
    }

    /// Replace the width bound.
    #[inline]
    pub const fn with_width(self, width: Option<u16>) -> Self {
        Self { width, ..self }
    }

    /// Replace the height bound.
    #[inline]
    pub const fn with_height(self, height: Option<u16>) -> Self {
        Self { height, ..self }
    }

    /// Fit test: does `size` fit this proposal on every axis in `axes`?
    ///
    /// An unconstrained dimension always satisfies its axis, and an axis
    /// absent from the mask is ignored entirely.
    #[inline]
    pub fn accommodates(&self, size: Size, axes: Axes) -> bool {
        let width_fits = match self.width {
            Some(bound) => size.width <= bound,
            None => true,
        };
        let height_fits = match self.height {
            Some(bound) => size.height <= bound,
            None => true,
        };
        (width_fits || !axes.contains(Axes::HORIZONTAL))
            && (height_fits || !axes.contains(Axes::VERTICAL))
    }

    /// Clamp a measured size to the proposal's bounds.
    #[inline]
    pub fn clamp(&self, size: Size) -> Size {
        Size {
            width: size.width.min(self.width.unwrap_or(u16::MAX)),
            height: size.height.min(self.height.unwrap_or(u16::MAX)),
        }
    }
}
