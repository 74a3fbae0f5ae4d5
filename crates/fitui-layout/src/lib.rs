#![forbid(unsafe_code)]

//! First-fit layout selection.
//!
//! This crate answers one question: given an ordered list of candidate
//! arrangements (most to least preferred) and a space proposal, which is the
//! first candidate whose measured size fits? It provides:
//!
//! - [`select_fitting`] - the generic first-fit scan
//! - [`Arrangement`] - the {measure, place} capability interface
//! - [`LayoutThatFits`] - a polymorphic container of boxed arrangements that
//!   is itself an arrangement, delegating to whichever candidate fits
//! - [`Stack`] - horizontal/vertical sequence arrangements used as candidates
//!
//! Selection is a pure function of its inputs: no hidden state, no caching,
//! identical results on every repeated call. Hosts are expected to re-run it
//! once per measure pass and once per placement pass, exactly as a layout
//! engine re-proposes space while a container resizes.
//!
//! ```
//! use fitui_core::geometry::Size;
//! use fitui_core::proposal::{Axes, SizeProposal};
//! use fitui_layout::select_fitting;
//!
//! let widths = [500u16, 200, 50];
//! let selection = select_fitting(
//!     &widths,
//!     SizeProposal::width_only(300),
//!     Axes::HORIZONTAL,
//!     |&w| Size::new(w, 1),
//! )
//! .unwrap();
//! assert_eq!(selection.index, 1);
//! assert!(selection.fits);
//! ```

pub mod stack;

use std::error::Error;
use std::fmt;

pub use fitui_core::geometry::{Rect, Size};
pub use fitui_core::proposal::{Axes, SizeProposal};
pub use stack::{Direction, Stack};

#[cfg(feature = "tracing")]
use fitui_core::trace;

/// Error raised when fit selection is invoked with no candidates.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FitError {
    /// The candidate list was empty; there is nothing to select.
    NoCandidates,
}

impl fmt::Display for FitError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NoCandidates => f.write_str("fit selection requires at least one candidate"),
        }
    }
}

impl Error for FitError {}

/// Outcome of a fit selection.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Selection {
    /// Index of the chosen candidate in the input list.
    pub index: usize,
    /// The chosen candidate's measured size under the proposal.
    pub size: Size,
    /// Whether the candidate actually fit. `false` means no candidate fit
    /// and the last one was chosen as fallback.
    pub fits: bool,
}

/// Scan `candidates` in preference order and select the first whose measured
/// size fits `proposal` on every axis in `axes`.
///
/// `measure` is called at most once per candidate per invocation and must be
/// pure; results are never cached across calls since proposals change over
/// time. If no candidate fits, the last one is selected (`fits: false`) so
/// the caller always has something to render, preferring the most
/// space-permissive option.
///
/// # Errors
///
/// [`FitError::NoCandidates`] if `candidates` is empty.
pub fn select_fitting<C, F>(
    candidates: &[C],
    proposal: SizeProposal,
    axes: Axes,
    mut measure: F,
) -> Result<Selection, FitError>
where
    F: FnMut(&C) -> Size,
{
    let (last, rest) = candidates.split_last().ok_or(FitError::NoCandidates)?;

    for (index, candidate) in rest.iter().enumerate() {
        let size = measure(candidate);
        if proposal.accommodates(size, axes) {
            #[cfg(feature = "tracing")]
            trace!(index, width = size.width, height = size.height, "candidate fits");
            return Ok(Selection {
                index,
                size,
                fits: true,
            });
        }
    }

    let size = measure(last);
    let fits = proposal.accommodates(size, axes);
    #[cfg(feature = "tracing")]
    if !fits {
        trace!(
            index = candidates.len() - 1,
            "no candidate fits, falling back to last"
        );
    }
    Ok(Selection {
        index: candidates.len() - 1,
        size,
        fits,
    })
}

/// Measurement access to a container's children, supplied by the host.
///
/// Arrangements never hold children; they are handed this view so the same
/// child set can be measured under different arrangements. Mirrors the
/// measurer-callback shape used for content-aware splitting in constraint
/// layouts.
pub struct Children<'a> {
    count: usize,
    measure: &'a dyn Fn(usize, SizeProposal) -> Size,
}

impl<'a> Children<'a> {
    /// Wrap a measurer callback over `count` children.
    pub fn new(count: usize, measure: &'a dyn Fn(usize, SizeProposal) -> Size) -> Self {
        Self { count, measure }
    }

    /// Number of children.
    #[must_use]
    pub fn len(&self) -> usize {
        self.count
    }

    /// Whether there are no children.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.count == 0
    }

    /// Measure child `index` against `proposal`.
    ///
    /// Out-of-range indices measure as zero; arrangements iterate
    /// `0..len()` so this only matters for misbehaving callers.
    pub fn measure(&self, index: usize, proposal: SizeProposal) -> Size {
        if index < self.count {
            (self.measure)(index, proposal)
        } else {
            Size::ZERO
        }
    }
}

impl fmt::Debug for Children<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Children").field("count", &self.count).finish()
    }
}

/// An arrangement: one way of measuring and placing a set of children.
///
/// This is the single capability interface behind which heterogeneous layout
/// strategies are erased. `measure` reports the footprint the children would
/// occupy under this arrangement; `place` positions them, returning one rect
/// per child. `place` is invoked only for the finally selected arrangement,
/// once per placement pass.
pub trait Arrangement {
    /// Measured footprint of the children under this arrangement.
    fn measure(&self, proposal: SizeProposal, children: &Children<'_>) -> Size;

    /// Place children within `bounds`, returning one rect per child.
    fn place(&self, bounds: Rect, proposal: SizeProposal, children: &Children<'_>) -> Vec<Rect>;
}

/// A container that renders with the first of its candidate arrangements
/// that fits the proposed space.
///
/// Candidates are ordered from most to least preferred; if none fit, the
/// last is used. The container itself implements [`Arrangement`], so it can
/// nest inside other containers, including another `LayoutThatFits`.
pub struct LayoutThatFits {
    axes: Axes,
    candidates: Vec<Box<dyn Arrangement>>,
}

impl LayoutThatFits {
    /// Create a selector over `candidates`, testing fit on both axes.
    ///
    /// # Errors
    ///
    /// [`FitError::NoCandidates`] if `candidates` is empty; the non-empty
    /// invariant is established here so selection itself cannot fail later.
    pub fn new(candidates: Vec<Box<dyn Arrangement>>) -> Result<Self, FitError> {
        if candidates.is_empty() {
            return Err(FitError::NoCandidates);
        }
        Ok(Self {
            axes: Axes::all(),
            candidates,
        })
    }

    /// Restrict the fit test to the given axes.
    #[must_use]
    pub fn axes(mut self, axes: Axes) -> Self {
        self.axes = axes;
        self
    }

    /// Number of candidate arrangements.
    #[must_use]
    pub fn candidate_count(&self) -> usize {
        self.candidates.len()
    }

    /// Run the first-fit scan for the given proposal and children.
    pub fn select(&self, proposal: SizeProposal, children: &Children<'_>) -> Selection {
        let result = select_fitting(&self.candidates, proposal, self.axes, |candidate| {
            candidate.measure(proposal, children)
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

impl Arrangement for LayoutThatFits {
    fn measure(&self, proposal: SizeProposal, children: &Children<'_>) -> Size {
        self.select(proposal, children).size
    }

    fn place(&self, bounds: Rect, proposal: SizeProposal, children: &Children<'_>) -> Vec<Rect> {
        // Selection re-runs here with the placement proposal, mirroring the
        // measure pass; both passes must agree on the winner.
        let selection = self.select(proposal, children);
        self.candidates[selection.index].place(bounds, proposal, children)
    }
}

impl fmt::Debug for LayoutThatFits {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LayoutThatFits")
            .field("axes", &self.axes)
            .field("candidates", &self.candidates.len())
            .finish()
    }
}
