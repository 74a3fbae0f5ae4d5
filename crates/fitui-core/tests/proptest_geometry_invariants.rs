#![forbid(unsafe_code)]

//! Property-based invariants for geometry and proposals.

use fitui_core::geometry::{Rect, Sides, Size};
use fitui_core::proposal::{Axes, SizeProposal};
use proptest::prelude::*;

proptest! {
    /// inner() never escapes the original rectangle.
    #[test]
    fn inner_stays_within_bounds(
        x in 0u16..500, y in 0u16..500,
        w in 0u16..500, h in 0u16..500,
        m in 0u16..64,
    ) {
        let rect = Rect::new(x, y, w, h);
        let inner = rect.inner(Sides::all(m));
        prop_assert!(inner.x >= rect.x);
        prop_assert!(inner.y >= rect.y);
        prop_assert!(inner.right() <= rect.right());
        prop_assert!(inner.bottom() <= rect.bottom());
    }

    /// Intersection is commutative and contained in both operands.
    #[test]
    fn intersection_commutes_and_is_contained(
        ax in 0u16..300, ay in 0u16..300, aw in 0u16..300, ah in 0u16..300,
        bx in 0u16..300, by in 0u16..300, bw in 0u16..300, bh in 0u16..300,
    ) {
        let a = Rect::new(ax, ay, aw, ah);
        let b = Rect::new(bx, by, bw, bh);
        let i = a.intersection(b);
        prop_assert_eq!(i, b.intersection(a));
        if !i.is_empty() {
            prop_assert!(i.x >= a.x && i.right() <= a.right());
            prop_assert!(i.x >= b.x && i.right() <= b.right());
            prop_assert!(i.y >= a.y && i.bottom() <= a.bottom());
            prop_assert!(i.y >= b.y && i.bottom() <= b.bottom());
        }
    }

    /// A clamped size always fits the proposal it was clamped to.
    #[test]
    fn clamp_produces_an_accommodated_size(
        w in 0u16..1000, h in 0u16..1000,
        bw in proptest::option::of(0u16..500),
        bh in proptest::option::of(0u16..500),
    ) {
        let proposal = SizeProposal { width: bw, height: bh };
        let clamped = proposal.clamp(Size::new(w, h));
        prop_assert!(proposal.accommodates(clamped, Axes::all()));
    }

    /// Growing a proposal never turns a fitting size into a misfit.
    #[test]
    fn accommodation_is_monotonic_in_the_bound(
        w in 0u16..1000, h in 0u16..1000,
        bound in 0u16..1000, extra in 0u16..1000,
    ) {
        let size = Size::new(w, h);
        let tight = SizeProposal::width_only(bound);
        let loose = SizeProposal::width_only(bound.saturating_add(extra));
        if tight.accommodates(size, Axes::HORIZONTAL) {
            prop_assert!(loose.accommodates(size, Axes::HORIZONTAL));
        }
    }

    /// An empty axis mask accommodates any size under any proposal.
    #[test]
    fn empty_mask_never_rejects(
        w in 0u16..=u16::MAX, h in 0u16..=u16::MAX,
        bw in proptest::option::of(0u16..100),
        bh in proptest::option::of(0u16..100),
    ) {
        let proposal = SizeProposal { width: bw, height: bh };
        prop_assert!(proposal.accommodates(Size::new(w, h), Axes::empty()));
    }
}
