#![forbid(unsafe_code)]

//! Geometric primitives.

/// A measured extent in terminal cells.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Size {
    /// Width in columns.
    pub width: u16,
    /// Height in rows.
    pub height: u16,
}

impl Size {
    /// The zero size.
    pub const ZERO: Self = Self {
        width: 0,
        height: 0,
    };

    /// Create a new size.
    #[inline]
    pub const fn new(width: u16, height: u16) -> Self {
        Self { width, height }
    }

    /// Component-wise maximum of two sizes.
    #[inline]
    pub const fn max(self, other: Self) -> Self {
        Self {
            width: if self.width > other.width {
                self.width
            } else {
                other.width
            },
            height: if self.height > other.height {
                self.height
            } else {
                other.height
            },
        }
    }
}

/// A rectangle in terminal coordinates (0-indexed, origin at top-left).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Rect {
    /// Left edge (inclusive).
    pub x: u16,
    /// Top edge (inclusive).
    pub y: u16,
    /// Width in columns.
    pub width: u16,
    /// Height in rows.
    pub height: u16,
}

impl Rect {
    /// Create a new rectangle.
    #[inline]
    pub const fn new(x: u16, y: u16, width: u16, height: u16) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    /// Create a rectangle at the origin with the given size.
    #[inline]
    pub const fn from_size(size: Size) -> Self {
        Self::new(0, 0, size.width, size.height)
    }

    /// The rectangle's extent as a [`Size`].
    #[inline]
    pub const fn size(&self) -> Size {
        Size::new(self.width, self.height)
    }

    /// Right edge (exclusive).
    #[inline]
    pub const fn right(&self) -> u16 {
        self.x.saturating_add(self.width)
    }

    /// Bottom edge (exclusive).
    #[inline]
    pub const fn bottom(&self) -> u16 {
        self.y.saturating_add(self.height)
    }

    /// Check if the rectangle has zero area.
    #[inline]
    pub const fn is_empty(&self) -> bool {
        self.width == 0 || self.height == 0
    }

    /// Check if a point is inside the rectangle.
    #[inline]
    pub const fn contains(&self, x: u16, y: u16) -> bool {
        x >= self.x && x < self.right() && y >= self.y && y < self.bottom()
    }

    /// Shrink the rectangle by a margin on each side.
    pub fn inner(&self, margin: Sides) -> Rect {
        Rect {
            x: self.x.saturating_add(margin.left),
            y: self.y.saturating_add(margin.top),
            width: self
                .width
                .saturating_sub(margin.left)
                .saturating_sub(margin.right),
            height: self
                .height
                .saturating_sub(margin.top)
                .saturating_sub(margin.bottom),
        }
    }

    /// Intersection with another rectangle; empty if they do not overlap.
    pub fn intersection(&self, other: Rect) -> Rect {
        let x = self.x.max(other.x);
        let y = self.y.max(other.y);
        let right = self.right().min(other.right());
        let bottom = self.bottom().min(other.bottom());

        if x < right && y < bottom {
            Rect::new(x, y, right - x, bottom - y)
        } else {
            Rect::default()
        }
    }

    /// A rectangle of the given size centered horizontally within this one.
    ///
    /// Width is clamped to this rectangle's width; vertical position and
    /// height are preserved.
    pub fn centered_horizontally(&self, width: u16) -> Rect {
        let width = width.min(self.width);
        let offset = (self.width - width) / 2;
        Rect::new(self.x.saturating_add(offset), self.y, width, self.height)
    }
}

/// Per-side margins or padding.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Sides {
    pub top: u16,
    pub right: u16,
    pub bottom: u16,
    pub left: u16,
}

impl Sides {
    /// Equal value on all sides.
    pub const fn all(val: u16) -> Self {
        Self {
            top: val,
            right: val,
            bottom: val,
            left: val,
        }
    }

    /// Left and right only.
    pub const fn horizontal(val: u16) -> Self {
        Self {
            top: 0,
            right: val,
            bottom: 0,
            left: val,
        }
    }

    /// Top and bottom only.
    pub const fn vertical(val: u16) -> Self {
        Self {
            top: val,
            right: 0,
            bottom: val,
            left: 0,
        }
    }

    /// Sum of left and right.
    #[inline]
    pub const fn horizontal_sum(&self) -> u16 {
        self.left.saturating_add(self.right)
    }

    /// Sum of top and bottom.
    #[inline]
    pub const fn vertical_sum(&self) -> u16 {
        self.top.saturating_add(self.bottom)
    }
}

#[cfg(test)]
mod tests {
    use super::{Rect, Sides, Size};

    #[test]
    fn size_max_is_componentwise() {
        let a = Size::new(10, 2);
        let b = Size::new(4, 7);
        assert_eq!(a.max(b), Size::new(10, 7));
        assert_eq!(b.max(a), Size::new(10, 7));
    }

    #[test]
    fn rect_from_size_sits_at_origin() {
        let r = Rect::from_size(Size::new(80, 24));
        assert_eq!(r, Rect::new(0, 0, 80, 24));
        assert_eq!(r.size(), Size::new(80, 24));
    }

    #[test]
    fn rect_edges_saturate() {
        let r = Rect::new(u16::MAX - 2, u16::MAX - 2, 100, 100);
        assert_eq!(r.right(), u16::MAX);
        assert_eq!(r.bottom(), u16::MAX);
    }

    #[test]
    fn rect_contains_is_half_open() {
        let r = Rect::new(2, 3, 4, 5);
        assert!(r.contains(2, 3));
        assert!(r.contains(5, 7));
        assert!(!r.contains(6, 3));
        assert!(!r.contains(2, 8));
    }

    #[test]
    fn empty_rect_contains_nothing() {
        assert!(!Rect::new(5, 5, 0, 0).contains(5, 5));
    }

    #[test]
    fn inner_clamps_oversized_margin() {
        let inner = Rect::new(0, 0, 10, 10).inner(Sides::all(20));
        assert!(inner.is_empty());
    }

    #[test]
    fn inner_applies_asymmetric_margin() {
        let inner = Rect::new(0, 0, 20, 20).inner(Sides {
            top: 2,
            right: 3,
            bottom: 4,
            left: 5,
        });
        assert_eq!(inner, Rect::new(5, 2, 12, 14));
    }

    #[test]
    fn intersection_of_disjoint_rects_is_empty() {
        let a = Rect::new(0, 0, 2, 2);
        let b = Rect::new(5, 5, 2, 2);
        assert!(a.intersection(b).is_empty());
    }

    #[test]
    fn intersection_of_overlapping_rects() {
        let a = Rect::new(0, 0, 5, 5);
        let b = Rect::new(3, 3, 5, 5);
        assert_eq!(a.intersection(b), Rect::new(3, 3, 2, 2));
    }

    #[test]
    fn centered_horizontally_splits_slack_evenly() {
        let outer = Rect::new(0, 2, 100, 10);
        let c = outer.centered_horizontally(40);
        assert_eq!(c, Rect::new(30, 2, 40, 10));
    }

    #[test]
    fn centered_horizontally_clamps_to_outer_width() {
        let outer = Rect::new(5, 0, 20, 4);
        let c = outer.centered_horizontally(50);
        assert_eq!(c, Rect::new(5, 0, 20, 4));
    }

    #[test]
    fn sides_sums() {
        let s = Sides {
            top: 1,
            right: 2,
            bottom: 3,
            left: 4,
        };
        assert_eq!(s.horizontal_sum(), 6);
        assert_eq!(s.vertical_sum(), 4);
        assert_eq!(Sides::horizontal(2).horizontal_sum(), 4);
        assert_eq!(Sides::vertical(3).vertical_sum(), 6);
    }
}
