#![forbid(unsafe_code)]

//! Property-based invariants for buffer writes.

use fitui_core::geometry::Rect;
use fitui_render::buffer::Buffer;
use fitui_render::cell::Cell;
use fitui_render::style::Style;
use proptest::prelude::*;

proptest! {
    /// Text never advances past its column budget.
    #[test]
    fn draw_text_respects_the_budget(
        x in 0u16..40, y in 0u16..10,
        text in "[ -~]{0,60}",
        budget in 0u16..50,
    ) {
        let mut buf = Buffer::new(80, 12);
        let advanced = buf.draw_text(x, y, &text, budget, Style::new());
        prop_assert!(advanced <= budget);
    }

    /// Cells outside the drawn row are untouched.
    #[test]
    fn draw_text_stays_on_its_row(
        x in 0u16..40, y in 0u16..10,
        text in "[ -~]{0,60}",
    ) {
        let mut buf = Buffer::new(80, 12);
        buf.draw_text(x, y, &text, 80, Style::new());
        for (cx, cy, cell) in buf.iter() {
            if cy != y {
                prop_assert!(cell.is_blank(), "ink at ({cx}, {cy})");
            }
        }
    }

    /// fill() never writes outside the intersection of area and grid.
    #[test]
    fn fill_is_clipped_to_the_grid(
        ax in 0u16..100, ay in 0u16..100,
        aw in 0u16..100, ah in 0u16..100,
    ) {
        let mut buf = Buffer::new(30, 10);
        let area = Rect::new(ax, ay, aw, ah);
        buf.fill(area, Cell::from_char('#'));
        for (x, y, cell) in buf.iter() {
            let inside = area.contains(x, y);
            prop_assert_eq!(!cell.is_blank(), inside, "cell ({}, {})", x, y);
        }
    }
}
