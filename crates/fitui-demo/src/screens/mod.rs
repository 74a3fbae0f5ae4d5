#![forbid(unsafe_code)]

//! Screen modules for the demo.
//!
//! Each screen implements the [`Screen`] trait and can be navigated to via
//! number keys or Tab.

pub mod layout_that_fits;
pub mod view_that_fits;

use fitui_core::geometry::Rect;
use fitui_render::buffer::Buffer;

/// A demo screen: renders its body given the current constraint width.
pub trait Screen {
    /// Short title shown in the tab bar.
    fn title(&self) -> &'static str;

    /// One-line description shown under the tab bar.
    fn blurb(&self) -> &'static str;

    /// Render the screen body. `width` is the user-controlled constraint
    /// width in columns; the screen clamps it to what `area` can hold.
    fn render(&self, width: u16, area: Rect, buf: &mut Buffer);
}

/// All screens in tab order.
pub fn all() -> Vec<Box<dyn Screen>> {
    vec![
        Box::new(layout_that_fits::LayoutThatFitsScreen::new()),
        Box::new(view_that_fits::ViewThatFitsScreen::new()),
    ]
}
