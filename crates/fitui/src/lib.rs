#![forbid(unsafe_code)]

//! FitUI public facade crate.
//!
//! Re-exports the common types from the internal crates and offers a
//! lightweight prelude for day-to-day usage.

// --- Core re-exports -------------------------------------------------------

pub use fitui_core::event::{Event, KeyCode, KeyEvent, Modifiers};
pub use fitui_core::geometry::{Rect, Sides, Size};
pub use fitui_core::proposal::{Axes, SizeProposal};
#[cfg(not(target_arch = "wasm32"))]
pub use fitui_core::session::{SessionOptions, TerminalSession};

// --- Layout re-exports -----------------------------------------------------

pub use fitui_layout::{
    Arrangement, Children, Direction, FitError, LayoutThatFits, Selection, Stack, select_fitting,
};

// --- Render re-exports -----------------------------------------------------

pub use fitui_render::buffer::Buffer;
pub use fitui_render::cell::{Cell, Rgb, StyleFlags};
#[cfg(not(target_arch = "wasm32"))]
pub use fitui_render::presenter::Presenter;
pub use fitui_render::style::Style;

// --- Widget re-exports -----------------------------------------------------

pub use fitui_widgets::{
    Block, BorderType, Borders, FitContainer, FitWidget, Label, Measurable, ViewThatFits, Widget,
};

// --- Prelude --------------------------------------------------------------

pub mod prelude {
    pub use crate::{
        Arrangement, Axes, Buffer, Event, FitContainer, KeyCode, KeyEvent, LayoutThatFits,
        Measurable, Rect, Selection, Size, SizeProposal, Stack, Style, ViewThatFits, Widget,
        select_fitting,
    };

    pub use crate::{core, layout, render, widgets};
}

pub use fitui_core as core;
pub use fitui_layout as layout;
pub use fitui_render as render;
pub use fitui_widgets as widgets;
