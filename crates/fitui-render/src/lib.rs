#![forbid(unsafe_code)]

//! Rendering: styled cells, a buffer grid, and a terminal presenter.

pub mod buffer;
pub mod cell;
#[cfg(not(target_arch = "wasm32"))]
pub mod presenter;
pub mod style;

pub use buffer::Buffer;
pub use cell::{Cell, Rgb, StyleFlags};
#[cfg(not(target_arch = "wasm32"))]
pub use presenter::Presenter;
pub use style::Style;
