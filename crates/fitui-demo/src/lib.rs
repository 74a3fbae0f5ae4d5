#![forbid(unsafe_code)]

//! Interactive demo of fit-driven layout selection.
//!
//! Two screens: one swaps candidate arrangements over a single child set,
//! the other swaps whole alternative subtrees. A user-controlled constraint
//! box shows the selection changing as space narrows.

pub mod app;
pub mod cli;
pub mod screens;
pub mod theme;
