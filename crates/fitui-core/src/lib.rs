#![forbid(unsafe_code)]

//! Core: geometry, space proposals, events, and terminal lifecycle.

pub mod event;
pub mod geometry;
pub mod logging;
pub mod proposal;
#[cfg(not(target_arch = "wasm32"))]
pub mod session;

// Re-export tracing macros at crate root for ergonomic use.
#[cfg(feature = "tracing")]
pub use logging::{debug, error, info, trace, warn};
