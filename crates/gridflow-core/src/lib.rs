#![forbid(unsafe_code)]

//! Core: geometry primitives and the logging facade shared by gridflow crates.

pub mod geometry;
pub mod logging;

pub use geometry::{Point, Rect, Sides, Size};

// Re-export tracing macros at crate root for ergonomic use.
#[cfg(feature = "tracing")]
pub use logging::{debug, debug_span, trace};
