#![forbid(unsafe_code)]

//! Core: geometry primitives with infinite-dimension support and the logging shim.

pub mod geometry;
pub mod logging;

pub use geometry::{INFINITE, Rect, Size, Thickness, Vector, min_max};

#[cfg(feature = "tracing")]
pub use tracing::{debug, debug_span, error, trace, warn};
