#![forbid(unsafe_code)]

//! Layout math for cell documents.
//!
//! This crate holds the tree-independent half of the layout protocol:
//!
//! - [`SizeBounds`] / [`MinMaxSize`] - declared and effective size bounds
//! - [`alignment_offset`] - placing a rendered box inside its client area
//! - [`GridLength`] - Auto / Star / Char track policies
//! - [`resolve_tracks`] - one-axis grid track resolution
//! - [`distribute_by_weight`] - largest-remainder integer apportionment
//! - [`ConfigError`] / [`LayoutError`] - failure modes of tree setup and measure
//!
//! The element tree that drives these lives in `cellfmt-elements`.

pub mod bounds;
pub mod error;
pub mod length;
pub mod rounding;
pub mod tracks;

pub use bounds::{
    HorizontalAlignment, MinMaxSize, SizeBounds, VerticalAlignment, alignment_offset,
};
pub use cellfmt_core::geometry::{INFINITE, Rect, Size, Thickness, Vector};
pub use error::{ConfigError, LayoutError};
pub use length::GridLength;
pub use rounding::{distribute_by_weight, round_largest_remainder};
pub use tracks::{resolve_tracks, total_extent, track_offsets};

/// Stacking direction of containers and rules.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Orientation {
    /// Left to right.
    Horizontal,
    /// Top to bottom.
    #[default]
    Vertical,
}
