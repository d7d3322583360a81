#![forbid(unsafe_code)]

//! Cell surface for rendered documents.
//!
//! - [`RenderBuffer`] - the cell grid, with a scissor stack
//! - [`Cell`] / [`Color`] - what each position holds
//! - [`LineWidth`] / [`LineChar`] - ruled lines and their junction glyphs
//! - [`ansi`] - SGR sequences for colored export

pub mod ansi;
pub mod buffer;
pub mod cell;
pub mod color;
pub mod drawing;

pub use buffer::RenderBuffer;
pub use cell::Cell;
pub use color::Color;
pub use drawing::{LineChar, LineWidth};
