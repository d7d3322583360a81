#![forbid(unsafe_code)]

//! Text measurement and wrapping for cell layouts.
//!
//! # Example
//! ```
//! use cellfmt_text::{TextAlignment, align_offset, display_width};
//!
//! assert_eq!(display_width("abc"), 3);
//! assert_eq!(display_width("日本"), 4);
//! assert_eq!(align_offset(10, 4, TextAlignment::Center), 3);
//! ```

pub mod wrap;

pub use wrap::{
    TextWrapping, UNBOUNDED, WrapOptions, max_line_width, wrap_text, wrap_with_options,
};

use unicode_width::UnicodeWidthStr;

/// Horizontal alignment of lines inside a text run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum TextAlignment {
    #[default]
    Left,
    Center,
    Right,
}

/// Number of terminal cells `text` occupies.
#[inline]
#[must_use]
pub fn display_width(text: &str) -> u32 {
    u32::try_from(text.width()).unwrap_or(UNBOUNDED - 1)
}

/// Leading cells before a line of `line_width` cells in a box `width` wide.
///
/// Lines wider than the box start at 0.
#[must_use]
pub fn align_offset(width: u32, line_width: u32, align: TextAlignment) -> u32 {
    let slack = width.saturating_sub(line_width);
    match align {
        TextAlignment::Left => 0,
        TextAlignment::Center => slack / 2,
        TextAlignment::Right => slack,
    }
}
