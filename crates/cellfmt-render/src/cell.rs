#![forbid(unsafe_code)]

//! A single character cell.

use crate::color::Color;
use crate::drawing::LineChar;

/// One character cell of a [`RenderBuffer`](crate::buffer::RenderBuffer).
///
/// The second cell of a wide glyph holds [`Cell::CONTINUATION`] and is
/// skipped by exporters.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Cell {
    pub glyph: char,
    pub fg: Color,
    pub bg: Option<Color>,
    /// Ruled-line arms passing through this cell.
    pub lines: LineChar,
}

impl Cell {
    /// Placeholder glyph for the trailing half of a wide character.
    pub const CONTINUATION: char = '\0';

    /// A blank cell: space, default foreground, no background.
    pub const BLANK: Self = Self {
        glyph: ' ',
        fg: Color::DEFAULT_FOREGROUND,
        bg: None,
        lines: LineChar::empty(),
    };

    /// Cell holding `glyph` in the default colors.
    #[inline]
    #[must_use]
    pub const fn from_char(glyph: char) -> Self {
        Self {
            glyph,
            ..Self::BLANK
        }
    }

    /// True for the trailing half of a wide character.
    #[inline]
    #[must_use]
    pub const fn is_continuation(&self) -> bool {
        self.glyph == Self::CONTINUATION
    }
}

impl Default for Cell {
    fn default() -> Self {
        Self::BLANK
    }
}
