#![forbid(unsafe_code)]

//! Console colors.

use std::fmt;

/// A cell color: one of the 16 console colors or a 24-bit RGB value.
///
/// The 16 named colors are ordered like the ANSI palette, so
/// [`Color::ansi_index`] is their position in that palette.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Color {
    Black,
    DarkRed,
    DarkGreen,
    DarkYellow,
    DarkBlue,
    DarkMagenta,
    DarkCyan,
    /// Light gray, the default document foreground.
    Gray,
    DarkGray,
    Red,
    Green,
    Yellow,
    Blue,
    Magenta,
    Cyan,
    White,
    /// True color.
    Rgb(u8, u8, u8),
}

impl Color {
    /// Foreground used when no element in the chain sets a color.
    pub const DEFAULT_FOREGROUND: Self = Self::Gray;

    /// The 16 named colors in palette order.
    pub const PALETTE: [Self; 16] = [
        Self::Black,
        Self::DarkRed,
        Self::DarkGreen,
        Self::DarkYellow,
        Self::DarkBlue,
        Self::DarkMagenta,
        Self::DarkCyan,
        Self::Gray,
        Self::DarkGray,
        Self::Red,
        Self::Green,
        Self::Yellow,
        Self::Blue,
        Self::Magenta,
        Self::Cyan,
        Self::White,
    ];

    /// Index into the 16-color ANSI palette, `None` for RGB colors.
    #[must_use]
    pub const fn ansi_index(self) -> Option<u8> {
        Some(match self {
            Self::Black => 0,
            Self::DarkRed => 1,
            Self::DarkGreen => 2,
            Self::DarkYellow => 3,
            Self::DarkBlue => 4,
            Self::DarkMagenta => 5,
            Self::DarkCyan => 6,
            Self::Gray => 7,
            Self::DarkGray => 8,
            Self::Red => 9,
            Self::Green => 10,
            Self::Yellow => 11,
            Self::Blue => 12,
            Self::Magenta => 13,
            Self::Cyan => 14,
            Self::White => 15,
            Self::Rgb(..) => return None,
        })
    }

    /// Named color for a palette index, if in range.
    #[must_use]
    pub fn from_ansi_index(index: u8) -> Option<Self> {
        Self::PALETTE.get(usize::from(index)).copied()
    }
}

impl Default for Color {
    fn default() -> Self {
        Self::DEFAULT_FOREGROUND
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Rgb(r, g, b) => write!(f, "#{r:02x}{g:02x}{b:02x}"),
            named => fmt::Debug::fmt(named, f),
        }
    }
}
