#![forbid(unsafe_code)]

//! ANSI escape sequence generation helpers.
//!
//! Pure byte-generation functions for the SGR sequences needed to export a
//! colored [`RenderBuffer`](crate::buffer::RenderBuffer). No state tracking;
//! callers decide when colors change.
//!
//! | Sequence | Description |
//! |----------|-------------|
//! | `ESC [ 0 m` | Reset |
//! | `ESC [ 30-37 / 90-97 m` | 16-color foreground |
//! | `ESC [ 40-47 / 100-107 m` | 16-color background |
//! | `ESC [ 38;2;r;g;b m` | True color foreground |
//! | `ESC [ 48;2;r;g;b m` | True color background |
//! | `ESC [ 49 m` | Default background |

use std::io::{self, Write};

use crate::color::Color;

/// SGR reset: `CSI 0 m`
pub const SGR_RESET: &[u8] = b"\x1b[0m";

/// Write SGR reset sequence.
#[inline]
pub fn sgr_reset<W: Write>(w: &mut W) -> io::Result<()> {
    w.write_all(SGR_RESET)
}

/// Write SGR sequence for true color foreground: `CSI 38;2;r;g;b m`
pub fn sgr_fg_rgb<W: Write>(w: &mut W, r: u8, g: u8, b: u8) -> io::Result<()> {
    write!(w, "\x1b[38;2;{r};{g};{b}m")
}

/// Write SGR sequence for true color background: `CSI 48;2;r;g;b m`
pub fn sgr_bg_rgb<W: Write>(w: &mut W, r: u8, g: u8, b: u8) -> io::Result<()> {
    write!(w, "\x1b[48;2;{r};{g};{b}m")
}

/// Write SGR sequence for 16-color foreground.
///
/// Uses codes 30-37 for normal colors, 90-97 for bright colors.
pub fn sgr_fg_16<W: Write>(w: &mut W, index: u8) -> io::Result<()> {
    let code = if index < 8 {
        30 + index
    } else {
        90 + (index & 7)
    };
    write!(w, "\x1b[{code}m")
}

/// Write SGR sequence for 16-color background.
///
/// Uses codes 40-47 for normal colors, 100-107 for bright colors.
pub fn sgr_bg_16<W: Write>(w: &mut W, index: u8) -> io::Result<()> {
    let code = if index < 8 {
        40 + index
    } else {
        100 + (index & 7)
    };
    write!(w, "\x1b[{code}m")
}

/// Write SGR sequence for default background: `CSI 49 m`
pub fn sgr_bg_default<W: Write>(w: &mut W) -> io::Result<()> {
    w.write_all(b"\x1b[49m")
}

/// Write the foreground sequence for a [`Color`].
pub fn sgr_fg<W: Write>(w: &mut W, color: Color) -> io::Result<()> {
    match color {
        Color::Rgb(r, g, b) => sgr_fg_rgb(w, r, g, b),
        named => sgr_fg_16(w, named.ansi_index().unwrap_or(7)),
    }
}

/// Write the background sequence for an optional [`Color`].
pub fn sgr_bg<W: Write>(w: &mut W, color: Option<Color>) -> io::Result<()> {
    match color {
        None => sgr_bg_default(w),
        Some(Color::Rgb(r, g, b)) => sgr_bg_rgb(w, r, g, b),
        Some(named) => sgr_bg_16(w, named.ansi_index().unwrap_or(0)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn to_string<F: FnOnce(&mut Vec<u8>) -> io::Result<()>>(f: F) -> String {
        let mut buf = Vec::new();
        f(&mut buf).unwrap();
        String::from_utf8(buf).unwrap()
    }

    #[test]
    fn sixteen_color_codes() {
        assert_eq!(to_string(|w| sgr_fg_16(w, 1)), "\x1b[31m");
        assert_eq!(to_string(|w| sgr_fg_16(w, 9)), "\x1b[91m");
        assert_eq!(to_string(|w| sgr_bg_16(w, 4)), "\x1b[44m");
        assert_eq!(to_string(|w| sgr_bg_16(w, 15)), "\x1b[107m");
    }

    #[test]
    fn color_dispatch() {
        assert_eq!(to_string(|w| sgr_fg(w, Color::Gray)), "\x1b[37m");
        assert_eq!(to_string(|w| sgr_fg(w, Color::Rgb(1, 2, 3))), "\x1b[38;2;1;2;3m");
        assert_eq!(to_string(|w| sgr_bg(w, None)), "\x1b[49m");
        assert_eq!(to_string(|w| sgr_bg(w, Some(Color::DarkGray))), "\x1b[100m");
    }

    #[test]
    fn reset_bytes() {
        assert_eq!(to_string(sgr_reset), "\x1b[0m");
    }
}
