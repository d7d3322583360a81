#![forbid(unsafe_code)]

//! Text wrapping with Unicode correctness.
//!
//! Wrapping respects grapheme cluster boundaries and cell widths (CJK
//! characters are 2 cells wide). Word wrapping breaks at whitespace only and
//! falls back to grapheme breaks for words longer than the line.
//!
//! # Example
//! ```
//! use cellfmt_text::wrap::{wrap_text, TextWrapping};
//!
//! let lines = wrap_text("Hello world foo bar", 10, TextWrapping::WordWrap);
//! assert_eq!(lines, vec!["Hello", "world foo", "bar"]);
//!
//! let lines = wrap_text("Supercalifragilistic", 10, TextWrapping::WordWrap);
//! assert_eq!(lines, vec!["Supercalif", "ragilistic"]);
//! ```

use unicode_segmentation::UnicodeSegmentation;
use unicode_width::UnicodeWidthStr;

/// Width value meaning "no limit".
pub const UNBOUNDED: u32 = u32::MAX;

/// Text wrapping mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum TextWrapping {
    /// Only explicit newlines break lines.
    NoWrap,
    /// Break at any grapheme boundary.
    CharWrap,
    /// Break at whitespace, splitting words that cannot fit on a line.
    #[default]
    WordWrap,
}

/// Options for text wrapping.
#[derive(Debug, Clone)]
pub struct WrapOptions {
    /// Maximum width in cells; [`UNBOUNDED`] disables wrapping.
    pub width: u32,
    /// Wrapping mode.
    pub mode: TextWrapping,
    /// Trim trailing whitespace from wrapped lines.
    pub trim_trailing: bool,
}

impl WrapOptions {
    /// Create word-wrap options with the given width.
    #[must_use]
    pub fn new(width: u32) -> Self {
        Self {
            width,
            mode: TextWrapping::WordWrap,
            trim_trailing: true,
        }
    }

    /// Set the wrap mode.
    #[must_use]
    pub fn mode(mut self, mode: TextWrapping) -> Self {
        self.mode = mode;
        self
    }

    /// Set whether to trim trailing whitespace.
    #[must_use]
    pub fn trim_trailing(mut self, trim: bool) -> Self {
        self.trim_trailing = trim;
        self
    }
}

/// Wrap text to the specified width.
#[must_use]
pub fn wrap_text(text: &str, width: u32, mode: TextWrapping) -> Vec<String> {
    wrap_with_options(text, &WrapOptions::new(width).mode(mode))
}

/// Wrap text with full options.
///
/// Always returns at least one line. A width of zero cannot hold any glyph,
/// so lines are only broken at explicit newlines.
#[must_use]
pub fn wrap_with_options(text: &str, options: &WrapOptions) -> Vec<String> {
    let unbounded = options.width == UNBOUNDED || options.width == 0;
    let mut lines = Vec::new();

    for paragraph in text.split('\n') {
        let paragraph = paragraph.strip_suffix('\r').unwrap_or(paragraph);
        if unbounded || options.mode == TextWrapping::NoWrap {
            lines.push(finalize_line(paragraph, options));
            continue;
        }
        match options.mode {
            TextWrapping::CharWrap => wrap_graphemes(paragraph, options, &mut lines),
            _ => wrap_words(paragraph, options, &mut lines),
        }
    }

    if lines.is_empty() {
        lines.push(String::new());
    }
    lines
}

/// Display width of the widest line.
#[must_use]
pub fn max_line_width(lines: &[String]) -> u32 {
    lines
        .iter()
        .map(|l| u32::try_from(l.width()).unwrap_or(u32::MAX - 1))
        .max()
        .unwrap_or(0)
}

/// Wrap one paragraph at grapheme boundaries.
fn wrap_graphemes(text: &str, options: &WrapOptions, lines: &mut Vec<String>) {
    let width = options.width as usize;
    let mut current = String::new();
    let mut current_width = 0usize;

    for grapheme in text.graphemes(true) {
        let w = grapheme.width();
        if current_width + w > width && !current.is_empty() {
            lines.push(finalize_line(&current, options));
            current.clear();
            current_width = 0;
        }
        current.push_str(grapheme);
        current_width += w;
    }
    lines.push(finalize_line(&current, options));
}

/// Wrap one paragraph at whitespace boundaries.
fn wrap_words(text: &str, options: &WrapOptions, lines: &mut Vec<String>) {
    let width = options.width as usize;
    let mut current = String::new();
    let mut current_width = 0usize;

    for word in split_words(text) {
        let word_width = word.width();

        if current_width + word_width <= width {
            current.push_str(word);
            current_width += word_width;
            continue;
        }

        // Whitespace at a break is dropped rather than carried to the next line.
        if word.trim().is_empty() {
            lines.push(finalize_line(&current, options));
            current.clear();
            current_width = 0;
            continue;
        }

        if !current.is_empty() {
            lines.push(finalize_line(&current, options));
            current.clear();
            current_width = 0;
        }

        if word_width > width {
            wrap_long_word(word, width, options, lines, &mut current, &mut current_width);
        } else {
            current.push_str(word);
            current_width = word_width;
        }
    }

    if !current.is_empty() || lines.is_empty() {
        lines.push(finalize_line(&current, options));
    }
}

/// Break a word that exceeds the line width at grapheme boundaries.
fn wrap_long_word(
    word: &str,
    width: usize,
    options: &WrapOptions,
    lines: &mut Vec<String>,
    current: &mut String,
    current_width: &mut usize,
) {
    for grapheme in word.graphemes(true) {
        let w = grapheme.width();
        if *current_width + w > width && !current.is_empty() {
            lines.push(finalize_line(current, options));
            current.clear();
            *current_width = 0;
        }
        current.push_str(grapheme);
        *current_width += w;
    }
}

/// Split text into alternating runs of whitespace and non-whitespace.
fn split_words(text: &str) -> Vec<&str> {
    let mut words = Vec::new();
    let mut start = 0usize;
    let mut in_whitespace: Option<bool> = None;

    for (idx, grapheme) in text.grapheme_indices(true) {
        let is_ws = grapheme.chars().all(char::is_whitespace);
        if in_whitespace.is_some_and(|prev| prev != is_ws) {
            words.push(&text[start..idx]);
            start = idx;
        }
        in_whitespace = Some(is_ws);
    }
    if start < text.len() {
        words.push(&text[start..]);
    }
    words
}

/// Finalize a line (apply trimming).
fn finalize_line(line: &str, options: &WrapOptions) -> String {
    if options.trim_trailing {
        line.trim_end().to_string()
    } else {
        line.to_string()
    }
}
