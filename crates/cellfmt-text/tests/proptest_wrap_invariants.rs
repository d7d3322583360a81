//! Property tests for wrapping.
//!
//! 1. Wrapped lines never exceed the width (for widths that fit any glyph).
//! 2. Wrapping never drops non-whitespace characters.
//! 3. There is always at least one line.

use cellfmt_text::{TextWrapping, display_width, wrap_text};
use proptest::prelude::*;

fn text() -> impl Strategy<Value = String> {
    "[a-z ]{0,60}|[a-z日本 ]{0,30}"
}

fn mode() -> impl Strategy<Value = TextWrapping> {
    prop_oneof![Just(TextWrapping::WordWrap), Just(TextWrapping::CharWrap)]
}

proptest! {
    #[test]
    fn lines_fit_width(text in text(), width in 2u32..20, mode in mode()) {
        for line in wrap_text(&text, width, mode) {
            prop_assert!(display_width(&line) <= width, "{:?} wider than {}", line, width);
        }
    }

    #[test]
    fn glyphs_are_preserved(text in text(), width in 2u32..20, mode in mode()) {
        let joined: String = wrap_text(&text, width, mode).concat();
        let strip = |s: &str| s.chars().filter(|c| !c.is_whitespace()).collect::<String>();
        prop_assert_eq!(strip(&joined), strip(&text));
    }

    #[test]
    fn never_empty(text in text(), width in 0u32..20, mode in mode()) {
        prop_assert!(!wrap_text(&text, width, mode).is_empty());
    }
}
