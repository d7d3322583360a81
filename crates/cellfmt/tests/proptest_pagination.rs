//! Property tests for page slicing.
//!
//! 1. Pages tile the arranged document: consecutive, gap-free, full width.
//! 2. Every page but the last is exactly one area tall.
//! 3. Concatenated page rows equal a single unpaginated render of the
//!    whole document.

use cellfmt::prelude::*;
use cellfmt::INFINITE;
use proptest::prelude::*;

fn document(rows: &[String]) -> Document {
    let mut div = Div::new();
    for row in rows {
        div.push(Span::new(row.clone()).text_wrap(TextWrapping::NoWrap));
    }
    Document::new(div)
}

proptest! {
    #[test]
    fn pages_tile_the_document(
        rows in prop::collection::vec("[a-z]{0,6}", 1..20),
        width in 1u32..10,
        page in 1u32..8,
    ) {
        let mut doc = document(&rows);
        let renderer = Renderer::with_options(
            RenderOptions::new().pagination(Pagination::Paginate),
        );
        let pages = renderer
            .render_pages(&mut doc, Rect::new(0, 0, width, page))
            .unwrap();
        prop_assert!(!pages.is_empty());

        let mut y = 0i32;
        for (i, buffer) in pages.iter().enumerate() {
            let area = buffer.area();
            prop_assert_eq!(area.y, y);
            prop_assert_eq!(area.width, width);
            if i + 1 < pages.len() {
                prop_assert_eq!(area.height, page);
            } else {
                prop_assert!(area.height >= 1 && area.height <= page);
            }
            y += area.height as i32;
        }
        prop_assert_eq!(y as u32, (rows.len() as u32).max(page));
    }

    #[test]
    fn pages_match_a_single_tall_render(
        rows in prop::collection::vec("[a-z]{1,6}", 1..20),
        page in 1u32..8,
    ) {
        let width = 6;
        let mut paged = document(&rows);
        let collector = {
            let mut collector = PageCollector::new();
            Renderer::with_options(RenderOptions::new().pagination(Pagination::Paginate))
                .render(&mut paged, &mut collector, Rect::new(0, 0, width, page))
                .unwrap();
            collector
        };

        let mut whole = document(&rows);
        let tall = Renderer::new()
            .render_to_buffer(&mut whole, Rect::new(0, 0, width, INFINITE))
            .unwrap();
        let mut expected = tall.to_lines();
        let blank = " ".repeat(width as usize);
        expected.resize(expected.len().max(page as usize), blank);
        prop_assert_eq!(collector.lines(), expected);
    }
}
