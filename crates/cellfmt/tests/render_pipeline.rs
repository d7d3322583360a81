//! Full passes from document to target.

use std::io;

use cellfmt::prelude::*;
use cellfmt::{ConfigError, LayoutError, RenderBuffer, RenderContext, RenderError};

fn text_of(out: TextTarget<Vec<u8>>) -> String {
    String::from_utf8(out.into_inner()).expect("utf-8 output")
}

fn paginate() -> Renderer {
    Renderer::with_options(RenderOptions::new().pagination(Pagination::Paginate))
}

#[derive(Debug, Clone)]
struct Unbounded;

impl CustomLayout for Unbounded {
    fn measure(&mut self, available: Size) -> Size {
        available
    }

    fn clone_box(&self) -> Box<dyn CustomLayout> {
        Box::new(self.clone())
    }
}

#[derive(Debug, Clone)]
struct Checker;

impl CustomLayout for Checker {
    fn measure(&mut self, available: Size) -> Size {
        Size::new(4.min(available.width), 2.min(available.height))
    }

    fn render(&self, buffer: &mut RenderBuffer, ctx: &RenderContext, size: Size) {
        for y in 0..size.height {
            let row = if y % 2 == 0 { "#.#." } else { ".#.#" };
            let take = size.width as usize;
            buffer.draw_text(ctx.origin.x, ctx.origin.y + y as i32, &row[..take], ctx.color);
        }
    }

    fn clone_box(&self) -> Box<dyn CustomLayout> {
        Box::new(self.clone())
    }
}

/// Counts pages and fails on demand.
#[derive(Default)]
struct Flaky {
    pages: usize,
    fail_at: Option<usize>,
    finished: bool,
}

impl RenderTarget for Flaky {
    fn render(&mut self, _page: &RenderBuffer) -> io::Result<()> {
        if self.fail_at == Some(self.pages) {
            return Err(io::Error::other("target full"));
        }
        self.pages += 1;
        Ok(())
    }

    fn finish(&mut self) -> io::Result<()> {
        self.finished = true;
        Ok(())
    }
}

#[test]
fn table_with_rules_renders_to_text() {
    let grid = Grid::new()
        .with_columns(tracks![GridLength::Auto, 1, GridLength::Star(1.0)])
        .unwrap()
        .child(Span::new("name"))
        .child(Line::vertical())
        .child(Span::new("cellfmt"))
        .child(Span::new("kind"))
        .child(Line::vertical())
        .child(Span::new("layout"));
    let mut doc = Document::new(grid);
    let mut out = TextTarget::plain(Vec::new());
    let pages = Renderer::new()
        .render(&mut doc, &mut out, Rect::new(0, 0, 14, 2))
        .unwrap();
    assert_eq!(pages, 1);
    assert_eq!(text_of(out), "name│cellfmt\nkind│layout\n");
}

#[test]
fn wrapped_text_paginates_across_pages() {
    let span = Span::new("one two three four five").text_wrap(TextWrapping::WordWrap);
    let mut doc = Document::new(span);
    let mut pages = PageCollector::new();
    let count = paginate()
        .render(&mut doc, &mut pages, Rect::new(0, 0, 5, 2))
        .unwrap();
    assert_eq!(count, 3);
    assert!(pages.is_finished());
    assert_eq!(pages.lines(), vec!["one  ", "two  ", "three", "four ", "five "]);
    assert_eq!(pages.pages()[2].height(), 1);
}

#[test]
fn layout_failure_reaches_no_target() {
    let mut doc = Document::new(Div::new().child(Custom::new(Unbounded)));
    let mut target = Flaky::default();
    let err = paginate()
        .render(&mut doc, &mut target, Rect::new(0, 0, 10, 5))
        .unwrap_err();
    assert!(matches!(
        err,
        RenderError::Layout(LayoutError::InfiniteDesiredSize {
            element: "Custom",
            ..
        })
    ));
    assert_eq!(target.pages, 0);
    assert!(!target.finished);
}

#[test]
fn invalid_columns_are_rejected_before_layout() {
    let mut grid = Grid::new();
    grid.add_column(Column::new(GridLength::Star(1.0))).unwrap();
    let mut doc = Document::new(grid);
    if let Element::Grid(grid) = doc.root_mut() {
        let rejected = grid.add_column(Column::new(GridLength::Star(-1.0))).map(|_| ());
        assert_eq!(rejected, Err(ConfigError::InvalidStarWeight { weight: -1.0 }));
        assert_eq!(grid.columns().len(), 1);
    }
    let mut target = Flaky::default();
    assert_eq!(
        Renderer::new()
            .render(&mut doc, &mut target, Rect::new(0, 0, 4, 1))
            .unwrap(),
        1
    );
}

#[test]
fn target_errors_stop_the_pass() {
    let mut doc = Document::new(Span::new("a b c d e f").width(1));
    let mut target = Flaky {
        fail_at: Some(1),
        ..Flaky::default()
    };
    let err = paginate()
        .render(&mut doc, &mut target, Rect::new(0, 0, 1, 2))
        .unwrap_err();
    assert!(matches!(err, RenderError::Io(_)));
    assert_eq!(target.pages, 1);
    assert!(!target.finished);
}

#[test]
fn custom_hooks_paint_inside_margins() {
    let mut doc = Document::new(Custom::new(Checker).margin(1));
    let buffer = Renderer::new()
        .render_to_buffer(&mut doc, Rect::new(0, 0, 6, 4))
        .unwrap();
    assert_eq!(buffer.to_lines(), vec!["      ", " #.#. ", " .#.# ", "      "]);
}

#[test]
fn document_colors_reach_the_ansi_stream() {
    let mut doc = Document::new(Span::new("hi")).color(Color::Green);
    let mut out = TextTarget::ansi(Vec::new());
    Renderer::new()
        .render(&mut doc, &mut out, Rect::new(0, 0, 2, 1))
        .unwrap();
    assert_eq!(text_of(out), "\x1b[92mhi\x1b[0m\n");
}

#[test]
fn rerendering_a_mutated_document_relayouts() {
    let mut doc = Document::new(Div::new().child(Span::new("abc")));
    let renderer = Renderer::new();
    let area = Rect::new(0, 0, 6, 1);
    assert_eq!(
        renderer.render_to_buffer(&mut doc, area).unwrap().to_lines(),
        vec!["abc   "]
    );
    if let Element::Div(div) = doc.root_mut() {
        div.push(Span::new("def"));
        div.children_mut()[0].props_mut().visibility = Visibility::Collapsed;
    }
    assert_eq!(
        renderer.render_to_buffer(&mut doc, area).unwrap().to_lines(),
        vec!["def   "]
    );
}

#[test]
fn vertical_split_with_star_rows() {
    let grid = Grid::new()
        .with_columns(tracks![GridLength::Star(1.0)])
        .unwrap()
        .with_rows(tracks![GridLength::Star(1.0), 1, GridLength::Star(1.0)])
        .unwrap()
        .cell(0, 0, Span::new("top"))
        .cell(1, 0, Line::horizontal().stroke(LineWidth::Double))
        .cell(2, 0, Span::new("bottom"));
    let mut doc = Document::new(grid);
    let buffer = Renderer::new()
        .render_to_buffer(&mut doc, Rect::new(0, 0, 6, 5))
        .unwrap();
    assert_eq!(
        buffer.to_lines(),
        vec!["top   ", "      ", "══════", "bottom", "      "]
    );
}
