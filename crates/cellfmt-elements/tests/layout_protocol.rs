//! End-to-end checks of measure, arrange and render over small trees.

use cellfmt_core::geometry::{Rect, Size, Thickness, Vector};
use cellfmt_elements::{
    BlockBuilder, Div, Element, Grid, Line, RenderContext, Span, Visibility, tracks,
};
use cellfmt_layout::{GridLength, HorizontalAlignment, VerticalAlignment};
use cellfmt_render::{Color, LineWidth, RenderBuffer};
use cellfmt_text::TextWrapping;

fn layout(root: impl Into<Element>, area: Rect) -> Element {
    let mut root = root.into();
    root.measure(area.size()).expect("measure");
    root.arrange(area);
    root
}

fn paint(root: &Element, area: Rect) -> RenderBuffer {
    let mut buffer = RenderBuffer::new(area);
    root.render(&mut buffer, &RenderContext::root());
    buffer
}

#[test]
fn margin_and_min_width_round_trip() {
    let mut div = Element::from(
        Div::new()
            .margin(Thickness::all(1))
            .min_width(10)
            .child(Span::new("abc")),
    );
    div.measure(Size::new(20, 5)).unwrap();
    assert_eq!(div.desired_size(), Size::new(12, 3));
    assert_eq!(div.layout().unclipped_desired_size, Size::new(10, 1));
}

#[test]
fn explicit_width_clamps_into_bounds() {
    let cases = [
        (Some(8), 0, None, 8),
        (Some(8), 10, None, 10),
        (Some(8), 0, Some(5), 5),
        (None, 4, Some(6), 4),
    ];
    for (width, min, max, expected) in cases {
        let mut span = Span::new("x").min_width(min);
        if let Some(w) = width {
            span = span.width(w);
        }
        if let Some(m) = max {
            span = span.max_width(m);
        }
        let mut e = Element::from(span);
        e.measure(Size::new(40, 2)).unwrap();
        assert_eq!(e.desired_size().width, expected, "{width:?} {min} {max:?}");
    }
}

#[test]
fn desired_size_never_exceeds_available() {
    let mut e = Element::from(Span::new("x").width(30).margin((2, 2)));
    e.measure(Size::new(10, 3)).unwrap();
    assert_eq!(e.desired_size(), Size::new(10, 3));
}

#[test]
fn overflowing_stretch_anchors_left() {
    let root = layout(
        Div::new().child(Span::new("x").min_width(12)),
        Rect::new(0, 0, 8, 1),
    );
    let child = &root.children()[0];
    assert_eq!(child.actual_offset(), Vector::new(0, 0));
    assert_eq!(child.render_size(), Size::new(12, 1));

    let centered = layout(
        Div::new().child(
            Span::new("x")
                .min_width(12)
                .align(HorizontalAlignment::Center),
        ),
        Rect::new(0, 0, 8, 1),
    );
    assert_eq!(centered.children()[0].actual_offset(), Vector::new(-2, 0));
}

#[test]
fn non_stretch_alignment_uses_desired_size() {
    let root = layout(
        Div::new().child(
            Span::new("abc")
                .align(HorizontalAlignment::Right)
                .valign(VerticalAlignment::Center),
        ),
        Rect::new(0, 0, 10, 5),
    );
    let child = &root.children()[0];
    assert_eq!(child.render_size(), Size::new(3, 1));
    assert_eq!(child.actual_offset(), Vector::new(7, 2));

    let buffer = paint(&root, Rect::new(0, 0, 10, 5));
    assert_eq!(buffer.to_lines()[2], "       abc");
}

#[test]
fn explicit_width_clips_overflowing_child() {
    let root = layout(
        Div::new()
            .width(3)
            .align(HorizontalAlignment::Left)
            .child(Span::new("abcdef").text_wrap(TextWrapping::NoWrap)),
        Rect::new(0, 0, 10, 1),
    );
    assert_eq!(root.render_size(), Size::new(3, 1));
    assert_eq!(root.children()[0].render_size(), Size::new(6, 1));
    let buffer = paint(&root, Rect::new(0, 0, 10, 1));
    assert_eq!(buffer.to_lines(), vec!["abc       "]);
}

#[test]
fn collapsed_children_take_no_space() {
    let root = layout(
        Div::new()
            .child(Span::new("one"))
            .child(Span::new("gone").visibility(Visibility::Collapsed))
            .child(Span::new("two")),
        Rect::new(0, 0, 5, 3),
    );
    assert_eq!(root.desired_size(), Size::new(3, 2));
    assert_eq!(root.children()[1].desired_size(), Size::EMPTY);
    assert_eq!(root.children()[2].actual_offset(), Vector::new(0, 1));
    let buffer = paint(&root, Rect::new(0, 0, 5, 3));
    assert_eq!(buffer.to_lines(), vec!["one  ", "two  ", "     "]);
}

#[test]
fn hidden_children_keep_space_but_paint_nothing() {
    let root = layout(
        Div::new()
            .child(Span::new("one"))
            .child(
                Div::new()
                    .visibility(Visibility::Hidden)
                    .background(Color::Red)
                    .child(Span::new("secret")),
            )
            .child(Span::new("two")),
        Rect::new(0, 0, 6, 3),
    );
    assert_eq!(root.desired_size(), Size::new(6, 3));
    let buffer = paint(&root, Rect::new(0, 0, 6, 3));
    assert_eq!(buffer.to_lines(), vec!["one   ", "      ", "two   "]);
    assert!(buffer.cells().iter().all(|c| c.bg.is_none()));
}

#[test]
fn colors_inherit_and_backgrounds_fill_render_area() {
    let root = layout(
        Div::new()
            .color(Color::Yellow)
            .child(Span::new("ab"))
            .child(Span::new("cd").color(Color::Green).background(Color::DarkBlue)),
        Rect::new(0, 0, 4, 2),
    );
    let buffer = paint(&root, Rect::new(0, 0, 4, 2));
    assert_eq!(buffer.get(0, 0).map(|c| c.fg), Some(Color::Yellow));
    assert_eq!(buffer.get(3, 0).map(|c| c.fg), Some(Color::Yellow));
    assert_eq!(buffer.get(0, 1).map(|c| c.fg), Some(Color::Green));
    assert_eq!(buffer.get(3, 1).and_then(|c| c.bg), Some(Color::DarkBlue));
    assert_eq!(buffer.get(3, 0).and_then(|c| c.bg), None);
}

#[test]
fn document_default_foreground_is_light_gray() {
    let root = layout(Span::new("a"), Rect::new(0, 0, 2, 1));
    let buffer = paint(&root, Rect::new(0, 0, 2, 1));
    assert_eq!(buffer.get(0, 0).map(|c| c.fg), Some(Color::Gray));
}

#[test]
fn grid_with_rules_merges_junctions() {
    let grid = Grid::new()
        .with_columns(tracks![3, 1, 3])
        .unwrap()
        .with_rows(tracks![1, 1, 1])
        .unwrap()
        .cell(0, 0, Span::new("a"))
        .cell(0, 1, Line::vertical())
        .cell(0, 2, Span::new("b"))
        .cell(1, 0, Line::horizontal())
        .cell(1, 1, Line::vertical())
        .cell(1, 1, Line::horizontal())
        .cell(1, 2, Line::horizontal())
        .cell(2, 0, Span::new("c"))
        .cell(2, 1, Line::vertical())
        .cell(2, 2, Span::new("d"));
    let root = layout(grid, Rect::new(0, 0, 7, 3));
    let buffer = paint(&root, Rect::new(0, 0, 7, 3));
    assert_eq!(buffer.to_lines(), vec!["a  │b  ", "───┼───", "c  │d  "]);
}

#[test]
fn star_columns_share_rendered_width() {
    let grid = Grid::new()
        .with_columns(tracks![GridLength::Star(1.0), GridLength::Star(1.0)])
        .unwrap()
        .child(Span::new("left"))
        .child(Span::new("right"));
    let root = layout(grid, Rect::new(0, 0, 12, 1));
    let buffer = paint(&root, Rect::new(0, 0, 12, 1));
    assert_eq!(buffer.to_lines(), vec!["left  right "]);
}

#[test]
fn clone_detaches_layout_state() {
    let mut original = Element::from(Div::new().child(Span::new("abc")));
    original.measure(Size::new(10, 1)).unwrap();
    let snapshot = original.clone();
    original.measure(Size::new(2, 1)).unwrap();
    assert_eq!(snapshot.desired_size(), Size::new(3, 1));
    assert_eq!(original.desired_size(), Size::new(2, 1));
    assert_eq!(snapshot.children()[0].desired_size(), Size::new(3, 1));
}

#[test]
fn none_stroke_line_takes_no_space() {
    let root = layout(
        Div::new()
            .child(Span::new("a"))
            .child(Line::horizontal().stroke(LineWidth::None))
            .child(Span::new("b")),
        Rect::new(0, 0, 3, 3),
    );
    assert_eq!(root.desired_size(), Size::new(1, 2));
}
