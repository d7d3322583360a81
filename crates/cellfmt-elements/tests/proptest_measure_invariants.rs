//! Property tests for the measure/arrange protocol.
//!
//! 1. `desired_size <= available` for any finite available size.
//! 2. An explicit width inside `[min, max]` is measured as itself.
//! 3. Stretched children that overflow their client area sit at offset 0.
//! 4. Grid star columns fill exactly what fixed and auto columns leave.

use cellfmt_core::geometry::{Rect, Size, Thickness};
use cellfmt_elements::{BlockBuilder, Div, Element, Grid, Span, TrackSpec};
use cellfmt_layout::GridLength;
use proptest::prelude::*;

fn thickness() -> impl Strategy<Value = Thickness> {
    (0u32..4, 0u32..4, 0u32..4, 0u32..4).prop_map(|(l, t, r, b)| Thickness::new(l, t, r, b))
}

fn span() -> impl Strategy<Value = Span> {
    (
        "[a-z]{0,8}( [a-z]{1,8}){0,4}",
        thickness(),
        prop::option::of(0u32..30),
        0u32..20,
        prop::option::of(0u32..30),
    )
        .prop_map(|(text, margin, width, min, max)| {
            let mut span = Span::new(text).margin(margin).min_width(min);
            if let Some(w) = width {
                span = span.width(w);
            }
            if let Some(m) = max {
                span = span.max_width(m);
            }
            span
        })
}

fn tree() -> impl Strategy<Value = Element> {
    (prop::collection::vec(span(), 0..4), thickness(), 0u32..12).prop_map(
        |(spans, margin, min_height)| {
            Div::new()
                .margin(margin)
                .min_height(min_height)
                .children(spans)
                .into()
        },
    )
}

proptest! {
    #[test]
    fn desired_never_exceeds_available(mut root in tree(), w in 0u32..40, h in 0u32..40) {
        let available = Size::new(w, h);
        root.measure(available).unwrap();
        let desired = root.desired_size();
        prop_assert!(desired.width <= w && desired.height <= h, "{desired:?} > {available:?}");
        for child in root.children() {
            let d = child.desired_size();
            prop_assert!(d.width < u32::MAX && d.height < u32::MAX);
        }
    }

    #[test]
    fn explicit_width_within_bounds_is_kept(
        min in 0u32..20,
        extra in 0u32..20,
        slack in 0u32..20,
        text in "[a-z ]{0,30}",
    ) {
        let width = min + extra;
        let max = width + slack;
        let mut e: Element = Span::new(text)
            .width(width)
            .min_width(min)
            .max_width(max)
            .into();
        e.measure(Size::new(max + 5, 100)).unwrap();
        prop_assert_eq!(e.desired_size().width, width);
    }

    #[test]
    fn overflowing_stretch_children_start_at_zero(min in 1u32..40, client in 0u32..40) {
        prop_assume!(min > client);
        let mut root: Element = Div::new().child(Span::new("x").min_width(min)).into();
        root.measure(Size::new(client, 1)).unwrap();
        root.arrange(Rect::new(0, 0, client, 1));
        prop_assert_eq!(root.children()[0].actual_offset().x, 0);
    }

    #[test]
    fn star_columns_fill_leftover(
        fixed in prop::collection::vec(0u32..10, 0..4),
        weights in prop::collection::vec(0.1f64..5.0, 1..4),
        width in 0u32..80,
    ) {
        let stars: Vec<TrackSpec> = weights
            .iter()
            .map(|&w| TrackSpec::Length(GridLength::Star(w)))
            .collect();
        let grid = Grid::new()
            .with_columns(fixed.clone())
            .unwrap()
            .with_columns(stars)
            .unwrap()
            .child(Span::new("x"));
        let mut root: Element = grid.into();
        root.measure(Size::new(width, 10)).unwrap();
        let Element::Grid(grid) = &root else {
            unreachable!("root is a grid");
        };
        let columns = &grid.resolved().columns;
        let fixed_total: u32 = fixed.iter().sum();
        let star_total: u32 = columns[fixed.len()..].iter().sum();
        prop_assert_eq!(star_total, width.saturating_sub(fixed_total));
    }
}
