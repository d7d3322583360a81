#![forbid(unsafe_code)]

//! Declared size bounds and alignment offsets.
//!
//! These are the pieces of the measure/arrange protocol that do not depend on
//! the element tree: turning declared width/min/max into effective bounds,
//! and positioning a rendered box inside its client area.

use cellfmt_core::geometry::{INFINITE, Size, Vector, min_max};

/// Declared size properties of a block element.
///
/// `None` means unset: no explicit size, or no maximum.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct SizeBounds {
    pub width: Option<u32>,
    pub height: Option<u32>,
    pub min_width: u32,
    pub min_height: u32,
    pub max_width: Option<u32>,
    pub max_height: Option<u32>,
}

impl SizeBounds {
    /// Resolve into effective minimum and maximum sizes.
    ///
    /// An explicit size pins its axis: it is clamped into the declared
    /// `[min, max]` and becomes both the effective min and max.
    pub fn resolve(&self) -> MinMaxSize {
        let (min_width, max_width) = resolve_axis(self.width, self.min_width, self.max_width);
        let (min_height, max_height) =
            resolve_axis(self.height, self.min_height, self.max_height);
        MinMaxSize {
            min: Size::new(min_width, min_height),
            max: Size::new(max_width, max_height),
        }
    }
}

fn resolve_axis(explicit: Option<u32>, min: u32, max: Option<u32>) -> (u32, u32) {
    let declared_max = max.unwrap_or(INFINITE);
    let eff_max = min_max(explicit.unwrap_or(INFINITE), min, declared_max);
    let eff_min = min_max(explicit.unwrap_or(0), min, eff_max);
    (eff_min, eff_max)
}

/// Effective bounds used to clamp sizes during measure and arrange.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MinMaxSize {
    pub min: Size,
    pub max: Size,
}

impl MinMaxSize {
    /// Bounds that constrain nothing.
    pub const UNBOUNDED: Self = Self {
        min: Size::EMPTY,
        max: Size::INFINITE,
    };

    /// Clamp a size into these bounds.
    #[inline]
    pub fn clamp(&self, size: Size) -> Size {
        size.min_max(self.min, self.max)
    }
}

impl Default for MinMaxSize {
    fn default() -> Self {
        Self::UNBOUNDED
    }
}

/// Horizontal placement of an element inside its slot.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum HorizontalAlignment {
    Left,
    Center,
    Right,
    #[default]
    Stretch,
}

/// Vertical placement of an element inside its slot.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum VerticalAlignment {
    Top,
    Center,
    Bottom,
    #[default]
    Stretch,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum AxisAlign {
    Start,
    Center,
    End,
    Stretch,
}

impl From<HorizontalAlignment> for AxisAlign {
    fn from(a: HorizontalAlignment) -> Self {
        match a {
            HorizontalAlignment::Left => Self::Start,
            HorizontalAlignment::Center => Self::Center,
            HorizontalAlignment::Right => Self::End,
            HorizontalAlignment::Stretch => Self::Stretch,
        }
    }
}

impl From<VerticalAlignment> for AxisAlign {
    fn from(a: VerticalAlignment) -> Self {
        match a {
            VerticalAlignment::Top => Self::Start,
            VerticalAlignment::Center => Self::Center,
            VerticalAlignment::Bottom => Self::End,
            VerticalAlignment::Stretch => Self::Stretch,
        }
    }
}

/// Offset of a rendered box inside its client area.
///
/// `render` is first bounded by `max`. A stretched box that still overflows
/// the client area is anchored at the leading edge, the same corner that
/// max-size clipping keeps. Overflowing centered or end-aligned boxes get a
/// negative offset.
pub fn alignment_offset(
    client: Size,
    render: Size,
    max: Size,
    align: HorizontalAlignment,
    valign: VerticalAlignment,
) -> Vector {
    let bounded = render.min(max);
    Vector::new(
        axis_offset(client.width, bounded.width, align.into()),
        axis_offset(client.height, bounded.height, valign.into()),
    )
}

fn axis_offset(client: u32, bounded: u32, align: AxisAlign) -> i32 {
    if client == INFINITE {
        return 0;
    }
    let align = if align == AxisAlign::Stretch && bounded > client {
        AxisAlign::Start
    } else {
        align
    };
    let slack = i64::from(client) - i64::from(bounded);
    let offset = match align {
        AxisAlign::Center | AxisAlign::Stretch => slack / 2,
        AxisAlign::End => slack,
        AxisAlign::Start => 0,
    };
    offset.clamp(i64::from(i32::MIN), i64::from(i32::MAX)) as i32
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn explicit_width_pins_axis_within_bounds() {
        let bounds = SizeBounds {
            width: Some(12),
            min_width: 5,
            max_width: Some(20),
            ..SizeBounds::default()
        };
        let mm = bounds.resolve();
        assert_eq!(mm.min.width, 12);
        assert_eq!(mm.max.width, 12);
        assert_eq!(mm.min.height, 0);
        assert_eq!(mm.max.height, INFINITE);
    }

    #[test]
    fn explicit_width_clamped_by_max_and_min() {
        let over = SizeBounds {
            width: Some(30),
            max_width: Some(20),
            ..SizeBounds::default()
        };
        assert_eq!(over.resolve().max.width, 20);
        assert_eq!(over.resolve().min.width, 20);

        let under = SizeBounds {
            width: Some(2),
            min_width: 6,
            ..SizeBounds::default()
        };
        assert_eq!(under.resolve().min.width, 6);
        assert_eq!(under.resolve().max.width, 6);
    }

    #[test]
    fn inverted_min_max_resolves_to_min() {
        let bounds = SizeBounds {
            min_width: 10,
            max_width: Some(4),
            ..SizeBounds::default()
        };
        let mm = bounds.resolve();
        assert_eq!(mm.max.width, 10);
        assert_eq!(mm.min.width, 10);
    }

    #[test]
    fn offsets_per_alignment() {
        let client = Size::new(10, 6);
        let render = Size::new(4, 2);
        let max = Size::INFINITE;
        use HorizontalAlignment as H;
        use VerticalAlignment as V;
        assert_eq!(
            alignment_offset(client, render, max, H::Left, V::Top),
            Vector::new(0, 0)
        );
        assert_eq!(
            alignment_offset(client, render, max, H::Center, V::Center),
            Vector::new(3, 2)
        );
        assert_eq!(
            alignment_offset(client, render, max, H::Right, V::Bottom),
            Vector::new(6, 4)
        );
        assert_eq!(
            alignment_offset(client, render, max, H::Stretch, V::Stretch),
            Vector::new(3, 2)
        );
    }

    #[test]
    fn overflowing_stretch_degrades_to_start() {
        let offset = alignment_offset(
            Size::new(5, 5),
            Size::new(9, 9),
            Size::INFINITE,
            HorizontalAlignment::Stretch,
            VerticalAlignment::Stretch,
        );
        assert_eq!(offset, Vector::ZERO);

        let centered = alignment_offset(
            Size::new(5, 5),
            Size::new(9, 5),
            Size::INFINITE,
            HorizontalAlignment::Center,
            VerticalAlignment::Top,
        );
        assert_eq!(centered, Vector::new(-2, 0));
    }

    #[test]
    fn max_bounds_render_before_offsetting() {
        let offset = alignment_offset(
            Size::new(10, 1),
            Size::new(20, 1),
            Size::new(4, INFINITE),
            HorizontalAlignment::Right,
            VerticalAlignment::Top,
        );
        assert_eq!(offset, Vector::new(6, 0));
    }

    #[test]
    fn infinite_client_anchors_at_start() {
        let offset = alignment_offset(
            Size::new(INFINITE, INFINITE),
            Size::new(3, 3),
            Size::INFINITE,
            HorizontalAlignment::Center,
            VerticalAlignment::Bottom,
        );
        assert_eq!(offset, Vector::ZERO);
    }
}
