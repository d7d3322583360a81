#![forbid(unsafe_code)]

//! Ruled-line glyph composition.
//!
//! Each cell records which arms of a rule pass through it (left, right, up,
//! down) and whether each arm is single or double. The glyph is derived from
//! the full set of arms, so a horizontal rule drawn across a vertical one
//! yields `┼` and a rule ending on another yields a tee.

/// Stroke weight of a ruled line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum LineWidth {
    /// No stroke; nothing is drawn.
    None,
    /// `─` / `│`.
    #[default]
    Single,
    /// `═` / `║`.
    Double,
}

impl LineWidth {
    /// Cells the stroke occupies across the rule.
    ///
    /// Double strokes use dedicated box-drawing glyphs, so they are as thin
    /// as single ones.
    #[inline]
    #[must_use]
    pub const fn char_width(self) -> u32 {
        match self {
            Self::None => 0,
            Self::Single | Self::Double => 1,
        }
    }
}

bitflags::bitflags! {
    /// Arms of ruled lines passing through a cell.
    ///
    /// A `*_DOUBLE` bit upgrades the matching arm to a double stroke.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
    pub struct LineChar: u8 {
        const LEFT         = 0b0000_0001;
        const RIGHT        = 0b0000_0010;
        const UP           = 0b0000_0100;
        const DOWN         = 0b0000_1000;
        const LEFT_DOUBLE  = 0b0001_0000;
        const RIGHT_DOUBLE = 0b0010_0000;
        const UP_DOUBLE    = 0b0100_0000;
        const DOWN_DOUBLE  = 0b1000_0000;

        const HORIZONTAL = Self::LEFT.bits() | Self::RIGHT.bits();
        const VERTICAL = Self::UP.bits() | Self::DOWN.bits();
    }
}

impl LineChar {
    /// Arms for one cell of a rule along `horizontal` (or vertical) with the
    /// given stroke. `leading`/`trailing` drop the arm pointing out of the
    /// rule's ends.
    #[must_use]
    pub fn segment(horizontal: bool, stroke: LineWidth, leading: bool, trailing: bool) -> Self {
        let (start, end, start_double, end_double) = if horizontal {
            (Self::LEFT, Self::RIGHT, Self::LEFT_DOUBLE, Self::RIGHT_DOUBLE)
        } else {
            (Self::UP, Self::DOWN, Self::UP_DOUBLE, Self::DOWN_DOUBLE)
        };
        let mut arms = Self::empty();
        if !leading {
            arms |= start;
        }
        if !trailing {
            arms |= end;
        }
        // A rule one cell long still needs a visible stroke.
        if arms.is_empty() {
            arms = start | end;
        }
        if stroke == LineWidth::Double {
            if arms.contains(start) {
                arms |= start_double;
            }
            if arms.contains(end) {
                arms |= end_double;
            }
        }
        arms
    }

    /// Box-drawing glyph for these arms, or `None` when there are none.
    ///
    /// Box drawing has no glyphs that mix weights on one axis, so each axis
    /// takes the heavier of its two arms.
    #[must_use]
    pub fn glyph(self) -> Option<char> {
        let left = self.contains(Self::LEFT);
        let right = self.contains(Self::RIGHT);
        let up = self.contains(Self::UP);
        let down = self.contains(Self::DOWN);
        let h_double = self.intersects(Self::LEFT_DOUBLE | Self::RIGHT_DOUBLE);
        let v_double = self.intersects(Self::UP_DOUBLE | Self::DOWN_DOUBLE);

        let has_h = left || right;
        let has_v = up || down;
        if !has_h && !has_v {
            return None;
        }
        if !has_v {
            return Some(if h_double { '═' } else { '─' });
        }
        if !has_h {
            return Some(if v_double { '║' } else { '│' });
        }

        let table = match (h_double, v_double) {
            (false, false) => &SINGLE,
            (true, true) => &DOUBLE,
            (true, false) => &DOUBLE_H,
            (false, true) => &DOUBLE_V,
        };
        // Rows: joins that have both axes. Order: ┌ ┐ └ ┘ ┬ ┴ ├ ┤ ┼
        let idx = match (left, right, up, down) {
            (false, true, false, true) => 0,
            (true, false, false, true) => 1,
            (false, true, true, false) => 2,
            (true, false, true, false) => 3,
            (true, true, false, true) => 4,
            (true, true, true, false) => 5,
            (false, true, true, true) => 6,
            (true, false, true, true) => 7,
            _ => 8,
        };
        Some(table[idx])
    }
}

const SINGLE: [char; 9] = ['┌', '┐', '└', '┘', '┬', '┴', '├', '┤', '┼'];
const DOUBLE: [char; 9] = ['╔', '╗', '╚', '╝', '╦', '╩', '╠', '╣', '╬'];
const DOUBLE_H: [char; 9] = ['╒', '╕', '╘', '╛', '╤', '╧', '╞', '╡', '╪'];
const DOUBLE_V: [char; 9] = ['╓', '╖', '╙', '╜', '╥', '╨', '╟', '╢', '╫'];
