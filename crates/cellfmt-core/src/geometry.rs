#![forbid(unsafe_code)]

//! Geometric primitives.
//!
//! Dimensions are `u32` cell counts where [`INFINITE`] stands for an
//! unconstrained extent. Every operation that mixes finite and infinite values
//! is total: infinity absorbs addition and subtraction of finite amounts,
//! `min` picks the finite operand, and subtraction floors at zero.
//!
//! Positions and offsets are signed (`i32`) because alignment can push an
//! element's origin before its slot when content overflows.

use std::ops::{Add, Neg, Sub};

/// Sentinel for an unconstrained dimension.
pub const INFINITE: u32 = u32::MAX;

/// Clamp `value` into `[min, max]` as `max(min(value, max), min)`.
///
/// When the bounds are inverted the minimum wins.
#[inline]
pub const fn min_max(value: u32, min: u32, max: u32) -> u32 {
    let v = if value < max { value } else { max };
    if v > min { v } else { min }
}

/// Add two dimensions, keeping finite sums finite.
#[inline]
pub const fn add_dim(a: u32, b: u32) -> u32 {
    if a == INFINITE || b == INFINITE {
        return INFINITE;
    }
    let sum = a.saturating_add(b);
    if sum == INFINITE { INFINITE - 1 } else { sum }
}

/// Subtract `b` from `a`, flooring at zero. Infinite minus finite stays infinite.
#[inline]
pub const fn sub_dim(a: u32, b: u32) -> u32 {
    if a == INFINITE && b != INFINITE {
        return INFINITE;
    }
    a.saturating_sub(b)
}

/// A width/height pair, either component possibly [`INFINITE`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Size {
    /// Width in cells.
    pub width: u32,
    /// Height in cells.
    pub height: u32,
}

impl Size {
    /// The empty size (0, 0).
    pub const EMPTY: Self = Self::new(0, 0);

    /// Both dimensions unconstrained.
    pub const INFINITE: Self = Self::new(INFINITE, INFINITE);

    /// Create a new size.
    #[inline]
    pub const fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }

    /// True if either dimension is infinite.
    #[inline]
    pub const fn is_infinite(&self) -> bool {
        self.width == INFINITE || self.height == INFINITE
    }

    /// True if both dimensions are zero.
    #[inline]
    pub const fn is_empty(&self) -> bool {
        self.width == 0 && self.height == 0
    }

    /// Component-wise minimum.
    #[inline]
    #[must_use]
    pub fn min(self, other: Self) -> Self {
        Self::new(self.width.min(other.width), self.height.min(other.height))
    }

    /// Component-wise maximum.
    #[inline]
    #[must_use]
    pub fn max(self, other: Self) -> Self {
        Self::new(self.width.max(other.width), self.height.max(other.height))
    }

    /// Component-wise [`min_max`].
    #[inline]
    #[must_use]
    pub fn min_max(self, min: Self, max: Self) -> Self {
        Self::new(
            min_max(self.width, min.width, max.width),
            min_max(self.height, min.height, max.height),
        )
    }

    /// Replace the width.
    #[inline]
    #[must_use]
    pub const fn with_width(self, width: u32) -> Self {
        Self::new(width, self.height)
    }

    /// Replace the height.
    #[inline]
    #[must_use]
    pub const fn with_height(self, height: u32) -> Self {
        Self::new(self.width, height)
    }

    /// Shrink by a thickness, flooring at zero.
    #[inline]
    #[must_use]
    pub const fn deflate(self, t: Thickness) -> Self {
        Self::new(sub_dim(self.width, t.width()), sub_dim(self.height, t.height()))
    }

    /// Grow by a thickness.
    #[inline]
    #[must_use]
    pub const fn inflate(self, t: Thickness) -> Self {
        Self::new(add_dim(self.width, t.width()), add_dim(self.height, t.height()))
    }
}

impl Add<Thickness> for Size {
    type Output = Size;

    fn add(self, rhs: Thickness) -> Size {
        self.inflate(rhs)
    }
}

impl Sub<Thickness> for Size {
    type Output = Size;

    fn sub(self, rhs: Thickness) -> Size {
        self.deflate(rhs)
    }
}

impl From<(u32, u32)> for Size {
    fn from((width, height): (u32, u32)) -> Self {
        Self::new(width, height)
    }
}

/// A signed offset.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Vector {
    pub x: i32,
    pub y: i32,
}

impl Vector {
    /// The zero offset.
    pub const ZERO: Self = Self::new(0, 0);

    /// Create a new vector.
    #[inline]
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }
}

impl Add for Vector {
    type Output = Vector;

    fn add(self, rhs: Vector) -> Vector {
        Vector::new(self.x.saturating_add(rhs.x), self.y.saturating_add(rhs.y))
    }
}

impl Sub for Vector {
    type Output = Vector;

    fn sub(self, rhs: Vector) -> Vector {
        Vector::new(self.x.saturating_sub(rhs.x), self.y.saturating_sub(rhs.y))
    }
}

impl Neg for Vector {
    type Output = Vector;

    fn neg(self) -> Vector {
        Vector::new(self.x.saturating_neg(), self.y.saturating_neg())
    }
}

/// A rectangle: signed origin plus [`Size`].
///
/// Uses cell coordinates with the origin at the top-left.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Rect {
    /// Left edge (inclusive).
    pub x: i32,
    /// Top edge (inclusive).
    pub y: i32,
    /// Width in cells.
    pub width: u32,
    /// Height in cells.
    pub height: u32,
}

impl Rect {
    /// The empty rectangle at the origin.
    pub const EMPTY: Self = Self::new(0, 0, 0, 0);

    /// Create a new rectangle.
    #[inline]
    pub const fn new(x: i32, y: i32, width: u32, height: u32) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    /// Create a rectangle at the origin with the given size.
    #[inline]
    pub const fn from_size(size: Size) -> Self {
        Self::new(0, 0, size.width, size.height)
    }

    /// Create a rectangle at `origin` with the given size.
    #[inline]
    pub const fn at(origin: Vector, size: Size) -> Self {
        Self::new(origin.x, origin.y, size.width, size.height)
    }

    /// Size of the rectangle.
    #[inline]
    pub const fn size(&self) -> Size {
        Size::new(self.width, self.height)
    }

    /// Top-left corner as a vector from the origin.
    #[inline]
    pub const fn origin(&self) -> Vector {
        Vector::new(self.x, self.y)
    }

    /// Right edge (exclusive). Widened so infinite rectangles do not overflow.
    #[inline]
    pub const fn right(&self) -> i64 {
        self.x as i64 + self.width as i64
    }

    /// Bottom edge (exclusive).
    #[inline]
    pub const fn bottom(&self) -> i64 {
        self.y as i64 + self.height as i64
    }

    /// Check if the rectangle has zero area.
    #[inline]
    pub const fn is_empty(&self) -> bool {
        self.width == 0 || self.height == 0
    }

    /// Check if a point is inside the rectangle.
    #[inline]
    pub const fn contains(&self, x: i32, y: i32) -> bool {
        x >= self.x && (x as i64) < self.right() && y >= self.y && (y as i64) < self.bottom()
    }

    /// Translate by an offset.
    #[inline]
    #[must_use]
    pub fn offset(&self, by: Vector) -> Rect {
        Rect::new(
            self.x.saturating_add(by.x),
            self.y.saturating_add(by.y),
            self.width,
            self.height,
        )
    }

    /// Compute the intersection with another rectangle.
    ///
    /// Returns an empty rectangle if they don't overlap.
    #[inline]
    pub fn intersection(&self, other: &Rect) -> Rect {
        self.intersection_opt(other).unwrap_or_default()
    }

    /// Compute the intersection, returning `None` if there is no overlap.
    pub fn intersection_opt(&self, other: &Rect) -> Option<Rect> {
        let x = self.x.max(other.x);
        let y = self.y.max(other.y);
        let right = self.right().min(other.right());
        let bottom = self.bottom().min(other.bottom());

        if (x as i64) < right && (y as i64) < bottom {
            Some(Rect::new(
                x,
                y,
                dim_from_i64(right - x as i64),
                dim_from_i64(bottom - y as i64),
            ))
        } else {
            None
        }
    }
}

#[inline]
fn dim_from_i64(v: i64) -> u32 {
    v.clamp(0, INFINITE as i64) as u32
}

/// Insets on each side of a rectangle, used for margins.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Thickness {
    pub left: u32,
    pub top: u32,
    pub right: u32,
    pub bottom: u32,
}

impl Thickness {
    /// No inset.
    pub const ZERO: Self = Self::all(0);

    /// Same inset on every side.
    pub const fn all(val: u32) -> Self {
        Self::new(val, val, val, val)
    }

    /// Insets in left, top, right, bottom order.
    pub const fn new(left: u32, top: u32, right: u32, bottom: u32) -> Self {
        Self {
            left,
            top,
            right,
            bottom,
        }
    }

    /// Left plus right.
    #[inline]
    pub const fn width(&self) -> u32 {
        add_dim(self.left, self.right)
    }

    /// Top plus bottom.
    #[inline]
    pub const fn height(&self) -> u32 {
        add_dim(self.top, self.bottom)
    }

    /// Offset of the inner top-left corner.
    #[inline]
    pub fn top_left(&self) -> Vector {
        Vector::new(clamp_to_i32(self.left), clamp_to_i32(self.top))
    }
}

#[inline]
fn clamp_to_i32(v: u32) -> i32 {
    i32::try_from(v).unwrap_or(i32::MAX)
}

impl From<u32> for Thickness {
    fn from(val: u32) -> Self {
        Self::all(val)
    }
}

impl From<(u32, u32)> for Thickness {
    fn from((horizontal, vertical): (u32, u32)) -> Self {
        Self::new(horizontal, vertical, horizontal, vertical)
    }
}

impl From<(u32, u32, u32, u32)> for Thickness {
    fn from((left, top, right, bottom): (u32, u32, u32, u32)) -> Self {
        Self::new(left, top, right, bottom)
    }
}
