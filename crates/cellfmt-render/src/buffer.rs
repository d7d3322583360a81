#![forbid(unsafe_code)]

//! Render buffer storage.
//!
//! A [`RenderBuffer`] is a grid of [`Cell`]s covering a rectangle of the
//! document surface. Coordinates passed to every drawing method are document
//! coordinates; the buffer maps them onto its own area, so the same walk over
//! an arranged tree can paint any page of it.
//!
//! # Layout
//!
//! Cells are stored in row-major order: `index = (y - area.y) * width + (x - area.x)`.
//!
//! # Invariants
//!
//! 1. `cells.len() == area.width * area.height`
//! 2. The area never changes after creation
//! 3. The scissor stack always holds at least the buffer area, and each pushed
//!    scissor is intersected with the one below it
//! 4. Writes outside the current scissor are dropped silently

use crate::cell::Cell;
use crate::color::Color;
use crate::drawing::{LineChar, LineWidth};
use cellfmt_core::geometry::Rect;
use unicode_segmentation::UnicodeSegmentation;
use unicode_width::UnicodeWidthStr;

/// A 2D grid of character cells covering `area` of the document.
///
/// # Example
///
/// ```
/// use cellfmt_core::geometry::Rect;
/// use cellfmt_render::{Color, RenderBuffer};
///
/// let mut buffer = RenderBuffer::new(Rect::new(0, 0, 8, 2));
/// buffer.draw_text(1, 0, "Hi", Color::White);
/// assert_eq!(buffer.to_lines(), vec![" Hi     ", "        "]);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct RenderBuffer {
    area: Rect,
    cells: Vec<Cell>,
    scissor_stack: Vec<Rect>,
}

impl RenderBuffer {
    /// Create a blank buffer covering `area`.
    pub fn new(area: Rect) -> Self {
        let len = area.width as usize * area.height as usize;
        cellfmt_core::trace!(
            x = area.x,
            y = area.y,
            width = area.width,
            height = area.height,
            "render buffer allocated"
        );
        Self {
            area,
            cells: vec![Cell::BLANK; len],
            scissor_stack: vec![area],
        }
    }

    /// The document rectangle this buffer covers.
    #[inline]
    pub const fn area(&self) -> Rect {
        self.area
    }

    #[inline]
    pub const fn width(&self) -> u32 {
        self.area.width
    }

    #[inline]
    pub const fn height(&self) -> u32 {
        self.area.height
    }

    /// All cells in row-major order.
    #[inline]
    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }

    /// Cells of one buffer row, by row index (not document y).
    pub fn row(&self, row: u32) -> Option<&[Cell]> {
        if row >= self.area.height {
            return None;
        }
        let w = self.area.width as usize;
        let start = row as usize * w;
        Some(&self.cells[start..start + w])
    }

    /// Cell at document position `(x, y)`, if inside the buffer.
    pub fn get(&self, x: i32, y: i32) -> Option<&Cell> {
        self.index_of(x, y).map(|i| &self.cells[i])
    }

    /// Glyph at document position `(x, y)`, if inside the buffer.
    pub fn glyph_at(&self, x: i32, y: i32) -> Option<char> {
        self.get(x, y).map(|c| c.glyph)
    }

    #[inline]
    fn index_of(&self, x: i32, y: i32) -> Option<usize> {
        if !self.area.contains(x, y) {
            return None;
        }
        let dx = (i64::from(x) - i64::from(self.area.x)) as usize;
        let dy = (i64::from(y) - i64::from(self.area.y)) as usize;
        Some(dy * self.area.width as usize + dx)
    }

    /// Index of `(x, y)` if it may be written under the current scissor.
    #[inline]
    fn writable(&self, x: i32, y: i32) -> Option<usize> {
        if self.current_scissor().contains(x, y) {
            self.index_of(x, y)
        } else {
            None
        }
    }

    // ----- Scissor stack -----

    /// Push a scissor (clipping) region onto the stack.
    ///
    /// The effective scissor is the intersection of all pushed rects.
    pub fn push_scissor(&mut self, rect: Rect) {
        let intersected = self.current_scissor().intersection(&rect);
        self.scissor_stack.push(intersected);
    }

    /// Pop a scissor region from the stack.
    ///
    /// Does nothing if only the base scissor remains.
    pub fn pop_scissor(&mut self) {
        if self.scissor_stack.len() > 1 {
            self.scissor_stack.pop();
        }
    }

    /// Get the current effective scissor region.
    #[inline]
    pub fn current_scissor(&self) -> Rect {
        self.scissor_stack.last().copied().unwrap_or(self.area)
    }

    /// Get the scissor stack depth.
    #[inline]
    pub fn scissor_depth(&self) -> usize {
        self.scissor_stack.len()
    }

    // ----- Painting -----

    /// Visit every writable cell of `rect`.
    fn for_each_in(&mut self, rect: Rect, mut f: impl FnMut(&mut Cell)) {
        let clipped = self.current_scissor().intersection(&rect);
        if clipped.is_empty() {
            return;
        }
        for y in clipped.y..=(clipped.bottom() - 1) as i32 {
            for x in clipped.x..=(clipped.right() - 1) as i32 {
                if let Some(i) = self.index_of(x, y) {
                    f(&mut self.cells[i]);
                }
            }
        }
    }

    /// Set the background of `rect`, keeping glyphs.
    pub fn fill_background(&mut self, rect: Rect, color: Color) {
        self.for_each_in(rect, |cell| cell.bg = Some(color));
    }

    /// Set the foreground of `rect`, keeping glyphs.
    pub fn fill_foreground(&mut self, rect: Rect, color: Color) {
        self.for_each_in(rect, |cell| cell.fg = color);
    }

    /// Write `text` starting at `(x, y)` and return the cells advanced.
    ///
    /// Each grapheme takes its display width in cells; zero-width graphemes
    /// are dropped. A wide glyph that does not entirely fit the scissor is
    /// not written at all.
    pub fn draw_text(&mut self, x: i32, y: i32, text: &str, color: Color) -> u32 {
        let mut cx = i64::from(x);
        for grapheme in text.graphemes(true) {
            let w = grapheme.width();
            let Some(glyph) = grapheme.chars().next() else {
                continue;
            };
            if w == 0 {
                continue;
            }
            let Ok(head_x) = i32::try_from(cx) else {
                break;
            };
            if w == 1 {
                if let Some(i) = self.writable(head_x, y) {
                    self.put_glyph(i, glyph, color);
                }
            } else {
                let tail_x = head_x.saturating_add(1);
                if let (Some(head), Some(tail)) =
                    (self.writable(head_x, y), self.writable(tail_x, y))
                {
                    self.put_glyph(head, glyph, color);
                    self.put_glyph(tail, Cell::CONTINUATION, color);
                }
            }
            cx += w.min(2) as i64;
        }
        (cx - i64::from(x)).clamp(0, i64::from(u32::MAX)) as u32
    }

    fn put_glyph(&mut self, index: usize, glyph: char, color: Color) {
        let cell = &mut self.cells[index];
        cell.glyph = glyph;
        cell.fg = color;
        cell.lines = LineChar::empty();
    }

    /// Draw a horizontal rule of `length` cells starting at `(x, y)`.
    pub fn draw_horizontal_line(
        &mut self,
        x: i32,
        y: i32,
        length: u32,
        color: Color,
        stroke: LineWidth,
    ) {
        self.draw_rule(true, x, y, length, color, stroke);
    }

    /// Draw a vertical rule of `length` cells starting at `(x, y)`.
    pub fn draw_vertical_line(
        &mut self,
        x: i32,
        y: i32,
        length: u32,
        color: Color,
        stroke: LineWidth,
    ) {
        self.draw_rule(false, x, y, length, color, stroke);
    }

    fn draw_rule(
        &mut self,
        horizontal: bool,
        x: i32,
        y: i32,
        length: u32,
        color: Color,
        stroke: LineWidth,
    ) {
        if stroke == LineWidth::None || length == 0 {
            return;
        }
        // Nothing past the scissor can be written; stop there.
        let scissor = self.current_scissor();
        let limit = if horizontal {
            scissor.right() - i64::from(x)
        } else {
            scissor.bottom() - i64::from(y)
        };
        let steps = i64::from(length).min(limit.max(0));
        for i in 0..steps {
            let (cx, cy) = if horizontal {
                (i64::from(x) + i, i64::from(y))
            } else {
                (i64::from(x), i64::from(y) + i)
            };
            let (Ok(cx), Ok(cy)) = (i32::try_from(cx), i32::try_from(cy)) else {
                break;
            };
            let Some(idx) = self.writable(cx, cy) else {
                continue;
            };
            let arms = LineChar::segment(horizontal, stroke, i == 0, i == i64::from(length) - 1);
            let cell = &mut self.cells[idx];
            cell.lines |= arms;
            if let Some(glyph) = cell.lines.glyph() {
                cell.glyph = glyph;
            }
            cell.fg = color;
        }
    }

    // ----- Export -----

    /// Text of each row, continuation cells skipped.
    pub fn to_lines(&self) -> Vec<String> {
        (0..self.area.height)
            .filter_map(|r| self.row(r))
            .map(|cells| {
                cells
                    .iter()
                    .filter(|c| !c.is_continuation())
                    .map(|c| c.glyph)
                    .collect()
            })
            .collect()
    }
}
