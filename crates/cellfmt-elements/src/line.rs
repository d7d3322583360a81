#![forbid(unsafe_code)]

//! Ruled separator.

use cellfmt_core::geometry::Size;
use cellfmt_layout::{LayoutError, Orientation};
use cellfmt_render::{LineWidth, RenderBuffer};

use crate::block::Block;
use crate::element::{BlockElement, RenderContext};

/// A horizontal or vertical rule.
///
/// It asks for no length of its own; it spans whatever it is arranged in.
/// Rules that cross or touch in the buffer merge into junction glyphs.
#[derive(Debug, Clone)]
pub struct Line {
    block: Block,
    orientation: Orientation,
    stroke: LineWidth,
}

impl Line {
    /// A single-stroke horizontal rule.
    pub fn horizontal() -> Self {
        Self {
            block: Block::new(),
            orientation: Orientation::Horizontal,
            stroke: LineWidth::Single,
        }
    }

    /// A single-stroke vertical rule.
    pub fn vertical() -> Self {
        Self {
            orientation: Orientation::Vertical,
            ..Self::horizontal()
        }
    }

    #[must_use]
    pub fn stroke(mut self, stroke: LineWidth) -> Self {
        self.stroke = stroke;
        self
    }

    pub fn orientation(&self) -> Orientation {
        self.orientation
    }
}

impl Default for Line {
    fn default() -> Self {
        Self::horizontal()
    }
}

impl BlockElement for Line {
    fn block(&self) -> &Block {
        &self.block
    }

    fn block_mut(&mut self) -> &mut Block {
        &mut self.block
    }

    fn measure_override(&mut self, _available: Size) -> Result<Size, LayoutError> {
        let across = self.stroke.char_width();
        Ok(match self.orientation {
            Orientation::Vertical => Size::new(across, 0),
            Orientation::Horizontal => Size::new(0, across),
        })
    }

    fn render_override(&self, buffer: &mut RenderBuffer, ctx: &RenderContext) {
        let size = self.block.layout.render_size;
        let (x, y) = (ctx.origin.x, ctx.origin.y);
        match self.orientation {
            Orientation::Vertical => {
                buffer.draw_vertical_line(x, y, size.height, ctx.color, self.stroke);
            }
            Orientation::Horizontal => {
                buffer.draw_horizontal_line(x, y, size.width, ctx.color, self.stroke);
            }
        }
    }
}
