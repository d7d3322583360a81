#![forbid(unsafe_code)]

//! Text run.

use cellfmt_core::geometry::Size;
use cellfmt_layout::LayoutError;
use cellfmt_render::RenderBuffer;
use cellfmt_text::{align_offset, display_width, max_line_width, wrap_text};

use crate::block::Block;
use crate::element::{BlockElement, RenderContext};

/// A run of text, wrapped to the width it is given.
///
/// Wrapping follows the element's `text_wrap`; each line is placed
/// according to `text_align`.
#[derive(Debug, Clone, Default)]
pub struct Span {
    block: Block,
    text: String,
    lines: Vec<String>,
}

impl Span {
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            block: Block::new(),
            text: text.into(),
            lines: Vec::new(),
        }
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn set_text(&mut self, text: impl Into<String>) {
        self.text = text.into();
        self.lines.clear();
    }

    /// Lines as wrapped by the last arrange.
    pub fn lines(&self) -> &[String] {
        &self.lines
    }

    fn wrap(&self, width: u32) -> Vec<String> {
        wrap_text(&self.text, width, self.block.props.text_wrap)
    }
}

impl BlockElement for Span {
    fn block(&self) -> &Block {
        &self.block
    }

    fn block_mut(&mut self) -> &mut Block {
        &mut self.block
    }

    fn measure_override(&mut self, available: Size) -> Result<Size, LayoutError> {
        let lines = self.wrap(available.width);
        let height = u32::try_from(lines.len()).unwrap_or(u32::MAX - 1);
        Ok(Size::new(max_line_width(&lines), height))
    }

    fn arrange_override(&mut self, final_size: Size) -> Size {
        self.lines = self.wrap(final_size.width);
        final_size
    }

    fn render_override(&self, buffer: &mut RenderBuffer, ctx: &RenderContext) {
        let width = self.block.layout.render_size.width;
        let align = self.block.props.text_align;
        for (row, line) in self.lines.iter().enumerate() {
            let Ok(row) = i32::try_from(row) else {
                break;
            };
            let dx = align_offset(width, display_width(line), align);
            let x = ctx.origin.x.saturating_add(i32::try_from(dx).unwrap_or(i32::MAX));
            buffer.draw_text(x, ctx.origin.y.saturating_add(row), line, ctx.color);
        }
    }
}

impl From<&str> for Span {
    fn from(text: &str) -> Self {
        Self::new(text)
    }
}

impl From<String> for Span {
    fn from(text: String) -> Self {
        Self::new(text)
    }
}
