#![forbid(unsafe_code)]

//! User-defined leaf elements.

use std::fmt;

use cellfmt_core::geometry::Size;
use cellfmt_layout::LayoutError;
use cellfmt_render::RenderBuffer;

use crate::block::Block;
use crate::element::{BlockElement, RenderContext};

/// Layout and paint hooks for a [`Custom`] element.
///
/// The engine applies margins, bounds and alignment around these hooks, the
/// same as for built-in kinds. `measure` must return a finite size; an
/// infinite one fails the layout pass.
pub trait CustomLayout: fmt::Debug + Send {
    /// Content size for `available` (margin already removed).
    fn measure(&mut self, available: Size) -> Size;

    /// Size used within `final_size`.
    fn arrange(&mut self, final_size: Size) -> Size {
        final_size
    }

    /// Paint at `ctx.origin` within the element's render size `size`.
    fn render(&self, _buffer: &mut RenderBuffer, _ctx: &RenderContext, _size: Size) {}

    /// Clone into a new box; lets elements holding hooks be cloned.
    fn clone_box(&self) -> Box<dyn CustomLayout>;
}

impl Clone for Box<dyn CustomLayout> {
    fn clone(&self) -> Self {
        self.clone_box()
    }
}

/// A leaf element driven by a [`CustomLayout`].
#[derive(Debug, Clone)]
pub struct Custom {
    block: Block,
    hooks: Box<dyn CustomLayout>,
}

impl Custom {
    pub fn new(hooks: impl CustomLayout + 'static) -> Self {
        Self {
            block: Block::new(),
            hooks: Box::new(hooks),
        }
    }

    pub fn hooks(&self) -> &dyn CustomLayout {
        self.hooks.as_ref()
    }
}

impl BlockElement for Custom {
    fn block(&self) -> &Block {
        &self.block
    }

    fn block_mut(&mut self) -> &mut Block {
        &mut self.block
    }

    fn measure_override(&mut self, available: Size) -> Result<Size, LayoutError> {
        Ok(self.hooks.measure(available))
    }

    fn arrange_override(&mut self, final_size: Size) -> Size {
        self.hooks.arrange(final_size)
    }

    fn render_override(&self, buffer: &mut RenderBuffer, ctx: &RenderContext) {
        self.hooks
            .render(buffer, ctx, self.block.layout.render_size);
    }
}
