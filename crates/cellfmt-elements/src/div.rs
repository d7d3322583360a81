#![forbid(unsafe_code)]

//! Block container.

use cellfmt_core::geometry::{INFINITE, Rect, Size, add_dim};
use cellfmt_layout::{LayoutError, Orientation};

use crate::block::Block;
use crate::element::{BlockElement, Element};

/// A block container.
///
/// A single child fills the div. Several children are stacked along the
/// div's [`Orientation`] (top to bottom by default), each given its desired
/// extent along the stack and the div's full extent across it.
#[derive(Debug, Clone, Default)]
pub struct Div {
    block: Block,
    orientation: Orientation,
    children: Vec<Element>,
}

impl Div {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the stacking direction for multiple children.
    #[must_use]
    pub fn orientation(mut self, orientation: Orientation) -> Self {
        self.orientation = orientation;
        self
    }

    /// Append a child.
    #[must_use]
    pub fn child(mut self, child: impl Into<Element>) -> Self {
        self.children.push(child.into());
        self
    }

    /// Append several children.
    #[must_use]
    pub fn children<I, E>(mut self, children: I) -> Self
    where
        I: IntoIterator<Item = E>,
        E: Into<Element>,
    {
        self.children.extend(children.into_iter().map(Into::into));
        self
    }

    pub fn push(&mut self, child: impl Into<Element>) {
        self.children.push(child.into());
    }

    pub fn children_mut(&mut self) -> &mut Vec<Element> {
        &mut self.children
    }
}

impl BlockElement for Div {
    fn block(&self) -> &Block {
        &self.block
    }

    fn block_mut(&mut self) -> &mut Block {
        &mut self.block
    }

    fn measure_override(&mut self, available: Size) -> Result<Size, LayoutError> {
        if let [only] = self.children.as_mut_slice() {
            only.measure(available)?;
            return Ok(only.desired_size());
        }

        let mut desired = Size::EMPTY;
        for child in &mut self.children {
            match self.orientation {
                Orientation::Vertical => {
                    child.measure(available.with_height(INFINITE))?;
                    let d = child.desired_size();
                    desired.width = desired.width.max(d.width);
                    desired.height = add_dim(desired.height, d.height);
                }
                Orientation::Horizontal => {
                    child.measure(available.with_width(INFINITE))?;
                    let d = child.desired_size();
                    desired.width = add_dim(desired.width, d.width);
                    desired.height = desired.height.max(d.height);
                }
            }
        }
        Ok(desired)
    }

    fn arrange_override(&mut self, final_size: Size) -> Size {
        if let [only] = self.children.as_mut_slice() {
            only.arrange(Rect::from_size(final_size));
            return final_size;
        }

        let mut along = 0i64;
        for child in &mut self.children {
            let d = child.desired_size();
            let at = along.clamp(0, i64::from(i32::MAX)) as i32;
            match self.orientation {
                Orientation::Vertical => {
                    child.arrange(Rect::new(0, at, final_size.width, d.height));
                    along += i64::from(d.height);
                }
                Orientation::Horizontal => {
                    child.arrange(Rect::new(at, 0, d.width, final_size.height));
                    along += i64::from(d.width);
                }
            }
        }
        final_size
    }

    fn children(&self) -> &[Element] {
        &self.children
    }
}
