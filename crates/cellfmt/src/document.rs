#![forbid(unsafe_code)]

//! The document: a root element plus document-wide paint defaults.

use cellfmt_elements::{Element, RenderContext};
use cellfmt_render::Color;

/// An element tree ready for rendering.
///
/// The root is owned; cloning a document deep-copies the tree and detaches
/// all layout state.
#[derive(Debug, Clone)]
pub struct Document {
    root: Element,
    color: Color,
    background: Option<Color>,
}

impl Document {
    /// Wrap a root element with the default foreground and no background.
    pub fn new(root: impl Into<Element>) -> Self {
        Self {
            root: root.into(),
            color: Color::DEFAULT_FOREGROUND,
            background: None,
        }
    }

    /// Foreground inherited by elements that set none.
    #[must_use]
    pub fn color(mut self, color: Color) -> Self {
        self.color = color;
        self
    }

    /// Background inherited by elements that set none.
    #[must_use]
    pub fn background(mut self, background: Color) -> Self {
        self.background = Some(background);
        self
    }

    #[inline]
    pub fn root(&self) -> &Element {
        &self.root
    }

    #[inline]
    pub fn root_mut(&mut self) -> &mut Element {
        &mut self.root
    }

    /// Replace the root, returning the old one.
    pub fn set_root(&mut self, root: impl Into<Element>) -> Element {
        std::mem::replace(&mut self.root, root.into())
    }

    /// Paint context above the root.
    pub(crate) fn context(&self) -> RenderContext {
        RenderContext::with_colors(self.color, self.background)
    }
}

impl From<Element> for Document {
    fn from(root: Element) -> Self {
        Self::new(root)
    }
}
