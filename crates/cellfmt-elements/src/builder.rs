#![forbid(unsafe_code)]

//! Property setters shared by every element kind.

use cellfmt_core::geometry::Thickness;
use cellfmt_layout::{HorizontalAlignment, VerticalAlignment};
use cellfmt_render::Color;
use cellfmt_text::{TextAlignment, TextWrapping};

use crate::block::{BlockProps, Visibility};
use crate::element::{BlockElement, Element};

/// Consuming builder methods for [`BlockProps`].
///
/// Implemented for every element kind and for [`Element`] itself:
///
/// ```
/// use cellfmt_elements::{BlockBuilder, BlockElement, Div, Span};
/// use cellfmt_render::Color;
///
/// let div = Div::new()
///     .margin(1)
///     .min_width(10)
///     .color(Color::Yellow)
///     .child(Span::new("abc"));
/// assert_eq!(div.block().props.bounds.min_width, 10);
/// ```
pub trait BlockBuilder: Sized {
    fn props_mut(&mut self) -> &mut BlockProps;

    #[must_use]
    fn margin(mut self, margin: impl Into<Thickness>) -> Self {
        self.props_mut().margin = margin.into();
        self
    }

    #[must_use]
    fn color(mut self, color: Color) -> Self {
        self.props_mut().color = Some(color);
        self
    }

    #[must_use]
    fn background(mut self, color: Color) -> Self {
        self.props_mut().background = Some(color);
        self
    }

    #[must_use]
    fn visibility(mut self, visibility: Visibility) -> Self {
        self.props_mut().visibility = visibility;
        self
    }

    /// Explicit width.
    #[must_use]
    fn width(mut self, width: u32) -> Self {
        self.props_mut().bounds.width = Some(width);
        self
    }

    /// Explicit height.
    #[must_use]
    fn height(mut self, height: u32) -> Self {
        self.props_mut().bounds.height = Some(height);
        self
    }

    #[must_use]
    fn min_width(mut self, min: u32) -> Self {
        self.props_mut().bounds.min_width = min;
        self
    }

    #[must_use]
    fn min_height(mut self, min: u32) -> Self {
        self.props_mut().bounds.min_height = min;
        self
    }

    #[must_use]
    fn max_width(mut self, max: u32) -> Self {
        self.props_mut().bounds.max_width = Some(max);
        self
    }

    #[must_use]
    fn max_height(mut self, max: u32) -> Self {
        self.props_mut().bounds.max_height = Some(max);
        self
    }

    #[must_use]
    fn align(mut self, align: HorizontalAlignment) -> Self {
        self.props_mut().align = align;
        self
    }

    #[must_use]
    fn valign(mut self, valign: VerticalAlignment) -> Self {
        self.props_mut().valign = valign;
        self
    }

    #[must_use]
    fn text_align(mut self, align: TextAlignment) -> Self {
        self.props_mut().text_align = align;
        self
    }

    #[must_use]
    fn text_wrap(mut self, wrap: TextWrapping) -> Self {
        self.props_mut().text_wrap = wrap;
        self
    }
}

impl<T: BlockElement> BlockBuilder for T {
    fn props_mut(&mut self) -> &mut BlockProps {
        &mut self.block_mut().props
    }
}

impl BlockBuilder for Element {
    fn props_mut(&mut self) -> &mut BlockProps {
        Element::props_mut(self)
    }
}
