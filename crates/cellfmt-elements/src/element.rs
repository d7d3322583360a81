#![forbid(unsafe_code)]

//! The element tree and the measure/arrange/render protocol.
//!
//! # Protocol
//!
//! Layout is two passes over the tree:
//!
//! 1. [`Element::measure`] walks bottom-up. Each element is offered an
//!    available size and records the size it wants. The shared steps (margin,
//!    min/max bounds, clamping to the available size) live here; each kind
//!    only supplies its content size through
//!    [`BlockElement::measure_override`].
//! 2. [`Element::arrange`] walks top-down. Each element receives its slot,
//!    settles on a render size through [`BlockElement::arrange_override`],
//!    and computes its offset and clip from its alignment.
//!
//! [`Element::render`] then paints parents before children, each clipped to
//! its own layout clip within its parent's.
//!
//! # Invariants
//!
//! 1. `desired_size <= available` component-wise after a successful measure.
//! 2. No layout state survives from a previous pass: measure resets it.
//! 3. A measure override returning an infinite size fails the pass with
//!    [`LayoutError::InfiniteDesiredSize`].

use cellfmt_core::geometry::{Rect, Size, Vector};
use cellfmt_layout::{HorizontalAlignment, LayoutError, VerticalAlignment, alignment_offset};
use cellfmt_render::{Color, RenderBuffer};

use crate::block::{Block, BlockProps, LayoutInfo, Visibility};
use crate::custom::Custom;
use crate::div::Div;
use crate::grid::Grid;
use crate::line::Line;
use crate::span::Span;

/// Capability interface of every element kind.
///
/// The engine in [`Element`] owns the shared steps of each pass; these
/// methods supply the kind-specific parts.
pub trait BlockElement {
    fn block(&self) -> &Block;

    fn block_mut(&mut self) -> &mut Block;

    /// Content size for `available`, which already excludes the margin and
    /// respects the element's min/max bounds. Must be finite.
    fn measure_override(&mut self, available: Size) -> Result<Size, LayoutError>;

    /// Arrange content within `final_size` and return the size used.
    ///
    /// The default suits leaves: use everything offered.
    fn arrange_override(&mut self, final_size: Size) -> Size {
        final_size
    }

    /// Paint content. `ctx.origin` is this element's absolute render origin;
    /// background and foreground fills have already been applied.
    fn render_override(&self, _buffer: &mut RenderBuffer, _ctx: &RenderContext) {}

    /// Children in paint order.
    fn children(&self) -> &[Element] {
        &[]
    }
}

/// A node of the document tree.
#[derive(Debug, Clone)]
pub enum Element {
    Div(Div),
    Span(Span),
    Line(Line),
    Grid(Grid),
    Custom(Custom),
}

/// Inherited paint state handed from parent to child.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RenderContext {
    /// Absolute document position of the element's render origin.
    pub origin: Vector,
    /// Effective foreground.
    pub color: Color,
    /// Effective background, if any ancestor sets one.
    pub background: Option<Color>,
}

impl RenderContext {
    /// Context above the root: document origin, default colors.
    pub const fn root() -> Self {
        Self {
            origin: Vector::ZERO,
            color: Color::DEFAULT_FOREGROUND,
            background: None,
        }
    }

    /// Context with the given color defaults.
    pub const fn with_colors(color: Color, background: Option<Color>) -> Self {
        Self {
            origin: Vector::ZERO,
            color,
            background,
        }
    }
}

impl Default for RenderContext {
    fn default() -> Self {
        Self::root()
    }
}

impl Element {
    /// Kind name used in diagnostics.
    pub fn kind(&self) -> &'static str {
        match self {
            Self::Div(_) => "Div",
            Self::Span(_) => "Span",
            Self::Line(_) => "Line",
            Self::Grid(_) => "Grid",
            Self::Custom(_) => "Custom",
        }
    }

    fn as_dyn(&self) -> &dyn BlockElement {
        match self {
            Self::Div(e) => e,
            Self::Span(e) => e,
            Self::Line(e) => e,
            Self::Grid(e) => e,
            Self::Custom(e) => e,
        }
    }

    fn as_dyn_mut(&mut self) -> &mut dyn BlockElement {
        match self {
            Self::Div(e) => e,
            Self::Span(e) => e,
            Self::Line(e) => e,
            Self::Grid(e) => e,
            Self::Custom(e) => e,
        }
    }

    #[inline]
    pub fn props(&self) -> &BlockProps {
        &self.as_dyn().block().props
    }

    #[inline]
    pub fn props_mut(&mut self) -> &mut BlockProps {
        &mut self.as_dyn_mut().block_mut().props
    }

    /// Layout results of the last pass.
    #[inline]
    pub fn layout(&self) -> &LayoutInfo {
        &self.as_dyn().block().layout
    }

    #[inline]
    pub fn desired_size(&self) -> Size {
        self.layout().desired_size
    }

    #[inline]
    pub fn render_size(&self) -> Size {
        self.layout().render_size
    }

    #[inline]
    pub fn actual_offset(&self) -> Vector {
        self.layout().actual_offset
    }

    pub fn children(&self) -> &[Element] {
        self.as_dyn().children()
    }

    /// Measure pass: compute `desired_size` for `available`.
    ///
    /// `available` includes room for the margin and may be infinite on
    /// either axis.
    pub fn measure(&mut self, available: Size) -> Result<(), LayoutError> {
        let kind = self.kind();
        let node = self.as_dyn_mut();
        node.block_mut().layout = LayoutInfo::default();

        let props = node.block().props;
        if props.visibility == Visibility::Collapsed {
            return Ok(());
        }

        let bounds = props.bounds.resolve();
        let constrained = bounds.clamp(available - props.margin);

        let content = node.measure_override(constrained)?;
        if content.is_infinite() {
            cellfmt_core::error!(
                element = kind,
                width = content.width,
                height = content.height,
                "measure returned an infinite size"
            );
            return Err(LayoutError::InfiniteDesiredSize {
                element: kind,
                size: content,
            });
        }

        let unclipped = content.max(bounds.min);
        let clipped = unclipped.min(bounds.max);
        let desired = (clipped + props.margin).min(available);

        let layout = &mut node.block_mut().layout;
        layout.unclipped_desired_size = unclipped;
        layout.desired_size = desired;

        cellfmt_core::trace!(
            element = kind,
            available_width = available.width,
            available_height = available.height,
            desired_width = desired.width,
            desired_height = desired.height,
            "measured"
        );
        Ok(())
    }

    /// Arrange pass: settle size and position inside `final_rect`.
    ///
    /// `final_rect` is relative to the parent's render origin and includes
    /// the margin.
    pub fn arrange(&mut self, final_rect: Rect) {
        let node = self.as_dyn_mut();
        let props = node.block().props;

        if props.visibility == Visibility::Collapsed {
            let layout = &mut node.block_mut().layout;
            layout.render_slot_rect = Rect::EMPTY;
            layout.render_size = Size::EMPTY;
            layout.actual_offset = Vector::ZERO;
            layout.layout_clip = Rect::EMPTY;
            return;
        }

        let bounds = props.bounds.resolve();
        let unclipped = node.block().layout.unclipped_desired_size;
        let client = final_rect.size() - props.margin;

        let mut arrange_size = client.max(unclipped);
        if props.align != HorizontalAlignment::Stretch {
            arrange_size.width = unclipped.width;
        }
        if props.valign != VerticalAlignment::Stretch {
            arrange_size.height = unclipped.height;
        }

        let render_size = node.arrange_override(arrange_size);
        let offset = alignment_offset(client, render_size, bounds.max, props.align, props.valign);

        let actual_offset = offset + final_rect.origin() + props.margin.top_left();
        let layout = &mut node.block_mut().layout;
        layout.render_slot_rect = final_rect;
        layout.render_size = render_size;
        layout.actual_offset = actual_offset;
        layout.layout_clip = Rect::at(-offset, client);

        cellfmt_core::trace!(
            element = self.kind(),
            x = actual_offset.x,
            y = actual_offset.y,
            width = render_size.width,
            height = render_size.height,
            "arranged"
        );
    }

    /// Paint this element and its descendants.
    ///
    /// `parent` carries the parent's absolute origin and effective colors.
    pub fn render(&self, buffer: &mut RenderBuffer, parent: &RenderContext) {
        let node = self.as_dyn();
        let block = node.block();
        if block.props.visibility != Visibility::Visible {
            return;
        }

        let origin = parent.origin + block.layout.actual_offset;
        let ctx = RenderContext {
            origin,
            color: block.props.color.unwrap_or(parent.color),
            background: block.props.background.or(parent.background),
        };

        let mut guard = ScissorGuard::new(buffer, block.layout.layout_clip.offset(origin));
        let buffer = guard.buffer_mut();

        let area = Rect::at(origin, block.layout.render_size);
        if let Some(background) = block.props.background {
            buffer.fill_background(area, background);
        }
        buffer.fill_foreground(area, ctx.color);
        node.render_override(buffer, &ctx);

        for child in node.children() {
            child.render(buffer, &ctx);
        }
    }
}

/// Pops the scissor it pushed when dropped.
struct ScissorGuard<'a> {
    buffer: &'a mut RenderBuffer,
}

impl<'a> ScissorGuard<'a> {
    fn new(buffer: &'a mut RenderBuffer, rect: Rect) -> Self {
        buffer.push_scissor(rect);
        Self { buffer }
    }

    fn buffer_mut(&mut self) -> &mut RenderBuffer {
        self.buffer
    }
}

impl Drop for ScissorGuard<'_> {
    fn drop(&mut self) {
        self.buffer.pop_scissor();
    }
}

impl From<Div> for Element {
    fn from(e: Div) -> Self {
        Self::Div(e)
    }
}

impl From<Span> for Element {
    fn from(e: Span) -> Self {
        Self::Span(e)
    }
}

impl From<Line> for Element {
    fn from(e: Line) -> Self {
        Self::Line(e)
    }
}

impl From<Grid> for Element {
    fn from(e: Grid) -> Self {
        Self::Grid(e)
    }
}

impl From<Custom> for Element {
    fn from(e: Custom) -> Self {
        Self::Custom(e)
    }
}

impl From<&str> for Element {
    fn from(text: &str) -> Self {
        Self::Span(Span::new(text))
    }
}

impl From<String> for Element {
    fn from(text: String) -> Self {
        Self::Span(Span::new(text))
    }
}
