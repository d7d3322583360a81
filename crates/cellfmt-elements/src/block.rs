#![forbid(unsafe_code)]

//! Properties and per-pass layout state shared by every element.

use cellfmt_core::geometry::{Rect, Size, Thickness, Vector};
use cellfmt_layout::{HorizontalAlignment, SizeBounds, VerticalAlignment};
use cellfmt_render::Color;
use cellfmt_text::{TextAlignment, TextWrapping};

/// Whether an element takes part in layout and painting.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Visibility {
    #[default]
    Visible,
    /// Laid out normally, nothing painted for it or its descendants.
    Hidden,
    /// Takes no space and is not painted.
    Collapsed,
}

/// Declared properties of a block element.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct BlockProps {
    /// Foreground; `None` inherits from the parent.
    pub color: Option<Color>,
    /// Background; `None` leaves the parent's background showing.
    pub background: Option<Color>,
    pub visibility: Visibility,
    pub bounds: SizeBounds,
    pub align: HorizontalAlignment,
    pub valign: VerticalAlignment,
    pub text_align: TextAlignment,
    pub text_wrap: TextWrapping,
    pub margin: Thickness,
}

/// Results of the last measure/arrange pass over an element.
///
/// Offsets and rectangles are relative to the parent's render origin, except
/// `layout_clip`, which is relative to the element's own origin.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct LayoutInfo {
    /// Size requested from the parent, margin included, never above the
    /// available size.
    pub desired_size: Size,
    /// Content size raised to the minimum, before max clipping.
    pub unclipped_desired_size: Size,
    pub render_size: Size,
    pub actual_offset: Vector,
    /// Slot granted by the parent, margin included.
    pub render_slot_rect: Rect,
    pub layout_clip: Rect,
}

/// Properties plus layout state; embedded in every element.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Block {
    pub props: BlockProps,
    pub layout: LayoutInfo,
}

impl Block {
    /// Block with default properties.
    pub fn new() -> Self {
        Self::default()
    }

    #[inline]
    pub fn is_collapsed(&self) -> bool {
        self.props.visibility == Visibility::Collapsed
    }
}
