#![forbid(unsafe_code)]

//! cellfmt public facade.
//!
//! Lays out documents of nested blocks, text, rules and grids on a
//! character-cell surface, then paints them into cell buffers for terminals
//! or text files. This crate re-exports the working set from the member
//! crates and adds the [`Renderer`] that drives a pass from a [`Document`]
//! to a [`RenderTarget`].
//!
//! ```
//! use cellfmt::prelude::*;
//!
//! let grid = Grid::new()
//!     .with_columns(tracks![4, GridLength::Star(1.0)])
//!     .unwrap()
//!     .child(Span::new("key"))
//!     .child(Span::new("value"));
//! let mut doc = Document::new(grid);
//!
//! let mut pages = PageCollector::new();
//! Renderer::new()
//!     .render(&mut doc, &mut pages, Rect::new(0, 0, 12, 1))
//!     .unwrap();
//! assert_eq!(pages.lines(), vec!["key value   "]);
//! ```

pub mod document;
pub mod renderer;
pub mod target;

pub use document::Document;
pub use renderer::{Pagination, RenderError, RenderOptions, Renderer};
pub use target::{PageCollector, RenderTarget, TextTarget};

// --- Core re-exports -------------------------------------------------------

pub use cellfmt_core::geometry::{INFINITE, Rect, Size, Thickness, Vector};

// --- Layout re-exports -----------------------------------------------------

pub use cellfmt_layout::{
    ConfigError, GridLength, HorizontalAlignment, LayoutError, Orientation, VerticalAlignment,
};

// --- Text re-exports -------------------------------------------------------

pub use cellfmt_text::{TextAlignment, TextWrapping, WrapOptions};

// --- Render re-exports -----------------------------------------------------

pub use cellfmt_render::{Cell, Color, LineWidth, RenderBuffer};

// --- Element re-exports ----------------------------------------------------

pub use cellfmt_elements::{
    BlockBuilder, BlockElement, CellPos, Column, Custom, CustomLayout, Div, Element, Grid, Line,
    MAX_ROWS, RenderContext, Row, Span, TrackSpec, Visibility, tracks,
};

// --- Prelude --------------------------------------------------------------

pub mod prelude {
    pub use crate::{
        BlockBuilder, Color, Column, Custom, CustomLayout, Div, Document, Element, Grid,
        GridLength, HorizontalAlignment, Line, LineWidth, Orientation, PageCollector, Pagination,
        Rect, RenderOptions, RenderTarget, Renderer, Row, Size, Span, TextAlignment, TextTarget,
        TextWrapping, Thickness, VerticalAlignment, Visibility, tracks,
    };
}
