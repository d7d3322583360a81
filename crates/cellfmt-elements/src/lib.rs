#![forbid(unsafe_code)]

//! Document element tree for cell layouts.
//!
//! Elements form an owned tree ([`Element`]) of a closed set of kinds:
//!
//! - [`Div`] - block container, passes through or stacks its children
//! - [`Span`] - wrapped text run
//! - [`Line`] - horizontal or vertical rule
//! - [`Grid`] - Auto / Char / Star tracks with row-major auto-placement
//! - [`Custom`] - leaf driven by user [`CustomLayout`] hooks
//!
//! Every kind implements [`BlockElement`]; [`Element::measure`],
//! [`Element::arrange`] and [`Element::render`] run the shared protocol
//! around those hooks. [`BlockBuilder`] provides the common property setters.
//!
//! # Example
//!
//! ```
//! use cellfmt_core::geometry::{Rect, Size};
//! use cellfmt_elements::{BlockBuilder, Div, Element, RenderContext, Span};
//! use cellfmt_render::RenderBuffer;
//!
//! let mut root = Element::from(Div::new().margin(1).child(Span::new("hi")));
//! root.measure(Size::new(6, 3)).unwrap();
//! root.arrange(Rect::new(0, 0, 6, 3));
//!
//! let mut buffer = RenderBuffer::new(Rect::new(0, 0, 6, 3));
//! root.render(&mut buffer, &RenderContext::root());
//! assert_eq!(buffer.to_lines(), vec!["      ", " hi   ", "      "]);
//! ```

pub mod block;
pub mod builder;
pub mod custom;
pub mod div;
pub mod element;
pub mod grid;
pub mod line;
pub mod span;
pub mod track_spec;

pub use block::{Block, BlockProps, LayoutInfo, Visibility};
pub use builder::BlockBuilder;
pub use custom::{Custom, CustomLayout};
pub use div::Div;
pub use element::{BlockElement, Element, RenderContext};
pub use grid::{CellPos, Column, Grid, MAX_ROWS, ResolvedTracks, Row};
pub use line::Line;
pub use span::Span;
pub use track_spec::TrackSpec;
