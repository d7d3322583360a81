#![forbid(unsafe_code)]

//! Render orchestration: measure, arrange, paginate, paint, deliver.
//!
//! A pass over a [`Document`] runs in four steps:
//!
//! 1. Measure the root at the target area's size. When paginating, the
//!    height is unconstrained so the whole document is laid out once.
//! 2. Arrange the root at the area origin. An infinite dimension resolves
//!    to the root's desired size.
//! 3. Slice the arranged document into pages. Under [`Pagination::Clip`]
//!    there is exactly one page, the area itself; under
//!    [`Pagination::Paginate`] consecutive slices of the area's height follow
//!    one another down the document and the last one is cut to what remains.
//! 4. Fill each page buffer with the document background, if any, paint the
//!    tree into it and hand the pages to the target in order, then call
//!    [`RenderTarget::finish`].
//!
//! A layout failure stops the pass before any page reaches the target.

use std::fmt;
use std::io;

use cellfmt_core::geometry::{INFINITE, Rect, Size};
use cellfmt_layout::LayoutError;
use cellfmt_render::RenderBuffer;

use crate::document::Document;
use crate::target::RenderTarget;

/// How content taller than the target area is handled.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Pagination {
    /// One page; content below the area is clipped.
    #[default]
    Clip,
    /// Successive pages of the area's height, split at cell rows.
    Paginate,
}

/// Renderer configuration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct RenderOptions {
    pub pagination: Pagination,
}

impl RenderOptions {
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn pagination(mut self, pagination: Pagination) -> Self {
        self.pagination = pagination;
        self
    }
}

/// Failure of a render pass.
#[derive(Debug)]
pub enum RenderError {
    /// Measuring the tree failed; nothing was rendered.
    Layout(LayoutError),
    /// The target rejected a page.
    Io(io::Error),
}

impl fmt::Display for RenderError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Layout(err) => write!(f, "layout failed: {err}"),
            Self::Io(err) => write!(f, "render target failed: {err}"),
        }
    }
}

impl std::error::Error for RenderError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Layout(err) => Some(err),
            Self::Io(err) => Some(err),
        }
    }
}

impl From<LayoutError> for RenderError {
    fn from(err: LayoutError) -> Self {
        Self::Layout(err)
    }
}

impl From<io::Error> for RenderError {
    fn from(err: io::Error) -> Self {
        Self::Io(err)
    }
}

/// Drives layout and painting of documents.
///
/// # Example
///
/// ```
/// use cellfmt::prelude::*;
///
/// let mut doc = Document::new(Div::new().margin(1).child(Span::new("hello")));
/// let mut out = TextTarget::plain(Vec::new());
/// let pages = Renderer::new()
///     .render(&mut doc, &mut out, Rect::new(0, 0, 10, 3))
///     .unwrap();
/// assert_eq!(pages, 1);
/// assert_eq!(String::from_utf8(out.into_inner()).unwrap(), "\n hello\n\n");
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct Renderer {
    options: RenderOptions,
}

impl Renderer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_options(options: RenderOptions) -> Self {
        Self { options }
    }

    #[inline]
    pub fn options(&self) -> RenderOptions {
        self.options
    }

    fn paginating(&self, area: Rect) -> bool {
        self.options.pagination == Pagination::Paginate
            && area.height != INFINITE
            && area.height > 0
    }

    /// Measure and arrange `doc` for `area`, returning the arranged extent.
    pub fn layout(&self, doc: &mut Document, area: Rect) -> Result<Rect, LayoutError> {
        let paginate = self.paginating(area);
        let available = if paginate {
            area.size().with_height(INFINITE)
        } else {
            area.size()
        };

        let root = doc.root_mut();
        root.measure(available)?;
        let desired = root.desired_size();

        let resolve = |dim: u32, want: u32| if dim == INFINITE { want } else { dim };
        let height = if paginate {
            desired.height.max(area.height)
        } else {
            resolve(area.height, desired.height)
        };
        let extent = Rect::at(
            area.origin(),
            Size::new(resolve(area.width, desired.width), height),
        );
        root.arrange(extent);
        cellfmt_core::trace!(
            width = extent.width,
            height = extent.height,
            "document arranged"
        );
        Ok(extent)
    }

    /// Page rectangles covering the arranged `extent`.
    fn page_rects(&self, area: Rect, extent: Rect) -> Vec<Rect> {
        if !self.paginating(area) {
            return vec![extent];
        }
        let page = area.height;
        let total = extent.height;
        let count = total.div_ceil(page).max(1);
        (0..count)
            .map(|i| {
                let top = i * page;
                let height = page.min(total - top);
                let y = i64::from(extent.y) + i64::from(top);
                Rect::new(
                    extent.x,
                    i32::try_from(y).unwrap_or(i32::MAX),
                    extent.width,
                    height,
                )
            })
            .collect()
    }

    /// Lay out `doc` and paint every page.
    pub fn render_pages(
        &self,
        doc: &mut Document,
        area: Rect,
    ) -> Result<Vec<RenderBuffer>, LayoutError> {
        let span = cellfmt_core::debug_span!(
            "render_pass",
            width = area.width,
            height = area.height
        );
        let _guard = span.enter();

        let extent = self.layout(doc, area)?;
        let ctx = doc.context();
        let pages: Vec<RenderBuffer> = self
            .page_rects(area, extent)
            .into_iter()
            .map(|rect| {
                let mut buffer = RenderBuffer::new(rect);
                if let Some(background) = ctx.background {
                    buffer.fill_background(rect, background);
                }
                doc.root().render(&mut buffer, &ctx);
                buffer
            })
            .collect();
        cellfmt_core::debug!(pages = pages.len(), "document paginated");
        Ok(pages)
    }

    /// Lay out `doc` and paint its first page.
    pub fn render_to_buffer(
        &self,
        doc: &mut Document,
        area: Rect,
    ) -> Result<RenderBuffer, LayoutError> {
        let mut pages = self.render_pages(doc, area)?;
        if pages.is_empty() {
            return Ok(RenderBuffer::new(Rect::at(area.origin(), Size::EMPTY)));
        }
        Ok(pages.swap_remove(0))
    }

    /// Render `doc` into `target`, returning the number of pages delivered.
    ///
    /// Nothing reaches the target when layout fails.
    pub fn render<T: RenderTarget + ?Sized>(
        &self,
        doc: &mut Document,
        target: &mut T,
        area: Rect,
    ) -> Result<usize, RenderError> {
        let pages = self.render_pages(doc, area).map_err(|err| {
            cellfmt_core::error!(%err, "render pass aborted");
            err
        })?;
        for page in &pages {
            target.render(page)?;
        }
        target.finish()?;
        Ok(pages.len())
    }
}
