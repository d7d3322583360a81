#![forbid(unsafe_code)]

//! Tabular grid.
//!
//! # Sizing
//!
//! Columns resolve first, then rows, then every cell is measured at its final
//! size:
//!
//! 1. Columns: `Char(n)` is `n`; `Auto` is the widest cell in the column
//!    measured with unlimited space; `Star` splits the leftover width by
//!    weight.
//! 2. Rows: the same rules, with `Auto` rows measuring their cells at the
//!    already resolved column widths and unlimited height. Wrapped text
//!    therefore grows rows, never columns.
//! 3. Each cell is measured at (column width, row height) and later arranged
//!    in exactly that rectangle.
//!
//! Tracks resolved during measure are kept and reused by arrange.
//!
//! # Placement
//!
//! Children added with [`Grid::cell`] go where they are told. Children added
//! with [`Grid::child`] fill the remaining cells in row-major order. Rows
//! needed beyond the declared ones are implicit `Auto` rows, up to
//! [`MAX_ROWS`]. A grid without columns measures to nothing.

use std::collections::HashSet;

use cellfmt_core::geometry::{INFINITE, Rect, Size};
use cellfmt_layout::{
    ConfigError, GridLength, LayoutError, resolve_tracks, total_extent, track_offsets,
};
use smallvec::SmallVec;

use crate::block::Block;
use crate::element::{BlockElement, Element};
use crate::track_spec::TrackSpec;

/// Rows a grid may address, declared and implicit together.
pub const MAX_ROWS: usize = 1 << 16;

/// A column definition.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Column {
    pub width: GridLength,
}

impl Column {
    pub const fn new(width: GridLength) -> Self {
        Self { width }
    }
}

/// A row definition.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Row {
    pub height: GridLength,
}

impl Row {
    pub const fn new(height: GridLength) -> Self {
        Self { height }
    }
}

/// Zero-based grid cell address.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct CellPos {
    pub row: usize,
    pub column: usize,
}

impl CellPos {
    pub const fn new(row: usize, column: usize) -> Self {
        Self { row, column }
    }
}

/// Track sizes and cell addresses from the last measure.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ResolvedTracks {
    pub columns: Vec<u32>,
    pub rows: Vec<u32>,
    /// Cell of each child, in child order.
    pub cells: Vec<CellPos>,
}

/// A grid of Auto / Char / Star tracks.
///
/// ```
/// use cellfmt_core::geometry::Size;
/// use cellfmt_elements::{Element, Grid, Span, tracks};
/// use cellfmt_layout::GridLength;
///
/// let grid = Grid::new()
///     .with_columns(tracks![GridLength::Auto, GridLength::Star(1.0)])
///     .unwrap()
///     .child(Span::new("key"))
///     .child(Span::new("value"));
/// let mut root = Element::from(grid);
/// root.measure(Size::new(20, 5)).unwrap();
/// assert_eq!(root.desired_size(), Size::new(20, 1));
/// ```
#[derive(Debug, Clone, Default)]
pub struct Grid {
    block: Block,
    columns: Vec<Column>,
    rows: Vec<Row>,
    children: Vec<Element>,
    placements: Vec<Option<CellPos>>,
    resolved: ResolvedTracks,
}

impl Grid {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn columns(&self) -> &[Column] {
        &self.columns
    }

    pub fn rows(&self) -> &[Row] {
        &self.rows
    }

    /// Tracks and cells from the last measure.
    pub fn resolved(&self) -> &ResolvedTracks {
        &self.resolved
    }

    /// Append one column definition.
    pub fn add_column(&mut self, column: Column) -> Result<&mut Self, ConfigError> {
        column.width.validate()?;
        self.columns.push(column);
        Ok(self)
    }

    /// Append one row definition.
    pub fn add_row(&mut self, row: Row) -> Result<&mut Self, ConfigError> {
        row.height.validate()?;
        self.rows.push(row);
        Ok(self)
    }

    /// Append columns from any [`TrackSpec`], flattening nested lists.
    ///
    /// Nothing is added if any specifier is invalid.
    pub fn add_columns(&mut self, spec: impl Into<TrackSpec>) -> Result<&mut Self, ConfigError> {
        let columns = spec.into().into_columns()?;
        self.columns.extend(columns);
        Ok(self)
    }

    /// Append rows from any [`TrackSpec`], flattening nested lists.
    pub fn add_rows(&mut self, spec: impl Into<TrackSpec>) -> Result<&mut Self, ConfigError> {
        let rows = spec.into().into_rows()?;
        self.rows.extend(rows);
        Ok(self)
    }

    /// Consuming form of [`Grid::add_columns`].
    pub fn with_columns(mut self, spec: impl Into<TrackSpec>) -> Result<Self, ConfigError> {
        self.add_columns(spec)?;
        Ok(self)
    }

    /// Consuming form of [`Grid::add_rows`].
    pub fn with_rows(mut self, spec: impl Into<TrackSpec>) -> Result<Self, ConfigError> {
        self.add_rows(spec)?;
        Ok(self)
    }

    /// Append a child in the next free cell.
    #[must_use]
    pub fn child(mut self, child: impl Into<Element>) -> Self {
        self.push(child);
        self
    }

    /// Append a child at an explicit cell.
    #[must_use]
    pub fn cell(mut self, row: usize, column: usize, child: impl Into<Element>) -> Self {
        self.push_at(CellPos::new(row, column), child);
        self
    }

    pub fn push(&mut self, child: impl Into<Element>) {
        self.children.push(child.into());
        self.placements.push(None);
    }

    pub fn push_at(&mut self, pos: CellPos, child: impl Into<Element>) {
        self.children.push(child.into());
        self.placements.push(Some(pos));
    }

    /// Assign every child a cell for a grid `columns` wide.
    fn place(&self, columns: usize) -> Result<Vec<CellPos>, ConfigError> {
        let mut taken = HashSet::new();
        for pos in self.placements.iter().flatten() {
            if pos.column >= columns {
                return Err(ConfigError::CellOutOfRange {
                    column: pos.column,
                    columns,
                });
            }
            if pos.row >= MAX_ROWS {
                return Err(ConfigError::RowOutOfRange {
                    row: pos.row,
                    limit: MAX_ROWS,
                });
            }
            if !taken.insert(*pos) {
                cellfmt_core::warn!(
                    row = pos.row,
                    column = pos.column,
                    "grid cell shared by several children"
                );
            }
        }

        let mut next = 0usize;
        let mut cells = Vec::with_capacity(self.placements.len());
        for placement in &self.placements {
            let pos = match placement {
                Some(pos) => *pos,
                None => loop {
                    let pos = CellPos::new(next / columns, next % columns);
                    if pos.row >= MAX_ROWS {
                        return Err(ConfigError::RowOutOfRange {
                            row: pos.row,
                            limit: MAX_ROWS,
                        });
                    }
                    next += 1;
                    if taken.insert(pos) {
                        break pos;
                    }
                },
            };
            cells.push(pos);
        }
        Ok(cells)
    }
}

/// Largest extent among the children in one track, measuring each at
/// `available(pos)`. The first measure failure is parked in `failure`.
fn track_extent(
    children: &mut [Element],
    cells: &[CellPos],
    in_track: impl Fn(&CellPos) -> bool,
    available: impl Fn(&CellPos) -> Size,
    extent: impl Fn(Size) -> u32,
    failure: &mut Option<LayoutError>,
) -> u32 {
    let mut max = 0;
    for (child, pos) in children.iter_mut().zip(cells) {
        if !in_track(pos) {
            continue;
        }
        match child.measure(available(pos)) {
            Ok(()) => max = max.max(extent(child.desired_size())),
            Err(err) => {
                failure.get_or_insert(err);
            }
        }
    }
    max
}

impl BlockElement for Grid {
    fn block(&self) -> &Block {
        &self.block
    }

    fn block_mut(&mut self) -> &mut Block {
        &mut self.block
    }

    fn measure_override(&mut self, available: Size) -> Result<Size, LayoutError> {
        self.resolved = ResolvedTracks::default();

        let column_lengths: SmallVec<[GridLength; 8]> =
            self.columns.iter().map(|c| c.width).collect();
        for length in &column_lengths {
            length.validate()?;
        }
        if column_lengths.is_empty() {
            return Ok(Size::EMPTY);
        }

        let cells = self.place(column_lengths.len())?;
        let mut row_count = self.rows.len();
        for pos in &cells {
            let needed = pos.row.checked_add(1).ok_or(ConfigError::RowOutOfRange {
                row: pos.row,
                limit: MAX_ROWS,
            })?;
            row_count = row_count.max(needed);
        }
        let mut row_lengths: SmallVec<[GridLength; 8]> =
            self.rows.iter().map(|r| r.height).collect();
        row_lengths.resize(row_count, GridLength::Auto);
        for length in &row_lengths {
            length.validate()?;
        }
        if row_lengths.is_empty() {
            return Ok(Size::EMPTY);
        }

        let children = &mut self.children;
        let mut failure = None;

        let widths = resolve_tracks(&column_lengths, available.width, |c| {
            track_extent(
                children.as_mut_slice(),
                &cells,
                |pos| pos.column == c,
                |_| Size::INFINITE,
                |d| d.width,
                &mut failure,
            )
        });
        if let Some(err) = failure.take() {
            return Err(err);
        }

        let heights = resolve_tracks(&row_lengths, available.height, |r| {
            track_extent(
                children.as_mut_slice(),
                &cells,
                |pos| pos.row == r,
                |pos| Size::new(widths[pos.column], INFINITE),
                |d| d.height,
                &mut failure,
            )
        });
        if let Some(err) = failure.take() {
            return Err(err);
        }

        for (child, pos) in children.iter_mut().zip(&cells) {
            child.measure(Size::new(widths[pos.column], heights[pos.row]))?;
        }

        let desired = Size::new(total_extent(&widths), total_extent(&heights));
        cellfmt_core::debug!(
            columns = ?widths,
            rows = ?heights,
            "grid tracks resolved"
        );
        self.resolved = ResolvedTracks {
            columns: widths,
            rows: heights,
            cells,
        };
        Ok(desired)
    }

    fn arrange_override(&mut self, final_size: Size) -> Size {
        let xs = track_offsets(&self.resolved.columns);
        let ys = track_offsets(&self.resolved.rows);
        let to_pos = |v: u32| i32::try_from(v).unwrap_or(i32::MAX);

        for (child, pos) in self.children.iter_mut().zip(&self.resolved.cells) {
            let rect = Rect::new(
                to_pos(xs[pos.column]),
                to_pos(ys[pos.row]),
                self.resolved.columns[pos.column],
                self.resolved.rows[pos.row],
            );
            child.arrange(rect);
        }
        final_size
    }

    fn children(&self) -> &[Element] {
        &self.children
    }
}
