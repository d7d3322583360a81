#![forbid(unsafe_code)]

//! Layout error types.

use cellfmt_core::geometry::{INFINITE, Size};

/// Invalid input detected while building a tree or setting up a grid.
///
/// Always raised before any layout pass runs on the offending data; the
/// caller recovers by not constructing the invalid tree.
#[derive(Debug, Clone, PartialEq)]
pub enum ConfigError {
    /// A star track weight that is zero, negative, or not finite.
    InvalidStarWeight { weight: f64 },
    /// A fixed track length below zero.
    NegativeLength { value: i64 },
    /// A track specifier that cannot be turned into a cell count.
    UnconvertibleTrack { type_name: &'static str },
    /// A fixed track length too large to be a finite cell count.
    LengthTooLarge { value: i64 },
    /// A grid child addressing a column outside the declared columns.
    CellOutOfRange { column: usize, columns: usize },
    /// A grid child addressing a row at or past the grid's row limit.
    RowOutOfRange { row: usize, limit: usize },
}

impl core::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Self::InvalidStarWeight { weight } => {
                write!(f, "star weight must be positive and finite, got {weight}")
            }
            Self::NegativeLength { value } => {
                write!(f, "char length must not be negative, got {value}")
            }
            Self::UnconvertibleTrack { type_name } => {
                write!(f, "value of type '{type_name}' cannot be converted to a grid track")
            }
            Self::LengthTooLarge { value } => {
                write!(f, "char length must be below {INFINITE}, got {value}")
            }
            Self::CellOutOfRange { column, columns } => write!(
                f,
                "grid cell column {column} is outside the {columns} declared columns"
            ),
            Self::RowOutOfRange { row, limit } => {
                write!(f, "grid cell row {row} is outside the {limit} allowed rows")
            }
        }
    }
}

impl std::error::Error for ConfigError {}

/// Failure of a measure pass.
#[derive(Debug, Clone, PartialEq)]
pub enum LayoutError {
    /// Invalid configuration discovered while laying out.
    Config(ConfigError),
    /// A measure override reported an infinite size. This is a bug in the
    /// element implementation and aborts the whole pass.
    InfiniteDesiredSize { element: &'static str, size: Size },
}

impl core::fmt::Display for LayoutError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Self::Config(err) => write!(f, "invalid layout configuration: {err}"),
            Self::InfiniteDesiredSize { element, size } => write!(
                f,
                "{element} measure override must return a finite size, got {}x{}",
                size.width, size.height
            ),
        }
    }
}

impl std::error::Error for LayoutError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Config(err) => Some(err),
            Self::InfiniteDesiredSize { .. } => None,
        }
    }
}

impl From<ConfigError> for LayoutError {
    fn from(err: ConfigError) -> Self {
        Self::Config(err)
    }
}
