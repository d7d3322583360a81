#![forbid(unsafe_code)]

//! Heterogeneous grid track specifiers.
//!
//! Grid columns and rows can be given as a mix of plain numbers, parsed
//! strings, [`GridLength`]s, ready-made [`Column`]/[`Row`] definitions and
//! nested lists. [`TrackSpec`] captures any of these; the [`tracks!`] macro
//! builds one from a list of expressions.
//!
//! ```
//! use cellfmt_elements::{Column, Grid, tracks};
//! use cellfmt_layout::GridLength;
//!
//! let mut grid = Grid::new();
//! grid.add_columns(tracks![
//!     5,
//!     GridLength::Char(3),
//!     tracks![GridLength::Star(1.0), None::<GridLength>],
//!     Column::new(GridLength::Auto),
//! ])
//! .unwrap();
//! assert_eq!(grid.columns().len(), 4);
//! ```
//!
//! [`tracks!`]: crate::tracks

use cellfmt_layout::{ConfigError, GridLength};

use crate::grid::{Column, Row};

/// One grid track specifier, or a list of them.
#[derive(Debug, Clone, PartialEq)]
pub enum TrackSpec {
    /// Contributes nothing.
    Skip,
    /// A fixed length in cells.
    Integer(i64),
    /// A fixed length, rounded half to even.
    Float(f64),
    /// A fixed length written as a decimal integer.
    Text(String),
    Length(GridLength),
    Column(Column),
    Row(Row),
    /// Flattened in order.
    Many(Vec<TrackSpec>),
}

impl TrackSpec {
    /// Flatten into column definitions.
    ///
    /// Fails on the first specifier that cannot become a column; a [`Row`]
    /// is not a column.
    pub fn into_columns(self) -> Result<Vec<Column>, ConfigError> {
        let mut out = Vec::new();
        self.flatten(&mut out, &|spec| match spec {
            TrackSpec::Column(column) => column.width.validate().map(|_| column),
            TrackSpec::Row(_) => Err(ConfigError::UnconvertibleTrack { type_name: "Row" }),
            other => other.into_length().map(Column::new),
        })?;
        Ok(out)
    }

    /// Flatten into row definitions. A [`Column`] is not a row.
    pub fn into_rows(self) -> Result<Vec<Row>, ConfigError> {
        let mut out = Vec::new();
        self.flatten(&mut out, &|spec| match spec {
            TrackSpec::Row(row) => row.height.validate().map(|_| row),
            TrackSpec::Column(_) => Err(ConfigError::UnconvertibleTrack {
                type_name: "Column",
            }),
            other => other.into_length().map(Row::new),
        })?;
        Ok(out)
    }

    fn flatten<T>(
        self,
        out: &mut Vec<T>,
        convert: &impl Fn(TrackSpec) -> Result<T, ConfigError>,
    ) -> Result<(), ConfigError> {
        match self {
            Self::Skip => Ok(()),
            Self::Many(items) => items.into_iter().try_for_each(|item| item.flatten(out, convert)),
            single => {
                out.push(convert(single)?);
                Ok(())
            }
        }
    }

    /// Length of a single non-definition specifier.
    fn into_length(self) -> Result<GridLength, ConfigError> {
        match self {
            Self::Integer(n) => GridLength::chars(n),
            Self::Float(f) => {
                let rounded = f.round_ties_even();
                if !rounded.is_finite() || rounded < i64::MIN as f64 || rounded > i64::MAX as f64 {
                    return Err(ConfigError::UnconvertibleTrack { type_name: "f64" });
                }
                GridLength::chars(rounded as i64)
            }
            Self::Text(s) => s
                .trim()
                .parse::<i64>()
                .map_err(|_| ConfigError::UnconvertibleTrack { type_name: "str" })
                .and_then(GridLength::chars),
            Self::Length(length) => length.validate(),
            Self::Column(_) => Err(ConfigError::UnconvertibleTrack {
                type_name: "Column",
            }),
            Self::Row(_) => Err(ConfigError::UnconvertibleTrack { type_name: "Row" }),
            Self::Skip | Self::Many(_) => Err(ConfigError::UnconvertibleTrack {
                type_name: "TrackSpec",
            }),
        }
    }
}

/// Build a [`TrackSpec`] list from heterogeneous values.
///
/// Each item is converted with `TrackSpec::from`, so integers, floats,
/// strings, `GridLength`, `Column`, `Row`, `Option<_>`, `Vec<_>` and nested
/// `tracks![...]` are all accepted.
#[macro_export]
macro_rules! tracks {
    ($($item:expr),* $(,)?) => {
        $crate::TrackSpec::Many(::std::vec![$($crate::TrackSpec::from($item)),*])
    };
}

macro_rules! from_signed {
    ($($t:ty),*) => {$(
        impl From<$t> for TrackSpec {
            fn from(n: $t) -> Self {
                Self::Integer(i64::from(n))
            }
        }
    )*};
}

macro_rules! from_unsigned {
    ($($t:ty),*) => {$(
        impl From<$t> for TrackSpec {
            fn from(n: $t) -> Self {
                Self::Integer(i64::try_from(n).unwrap_or(i64::MAX))
            }
        }
    )*};
}

from_signed!(i8, i16, i32, i64);
from_unsigned!(u8, u16, u32, u64, usize);

impl From<isize> for TrackSpec {
    fn from(n: isize) -> Self {
        Self::Integer(n as i64)
    }
}

impl From<f64> for TrackSpec {
    fn from(f: f64) -> Self {
        Self::Float(f)
    }
}

impl From<f32> for TrackSpec {
    fn from(f: f32) -> Self {
        Self::Float(f64::from(f))
    }
}

impl From<&str> for TrackSpec {
    fn from(s: &str) -> Self {
        Self::Text(s.to_owned())
    }
}

impl From<String> for TrackSpec {
    fn from(s: String) -> Self {
        Self::Text(s)
    }
}

impl From<GridLength> for TrackSpec {
    fn from(length: GridLength) -> Self {
        Self::Length(length)
    }
}

impl From<Column> for TrackSpec {
    fn from(column: Column) -> Self {
        Self::Column(column)
    }
}

impl From<Row> for TrackSpec {
    fn from(row: Row) -> Self {
        Self::Row(row)
    }
}

impl<T: Into<TrackSpec>> From<Option<T>> for TrackSpec {
    fn from(value: Option<T>) -> Self {
        value.map_or(Self::Skip, Into::into)
    }
}

impl<T: Into<TrackSpec>> From<Vec<T>> for TrackSpec {
    fn from(items: Vec<T>) -> Self {
        Self::Many(items.into_iter().map(Into::into).collect())
    }
}
