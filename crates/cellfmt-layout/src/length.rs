#![forbid(unsafe_code)]

//! Grid track lengths.

use crate::error::ConfigError;
use cellfmt_core::geometry::INFINITE;
use std::str::FromStr;

/// Sizing policy of a grid column or row.
///
/// # Example
///
/// ```
/// use cellfmt_layout::GridLength;
///
/// assert_eq!("auto".parse::<GridLength>(), Ok(GridLength::Auto));
/// assert_eq!("2*".parse::<GridLength>(), Ok(GridLength::Star(2.0)));
/// assert_eq!("12".parse::<GridLength>(), Ok(GridLength::Char(12)));
/// assert!(GridLength::star(0.0).is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum GridLength {
    /// Size to the largest content in the track.
    #[default]
    Auto,
    /// Proportional share of the space left after fixed and auto tracks.
    Star(f64),
    /// Exactly this many cells.
    Char(u32),
}

impl GridLength {
    /// A star track, rejecting weights that are not positive and finite.
    pub fn star(weight: f64) -> Result<Self, ConfigError> {
        Self::Star(weight).validate()
    }

    /// A fixed track from a possibly negative count.
    ///
    /// Counts at or above [`INFINITE`] are rejected: a fixed track is always
    /// a finite number of cells.
    pub fn chars(n: i64) -> Result<Self, ConfigError> {
        if n < 0 {
            return Err(ConfigError::NegativeLength { value: n });
        }
        match u32::try_from(n) {
            Ok(cells) if cells < INFINITE => Ok(Self::Char(cells)),
            _ => Err(ConfigError::LengthTooLarge { value: n }),
        }
    }

    /// Check the invariants of a directly constructed value.
    pub fn validate(self) -> Result<Self, ConfigError> {
        match self {
            Self::Star(weight) if !(weight.is_finite() && weight > 0.0) => {
                Err(ConfigError::InvalidStarWeight { weight })
            }
            Self::Char(cells) if cells >= INFINITE => Err(ConfigError::LengthTooLarge {
                value: i64::from(cells),
            }),
            other => Ok(other),
        }
    }

    /// True for `Auto`.
    #[inline]
    pub const fn is_auto(&self) -> bool {
        matches!(self, Self::Auto)
    }

    /// True for `Star(_)`.
    #[inline]
    pub const fn is_star(&self) -> bool {
        matches!(self, Self::Star(_))
    }
}

impl core::fmt::Display for GridLength {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Self::Auto => f.write_str("auto"),
            Self::Star(w) if *w == 1.0 => f.write_str("*"),
            Self::Star(w) => write!(f, "{w}*"),
            Self::Char(n) => write!(f, "{n}"),
        }
    }
}

impl FromStr for GridLength {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        if s.eq_ignore_ascii_case("auto") {
            return Ok(Self::Auto);
        }
        if let Some(weight) = s.strip_suffix('*') {
            let weight = if weight.is_empty() {
                1.0
            } else {
                weight
                    .trim()
                    .parse::<f64>()
                    .map_err(|_| ConfigError::UnconvertibleTrack { type_name: "str" })?
            };
            return Self::star(weight);
        }
        let n = s
            .parse::<i64>()
            .map_err(|_| ConfigError::UnconvertibleTrack { type_name: "str" })?;
        Self::chars(n)
    }
}

impl From<u32> for GridLength {
    fn from(n: u32) -> Self {
        Self::Char(n)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn star_rejects_non_positive_and_non_finite() {
        assert!(GridLength::star(1.5).is_ok());
        for bad in [0.0, -1.0, f64::NAN, f64::INFINITY] {
            assert!(matches!(
                GridLength::star(bad),
                Err(ConfigError::InvalidStarWeight { .. })
            ));
        }
    }

    #[test]
    fn chars_rejects_negative() {
        assert_eq!(GridLength::chars(4), Ok(GridLength::Char(4)));
        assert_eq!(
            GridLength::chars(-1),
            Err(ConfigError::NegativeLength { value: -1 })
        );
    }

    #[test]
    fn char_lengths_stay_finite() {
        let max = i64::from(INFINITE);
        assert_eq!(GridLength::chars(max - 1), Ok(GridLength::Char(INFINITE - 1)));
        assert_eq!(
            GridLength::chars(max),
            Err(ConfigError::LengthTooLarge { value: max })
        );
        assert_eq!(
            GridLength::chars(i64::MAX),
            Err(ConfigError::LengthTooLarge { value: i64::MAX })
        );
        assert_eq!(
            GridLength::Char(u32::MAX).validate(),
            Err(ConfigError::LengthTooLarge { value: max })
        );
        assert!("4294967295".parse::<GridLength>().is_err());
    }

    #[test]
    fn display_and_parse_agree() {
        for len in [
            GridLength::Auto,
            GridLength::Star(1.0),
            GridLength::Star(2.5),
            GridLength::Char(7),
        ] {
            assert_eq!(len.to_string().parse::<GridLength>(), Ok(len));
        }
        assert!("wide".parse::<GridLength>().is_err());
        assert!("-3".parse::<GridLength>().is_err());
        assert!("0*".parse::<GridLength>().is_err());
    }
}
