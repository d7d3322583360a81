#![forbid(unsafe_code)]

//! Grid track resolution.
//!
//! Resolves one axis of a grid (all columns, or all rows) from the tracks'
//! [`GridLength`]s and the available extent on that axis:
//!
//! 1. `Char(n)` tracks take exactly `n` cells.
//! 2. `Auto` tracks take the largest content extent among their cells.
//! 3. `Star(w)` tracks split whatever is left after fixed and auto tracks, in
//!    proportion to `w`, with largest-remainder rounding so the star total is
//!    exactly the leftover.
//!
//! With an infinite extent there is no leftover; star tracks fall back to
//! their content extent so the axis still has a finite total.
//!
//! Resolving columns before rows matters: row content depends on wrapped
//! text, which depends on the already-resolved column widths. This module
//! only resolves one axis at a time; the caller supplies content extents
//! measured in the right order.

use crate::length::GridLength;
use crate::rounding::distribute_by_weight;
use cellfmt_core::geometry::{INFINITE, add_dim};

/// Resolve track sizes along one axis.
///
/// `content(i)` must return the content extent of track `i`. It is called
/// once for every `Auto` track and, when `available` is infinite, once for
/// every `Star` track. It is never called for `Char` tracks.
///
/// # Example
///
/// ```
/// use cellfmt_layout::{GridLength, resolve_tracks};
///
/// let tracks = [GridLength::Char(4), GridLength::Auto, GridLength::Star(1.0)];
/// let sizes = resolve_tracks(&tracks, 20, |_| 6);
/// assert_eq!(sizes, vec![4, 6, 10]);
/// ```
pub fn resolve_tracks<F>(lengths: &[GridLength], available: u32, mut content: F) -> Vec<u32>
where
    F: FnMut(usize) -> u32,
{
    let unconstrained = available == INFINITE;
    let mut sizes = vec![0u32; lengths.len()];
    let mut consumed = 0u32;
    let mut star_indices = Vec::new();

    for (i, length) in lengths.iter().enumerate() {
        match *length {
            GridLength::Char(n) => {
                sizes[i] = n;
                consumed = add_dim(consumed, n);
            }
            GridLength::Auto => {
                let extent = content(i);
                sizes[i] = extent;
                consumed = add_dim(consumed, extent);
            }
            GridLength::Star(_) if unconstrained => {
                sizes[i] = content(i);
            }
            GridLength::Star(_) => star_indices.push(i),
        }
    }

    if !star_indices.is_empty() {
        let leftover = available.saturating_sub(consumed);
        let weights: Vec<f64> = star_indices
            .iter()
            .map(|&i| match lengths[i] {
                GridLength::Star(w) => w,
                _ => 0.0,
            })
            .collect();
        let shares = distribute_by_weight(&weights, leftover);
        for (&i, share) in star_indices.iter().zip(shares) {
            sizes[i] = share;
        }
    }

    cellfmt_core::debug!(
        tracks = lengths.len(),
        available,
        total = total_extent(&sizes),
        "tracks resolved"
    );
    sizes
}

/// Sum of resolved track sizes.
pub fn total_extent(sizes: &[u32]) -> u32 {
    sizes.iter().fold(0, |acc, &s| add_dim(acc, s))
}

/// Leading edge of each track, relative to the first track.
pub fn track_offsets(sizes: &[u32]) -> Vec<u32> {
    let mut offsets = Vec::with_capacity(sizes.len());
    let mut at = 0u32;
    for &s in sizes {
        offsets.push(at);
        at = add_dim(at, s);
    }
    offsets
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_axis_resolves_to_nothing() {
        assert!(resolve_tracks(&[], 10, |_| 1).is_empty());
        assert_eq!(total_extent(&[]), 0);
    }

    #[test]
    fn fixed_and_auto_consume_before_stars() {
        let tracks = [
            GridLength::Char(3),
            GridLength::Auto,
            GridLength::Star(1.0),
            GridLength::Star(3.0),
        ];
        let sizes = resolve_tracks(&tracks, 25, |i| if i == 1 { 6 } else { 99 });
        assert_eq!(sizes, vec![3, 6, 4, 12]);
        assert_eq!(total_extent(&sizes), 25);
    }

    #[test]
    fn stars_get_nothing_when_fixed_overflows() {
        let tracks = [GridLength::Char(8), GridLength::Star(1.0)];
        assert_eq!(resolve_tracks(&tracks, 5, |_| 0), vec![8, 0]);
    }

    #[test]
    fn infinite_extent_sizes_stars_to_content() {
        let tracks = [GridLength::Star(1.0), GridLength::Star(5.0), GridLength::Char(2)];
        let sizes = resolve_tracks(&tracks, INFINITE, |i| [7, 3, 0][i]);
        assert_eq!(sizes, vec![7, 3, 2]);
    }

    #[test]
    fn content_is_not_queried_for_fixed_or_finite_stars() {
        let tracks = [GridLength::Char(2), GridLength::Star(1.0), GridLength::Auto];
        let mut queried = Vec::new();
        resolve_tracks(&tracks, 10, |i| {
            queried.push(i);
            1
        });
        assert_eq!(queried, vec![2]);
    }

    #[test]
    fn zero_width_tracks_keep_their_index() {
        let tracks = [GridLength::Star(1.0), GridLength::Char(0), GridLength::Star(1.0)];
        let sizes = resolve_tracks(&tracks, 1, |_| 0);
        assert_eq!(sizes.len(), 3);
        assert_eq!(sizes, vec![1, 0, 0]);
        assert_eq!(track_offsets(&sizes), vec![0, 1, 1]);
    }
}
