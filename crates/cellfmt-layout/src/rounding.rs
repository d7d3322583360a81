#![forbid(unsafe_code)]

//! Integer apportionment of cells by weight.
//!
//! # Algorithm: Largest Remainder (Hamilton's method)
//!
//! Given weights `w_i` and an integer total `T`:
//!
//! 1. **Quota**: `q_i = T * w_i / Σw`.
//! 2. **Floor phase**: `x_i = floor(q_i)`.
//! 3. **Deficit**: `D = T − Σ x_i` cells remain.
//! 4. **Priority**: rank by fractional remainder `q_i − x_i` descending,
//!    ties broken by lower index.
//! 5. **Distribute**: one extra cell to each of the top `D` entries.
//!
//! # Properties
//!
//! 1. **Sum conservation**: `Σ x_i = T` exactly whenever some weight is
//!    positive.
//! 2. **Bounded displacement**: each `x_i` is `floor(q_i)` or `ceil(q_i)`.
//! 3. **Deterministic**: identical inputs give identical outputs.

use smallvec::SmallVec;

/// Split `total` cells across `weights` with exact sum conservation.
///
/// Non-positive and non-finite weights receive nothing. If no weight is
/// positive every entry is zero.
///
/// # Example
///
/// ```
/// use cellfmt_layout::distribute_by_weight;
///
/// assert_eq!(distribute_by_weight(&[1.0, 1.0, 1.0], 10), vec![4, 3, 3]);
/// assert_eq!(distribute_by_weight(&[1.0, 2.0], 7), vec![2, 5]);
/// ```
pub fn distribute_by_weight(weights: &[f64], total: u32) -> Vec<u32> {
    let usable = |w: f64| if w.is_finite() && w > 0.0 { w } else { 0.0 };
    let weight_sum: f64 = weights.iter().copied().map(usable).sum();
    if weights.is_empty() || weight_sum <= 0.0 {
        return vec![0; weights.len()];
    }

    let quotas: SmallVec<[f64; 8]> = weights
        .iter()
        .map(|&w| f64::from(total) * usable(w) / weight_sum)
        .collect();
    round_largest_remainder(&quotas, total)
}

/// Round real-valued quotas to integers summing to exactly `total`.
///
/// # Failure Modes
///
/// - **Floating drift**: floors can overshoot `total` by a cell when quotas
///   were computed in floating point; the excess is taken back from the
///   largest entries.
pub fn round_largest_remainder(quotas: &[f64], total: u32) -> Vec<u32> {
    let n = quotas.len();
    if n == 0 {
        return Vec::new();
    }

    let floors: Vec<u32> = quotas
        .iter()
        .map(|&q| q.max(0.0).floor().min(f64::from(u32::MAX)) as u32)
        .collect();
    let floor_sum: u64 = floors.iter().map(|&f| u64::from(f)).sum();

    if floor_sum > u64::from(total) {
        return redistribute_overflow(floors, total);
    }

    let deficit = (u64::from(total) - floor_sum) as usize;
    if deficit == 0 {
        return floors;
    }

    let mut priority: SmallVec<[(usize, f64); 8]> = quotas
        .iter()
        .enumerate()
        .map(|(i, &q)| (i, q - f64::from(floors[i])))
        .collect();
    priority.sort_by(|a, b| {
        b.1.partial_cmp(&a.1)
            .unwrap_or(std::cmp::Ordering::Equal)
            .then_with(|| a.0.cmp(&b.0))
    });

    let mut result = floors;
    for &(i, _) in priority.iter().cycle().take(deficit) {
        result[i] = result[i].saturating_add(1);
    }
    result
}

/// Take cells back from the largest entries until the sum fits `total`.
fn redistribute_overflow(mut values: Vec<u32>, total: u32) -> Vec<u32> {
    let mut sum: u64 = values.iter().map(|&v| u64::from(v)).sum();
    while sum > u64::from(total) {
        let Some((idx, _)) = values
            .iter()
            .enumerate()
            .filter(|(_, v)| **v > 0)
            .max_by(|a, b| a.1.cmp(b.1).then_with(|| b.0.cmp(&a.0)))
        else {
            break;
        };
        values[idx] -= 1;
        sum -= 1;
    }
    values
}
