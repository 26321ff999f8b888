use log::warn;
use rand::seq::SliceRandom;
use rand::Rng;

/// Converts per-split fractions to integer counts for a pool of `n` rows.
///
/// Every fraction is rounded half-to-even, then the last count is forced to
/// `n - sum(earlier counts)` so the counts add up to `n`. The last count is
/// negative when the earlier counts already overshoot `n`.
pub(crate) fn fractions_to_counts(fractions: &[f64], n: usize) -> Vec<i64> {
    let mut counts: Vec<i64> = fractions
        .iter()
        .map(|f| (n as f64 * f).round_ties_even() as i64)
        .collect();
    if let Some((last, earlier)) = counts.split_last_mut() {
        *last = n as i64 - earlier.iter().sum::<i64>();
    }
    counts
}

/// Running sum of `counts` with a leading zero, clamped to `0..=pool_len`.
///
/// The K+1 boundaries are non-decreasing and end at `pool_len`, so the ranges
/// between consecutive boundaries partition the pool even when the last count
/// is negative (the overshooting splits are simply cut short).
pub(crate) fn boundaries(counts: &[i64], pool_len: usize) -> Vec<usize> {
    let mut bounds = Vec::with_capacity(counts.len() + 1);
    bounds.push(0);
    let mut running = 0i64;
    for &count in counts {
        running += count;
        bounds.push(running.clamp(0, pool_len as i64) as usize);
    }
    bounds
}

/// Distributes every pool across `fractions.len()` splits.
///
/// Each pool is optionally shuffled with `rng`, cut into contiguous ranges by
/// its own counts, and the ranges are appended to the matching split. Pools
/// are processed in order and share `rng`, so pool order affects the result.
pub(crate) fn allocate<R: Rng + ?Sized>(
    pools: Vec<Vec<usize>>,
    fractions: &[f64],
    shuffle: bool,
    rng: &mut R,
) -> Vec<Vec<usize>> {
    let mut assignments: Vec<Vec<usize>> = vec![Vec::new(); fractions.len()];
    for mut pool in pools {
        if shuffle {
            pool.shuffle(rng);
        }
        let counts = fractions_to_counts(fractions, pool.len());
        if counts.last().map_or(false, |&last| last < 0) {
            warn!(
                "split counts {:?} overshoot a pool of {} samples; trailing splits get fewer samples",
                counts,
                pool.len()
            );
        }
        let bounds = boundaries(&counts, pool.len());
        for (i, assignment) in assignments.iter_mut().enumerate() {
            assignment.extend_from_slice(&pool[bounds[i]..bounds[i + 1]]);
        }
    }
    assignments
}

#[cfg(test)]
#[path = "allocate_test.rs"]
mod tests;
