use std::collections::HashMap;
use std::hash::Hash;

use weaklab_core::WeakLabError;

/// Groups the row ids `0..n` into sampling pools.
///
/// Without a stratification key there is a single pool holding every row.
/// With one, there is a pool per distinct label, in order of first
/// appearance, each holding its rows in their original order.
pub(crate) fn build_pools<L: Eq + Hash>(
    n: usize,
    stratify_by: Option<&[L]>,
) -> Result<Vec<Vec<usize>>, WeakLabError> {
    let labels = match stratify_by {
        None => return Ok(vec![(0..n).collect()]),
        Some(labels) => labels,
    };
    if labels.len() != n {
        return Err(WeakLabError::LengthMismatch {
            expected: n,
            actual: labels.len(),
            context: "stratify_by".to_string(),
        });
    }

    let mut pool_of: HashMap<&L, usize> = HashMap::new();
    let mut pools: Vec<Vec<usize>> = Vec::new();
    for (i, label) in labels.iter().enumerate() {
        let slot = *pool_of.entry(label).or_insert_with(|| {
            pools.push(Vec::new());
            pools.len() - 1
        });
        pools[slot].push(i);
    }
    Ok(pools)
}
