use std::collections::BTreeMap;

use weaklab_core::Tensor;
use weaklab_data::{DictDataset, Field};

// Shared by several integration test crates; not every crate uses every helper.
#[allow(dead_code)]
pub(crate) fn init_logger() {
    let _ = env_logger::builder().is_test(true).try_init();
}

/// Asserts that `assignments` are disjoint and cover `0..n`.
#[allow(dead_code)]
pub(crate) fn assert_partition(assignments: &[Vec<usize>], n: usize) {
    let mut all: Vec<usize> = assignments.iter().flatten().copied().collect();
    all.sort_unstable();
    assert_eq!(all, (0..n).collect::<Vec<_>>(), "Assignments are not a partition of 0..{}", n);
}

/// A dataset of `n` variable-length token sequences, one id per sample and a
/// binary label that alternates every sample.
#[allow(dead_code)]
pub(crate) fn token_dataset(n: usize) -> DictDataset {
    let mut lengths = Vec::with_capacity(n);
    let mut tokens = Vec::new();
    for i in 0..n {
        let len = i % 3 + 1;
        lengths.push(len);
        tokens.extend((0..len).map(|t| (i * 10 + t + 1) as i64));
    }
    // Pad to the longest sequence so the column is a rectangular tensor.
    let width = lengths.iter().copied().max().unwrap_or(0);
    let mut padded = vec![0i64; n * width];
    let mut offset = 0;
    for (i, &len) in lengths.iter().enumerate() {
        padded[i * width..i * width + len].copy_from_slice(&tokens[offset..offset + len]);
        offset += len;
    }

    let mut x = BTreeMap::new();
    x.insert(
        "tokens".to_string(),
        Field::from(Tensor::new_i64(padded, vec![n, width]).expect("Test tensor creation failed")),
    );
    x.insert(
        "uid".to_string(),
        Field::from((0..n).map(|i| format!("uid-{}", i)).collect::<Vec<_>>()),
    );
    let mut y = BTreeMap::new();
    y.insert(
        "sentiment".to_string(),
        Field::from(
            Tensor::new_i64((0..n as i64).map(|i| i % 2).collect(), vec![n])
                .expect("Test tensor creation failed"),
        ),
    );
    DictDataset::new("reviews", "all", x, y).expect("Test dataset creation failed")
}
