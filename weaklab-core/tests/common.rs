use weaklab_core::Tensor;

// Shared by several integration test crates; not every crate uses every helper.
#[allow(dead_code)]
pub(crate) fn token_seq(tokens: &[i64]) -> Tensor {
    Tensor::new_i64(tokens.to_vec(), vec![tokens.len()]).expect("Test tensor creation failed")
}

#[allow(dead_code)]
pub(crate) fn feature_rows(rows: &[[f32; 2]]) -> Tensor {
    let data = rows.iter().flat_map(|r| r.iter().copied()).collect();
    Tensor::new(data, vec![rows.len(), 2]).expect("Test tensor creation failed")
}
