use weaklab_core::ops::{list_to_tensor, pad_batch};
use weaklab_core::{sparse, DType, Tensor, WeakLabError};

mod common;
use common::{feature_rows, token_seq};

#[test]
fn test_rows_then_list_to_tensor_round_trips_a_matrix() {
    let x = feature_rows(&[[1.0, 2.0], [3.0, 4.0], [5.0, 6.0]]);
    let rows: Vec<Tensor> = (0..3).map(|i| x.row(i).unwrap()).collect();
    // 1-D rows of equal length are padded, which is a no-op here.
    let batch = list_to_tensor(&rows).unwrap();
    assert_eq!(batch, x);
}

#[test]
fn test_shuffled_gather_then_batch() {
    let x = feature_rows(&[[1.0, 2.0], [3.0, 4.0], [5.0, 6.0]]);
    let picked = x.index_select(0, &[2, 0]).unwrap();
    assert_eq!(picked.get_f32_data().unwrap(), vec![5.0, 6.0, 1.0, 2.0]);
}

#[test]
fn test_token_batches_pad_and_mask() {
    let _ = env_logger::builder().is_test(true).try_init();
    let batch = [token_seq(&[7, 8, 9]), token_seq(&[7])];
    let (padded, mask) = pad_batch(&batch, 0, 0.0, false).unwrap();
    assert_eq!(padded.dtype(), DType::I64);
    assert_eq!(padded.get_i64_data().unwrap(), vec![7, 8, 9, 7, 0, 0]);
    assert_eq!(mask.get_i64_data().unwrap(), vec![0, 0, 0, 0, 1, 1]);
}

#[test]
fn test_sparse_rows_match_dense_rows() {
    let matrix = sparse::from_triplets((3, 2), &[(0, 1, 1.0), (2, 0, 4.0)]).unwrap();
    let dense = sparse::to_tensor(&matrix).unwrap();
    let order = [2, 1, 0];
    let from_sparse = sparse::to_tensor(&sparse::select_rows(&matrix, &order).unwrap()).unwrap();
    let from_dense = dense.index_select(0, &order).unwrap();
    assert_eq!(from_sparse, from_dense);
}

#[test]
fn test_errors_are_displayable() {
    let err = list_to_tensor(&[]).unwrap_err();
    assert_eq!(err, WeakLabError::EmptyTensorList);
    assert_eq!(err.to_string(), "Cannot stack an empty list of tensors");
}
