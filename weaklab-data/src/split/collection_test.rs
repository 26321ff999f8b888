use super::*;
use ndarray::{arr0, array, Array2, IxDyn};

#[test]
fn test_sequence_keeps_original_order() {
    let items = vec!["a", "b", "c", "d", "e"];
    let taken = items.take_rows(&[4, 0, 2]).unwrap();
    assert_eq!(taken, vec!["a", "c", "e"]);
}

#[test]
fn test_sequence_out_of_range() {
    let items = vec![1, 2, 3];
    assert!(matches!(
        items.take_rows(&[3]),
        Err(WeakLabError::IndexOutOfBounds { .. })
    ));
}

#[test]
fn test_tensor_gathers_in_index_order() {
    let t = Tensor::new(vec![0.0, 1.0, 2.0, 3.0, 4.0, 5.0], vec![3, 2]).unwrap();
    assert_eq!(t.n_samples().unwrap(), 3);
    let taken = t.take_rows(&[2, 0]).unwrap();
    assert_eq!(taken.shape(), vec![2, 2]);
    assert_eq!(taken.get_f32_data().unwrap(), vec![4.0, 5.0, 0.0, 1.0]);
}

#[test]
fn test_scalar_tensor_is_unsupported() {
    let t = Tensor::scalar(1.0);
    match t.n_samples() {
        Err(WeakLabError::UnsupportedCollection { kind }) => assert_eq!(kind, "scalar tensor"),
        other => panic!("Expected UnsupportedCollection, got {:?}", other),
    }
    assert!(t.take_rows(&[]).is_err());
}

#[test]
fn test_sparse_gathers_in_index_order() {
    let m = sparse::from_triplets((3, 2), &[(0, 0, 1.0), (1, 1, 2.0), (2, 0, 3.0)]).unwrap();
    assert_eq!(m.n_samples().unwrap(), 3);
    let taken = m.take_rows(&[2, 1]).unwrap();
    assert_eq!((taken.nrows(), taken.ncols()), (2, 2));
    assert_eq!(
        sparse::to_tensor(&taken).unwrap().get_f64_data().unwrap(),
        vec![3.0, 0.0, 0.0, 2.0]
    );
    assert!(m.take_rows(&[3]).is_err());
}

#[test]
fn test_dense_array_rows() {
    let a: Array2<f64> = array![[1.0, 2.0], [3.0, 4.0], [5.0, 6.0]];
    assert_eq!(a.n_samples().unwrap(), 3);
    let taken = a.take_rows(&[1, 2]).unwrap();
    assert_eq!(taken, array![[3.0, 4.0], [5.0, 6.0]]);
    assert!(a.take_rows(&[3]).is_err());
}

#[test]
fn test_zero_dim_dense_is_unsupported() {
    let a = arr0(1.0).into_dyn();
    let collection: Collection<u8> = Collection::Dense(a);
    assert_eq!(collection.kind(), "0-dimensional dense array");
    match collection.n_samples() {
        Err(WeakLabError::UnsupportedCollection { kind }) => {
            assert_eq!(kind, "0-dimensional dense array")
        }
        other => panic!("Expected UnsupportedCollection, got {:?}", other),
    }
}

#[test]
fn test_collection_dispatch() {
    let dense = ArrayD::from_shape_vec(IxDyn(&[4]), vec![0.0, 1.0, 2.0, 3.0]).unwrap();
    let collections: Vec<Collection<i32>> = vec![
        vec![10, 11, 12, 13].into(),
        dense.into(),
        Tensor::new_i64(vec![0, 1, 2, 3], vec![4]).unwrap().into(),
    ];
    for c in &collections {
        assert_eq!(c.n_samples().unwrap(), 4);
    }
    let seq = collections[0].take_rows(&[3, 1]).unwrap();
    assert_eq!(seq.as_sequence(), Some(&[11, 13][..]));
    let dense = collections[1].take_rows(&[3, 1]).unwrap();
    assert_eq!(dense.as_dense().unwrap().as_slice().unwrap(), &[3.0, 1.0]);
    let tensor = collections[2].take_rows(&[3, 1]).unwrap();
    assert_eq!(tensor.as_tensor().unwrap().get_i64_data().unwrap(), vec![3, 1]);
}

#[test]
fn test_collection_kinds() {
    let seq: Collection<u8> = Collection::Sequence(vec![]);
    assert_eq!(seq.kind(), "sequence");
    let scalar: Collection<u8> = Tensor::scalar_i64(3).into();
    assert_eq!(scalar.kind(), "scalar tensor");
    let sparse: Collection<u8> = sparse::from_triplets((1, 1), &[]).unwrap().into();
    assert_eq!(sparse.kind(), "sparse matrix");
}
