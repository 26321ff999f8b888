use super::*;

#[test]
fn test_row_of_matrix() {
    let t = Tensor::new(vec![1.0, 2.0, 3.0, 4.0, 5.0, 6.0], vec![3, 2]).unwrap();
    let r = t.row(1).unwrap();
    assert_eq!(r.shape(), vec![2]);
    assert_eq!(r.get_f32_data().unwrap(), vec![3.0, 4.0]);
}

#[test]
fn test_row_of_vector_is_scalar() {
    let t = Tensor::new_i64(vec![10, 20, 30], vec![3]).unwrap();
    let r = t.row(2).unwrap();
    assert!(r.is_scalar());
    assert_eq!(r.get_i64_data().unwrap(), vec![30]);
}

#[test]
fn test_row_out_of_bounds() {
    let t = Tensor::new(vec![1.0, 2.0], vec![1, 2]).unwrap();
    match t.row(1) {
        Err(WeakLabError::IndexOutOfBounds { index, shape }) => {
            assert_eq!(index, vec![1]);
            assert_eq!(shape, vec![1, 2]);
        }
        other => panic!("Expected IndexOutOfBounds, got {:?}", other),
    }
}

#[test]
fn test_row_of_scalar_fails() {
    let err = Tensor::scalar(1.0).row(0).unwrap_err();
    assert_eq!(err, WeakLabError::RankMismatch { expected: 1, actual: 0 });
}

#[test]
fn test_flatten() {
    let t = Tensor::new_f64(vec![1.0, 2.0, 3.0, 4.0], vec![2, 2]).unwrap();
    let flat = t.flatten();
    assert_eq!(flat.shape(), vec![4]);
    assert_eq!(flat.get_f64_data().unwrap(), vec![1.0, 2.0, 3.0, 4.0]);
    assert_eq!(Tensor::scalar(2.0).flatten().shape(), vec![1]);
}
